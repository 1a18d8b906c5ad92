#[cfg(target_os = "espidf")]
mod app;

// https://docs.esp-rs.org/esp-idf-svc/esp_idf_svc/
#[cfg(target_os = "espidf")]
fn main() -> anyhow::Result<()> {
    app::run()
}

#[cfg(not(target_os = "espidf"))]
fn main() {
    eprintln!("tft-stopwatch runs on an ESP32; build it for an espidf target");
}
