use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use image::imageops::FilterType;
use image::{GenericImageView, Rgb, RgbImage};

/// Splash size on the panel, kept in sync with `SPLASH_WIDTH`/`SPLASH_HEIGHT` in the firmware
const SPLASH_WIDTH: u32 = 160;
const SPLASH_HEIGHT: u32 = 120;

/// Convert a PNG image to big endian RGB565 at build time
fn convert_image_to_rgb565(
    input_path: &str,
    output_path: &str,
    target_width: u32,
    target_height: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed={}", input_path);

    if !Path::new(input_path).exists() {
        println!("cargo:warning=Image file '{}' not found, skipping conversion", input_path);
        // Empty blob so the build and `include_bytes!` still work
        File::create(output_path)?.write_all(&[])?;
        return Ok(());
    }

    let img = image::open(input_path)?;
    let (orig_width, orig_height) = img.dimensions();

    // Fit inside the target, keeping the aspect ratio
    let resized = img
        .resize(target_width, target_height, FilterType::Lanczos3)
        .to_rgb8();
    let (new_width, new_height) = resized.dimensions();
    println!(
        "cargo:warning=Splash {}x{} -> {}x{}",
        orig_width, orig_height, new_width, new_height
    );

    // Center on a black canvas of the exact target size
    let offset_x = (target_width - new_width) / 2;
    let offset_y = (target_height - new_height) / 2;
    let mut canvas = RgbImage::from_pixel(target_width, target_height, Rgb([0, 0, 0]));
    image::imageops::overlay(&mut canvas, &resized, offset_x.into(), offset_y.into());

    let mut buffer = Vec::with_capacity((target_width * target_height * 2) as usize);
    for Rgb([r, g, b]) in canvas.pixels() {
        let color = ((u16::from(*r) & 0xF8) << 8) | ((u16::from(*g) & 0xFC) << 3) | (u16::from(*b) >> 3);
        buffer.extend_from_slice(&color.to_be_bytes());
    }

    File::create(output_path)?.write_all(&buffer)?;
    println!("cargo:warning=RGB565 splash saved to: {}", output_path);
    Ok(())
}

fn main() {
    embuild::espidf::sysenv::output();

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let splash_output = format!("{}/splash.rgb565", out_dir);

    if let Err(e) = convert_image_to_rgb565(
        "assets/splash.png",
        &splash_output,
        SPLASH_WIDTH,
        SPLASH_HEIGHT,
    ) {
        println!("cargo:warning=Failed to convert assets/splash.png: {}", e);
        // Keep `include_bytes!` working
        let _ = File::create(&splash_output);
    }
}
