//! Pin definitions for the ILI9341 display and the stopwatch peripherals
//!
//! GPIO numbers of the ESP32 DevKit wiring. The firmware takes the matching
//! `pins.gpioN` fields; these constants document the wiring in one place.

/// GPIO assignments
pub struct Pins;

impl Pins {
    // SPI display pins
    /// SPI clock
    pub const SCK: u8 = 18;
    /// SPI master out slave in
    pub const MOSI: u8 = 23;
    /// Chip select, active low
    pub const CS: u8 = 5;
    /// Data/Command control pin (High for data, Low for command)
    pub const DC: u8 = 2;
    /// Display reset, active low
    pub const RST: u8 = 15;
    /// Backlight, active high
    pub const BL: u8 = 13;

    // Buttons, active low with pull-ups
    /// Start/stop, input only pin with an external pull-up
    pub const BTN_START_STOP: u8 = 35;
    /// Reset
    pub const BTN_RESET: u8 = 22;
    /// Flip the screen
    pub const BTN_FUNCTION: u8 = 21;

    // Status LEDs, active low
    /// Frozen reading indicator
    pub const LED_RED: u8 = 4;
    /// Running indicator
    pub const LED_GREEN: u8 = 16;
    /// Unused, held off
    pub const LED_BLUE: u8 = 17;
}
