//! RGB565 colors as sent on the wire (big endian, 5-6-5)

use embedded_graphics::pixelcolor::raw::{RawData, RawU16};
use embedded_graphics::pixelcolor::Rgb565;

pub const BLACK: u16 = 0x0000;
pub const NAVY: u16 = 0x000F;
pub const DARK_GREEN: u16 = 0x03E0;
pub const DARK_CYAN: u16 = 0x03EF;
pub const MAROON: u16 = 0x7800;
pub const PURPLE: u16 = 0x780F;
pub const OLIVE: u16 = 0x7BE0;
pub const LIGHT_GREY: u16 = 0xC618;
pub const DARK_GREY: u16 = 0x7BEF;
pub const BLUE: u16 = 0x001F;
pub const GREEN: u16 = 0x07E0;
pub const CYAN: u16 = 0x07FF;
pub const RED: u16 = 0xF800;
pub const MAGENTA: u16 = 0xF81F;
pub const YELLOW: u16 = 0xFFE0;
pub const WHITE: u16 = 0xFFFF;
pub const ORANGE: u16 = 0xFD20;

/// Pack 8-bit channels into RGB565
pub const fn rgb565(r: u8, g: u8, b: u8) -> u16 {
    ((r as u16 & 0xF8) << 8) | ((g as u16 & 0xFC) << 3) | (b as u16 >> 3)
}

/// Raw value of an embedded-graphics color
pub fn from_rgb565(color: Rgb565) -> u16 {
    RawU16::from(color).into_inner()
}
