//! ILI9341 TFT Display Driver
//!
//! Blocking driver for the ILI9341 controller on a 4-wire SPI bus
//! (SCK, MOSI, D/C, CS) with separate reset and backlight lines.
//!
//! ### Layers
//! 1. [`interface`] - command and data phases on the bus, behind [`interface::Transport`]
//! 1. [`cmd`] - opcodes, command descriptors and the default init table
//! 1. [`stream`] - `MEM_WRITE` plus chunked pixel data through one scratch buffer
//! 1. [`driver`] - addressing, rotation and the drawing primitives
//! 1. [`text`] - glyphs and strings from a [`font::Font`]
//!
//! ### Usage
//! ```ignore
//! let interface = DisplayInterface::new(spi_bus, dc, cs);
//! let mut display = Ili9341::new(interface, rst, backlight, delay, PanelConfig::ili9341());
//! display.init()?;
//! display.set_rotation(Orientation::Landscape1)?;
//! display.draw_string(10, 10, "00:00.00", &font, color::WHITE, color::BLACK)?;
//! ```
#![allow(clippy::too_many_arguments)]

pub mod cmd;
#[allow(missing_docs)]
pub mod color;
pub mod config;
pub mod driver;
pub mod flag;
pub mod font;
pub mod graphics;
pub mod interface;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod orientation;
pub mod pins;
pub mod shared;
pub mod stream;
pub mod text;

/// Native display width, pixels horizontally in portrait
pub const WIDTH: u16 = 240;

/// Native display height, pixels vertically in portrait
pub const HEIGHT: u16 = 320;
