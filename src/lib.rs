//! Stopwatch firmware for an ESP32 with an ILI9341 TFT display
//!
//! The hardware independent parts live here so they build and test on the
//! host; the ESP-IDF glue is in the binary.
#![deny(missing_docs)]
#![allow(clippy::pedantic)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

pub mod ili9341;
#[allow(missing_docs)]
pub mod input;
pub mod panel;
pub mod stopwatch;

pub use crate::ili9341::cmd::{Cmd, Command};
pub use crate::ili9341::config::PanelConfig;
pub use crate::ili9341::driver::{DisplayError, Ili9341};
pub use crate::ili9341::flag::Flag;
pub use crate::ili9341::font::Font;
pub use crate::ili9341::interface::{DisplayInterface, Transport};
pub use crate::ili9341::orientation::Orientation;
pub use crate::ili9341::pins::Pins;
pub use crate::ili9341::shared::SharedDisplay;
