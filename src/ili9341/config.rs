//! Panel configuration injected at construction

use crate::ili9341::cmd::{Command, DEFAULT_INIT_TABLE};
use crate::ili9341::color;
use crate::ili9341::orientation::Orientation;
use crate::ili9341::{HEIGHT, WIDTH};

/// Everything that differs between ILI9341 modules
#[derive(Debug, Clone, Copy)]
pub struct PanelConfig<'a> {
    /// Native (portrait) columns
    pub width: u16,
    /// Native (portrait) rows
    pub height: u16,
    /// Tuning commands replayed before sleep-out
    pub init_table: &'a [Command<'a>],
    /// Orientation applied at the end of `init`
    pub orientation: Orientation,
    /// Screen color after `init`
    pub clear_color: u16,
    /// Send SW_RESET after the hardware reset
    pub software_reset: bool,
}

impl PanelConfig<'static> {
    /// 240×320 module with the default tuning table
    pub const fn ili9341() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            init_table: DEFAULT_INIT_TABLE,
            orientation: Orientation::Portrait1,
            clear_color: color::BLACK,
            software_reset: false,
        }
    }
}

impl<'a> PanelConfig<'a> {
    /// Use another tuning table
    pub const fn with_init_table<'b>(self, init_table: &'b [Command<'b>]) -> PanelConfig<'b> {
        PanelConfig {
            width: self.width,
            height: self.height,
            init_table,
            orientation: self.orientation,
            clear_color: self.clear_color,
            software_reset: self.software_reset,
        }
    }

    /// Orientation applied at the end of `init`
    pub const fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Screen color after `init`
    pub const fn with_clear_color(mut self, clear_color: u16) -> Self {
        self.clear_color = clear_color;
        self
    }

    /// Send SW_RESET (and wait for it) after the hardware reset
    pub const fn with_software_reset(mut self, software_reset: bool) -> Self {
        self.software_reset = software_reset;
        self
    }

    /// Native panel size
    pub const fn with_size(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

impl Default for PanelConfig<'static> {
    fn default() -> Self {
        Self::ili9341()
    }
}
