//! Scan direction and the logical panel size it implies

use crate::ili9341::flag::Flag;

/// The four scan directions the panel supports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// 0°, connector at the bottom
    #[default]
    Portrait1,
    /// 180°
    Portrait2,
    /// 90°
    Landscape1,
    /// 270°
    Landscape2,
}

impl Orientation {
    /// Memory Access Control byte for this orientation
    pub const fn mem_access(self) -> u8 {
        match self {
            Orientation::Portrait1 => Flag::PORTRAIT_1,
            Orientation::Portrait2 => Flag::PORTRAIT_2,
            Orientation::Landscape1 => Flag::LANDSCAPE_1,
            Orientation::Landscape2 => Flag::LANDSCAPE_2,
        }
    }

    /// Rows and columns are exchanged
    pub const fn is_landscape(self) -> bool {
        matches!(self, Orientation::Landscape1 | Orientation::Landscape2)
    }

    /// The same axis, turned by 180°
    pub const fn flipped(self) -> Self {
        match self {
            Orientation::Portrait1 => Orientation::Portrait2,
            Orientation::Portrait2 => Orientation::Portrait1,
            Orientation::Landscape1 => Orientation::Landscape2,
            Orientation::Landscape2 => Orientation::Landscape1,
        }
    }
}

/// Logical size of the panel in the active orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrientationState {
    /// Columns in the active orientation
    pub width: u16,
    /// Rows in the active orientation
    pub height: u16,
    /// Active orientation
    pub orientation: Orientation,
}

impl OrientationState {
    /// State for a panel of native (portrait) size `width` × `height`
    pub const fn new(native_width: u16, native_height: u16, orientation: Orientation) -> Self {
        let (width, height) = if orientation.is_landscape() {
            (native_height, native_width)
        } else {
            (native_width, native_height)
        };
        Self {
            width,
            height,
            orientation,
        }
    }

    /// Re-derive width and height for `orientation`
    pub fn rotate(&mut self, orientation: Orientation) {
        if self.orientation.is_landscape() != orientation.is_landscape() {
            core::mem::swap(&mut self.width, &mut self.height);
        }
        self.orientation = orientation;
    }

    /// Largest valid column
    pub const fn max_x(&self) -> u16 {
        self.width.saturating_sub(1)
    }

    /// Largest valid row
    pub const fn max_y(&self) -> u16 {
        self.height.saturating_sub(1)
    }

    /// Point lies on the panel
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }
}
