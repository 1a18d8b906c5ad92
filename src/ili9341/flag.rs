//! Command parameter values

/// Parameter values for the ILI9341 commands used by this driver.
///
/// Memory Access Control (0x36) bits:
/// `MY MX MV ML BGR MH - -`, with BGR always set for these panels.
pub struct Flag;
#[allow(missing_docs)]
impl Flag {
    // Memory Access Control (0x36) bits
    pub const MADCTL_MY: u8 = 0x80; // Row address order
    pub const MADCTL_MX: u8 = 0x40; // Column address order
    pub const MADCTL_MV: u8 = 0x20; // Row/column exchange
    pub const MADCTL_BGR: u8 = 0x08; // BGR panel

    // Rotation presets
    pub const PORTRAIT_1: u8 = Self::MADCTL_MX | Self::MADCTL_BGR;
    pub const PORTRAIT_2: u8 = Self::MADCTL_MY | Self::MADCTL_BGR;
    pub const LANDSCAPE_1: u8 = Self::MADCTL_MV | Self::MADCTL_BGR;
    pub const LANDSCAPE_2: u8 =
        Self::MADCTL_MY | Self::MADCTL_MX | Self::MADCTL_MV | Self::MADCTL_BGR;

    // Pixel Format Set (0x3A)
    pub const PIXEL_FORMAT_16BIT: u8 = 0x55;

    // Write CTRL Display (0x53)
    pub const CTRL_DISPLAY_BRIGHTNESS_ON: u8 = 0x24; // BCTRL = 1, BL = 1
}
