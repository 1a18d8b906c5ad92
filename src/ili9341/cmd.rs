//! Command set of the ILI9341

use crate::ili9341::flag::Flag;

/// ILI9341 command opcodes
pub struct Cmd;
#[allow(missing_docs)]
impl Cmd {
    /// Not a controller command: a descriptor with this opcode only sends its data phase.
    /// Used for pixel chunks following a `MEM_WRITE`.
    pub const NONE: u8 = 0x00;

    // Init
    pub const SW_RESET: u8 = 0x01;
    pub const SLEEP_IN: u8 = 0x10;
    pub const SLEEP_OUT: u8 = 0x11;
    pub const DISPLAY_INV_OFF: u8 = 0x20;
    pub const DISPLAY_INV_ON: u8 = 0x21;
    pub const GAMMA_SET: u8 = 0x26;
    pub const DISPLAY_OFF: u8 = 0x28;
    pub const DISPLAY_ON: u8 = 0x29;

    // Addressing and memory
    pub const COLUMN_ADDR_SET: u8 = 0x2A;
    pub const PAGE_ADDR_SET: u8 = 0x2B;
    pub const MEM_WRITE: u8 = 0x2C;
    pub const MEM_ACC_CTRL: u8 = 0x36;
    pub const PIXEL_FORMAT_SET: u8 = 0x3A;

    // Brightness
    pub const WRITE_DISP_BRIGHT: u8 = 0x51;
    pub const WRITE_CTRL_DISP: u8 = 0x53;

    // Panel tuning
    pub const FRAME_CTRL: u8 = 0xB1;
    pub const DISP_FUN_CTRL: u8 = 0xB6;
    pub const PWR_CTRL1: u8 = 0xC0;
    pub const PWR_CTRL2: u8 = 0xC1;
    pub const VCOM_CTRL1: u8 = 0xC5;
    pub const VCOM_CTRL2: u8 = 0xC7;
    pub const PWR_CTRL_A: u8 = 0xCB;
    pub const PWR_CTRL_B: u8 = 0xCF;
    pub const POS_GAMMA: u8 = 0xE0;
    pub const NEG_GAMMA: u8 = 0xE1;
    pub const DRIV_TIM_CTRL_A: u8 = 0xE8;
    pub const DRIV_TIM_CTRL_B: u8 = 0xEA;
    pub const PWR_ON_CTRL: u8 = 0xED;
    pub const EN_3_GAMMA: u8 = 0xF2;
    pub const PUMP_RATIO_CTRL: u8 = 0xF7;
}

/// One controller transaction: an opcode and its parameter (or pixel) bytes.
///
/// * `opcode == Cmd::NONE` skips the command phase.
/// * empty `params` skips the data phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command<'a> {
    /// Command byte sent with D/C low
    pub opcode: u8,
    /// Bytes sent with D/C high after the command
    pub params: &'a [u8],
}

impl<'a> Command<'a> {
    /// Command with parameters
    pub const fn new(opcode: u8, params: &'a [u8]) -> Self {
        Self { opcode, params }
    }

    /// Command without parameters
    pub const fn bare(opcode: u8) -> Command<'static> {
        Command { opcode, params: &[] }
    }

    /// Data phase only, e.g. a chunk of pixels
    pub const fn data(bytes: &'a [u8]) -> Self {
        Self {
            opcode: Cmd::NONE,
            params: bytes,
        }
    }

    /// Number of parameter bytes
    pub const fn len(&self) -> usize {
        self.params.len()
    }

    /// True when no data phase follows the command
    pub const fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

/// Power, timing and gamma tuning for the 2.4"/2.8" ILI9341 modules.
///
/// Replayed once by [`crate::ili9341::driver::Ili9341::init`] before sleep-out.
pub const DEFAULT_INIT_TABLE: &[Command<'static>] = &[
    Command::new(Cmd::PWR_CTRL_A, &[0x39, 0x2C, 0x00, 0x34, 0x02]),
    // Discharge path enable
    Command::new(Cmd::PWR_CTRL_B, &[0x00, 0xC1, 0x30]),
    Command::new(Cmd::DRIV_TIM_CTRL_A, &[0x85, 0x00, 0x78]),
    Command::new(Cmd::DRIV_TIM_CTRL_B, &[0x00, 0x00]),
    // CP1 keeps 1 frame, 1st frame enable, DDVDH_ENH = 1
    Command::new(Cmd::PWR_ON_CTRL, &[0x64, 0x03, 0x12, 0x81]),
    // DDVDH = 2xVCI
    Command::new(Cmd::PUMP_RATIO_CTRL, &[0x20]),
    // GVDD = 4.6V
    Command::new(Cmd::PWR_CTRL1, &[0x23]),
    Command::new(Cmd::PWR_CTRL2, &[0x10]),
    // VCOMH = 4.25V, VCOML = -1.5V
    Command::new(Cmd::VCOM_CTRL1, &[0x3E, 0x28]),
    Command::new(Cmd::VCOM_CTRL2, &[0x86]),
    Command::new(Cmd::MEM_ACC_CTRL, &[Flag::PORTRAIT_1]),
    Command::new(Cmd::PIXEL_FORMAT_SET, &[Flag::PIXEL_FORMAT_16BIT]),
    // 79 Hz
    Command::new(Cmd::FRAME_CTRL, &[0x00, 0x18]),
    Command::new(Cmd::DISP_FUN_CTRL, &[0x0A, 0x82, 0x27]),
    Command::new(Cmd::EN_3_GAMMA, &[0x02]),
    // Columns 0..=239, pages 0..=319
    Command::new(Cmd::COLUMN_ADDR_SET, &[0x00, 0x00, 0x00, 0xEF]),
    Command::new(Cmd::PAGE_ADDR_SET, &[0x00, 0x00, 0x01, 0x3F]),
    Command::new(Cmd::GAMMA_SET, &[0x01]),
    Command::new(
        Cmd::POS_GAMMA,
        &[
            0x0F, 0x31, 0x2B, 0x0C, 0x0E, 0x08, 0x4E, 0xF1, 0x37, 0x07, 0x10, 0x03, 0x0E, 0x09,
            0x00,
        ],
    ),
    Command::new(
        Cmd::NEG_GAMMA,
        &[
            0x00, 0x0E, 0x14, 0x03, 0x11, 0x07, 0x31, 0xC1, 0x48, 0x08, 0x0F, 0x0C, 0x31, 0x36,
            0x0F,
        ],
    ),
];
