//! ILI9341 Display Driver Implementation
//!
//! The driver owns the transport, the reset and backlight lines, the delay
//! provider, the orientation state and one scratch buffer. Every operation
//! takes `&mut self`, so a single instance is always used by one caller at a
//! time; wrap it in [`crate::ili9341::shared::SharedDisplay`] to draw from
//! several threads.
//!
//! ## Operations
//!
//! ### Initialization
//! - `new()` - Take ownership of the hardware, no bus traffic
//! - `init()` - Reset, replay the init table, wake up, clear
//! - `run_init_sequence()` - Replay any command table
//!
//! ### Addressing and streaming
//! - `set_address_window()` - Program column and page ranges
//! - `stream_pixels()` - `MEM_WRITE` followed by chunked pixel data
//!
//! ### Drawing
//! - `set_pixel()`, `fill_rect()`, `fill_screen()`
//! - `draw_line()`, `draw_line_complete()`, `draw_rectangle()`
//! - `draw_circle()`, `draw_filled_circle()`, `draw_picture()`
//! - `draw_char()`, `draw_string()` (see [`crate::ili9341::text`])
//!
//! ## Out-of-range geometry
//!
//! Lines and rectangles are clamped to the last row/column. Single pixels
//! outside the panel are dropped. Pictures and glyph cells that do not fit
//! fail with [`DisplayError::OutOfBoundsError`].

pub use display_interface::DisplayError;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::ili9341::cmd::{Cmd, Command};
use crate::ili9341::config::PanelConfig;
use crate::ili9341::flag::Flag;
use crate::ili9341::graphics::{self, Stroke};
use crate::ili9341::interface::Transport;
use crate::ili9341::orientation::{Orientation, OrientationState};
use crate::ili9341::stream::{self, PixelSource, BUFFER_CAPACITY};
use crate::ili9341::color;

/// Reset pulse and post-command settle time, in milliseconds
const SETTLE_MS: u32 = 10;

/// ILI9341 TFT Display Driver
///
/// ## Type Parameters
///
/// - `IF` - Command/data transport, usually [`crate::ili9341::interface::DisplayInterface`]
/// - `RST` - Reset output pin, active low
/// - `BL` - Backlight output pin, active high
/// - `DELAY` - Delay provider for the mandatory settle times
pub struct Ili9341<IF, RST, BL, DELAY> {
    interface: IF,
    rst: RST,
    backlight: BL,
    delay: DELAY,
    config: PanelConfig<'static>,
    orientation: OrientationState,
    buffer: [u8; BUFFER_CAPACITY],
}

impl<IF, RST, BL, DELAY> Ili9341<IF, RST, BL, DELAY>
where
    IF: Transport,
    RST: OutputPin,
    BL: OutputPin,
    DELAY: DelayNs,
{
    /// Take ownership of the hardware. Nothing is sent until [`Self::init`].
    pub fn new(
        interface: IF,
        rst: RST,
        backlight: BL,
        delay: DELAY,
        config: PanelConfig<'static>,
    ) -> Self {
        let orientation = OrientationState::new(config.width, config.height, Orientation::Portrait1);
        Ili9341 {
            interface,
            rst,
            backlight,
            delay,
            config,
            orientation,
            buffer: [0; BUFFER_CAPACITY],
        }
    }

    /// Bring the panel up: hardware reset, init table, sleep-out, display-on,
    /// backlight, configured rotation and clear color.
    ///
    /// Must run once before any drawing call.
    pub fn init(&mut self) -> Result<(), DisplayError> {
        log::info!("Initializing ILI9341 ({}x{})", self.config.width, self.config.height);

        self.hard_reset()?;
        if self.config.software_reset {
            self.command_then_settle(Cmd::SW_RESET)?;
        }

        let table = self.config.init_table;
        self.run_init_sequence(table)?;

        self.command_then_settle(Cmd::SLEEP_OUT)?;
        self.command_then_settle(Cmd::DISPLAY_ON)?;
        self.set_backlight(true)?;

        self.set_rotation(self.config.orientation)?;
        self.fill_screen(self.config.clear_color)?;

        log::info!("ILI9341 ready, {:?}", self.orientation.orientation);
        Ok(())
    }

    /// Pulse the reset line low then high, holding each level for 10 ms
    pub fn hard_reset(&mut self) -> Result<(), DisplayError> {
        self.rst.set_low().map_err(|_| DisplayError::RSError)?;
        self.delay.delay_ms(SETTLE_MS);
        self.rst.set_high().map_err(|_| DisplayError::RSError)?;
        self.delay.delay_ms(SETTLE_MS);
        Ok(())
    }

    /// Send a parameterless command and wait for the controller to settle
    fn command_then_settle(&mut self, opcode: u8) -> Result<(), DisplayError> {
        self.write_command(&Command::bare(opcode))?;
        self.delay.delay_ms(SETTLE_MS);
        Ok(())
    }

    /// Send one command descriptor
    pub fn write_command(&mut self, command: &Command) -> Result<(), DisplayError> {
        stream::write_command(&mut self.interface, command)
    }

    /// Replay every descriptor of `table` in order
    pub fn run_init_sequence(&mut self, table: &[Command]) -> Result<(), DisplayError> {
        log::debug!("Replaying {} init commands", table.len());
        for command in table {
            self.write_command(command)?;
        }
        Ok(())
    }

    /// Switch the backlight on or off
    pub fn set_backlight(&mut self, on: bool) -> Result<(), DisplayError> {
        let result = if on {
            self.backlight.set_high()
        } else {
            self.backlight.set_low()
        };
        result.map_err(|_| DisplayError::RSError)
    }

    /// Program the memory access byte for `orientation` and swap the logical
    /// width and height when the axis changes
    pub fn set_rotation(&mut self, orientation: Orientation) -> Result<(), DisplayError> {
        self.write_command(&Command::new(Cmd::MEM_ACC_CTRL, &[orientation.mem_access()]))?;
        self.orientation.rotate(orientation);
        log::debug!(
            "Rotation {:?}: {}x{}",
            orientation,
            self.orientation.width,
            self.orientation.height
        );
        Ok(())
    }

    /// Active orientation
    pub fn orientation(&self) -> Orientation {
        self.orientation.orientation
    }

    /// Columns in the active orientation
    pub fn width(&self) -> u16 {
        self.orientation.width
    }

    /// Rows in the active orientation
    pub fn height(&self) -> u16 {
        self.orientation.height
    }

    /// Program the controller window. Each axis is sent in ascending order.
    pub fn set_address_window(
        &mut self,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
    ) -> Result<(), DisplayError> {
        let (x0, x1) = if x0 > x1 { (x1, x0) } else { (x0, x1) };
        let (y0, y1) = if y0 > y1 { (y1, y0) } else { (y0, y1) };

        let [x0h, x0l] = x0.to_be_bytes();
        let [x1h, x1l] = x1.to_be_bytes();
        self.write_command(&Command::new(Cmd::COLUMN_ADDR_SET, &[x0h, x0l, x1h, x1l]))?;

        let [y0h, y0l] = y0.to_be_bytes();
        let [y1h, y1l] = y1.to_be_bytes();
        self.write_command(&Command::new(Cmd::PAGE_ADDR_SET, &[y0h, y0l, y1h, y1l]))
    }

    /// Start a memory write into the current window and send `total_bytes`
    /// from `source`, one scratch buffer at a time. Returns the chunk count.
    pub fn stream_pixels(
        &mut self,
        total_bytes: usize,
        source: PixelSource,
    ) -> Result<usize, DisplayError> {
        let Ili9341 {
            interface, buffer, ..
        } = self;
        stream::stream_pixels(interface, buffer, total_bytes, source)
    }

    /// Like [`Self::stream_pixels`], with the bytes produced by `fill`
    pub fn stream_with<F>(&mut self, total_bytes: usize, fill: F) -> Result<usize, DisplayError>
    where
        F: FnMut(usize, &mut [u8]),
    {
        let Ili9341 {
            interface, buffer, ..
        } = self;
        stream::stream_with(interface, buffer, total_bytes, fill)
    }

    /// Set one pixel. Points outside the panel are dropped.
    pub fn set_pixel(&mut self, x: u16, y: u16, color: u16) -> Result<(), DisplayError> {
        if !self.orientation.contains(x, y) {
            log::trace!("Dropping pixel ({}, {}) outside the panel", x, y);
            return Ok(());
        }
        self.set_address_window(x, y, x, y)?;
        self.stream_pixels(2, PixelSource::Solid(color))?;
        Ok(())
    }

    /// Fill the inclusive rectangle with `color`, clamped to the panel
    pub fn fill_rect(
        &mut self,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
        color: u16,
    ) -> Result<(), DisplayError> {
        let (x0, y0) = self.clamp(x0, y0);
        let (x1, y1) = self.clamp(x1, y1);
        self.set_address_window(x0, y0, x1, y1)?;
        self.stream_pixels(
            stream::window_bytes(x0, y0, x1, y1),
            PixelSource::Solid(color),
        )?;
        Ok(())
    }

    /// Same as [`Self::fill_rect`]
    pub fn draw_filled_rectangle(
        &mut self,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
        color: u16,
    ) -> Result<(), DisplayError> {
        self.fill_rect(x0, y0, x1, y1, color)
    }

    /// Fill the whole panel
    pub fn fill_screen(&mut self, color: u16) -> Result<(), DisplayError> {
        let (max_x, max_y) = (self.orientation.max_x(), self.orientation.max_y());
        self.fill_rect(0, 0, max_x, max_y, color)
    }

    fn clamp(&self, x: u16, y: u16) -> (u16, u16) {
        let clamped = (x.min(self.orientation.max_x()), y.min(self.orientation.max_y()));
        if clamped != (x, y) {
            log::trace!("Clamped ({}, {}) to {:?}", x, y, clamped);
        }
        clamped
    }

    /// Draw a line with the driver's incremental error walk.
    ///
    /// Endpoints are clamped to the panel. Horizontal and vertical lines
    /// become a single [`Self::fill_rect`]. Other lines stop as soon as
    /// either coordinate reaches the endpoint (see [`graphics::line`]).
    pub fn draw_line(
        &mut self,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
        color: u16,
    ) -> Result<(), DisplayError> {
        let (x0, y0) = self.clamp(x0, y0);
        let (x1, y1) = self.clamp(x1, y1);
        if x0 == x1 || y0 == y1 {
            return self.fill_rect(x0, y0, x1, y1, color);
        }
        graphics::line(x0, y0, x1, y1, |x, y| self.set_pixel(x, y, color))
    }

    /// Draw a line that always ends on `(x1, y1)`
    pub fn draw_line_complete(
        &mut self,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
        color: u16,
    ) -> Result<(), DisplayError> {
        let (x0, y0) = self.clamp(x0, y0);
        let (x1, y1) = self.clamp(x1, y1);
        if x0 == x1 || y0 == y1 {
            return self.fill_rect(x0, y0, x1, y1, color);
        }
        graphics::line_complete(x0, y0, x1, y1, |x, y| self.set_pixel(x, y, color))
    }

    /// Rectangle outline: top, right, bottom, left
    pub fn draw_rectangle(
        &mut self,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
        color: u16,
    ) -> Result<(), DisplayError> {
        self.draw_line(x0, y0, x1, y0, color)?;
        self.draw_line(x1, y0, x1, y1, color)?;
        self.draw_line(x0, y1, x1, y1, color)?;
        self.draw_line(x0, y0, x0, y1, color)
    }

    /// Circle outline. The centre may lie off the panel; points outside are dropped.
    pub fn draw_circle(&mut self, x0: i32, y0: i32, r: u16, color: u16) -> Result<(), DisplayError> {
        graphics::circle(x0, y0, r, |x, y| self.plot(x, y, color))
    }

    /// Filled circle, drawn as horizontal runs clipped to the panel
    pub fn draw_filled_circle(
        &mut self,
        x0: i32,
        y0: i32,
        r: u16,
        color: u16,
    ) -> Result<(), DisplayError> {
        graphics::filled_circle(x0, y0, r, |stroke| match stroke {
            Stroke::Point(x, y) => self.plot(x, y, color),
            Stroke::Span { x0, x1, y } => self.span(x0, x1, y, color),
        })
    }

    fn plot(&mut self, x: i32, y: i32, color: u16) -> Result<(), DisplayError> {
        match (u16::try_from(x), u16::try_from(y)) {
            (Ok(x), Ok(y)) => self.set_pixel(x, y, color),
            _ => {
                log::trace!("Dropping pixel ({}, {}) outside the panel", x, y);
                Ok(())
            }
        }
    }

    fn span(&mut self, x0: i32, x1: i32, y: i32, color: u16) -> Result<(), DisplayError> {
        let (left, right) = if x0 > x1 { (x1, x0) } else { (x0, x1) };
        let max_x = i32::from(self.orientation.max_x());
        let Ok(y) = u16::try_from(y) else {
            return Ok(());
        };
        if y > self.orientation.max_y() || right < 0 || left > max_x {
            return Ok(());
        }
        // both ends are inside 0..=max_x after clamping, so they fit in u16
        let left = left.clamp(0, max_x) as u16;
        let right = right.clamp(0, max_x) as u16;
        self.fill_rect(left, y, right, y, color)
    }

    /// Copy a `width` × `height` RGB565 image (big endian, row major) to `(x, y)`
    pub fn draw_picture(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        pixels: &[u8],
    ) -> Result<(), DisplayError> {
        if width == 0 || height == 0 {
            return Ok(());
        }
        if u32::from(x) + u32::from(width) > u32::from(self.orientation.width)
            || u32::from(y) + u32::from(height) > u32::from(self.orientation.height)
        {
            log::warn!(
                "Picture {}x{} at ({}, {}) does not fit {}x{}",
                width,
                height,
                x,
                y,
                self.orientation.width,
                self.orientation.height
            );
            return Err(DisplayError::OutOfBoundsError);
        }
        let x1 = x + (width - 1);
        let y1 = y + (height - 1);
        let total = stream::window_bytes(x, y, x1, y1);
        if pixels.len() < total {
            return Err(DisplayError::InvalidFormatError);
        }
        self.set_address_window(x, y, x1, y1)?;
        let chunks = self.stream_pixels(total, PixelSource::Bytes(pixels))?;
        log::debug!("Picture {}x{} sent in {} chunks", width, height, chunks);
        Ok(())
    }

    /// Turn the panel output on
    pub fn display_on(&mut self) -> Result<(), DisplayError> {
        self.command_then_settle(Cmd::DISPLAY_ON)
    }

    /// Blank the panel output, frame memory is kept
    pub fn display_off(&mut self) -> Result<(), DisplayError> {
        self.command_then_settle(Cmd::DISPLAY_OFF)
    }

    /// Enter sleep mode
    pub fn sleep(&mut self) -> Result<(), DisplayError> {
        self.command_then_settle(Cmd::SLEEP_IN)
    }

    /// Leave sleep mode
    pub fn wake_up(&mut self) -> Result<(), DisplayError> {
        self.command_then_settle(Cmd::SLEEP_OUT)
    }

    /// Invert every pixel on the panel
    pub fn set_inverted(&mut self, inverted: bool) -> Result<(), DisplayError> {
        let opcode = if inverted { Cmd::DISPLAY_INV_ON } else { Cmd::DISPLAY_INV_OFF };
        self.write_command(&Command::bare(opcode))
    }

    /// Set the brightness register; modules without brightness control ignore it
    pub fn set_brightness(&mut self, level: u8) -> Result<(), DisplayError> {
        self.write_command(&Command::new(
            Cmd::WRITE_CTRL_DISP,
            &[Flag::CTRL_DISPLAY_BRIGHTNESS_ON],
        ))?;
        self.write_command(&Command::new(Cmd::WRITE_DISP_BRIGHT, &[level]))
    }

    /// Transport in use
    pub fn interface(&self) -> &IF {
        &self.interface
    }

    /// Give the hardware back
    pub fn release(self) -> (IF, RST, BL, DELAY) {
        (self.interface, self.rst, self.backlight, self.delay)
    }
}

impl<IF, RST, BL, DELAY> OriginDimensions for Ili9341<IF, RST, BL, DELAY> {
    fn size(&self) -> Size {
        Size::new(
            u32::from(self.orientation.width),
            u32::from(self.orientation.height),
        )
    }
}

impl<IF, RST, BL, DELAY> DrawTarget for Ili9341<IF, RST, BL, DELAY>
where
    IF: Transport,
    RST: OutputPin,
    BL: OutputPin,
    DELAY: DelayNs,
{
    type Color = Rgb565;
    type Error = DisplayError;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, rgb) in pixels {
            self.plot(point.x, point.y, color::from_rgb565(rgb))?;
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, rgb: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        let Some(bottom_right) = area.bottom_right() else {
            return Ok(());
        };
        // the intersection lies inside the panel, so every corner is non-negative
        self.fill_rect(
            area.top_left.x as u16,
            area.top_left.y as u16,
            bottom_right.x as u16,
            bottom_right.y as u16,
            color::from_rgb565(rgb),
        )
    }

    fn clear(&mut self, rgb: Self::Color) -> Result<(), Self::Error> {
        self.fill_screen(color::from_rgb565(rgb))
    }
}
