//! Character and string rendering
//!
//! Glyphs are expanded row by row into foreground and background pixels in
//! the driver's scratch buffer and streamed into a window the size of one
//! glyph cell.

use embedded_graphics::geometry::Size;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::ili9341::driver::{DisplayError, Ili9341};
use crate::ili9341::font::Font;
use crate::ili9341::interface::Transport;

impl<IF, RST, BL, DELAY> Ili9341<IF, RST, BL, DELAY>
where
    IF: Transport,
    RST: OutputPin,
    BL: OutputPin,
    DELAY: DelayNs,
{
    /// Draw one glyph cell with its top left corner at `(x, y)`.
    ///
    /// When the cell would pass the right edge it moves to `x = 0` one glyph
    /// height further down. There is no vertical wrap: a cell that ends below
    /// the panel fails with [`DisplayError::OutOfBoundsError`]. Characters the
    /// font has no glyph for are drawn as background.
    pub fn draw_char(
        &mut self,
        x: u16,
        y: u16,
        ch: char,
        font: &Font,
        foreground: u16,
        background: u16,
    ) -> Result<(), DisplayError> {
        let (width, height) = (font.width, font.height);
        if width == 0 || height == 0 {
            return Ok(());
        }

        let (x, y) = if u32::from(x) + u32::from(width) > u32::from(self.width()) {
            (0, u32::from(y) + u32::from(height))
        } else {
            (x, u32::from(y))
        };
        if width > self.width() || y + u32::from(height) > u32::from(self.height()) {
            log::warn!("Glyph {:?} at ({}, {}) does not fit the panel", ch, x, y);
            return Err(DisplayError::OutOfBoundsError);
        }
        // checked against the panel height above
        let y = y as u16;

        self.set_address_window(x, y, x + width - 1, y + height - 1)?;

        let glyph = font.glyph(ch);
        let columns = usize::from(width);
        let [fg_high, fg_low] = foreground.to_be_bytes();
        let [bg_high, bg_low] = background.to_be_bytes();
        let total = usize::from(width) * usize::from(height) * 2;
        self.stream_with(total, |offset, chunk| {
            for (i, pixel) in chunk.chunks_exact_mut(2).enumerate() {
                let index = offset / 2 + i;
                let (row, column) = (index / columns, index % columns);
                let lit = glyph
                    .and_then(|rows| rows.get(row))
                    .is_some_and(|bits| bits & (0x8000 >> column) != 0);
                if lit {
                    pixel.copy_from_slice(&[fg_high, fg_low]);
                } else {
                    pixel.copy_from_slice(&[bg_high, bg_low]);
                }
            }
        })?;
        Ok(())
    }

    /// Draw `text` starting at `(x, y)`, one glyph after the other.
    ///
    /// `\n` moves down by `height + 1` and back to `x`, or to column 0 when
    /// directly followed by `\r`. A lone `\r` is skipped. The character right
    /// after a line break is always drawn as a glyph, even another control
    /// character.
    pub fn draw_string(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        font: &Font,
        foreground: u16,
        background: u16,
    ) -> Result<(), DisplayError> {
        let (mut cursor_x, mut cursor_y) = (x, y);
        let mut chars = text.chars().peekable();

        while let Some(mut ch) = chars.next() {
            if ch == '\n' {
                cursor_y = cursor_y.saturating_add(font.height + 1);
                if chars.next_if_eq(&'\r').is_some() {
                    cursor_x = 0;
                } else {
                    cursor_x = x;
                }
                let Some(next) = chars.next() else {
                    break;
                };
                ch = next;
            } else if ch == '\r' {
                let Some(next) = chars.next() else {
                    break;
                };
                ch = next;
            }

            self.draw_char(cursor_x, cursor_y, ch, font, foreground, background)?;
            cursor_x = cursor_x.saturating_add(font.width);
        }
        Ok(())
    }
}

/// Size of `text` on a single line: one glyph width per character.
/// Line breaks are counted as characters.
pub fn measure_string(text: &str, font: &Font) -> Size {
    let count = text.chars().count() as u32;
    Size::new(u32::from(font.width) * count, u32::from(font.height))
}
