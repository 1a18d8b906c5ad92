//! Bitmap fonts for the text renderer
//!
//! A font is a table of 16-bit rows, `height` rows per glyph, starting at
//! the space character. Bit 15 is the leftmost column.

use std::borrow::Cow;
use std::convert::Infallible;

use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};

/// First character in every table
pub const FIRST_CHAR: char = ' ';

/// Last character [`Font::from_mono_font`] rasterises
pub const LAST_CHAR: char = '~';

/// Fixed-width bitmap font
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Font<'a> {
    /// Glyph width in pixels, at most 16
    pub width: u16,
    /// Glyph height in pixels
    pub height: u16,
    rows: Cow<'a, [u16]>,
}

impl<'a> Font<'a> {
    /// Wrap an existing row table
    pub const fn new(width: u16, height: u16, rows: &'a [u16]) -> Self {
        Font {
            width,
            height,
            rows: Cow::Borrowed(rows),
        }
    }

    /// Rows of the glyph for `ch`, or `None` if the table has no such glyph
    pub fn glyph(&self, ch: char) -> Option<&[u16]> {
        let index = (ch as u32).checked_sub(FIRST_CHAR as u32)? as usize;
        let height = usize::from(self.height);
        let start = index.checked_mul(height)?;
        self.rows.get(start..start + height)
    }

    /// Number of glyphs in the table
    pub fn glyph_count(&self) -> usize {
        match self.height {
            0 => 0,
            height => self.rows.len() / usize::from(height),
        }
    }
}

impl Font<'static> {
    /// Rasterise the printable ASCII range of an embedded-graphics mono font
    ///
    /// Columns past the 16th are cut off.
    pub fn from_mono_font(font: &MonoFont) -> Self {
        let size = font.character_size;
        let width = size.width.min(16) as u16;
        let height = size.height as u16;

        let mut rows = Vec::with_capacity(usize::from(height) * 95);
        let style = MonoTextStyle::new(font, BinaryColor::On);
        let mut utf8 = [0u8; 4];
        for ch in FIRST_CHAR..=LAST_CHAR {
            let mut cell = GlyphCell::new(width, height);
            let text = Text::with_baseline(ch.encode_utf8(&mut utf8), Point::zero(), style, Baseline::Top);
            // GlyphCell never fails to draw
            text.draw(&mut cell).unwrap_or_else(|never| match never {});
            rows.extend_from_slice(&cell.rows);
        }
        log::debug!("Rasterised {}x{} font", width, height);

        Font {
            width,
            height,
            rows: Cow::Owned(rows),
        }
    }
}

/// One glyph cell collecting lit pixels into row bitmaps
struct GlyphCell {
    width: u16,
    rows: Vec<u16>,
}

impl GlyphCell {
    fn new(width: u16, height: u16) -> Self {
        GlyphCell {
            width,
            rows: vec![0; usize::from(height)],
        }
    }
}

impl OriginDimensions for GlyphCell {
    fn size(&self) -> Size {
        Size::new(u32::from(self.width), self.rows.len() as u32)
    }
}

impl DrawTarget for GlyphCell {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let (Ok(x), Ok(y)) = (u16::try_from(point.x), usize::try_from(point.y)) else {
                continue;
            };
            if x >= self.width || color != BinaryColor::On {
                continue;
            }
            if let Some(row) = self.rows.get_mut(y) {
                *row |= 0x8000 >> x;
            }
        }
        Ok(())
    }
}
