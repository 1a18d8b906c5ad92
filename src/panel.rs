//! Seven-segment digit panels
//!
//! A panel is a row of digits of the same size. Every segment is a filled
//! rectangle, redrawn lit or unlit on each update, so a panel can be
//! refreshed in place without clearing the screen first.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Segments lit for 0-9, bit 0 = a (top) through bit 6 = g (middle)
const DIGIT_SEGMENTS: [u8; 10] = [
    0b011_1111, // 0
    0b000_0110, // 1
    0b101_1011, // 2
    0b100_1111, // 3
    0b110_0110, // 4
    0b110_1101, // 5
    0b111_1101, // 6
    0b000_0111, // 7
    0b111_1111, // 8
    0b110_1111, // 9
];

/// Colors of a panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelColors {
    /// Lit segment
    pub on: Rgb565,
    /// Unlit segment, drawn dim rather than erased
    pub off: Rgb565,
    /// Gaps between segments
    pub background: Rgb565,
}

/// A row of seven-segment digits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitPanel {
    origin: Point,
    digits: u8,
    digit_size: Size,
    colors: PanelColors,
}

impl DigitPanel {
    /// Panel of `digits` digits, each `digit_size`, with its top left corner at `origin`
    pub const fn new(origin: Point, digits: u8, digit_size: Size, colors: PanelColors) -> Self {
        Self {
            origin,
            digits,
            digit_size,
            colors,
        }
    }

    /// Segment thickness: a fifth of the digit width, at least one pixel
    fn thickness(&self) -> u32 {
        (self.digit_size.width / 5).max(1)
    }

    /// Gap between neighbouring digits
    fn spacing(&self) -> u32 {
        self.thickness()
    }

    /// Area covered by the whole panel
    pub fn bounding_box(&self) -> Rectangle {
        let digits = u32::from(self.digits);
        let width = digits * self.digit_size.width + digits.saturating_sub(1) * self.spacing();
        Rectangle::new(self.origin, Size::new(width, self.digit_size.height))
    }

    /// Top left corner of digit `position`, counted from the left
    pub fn digit_origin(&self, position: u8) -> Point {
        let step = (self.digit_size.width + self.spacing()) as i32;
        self.origin + Point::new(step * i32::from(position), 0)
    }

    /// The seven segment rectangles of digit `position`, a through g
    pub fn segments(&self, position: u8) -> [Rectangle; 7] {
        let origin = self.digit_origin(position);
        let (w, h) = (self.digit_size.width, self.digit_size.height);
        let t = self.thickness();
        let half = h / 2;
        let horizontal = Size::new(w.saturating_sub(2 * t), t);
        let upper = Size::new(t, half.saturating_sub(t + t / 2));
        let lower = Size::new(t, h.saturating_sub(half + t + t / 2));
        let (t, w, h, half) = (t as i32, w as i32, h as i32, half as i32);

        let at = |x: i32, y: i32, size: Size| Rectangle::new(origin + Point::new(x, y), size);
        [
            at(t, 0, horizontal),                // a
            at(w - t, t, upper),                 // b
            at(w - t, half + t / 2, lower),      // c
            at(t, h - t, horizontal),            // d
            at(0, half + t / 2, lower),          // e
            at(0, t, upper),                     // f
            at(t, half - t / 2, horizontal),     // g
        ]
    }

    /// Draw `value` (0-9) at `position`. Other values draw every segment unlit.
    pub fn draw_digit<D>(&self, target: &mut D, position: u8, value: u32) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        if position >= self.digits {
            log::warn!("Digit position {} outside a {} digit panel", position, self.digits);
            return Ok(());
        }
        let lit = usize::try_from(value)
            .ok()
            .and_then(|v| DIGIT_SEGMENTS.get(v))
            .copied()
            .unwrap_or(0);
        for (index, segment) in self.segments(position).iter().enumerate() {
            let color = if lit & (1 << index) != 0 {
                self.colors.on
            } else {
                self.colors.off
            };
            target.fill_solid(segment, color)?;
        }
        Ok(())
    }

    /// Draw `value` right aligned, zero padded to the panel width
    pub fn draw_number<D>(&self, target: &mut D, value: u32) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let mut rest = value;
        for position in (0..self.digits).rev() {
            self.draw_digit(target, position, rest % 10)?;
            rest /= 10;
        }
        Ok(())
    }

    /// Paint the panel background, erasing every segment
    pub fn clear<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        target.fill_solid(&self.bounding_box(), self.colors.background)
    }
}
