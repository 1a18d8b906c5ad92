//! Pure rasterisers behind the line and circle primitives
//!
//! They only compute coordinates and hand each one to a callback, so the
//! driver decides what a point costs on the bus and the algorithms can be
//! checked without a panel.

/// Plot a line with the incremental error accumulator used by the driver.
///
/// The error starts at `max(dx, dy) / 2`. The loop stops as soon as
/// **either** coordinate reaches its target, so for lines that are neither
/// axis-aligned nor 45° the last few pixels towards the endpoint are not
/// plotted. Drawings made with this routine depend on that, keep it as is.
/// [`line_complete`] always reaches the endpoint.
pub fn line<E>(
    x0: u16,
    y0: u16,
    x1: u16,
    y1: u16,
    mut plot: impl FnMut(u16, u16) -> Result<(), E>,
) -> Result<(), E> {
    let (mut x, mut y) = (i32::from(x0), i32::from(y0));
    let (x1, y1) = (i32::from(x1), i32::from(y1));
    let dx = (x1 - x).abs();
    let dy = (y1 - y).abs();
    let sx = if x > x1 { -1 } else { 1 };
    let sy = if y > y1 { -1 } else { 1 };

    let mut err = dx.max(dy) / 2;
    loop {
        plot(x as u16, y as u16)?;
        if x == x1 || y == y1 {
            return Ok(());
        }
        let e2 = err;
        if e2 > -dx {
            err -= dy;
            x += sx;
        }
        if e2 < dy {
            err += dx;
            y += sy;
        }
    }
}

/// Bresenham line from `(x0, y0)` to `(x1, y1)`, both endpoints included
pub fn line_complete<E>(
    x0: u16,
    y0: u16,
    x1: u16,
    y1: u16,
    mut plot: impl FnMut(u16, u16) -> Result<(), E>,
) -> Result<(), E> {
    let (mut x, mut y) = (i32::from(x0), i32::from(y0));
    let (x1, y1) = (i32::from(x1), i32::from(y1));
    let dx = (x1 - x).abs();
    let dy = -(y1 - y).abs();
    let sx = if x > x1 { -1 } else { 1 };
    let sy = if y > y1 { -1 } else { 1 };

    let mut err = dx + dy;
    loop {
        plot(x as u16, y as u16)?;
        if x == x1 && y == y1 {
            return Ok(());
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Midpoint circle outline around `(x0, y0)`.
///
/// The four axis points come first, then eight symmetric points per step.
/// Coordinates may be negative or past the panel; the caller clips.
pub fn circle<E>(
    x0: i32,
    y0: i32,
    r: u16,
    mut plot: impl FnMut(i32, i32) -> Result<(), E>,
) -> Result<(), E> {
    let r = i32::from(r);
    plot(x0, y0 + r)?;
    plot(x0, y0 - r)?;
    plot(x0 + r, y0)?;
    plot(x0 - r, y0)?;

    for (x, y) in Octant::new(r) {
        plot(x0 + x, y0 + y)?;
        plot(x0 - x, y0 + y)?;
        plot(x0 + x, y0 - y)?;
        plot(x0 - x, y0 - y)?;

        plot(x0 + y, y0 + x)?;
        plot(x0 - y, y0 + x)?;
        plot(x0 + y, y0 - x)?;
        plot(x0 - y, y0 - x)?;
    }
    Ok(())
}

/// One drawing step of a filled circle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stroke {
    /// Single pixel
    Point(i32, i32),
    /// Horizontal run from `x0` to `x1` (either order) on row `y`
    Span {
        /// One end
        x0: i32,
        /// Other end
        x1: i32,
        /// Row
        y: i32,
    },
}

/// Midpoint filled circle around `(x0, y0)`.
///
/// Emits the four axis points, the horizontal diameter, then four spans per
/// step, in the same order the outline walks its octant.
pub fn filled_circle<E>(
    x0: i32,
    y0: i32,
    r: u16,
    mut stroke: impl FnMut(Stroke) -> Result<(), E>,
) -> Result<(), E> {
    let r = i32::from(r);
    stroke(Stroke::Point(x0, y0 + r))?;
    stroke(Stroke::Point(x0, y0 - r))?;
    stroke(Stroke::Point(x0 + r, y0))?;
    stroke(Stroke::Point(x0 - r, y0))?;
    stroke(Stroke::Span {
        x0: x0 - r,
        x1: x0 + r,
        y: y0,
    })?;

    for (x, y) in Octant::new(r) {
        stroke(Stroke::Span {
            x0: x0 - x,
            x1: x0 + x,
            y: y0 + y,
        })?;
        stroke(Stroke::Span {
            x0: x0 + x,
            x1: x0 - x,
            y: y0 - y,
        })?;
        stroke(Stroke::Span {
            x0: x0 + y,
            x1: x0 - y,
            y: y0 + x,
        })?;
        stroke(Stroke::Span {
            x0: x0 + y,
            x1: x0 - y,
            y: y0 - x,
        })?;
    }
    Ok(())
}

/// Offsets of one circle octant, walked from the top (x = 0, y = r) down
/// to the diagonal, using the decision variable `f = 1 - r`
struct Octant {
    f: i32,
    ddf_x: i32,
    ddf_y: i32,
    x: i32,
    y: i32,
}

impl Octant {
    fn new(r: i32) -> Self {
        Self {
            f: 1 - r,
            ddf_x: 1,
            ddf_y: -2 * r,
            x: 0,
            y: r,
        }
    }
}

impl Iterator for Octant {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.x >= self.y {
            return None;
        }
        if self.f >= 0 {
            self.y -= 1;
            self.ddf_y += 2;
            self.f += self.ddf_y;
        }
        self.x += 1;
        self.ddf_x += 2;
        self.f += self.ddf_x;
        Some((self.x, self.y))
    }
}
