//! Canvas sizing and square placement.

use super::error::RenderError;
use super::options::RenderOptions;

/// Largest canvas, in pixels, that will be allocated (1 GiB of RGBA).
pub const MAX_CANVAS_PIXELS: u64 = 1 << 28;

/// An axis-aligned pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Length along one axis for `count` squares.
///
/// `2*padding + count*size + (count-1)*gap`, with no gap term when
/// `count <= 1`. `None` if the length does not fit in a `u32`.
pub fn extent(count: usize, size: u32, gap: u32, padding: u32) -> Option<u32> {
    let count = u32::try_from(count).ok()?;
    padding
        .checked_mul(2)?
        .checked_add(count.checked_mul(size)?)?
        .checked_add(count.saturating_sub(1).checked_mul(gap)?)
}

/// Canvas `(width, height)` for a grid of `cols` by `rows` squares.
///
/// Fails with [`RenderError::CanvasTooLarge`] when either side overflows or
/// the area exceeds [`MAX_CANVAS_PIXELS`].
pub fn canvas_size(
    cols: usize,
    rows: usize,
    options: &RenderOptions,
) -> Result<(u32, u32), RenderError> {
    let RenderOptions {
        square_size,
        square_gap,
        padding,
        ..
    } = *options;
    let too_large = || RenderError::CanvasTooLarge { cols, rows };

    let width = extent(cols, square_size, square_gap, padding).ok_or_else(too_large)?;
    let height = extent(rows, square_size, square_gap, padding).ok_or_else(too_large)?;
    if u64::from(width) * u64::from(height) > MAX_CANVAS_PIXELS {
        return Err(too_large());
    }
    Ok((width, height))
}

/// Top-left pixel of the square at `(row, col)`. Saturates instead of
/// wrapping for positions past the end of any valid canvas.
pub fn square_origin(row: usize, col: usize, options: &RenderOptions) -> (u32, u32) {
    let step = options.square_size.saturating_add(options.square_gap);
    let offset = |idx: usize| {
        let idx = u32::try_from(idx).unwrap_or(u32::MAX);
        options.padding.saturating_add(idx.saturating_mul(step))
    };
    (offset(col), offset(row))
}

/// Pixel bounds of the square at `(row, col)`.
pub fn square_rect(row: usize, col: usize, options: &RenderOptions) -> Rect {
    let (x, y) = square_origin(row, col, options);
    let size = options.square_size as f32;
    Rect::new(x as f32, y as f32, size, size)
}
