//! Grid renderer: lays out cells as squares and writes an image file.
//!
//! Rendering happens in two stages:
//!
//! 1. **Drawing** - [`draw_grid`] walks the grid and issues fill, stroke and
//!    text calls on a [`Surface`].
//! 2. **Output** - the surface is encoded to PNG and written to the output
//!    path, transcoded first when the format is not PNG.
//!
//! [`Renderer`] ties both stages together with a [`RasterSurface`].

mod cell;
mod error;
mod font;
mod layout;
mod options;
mod output;
mod raster;
mod style;
mod surface;

pub use cell::{Cell, Grid, StyledCell};
pub use error::RenderError;
pub use font::{load_font_file, resolve_font, SYSTEM_FONT_CANDIDATES};
pub use layout::{canvas_size, extent, square_origin, square_rect, Rect, MAX_CANVAS_PIXELS};
pub use options::{OutputFormat, RenderOptions, DEFAULT_FONT_FAMILY, DEFAULT_FONT_SCALE};
pub use output::{temp_path, write_output, ImageTranscoder, TempArtifact, Transcoder};
pub use raster::RasterSurface;
pub use style::ResolvedStyle;
pub use surface::Surface;

use ab_glyph::FontArc;
use std::path::{Path, PathBuf};

/// Draw every cell of `grid` onto `surface`.
///
/// The canvas is first filled with the background. Each square then gets its
/// border (when it has one), its fill over the border's inner half, and its
/// letter (when it has one), in that order.
pub fn draw_grid<S: Surface>(surface: &mut S, grid: &Grid, options: &RenderOptions) {
    let (width, height) = surface.size();
    surface.fill_rect(
        Rect::new(0.0, 0.0, width as f32, height as f32),
        options.background,
    );
    surface.set_font(&options.font_family, options.font_size());

    let mut buf = [0u8; 4];
    for (row, col, cell) in grid.cells() {
        let rect = square_rect(row, col, options);
        let style = ResolvedStyle::resolve(cell, options);

        if let Some(border) = style.border_color {
            surface.stroke_rect(rect, border, style.border_width as f32);
        }

        surface.fill_rect(rect, style.square_color);

        if let Some(letter) = cell.letter() {
            surface.fill_text(letter.encode_utf8(&mut buf), rect.center(), style.text_color);
        }
    }
}

/// Renders grids to image files.
#[derive(Clone)]
pub struct Renderer<T: Transcoder = ImageTranscoder> {
    font: Option<FontArc>,
    transcoder: T,
}

impl Renderer<ImageTranscoder> {
    /// Renderer using `font` for letters. With `None`, squares are drawn
    /// without letters.
    pub fn new(font: Option<FontArc>) -> Self {
        Self::with_transcoder(font, ImageTranscoder)
    }
}

impl<T: Transcoder> Renderer<T> {
    pub fn with_transcoder(font: Option<FontArc>, transcoder: T) -> Self {
        Self { font, transcoder }
    }

    pub fn has_font(&self) -> bool {
        self.font.is_some()
    }

    /// Draw `grid` onto a fresh raster canvas sized for it.
    pub fn rasterize(
        &self,
        grid: &Grid,
        options: &RenderOptions,
    ) -> Result<RasterSurface, RenderError> {
        let (width, height) = canvas_size(grid.width(), grid.height(), options)?;
        log::debug!(
            "Canvas {}x{} for {}x{} grid",
            width,
            height,
            grid.width(),
            grid.height()
        );
        let mut surface = RasterSurface::new(width, height, self.font.clone());
        draw_grid(&mut surface, grid, options);
        Ok(surface)
    }

    /// Render `grid` and write it to `options.output`.
    ///
    /// Returns the absolute path of the written file.
    pub async fn render(&self, grid: &Grid, options: &RenderOptions) -> Result<PathBuf, RenderError> {
        let output = resolve_output(&options.output)?;
        let png = self.rasterize(grid, options)?.encode_png()?;
        write_output(&self.transcoder, png, &output, options.format).await?;
        Ok(output)
    }
}

/// Make `path` absolute against the current directory.
pub fn resolve_output(path: &Path) -> Result<PathBuf, RenderError> {
    std::path::absolute(path).map_err(|e| RenderError::io(path, e))
}
