//! Drawing-surface abstraction consumed by the grid renderer.

use super::error::RenderError;
use super::layout::Rect;
use crate::color::Color;

/// A 2D canvas the grid is drawn onto.
///
/// Coordinates are in pixels with the origin at the top-left corner.
pub trait Surface {
    /// Canvas `(width, height)` in pixels.
    fn size(&self) -> (u32, u32);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Stroke the outline of `rect` with a line centered on its edge.
    fn stroke_rect(&mut self, rect: Rect, color: Color, line_width: f32);

    /// Select the font used by later [`Surface::fill_text`] calls.
    fn set_font(&mut self, family: &str, px_size: f32);

    /// Draw `text` centered horizontally and vertically on `center`.
    fn fill_text(&mut self, text: &str, center: (f32, f32), color: Color);

    /// Lossless PNG encoding of the current contents.
    fn encode_png(&self) -> Result<Vec<u8>, RenderError>;
}
