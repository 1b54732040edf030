//! In-memory RGBA canvas implementing [`Surface`].
//!
//! Rectangles cover the pixels whose centers fall inside them. Strokes are
//! centered on the rectangle edge, so half the line width lands outside the
//! square. Glyphs are rasterized with `ab_glyph` and blended source-over.

use super::error::RenderError;
use super::layout::Rect;
use super::surface::Surface;
use crate::color::Color;
use ab_glyph::{point, Font, FontArc, Glyph, PxScale, ScaleFont};
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, Rgba, RgbaImage};

pub struct RasterSurface {
    canvas: RgbaImage,
    font: Option<FontArc>,
    font_size: f32,
}

impl RasterSurface {
    /// Create a transparent canvas. Zero extents are clamped to one pixel
    /// because image encoders reject empty images.
    pub fn new(width: u32, height: u32, font: Option<FontArc>) -> Self {
        Self {
            canvas: RgbaImage::new(width.max(1), height.max(1)),
            font,
            font_size: 0.0,
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.canvas
            .get_pixel_checked(x, y)
            .map(|p| Color::rgba(p[0], p[1], p[2], p[3]))
    }

    pub fn into_image(self) -> RgbaImage {
        self.canvas
    }

    fn blend_at(&mut self, x: i64, y: i64, color: Color, coverage: f32) {
        if x < 0 || y < 0 {
            return;
        }
        if let Some(dst) = self.canvas.get_pixel_mut_checked(x as u32, y as u32) {
            blend(dst, color, coverage);
        }
    }

    /// Fill pixels whose centers lie in `[x0, x1) x [y0, y1)`.
    fn fill_span(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: Color) {
        let (w, h) = self.canvas.dimensions();
        let first = |v: f32, max: u32| ((v - 0.5).ceil().max(0.0) as u32).min(max);
        let (cx0, cx1) = (first(x0, w), first(x1, w));
        let (cy0, cy1) = (first(y0, h), first(y1, h));

        for y in cy0..cy1 {
            for x in cx0..cx1 {
                blend(self.canvas.get_pixel_mut(x, y), color, 1.0);
            }
        }
    }
}

impl Surface for RasterSurface {
    fn size(&self) -> (u32, u32) {
        self.canvas.dimensions()
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.fill_span(
            rect.x,
            rect.y,
            rect.x + rect.width,
            rect.y + rect.height,
            color,
        );
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, line_width: f32) {
        if line_width <= 0.0 {
            return;
        }
        let half = line_width / 2.0;
        let (ox0, oy0) = (rect.x - half, rect.y - half);
        let (ox1, oy1) = (rect.x + rect.width + half, rect.y + rect.height + half);
        let (ix0, iy0) = (rect.x + half, rect.y + half);
        let (ix1, iy1) = (rect.x + rect.width - half, rect.y + rect.height - half);

        if ix1 <= ix0 || iy1 <= iy0 {
            // Line is at least as wide as the square: solid block.
            self.fill_span(ox0, oy0, ox1, oy1, color);
            return;
        }

        self.fill_span(ox0, oy0, ox1, iy0, color); // top
        self.fill_span(ox0, iy1, ox1, oy1, color); // bottom
        self.fill_span(ox0, iy0, ix0, iy1, color); // left
        self.fill_span(ix1, iy0, ox1, iy1, color); // right
    }

    fn set_font(&mut self, family: &str, px_size: f32) {
        if let Some(font) = &self.font {
            log::trace!(
                "Font '{}' requested at {}px, using loaded face ({} glyphs)",
                family,
                px_size,
                font.glyph_count()
            );
        }
        self.font_size = px_size;
    }

    fn fill_text(&mut self, text: &str, center: (f32, f32), color: Color) {
        let Some(font) = self.font.clone() else {
            return;
        };
        if self.font_size <= 0.0 {
            return;
        }

        let scaled = font.as_scaled(em_scale(&font, self.font_size));

        let mut glyphs: Vec<Glyph> = Vec::new();
        let mut caret = 0.0;
        for c in text.chars() {
            let mut glyph = scaled.scaled_glyph(c);
            if let Some(prev) = glyphs.last() {
                caret += scaled.kern(prev.id, glyph.id);
            }
            glyph.position = point(caret, 0.0);
            caret += scaled.h_advance(glyph.id);
            glyphs.push(glyph);
        }

        // Horizontal center on the advance width, vertical center on the em box.
        let left = center.0 - caret / 2.0;
        let baseline = center.1 + (scaled.ascent() + scaled.descent()) / 2.0;

        for glyph in glyphs {
            let positioned = Glyph {
                position: point(left + glyph.position.x, baseline),
                ..glyph
            };
            let Some(outlined) = font.outline_glyph(positioned) else {
                continue; // whitespace
            };
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, coverage| {
                self.blend_at(
                    bounds.min.x as i64 + gx as i64,
                    bounds.min.y as i64 + gy as i64,
                    color,
                    coverage,
                );
            });
        }
    }

    fn encode_png(&self) -> Result<Vec<u8>, RenderError> {
        let (w, h) = self.canvas.dimensions();
        let mut buf = Vec::new();
        PngEncoder::new(&mut buf).write_image(self.canvas.as_raw(), w, h, ExtendedColorType::Rgba8)?;
        Ok(buf)
    }
}

/// Scale at which one em is `px` pixels, matching CSS font sizes.
fn em_scale(font: &FontArc, px: f32) -> PxScale {
    match font.units_per_em() {
        Some(upem) if upem > 0.0 => PxScale::from(px * font.height_unscaled() / upem),
        _ => PxScale::from(px),
    }
}

/// Source-over blend of `color` at `coverage` onto `dst`.
fn blend(dst: &mut Rgba<u8>, color: Color, coverage: f32) {
    let sa = color.a as f32 / 255.0 * coverage.clamp(0.0, 1.0);
    if sa <= 0.0 {
        return;
    }
    let da = dst[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);

    let src = [color.r, color.g, color.b];
    for (i, s) in src.into_iter().enumerate() {
        let mixed = (s as f32 * sa + dst[i] as f32 * da * (1.0 - sa)) / out_a;
        dst[i] = mixed.round().clamp(0.0, 255.0) as u8;
    }
    dst[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
}
