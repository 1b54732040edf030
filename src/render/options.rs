//! Layout and style options for a render.

use super::error::RenderError;
use crate::color::Color;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Encoded image format written to the output path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Png,
    /// Written as PNG first, then transcoded.
    Webp,
}

impl OutputFormat {
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Webp => "webp",
        }
    }

    /// Whether the drawing surface can write this format without a transcode step.
    pub fn is_native(&self) -> bool {
        matches!(self, OutputFormat::Png)
    }
}

impl FromStr for OutputFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(OutputFormat::Png),
            "webp" => Ok(OutputFormat::Webp),
            _ => Err(RenderError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Font size relative to the square edge.
pub const DEFAULT_FONT_SCALE: f32 = 0.8;

pub const DEFAULT_FONT_FAMILY: &str = "Helvetica Neue";

/// Everything the renderer needs besides the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Edge length of one square in pixels.
    pub square_size: u32,
    pub square_gap: u32,
    /// Space between the outermost squares and the image edge.
    pub padding: u32,
    pub square_color: Color,
    pub text_color: Color,
    /// `None` draws no borders.
    pub border_color: Option<Color>,
    pub border_width: u32,
    /// Canvas color behind the squares.
    pub background: Color,
    pub font_family: String,
    pub font_scale: f32,
    pub output: PathBuf,
    pub format: OutputFormat,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            square_size: 50,
            square_gap: 5,
            padding: 4,
            square_color: Color::WHITE,
            text_color: Color::BLACK,
            border_color: Some(Color::BLACK),
            border_width: 2,
            background: Color::WHITE,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_scale: DEFAULT_FONT_SCALE,
            output: PathBuf::from("output.png"),
            format: OutputFormat::Png,
        }
    }
}

impl RenderOptions {
    /// Pixel size of the letters.
    pub fn font_size(&self) -> f32 {
        self.square_size as f32 * self.font_scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parse() {
        assert_eq!("png".parse::<OutputFormat>().unwrap(), OutputFormat::Png);
        assert_eq!("WEBP".parse::<OutputFormat>().unwrap(), OutputFormat::Webp);
    }

    #[test]
    fn test_format_parse_rejects_unknown() {
        let err = "gif".parse::<OutputFormat>().unwrap_err();
        assert!(matches!(err, RenderError::UnsupportedFormat(ref f) if f == "gif"));
    }

    #[test]
    fn test_only_png_is_native() {
        assert!(OutputFormat::Png.is_native());
        assert!(!OutputFormat::Webp.is_native());
    }

    #[test]
    fn test_defaults() {
        let opts = RenderOptions::default();
        assert_eq!(opts.square_size, 50);
        assert_eq!(opts.square_gap, 5);
        assert_eq!(opts.padding, 4);
        assert_eq!(opts.border_color, Some(Color::BLACK));
        assert_eq!(opts.border_width, 2);
        assert_eq!(opts.format, OutputFormat::Png);
    }

    #[test]
    fn test_font_size_scales_with_square() {
        let opts = RenderOptions {
            square_size: 25,
            ..RenderOptions::default()
        };
        assert!((opts.font_size() - 20.0).abs() < f32::EPSILON);
    }
}
