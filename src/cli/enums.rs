//! CLI value types for output format and border color options.

use clap::ValueEnum;
use std::str::FromStr;

use crate::color::{Color, ColorParseError};
use crate::render::OutputFormat;

/// Output image format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    #[default]
    Png,
    Webp,
}

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Png => OutputFormat::Png,
            Format::Webp => OutputFormat::Webp,
        }
    }
}

/// Border color argument: a color, or `none` for no border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderColor(pub Option<Color>);

impl FromStr for BorderColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse_optional(s).map(BorderColor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_to_output_format() {
        assert_eq!(OutputFormat::from(Format::Png), OutputFormat::Png);
        assert_eq!(OutputFormat::from(Format::Webp), OutputFormat::Webp);
    }

    #[test]
    fn test_border_color_values() {
        assert_eq!("none".parse::<BorderColor>().unwrap(), BorderColor(None));
        assert_eq!(
            "#000".parse::<BorderColor>().unwrap(),
            BorderColor(Some(Color::BLACK))
        );
        assert!("blurple".parse::<BorderColor>().is_err());
    }
}
