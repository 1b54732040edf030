//! Configuration file handling for letters-in-squares.
//!
//! Loads configuration from `~/.config/letters-in-squares/config.toml` or a custom path.

use crate::color::Color;
use crate::render::{OutputFormat, RenderOptions};
use crate::wordle::Palette;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration file structure for letters-in-squares.
#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub wordle: WordleConfig,
}

/// `[render]` section. Every key falls back to the command's default.
#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    pub size: Option<u32>,
    pub gap: Option<u32>,
    pub padding: Option<u32>,
    pub square_color: Option<Color>,
    pub text_color: Option<Color>,
    /// A color, or `"none"` for no borders.
    pub border_color: Option<String>,
    pub border_width: Option<u32>,
    pub background: Option<Color>,
    pub font: Option<PathBuf>,
    pub format: Option<String>,
}

/// `[wordle]` section: board colors.
#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct WordleConfig {
    pub correct_color: Option<Color>,
    pub almost_color: Option<Color>,
    pub wrong_color: Option<Color>,
    pub text_color: Option<Color>,
}

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            Self::load_from_explicit(&path)
        } else {
            log::debug!("No config file at {}, using defaults", path.display());
            Ok(Config::default())
        }
    }

    /// Load configuration from a path the user asked for. The file must exist.
    pub fn load_from_explicit(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}

impl RenderConfig {
    /// Overlay the configured values onto `base`.
    pub fn apply(&self, mut base: RenderOptions) -> Result<RenderOptions, ConfigError> {
        if let Some(size) = self.size {
            base.square_size = size;
        }
        if let Some(gap) = self.gap {
            base.square_gap = gap;
        }
        if let Some(padding) = self.padding {
            base.padding = padding;
        }
        if let Some(color) = self.square_color {
            base.square_color = color;
        }
        if let Some(color) = self.text_color {
            base.text_color = color;
        }
        if let Some(ref border) = self.border_color {
            base.border_color =
                Color::parse_optional(border).map_err(|e| ConfigError::Invalid {
                    key: "render.border_color",
                    reason: e.to_string(),
                })?;
        }
        if let Some(width) = self.border_width {
            base.border_width = width;
        }
        if let Some(color) = self.background {
            base.background = color;
        }
        if let Some(ref format) = self.format {
            base.format = format.parse::<OutputFormat>().map_err(|e| ConfigError::Invalid {
                key: "render.format",
                reason: e.to_string(),
            })?;
        }
        Ok(base)
    }
}

impl WordleConfig {
    pub fn palette(&self) -> Palette {
        let default = Palette::default();
        Palette {
            correct: self.correct_color.unwrap_or(default.correct),
            almost: self.almost_color.unwrap_or(default.almost),
            wrong: self.wrong_color.unwrap_or(default.wrong),
            text: self.text_color.unwrap_or(default.text),
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("letters-in-squares").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/letters-in-squares/config.toml")
        })
}

/// Commented config written by `config init`.
pub const DEFAULT_CONFIG: &str = r##"# letters-in-squares configuration

[render]
# Square edge length in pixels
# size = 50
# Gap between squares
# gap = 5
# Space around the grid
# padding = 4
# Colors: "#rrggbb", "#rgb" or a name like "white"
# square_color = "white"
# text_color = "black"
# Border color, or "none" to disable borders
# border_color = "black"
# border_width = 2
# background = "white"
# Font file used for letters (default: search system fonts)
# font = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"
# Output format: png or webp
# format = "png"

[wordle]
# correct_color = "#6ca965"
# almost_color = "#c8b653"
# wrong_color = "#787c7f"
# text_color = "white"
"##;
