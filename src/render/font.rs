//! Font discovery for glyph rasterization.

use super::error::RenderError;
use ab_glyph::{FontArc, FontVec};
use std::path::{Path, PathBuf};

/// Well-known locations of a sans-serif face, tried in order.
pub const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/HelveticaNeue.ttc",
    "/System/Library/Fonts/Helvetica.ttc",
    "/Library/Fonts/Arial.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Load a font file. Collections (`.ttc`) use their first face.
pub fn load_font_file(path: &Path) -> Result<FontArc, RenderError> {
    let data = std::fs::read(path).map_err(|e| RenderError::io(path, e))?;
    let font = FontVec::try_from_vec_and_index(data, 0).map_err(|e| RenderError::Font {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    Ok(FontArc::new(font))
}

/// Resolve the font to draw letters with.
///
/// An explicit path must load. Without one, the first system candidate that
/// parses is used; `None` means letters will not be drawn.
pub fn resolve_font(explicit: Option<&Path>) -> Result<Option<FontArc>, RenderError> {
    if let Some(path) = explicit {
        let font = load_font_file(path)?;
        log::debug!("Loaded font {}", path.display());
        return Ok(Some(font));
    }

    let found = SYSTEM_FONT_CANDIDATES
        .iter()
        .map(PathBuf::from)
        .filter(|p| p.is_file())
        .find_map(|p| match load_font_file(&p) {
            Ok(font) => {
                log::debug!("Using system font {}", p.display());
                Some(font)
            }
            Err(e) => {
                log::debug!("Skipping font candidate: {}", e);
                None
            }
        });

    if found.is_none() {
        log::warn!("No usable system font found; letters will not be drawn (pass --font <FILE>)");
    }
    Ok(found)
}
