//! Render error types

use std::path::PathBuf;

/// Errors that can occur while rendering a grid to a file.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Requested output format is not png or webp
    #[error("unsupported output format '{0}' (expected png or webp)")]
    UnsupportedFormat(String),

    /// Reading, writing or removing a file failed
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Layout needs more pixels than a canvas may hold
    #[error("canvas for a {cols}x{rows} grid exceeds the size limit")]
    CanvasTooLarge { cols: usize, rows: usize },

    /// Encoding the canvas failed
    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    /// Transcoding the intermediate PNG failed
    #[error("failed to transcode '{}': {source}", path.display())]
    Transcode {
        path: PathBuf,
        source: image::ImageError,
    },

    /// A font file could not be read or parsed
    #[error("failed to load font '{}': {reason}", path.display())]
    Font { path: PathBuf, reason: String },

    /// A blocking task did not run to completion
    #[error("background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl RenderError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RenderError::Io {
            path: path.into(),
            source,
        }
    }
}
