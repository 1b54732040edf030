//! Persisting an encoded canvas, with a transcode step for non-PNG formats.

use super::error::RenderError;
use super::options::OutputFormat;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Converts a PNG file on disk into another format.
///
/// Runs on the blocking thread pool, hence the `Clone + 'static` bound.
pub trait Transcoder: Clone + Send + Sync + 'static {
    fn transcode(&self, source: &Path, dest: &Path, format: OutputFormat) -> Result<(), RenderError>;
}

/// Transcoder backed by the `image` crate's codecs. WebP output is lossless.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageTranscoder;

impl Transcoder for ImageTranscoder {
    fn transcode(&self, source: &Path, dest: &Path, format: OutputFormat) -> Result<(), RenderError> {
        let target = match format {
            OutputFormat::Png => image::ImageFormat::Png,
            OutputFormat::Webp => image::ImageFormat::WebP,
        };
        // The intermediate file has a `.tmp` extension, so name the codec.
        let reader = File::open(source)
            .map(BufReader::new)
            .map_err(|e| RenderError::io(source, e))?;
        let img = image::load(reader, image::ImageFormat::Png).map_err(|e| {
            RenderError::Transcode {
                path: source.to_path_buf(),
                source: e,
            }
        })?;
        img.save_with_format(dest, target)
            .map_err(|e| RenderError::Transcode {
                path: dest.to_path_buf(),
                source: e,
            })
    }
}

/// Path of the intermediate PNG: `<output-basename>.tmp` beside the output.
pub fn temp_path(output: &Path) -> PathBuf {
    let mut name = output
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "output".into());
    name.push(".tmp");
    output.with_file_name(name)
}

/// A file that is removed when the guard is dropped.
///
/// Call [`TempArtifact::remove`] on the success path to surface removal
/// errors; on any early return the drop handler deletes the file.
#[derive(Debug)]
pub struct TempArtifact {
    path: PathBuf,
    armed: bool,
}

impl TempArtifact {
    pub fn new(path: PathBuf) -> Self {
        Self { path, armed: true }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn remove(mut self) -> Result<(), RenderError> {
        self.armed = false;
        tokio::fs::remove_file(&self.path)
            .await
            .map_err(|e| RenderError::io(&self.path, e))?;
        log::info!("removed tmp file {}", self.path.display());
        Ok(())
    }
}

impl Drop for TempArtifact {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        match std::fs::remove_file(&self.path) {
            Ok(()) => log::debug!("cleaned up tmp file {}", self.path.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => log::warn!(
                "Failed to remove tmp file {}: {}",
                self.path.display(),
                e
            ),
        }
    }
}

async fn write_file(path: &Path, bytes: &[u8]) -> Result<(), RenderError> {
    tokio::fs::write(path, bytes)
        .await
        .map_err(|e| RenderError::io(path, e))
}

/// Write `png` to `output` in `format`.
///
/// PNG is written directly. Other formats go through a temporary PNG next to
/// the output which is transcoded and then deleted, on success or failure.
pub async fn write_output<T: Transcoder>(
    transcoder: &T,
    png: Vec<u8>,
    output: &Path,
    format: OutputFormat,
) -> Result<(), RenderError> {
    if format.is_native() {
        log::info!("writing to output file {}", output.display());
        return write_file(output, &png).await;
    }

    let tmp = TempArtifact::new(temp_path(output));
    log::info!("writing to tmp file {}", tmp.path().display());
    write_file(tmp.path(), &png).await?;

    log::info!("writing to output file {}", output.display());
    transcode_blocking(transcoder, tmp.path(), output, format).await?;

    tmp.remove().await
}

async fn transcode_blocking<T: Transcoder>(
    transcoder: &T,
    source: &Path,
    dest: &Path,
    format: OutputFormat,
) -> Result<(), RenderError> {
    let transcoder = transcoder.clone();
    let (source, dest) = (source.to_path_buf(), dest.to_path_buf());
    tokio::task::spawn_blocking(move || transcoder.transcode(&source, &dest, format)).await?
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_temp_path_sits_beside_output() {
        assert_eq!(
            temp_path(Path::new("/tmp/out/board.webp")),
            PathBuf::from("/tmp/out/board.webp.tmp")
        );
        assert_eq!(temp_path(Path::new("board.webp")), PathBuf::from("board.webp.tmp"));
    }

    #[test]
    fn test_temp_artifact_removed_on_drop() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("x.tmp");
        std::fs::write(&path, b"data").unwrap();
        drop(TempArtifact::new(path.clone()));
        assert!(!path.exists());
    }

    #[test]
    fn test_temp_artifact_drop_tolerates_missing_file() {
        let dir = tempdir().unwrap();
        drop(TempArtifact::new(dir.path().join("never-written.tmp")));
    }

    fn write_png(path: &Path, width: u32, height: u32) {
        use crate::color::Color;
        use crate::render::{RasterSurface, Rect, Surface};

        let mut surface = RasterSurface::new(width, height, None);
        surface.fill_rect(
            Rect::new(0.0, 0.0, width as f32, height as f32),
            Color::rgb(0x6c, 0xa9, 0x65),
        );
        std::fs::write(path, surface.encode_png().unwrap()).unwrap();
    }

    #[test]
    fn test_image_transcoder_reads_tmp_extension() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("board.webp.tmp");
        let dest = dir.path().join("board.webp");
        write_png(&source, 7, 5);

        ImageTranscoder
            .transcode(&source, &dest, OutputFormat::Webp)
            .unwrap();

        let bytes = std::fs::read(&dest).unwrap();
        assert_eq!(&bytes[..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WEBP");
        let img = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (7, 5));
        assert_eq!(img.get_pixel(3, 2).0, [0x6c, 0xa9, 0x65, 255]);
    }

    #[test]
    fn test_image_transcoder_missing_source_is_io_error() {
        let dir = tempdir().unwrap();
        let err = ImageTranscoder
            .transcode(
                &dir.path().join("missing.tmp"),
                &dir.path().join("out.webp"),
                OutputFormat::Webp,
            )
            .unwrap_err();
        assert!(matches!(err, RenderError::Io { .. }));
    }

    #[tokio::test]
    async fn test_write_output_webp_removes_tmp() {
        let dir = tempdir().unwrap();
        let png_path = dir.path().join("src.png");
        write_png(&png_path, 4, 4);
        let png = std::fs::read(&png_path).unwrap();
        std::fs::remove_file(&png_path).unwrap();

        let output = dir.path().join("out.webp");
        write_output(&ImageTranscoder, png, &output, OutputFormat::Webp)
            .await
            .unwrap();

        assert!(output.is_file());
        assert!(!temp_path(&output).exists());
    }

    #[tokio::test]
    async fn test_temp_artifact_remove_reports_missing_file() {
        let dir = tempdir().unwrap();
        let tmp = TempArtifact::new(dir.path().join("gone.tmp"));
        assert!(matches!(tmp.remove().await, Err(RenderError::Io { .. })));
    }
}
