//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the two operations every backend must
//! support: probe (oriented dimensions plus DPI, no pixel decode) and
//! render_thumbnail (decode, orient, resize, encode).
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), which needs no
//! external tools.

use super::params::RenderParams;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Per-file failure reasons. All of these are caught at the single-file
/// boundary by the pipeline; none of them aborts a batch.
#[derive(Error, Debug)]
pub enum ImagingError {
    /// The file is not a readable image: corrupt, truncated, or a format
    /// the decoder does not recognize despite the extension.
    #[error("cannot decode {}: {detail}", path.display())]
    Decode { path: PathBuf, detail: String },

    /// The decoder reported a zero-sized image.
    #[error("invalid dimensions {width}x{height} in {}", path.display())]
    InvalidDimensions {
        path: PathBuf,
        width: u32,
        height: u32,
    },

    /// Resize or JPEG encoding failed on a structurally valid image.
    #[error("cannot encode {}: {detail}", path.display())]
    Encode { path: PathBuf, detail: String },

    /// Reading the source or writing the target failed at the I/O level.
    #[error("filesystem error on {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result of a probe: dimensions as the image should display (EXIF
/// orientation already accounted for) plus the nominal horizontal DPI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub dpi: u32,
}

/// Trait for image processing backends.
///
/// Both pipeline passes are written against this trait so orchestration can
/// be tested without decoding a single pixel.
pub trait ImageBackend {
    /// Oriented dimensions and DPI, read from headers and metadata only.
    fn probe(&self, path: &Path) -> Result<ImageInfo, ImagingError>;

    /// Decode the source, apply EXIF orientation, resize to the target
    /// width and write a JPEG to the output path.
    fn render_thumbnail(&self, params: &RenderParams) -> Result<(), ImagingError>;
}
