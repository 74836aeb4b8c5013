//! Pure Rust image processing backend.
//!
//! Everything is statically linked into the binary.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Dimension probe (no pixel decode) | `image::image_dimensions` |
//! | EXIF orientation / resolution | `kamadak-exif` via [`metadata`](super::metadata) |
//! | JFIF density fallback | custom APP0 walk in [`metadata`](super::metadata) |
//! | Decode (JPEG, PNG, TIFF, WebP) | `image` crate (pure Rust decoders) |
//! | Orientation correction | `image::metadata::Orientation` + `apply_orientation` |
//! | Resize | `DynamicImage::resize_exact` with `Lanczos3` |
//! | Encode | `image::codecs::jpeg::JpegEncoder`, in memory, then one write |

use super::backend::{ImageBackend, ImageInfo, ImagingError};
use super::calculations::thumbnail_dimensions;
use super::metadata::{self, DEFAULT_DPI};
use super::params::RenderParams;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::metadata::Orientation;
use image::{DynamicImage, ImageReader};
use std::io::Cursor;
use std::path::Path;

/// Pure Rust backend using the `image` crate ecosystem.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a decode-stage `image` error: I/O problems are filesystem errors,
/// everything else means the bytes are not a readable image.
fn decode_error(path: &Path, err: image::ImageError) -> ImagingError {
    match err {
        image::ImageError::IoError(source) => ImagingError::Filesystem {
            path: path.to_path_buf(),
            source,
        },
        other => ImagingError::Decode {
            path: path.to_path_buf(),
            detail: other.to_string(),
        },
    }
}

/// Load and decode an image from disk.
fn load_image(path: &Path) -> Result<DynamicImage, ImagingError> {
    ImageReader::open(path)
        .map_err(|e| ImagingError::Filesystem {
            path: path.to_path_buf(),
            source: e,
        })?
        .decode()
        .map_err(|e| decode_error(path, e))
}

/// Rotate/flip the pixels per the raw EXIF orientation, when the value is
/// one the library recognizes (1-8). Anything else leaves the image as-is.
fn orient(img: &mut DynamicImage, raw_orientation: Option<u32>) {
    let Some(raw) = raw_orientation else { return };
    let Ok(raw) = u8::try_from(raw) else { return };
    if let Some(orientation) = Orientation::from_exif(raw) {
        img.apply_orientation(orientation);
    }
}

impl ImageBackend for RustBackend {
    fn probe(&self, path: &Path) -> Result<ImageInfo, ImagingError> {
        let (stored_w, stored_h) =
            image::image_dimensions(path).map_err(|e| decode_error(path, e))?;
        if stored_w == 0 || stored_h == 0 {
            return Err(ImagingError::InvalidDimensions {
                path: path.to_path_buf(),
                width: stored_w,
                height: stored_h,
            });
        }

        let meta = metadata::read_exif_meta(path);
        let swap = meta
            .orientation
            .is_some_and(metadata::orientation_swaps_dimensions);
        let (width, height) = if swap {
            (stored_h, stored_w)
        } else {
            (stored_w, stored_h)
        };
        let dpi = meta
            .dpi
            .or_else(|| metadata::read_jfif_dpi(path))
            .unwrap_or(DEFAULT_DPI);

        Ok(ImageInfo { width, height, dpi })
    }

    fn render_thumbnail(&self, params: &RenderParams) -> Result<(), ImagingError> {
        let source = params.source.as_path();
        let mut img = load_image(source)?;
        orient(&mut img, metadata::read_exif_meta(source).orientation);

        let (width, height) = (img.width(), img.height());
        if width == 0 || height == 0 {
            return Err(ImagingError::InvalidDimensions {
                path: source.to_path_buf(),
                width,
                height,
            });
        }

        let (thumb_w, thumb_h) = thumbnail_dimensions(width, height, params.target_width);
        let resized = if (thumb_w, thumb_h) == (width, height) {
            img
        } else {
            img.resize_exact(thumb_w, thumb_h, FilterType::Lanczos3)
        };

        // JPEG holds grayscale or RGB; everything else converts, dropping alpha
        let encodable = match resized {
            DynamicImage::ImageLuma8(_) | DynamicImage::ImageRgb8(_) => resized,
            other => DynamicImage::ImageRgb8(other.to_rgb8()),
        };

        // encode fully in memory so a failed render never leaves a partial file
        let mut jpeg = Vec::new();
        let encoder =
            JpegEncoder::new_with_quality(Cursor::new(&mut jpeg), params.quality.value() as u8);
        encodable
            .write_with_encoder(encoder)
            .map_err(|e| ImagingError::Encode {
                path: source.to_path_buf(),
                detail: e.to_string(),
            })?;

        std::fs::write(&params.output, jpeg).map_err(|e| ImagingError::Filesystem {
            path: params.output.clone(),
            source: e,
        })
    }
}
