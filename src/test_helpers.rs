//! Shared test utilities for the votesheet test suite.
//!
//! Builds small on-disk fixtures: synthetic JPEGs, JPEGs with hand-built
//! EXIF blocks, deliberately corrupt files, and bare tree entries for
//! traversal tests.

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder, Rgb, RgbImage, Rgba, RgbaImage};
use std::io::Cursor;
use std::path::Path;

// =========================================================================
// Image fixtures
// =========================================================================

/// Write a small JPEG with a deterministic gradient pattern.
pub fn create_test_jpeg(path: &Path, width: u32, height: u32) {
    let file = std::fs::File::create(path).unwrap();
    let writer = std::io::BufWriter::new(file);
    JpegEncoder::new(writer)
        .write_image(
            test_pixels(width, height).as_raw(),
            width,
            height,
            ExtendedColorType::Rgb8,
        )
        .unwrap();
}

/// Write an RGBA PNG, for exercising alpha-to-RGB conversion.
pub fn create_test_png_rgba(path: &Path, width: u32, height: u32) {
    let img = RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, 128, 200])
    });
    img.save(path).unwrap();
}

/// Write a file that claims to be a JPEG but cannot be decoded.
pub fn create_corrupt_jpeg(path: &Path) {
    std::fs::write(path, b"\xFF\xD8 not actually image data").unwrap();
}

/// Create an empty file, creating parent directories as needed. Enough for
/// traversal and mock-backend tests, which never decode.
pub fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, b"").unwrap();
}

fn test_pixels(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    })
}

// =========================================================================
// EXIF fixtures
// =========================================================================

/// EXIF fields to embed in a test JPEG.
#[derive(Debug, Clone, Copy, Default)]
pub struct TestExif {
    pub orientation: Option<u16>,
    /// XResolution as (numerator, denominator).
    pub x_resolution: Option<(u32, u32)>,
    /// 2 = inches, 3 = centimeters.
    pub resolution_unit: Option<u16>,
}

impl TestExif {
    pub fn orientation(value: u16) -> Self {
        Self {
            orientation: Some(value),
            ..Self::default()
        }
    }

    pub fn resolution(num: u32, denom: u32, unit: u16) -> Self {
        Self {
            orientation: None,
            x_resolution: Some((num, denom)),
            resolution_unit: Some(unit),
        }
    }
}

/// Write a gradient JPEG carrying the given EXIF fields in an APP1 segment
/// spliced in right after SOI.
pub fn create_test_jpeg_with_exif(path: &Path, width: u32, height: u32, exif: &TestExif) {
    let mut jpeg = Vec::new();
    JpegEncoder::new(Cursor::new(&mut jpeg))
        .write_image(
            test_pixels(width, height).as_raw(),
            width,
            height,
            ExtendedColorType::Rgb8,
        )
        .unwrap();

    let payload = exif_app1_payload(exif);
    assert!(jpeg.starts_with(&[0xFF, 0xD8]), "encoder output is not a JPEG");
    let mut out = Vec::with_capacity(jpeg.len() + payload.len() + 4);
    out.extend_from_slice(&jpeg[..2]);
    out.extend_from_slice(&[0xFF, 0xE1]);
    out.extend_from_slice(&((payload.len() + 2) as u16).to_be_bytes());
    out.extend_from_slice(&payload);
    out.extend_from_slice(&jpeg[2..]);

    std::fs::write(path, out).unwrap();
}

/// Build an `Exif\0\0` APP1 payload: a minimal little-endian TIFF with one
/// IFD. Entries are emitted in ascending tag order as the format requires.
fn exif_app1_payload(exif: &TestExif) -> Vec<u8> {
    #[derive(Clone, Copy)]
    enum EntryValue {
        Short(u16),
        Rational(u32, u32),
    }

    let mut entries: Vec<(u16, EntryValue)> = Vec::new();
    if let Some(o) = exif.orientation {
        entries.push((0x0112, EntryValue::Short(o)));
    }
    if let Some((num, denom)) = exif.x_resolution {
        entries.push((0x011A, EntryValue::Rational(num, denom)));
    }
    if let Some(unit) = exif.resolution_unit {
        entries.push((0x0128, EntryValue::Short(unit)));
    }

    let mut tiff = Vec::new();
    tiff.extend_from_slice(b"II");
    tiff.extend_from_slice(&42u16.to_le_bytes());
    tiff.extend_from_slice(&8u32.to_le_bytes()); // IFD0 right after header
    tiff.extend_from_slice(&(entries.len() as u16).to_le_bytes());

    // out-of-line values land after the entry table and next-IFD link
    let data_start = 8 + 2 + entries.len() * 12 + 4;
    let mut data_area: Vec<u8> = Vec::new();

    for (tag, value) in &entries {
        tiff.extend_from_slice(&tag.to_le_bytes());
        match value {
            EntryValue::Short(v) => {
                tiff.extend_from_slice(&3u16.to_le_bytes()); // SHORT
                tiff.extend_from_slice(&1u32.to_le_bytes());
                tiff.extend_from_slice(&v.to_le_bytes());
                tiff.extend_from_slice(&[0, 0]);
            }
            EntryValue::Rational(num, denom) => {
                tiff.extend_from_slice(&5u16.to_le_bytes()); // RATIONAL
                tiff.extend_from_slice(&1u32.to_le_bytes());
                let offset = (data_start + data_area.len()) as u32;
                tiff.extend_from_slice(&offset.to_le_bytes());
                data_area.extend_from_slice(&num.to_le_bytes());
                data_area.extend_from_slice(&denom.to_le_bytes());
            }
        }
    }

    tiff.extend_from_slice(&0u32.to_le_bytes()); // no next IFD
    tiff.extend_from_slice(&data_area);

    let mut payload = Vec::with_capacity(6 + tiff.len());
    payload.extend_from_slice(b"Exif\0\0");
    payload.extend_from_slice(&tiff);
    payload
}
