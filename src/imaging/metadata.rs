//! EXIF and JFIF metadata extraction.
//!
//! Everything here is best-effort: a file with no metadata, unreadable
//! metadata, or nonsense values simply yields `None`s and the caller falls
//! back to defaults. Decode errors are someone else's concern.
//!
//! DPI resolution order: EXIF `XResolution`/`ResolutionUnit` first, then the
//! JPEG JFIF APP0 density field, then [`DEFAULT_DPI`]. kamadak-exif only
//! reads the Exif APP1 payload, so the JFIF fallback walks the JPEG marker
//! segments itself.

use exif::{In, Tag, Value};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Nominal resolution assumed when a file carries none.
pub const DEFAULT_DPI: u32 = 72;

/// How far into the stream the JFIF scan reads. APP0 sits at the front of
/// the stream, right after SOI.
const JFIF_SCAN_LIMIT: u64 = 64 * 1024;

const JFIF_HEADER: &[u8] = b"JFIF\0";

/// EXIF fields the pipeline cares about.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExifMeta {
    /// Raw orientation tag value (1-8) when present.
    pub orientation: Option<u32>,
    /// Horizontal resolution in dots per inch, rounded.
    pub dpi: Option<u32>,
}

/// Read orientation and resolution from a file's EXIF block, if any.
pub fn read_exif_meta(path: &Path) -> ExifMeta {
    let Ok(file) = File::open(path) else {
        return ExifMeta::default();
    };
    let mut reader = BufReader::new(file);
    let Ok(exif) = exif::Reader::new().read_from_container(&mut reader) else {
        return ExifMeta::default();
    };

    let orientation = exif
        .get_field(Tag::Orientation, In::PRIMARY)
        .and_then(|field| field.value.get_uint(0));

    ExifMeta {
        orientation,
        dpi: exif_dpi(&exif),
    }
}

fn exif_dpi(exif: &exif::Exif) -> Option<u32> {
    let field = exif.get_field(Tag::XResolution, In::PRIMARY)?;
    let value = match &field.value {
        Value::Rational(v) => v.first()?.to_f64(),
        _ => return None,
    };
    if !value.is_finite() {
        return None;
    }
    // ResolutionUnit: 2 = inches (the EXIF default), 3 = centimeters
    let unit = exif
        .get_field(Tag::ResolutionUnit, In::PRIMARY)
        .and_then(|field| field.value.get_uint(0))
        .unwrap_or(2);
    let dpi = if unit == 3 { value * 2.54 } else { value };
    Some(dpi.round() as u32)
}

/// True when the raw EXIF orientation transposes the image: stored rows
/// become displayed columns, so reported width and height swap.
pub fn orientation_swaps_dimensions(orientation: u32) -> bool {
    matches!(orientation, 5..=8)
}

/// JFIF APP0 density for a file, in dots per inch. Reads only the head of
/// the stream.
pub fn read_jfif_dpi(path: &Path) -> Option<u32> {
    let file = File::open(path).ok()?;
    let mut head = Vec::new();
    file.take(JFIF_SCAN_LIMIT).read_to_end(&mut head).ok()?;
    jfif_density_dpi(&head)
}

/// Extract the horizontal JFIF density from JPEG bytes.
///
/// APP0 payload layout after the length field:
///   Bytes 0-4:  "JFIF\0"
///   Bytes 5-6:  version
///   Byte 7:     units (0 = aspect ratio only, 1 = dots/inch, 2 = dots/cm)
///   Bytes 8-9:  X density (big-endian u16)
///   Bytes 10-11: Y density
///
/// Unit 0 declares no physical density, so it yields `None`.
pub fn jfif_density_dpi(data: &[u8]) -> Option<u32> {
    if data.len() < 4 || data[0] != 0xFF || data[1] != 0xD8 {
        return None;
    }

    let mut pos = 2;
    while pos + 4 <= data.len() {
        if data[pos] != 0xFF {
            return None;
        }
        let marker = data[pos + 1];
        // fill bytes before a marker
        if marker == 0xFF {
            pos += 1;
            continue;
        }
        // SOS means entropy-coded data follows; no APP0 past that
        if marker == 0xDA {
            return None;
        }
        // standalone markers without a length field
        if marker == 0xD8 || marker == 0xD9 || marker == 0x01 || (0xD0..=0xD7).contains(&marker)
        {
            pos += 2;
            continue;
        }

        let seg_len = u16::from_be_bytes([data[pos + 2], data[pos + 3]]) as usize;
        if seg_len < 2 {
            return None;
        }
        let seg_start = pos + 4;
        let seg_end = pos + 2 + seg_len;
        if seg_end > data.len() {
            return None;
        }

        if marker == 0xE0 {
            let segment = &data[seg_start..seg_end];
            if segment.len() >= 12 && segment.starts_with(JFIF_HEADER) {
                let units = segment[7];
                let x_density = u16::from_be_bytes([segment[8], segment[9]]);
                return match units {
                    1 => Some(u32::from(x_density)),
                    2 => Some((f64::from(x_density) * 2.54).round() as u32),
                    _ => None,
                };
            }
        }

        pos = seg_end;
    }
    None
}
