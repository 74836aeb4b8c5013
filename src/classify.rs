//! Orientation/DPI bucketing for the statistics pass.
//!
//! Every readable image lands in exactly one of six buckets:
//! orientation (landscape when `width > height`, portrait otherwise,
//! squares included) crossed with a DPI tier around a single threshold
//! (`>250` high, `<250` low, `=250` other). The same threshold applies to
//! both orientations.

use serde::Serialize;

use crate::imaging::ImageInfo;

/// DPI boundary between the low and high tiers. Images at exactly this
/// value fall into the "other" tier.
pub const DPI_THRESHOLD: u32 = 250;

/// One of the six orientation x DPI-tier categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    LandscapeHigh,
    LandscapeLow,
    LandscapeOther,
    PortraitHigh,
    PortraitLow,
    PortraitOther,
}

impl Bucket {
    /// Report label, threshold included.
    pub fn label(self) -> &'static str {
        match self {
            Bucket::LandscapeHigh => "Landscape High DPI (>250)",
            Bucket::LandscapeLow => "Landscape Low DPI (<250)",
            Bucket::LandscapeOther => "Landscape Other DPI (=250)",
            Bucket::PortraitHigh => "Portrait High DPI (>250)",
            Bucket::PortraitLow => "Portrait Low DPI (<250)",
            Bucket::PortraitOther => "Portrait Other DPI (=250)",
        }
    }
}

/// Pick the bucket for one image. Total: every `(width, height, dpi)`
/// combination maps to exactly one bucket.
pub fn classify(info: &ImageInfo) -> Bucket {
    let landscape = info.width > info.height;
    if landscape {
        if info.dpi > DPI_THRESHOLD {
            Bucket::LandscapeHigh
        } else if info.dpi < DPI_THRESHOLD {
            Bucket::LandscapeLow
        } else {
            Bucket::LandscapeOther
        }
    } else {
        // portrait, squares included
        if info.dpi > DPI_THRESHOLD {
            Bucket::PortraitHigh
        } else if info.dpi < DPI_THRESHOLD {
            Bucket::PortraitLow
        } else {
            Bucket::PortraitOther
        }
    }
}

/// Counts per bucket for one statistics pass.
///
/// The sum of all six counters equals the number of successfully read
/// images; unreadable files are logged by the caller and never counted.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub landscape_high_dpi: u64,
    pub landscape_low_dpi: u64,
    pub landscape_other_dpi: u64,
    pub portrait_high_dpi: u64,
    pub portrait_low_dpi: u64,
    pub portrait_other_dpi: u64,
}

impl Stats {
    /// Count one classified image.
    pub fn record(&mut self, bucket: Bucket) {
        match bucket {
            Bucket::LandscapeHigh => self.landscape_high_dpi += 1,
            Bucket::LandscapeLow => self.landscape_low_dpi += 1,
            Bucket::LandscapeOther => self.landscape_other_dpi += 1,
            Bucket::PortraitHigh => self.portrait_high_dpi += 1,
            Bucket::PortraitLow => self.portrait_low_dpi += 1,
            Bucket::PortraitOther => self.portrait_other_dpi += 1,
        }
    }

    /// Labeled counts in the fixed reporting order: landscape
    /// high/low/other, then portrait high/low/other.
    pub fn rows(&self) -> [(&'static str, u64); 6] {
        [
            (Bucket::LandscapeHigh.label(), self.landscape_high_dpi),
            (Bucket::LandscapeLow.label(), self.landscape_low_dpi),
            (Bucket::LandscapeOther.label(), self.landscape_other_dpi),
            (Bucket::PortraitHigh.label(), self.portrait_high_dpi),
            (Bucket::PortraitLow.label(), self.portrait_low_dpi),
            (Bucket::PortraitOther.label(), self.portrait_other_dpi),
        ]
    }

    /// Total images counted across all buckets.
    pub fn total(&self) -> u64 {
        self.rows().iter().map(|(_, n)| n).sum()
    }
}
