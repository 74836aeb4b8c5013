//! Run configuration.
//!
//! One `GalleryConfig` value describes a whole run: where to scan, where to
//! write, how wide the thumbnails are, which extensions count as images, and
//! the skip/cap switches. The CLI layer builds it once from flags and passes
//! it down; nothing in the pipeline reads ambient state.
//!
//! Defaults mirror the tool's common case: scan the current directory, write
//! into a `gallery` subfolder, 600px thumbnails, `.jpg`/`.jpeg` inputs.

use std::path::{Path, PathBuf};

/// Name of the output subfolder created under the input root when no
/// explicit output path is given.
pub const DEFAULT_OUTPUT_FOLDER_NAME: &str = "gallery";

/// Default thumbnail target width in pixels.
pub const DEFAULT_THUMB_WIDTH: u32 = 600;

/// Default accepted input extensions (lowercase, with leading dot).
pub const DEFAULT_EXTENSIONS: &[&str] = &[".jpg", ".jpeg"];

/// Resolved configuration for one gallery run.
#[derive(Debug, Clone)]
pub struct GalleryConfig {
    /// Root directory scanned recursively for input images.
    pub input_dir: PathBuf,
    /// Directory thumbnails are written to. Always excluded from the scan,
    /// even when nested inside `input_dir`.
    pub output_dir: PathBuf,
    /// Target thumbnail width in pixels. Sources narrower than this keep
    /// their original size.
    pub thumb_width: u32,
    /// Accepted file extensions, normalized lowercase with leading dot.
    pub extensions: Vec<String>,
    /// Skip rendering when the target filename already exists.
    pub skip_existing: bool,
    /// Stop the batch once this many thumbnails have been created this run.
    pub max_images: Option<u64>,
}

impl GalleryConfig {
    /// Build a config with defaults filled in. `output_dir = None` places
    /// the output folder under the input root.
    pub fn new(input_dir: PathBuf, output_dir: Option<PathBuf>) -> Self {
        let output_dir =
            output_dir.unwrap_or_else(|| input_dir.join(DEFAULT_OUTPUT_FOLDER_NAME));
        Self {
            input_dir,
            output_dir,
            thumb_width: DEFAULT_THUMB_WIDTH,
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            skip_existing: false,
            max_images: None,
        }
    }

    /// True when `path` has one of the configured extensions,
    /// case-insensitively.
    pub fn matches_extension(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };
        let dotted = format!(".{}", ext.to_ascii_lowercase());
        self.extensions.iter().any(|e| *e == dotted)
    }
}

/// Parse a comma-separated extension list into the normalized form
/// (lowercase, leading dot, empty items dropped). A list that parses to
/// nothing falls back to the defaults.
///
/// ```
/// use votesheet::config::parse_extensions;
///
/// assert_eq!(parse_extensions("jpg, .JPEG"), vec![".jpg", ".jpeg"]);
/// assert_eq!(parse_extensions(""), vec![".jpg", ".jpeg"]);
/// ```
pub fn parse_extensions(raw: &str) -> Vec<String> {
    let parsed: Vec<String> = raw
        .split(',')
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .map(|item| {
            let item = item.to_ascii_lowercase();
            if item.starts_with('.') {
                item
            } else {
                format!(".{item}")
            }
        })
        .collect();
    if parsed.is_empty() {
        DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect()
    } else {
        parsed
    }
}
