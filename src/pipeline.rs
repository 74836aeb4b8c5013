//! The two passes over the image tree: statistics and thumbnails.
//!
//! Both passes walk the same files in the same order and treat every
//! per-file problem as survivable: a corrupt image is logged and the pass
//! moves on. The only fatal error is failing to create the output
//! directory, without which the thumbnail pass has nowhere to write.
//!
//! Thumbnails are numbered by walk position, and the serial advances even
//! when a file is skipped or fails. Re-running over the same tree therefore
//! assigns every source the same serial, which is what makes
//! `skip_existing` and incremental re-runs safe.
//!
//! Both passes take the backend as `&impl ImageBackend` so tests can drive
//! them with a scripted mock instead of a real decoder.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use crate::classify::{Stats, classify};
use crate::config::GalleryConfig;
use crate::imaging::{ImageBackend, Quality, RenderParams};
use crate::naming::build_output_filename;
use crate::walk::walk_images;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("cannot create output directory {}: {source}", path.display())]
    CreateOutputDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Counters from one thumbnail pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchReport {
    /// Thumbnails written in this run.
    pub created: u64,
    /// Outputs already present and left alone (`skip_existing` only).
    pub skipped_existing: u64,
    /// Source files that could not be probed or rendered.
    pub failed: u64,
}

/// First pass: probe every image and tally orientation/DPI buckets.
///
/// Unreadable files are logged and left out of the counts entirely; they
/// do not land in any bucket.
pub fn collect_stats(backend: &impl ImageBackend, config: &GalleryConfig) -> Stats {
    let mut stats = Stats::default();

    for path in walk_images(config) {
        match backend.probe(&path) {
            Ok(info) => stats.record(classify(&info)),
            Err(err) => warn!(
                "Skipping unreadable image for stats: {} ({err})",
                path.display()
            ),
        }
    }

    stats
}

/// Second pass: render a serial-numbered thumbnail for every image.
///
/// `max_images` caps the number of thumbnails *created*; skipped and
/// failed files do not count against it. The cap is checked before each
/// file, so once it is reached no further files are probed.
pub fn generate_thumbnails(
    backend: &impl ImageBackend,
    config: &GalleryConfig,
) -> Result<BatchReport, PipelineError> {
    std::fs::create_dir_all(&config.output_dir).map_err(|source| {
        PipelineError::CreateOutputDir {
            path: config.output_dir.clone(),
            source,
        }
    })?;

    let mut report = BatchReport::default();
    let mut serial: u32 = 1;

    for path in walk_images(config) {
        if config
            .max_images
            .is_some_and(|max| report.created >= max)
        {
            break;
        }

        let info = match backend.probe(&path) {
            Ok(info) => info,
            Err(err) => {
                warn!("Failed processing image: {} ({err})", path.display());
                serial += 1;
                report.failed += 1;
                continue;
            }
        };

        let out_name = build_output_filename(
            serial,
            &parent_folder_name(&path),
            &file_stem(&path),
            info.width,
            info.height,
            info.dpi,
        );
        let out_path = config.output_dir.join(&out_name);

        if config.skip_existing && out_path.exists() {
            info!("Skipping existing: {out_name}");
            serial += 1;
            report.skipped_existing += 1;
            continue;
        }

        let params = RenderParams {
            source: path.clone(),
            output: out_path,
            target_width: config.thumb_width,
            quality: Quality::default(),
        };

        match backend.render_thumbnail(&params) {
            Ok(()) => {
                info!("Thumbnail created: {} -> {}", file_name(&path), out_name);
                report.created += 1;
            }
            Err(err) => {
                warn!("Failed processing image: {} ({err})", path.display());
                report.failed += 1;
            }
        }
        serial += 1;
    }

    Ok(report)
}

/// Name of the directory the image sits in. For files directly under the
/// input root this is the root directory's own name.
fn parent_folder_name(path: &Path) -> String {
    path.parent()
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
