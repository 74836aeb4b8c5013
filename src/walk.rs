//! Recursive discovery of candidate image files.
//!
//! The walk is depth-first with directory entries sorted by file name, so
//! traversal order (and therefore thumbnail serial numbering) is
//! deterministic on any filesystem. The output directory is pruned at the
//! listing level: the walker never descends into it, wherever it sits
//! inside the input tree.
//!
//! Unreadable entries are logged and skipped; a directory that cannot be
//! listed contributes nothing, and never aborts the walk.

use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::{DirEntry, WalkDir};

use crate::config::GalleryConfig;

/// Lazily yield image files under `config.input_dir`, in sorted
/// depth-first order, filtered by the configured extensions
/// (case-insensitive), never entering `config.output_dir`.
pub fn walk_images(config: &GalleryConfig) -> impl Iterator<Item = PathBuf> + '_ {
    // Resolve the exclusion once. If the output directory does not exist
    // yet there is nothing to prune.
    let excluded = config.output_dir.canonicalize().ok();

    WalkDir::new(&config.input_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(move |entry| !is_excluded_dir(entry, excluded.as_deref()))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                warn!("skipping unreadable entry: {err}");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(DirEntry::into_path)
        .filter(move |path| config.matches_extension(path))
}

/// True when the entry is the output directory, compared by resolved path
/// so relative or indirect spellings cannot defeat the prune.
fn is_excluded_dir(entry: &DirEntry, excluded: Option<&Path>) -> bool {
    let Some(excluded) = excluded else {
        return false;
    };
    if !entry.file_type().is_dir() {
        return false;
    }
    entry
        .path()
        .canonicalize()
        .is_ok_and(|resolved| resolved == excluded)
}
