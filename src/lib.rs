//! # Votesheet
//!
//! A photo vote-sheet generator. Point it at a folder tree of JPEGs and it
//! produces uniformly sized, serial-numbered thumbnails plus a printable
//! HTML contact sheet people can vote on, along with a report of how the
//! originals split across orientation and print-resolution buckets.
//!
//! # Architecture: Two Passes Over One Walk
//!
//! Every run walks the same files in the same deterministic order twice:
//!
//! ```text
//! 1. Stats       probe headers only  →  bucket counts on stdout
//! 2. Thumbnails  decode and resize   →  gallery/NNN-folder-name-WxH@DPI.jpg
//! ```
//!
//! The stats pass never decodes pixels, so it stays fast on large trees.
//! The thumbnail pass assigns serials by walk position and advances the
//! serial even for files it skips or fails on, which keeps numbering
//! stable across re-runs and makes `--skip-existing` safe.
//!
//! An optional third step renders `ImageGallery.html` from whatever JPEGs
//! ended up in the output folder.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Run configuration: folders, thumbnail width, extension filter |
//! | [`walk`] | Recursive image discovery, sorted, output folder pruned |
//! | [`imaging`] | Pure-Rust probe and render: EXIF orientation, DPI, Lanczos3 resize |
//! | [`classify`] | Orientation/DPI bucketing and the `Stats` counters |
//! | [`naming`] | Filename sanitization and the `NNN-folder-name-WxH@DPI.jpg` scheme |
//! | [`pipeline`] | The two passes wired together over an [`imaging::ImageBackend`] |
//! | [`page`] | The printable vote-sheet page, rendered with Maud |
//! | [`output`] | Stdout formatting for the stats report and run summary |
//!
//! # Design Decisions
//!
//! ## Pure-Rust Imaging
//!
//! The [`imaging`] module uses the `image` crate for decoding, Lanczos3
//! resampling and JPEG encoding, and `kamadak-exif` for metadata. No
//! ImageMagick, no system libraries. The binary is self-contained and the
//! same bytes come out on every machine.
//!
//! ## Headers Before Pixels
//!
//! Probing reads dimensions from the image header and DPI from EXIF (with
//! a JFIF fallback) without decoding the picture. Orientation tags that
//! rotate by 90 degrees swap the reported width and height, so the buckets
//! and the output filenames describe the image as it displays, not as it
//! is stored.
//!
//! ## Backend Trait at the Pixel Boundary
//!
//! Both passes are written against [`imaging::ImageBackend`]. Orchestration
//! tests script a mock backend and assert on recorded operations; only the
//! backend tests touch real JPEG bytes.
//!
//! ## Maud Over Template Engines
//!
//! The vote sheet is rendered with [Maud](https://maud.lambda.xyz/), a
//! compile-time HTML macro. Malformed markup is a build error and every
//! interpolation is auto-escaped, which matters because card labels come
//! straight from file names found on disk.
//!
//! ## Per-File Failures Never Abort a Run
//!
//! A corrupt or unreadable image is logged and skipped in both passes. The
//! only fatal error is being unable to create the output directory. A
//! thumbnail is either written completely or not at all; encoding happens
//! in memory and the file appears in one write.

pub mod classify;
pub mod config;
pub mod imaging;
pub mod naming;
pub mod output;
pub mod page;
pub mod pipeline;
pub mod walk;

#[cfg(test)]
pub(crate) mod test_helpers;
