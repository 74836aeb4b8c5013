//! Image probing and thumbnail rendering, pure Rust with no external tools.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Probe** | `image::image_dimensions` + `kamadak-exif` |
//! | **Orientation** | `image::metadata::Orientation` |
//! | **Resize → JPEG** | Lanczos3 + `JpegEncoder` at quality 85 |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for dimension math (unit testable)
//! - **Metadata**: EXIF orientation/resolution plus the JFIF density fallback
//! - **Parameters**: Data structures describing render operations
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]

pub mod backend;
mod calculations;
pub mod metadata;
mod params;
pub mod rust_backend;

pub use backend::{ImageBackend, ImageInfo, ImagingError};
pub use calculations::thumbnail_dimensions;
pub use metadata::DEFAULT_DPI;
pub use params::{Quality, RenderParams};
pub use rust_backend::RustBackend;
