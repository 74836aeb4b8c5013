//! Pure calculation functions for thumbnail dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

/// Calculate thumbnail dimensions for a target width.
///
/// Height scales proportionally, rounded to the nearest pixel and floored
/// at 1. Sources already at or below the target width keep their original
/// dimensions; thumbnails never upscale.
///
/// # Arguments
/// * `orig_w`, `orig_h` - Oriented source dimensions (both > 0)
/// * `target_w` - Requested thumbnail width in pixels
///
/// # Examples
/// ```
/// # use votesheet::imaging::thumbnail_dimensions;
/// // 4000x3000 at 600 wide → 600x450
/// assert_eq!(thumbnail_dimensions(4000, 3000, 600), (600, 450));
///
/// // 3000x4000 at 600 wide → 600x800
/// assert_eq!(thumbnail_dimensions(3000, 4000, 600), (600, 800));
///
/// // already narrower than the target → unchanged
/// assert_eq!(thumbnail_dimensions(300, 200, 600), (300, 200));
/// ```
pub fn thumbnail_dimensions(orig_w: u32, orig_h: u32, target_w: u32) -> (u32, u32) {
    if orig_w <= target_w {
        return (orig_w, orig_h);
    }
    let h = (target_w as f64 * orig_h as f64 / orig_w as f64).round() as u32;
    (target_w, h.max(1))
}
