//! Output filename construction and the sanitization it relies on.
//!
//! Every thumbnail is named `{serial:03}-{parent}-{stem}-{W}x{H}@{DPI}.jpg`:
//! a traversal-order serial, the sanitized parent folder, the sanitized
//! source stem, and the oriented dimensions plus nominal DPI. Serials are
//! unique within a run, so two sources can never collide even when
//! sanitization strips their names to the same string.
//!
//! The vote-sheet page reads the serial back out of the filename; that
//! parsing lives here too so both directions share one convention.

/// Maximum length of a sanitized name component, applied before edge
/// stripping.
const MAX_COMPONENT_LEN: usize = 120;

/// Make a name component filesystem-safe.
///
/// Rules, in order:
/// - trim surrounding whitespace
/// - each internal whitespace run becomes one `_`
/// - each run of characters outside `[A-Za-z0-9._-]` becomes one `-`
/// - runs of `-` collapse to one
/// - truncate to 120 characters
/// - strip leading/trailing `-`, `_`, `.`
///
/// Total over all inputs (the empty string maps to itself) and idempotent.
///
/// ```
/// use votesheet::naming::sanitize_component;
///
/// assert_eq!(sanitize_component("Summer Trip"), "Summer_Trip");
/// assert_eq!(sanitize_component("köln/dom"), "k-ln-dom");
/// assert_eq!(sanitize_component("--draft--"), "draft");
/// assert_eq!(sanitize_component(""), "");
/// ```
pub fn sanitize_component(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut out = String::with_capacity(trimmed.len());
    let mut prev_ws = false;
    for c in trimmed.chars() {
        if c.is_whitespace() {
            if !prev_ws {
                out.push('_');
            }
            prev_ws = true;
            continue;
        }
        prev_ws = false;
        if c.is_ascii_alphanumeric() || c == '.' || c == '_' {
            out.push(c);
        } else if !out.ends_with('-') {
            // covers literal '-' and one '-' per run of anything else
            out.push('-');
        }
    }
    // substitution leaves only ASCII, so byte truncation is char truncation
    out.truncate(MAX_COMPONENT_LEN);
    out.trim_matches(|c| matches!(c, '-' | '_' | '.')).to_string()
}

/// Build the output filename for one thumbnail.
///
/// `serial` is zero-padded to at least three digits and widens naturally
/// from 1000 up. `width`/`height` are the oriented source dimensions, not
/// the thumbnail's.
///
/// ```
/// use votesheet::naming::build_output_filename;
///
/// assert_eq!(
///     build_output_filename(7, "Holiday Pics", "IMG 0042", 4000, 3000, 300),
///     "007-Holiday_Pics-IMG_0042-4000x3000@300.jpg"
/// );
/// ```
pub fn build_output_filename(
    serial: u32,
    parent: &str,
    stem: &str,
    width: u32,
    height: u32,
    dpi: u32,
) -> String {
    format!(
        "{serial:03}-{parent}-{stem}-{width}x{height}@{dpi}.jpg",
        parent = sanitize_component(parent),
        stem = sanitize_component(stem),
    )
}

/// Display number shown on a vote-sheet card.
///
/// The text before the first `-` in the filename (the serial for names this
/// tool produced), or the card's 1-based position when the name has no
/// hyphen at all.
pub fn display_number(file_name: &str, ordinal: usize) -> String {
    match file_name.split_once('-') {
        Some((before, _)) => before.to_string(),
        None => ordinal.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== sanitize_component ====================

    #[test]
    fn whitespace_runs_become_single_underscore() {
        assert_eq!(sanitize_component("a \t b"), "a_b");
        assert_eq!(sanitize_component("  padded  "), "padded");
    }

    #[test]
    fn invalid_runs_become_single_hyphen() {
        assert_eq!(sanitize_component("a###b"), "a-b");
        assert_eq!(sanitize_component("photo(1)"), "photo-1");
    }

    #[test]
    fn hyphen_runs_collapse() {
        assert_eq!(sanitize_component("a--b---c"), "a-b-c");
        // literal hyphen between two invalid runs collapses with them
        assert_eq!(sanitize_component("a#-#b"), "a-b");
    }

    #[test]
    fn allowed_punctuation_survives() {
        assert_eq!(sanitize_component("v1.2_final-copy"), "v1.2_final-copy");
    }

    #[test]
    fn separate_whitespace_runs_keep_their_underscores() {
        assert_eq!(sanitize_component("a _ b"), "a___b");
    }

    #[test]
    fn unicode_letters_are_replaced() {
        assert_eq!(sanitize_component("übung"), "bung");
        assert_eq!(sanitize_component("naïve plan"), "na-ve_plan");
    }

    #[test]
    fn edges_are_stripped_after_truncation() {
        assert_eq!(sanitize_component("...dots..."), "dots");
        assert_eq!(sanitize_component("__under__"), "under");
        let long = "a".repeat(119) + "-b";
        // cut to 120 chars leaves a trailing hyphen, which then strips
        assert_eq!(sanitize_component(&long), "a".repeat(119));
    }

    #[test]
    fn empty_and_all_invalid_inputs_yield_empty() {
        assert_eq!(sanitize_component(""), "");
        assert_eq!(sanitize_component("###"), "");
        assert_eq!(sanitize_component(" . "), "");
    }

    #[test]
    fn sanitize_is_idempotent() {
        for raw in [
            "Summer Trip",
            "a#-#b",
            "  x  y  ",
            "übung",
            "...dots...",
            "already-clean_name.v2",
        ] {
            let once = sanitize_component(raw);
            assert_eq!(sanitize_component(&once), once, "input {raw:?}");
        }
    }

    // ==================== build_output_filename ====================

    #[test]
    fn serial_pads_to_three_digits() {
        assert_eq!(
            build_output_filename(1, "A", "x", 10, 20, 72),
            "001-A-x-10x20@72.jpg"
        );
        assert_eq!(
            build_output_filename(42, "A", "x", 10, 20, 72),
            "042-A-x-10x20@72.jpg"
        );
        assert_eq!(
            build_output_filename(999, "A", "x", 10, 20, 72),
            "999-A-x-10x20@72.jpg"
        );
    }

    #[test]
    fn serial_widens_past_three_digits() {
        assert_eq!(
            build_output_filename(1000, "A", "x", 10, 20, 72),
            "1000-A-x-10x20@72.jpg"
        );
    }

    #[test]
    fn components_are_sanitized_in_place() {
        assert_eq!(
            build_output_filename(3, "My Pics!", "shot #7", 800, 600, 250),
            "003-My_Pics-shot_-7-800x600@250.jpg"
        );
    }

    #[test]
    fn empty_components_still_produce_a_wellformed_name() {
        assert_eq!(
            build_output_filename(5, "", "###", 1, 1, 72),
            "005---1x1@72.jpg"
        );
    }

    #[test]
    fn filenames_match_the_published_pattern() {
        // ^\d{3,}-[A-Za-z0-9._-]*-[A-Za-z0-9._-]*-\d+x\d+@\d+\.jpg$
        let ok = |name: &str| {
            let Some(rest) = name.strip_suffix(".jpg") else {
                return false;
            };
            let mut parts = rest.splitn(3, '-');
            let serial = parts.next().unwrap_or_default();
            if serial.len() < 3 || !serial.bytes().all(|b| b.is_ascii_digit()) {
                return false;
            }
            let Some(tail) = parts.nth(1) else {
                return false;
            };
            // tail is "{stem}-{w}x{h}@{dpi}" with a possibly empty stem
            let Some((_, dims)) = tail.rsplit_once('-') else {
                return false;
            };
            let Some((wh, dpi)) = dims.split_once('@') else {
                return false;
            };
            let Some((w, h)) = wh.split_once('x') else {
                return false;
            };
            [w, h, dpi]
                .iter()
                .all(|s| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()))
        };
        assert!(ok(&build_output_filename(1, "A", "x", 10, 20, 72)));
        assert!(ok(&build_output_filename(1234, "", "", 1, 1, 0)));
        assert!(ok(&build_output_filename(
            12,
            "Holiday Pics",
            "IMG #42",
            4000,
            3000,
            300
        )));
    }

    // ==================== display_number ====================

    #[test]
    fn display_number_takes_text_before_first_hyphen() {
        assert_eq!(display_number("017-a-b-1x1@72.jpg", 4), "017");
        assert_eq!(display_number("1000-x-y-2x2@72.jpg", 1), "1000");
    }

    #[test]
    fn display_number_falls_back_to_ordinal() {
        assert_eq!(display_number("photo.jpg", 3), "3");
    }

    #[test]
    fn display_number_keeps_empty_prefix() {
        // a leading hyphen means the prefix is the empty string
        assert_eq!(display_number("-odd.jpg", 2), "");
    }
}
