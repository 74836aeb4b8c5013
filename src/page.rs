//! Printable vote-sheet page generation.
//!
//! Writes a single self-contained `ImageGallery.html` into the output
//! folder: inline CSS, one card per thumbnail, and print rules that put
//! four cards on each printed sheet. The page is built from the files
//! actually present in the output folder, not from pipeline bookkeeping,
//! so it also picks up thumbnails left over from earlier runs.
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating
//! with automatic escaping.

use crate::naming::display_number;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum PageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

const CSS: &str = include_str!("../static/style.css");

/// File name of the generated page, always directly in the output folder.
pub const PAGE_FILE_NAME: &str = "ImageGallery.html";

/// A print page holds a 2x2 grid of cards.
const CARDS_PER_SHEET: usize = 4;

/// Write the vote sheet into the output folder and return its path.
///
/// Lists every JPEG already sitting in the folder, sorted by file name.
/// An empty folder yields a valid page with no cards. Re-running replaces
/// the previous page.
pub fn write_vote_sheet(output_dir: &Path, vote_box: bool) -> Result<PathBuf, PageError> {
    let images = list_thumbnails(output_dir)?;
    let page = render_page(&images, vote_box);

    let out_file = output_dir.join(PAGE_FILE_NAME);
    fs::write(&out_file, page.into_string())?;
    info!("HTML gallery written: {}", out_file.display());
    Ok(out_file)
}

/// JPEG file names in the output folder, sorted by name. Non-recursive;
/// the page only references files sitting next to it.
fn list_thumbnails(output_dir: &Path) -> Result<Vec<String>, PageError> {
    let mut names = Vec::new();

    for entry in fs::read_dir(output_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if is_jpeg_name(&name) {
            names.push(name);
        }
    }

    names.sort();
    Ok(names)
}

fn is_jpeg_name(name: &str) -> bool {
    Path::new(name)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg"))
}

fn render_page(images: &[String], vote_box: bool) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Photo Vote Sheet" }
                style { (PreEscaped(CSS)) }
            }
            body {
                h1 { "Photo Vote Sheet" }
                div.gallery {
                    @for (idx, name) in images.iter().enumerate() {
                        (render_card(name, idx + 1, vote_box))
                    }
                }
            }
        }
    }
}

/// One card: the image, its display number, and optionally the vote box.
/// `ordinal` is the card's 1-based position on the sheet.
fn render_card(name: &str, ordinal: usize, vote_box: bool) -> Markup {
    let serial = display_number(name, ordinal);
    let src = format!("./{name}");
    let page_break = ordinal % CARDS_PER_SHEET == 0;

    html! {
        div.card.page-break[page_break] {
            img src=(src) alt=(name) title=(name);
            div.meta { "Image nr # " (serial) }
            @if vote_box {
                div.vote { "VOTE HERE" }
            }
        }
    }
}
