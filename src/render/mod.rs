//! Page documents for the screens.
//!
//! Each screen is a standalone HTML file with a single `#menu` container,
//! plus a JSON dump of the same cards for anything that wants the data
//! without the markup.

use html_escape::{encode_double_quoted_attribute, encode_text};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::board::Board;
use crate::config::{BoardConfig, OutputConfig};
use crate::error::{BoardError, Result};
use crate::models::{Card, DisplayItem, LifecycleState, Page, IMAGE_DIR};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub number: usize,
    /// File stem, e.g. `screen2`
    pub name: String,
    pub html_path: PathBuf,
    pub json_path: PathBuf,
    pub card_count: usize,
}

fn image_src(asset: &str) -> String {
    format!("{}/{}", IMAGE_DIR, asset)
}

fn render_item(out: &mut String, item: &DisplayItem) {
    let _ = writeln!(out, r#"  <div class="beer-card state-{}">"#, item.state);
    let _ = writeln!(out, r#"    <div class="title">{}</div>"#, encode_text(&item.title));
    out.push_str("    <div class=\"divider\"></div>\n");

    out.push_str("    <div class=\"info-line\">\n");
    let _ = writeln!(out, r#"      <span class="country">{}</span>"#, encode_text(&item.country));
    if let Some(badge) = &item.badge {
        let _ = writeln!(
            out,
            r#"      <span class="badge-wrap"><img class="badge" src="{}" alt="{}"></span>"#,
            encode_double_quoted_attribute(&image_src(&badge.asset)),
            encode_double_quoted_attribute(badge.category.code()),
        );
    }
    out.push_str("    </div>\n");

    out.push_str("    <div class=\"info-line\">\n");
    let _ = writeln!(out, r#"      <span class="abv">{}</span>"#, encode_text(&item.specs));
    if item.state == LifecycleState::OnSale && item.discount_percent > 0 {
        let _ = writeln!(out, r#"      <span class="discount">-{}%</span>"#, item.discount_percent);
    }
    let _ = writeln!(out, r#"      <span class="price">{}</span>"#, encode_text(&item.price));
    out.push_str("    </div>\n");

    if let Some(accent) = &item.accent {
        let _ = writeln!(
            out,
            r#"    <img class="accent" src="{}" alt="{}">"#,
            encode_double_quoted_attribute(&image_src(&accent.asset)),
            encode_double_quoted_attribute(&accent.label),
        );
    }
    out.push_str("  </div>\n");
}

fn render_filler(out: &mut String, board: &BoardConfig) {
    let _ = writeln!(
        out,
        r#"  <div class="beer-card filler-card"><img class="filler" src="{}" alt=""></div>"#,
        encode_double_quoted_attribute(&image_src(&board.filler_asset)),
    );
}

/// Render the `#menu` container for one page
pub fn render_container(page: &Page<'_>, board: &BoardConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(out, r#"<div id="menu" data-screen="{}">"#, page.number);
    for card in page.cards {
        match card {
            Card::Item(item) => render_item(&mut out, item),
            Card::Filler => render_filler(&mut out, board),
        }
    }
    out.push_str("</div>\n");
    out
}

/// Render the container for screen `number` of the board
pub fn render_screen(board: &Board, number: usize, config: &BoardConfig) -> String {
    render_container(&board.page(number), config)
}

/// Render a complete screen document
pub fn render_page(page: &Page<'_>, board: &BoardConfig) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"ru\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    let _ = writeln!(out, "<title>Screen {}</title>", page.number);
    out.push_str("<link rel=\"stylesheet\" href=\"style.css\">\n</head>\n<body>\n");
    out.push_str(&render_container(page, board));
    out.push_str("</body>\n</html>\n");
    out
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| BoardError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Write pages `1..=page_count` into the output directory.
///
/// Pages past the end of the board are still written with an empty container
/// so every screen address stays valid.
pub fn write_pages(
    board: &Board,
    board_config: &BoardConfig,
    output: &OutputConfig,
) -> Result<Vec<RenderedPage>> {
    fs::create_dir_all(&output.dir).map_err(|source| BoardError::Io {
        path: output.dir.clone(),
        source,
    })?;

    let mut rendered = Vec::with_capacity(board_config.page_count);

    for number in 1..=board_config.page_count {
        let page = board.page(number);
        let name = format!("{}{}", output.page_prefix, number);
        let html_path = output.dir.join(format!("{}.html", name));
        let json_path = output.dir.join(format!("{}.json", name));

        write_file(&html_path, &render_page(&page, board_config))?;

        let json = serde_json::to_string_pretty(&page)
            .map_err(|source| BoardError::Serialize { page: number, source })?;
        write_file(&json_path, &json)?;

        rendered.push(RenderedPage {
            number,
            name,
            html_path,
            json_path,
            card_count: page.len(),
        });
    }

    info!("Wrote {} pages to {}", rendered.len(), output.dir.display());
    Ok(rendered)
}
