//! Novel page metadata extraction.
//!
//! Title, cover, attribute-table rows and synopsis of a WooCommerce product
//! page. Each field degrades on its own: a missing row leaves that field
//! `None` and never affects the others.

use dom_query::Document;

use crate::chapters;
use crate::dom;
use crate::error::Result;
use crate::patterns::{
    ARTIST_CELL, AUTHOR_CELL, GALLERY_COVER_ATTRS, GALLERY_IMAGE, STATUS_CELL, SUMMARY,
};
use crate::result::NovelDocument;
use crate::transport;
use crate::Options;

/// Parse a fetched novel page into a [`NovelDocument`].
///
/// Block detection runs before any field is read.
///
/// # Errors
///
/// Returns [`Error::BlockedBySource`](crate::Error::BlockedBySource) if the
/// page is an anti-bot challenge.
pub fn parse_novel_page(html: &str, path: &str, options: &Options) -> Result<NovelDocument> {
    let doc = transport::parse_checked(html)?;

    let novel = NovelDocument {
        path: path.to_string(),
        name: extract_name(&doc, &options.placeholder_title),
        cover: extract_cover(&doc),
        author: dom::non_empty_text(&doc.select(AUTHOR_CELL)),
        artist: dom::non_empty_text(&doc.select(ARTIST_CELL)),
        status: dom::non_empty_text(&doc.select(STATUS_CELL)),
        summary: extract_summary(&doc),
        chapters: chapters::extract_chapters(&doc, options.origin()),
    };

    tracing::debug!(path, chapters = novel.chapters.len(), "parsed novel page");
    Ok(novel)
}

/// First `<h1>` text, or the placeholder.
#[must_use]
pub fn extract_name(doc: &Document, placeholder: &str) -> String {
    dom::non_empty_text(&doc.select("h1").first()).unwrap_or_else(|| placeholder.to_string())
}

/// Cover from the product gallery: `src`, then CDN fallback, then lazy-load.
#[must_use]
pub fn extract_cover(doc: &Document) -> Option<String> {
    let img = doc.select(GALLERY_IMAGE).first();
    if img.is_empty() {
        return None;
    }
    Some(dom::first_attribute(&img, GALLERY_COVER_ATTRS))
}

/// Plain-text synopsis from the short description.
///
/// The container's markup is re-parsed on its own so nested elements are
/// flattened to text.
#[must_use]
pub fn extract_summary(doc: &Document) -> Option<String> {
    let container = doc.select(SUMMARY).first();
    if container.is_empty() {
        return None;
    }
    let text = dom::fragment_text(&dom::inner_html(&container));
    (!text.is_empty()).then_some(text)
}
