//! Result types for extraction output.
//!
//! Plain, immutable records handed back to the host application. All `path`
//! values are site-relative.

use serde::{Deserialize, Serialize};

/// One novel as shown in a listing (search results or popular page).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Display name. May be empty when the listing cell has no title.
    pub name: String,

    /// Cover image URL, or the empty string when none was found.
    pub cover: String,

    /// Site-relative path of the novel page.
    pub path: String,
}

/// One readable chapter (or chapter part) of a novel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterEntry {
    /// Display name, prefixed with its volume.
    pub name: String,

    /// Site-relative path of the chapter page.
    pub path: String,
}

/// Everything extracted from a novel page.
///
/// `name` is always set (falling back to a placeholder). Every other scalar
/// is independently absent when its source markup is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NovelDocument {
    /// Site-relative path this document was parsed from.
    pub path: String,

    /// Novel title.
    pub name: String,

    /// Cover image URL.
    ///
    /// `Some` whenever the product gallery has an image, even if none of its
    /// source attributes were populated (then the value is empty).
    pub cover: Option<String>,

    /// Writer.
    pub author: Option<String>,

    /// Illustrator.
    pub artist: Option<String>,

    /// Publication status as written by the site (e.g. "En curso").
    pub status: Option<String>,

    /// Plain-text synopsis.
    pub summary: Option<String>,

    /// Chapters in reading order.
    pub chapters: Vec<ChapterEntry>,
}
