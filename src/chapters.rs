//! Chapter hierarchy reconstruction.
//!
//! Novel pages lay chapters out in page-builder blocks. A block is a volume
//! when its first fancy title starts with "Volumen"; every link inside that
//! block's tabs is a chapter. Other blocks share the same layout classes and
//! are skipped.
//!
//! Chapter link text is free-form. When it follows the
//! `Parte <N> <sep> <chapter>: <title>` grammar the chapter label is moved in
//! front of the part so that names sort and read by chapter:
//!
//! ```text
//! Volumen 1  +  "Parte 2 - Capítulo 1: El Rey"  ->  "Volumen 1 - Capítulo 1 - Parte 2: El Rey"
//! Volumen 1  +  "Extra"                         ->  "Volumen 1 - Extra"
//! ```

use dom_query::{Document, Selection};

use crate::dom;
use crate::patterns::{CHAPTER_LINK, CHAPTER_PART, VOLUME_BLOCK, VOLUME_MARKER, VOLUME_TITLE};
use crate::result::ChapterEntry;
use crate::url_utils::strip_origin;

/// Build the display name of a chapter link inside `volume`.
///
/// Grammar (case-insensitive): `(Parte <digits>) <ws>* <any char> <ws>* (<label>): <ws>* (<title>)`.
/// A match yields `"<volume> - <label> - <part>: <title>"`; anything else
/// yields `"<volume> - <link text>"` verbatim.
#[must_use]
pub fn chapter_name(volume: &str, link_text: &str) -> String {
    match CHAPTER_PART.captures(link_text) {
        Some(caps) => format!("{volume} - {} - {}: {}", &caps[2], &caps[1], &caps[3]),
        None => format!("{volume} - {link_text}"),
    }
}

/// Volume name of a layout block, if the block is a volume.
#[must_use]
pub fn volume_title(block: &Selection) -> Option<String> {
    let title = dom::trimmed_text(&block.select(VOLUME_TITLE).first());
    VOLUME_MARKER.is_match(&title).then_some(title)
}

/// Chapters of one volume block, in link order.
fn volume_chapters(volume: &str, block: &Selection, origin: &str) -> Vec<ChapterEntry> {
    block
        .select(CHAPTER_LINK)
        .iter()
        .map(|link| {
            let text = dom::trimmed_text(&link);
            let href = dom::get_attribute(&link, "href").unwrap_or_default();
            ChapterEntry {
                name: chapter_name(volume, &text),
                path: strip_origin(&href, origin),
            }
        })
        .collect()
}

/// Extract every chapter of a novel page in reading order.
///
/// Volume blocks are visited in document order and links in document order
/// within each block; that order is the only ordering signal the page offers.
#[must_use]
pub fn extract_chapters(doc: &Document, origin: &str) -> Vec<ChapterEntry> {
    let mut chapters = Vec::new();

    for block in doc.select(VOLUME_BLOCK).iter() {
        let Some(volume) = volume_title(&block) else {
            continue;
        };
        let found = volume_chapters(&volume, &block, origin);
        tracing::trace!(volume = %volume, count = found.len(), "volume block");
        chapters.extend(found);
    }

    chapters
}
