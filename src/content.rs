//! Chapter content sanitization.
//!
//! Chapter bodies are served by more than one page template. The container is
//! chosen by a content fingerprint (a literal phrase only one template
//! contains); inside it, inline ad placeholders are removed and inline
//! centering styles are rewritten to a canonical `<center>` wrapper.

use dom_query::Selection;

use crate::dom;
use crate::error::Result;
use crate::patterns::{CENTER_TAG, DEFAULT_CONTENT, FINGERPRINTED_CONTENT, NAZARICK_FINGERPRINT};
use crate::transport;

/// A page template recognised by a literal phrase in its raw markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentTemplate {
    /// Phrase that only appears in pages of this template.
    pub fingerprint: &'static str,

    /// Selector of the element holding the chapter text.
    pub selector: &'static str,
}

/// Known fingerprinted templates, checked in order.
pub const CONTENT_TEMPLATES: &[ContentTemplate] = &[ContentTemplate {
    fingerprint: NAZARICK_FINGERPRINT,
    selector: FINGERPRINTED_CONTENT,
}];

/// Choose the content container selector for a raw chapter page.
///
/// The first template whose fingerprint occurs in `raw` wins; pages matching
/// none use the page-builder text column.
#[must_use]
pub fn content_selector(raw: &str) -> &'static str {
    CONTENT_TEMPLATES
        .iter()
        .find(|template| raw.contains(template.fingerprint))
        .map_or(DEFAULT_CONTENT, |template| template.selector)
}

/// Remove every inline ad placeholder (`<center>` block) under `container`.
pub fn remove_ad_blocks(container: &Selection) {
    dom::remove(&container.select(CENTER_TAG));
}

/// Whether an inline style declares centered text alignment.
#[must_use]
pub fn is_centering_style(style: &str) -> bool {
    let style = style.to_ascii_lowercase();
    style.contains("text-align") && style.contains("center")
}

/// Rewrite every style-centered descendant of `container` into `<center>`.
///
/// The element is replaced by `<center>` holding its inner markup; its tag and
/// other attributes are dropped. Nested centered elements are rewritten too.
/// The result is a fixed point: `<center>` carries no style, so running this
/// again changes nothing.
pub fn normalize_centering(container: &Selection) {
    // Re-query after every replacement: replacing an element detaches the
    // descendants collected before it.
    while let Some(element) = container
        .select("[style]")
        .iter()
        .find(|el| is_centering_style(&dom::style_lowercase(el)))
    {
        let inner = dom::inner_html(&element);
        dom::replace_with_html(&element, &format!("<{CENTER_TAG}>{inner}</{CENTER_TAG}>"));
    }
}

/// Sanitize a fetched chapter page into its body markup.
///
/// Ads are removed before centering is normalized, so an ad nested inside a
/// centered element is dropped rather than preserved by the rewrite. A page
/// without the expected container yields an empty string.
///
/// # Errors
///
/// Returns [`Error::BlockedBySource`](crate::Error::BlockedBySource) if the
/// page is an anti-bot challenge.
pub fn sanitize_chapter(html: &str) -> Result<String> {
    let doc = transport::parse_checked(html)?;

    let selector = content_selector(html);
    let container = doc.select(selector).first();
    if container.is_empty() {
        tracing::debug!(selector, "chapter content container not found");
        return Ok(String::new());
    }

    remove_ad_blocks(&container);
    normalize_centering(&container);

    Ok(dom::inner_html(&container).to_string())
}
