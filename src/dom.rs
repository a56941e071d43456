//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate giving the extractors a small,
//! consistent vocabulary: parse, trimmed text, attribute fallback chains,
//! inner markup, removal and replacement.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

pub use tendril::StrTendril;

// === Parsing ===

/// Parse an HTML document (or fragment) into a queryable tree.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Parse a markup fragment in isolation and return its flattened text, trimmed.
///
/// Nested markup inside the fragment is reduced to its text content, so
/// `"<p>a <b>b</b></p>"` yields `"a b"`.
#[must_use]
pub fn fragment_text(html: &str) -> String {
    let doc = parse(html);
    doc.select("body").text().trim().to_string()
}

// === Text Content ===

/// Text content with surrounding whitespace removed.
#[must_use]
pub fn trimmed_text(sel: &Selection) -> String {
    sel.text().trim().to_string()
}

/// Trimmed text, or `None` if the selection is empty or has no text.
#[must_use]
pub fn non_empty_text(sel: &Selection) -> Option<String> {
    if sel.is_empty() {
        return None;
    }
    let text = trimmed_text(sel);
    (!text.is_empty()).then_some(text)
}

// === Attribute Operations ===

/// Get an attribute value of the first node in the selection.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Walk an attribute fallback chain.
///
/// Returns the first attribute in `names` whose value is non-empty, or the
/// empty string when none is set.
#[must_use]
pub fn first_attribute(sel: &Selection, names: &[&str]) -> String {
    names
        .iter()
        .filter_map(|name| sel.attr(name))
        .find(|value| !value.is_empty())
        .map(|value| value.to_string())
        .unwrap_or_default()
}

/// Get the inline `style` of an element, lowercased.
#[must_use]
pub fn style_lowercase(sel: &Selection) -> String {
    sel.attr("style")
        .map(|s| s.to_ascii_lowercase())
        .unwrap_or_default()
}

// === Markup ===

/// Get inner HTML content
#[inline]
#[must_use]
pub fn inner_html(sel: &Selection) -> StrTendril {
    sel.inner_html()
}

/// Remove elements from tree
#[inline]
pub fn remove(sel: &Selection) {
    sel.remove();
}

/// Replace element with HTML
#[inline]
pub fn replace_with_html(sel: &Selection, html: &str) {
    sel.replace_with_html(html);
}
