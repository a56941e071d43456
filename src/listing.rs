//! Listing extraction.
//!
//! The first results page comes from the JSON product-search feed; every later
//! page is scraped from the rendered search results grid. The two never mix:
//! page 1 is not reachable through the grid URL scheme.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::dom;
use crate::error::Result;
use crate::patterns::{CELL_TITLE_LINK, GRID_CELL, LISTING_COVER_ATTRS};
use crate::result::CatalogEntry;
use crate::transport::{self, Request};
use crate::url_utils::{self, strip_origin};
use crate::Options;

/// One record of the product-search feed.
///
/// Fields that are missing, `null` or not a string come through empty.
#[derive(Debug, Deserialize)]
struct FeedItem {
    #[serde(default, deserialize_with = "lenient_string")]
    title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    thumbnail: String,
    #[serde(default, deserialize_with = "lenient_string")]
    url: String,
}

fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        _ => String::new(),
    })
}

/// Which of the two listing sources serves a given page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingMode {
    /// JSON product-search feed (first page only).
    Feed,
    /// Rendered, paginated search results grid.
    Markup,
}

impl ListingMode {
    /// Select the mode for a 1-based page number. Pages `<= 1` use the feed.
    #[must_use]
    pub fn for_page(page: u32) -> Self {
        if page <= 1 {
            Self::Feed
        } else {
            Self::Markup
        }
    }
}

/// Build the request that fetches a listing page.
///
/// # Errors
///
/// Returns [`Error::InvalidUrl`](crate::Error::InvalidUrl) if the configured
/// site cannot be turned into a search URL.
pub fn listing_request(options: &Options, term: &str, page: u32) -> Result<Request> {
    match ListingMode::for_page(page) {
        ListingMode::Feed => Ok(Request::post_form(
            options.feed_url(),
            [
                ("action", "product_search".to_string()),
                ("product-search", page.to_string()),
                ("product-query", term.to_string()),
            ],
        )),
        ListingMode::Markup => Ok(Request::get(url_utils::search_page_url(
            options.origin(),
            term,
            page,
        )?)),
    }
}

/// Decode a product-search feed response.
///
/// No block detection applies: the endpoint answers with JSON, and anything
/// that is not a JSON array of records is reported as malformed.
///
/// # Errors
///
/// Returns [`Error::MalformedResponse`](crate::Error::MalformedResponse) if
/// the body is not a JSON array of feed records.
pub fn parse_feed(body: &str, origin: &str) -> Result<Vec<CatalogEntry>> {
    let items: Vec<FeedItem> = serde_json::from_str(body)?;

    Ok(items
        .into_iter()
        .map(|item| CatalogEntry {
            name: item.title,
            cover: item.thumbnail,
            path: strip_origin(&item.url, origin),
        })
        .collect())
}

/// Scrape one page of the search results grid.
///
/// Every grid cell yields an entry, even when it has no title link (the entry
/// then has an empty name and path).
///
/// # Errors
///
/// Returns [`Error::BlockedBySource`](crate::Error::BlockedBySource) if the
/// page is an anti-bot challenge.
pub fn parse_grid(html: &str, origin: &str) -> Result<Vec<CatalogEntry>> {
    let doc = transport::parse_checked(html)?;

    let entries = doc
        .select(GRID_CELL)
        .iter()
        .map(|cell| {
            let link = cell.select(CELL_TITLE_LINK).first();
            let img = cell.select("img").first();
            let href = dom::get_attribute(&link, "href").unwrap_or_default();

            CatalogEntry {
                name: dom::trimmed_text(&link),
                cover: dom::first_attribute(&img, LISTING_COVER_ATTRS),
                path: strip_origin(&href, origin),
            }
        })
        .collect();

    Ok(entries)
}

/// Parse a listing response according to the mode that produced it.
///
/// # Errors
///
/// See [`parse_feed`] and [`parse_grid`].
pub fn parse_listing(mode: ListingMode, body: &str, origin: &str) -> Result<Vec<CatalogEntry>> {
    match mode {
        ListingMode::Feed => parse_feed(body, origin),
        ListingMode::Markup => parse_grid(body, origin),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;
    use crate::error::Error;
    use crate::transport::Method;

    const SITE: &str = "https://novelasligeras.net";

    #[test]
    fn test_page_boundary_selects_mode() {
        assert_eq!(ListingMode::for_page(0), ListingMode::Feed);
        assert_eq!(ListingMode::for_page(1), ListingMode::Feed);
        assert_eq!(ListingMode::for_page(2), ListingMode::Markup);
        assert_eq!(ListingMode::for_page(40), ListingMode::Markup);
    }

    #[test]
    fn test_feed_request_posts_form() {
        let request = listing_request(&Options::default(), "overlord", 1).expect("request");
        assert_eq!(request.method, Method::Post);
        assert!(request.url.starts_with("https://novelasligeras.net/wp-admin/admin-ajax.php?"));
        assert_eq!(request.form_value("action"), Some("product_search"));
        assert_eq!(request.form_value("product-search"), Some("1"));
        assert_eq!(request.form_value("product-query"), Some("overlord"));
    }

    #[test]
    fn test_markup_request_gets_paginated_url() {
        let request = listing_request(&Options::default(), "", 2).expect("request");
        assert_eq!(request.method, Method::Get);
        assert!(request.url.starts_with("https://novelasligeras.net/index.php/page/2/?s=&post_type=product"));
        assert!(request.form.is_empty());
    }

    #[test]
    fn test_feed_maps_records_and_strips_origin() {
        let body = r#"[
            {"title": "Overlord", "thumbnail": "https://novelasligeras.net/wp-content/uploads/overlord.jpg", "url": "https://novelasligeras.net/index.php/producto/overlord/"},
            {"title": "Re:Zero", "thumbnail": "", "url": "https://novelasligeras.net/index.php/producto/re-zero/", "excerpt": "ignored"}
        ]"#;

        let entries = parse_feed(body, SITE).expect("valid feed");
        assert_eq!(
            entries,
            vec![
                CatalogEntry {
                    name: "Overlord".to_string(),
                    cover: "https://novelasligeras.net/wp-content/uploads/overlord.jpg".to_string(),
                    path: "/index.php/producto/overlord/".to_string(),
                },
                CatalogEntry {
                    name: "Re:Zero".to_string(),
                    cover: String::new(),
                    path: "/index.php/producto/re-zero/".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_feed_tolerates_null_and_missing_fields() {
        let body = r#"[
            {"title": "Overlord", "thumbnail": null, "url": "https://novelasligeras.net/index.php/producto/overlord/"},
            {"title": "Kumo desu ga", "thumbnail": false},
            {"title": null, "thumbnail": 12, "url": "/index.php/producto/slime/"}
        ]"#;

        let entries = parse_feed(body, SITE).expect("null fields are not malformed");
        assert_eq!(
            entries,
            vec![
                CatalogEntry {
                    name: "Overlord".to_string(),
                    cover: String::new(),
                    path: "/index.php/producto/overlord/".to_string(),
                },
                CatalogEntry {
                    name: "Kumo desu ga".to_string(),
                    cover: String::new(),
                    path: String::new(),
                },
                CatalogEntry {
                    name: String::new(),
                    cover: String::new(),
                    path: "/index.php/producto/slime/".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_empty_feed_is_empty_listing() {
        assert!(parse_feed("[]", SITE).expect("valid feed").is_empty());
    }

    #[test]
    fn test_non_json_feed_is_malformed() {
        let err = parse_feed("<html><title>Just a moment...</title></html>", SITE);
        assert!(matches!(err, Err(Error::MalformedResponse(_))));

        let err = parse_feed(r#"{"error": "nope"}"#, SITE);
        assert!(matches!(err, Err(Error::MalformedResponse(_))));
    }

    #[test]
    fn test_grid_cells_use_lazy_cover_first() {
        let html = r#"
            <div class="dt-css-grid">
              <div class="wf-cell">
                <img data-src="lazy.jpg" data-cfsrc="cdn.jpg" src="placeholder.gif">
                <h4 class="entry-title"><a href="https://novelasligeras.net/index.php/producto/overlord/"> Overlord </a></h4>
              </div>
              <div class="wf-cell">
                <img data-cfsrc="cdn2.jpg" src="plain2.jpg">
                <h4 class="entry-title"><a href="https://novelasligeras.net/index.php/producto/goblin-slayer/">Goblin Slayer</a></h4>
              </div>
              <div class="wf-cell">
                <img src="plain3.jpg">
                <h4 class="entry-title"><a href="/index.php/producto/kumo/">Kumo desu ga</a></h4>
              </div>
            </div>
        "#;

        let entries = parse_grid(html, SITE).expect("not blocked");
        let covers: Vec<&str> = entries.iter().map(|e| e.cover.as_str()).collect();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        let paths: Vec<&str> = entries.iter().map(|e| e.path.as_str()).collect();

        assert_eq!(covers, ["lazy.jpg", "cdn2.jpg", "plain3.jpg"]);
        assert_eq!(names, ["Overlord", "Goblin Slayer", "Kumo desu ga"]);
        assert_eq!(
            paths,
            ["/index.php/producto/overlord/", "/index.php/producto/goblin-slayer/", "/index.php/producto/kumo/"]
        );
    }

    #[test]
    fn test_grid_cell_without_title_still_emits_entry() {
        let html = r#"
            <div class="dt-css-grid">
              <div class="wf-cell"><p>Sin título</p></div>
            </div>
        "#;

        let entries = parse_grid(html, SITE).expect("not blocked");
        assert_eq!(entries, vec![CatalogEntry::default()]);
    }

    #[test]
    fn test_cells_outside_grid_are_ignored() {
        let html = r#"
            <div class="sidebar"><div class="wf-cell"><h4 class="entry-title"><a href="/x/">X</a></h4></div></div>
            <div class="dt-css-grid"></div>
        "#;

        assert!(parse_grid(html, SITE).expect("not blocked").is_empty());
    }

    #[test]
    fn test_blocked_grid_page_fails() {
        let html = "<html><head><title>Just a moment...</title></head><body><div class=\"dt-css-grid\"><div class=\"wf-cell\"></div></div></body></html>";
        assert!(matches!(parse_grid(html, SITE), Err(Error::BlockedBySource { .. })));
    }
}
