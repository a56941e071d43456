//! The NOVA source: the four host-facing operations over a transport.

use crate::content;
use crate::error::Result;
use crate::listing::{self, ListingMode};
use crate::metadata;
use crate::result::{CatalogEntry, NovelDocument};
use crate::transport::{Fetcher, Request};
use crate::Options;

/// Stable identifier of the source.
pub const SOURCE_ID: &str = "novelasligeras.net";

/// Display name of the source.
pub const SOURCE_NAME: &str = "NOVA";

/// Capability record for the NOVA light-novel site.
///
/// Holds no mutable state: every call issues exactly one fetch, parses its
/// own document and returns plain values, so a `Source` can be shared freely
/// as long as its transport can.
///
/// # Example
///
/// ```rust,no_run
/// use nova_extract::{HttpFetcher, Source};
///
/// let source = Source::new(HttpFetcher::new()?);
/// for entry in source.search_novels("overlord", 1)? {
///     println!("{} -> {}", entry.name, entry.path);
/// }
/// # Ok::<(), nova_extract::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Source<F> {
    fetcher: F,
    options: Options,
}

impl<F: Fetcher> Source<F> {
    /// Create a source for the live site.
    #[must_use]
    pub fn new(fetcher: F) -> Self {
        Self::with_options(fetcher, Options::default())
    }

    /// Create a source with custom options.
    #[must_use]
    pub fn with_options(fetcher: F, options: Options) -> Self {
        Self { fetcher, options }
    }

    /// Options in use.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Popular novels: an unfiltered search.
    ///
    /// # Errors
    ///
    /// See [`Source::search_novels`].
    pub fn popular_novels(&self, page: u32) -> Result<Vec<CatalogEntry>> {
        self.search_novels("", page)
    }

    /// Search the catalog. An empty term lists everything.
    ///
    /// Page `<= 1` is served by the JSON feed, later pages by the rendered
    /// results grid.
    ///
    /// # Errors
    ///
    /// - [`Error::MalformedResponse`](crate::Error::MalformedResponse) if the feed is not JSON
    /// - [`Error::BlockedBySource`](crate::Error::BlockedBySource) if a results page is a challenge
    /// - [`Error::Transport`](crate::Error::Transport) from the fetcher
    pub fn search_novels(&self, term: &str, page: u32) -> Result<Vec<CatalogEntry>> {
        let mode = ListingMode::for_page(page);
        let request = listing::listing_request(&self.options, term, page)?;
        let body = self.fetch(&request)?;

        let entries = listing::parse_listing(mode, &body, self.options.origin())?;
        tracing::debug!(term, page, ?mode, count = entries.len(), "search results");
        Ok(entries)
    }

    /// Fetch and parse a novel page: metadata plus chapter list.
    ///
    /// # Errors
    ///
    /// - [`Error::BlockedBySource`](crate::Error::BlockedBySource) if the page is a challenge
    /// - [`Error::Transport`](crate::Error::Transport) from the fetcher
    pub fn parse_novel(&self, path: &str) -> Result<NovelDocument> {
        let body = self.fetch(&Request::get(self.options.page_url(path)))?;
        metadata::parse_novel_page(&body, path, &self.options)
    }

    /// Fetch a chapter page and return its sanitized body markup.
    ///
    /// # Errors
    ///
    /// - [`Error::BlockedBySource`](crate::Error::BlockedBySource) if the page is a challenge
    /// - [`Error::Transport`](crate::Error::Transport) from the fetcher
    pub fn parse_chapter(&self, path: &str) -> Result<String> {
        let body = self.fetch(&Request::get(self.options.page_url(path)))?;
        content::sanitize_chapter(&body)
    }

    fn fetch(&self, request: &Request) -> Result<String> {
        tracing::debug!(method = ?request.method, url = %request.url, "requesting page");
        self.fetcher.fetch(request)
    }
}
