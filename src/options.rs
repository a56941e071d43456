//! Configuration options for the NOVA source.
//!
//! The `Options` struct carries the site origin and the fixed endpoint used
//! for first-page searches. Everything else about the source (selectors,
//! fingerprints) is a compile-time constant in `patterns`.

/// Default site origin.
pub const DEFAULT_SITE: &str = "https://novelasligeras.net";

/// Default path and fixed query string of the structured search feed.
pub const DEFAULT_FEED_PATH: &str = "/wp-admin/admin-ajax.php?tags=1&sku=&limit=30&category_results=&order=DESC&category_limit=5&order_by=title&product_thumbnails=1&title=1&excerpt=1&content=&categories=1&attributes=1";

/// Configuration options for a [`Source`](crate::Source).
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for the live site.
///
/// # Example
///
/// ```rust
/// use nova_extract::Options;
///
/// let options = Options {
///     site: "https://mirror.example".to_string(),
///     ..Options::default()
/// };
/// assert_eq!(options.placeholder_title, "Untitled");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Site origin, without a trailing slash.
    ///
    /// Every request URL is built from it and it is stripped from every
    /// path handed back to the caller.
    ///
    /// Default: `https://novelasligeras.net`
    pub site: String,

    /// Path (with fixed query string) of the first-page search feed.
    ///
    /// Default: the WooCommerce product search AJAX endpoint.
    pub feed_path: String,

    /// Novel name used when the page has no usable top-level heading.
    ///
    /// Default: `"Untitled"`
    pub placeholder_title: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            site: DEFAULT_SITE.to_string(),
            feed_path: DEFAULT_FEED_PATH.to_string(),
            placeholder_title: "Untitled".to_string(),
        }
    }
}

impl Options {
    /// Site origin with any trailing slash removed.
    #[must_use]
    pub fn origin(&self) -> &str {
        self.site.trim_end_matches('/')
    }

    /// Absolute URL of the search feed.
    #[must_use]
    pub fn feed_url(&self) -> String {
        format!("{}{}", self.origin(), self.feed_path)
    }

    /// Absolute URL of a site-relative path.
    #[must_use]
    pub fn page_url(&self, path: &str) -> String {
        format!("{}{}", self.origin(), path)
    }
}
