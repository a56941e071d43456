//! URL Utility Functions
//!
//! Turning absolute site URLs into site-relative paths, and building the
//! paginated search URL.

use url::{form_urlencoded, Url};

use crate::error::{Error, Result};

/// Fixed catalog-scope query parameters of the paginated search page, after `s`.
const SEARCH_SCOPE: &[(&str, &str)] = &[
    ("post_type", "product"),
    ("title", "1"),
    ("excerpt", "1"),
    ("content", "0"),
    ("categories", "1"),
    ("attributes", "1"),
    ("tags", "1"),
    ("sku", "0"),
    ("orderby", "popularity"),
    ("ixwps", "1"),
];

/// Strip the site origin from a URL, leaving a site-relative path.
///
/// Any URL on the same host as `origin` (regardless of scheme or a `www.`
/// prefix) is reduced to its path, query and fragment. Relative URLs and URLs
/// on other hosts are returned trimmed but otherwise unchanged.
///
/// # Example
///
/// ```rust
/// use nova_extract::url_utils::strip_origin;
///
/// let origin = "https://novelasligeras.net";
/// assert_eq!(
///     strip_origin("https://novelasligeras.net/index.php/producto/overlord/", origin),
///     "/index.php/producto/overlord/"
/// );
/// assert_eq!(strip_origin("/already/relative/", origin), "/already/relative/");
/// ```
#[must_use]
pub fn strip_origin(url_str: &str, origin: &str) -> String {
    let url_str = url_str.trim();
    let origin = origin.trim_end_matches('/');

    if url_str.is_empty() {
        return String::new();
    }

    if let Some(rest) = url_str.strip_prefix(origin) {
        if rest.is_empty() || rest.starts_with(['/', '?', '#']) {
            return rest.to_string();
        }
    }

    let (Ok(url), Ok(base)) = (Url::parse(url_str), Url::parse(origin)) else {
        return url_str.to_string();
    };

    match (url.host_str(), base.host_str()) {
        (Some(host), Some(base_host)) if same_site(host, base_host) => {
            let mut path = url.path().to_string();
            if let Some(query) = url.query() {
                path.push('?');
                path.push_str(query);
            }
            if let Some(fragment) = url.fragment() {
                path.push('#');
                path.push_str(fragment);
            }
            path
        }
        _ => url_str.to_string(),
    }
}

fn same_site(host: &str, base_host: &str) -> bool {
    let strip = |h: &str| h.trim_start_matches("www.").to_ascii_lowercase();
    strip(host) == strip(base_host)
}

/// Build the URL of a paginated search results page.
///
/// The term is percent-encoded with spaces as `%20`; an empty term is a valid
/// unfiltered query.
///
/// # Errors
///
/// Returns [`Error::InvalidUrl`] if `origin` is not an absolute URL.
pub fn search_page_url(origin: &str, term: &str, page: u32) -> Result<String> {
    let origin = origin.trim_end_matches('/');
    let raw = format!("{origin}/index.php/page/{page}/");
    let base = Url::parse(&raw).map_err(|e| Error::InvalidUrl(format!("{raw}: {e}")))?;

    let mut query = format!("s={}", encode_component(term));
    for (key, value) in SEARCH_SCOPE {
        query.push('&');
        query.push_str(key);
        query.push('=');
        query.push_str(value);
    }

    let full = format!("{base}?{query}");
    let url = Url::parse(&full).map_err(|e| Error::InvalidUrl(format!("{full}: {e}")))?;
    Ok(url.into())
}

/// Percent-encode a query value with spaces as `%20`, not `+`.
fn encode_component(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
