//! Transport gate.
//!
//! The network transport is a collaborator behind the [`Fetcher`] trait; this
//! module defines the request shape, the bundled blocking HTTP implementation
//! (feature `http`), and the anti-bot block detection every fetched page goes
//! through before any field is read from it.

use std::time::Duration;

use dom_query::Document;

use crate::dom;
use crate::error::{Error, Result};
use crate::patterns::BLOCKED_TITLES;

/// HTTP method of a [`Request`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Plain page fetch.
    Get,
    /// Form submission with a multipart body.
    Post,
}

/// A single fetch issued by the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Absolute URL.
    pub url: String,

    /// HTTP method.
    pub method: Method,

    /// Multipart form fields for POST requests, in insertion order.
    pub form: Vec<(String, String)>,
}

impl Request {
    /// A plain GET request.
    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: Method::Get,
            form: Vec::new(),
        }
    }

    /// A POST request carrying a multipart form body.
    #[must_use]
    pub fn post_form<K, V>(url: impl Into<String>, fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            url: url.into(),
            method: Method::Post,
            form: fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Value of a form field, if present.
    #[must_use]
    pub fn form_value(&self, name: &str) -> Option<&str> {
        self.form
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Network transport used by [`Source`](crate::Source).
///
/// Implementations return the decoded response body. Network failures and
/// non-success statuses are reported as [`Error::Transport`]; the source never
/// retries and never swallows them.
pub trait Fetcher {
    /// Perform one request and return the response text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] when the request cannot be completed.
    fn fetch(&self, request: &Request) -> Result<String>;
}

impl<T: Fetcher + ?Sized> Fetcher for &T {
    fn fetch(&self, request: &Request) -> Result<String> {
        (**self).fetch(request)
    }
}

impl<T: Fetcher + ?Sized> Fetcher for Box<T> {
    fn fetch(&self, request: &Request) -> Result<String> {
        (**self).fetch(request)
    }
}

// === Block Detection ===

/// Fail with [`Error::BlockedBySource`] if the document is an anti-bot interstitial.
///
/// # Errors
///
/// Returns [`Error::BlockedBySource`] when the page title is one of the known
/// challenge titles.
pub fn check_blocked(doc: &Document) -> Result<()> {
    let title = dom::trimmed_text(&doc.select("title").first());
    if BLOCKED_TITLES.contains(&title.as_str()) {
        tracing::warn!(title = %title, "source served an anti-bot challenge");
        return Err(Error::BlockedBySource { title });
    }
    Ok(())
}

/// Parse fetched markup and run block detection on it.
///
/// # Errors
///
/// Returns [`Error::BlockedBySource`] for challenge pages.
pub fn parse_checked(html: &str) -> Result<Document> {
    let doc = dom::parse(html);
    check_blocked(&doc)?;
    Ok(doc)
}

// === HTTP Transport ===

/// Browser-like user agent sent by [`HttpFetcher`].
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Configuration for [`HttpFetcher`].
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Total request timeout.
    ///
    /// Default: 30 seconds
    pub timeout: Duration,

    /// Connection establishment timeout.
    ///
    /// Default: 10 seconds
    pub connect_timeout: Duration,

    /// `User-Agent` header value.
    pub user_agent: String,

    /// Keep cookies between requests (needed once a challenge has been solved elsewhere).
    ///
    /// Default: `true`
    pub enable_cookies: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            enable_cookies: true,
        }
    }
}

/// Blocking HTTP transport backed by `reqwest`.
#[cfg(feature = "http")]
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

#[cfg(feature = "http")]
impl HttpFetcher {
    /// Create a fetcher with default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the HTTP client cannot be built.
    pub fn new() -> Result<Self> {
        Self::with_config(&HttpConfig::default())
    }

    /// Create a fetcher with custom configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the HTTP client cannot be built.
    pub fn with_config(config: &HttpConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(config.user_agent.as_str())
            .cookie_store(config.enable_cookies)
            .gzip(true)
            .build()
            .map_err(Error::transport)?;
        Ok(Self { client })
    }
}

#[cfg(feature = "http")]
impl Fetcher for HttpFetcher {
    fn fetch(&self, request: &Request) -> Result<String> {
        use reqwest::blocking::multipart::Form;
        use reqwest::header::CONTENT_TYPE;

        let builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => {
                let form = request
                    .form
                    .iter()
                    .fold(Form::new(), |form, (k, v)| form.text(k.clone(), v.clone()));
                self.client.post(&request.url).multipart(form)
            }
        };

        let response = builder
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(Error::transport)?;
        tracing::trace!(status = %response.status(), url = %request.url, "response");

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let body = response.bytes().map_err(Error::transport)?;

        Ok(crate::encoding::decode_body(&body, content_type.as_deref()))
    }
}
