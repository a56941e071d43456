//! Error types for nova-extract.
//!
//! Missing fields, containers and anchors are never errors; they degrade to
//! absent or empty values. Only the cases below abort an operation.

/// Boxed error produced by a transport implementation.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Error type for source operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The fetched page is an anti-bot interstitial instead of real content.
    #[error("blocked by anti-bot challenge ({title}); open the site in an interactive session (webview) and retry")]
    BlockedBySource {
        /// Title of the challenge page that was served.
        title: String,
    },

    /// The search feed did not return the expected JSON array.
    #[error("malformed search feed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// Network or status failure reported by the transport, passed through unchanged.
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// The configured site or a derived request URL is not a valid URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

impl Error {
    /// Wraps any transport failure.
    pub fn transport<E>(err: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self::Transport(err.into())
    }

    /// Returns `true` if the source served an anti-bot challenge.
    #[must_use]
    pub fn is_blocked(&self) -> bool {
        matches!(self, Self::BlockedBySource { .. })
    }
}

/// Result type alias for source operations.
pub type Result<T> = std::result::Result<T, Error>;
