//! # nova-extract
//!
//! Catalog, metadata, chapter and content extraction for the NOVA
//! (`novelasligeras.net`) light-novel site.
//!
//! The site has no API. This crate turns its WooCommerce / page-builder
//! markup into plain records: catalog entries, a novel document with a
//! volume-ordered chapter list, and sanitized chapter body markup.
//!
//! ## Quick Start
//!
//! Every extraction step is available offline on markup you already have:
//!
//! ```rust
//! use nova_extract::{chapters, content, dom};
//!
//! let page = r#"<div class="vc_row"><div class="vc_column-inner"><div class="wpb_wrapper">
//!   <div class="dt-fancy-title">Volumen 1</div>
//!   <div class="wpb_tab"><a href="https://novelasligeras.net/index.php/v1-c1/">Parte 1 - Capítulo 1: El fin</a></div>
//! </div></div></div>"#;
//!
//! let doc = dom::parse(page);
//! let chapters = chapters::extract_chapters(&doc, "https://novelasligeras.net");
//! assert_eq!(chapters[0].name, "Volumen 1 - Capítulo 1 - Parte 1: El fin");
//! assert_eq!(chapters[0].path, "/index.php/v1-c1/");
//!
//! let body = content::sanitize_chapter(
//!     r#"<div class="wpb_text_column wpb_content_element"><div class="wpb_wrapper"><p style="text-align:center">***</p></div></div>"#,
//! )?;
//! assert_eq!(body, "<center>***</center>");
//! # Ok::<(), nova_extract::Error>(())
//! ```
//!
//! With the default `http` feature, [`Source`] drives the same steps over a
//! blocking HTTP transport:
//!
//! ```rust,no_run
//! use nova_extract::{HttpFetcher, Source};
//!
//! let source = Source::new(HttpFetcher::new()?);
//! let novel = source.parse_novel("/index.php/producto/overlord-novela-ligera/")?;
//! let first = source.parse_chapter(&novel.chapters[0].path)?;
//! println!("{}: {} bytes", novel.name, first.len());
//! # Ok::<(), nova_extract::Error>(())
//! ```
//!
//! ## Failure model
//!
//! - Anti-bot interstitials fail with [`Error::BlockedBySource`] before any
//!   field is read.
//! - A first-page search feed that is not JSON fails with
//!   [`Error::MalformedResponse`].
//! - Transport failures pass through as [`Error::Transport`].
//! - Anything else missing from a page degrades to an absent or empty value.

mod error;
mod options;
mod result;
mod source;

/// DOM helpers over `dom_query`.
pub mod dom;

/// Compiled regex patterns, selectors and literal markers.
pub mod patterns;

/// Site-relative path and search URL utilities.
pub mod url_utils;

/// Response body charset detection and decoding.
pub mod encoding;

/// Transport trait, HTTP implementation and block detection.
pub mod transport;

/// Search feed and results grid extraction.
pub mod listing;

/// Novel page metadata extraction.
pub mod metadata;

/// Volume and chapter list reconstruction.
pub mod chapters;

/// Chapter body container selection and sanitization.
pub mod content;

// Public API - re-exports
pub use error::{BoxError, Error, Result};
pub use options::{Options, DEFAULT_FEED_PATH, DEFAULT_SITE};
pub use result::{CatalogEntry, ChapterEntry, NovelDocument};
pub use source::{Source, SOURCE_ID, SOURCE_NAME};
pub use transport::{Fetcher, HttpConfig, Method, Request};

#[cfg(feature = "http")]
pub use transport::HttpFetcher;
