//! Compiled regex patterns, CSS selectors and literal markers for the NOVA
//! page templates.
//!
//! Patterns are compiled once on first use via `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Block Detection
// =============================================================================

/// Titles of the anti-bot interstitials served instead of real pages.
pub const BLOCKED_TITLES: &[&str] = &["Attention Required! | Cloudflare", "Just a moment..."];

// =============================================================================
// Listing (paginated search results)
// =============================================================================

/// One result cell in the search results grid.
pub const GRID_CELL: &str = ".dt-css-grid div.wf-cell";

/// Title link inside a result cell.
pub const CELL_TITLE_LINK: &str = "h4.entry-title a";

/// Cover attribute chain for result cells: lazy-load, CDN fallback, plain.
pub const LISTING_COVER_ATTRS: &[&str] = &["data-src", "data-cfsrc", "src"];

// =============================================================================
// Novel Page
// =============================================================================

/// Product gallery image holding the cover.
pub const GALLERY_IMAGE: &str = ".woocommerce-product-gallery img";

/// Cover attribute chain on novel pages: plain, CDN fallback, lazy-load.
pub const GALLERY_COVER_ATTRS: &[&str] = &["src", "data-cfsrc", "data-src"];

/// Writer row of the product attribute table.
pub const AUTHOR_CELL: &str = ".woocommerce-product-attributes-item--attribute_pa_escritor td";

/// Illustrator row of the product attribute table.
pub const ARTIST_CELL: &str = ".woocommerce-product-attributes-item--attribute_pa_ilustrador td";

/// Status row of the product attribute table.
pub const STATUS_CELL: &str = ".woocommerce-product-attributes-item--attribute_pa_estado td";

/// Short description container holding the synopsis.
pub const SUMMARY: &str = ".woocommerce-product-details__short-description";

// =============================================================================
// Chapter Hierarchy
// =============================================================================

/// Layout blocks that may hold a volume's chapter tabs.
pub const VOLUME_BLOCK: &str = ".vc_row div.vc_column-inner > div.wpb_wrapper";

/// Heading inside a layout block naming the volume.
pub const VOLUME_TITLE: &str = ".dt-fancy-title";

/// Chapter links inside a volume block.
pub const CHAPTER_LINK: &str = ".wpb_tab a";

/// Volume marker: block titles starting with "Volumen" (any case).
pub static VOLUME_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^Volumen").expect("VOLUME_MARKER regex"));

/// Structured chapter link text: `Parte <N> <sep> <chapter>: <title>`.
///
/// Groups: 1 = part (`Parte 2`), 2 = chapter label, 3 = title. The separator
/// is any single character, optionally surrounded by whitespace.
pub static CHAPTER_PART: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(Parte \d+)\s*.\s*(.+?):\s*(.+)").expect("CHAPTER_PART regex")
});

// =============================================================================
// Chapter Content
// =============================================================================

/// Boilerplate phrase unique to the template that keeps chapter text in `#content`.
pub const NAZARICK_FINGERPRINT: &str = "Nadie entra sin permiso en la Gran Tumba de Nazarick";

/// Container used by the fingerprinted template.
pub const FINGERPRINTED_CONTENT: &str = "#content";

/// Container used by the regular page-builder template.
pub const DEFAULT_CONTENT: &str = ".wpb_text_column.wpb_content_element > .wpb_wrapper";

/// Tag used both for inline ad placeholders and as the canonical centering wrapper.
pub const CENTER_TAG: &str = "center";
