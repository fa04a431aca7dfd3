//! HTML section extraction for scraped documentation pages.
//!
//! Turns a fetched documentation page into Markdown-like text by walking the
//! page's content region in document order, then narrows the result to the
//! heading section that mentions the requested function.
//!
//! - [`SectionExtractor`]: content region walk + keyword section isolation
//! - [`extract_overview`]: title / intro / "why use" / installation assembly

mod overview;
mod walk;

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, instrument};

use docrouter_shared::{DocRouterError, Result};

pub use overview::extract_overview;

/// Content region candidates, in priority order.
static CONTENT_REGION_SELECTORS: LazyLock<[Selector; 2]> = LazyLock::new(|| {
    [
        Selector::parse("main").expect("valid selector"),
        Selector::parse("div.markdown-body").expect("valid selector"),
    ]
});

// ---------------------------------------------------------------------------
// SectionExtractor
// ---------------------------------------------------------------------------

/// Extracts documentation text from a page's content region.
#[derive(Debug, Clone)]
pub struct SectionExtractor {
    /// Info string put on fenced code blocks (e.g. `python`).
    code_language: String,
}

impl SectionExtractor {
    pub fn new(code_language: impl Into<String>) -> Self {
        Self {
            code_language: code_language.into(),
        }
    }

    /// Extract the documentation text for `keyword` from a raw HTML page.
    ///
    /// Fails when the page has no content region or the region yields no text.
    /// When the keyword appears in the text, only the first heading section
    /// containing it is returned.
    #[instrument(skip(self, html), fields(html_len = html.len()))]
    pub fn extract(&self, html: &str, keyword: &str) -> Result<String> {
        let doc = Html::parse_document(html);

        let region = find_content_region(&doc)
            .ok_or_else(|| DocRouterError::extraction("no content region in document"))?;

        let text = walk::render_region(region, &self.code_language);
        if text.trim().is_empty() {
            return Err(DocRouterError::extraction("content region produced no text"));
        }

        debug!(
            region = region.value().name(),
            text_len = text.len(),
            "content region rendered"
        );

        Ok(isolate_section(&text, keyword))
    }
}

impl Default for SectionExtractor {
    fn default() -> Self {
        Self::new("python")
    }
}

/// Find the first content region in priority order.
pub fn find_content_region(doc: &Html) -> Option<ElementRef<'_>> {
    CONTENT_REGION_SELECTORS.iter().find_map(|sel| doc.select(sel).next())
}

/// Narrow rendered text to the heading section mentioning `keyword`.
///
/// Returns the whole (trimmed) text when the keyword is empty, absent, or only
/// matches across section boundaries.
pub fn isolate_section(text: &str, keyword: &str) -> String {
    static HEADING_SPLIT_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\n##\s+").expect("valid regex"));

    let needle = keyword.to_lowercase();
    if needle.is_empty() || !text.to_lowercase().contains(&needle) {
        return text.trim().to_string();
    }

    HEADING_SPLIT_RE
        .split(text)
        .find(|section| section.to_lowercase().contains(&needle))
        .map(|section| format!("## {}", section.trim()))
        .unwrap_or_else(|| text.trim().to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
