//! Library profiles: everything that distinguishes one documentation endpoint
//! from another.
//!
//! Each endpoint is a [`LibraryProfile`] value driving the same resolver; no
//! library gets its own code path.

use url::Url;

use docrouter_shared::{DocRouterError, LibraryEntry, Result};

use crate::table::{DocPageMap, DocTable};

/// Placeholder replaced by the caller's original function name.
const FUNCTION_PLACEHOLDER: &str = "{function}";

/// Live documentation site scraped by the page and overview tiers.
#[derive(Debug, Clone)]
pub struct LiveDocs {
    /// Site root; also the overview page.
    pub base_url: Url,
    /// Keyword → page path relative to `base_url`.
    pub pages: DocPageMap,
    /// Lowercase names meaning "the whole SDK".
    pub overview_aliases: Vec<String>,
    /// Info string for fenced code blocks in scraped pages.
    pub code_language: String,
}

impl LiveDocs {
    /// Page to scrape for `key`: the first mapped keyword it contains, else
    /// the site root.
    pub fn page_url(&self, key: &str) -> Result<Url> {
        match self.pages.lookup(key) {
            Some((_, path)) => self
                .base_url
                .join(path)
                .map_err(|e| DocRouterError::Network(format!("invalid page path '{path}': {e}"))),
            None => Ok(self.base_url.clone()),
        }
    }

    pub fn is_overview_alias(&self, key: &str) -> bool {
        let key = key.to_lowercase();
        self.overview_aliases.iter().any(|alias| *alias == key)
    }
}

/// A single reference page returned verbatim for every request.
#[derive(Debug, Clone)]
pub struct ReferenceDocs {
    pub url: Url,
    /// Documentation text used when the fetch fails.
    pub error_text: String,
}

/// Configuration value describing one library endpoint.
#[derive(Debug, Clone)]
pub struct LibraryProfile {
    /// Path segment under `/mcp/` and the `library` field of responses.
    pub id: String,
    pub display_name: String,
    /// Official documentation root, named in fallback text.
    pub docs_url: String,
    /// Prefixes stripped by the name normalizer.
    pub prefixes: Vec<String>,
    pub table: DocTable,
    pub live: Option<LiveDocs>,
    pub reference: Option<ReferenceDocs>,
    /// Generic fallback text; `{function}` is replaced by the original name.
    pub fallback_template: String,
}

impl LibraryProfile {
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        docs_url: impl Into<String>,
    ) -> Self {
        let display_name = display_name.into();
        let docs_url = docs_url.into();
        let fallback_template = format!(
            "Documentation for {FUNCTION_PLACEHOLDER} not found in the {display_name} reference. \
             See the official documentation at {docs_url}"
        );

        Self {
            id: id.into(),
            display_name,
            docs_url,
            prefixes: Vec::new(),
            table: DocTable::new(),
            live: None,
            reference: None,
            fallback_template,
        }
    }

    pub fn with_prefixes(mut self, prefixes: &[&str]) -> Self {
        self.prefixes = prefixes.iter().map(|p| (*p).to_string()).collect();
        self
    }

    pub fn with_table(mut self, table: DocTable) -> Self {
        self.table = table;
        self
    }

    pub fn with_live(mut self, live: LiveDocs) -> Self {
        self.live = Some(live);
        self
    }

    pub fn with_fallback(mut self, template: impl Into<String>) -> Self {
        self.fallback_template = template.into();
        self
    }

    /// Build a reference-only profile from a `[[libraries]]` config entry.
    pub fn from_entry(entry: &LibraryEntry) -> Result<Self> {
        let url = Url::parse(&entry.reference_url).map_err(|e| {
            DocRouterError::config(format!(
                "library '{}': invalid reference_url '{}': {e}",
                entry.id, entry.reference_url
            ))
        })?;
        let display_name = entry.display_name.clone().unwrap_or_else(|| entry.id.clone());
        let error_text = entry
            .error_text
            .clone()
            .unwrap_or_else(|| format!("Error fetching {display_name} docs"));

        let mut profile = Self::new(&entry.id, display_name, &entry.reference_url);
        profile.prefixes = entry.prefixes.clone();
        profile.reference = Some(ReferenceDocs { url, error_text });
        Ok(profile)
    }

    /// Generic fallback text naming `function`. Never empty.
    pub fn render_fallback(&self, function: &str) -> String {
        let text = self.fallback_template.replace(FUNCTION_PLACEHOLDER, function);
        if text.trim().is_empty() {
            format!(
                "Documentation for {function} not found. See the official documentation at {}",
                self.docs_url
            )
        } else {
            text
        }
    }
}
