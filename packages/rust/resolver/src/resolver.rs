//! Tiered documentation resolution.
//!
//! A [`DocumentationResolver`] walks its profile's tiers in fixed order and
//! returns the first non-empty text. Tier failures are logged and swallowed;
//! the generic fallback always answers.

use tracing::{debug, info, instrument, warn};

use docrouter_extract::{SectionExtractor, extract_overview};
use docrouter_shared::{DocRequest, DocRouterError, ResolvedContext, Result};

use crate::fetch::DocFetcher;
use crate::normalize::NameNormalizer;
use crate::profile::LibraryProfile;

// ---------------------------------------------------------------------------
// Tier
// ---------------------------------------------------------------------------

/// One strategy in the fallback chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Scrape the page mapped to the key (or the site root) and isolate the
    /// matching section.
    PageFetch,
    /// Scrape the site root and assemble the product overview.
    OverviewFetch,
    /// Canned text from the static table.
    StaticTable,
    /// Return a reference page body verbatim.
    ReferenceFetch,
}

impl Tier {
    pub fn name(self) -> &'static str {
        match self {
            Self::PageFetch => "page_fetch",
            Self::OverviewFetch => "overview_fetch",
            Self::StaticTable => "static_table",
            Self::ReferenceFetch => "reference_fetch",
        }
    }
}

// ---------------------------------------------------------------------------
// DocumentationResolver
// ---------------------------------------------------------------------------

/// Resolves function names to documentation for one library profile.
#[derive(Debug, Clone)]
pub struct DocumentationResolver {
    profile: LibraryProfile,
    normalizer: NameNormalizer,
    extractor: SectionExtractor,
    fetcher: DocFetcher,
}

impl DocumentationResolver {
    pub fn new(profile: LibraryProfile, fetcher: DocFetcher) -> Self {
        let normalizer = NameNormalizer::new(profile.prefixes.iter().cloned());
        let extractor = profile
            .live
            .as_ref()
            .map(|live| SectionExtractor::new(&live.code_language))
            .unwrap_or_default();

        Self {
            profile,
            normalizer,
            extractor,
            fetcher,
        }
    }

    pub fn profile(&self) -> &LibraryProfile {
        &self.profile
    }

    pub fn id(&self) -> &str {
        &self.profile.id
    }

    /// Strip the library prefix from a raw function name.
    pub fn normalize<'a>(&self, function: &'a str) -> &'a str {
        self.normalizer.normalize(function)
    }

    /// Tiers attempted for a normalized key, in order.
    pub fn plan(&self, key: &str) -> Vec<Tier> {
        if self.profile.reference.is_some() {
            return vec![Tier::ReferenceFetch];
        }

        let mut tiers = Vec::with_capacity(3);
        if let Some(live) = &self.profile.live {
            tiers.push(Tier::PageFetch);
            if live.is_overview_alias(key) {
                tiers.push(Tier::OverviewFetch);
            }
        }
        tiers.push(Tier::StaticTable);
        tiers
    }

    /// Run a single tier. Any error means "try the next one".
    pub async fn attempt(&self, tier: Tier, key: &str) -> Result<String> {
        match tier {
            Tier::PageFetch => {
                let live = self.live_docs(tier)?;
                let url = live.page_url(key)?;
                let html = self.fetcher.fetch_text(&url).await?;
                self.extractor.extract(&html, key)
            }
            Tier::OverviewFetch => {
                let live = self.live_docs(tier)?;
                let html = self.fetcher.fetch_text(&live.base_url).await?;
                extract_overview(&html)
            }
            Tier::StaticTable => self
                .profile
                .table
                .lookup(key)
                .map(|(_, body)| body.to_string())
                .ok_or_else(|| DocRouterError::lookup_miss(key)),
            Tier::ReferenceFetch => {
                let reference = self.profile.reference.as_ref().ok_or_else(|| {
                    DocRouterError::config(format!("{} has no reference url", self.profile.id))
                })?;
                let body = self.fetcher.fetch_text(&reference.url).await?;
                if body.trim().is_empty() {
                    return Err(DocRouterError::extraction("empty reference page"));
                }
                Ok(body)
            }
        }
    }

    fn live_docs(&self, tier: Tier) -> Result<&crate::profile::LiveDocs> {
        self.profile.live.as_ref().ok_or_else(|| {
            DocRouterError::config(format!(
                "{} has no live docs for {}",
                self.profile.id,
                tier.name()
            ))
        })
    }

    /// Documentation for `function`, never empty.
    #[instrument(skip(self), fields(library = %self.profile.id))]
    pub async fn resolve_documentation(&self, function: &str) -> String {
        let key = self.normalize(function);

        for tier in self.plan(key) {
            match self.attempt(tier, key).await {
                Ok(text) if !text.trim().is_empty() => {
                    info!(tier = tier.name(), key, "documentation resolved");
                    return text;
                }
                Ok(_) => debug!(tier = tier.name(), key, "tier produced empty text"),
                Err(e) if tier == Tier::OverviewFetch || !e.is_tier_failure() => {
                    warn!(tier = tier.name(), key, error = %e, "tier failed");
                }
                Err(e) => debug!(tier = tier.name(), key, error = %e, "tier failed"),
            }
        }

        debug!(key, "falling back to generic text");
        self.fallback_text(function)
    }

    fn fallback_text(&self, function: &str) -> String {
        match &self.profile.reference {
            Some(reference) if !reference.error_text.trim().is_empty() => {
                reference.error_text.clone()
            }
            _ => self.profile.render_fallback(function),
        }
    }

    /// Resolve a request into the response payload.
    pub async fn resolve(&self, request: &DocRequest) -> ResolvedContext {
        let documentation = self.resolve_documentation(&request.function).await;

        ResolvedContext {
            language: request.language.clone(),
            library: self.profile.id.clone(),
            function: request.function.clone(),
            documentation,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
