//! Library id → resolver lookup, built once at startup.

use std::collections::HashSet;

use tracing::info;

use docrouter_shared::{AppConfig, DocRouterError, FetchOptions, Result};

use crate::catalog::builtin_profiles;
use crate::fetch::DocFetcher;
use crate::profile::LibraryProfile;
use crate::resolver::DocumentationResolver;

/// Every library endpoint the server exposes, in registration order.
#[derive(Debug, Clone)]
pub struct LibraryRegistry {
    resolvers: Vec<DocumentationResolver>,
}

impl LibraryRegistry {
    /// Build one resolver per profile, all sharing `fetcher`'s connection pool.
    pub fn new(profiles: Vec<LibraryProfile>, fetcher: DocFetcher) -> Result<Self> {
        let mut seen = HashSet::new();
        if let Some(dup) = profiles.iter().find(|p| !seen.insert(p.id.clone())) {
            return Err(DocRouterError::config(format!(
                "library '{}' is registered twice",
                dup.id
            )));
        }

        let resolvers = profiles
            .into_iter()
            .map(|profile| DocumentationResolver::new(profile, fetcher.clone()))
            .collect();

        Ok(Self { resolvers })
    }

    /// Built-in libraries plus every `[[libraries]]` entry from the config.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let fetcher = DocFetcher::new(&FetchOptions::from(config))?;

        let mut profiles = builtin_profiles()?;
        for entry in &config.libraries {
            profiles.push(LibraryProfile::from_entry(entry)?);
        }

        let registry = Self::new(profiles, fetcher)?;
        info!(libraries = registry.resolvers.len(), "library registry built");
        Ok(registry)
    }

    pub fn get(&self, id: &str) -> Option<&DocumentationResolver> {
        self.resolvers.iter().find(|r| r.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DocumentationResolver> {
        self.resolvers.iter()
    }

    /// `/mcp/{id}/context` for every registered library.
    pub fn context_paths(&self) -> Vec<String> {
        self.resolvers
            .iter()
            .map(|r| format!("/mcp/{}/context", r.id()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docrouter_shared::LibraryEntry;

    #[test]
    fn builtins_are_registered() {
        let registry = LibraryRegistry::from_config(&AppConfig::default()).unwrap();
        for id in ["openai", "firebase", "aws", "openai-agents"] {
            assert!(registry.get(id).is_some(), "missing {id}");
        }
        assert!(registry.get("backend").is_none());
        assert_eq!(registry.context_paths()[0], "/mcp/openai/context");
    }

    #[test]
    fn config_libraries_are_appended() {
        let mut config = AppConfig::default();
        config.libraries.push(LibraryEntry {
            id: "stripe".into(),
            display_name: None,
            reference_url: "https://docs.stripe.com/api".into(),
            prefixes: vec![],
            error_text: None,
        });

        let registry = LibraryRegistry::from_config(&config).unwrap();
        assert!(registry.get("stripe").unwrap().profile().reference.is_some());
        assert_eq!(
            registry.context_paths().last().map(String::as_str),
            Some("/mcp/stripe/context")
        );
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut config = AppConfig::default();
        config.libraries.push(LibraryEntry {
            id: "aws".into(),
            display_name: None,
            reference_url: "https://example.com".into(),
            prefixes: vec![],
            error_text: None,
        });

        let err = LibraryRegistry::from_config(&config).unwrap_err();
        assert!(err.to_string().contains("registered twice"));
    }
}
