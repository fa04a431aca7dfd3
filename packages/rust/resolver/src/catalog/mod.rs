//! Built-in library profiles.
//!
//! Tables here are plain `'static` data, wrapped into profiles once at startup.

pub mod aws;
pub mod firebase;
pub mod openai;
pub mod openai_agents;

use url::Url;

use docrouter_shared::{DocRouterError, Result};

use crate::profile::LibraryProfile;

/// Every built-in profile, with the agents SDK scraping its public site.
pub fn builtin_profiles() -> Result<Vec<LibraryProfile>> {
    let agents_url = Url::parse(openai_agents::DEFAULT_BASE_URL).map_err(|e| {
        DocRouterError::config(format!(
            "invalid agents docs url '{}': {e}",
            openai_agents::DEFAULT_BASE_URL
        ))
    })?;

    Ok(builtin_profiles_with(agents_url))
}

/// Every built-in profile, scraping the agents SDK docs at `agents_url`.
pub fn builtin_profiles_with(agents_url: Url) -> Vec<LibraryProfile> {
    vec![
        openai::profile(),
        firebase::profile(),
        aws::profile(),
        openai_agents::profile(agents_url),
    ]
}
