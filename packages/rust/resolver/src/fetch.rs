//! Outbound documentation page fetching.

use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use tracing::debug;
use url::Url;

use docrouter_shared::{DocRouterError, FetchOptions, Result};

/// Maximum number of redirects followed per fetch.
const MAX_REDIRECTS: usize = 5;

/// HTTP client for documentation pages, shared by every resolver.
///
/// Cloning is cheap; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct DocFetcher {
    client: Client,
}

impl DocFetcher {
    /// Build a fetcher with the configured timeout and browser identity.
    pub fn new(opts: &FetchOptions) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let accept = HeaderValue::from_str(&opts.accept)
            .map_err(|e| DocRouterError::config(format!("invalid accept header: {e}")))?;
        headers.insert(ACCEPT, accept);

        let client = Client::builder()
            .user_agent(opts.user_agent.as_str())
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .timeout(opts.timeout)
            .build()
            .map_err(|e| DocRouterError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }

    /// GET `url` and return the body. Non-2xx statuses are errors.
    pub async fn fetch_text(&self, url: &Url) -> Result<String> {
        debug!(%url, "fetching documentation page");

        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(|e| DocRouterError::Network(format!("{url}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DocRouterError::Network(format!("{url}: HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| DocRouterError::Network(format!("{url}: body read failed: {e}")))?;

        debug!(%url, status = status.as_u16(), len = body.len(), "page fetched");
        Ok(body)
    }
}
