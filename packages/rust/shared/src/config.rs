//! Application configuration for docrouter.
//!
//! User config lives at `~/.docrouter/docrouter.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{DocRouterError, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "docrouter.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".docrouter";

/// Library ids taken by the catalog endpoints.
pub const RESERVED_LIBRARY_IDS: [&str; 2] = ["backend", "frontend"];

/// Browser identity sent with documentation fetches. Some documentation hosts
/// reject bare automated requests.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Accept header matching [`BROWSER_USER_AGENT`].
pub const BROWSER_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";

// ---------------------------------------------------------------------------
// Config structs (matching docrouter.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP listener settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Outbound documentation fetch settings.
    #[serde(default)]
    pub fetch: FetchConfig,

    /// Extra reference libraries served next to the built-in ones.
    #[serde(default)]
    pub libraries: Vec<LibraryEntry>,
}

/// `[server]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".into()
}
fn default_port() -> u16 {
    8000
}

/// `[fetch]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Per-request timeout for outbound documentation fetches.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every fetch.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Accept header sent with every fetch.
    #[serde(default = "default_accept")]
    pub accept: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            accept: default_accept(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}
fn default_user_agent() -> String {
    BROWSER_USER_AGENT.into()
}
fn default_accept() -> String {
    BROWSER_ACCEPT.into()
}

/// `[[libraries]]` entry: a reference library answered by one raw fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryEntry {
    /// Path segment under `/mcp/`, also reported as `library`.
    pub id: String,
    /// Human-readable name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Page fetched for every request.
    pub reference_url: String,
    /// Function prefixes stripped from the logged key. Reference pages are
    /// served whole, so no matching happens on the stripped name.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prefixes: Vec<String>,
    /// Text returned when the reference page cannot be fetched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_text: Option<String>,
}

// ---------------------------------------------------------------------------
// Fetch options (runtime, merged from config + CLI flags)
// ---------------------------------------------------------------------------

/// Runtime fetch configuration: merged from config file + CLI flags.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Bound on each outbound request.
    pub timeout: Duration,
    /// User-Agent header value.
    pub user_agent: String,
    /// Accept header value.
    pub accept: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self::from(&AppConfig::default())
    }
}

impl From<&AppConfig> for FetchOptions {
    fn from(config: &AppConfig) -> Self {
        Self {
            timeout: Duration::from_secs(config.fetch.timeout_secs),
            user_agent: config.fetch.user_agent.clone(),
            accept: config.fetch.accept.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.docrouter/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| DocRouterError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.docrouter/docrouter.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| DocRouterError::io(path, e))?;

    let config: AppConfig = toml::from_str(&content).map_err(|e| {
        DocRouterError::config(format!("failed to parse {}: {e}", path.display()))
    })?;
    validate_config(&config)?;
    Ok(config)
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| DocRouterError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| DocRouterError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| DocRouterError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}

/// Reject configs that would produce an unusable server.
pub fn validate_config(config: &AppConfig) -> Result<()> {
    if config.fetch.timeout_secs == 0 {
        return Err(DocRouterError::config("fetch.timeout_secs must be at least 1"));
    }

    for entry in &config.libraries {
        if entry.id.is_empty() || entry.id.contains('/') {
            return Err(DocRouterError::config(format!(
                "library id '{}' must be a non-empty path segment",
                entry.id
            )));
        }
        if RESERVED_LIBRARY_IDS.contains(&entry.id.as_str()) {
            return Err(DocRouterError::config(format!(
                "library id '{}' is reserved",
                entry.id
            )));
        }
        if entry.reference_url.is_empty() {
            return Err(DocRouterError::config(format!(
                "library '{}' has an empty reference_url",
                entry.id
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_serializes() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize default config");
        assert!(toml_str.contains("timeout_secs"));
        assert!(toml_str.contains("Mozilla/5.0"));
    }

    #[test]
    fn config_roundtrip() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize");
        let parsed: AppConfig = toml::from_str(&toml_str).expect("deserialize");
        assert_eq!(parsed.server.port, 8000);
        assert_eq!(parsed.fetch.timeout_secs, 10);
    }

    #[test]
    fn config_with_libraries() {
        let toml_str = r#"
[server]
port = 9000

[[libraries]]
id = "stripe"
reference_url = "https://docs.stripe.com/api"
prefixes = ["stripe."]
"#;
        let config: AppConfig = toml::from_str(toml_str).expect("parse");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.libraries.len(), 1);
        assert_eq!(config.libraries[0].prefixes, vec!["stripe.".to_string()]);
        assert!(config.libraries[0].error_text.is_none());
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn fetch_options_from_app_config() {
        let mut app = AppConfig::default();
        app.fetch.timeout_secs = 3;
        let opts = FetchOptions::from(&app);
        assert_eq!(opts.timeout, Duration::from_secs(3));
        assert_eq!(opts.user_agent, BROWSER_USER_AGENT);
    }

    #[test]
    fn rejects_bad_library_id() {
        let mut config = AppConfig::default();
        config.libraries.push(LibraryEntry {
            id: "a/b".into(),
            display_name: None,
            reference_url: "https://example.com".into(),
            prefixes: vec![],
            error_text: None,
        });
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("path segment"));
    }

    #[test]
    fn rejects_reserved_library_id() {
        let mut config = AppConfig::default();
        config.libraries.push(LibraryEntry {
            id: "backend".into(),
            display_name: None,
            reference_url: "https://example.com".into(),
            prefixes: vec![],
            error_text: None,
        });
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("reserved"));
    }

    #[test]
    fn load_config_from_file() {
        let dir = std::env::temp_dir().join(format!("docrouter-cfg-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[fetch]\ntimeout_secs = 0\n").unwrap();

        let result = load_config_from(&path);
        assert!(result.is_err());

        std::fs::write(&path, "[fetch]\ntimeout_secs = 4\n").unwrap();
        let config = load_config_from(&path).unwrap();
        assert_eq!(config.fetch.timeout_secs, 4);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
