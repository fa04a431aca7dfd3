//! Error types for docrouter.
//!
//! Library crates use [`DocRouterError`] via `thiserror`.
//! The server binary wraps this with `color-eyre`; the HTTP layer maps request
//! errors onto its own JSON error body.

use std::path::PathBuf;

/// Top-level error type for all docrouter operations.
///
/// Inside the resolver, `Network`, `Extraction` and `LookupMiss` mark a failed
/// tier and are recovered locally; they never reach an HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum DocRouterError {
    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// Network/HTTP error while fetching a documentation page.
    #[error("network error: {0}")]
    Network(String),

    /// The fetched document did not yield any usable documentation text.
    #[error("extraction error: {message}")]
    Extraction { message: String },

    /// No static table entry matched the lookup key.
    #[error("no documentation entry matches '{key}'")]
    LookupMiss { key: String },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Request validation error, such as a missing query parameter.
    #[error("validation error: {message}")]
    Validation { message: String },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, DocRouterError>;

impl DocRouterError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create an extraction error from any displayable message.
    pub fn extraction(msg: impl Into<String>) -> Self {
        Self::Extraction {
            message: msg.into(),
        }
    }

    /// Create a lookup miss for the given key.
    pub fn lookup_miss(key: impl Into<String>) -> Self {
        Self::LookupMiss { key: key.into() }
    }

    /// Create a validation error from any displayable message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error only means "try the next tier".
    pub fn is_tier_failure(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::Extraction { .. } | Self::LookupMiss { .. }
        )
    }
}
