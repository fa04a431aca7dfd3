//! Shared types, error model, and configuration for docrouter.
//!
//! This crate is the foundation depended on by all other docrouter crates.
//! It provides:
//! - [`DocRouterError`]: the unified error type
//! - Request/response types ([`DocRequest`], [`ResolvedContext`], [`ContextEnvelope`])
//! - Configuration ([`AppConfig`], [`FetchOptions`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, BROWSER_ACCEPT, BROWSER_USER_AGENT, FetchConfig, FetchOptions, LibraryEntry,
    RESERVED_LIBRARY_IDS, ServerConfig, config_dir, config_file_path, init_config, load_config,
    load_config_from, validate_config,
};
pub use error::{DocRouterError, Result};
pub use types::{ContextEnvelope, DocRequest, ResolvedContext};
