//! HTTP surface for docrouter.
//!
//! Mounts one context endpoint per registered library plus the backend and
//! frontend catalog endpoints.

pub mod backend;
pub mod catalog;
pub mod error;
pub mod frontend;
pub mod routes;
pub mod state;

pub use routes::app;
pub use state::AppState;
