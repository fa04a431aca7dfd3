//! Documentation resolution for docrouter library endpoints.
//!
//! - [`NameNormalizer`]: library prefix stripping
//! - [`KeywordTable`]: ordered static tables ([`DocTable`], [`DocPageMap`])
//! - [`DocFetcher`]: outbound page fetches with a browser identity
//! - [`DocumentationResolver`]: the tiered fallback chain for one [`LibraryProfile`]
//! - [`LibraryRegistry`]: all endpoints, built once at startup

pub mod catalog;
pub mod fetch;
pub mod normalize;
pub mod profile;
pub mod registry;
pub mod resolver;
pub mod table;

pub use fetch::DocFetcher;
pub use normalize::NameNormalizer;
pub use profile::{LibraryProfile, LiveDocs, ReferenceDocs};
pub use registry::LibraryRegistry;
pub use resolver::{DocumentationResolver, Tier};
pub use table::{DocPageMap, DocTable, KeywordTable};
