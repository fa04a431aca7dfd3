//! Request and response types shared by the resolver and the HTTP layer.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// DocRequest
// ---------------------------------------------------------------------------

/// A documentation lookup: which function, asked from which language.
///
/// Both fields are free-form; `language` is echoed back untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocRequest {
    pub language: String,
    pub function: String,
}

impl DocRequest {
    pub fn new(language: impl Into<String>, function: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            function: function.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// ResolvedContext
// ---------------------------------------------------------------------------

/// The payload returned by every library context endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedContext {
    /// Language from the request, unmodified.
    pub language: String,
    /// Library identifier bound to the endpoint.
    pub library: String,
    /// Function from the request, unmodified.
    pub function: String,
    /// Documentation text. Never empty.
    pub documentation: String,
}

/// `{ "context": ... }` wrapper used by all context endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextEnvelope<T> {
    pub context: T,
}

impl<T> ContextEnvelope<T> {
    pub fn new(context: T) -> Self {
        Self { context }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_serialization() {
        let envelope = ContextEnvelope::new(ResolvedContext {
            language: "python".into(),
            library: "aws".into(),
            function: "boto3.client".into(),
            documentation: "# client".into(),
        });

        let json = serde_json::to_value(&envelope).expect("serialize");
        assert_eq!(json["context"]["library"], "aws");
        assert_eq!(json["context"]["function"], "boto3.client");
        assert_eq!(json["context"]["documentation"], "# client");
    }
}
