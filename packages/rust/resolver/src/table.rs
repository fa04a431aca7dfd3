//! Ordered keyword tables: static documentation bodies and doc page paths.

use serde::{Serialize, Serializer};

/// An ordered keyword → value table with first-match substring lookup.
///
/// A key matches when it occurs (case-insensitively) inside the looked-up
/// name. When several keys match, the first in declaration order wins, so
/// tables must be declared most-specific first where keys overlap.
#[derive(Debug, Clone, Default)]
pub struct KeywordTable {
    entries: Vec<(String, String)>,
}

/// Canonical key → canned documentation body.
pub type DocTable = KeywordTable;

/// Keyword → remote documentation page path.
pub type DocPageMap = KeywordTable;

impl KeywordTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `'static` data, keeping declaration order.
    pub fn from_static(entries: &[(&str, &str)]) -> Self {
        entries
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    /// First entry whose key is contained in `name`.
    pub fn lookup(&self, name: &str) -> Option<(&str, &str)> {
        let name = name.to_lowercase();
        self.entries
            .iter()
            .find(|(key, _)| !key.is_empty() && name.contains(&key.to_lowercase()))
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for KeywordTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Serializes as a JSON object in declaration order.
impl Serialize for KeywordTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}
