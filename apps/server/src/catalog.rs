//! Static catalog tables shared by the backend and frontend endpoints.

use serde::{Serialize, Serializer};

/// Flat `name → text` table, serialized as a JSON object in declaration order.
#[derive(Debug, Clone, Copy)]
pub struct Entries(pub &'static [(&'static str, &'static str)]);

impl Entries {
    /// Exact, case-sensitive lookup.
    pub fn get(&self, name: &str) -> Option<&'static str> {
        self.0.iter().find(|(k, _)| *k == name).map(|(_, v)| *v)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(|(k, _)| *k)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.0.iter().copied()
    }
}

impl Serialize for Entries {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Two-level `group → name → text` table.
#[derive(Debug, Clone, Copy)]
pub struct Groups(pub &'static [(&'static str, Entries)]);

impl Groups {
    pub fn get(&self, group: &str) -> Option<Entries> {
        self.0.iter().find(|(k, _)| *k == group).map(|(_, v)| *v)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(|(k, _)| *k)
    }
}

impl Serialize for Groups {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(k, v)| (*k, *v)))
    }
}

/// First character uppercased, the rest lowercased.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GROUPS: Groups = Groups(&[
        ("zeta", Entries(&[("b", "2"), ("a", "1")])),
        ("alpha", Entries(&[])),
    ]);

    #[test]
    fn serializes_in_declaration_order() {
        let json = serde_json::to_string(&GROUPS).unwrap();
        assert_eq!(json, r#"{"zeta":{"b":"2","a":"1"},"alpha":{}}"#);
    }

    #[test]
    fn lookups_are_exact() {
        assert_eq!(GROUPS.get("zeta").and_then(|e| e.get("a")), Some("1"));
        assert!(GROUPS.get("Zeta").is_none());
    }

    #[test]
    fn capitalize_lowers_the_tail() {
        assert_eq!(capitalize("users"), "Users");
        assert_eq!(capitalize("ORDERS"), "Orders");
        assert_eq!(capitalize(""), "");
    }
}
