//! Library prefix stripping for function identifiers.

/// Strips library-specific prefixes (`boto3.`, `openai.agents.`, ...) from a
/// raw function identifier to produce the bare lookup key.
#[derive(Debug, Clone, Default)]
pub struct NameNormalizer {
    /// Longest first, so `openai.agents.` is tried before `openai.`.
    prefixes: Vec<String>,
}

impl NameNormalizer {
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut prefixes: Vec<String> = prefixes
            .into_iter()
            .map(Into::into)
            .filter(|p| !p.is_empty())
            .collect();
        prefixes.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        prefixes.dedup();
        Self { prefixes }
    }

    /// Remove known prefixes (ASCII case-insensitive) until none applies.
    ///
    /// Stripping to a fixed point keeps `normalize` idempotent.
    pub fn normalize<'a>(&self, raw: &'a str) -> &'a str {
        let mut key = raw;
        while let Some(prefix) = self.matching_prefix(key) {
            key = &key[prefix.len()..];
        }
        key
    }

    fn matching_prefix(&self, key: &str) -> Option<&str> {
        self.prefixes
            .iter()
            .map(String::as_str)
            .find(|prefix| {
                key.get(..prefix.len())
                    .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
            })
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }
}
