//! Raw property storage and properties-file text parsing.
//!
//! Properties are a flat, string-keyed mapping. Keys are dot-separated
//! namespaced identifiers (e.g. `profiler.collector.span.port`); there is no
//! nesting beyond the flat key strings.

use std::collections::BTreeMap;

/// Flat string-to-string mapping loaded from a properties file.
///
/// Immutable once loaded; the assembled configuration retains it so the
/// typed-read API can be re-queried after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawProperties {
    entries: BTreeMap<String, String>,
}

impl RawProperties {
    /// Create an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `key=value`-per-line properties text.
    ///
    /// Lines starting with `#` or `!` and blank lines are skipped. The first
    /// `=` or `:` separates key from value; both sides are trimmed. A line
    /// without a separator becomes a key with an empty value. Parsing never
    /// fails; later occurrences of a key overwrite earlier ones.
    #[must_use]
    pub fn parse_str(text: &str) -> Self {
        let mut entries = BTreeMap::new();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }
            match line.find(['=', ':']) {
                Some(separator) => {
                    let (key, value) = line.split_at(separator);
                    entries.insert(
                        key.trim().to_string(),
                        value.get(1..).unwrap_or_default().trim().to_string(),
                    );
                },
                None => {
                    entries.insert(line.to_string(), String::new());
                },
            }
        }
        Self { entries }
    }

    /// Look up a raw value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Insert a key/value pair (used by tests and programmatic construction).
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Number of entries in the mapping.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when the mapping has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

impl FromIterator<(String, String)> for RawProperties {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
