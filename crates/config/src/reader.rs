//! Typed property reads with default-on-missing / default-on-malformed policy.
//!
//! Every read degrades to the caller-supplied default instead of failing:
//! a corrupt single setting must never prevent the agent from starting. The
//! coercion functions at the bottom are pure; the reader adds the mapping
//! lookup and the per-read info log record.

use crate::props::RawProperties;
use crate::resolver::{BypassResolver, ValueResolver};
use crate::schema::DumpType;

/// Reads named keys out of a raw mapping and coerces them to typed values.
#[derive(Debug, Clone, Copy)]
pub struct PropertyReader<'a> {
    properties: &'a RawProperties,
}

impl<'a> PropertyReader<'a> {
    /// Create a reader over the given mapping.
    #[must_use]
    pub const fn new(properties: &'a RawProperties) -> Self {
        Self { properties }
    }

    /// Read a string value, falling back to `default` when the key is absent.
    pub fn read_string(&self, key: &str, default: &str) -> String {
        self.read_string_with(key, default, &BypassResolver)
    }

    /// Read a string value and pass it through the supplied resolver.
    pub fn read_string_with(
        &self,
        key: &str,
        default: &str,
        resolver: &dyn ValueResolver,
    ) -> String {
        let raw = self.properties.get(key).unwrap_or(default);
        let value = resolver.resolve(raw, self.properties);
        tracing::info!("{key}={value}");
        value
    }

    /// Read an optional string value; absent keys stay absent.
    pub fn read_opt_string(&self, key: &str) -> Option<String> {
        let value = self.properties.get(key).map(str::to_string);
        match value.as_deref() {
            Some(resolved) => tracing::info!("{key}={resolved}"),
            None => tracing::info!("{key}="),
        }
        value
    }

    /// Read a base-10 `i32`; missing or malformed input yields `default`.
    pub fn read_int(&self, key: &str, default: i32) -> i32 {
        let value = parse_int_or(self.properties.get(key), default);
        tracing::info!("{key}={value}");
        value
    }

    /// Read a base-10 `i64`; missing or malformed input yields `default`.
    pub fn read_long(&self, key: &str, default: i64) -> i64 {
        let value = parse_long_or(self.properties.get(key), default);
        tracing::info!("{key}={value}");
        value
    }

    /// Read a boolean: case-insensitive `"true"` is true, anything else
    /// (including malformed text) is false. Missing keys use `default`.
    pub fn read_bool(&self, key: &str, default: bool) -> bool {
        let value = match self.properties.get(key) {
            Some(raw) => parse_bool_str(raw),
            None => default,
        };
        tracing::info!("{key}={value}");
        value
    }

    /// Read a dump strategy; unmatched values fall back to `default`.
    pub fn read_dump_type(&self, key: &str, default: DumpType) -> DumpType {
        let value = match self.properties.get(key) {
            Some(raw) => parse_dump_type(raw).unwrap_or(default),
            None => default,
        };
        tracing::info!("{key}={value}");
        value
    }

    /// Read a comma-separated list; absent keys yield an empty sequence.
    ///
    /// The raw value is trimmed as a whole and split on literal commas:
    /// order is preserved, elements are not trimmed or deduplicated, and
    /// embedded commas cannot be escaped. Trailing empty elements are
    /// dropped, but an empty raw value still yields `[""]`.
    pub fn read_list(&self, key: &str) -> Vec<String> {
        let value = match self.properties.get(key) {
            Some(raw) => split_list(raw),
            None => Vec::new(),
        };
        tracing::info!("{key}={value:?}");
        value
    }
}

/// Parse a base-10 `i32`, using `default` for missing or malformed input.
#[must_use]
pub fn parse_int_or(raw: Option<&str>, default: i32) -> i32 {
    raw.and_then(|value| value.parse().ok()).unwrap_or(default)
}

/// Parse a base-10 `i64`, using `default` for missing or malformed input.
#[must_use]
pub fn parse_long_or(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|value| value.parse().ok()).unwrap_or(default)
}

/// Standard boolean-from-string semantics: only `"true"` (any casing) is true.
#[must_use]
pub fn parse_bool_str(raw: &str) -> bool {
    raw.eq_ignore_ascii_case("true")
}

/// Match a dump strategy name case-insensitively against enum member names.
#[must_use]
pub fn parse_dump_type(raw: &str) -> Option<DumpType> {
    match raw.to_ascii_uppercase().as_str() {
        "ALWAYS" => Some(DumpType::Always),
        "EXCEPTION" => Some(DumpType::Exception),
        _ => None,
    }
}

/// Trim the raw value as a whole and split it on literal commas.
///
/// Interior empty elements survive; trailing empty elements are dropped, so
/// `"a,b,"` yields `["a", "b"]` and `","` yields nothing. The empty string
/// stays a single empty element.
#[must_use]
pub fn split_list(raw: &str) -> Vec<String> {
    let mut elements: Vec<String> = raw.trim().split(',').map(str::to_string).collect();
    if elements.len() > 1 {
        while elements.last().is_some_and(String::is_empty) {
            elements.pop();
        }
    }
    elements
}
