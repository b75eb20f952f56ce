//! Value resolvers: identity passthrough and `${...}` placeholder substitution.

use crate::props::RawProperties;

/// Resolves a raw string value against the full property mapping.
pub trait ValueResolver {
    /// Resolve `value` using `properties` as the lookup source.
    fn resolve(&self, value: &str, properties: &RawProperties) -> String;
}

/// Identity resolver: returns the raw value unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct BypassResolver;

impl ValueResolver for BypassResolver {
    fn resolve(&self, value: &str, _properties: &RawProperties) -> String {
        value.to_string()
    }
}

/// Placeholder resolver: substitutes `${name}` markers from the mapping.
///
/// Substituted values are themselves resolved recursively. A reference whose
/// name is absent from the mapping, or that resolves to itself (directly or
/// transitively), is left verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderResolver;

impl ValueResolver for PlaceholderResolver {
    fn resolve(&self, value: &str, properties: &RawProperties) -> String {
        replace_placeholders(value, properties)
    }
}

/// Replace every `${name}` marker in `value` with the mapped value of `name`.
#[must_use]
pub fn replace_placeholders(value: &str, properties: &RawProperties) -> String {
    let mut active = Vec::new();
    replace_inner(value, properties, &mut active)
}

// `active` holds the chain of names currently being expanded; a name already
// on the chain marks a cycle and stays verbatim.
fn replace_inner(value: &str, properties: &RawProperties, active: &mut Vec<String>) -> String {
    let mut output = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(start) = rest.find("${") {
        output.push_str(&rest[..start]);
        let after_marker = &rest[start + 2..];
        let Some(end) = after_marker.find('}') else {
            // Unterminated marker: keep the tail as-is.
            output.push_str(&rest[start..]);
            return output;
        };
        let name = &after_marker[..end];
        match properties.get(name) {
            Some(replacement) if !active.iter().any(|seen| seen == name) => {
                active.push(name.to_string());
                let resolved = replace_inner(replacement, properties, active);
                active.pop();
                output.push_str(&resolved);
            },
            _ => {
                output.push_str("${");
                output.push_str(name);
                output.push('}');
            },
        }
        rest = &after_marker[end + 1..];
    }
    output.push_str(rest);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(pairs: &[(&str, &str)]) -> RawProperties {
        pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect()
    }

    #[test]
    fn bypass_returns_value_unchanged() {
        let properties = props(&[("ip", "10.0.0.1")]);
        assert_eq!(
            BypassResolver.resolve("${ip}", &properties),
            "${ip}".to_string()
        );
    }

    #[test]
    fn plain_values_are_idempotent() {
        let properties = props(&[("ip", "10.0.0.1")]);
        assert_eq!(replace_placeholders("10.0.0.1", &properties), "10.0.0.1");
    }

    #[test]
    fn substitutes_a_single_marker() {
        let properties = props(&[("collector.host", "collector.internal")]);
        assert_eq!(
            replace_placeholders("${collector.host}", &properties),
            "collector.internal"
        );
    }

    #[test]
    fn substitutes_markers_embedded_in_text() {
        let properties = props(&[("host", "collector"), ("domain", "internal")]);
        assert_eq!(
            replace_placeholders("${host}.${domain}:9996", &properties),
            "collector.internal:9996"
        );
    }

    #[test]
    fn substitutes_nested_references() {
        let properties = props(&[("a", "${b}"), ("b", "x")]);
        assert_eq!(replace_placeholders("${a}", &properties), "x");
    }

    #[test]
    fn unresolvable_reference_stays_verbatim() {
        let properties = props(&[]);
        assert_eq!(replace_placeholders("${missing}", &properties), "${missing}");
    }

    #[test]
    fn self_referencing_key_terminates() {
        let properties = props(&[("a", "${a}")]);
        assert_eq!(replace_placeholders("${a}", &properties), "${a}");
    }

    #[test]
    fn transitive_cycle_terminates() {
        let properties = props(&[("a", "${b}"), ("b", "${a}")]);
        assert_eq!(replace_placeholders("${a}", &properties), "${a}");
    }

    #[test]
    fn unterminated_marker_is_kept() {
        let properties = props(&[("a", "x")]);
        assert_eq!(replace_placeholders("${a", &properties), "${a");
    }

    #[test]
    fn same_name_may_repeat_outside_a_cycle() {
        let properties = props(&[("a", "x")]);
        assert_eq!(replace_placeholders("${a}-${a}", &properties), "x-x");
    }
}
