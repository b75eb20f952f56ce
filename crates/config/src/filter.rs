//! String filters compiled from raw specification strings.
//!
//! Every optional filter in the schema follows the same convention: an empty
//! spec installs [`StringFilter::Skip`], a non-empty spec compiles into a
//! pattern-based variant. `Skip` matches nothing, so every candidate passes
//! through unfiltered.

use std::fmt;

/// Boolean test over strings used to include/exclude instrumentation targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StringFilter {
    /// Matches nothing; the filter is disabled.
    Skip,
    /// Request-path patterns for URL exclusion.
    UrlPatterns(Vec<UrlPattern>),
    /// Fully-qualified class names and package prefixes for class inclusion.
    ClassNames(Vec<ClassPattern>),
}

/// One compiled URL pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlPattern {
    /// Matches the request path exactly.
    Exact(String),
    /// A spec entry ending in `/*`; matches any path under the prefix.
    Prefix(String),
}

/// One compiled class-name pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassPattern {
    /// Matches the fully-qualified class name exactly.
    Exact(String),
    /// A spec entry ending in `.*`; matches any class under the package.
    Package(String),
}

impl StringFilter {
    /// Compile a URL-exclusion filter from a non-empty comma-separated spec.
    ///
    /// Entries ending in `/*` prefix-match; other entries match exactly.
    /// Blank entries are ignored.
    #[must_use]
    pub fn url_patterns(spec: &str) -> Self {
        let patterns = spec
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| match entry.strip_suffix("/*") {
                Some(prefix) => UrlPattern::Prefix(prefix.to_string()),
                None => UrlPattern::Exact(entry.to_string()),
            })
            .collect();
        Self::UrlPatterns(patterns)
    }

    /// Compile a class-inclusion filter from a non-empty comma-separated spec.
    ///
    /// Entries ending in `.*` match every class in the package prefix; other
    /// entries match the fully-qualified class name exactly. Blank entries
    /// are ignored.
    #[must_use]
    pub fn class_names(spec: &str) -> Self {
        let patterns = spec
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| match entry.strip_suffix(".*") {
                Some(package) => ClassPattern::Package(format!("{package}.")),
                None => ClassPattern::Exact(entry.to_string()),
            })
            .collect();
        Self::ClassNames(patterns)
    }

    /// Test a candidate string against the filter.
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            Self::Skip => false,
            Self::UrlPatterns(patterns) => patterns.iter().any(|pattern| match pattern {
                UrlPattern::Exact(path) => candidate == path,
                UrlPattern::Prefix(prefix) => candidate.starts_with(prefix),
            }),
            Self::ClassNames(patterns) => patterns.iter().any(|pattern| match pattern {
                ClassPattern::Exact(name) => candidate == name,
                ClassPattern::Package(prefix) => candidate.starts_with(prefix),
            }),
        }
    }

    /// Returns true when the filter is the disabled variant.
    #[must_use]
    pub const fn is_skip(&self) -> bool {
        matches!(self, Self::Skip)
    }
}

impl fmt::Display for StringFilter {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Skip => formatter.write_str("skip"),
            Self::UrlPatterns(patterns) => write!(formatter, "url-patterns({})", patterns.len()),
            Self::ClassNames(patterns) => write!(formatter, "class-names({})", patterns.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skip_matches_nothing() {
        let filter = StringFilter::Skip;
        assert!(!filter.matches("/healthcheck.html"));
        assert!(!filter.matches(""));
        assert!(filter.is_skip());
    }

    #[test]
    fn url_exact_pattern_matches_only_that_path() {
        let filter = StringFilter::url_patterns("/monitor/l7check.html");
        assert!(filter.matches("/monitor/l7check.html"));
        assert!(!filter.matches("/monitor/other.html"));
    }

    #[test]
    fn url_wildcard_pattern_prefix_matches() {
        let filter = StringFilter::url_patterns("/static/*");
        assert!(filter.matches("/static/css/site.css"));
        assert!(filter.matches("/static/"));
        assert!(!filter.matches("/api/users"));
    }

    #[test]
    fn url_spec_accepts_multiple_entries() {
        let filter = StringFilter::url_patterns("/healthcheck.html, /static/*");
        assert!(filter.matches("/healthcheck.html"));
        assert!(filter.matches("/static/app.js"));
        assert!(!filter.matches("/index.html"));
    }

    #[test]
    fn class_exact_pattern_matches_fully_qualified_name() {
        let filter = StringFilter::class_names("com.example.service.OrderService");
        assert!(filter.matches("com.example.service.OrderService"));
        assert!(!filter.matches("com.example.service.OrderServiceImpl"));
    }

    #[test]
    fn class_package_pattern_matches_subpackages() {
        let filter = StringFilter::class_names("com.example.service.*");
        assert!(filter.matches("com.example.service.OrderService"));
        assert!(filter.matches("com.example.service.internal.Cache"));
        assert!(!filter.matches("com.example.web.Controller"));
        // The prefix includes the trailing dot, so the bare package is not a class match.
        assert!(!filter.matches("com.example.servicex.Other"));
    }

    #[test]
    fn blank_entries_are_ignored() {
        let filter = StringFilter::url_patterns("/a, ,/b");
        assert_eq!(
            filter,
            StringFilter::UrlPatterns(vec![
                UrlPattern::Exact("/a".to_string()),
                UrlPattern::Exact("/b".to_string()),
            ])
        );
    }
}
