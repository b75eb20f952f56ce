//! # traceprobe-config
//!
//! Configuration layer for the traceprobe instrumentation agent.
//!
//! The pipeline runs in four stages:
//!
//! 1. **Load** - read an `agent.properties` file into a raw string mapping
//!    ([`load`]); file access is the only fatal boundary.
//! 2. **Resolve** - expand `${name}` placeholders against the same mapping
//!    ([`resolver`]).
//! 3. **Coerce** - typed, never-failing reads with per-field defaults
//!    ([`reader`]).
//! 4. **Assemble** - one linear pass producing the full typed schema
//!    ([`schema`]), including compiled request filters ([`filter`]).
//!
//! ## Design Principles
//!
//! 1. **Startup must not abort on bad values** - every field read silently
//!    degrades to its default; only file access can fail.
//! 2. **Read-only after construction** - the assembled config is shared
//!    freely across threads, with two runtime-detection cells as the only
//!    mutable exception.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod filter;
pub mod load;
pub mod props;
pub mod reader;
pub mod resolver;
pub mod schema;

pub use filter::StringFilter;
pub use load::{load_agent_config, load_raw_properties};
pub use props::RawProperties;
pub use reader::PropertyReader;
pub use resolver::{BypassResolver, PlaceholderResolver, ValueResolver};
pub use schema::{AgentConfig, DumpType, DEFAULT_IP};

/// Returns the config crate version.
#[must_use]
pub const fn config_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    #[test]
    fn config_crate_version_is_set() {
        assert!(!super::config_crate_version().is_empty());
    }

    #[test]
    fn public_surface_composes() {
        let config = super::AgentConfig::from_properties(super::RawProperties::new());
        assert!(config.tomcat_exclude_url_filter.is_skip());
    }
}
