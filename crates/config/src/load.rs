//! Properties-file loading.
//!
//! File access is the one fatal boundary in the configuration pipeline: a
//! missing or unreadable file is reported to the caller, while everything
//! downstream of a successful read degrades to defaults.

use crate::props::RawProperties;
use crate::schema::AgentConfig;
use std::io;
use std::path::Path;
use traceprobe_shared::{ErrorClass, ErrorCode, ErrorEnvelope, Result};

/// Read a properties file into a raw key/value mapping.
///
/// Distinguishes a missing file from other I/O failures via the error code
/// (`config:properties_file_not_found` vs `config:properties_file_io`), both
/// carrying the path as metadata.
pub fn load_raw_properties(path: impl AsRef<Path>) -> Result<RawProperties> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|error| file_error(path, &error))?;
    Ok(RawProperties::parse_str(&contents))
}

/// Load, parse, and assemble the full agent configuration from a file.
pub fn load_agent_config(path: impl AsRef<Path>) -> Result<AgentConfig> {
    let path = path.as_ref();
    let properties = load_raw_properties(path)?;
    tracing::info!(path = %path.display(), entries = properties.len(), "loaded properties file");
    Ok(AgentConfig::from_properties(properties))
}

fn file_error(path: &Path, error: &io::Error) -> ErrorEnvelope {
    let path_text = path.display().to_string();
    tracing::warn!(path = %path_text, %error, "failed to read properties file");
    match error.kind() {
        io::ErrorKind::NotFound => ErrorEnvelope::expected(
            ErrorCode::new("config", "properties_file_not_found"),
            format!("properties file not found: {path_text}"),
        )
        .with_metadata("path", path_text),
        _ => ErrorEnvelope::unexpected(
            ErrorCode::new("config", "properties_file_io"),
            format!("failed to read properties file: {error}"),
            ErrorClass::Retriable,
        )
        .with_metadata("path", path_text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reports_not_found_code() -> std::result::Result<(), Box<dyn std::error::Error>>
    {
        let error = load_agent_config("/nonexistent/agent.properties")
            .err()
            .ok_or_else(|| io::Error::other("load should fail for a missing file"))?;
        assert_eq!(error.code.to_string(), "config:properties_file_not_found");
        assert_eq!(
            error.metadata.get("path").map(String::as_str),
            Some("/nonexistent/agent.properties")
        );
        Ok(())
    }

    #[test]
    fn readable_file_loads_and_assembles() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let dir = std::env::temp_dir().join("traceprobe-load-test");
        std::fs::create_dir_all(&dir)?;
        let path = dir.join("agent.properties");
        std::fs::write(&path, "profiler.enable=false\nprofiler.sampling.rate=20\n")?;

        let config = load_agent_config(&path)?;
        assert!(!config.profile_enable);
        assert_eq!(config.sampling_rate, 20);

        std::fs::remove_file(&path)?;
        Ok(())
    }
}
