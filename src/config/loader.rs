// src/config/loader.rs
use std::fs;
use std::path::Path;

use crate::config::models::InstallerConfig;
use crate::utils::error::ConfigError;

/// Reads and parses the installer config at `path`.
///
/// The whole document is loaded into memory here, before the caller opens
/// any output file, so a failure leaves the output tree untouched.
pub fn load_config(path: &Path) -> Result<InstallerConfig, ConfigError> {
    let raw = fs::read_to_string(path)?;
    let config = parse_config(&raw)?;
    tracing::debug!("Parsed config from {}", path.display());
    Ok(config)
}

/// Parses a config document from an in-memory string.
pub fn parse_config(raw: &str) -> Result<InstallerConfig, ConfigError> {
    Ok(serde_yml::from_str(raw)?)
}
