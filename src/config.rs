//! Configuration file support for sbom-assess.
//!
//! Provides YAML-based configuration through `sbom-assess.config.yml` files,
//! discovered next to the assessment payload or passed with `--config`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;

use crate::application::dto::OutputFormat;
use crate::shared::error::AssessError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "sbom-assess.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    /// Whether the viewer's plan includes assessments
    pub entitled: Option<bool>,
    pub fail_on_failures: Option<bool>,
    pub component_id: Option<String>,
    pub exclude_plugins: Option<Vec<String>>,
    /// Prefix for detail URLs, e.g. `https://sbomify.example`
    pub base_url: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: BTreeMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// The configured output format, already validated on load
    pub fn output_format(&self) -> Option<OutputFormat> {
        self.format
            .as_deref()
            .and_then(|f| OutputFormat::from_str(f).ok())
    }

    pub fn unknown_field_warnings(&self) -> Vec<String> {
        self.unknown_fields
            .keys()
            .map(|key| format!("⚠️  Warning: Unknown config field '{}' will be ignored.", key))
            .collect()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).map_err(|e| AssessError::ConfigError {
        message: format!("Failed to read config file: {} ({})", path.display(), e),
        hint: "Check that the file exists and is readable.".to_string(),
    })?;

    let config: ConfigFile =
        serde_yaml_ng::from_str(&content).map_err(|e| AssessError::ConfigError {
            message: format!("Failed to parse config file: {} ({})", path.display(), e),
            hint: "Ensure the file contains valid YAML syntax.".to_string(),
        })?;

    validate_config(&config)?;
    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.is_file() {
        return Ok(None);
    }

    load_config_from_path(&config_path).map(Some)
}

/// Directory searched for a config file belonging to `payload_path`.
pub fn discovery_dir(payload_path: &Path) -> PathBuf {
    match payload_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(format) = config.format.as_deref() {
        OutputFormat::from_str(format).map_err(|message| AssessError::ConfigError {
            message,
            hint: "Use `format: json` or `format: markdown`.".to_string(),
        })?;
    }

    if let Some(component_id) = config.component_id.as_deref() {
        if component_id.trim().is_empty() {
            return Err(AssessError::ConfigError {
                message: "component_id must not be empty.".to_string(),
                hint: "Remove the field or set it to the component's id.".to_string(),
            }
            .into());
        }
    }

    if let Some(patterns) = &config.exclude_plugins {
        for (i, pattern) in patterns.iter().enumerate() {
            if pattern.trim().is_empty() {
                return Err(AssessError::ConfigError {
                    message: format!("exclude_plugins[{}] must not be empty.", i),
                    hint: "Each entry must be a plugin name or a wildcard pattern (e.g., \"ntia*\")."
                        .to_string(),
                }
                .into());
            }
        }
    }

    if let Some(base_url) = config.base_url.as_deref() {
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(AssessError::ConfigError {
                message: format!("base_url '{}' is not an http(s) URL.", base_url),
                hint: "Use a prefix such as \"https://app.example.com\".".to_string(),
            }
            .into());
        }
    }

    Ok(())
}
