use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::config::defs::ConverterConfig;

pub const CONFIG_FILE_NAME: &str = "rotary-ijk.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid {axis} limits: min {min} must be finite and not above max {max}")]
    InvalidLimits { axis: &'static str, min: f64, max: f64 },
}

pub fn load_config(path: &Path) -> Result<ConverterConfig, ConfigError> {
    let text = fs::read_to_string(path)?;
    let config = parse_config(&text)?;
    info!(path = %path.display(), policy = config.policy.as_str(), "loaded converter config");
    Ok(config)
}

pub fn parse_config(text: &str) -> Result<ConverterConfig, ConfigError> {
    let config: ConverterConfig = toml::from_str(text)?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &ConverterConfig) -> Result<(), ConfigError> {
    for (axis, limits) in [("A", config.limits.a), ("B", config.limits.b)] {
        if !limits.is_valid() {
            return Err(ConfigError::InvalidLimits {
                axis,
                min: limits.min,
                max: limits.max,
            });
        }
    }
    Ok(())
}

/// Explicit path, else the first `rotary-ijk.toml` found, else built-in defaults.
pub fn resolve_config(explicit: Option<&Path>) -> Result<ConverterConfig, ConfigError> {
    if let Some(path) = explicit {
        return load_config(path);
    }
    match default_config_path() {
        Some(path) => load_config(&path),
        None => {
            debug!("no config file found, using built-in limits");
            Ok(ConverterConfig::default())
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    let relative = PathBuf::from(CONFIG_FILE_NAME);
    if relative.is_file() {
        return Some(relative);
    }

    if let Ok(exe) = std::env::current_exe()
        && let Some(dir) = exe.parent()
    {
        let sibling = dir.join(CONFIG_FILE_NAME);
        if sibling.is_file() {
            return Some(sibling);
        }
    }

    None
}

#[cfg(test)]
#[path = "../../tests/src_inline/config/loader.rs"]
mod tests;
