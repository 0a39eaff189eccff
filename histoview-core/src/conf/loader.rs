use crate::conf::{ConfigError, HistoviewConfig};
use std::fs;
use std::path::Path;

pub fn load_config(path: &Path) -> Result<HistoviewConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;

    let config: HistoviewConfig =
        toml::from_str(&contents).map_err(|e| ConfigError::parse(path, e))?;

    config.validate()?;

    tracing::debug!(
        path = %path.display(),
        max_buckets = config.view.max_buckets,
        hide_delay_ms = config.view.hide_delay_ms,
        "loaded config"
    );

    Ok(config)
}

/// Defaults when no path is given; a given path must load.
pub fn load_config_or_default(path: Option<&Path>) -> Result<HistoviewConfig, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => Ok(HistoviewConfig::default()),
    }
}
