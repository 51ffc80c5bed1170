//! Optional YAML override for the output constants.
//!
//! ```yaml
//! dtd_path: ../../dtd/vtDesign.dtd
//! wavelengths_per_fibre: 80
//! match_strategy: exact
//! ```
//!
//! Fields left out keep their `MatPlanConfig::default()` value.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use s2m_core::MatPlanConfig;
use tracing::info;

const CONFIG_ENV: &str = "S2M_CONFIG";

/// Load the configuration named by `S2M_CONFIG`, or the defaults if unset.
pub fn load_config() -> Result<MatPlanConfig> {
    match config_path() {
        Some(path) => load_config_file(&path),
        None => Ok(MatPlanConfig::default()),
    }
}

pub fn load_config_file(path: &Path) -> Result<MatPlanConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;
    let config: MatPlanConfig = serde_yaml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file at {}", path.display()))?;
    info!(path = %path.display(), "Configuration loaded from disk");
    Ok(config)
}

fn config_path() -> Option<PathBuf> {
    env::var_os(CONFIG_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}
