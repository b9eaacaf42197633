/// Config file loading and creation for the spotrank CLI.
///
/// Config lives at ~/.config/spotrank/config.toml.
/// All fields are optional — CLI args override config values.
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::CliError;

pub const DEFAULT_TITLE_FIELD: &str = "title";

#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SpotrankConfig {
    pub title_field: Option<String>,
    pub limit: Option<usize>,
    pub visible_count: Option<usize>,
    pub zero_based: Option<bool>,
}

const DEFAULT_CONFIG_TEMPLATE: &str = "\
# spotrank configuration
# All values here can be overridden by CLI flags.

# Field used to break score ties when ranking (e.g. \"spotName\", \"name\")
# title_field = \"title\"

# Maximum number of ranked items to show (at most 10)
# limit = 10

# Number of middle page-number buttons in the pagination bar
# visible_count = 10

# Treat --current as a 0-based page index
# zero_based = false
";

/// Returns the default config path: ~/.config/spotrank/config.toml
pub fn config_path() -> Result<PathBuf, CliError> {
    let home = std::env::var_os("HOME").ok_or(CliError::HomeNotSet)?;
    Ok(PathBuf::from(home).join(".config").join("spotrank").join("config.toml"))
}

/// Load config from a file path. Returns default (all None) if file doesn't exist.
pub fn load_config(path: &Path) -> Result<SpotrankConfig, CliError> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            debug!(path = %path.display(), "loaded config file");
            toml::from_str(&content).map_err(|source| CliError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no config file, using defaults");
            Ok(SpotrankConfig::default())
        }
        Err(source) => Err(CliError::ConfigRead {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Write the default config file at `path`. Errors if it already exists.
pub fn create_default_config(path: &Path) -> anyhow::Result<()> {
    use anyhow::Context;

    if path.exists() {
        return Err(CliError::ConfigExists(path.to_path_buf()).into());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }

    std::fs::write(path, DEFAULT_CONFIG_TEMPLATE)
        .with_context(|| format!("failed to write config to {}", path.display()))?;

    Ok(())
}
