//! Configuration file discovery and loading.
//!
//! This module handles finding and loading configuration files from
//! various locations in the correct priority order.

use crate::config::merger::merge_configs;
use crate::config::schema::VsFindConfig;
use crate::error::{Result, VsFindError};
use std::fs;
use std::path::{Path, PathBuf};

/// Paths to configuration files in priority order (later overrides earlier).
///
/// Merge order:
/// 1. User global config (`~/.vsfind/config.yml`)
/// 2. Project config (`.vsfind/config.yml`)
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    /// User's global config: ~/.vsfind/config.yml
    pub user_global: Option<PathBuf>,

    /// Project config: .vsfind/config.yml
    pub project: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self {
            user_global: dirs::home_dir().and_then(|home| existing(config_path_in(&home))),
            project: existing(config_path_in(project_root)),
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.user_global.iter().chain(self.project.iter()).collect()
    }
}

/// `<dir>/.vsfind/config.yml`
pub fn config_path_in(dir: &Path) -> PathBuf {
    dir.join(".vsfind").join("config.yml")
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    path.is_file().then_some(path)
}

/// Parse YAML content into a config.
pub fn parse_config(content: &str, source_path: &Path) -> Result<VsFindConfig> {
    serde_yaml::from_str(content).map_err(|e| VsFindError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<VsFindConfig> {
    let value = load_config_value(path)?;
    from_value(value, path)
}

/// Load a config file as a raw YAML value, for merging.
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            VsFindError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            VsFindError::Io(e)
        }
    })?;

    // An empty file is an empty config.
    if content.trim().is_empty() {
        return Ok(serde_yaml::Value::Mapping(Default::default()));
    }

    serde_yaml::from_str(&content).map_err(|e| VsFindError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load and merge the global and project configs.
///
/// Missing files are skipped; with no files at all the defaults apply.
pub fn load_merged_config(project_root: &Path) -> Result<VsFindConfig> {
    load_from_paths(&ConfigPaths::discover(project_root))
}

/// Load and merge the configs at `paths`.
pub fn load_from_paths(paths: &ConfigPaths) -> Result<VsFindConfig> {
    let existing = paths.all_existing();
    let layers = existing
        .iter()
        .map(|p| load_config_value(p))
        .collect::<Result<Vec<_>>>()?;

    for path in &existing {
        tracing::debug!(path = %path.display(), "loaded config layer");
    }

    let source = existing
        .last()
        .map(|p| p.to_path_buf())
        .unwrap_or_default();
    from_value(merge_configs(&layers), &source)
}

fn from_value(value: serde_yaml::Value, source_path: &Path) -> Result<VsFindConfig> {
    serde_yaml::from_value(value).map_err(|e| VsFindError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
