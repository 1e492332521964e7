//! Configuration schema definitions for vsfind.
//!
//! This module contains the struct definitions that map to the YAML
//! configuration file format.
//!
//! ```yaml
//! settings:
//!   default_output: quiet
//! selection:
//!   env_var: VCINSTALLDIR
//!   ignore_environment: false
//!   input: build/vs-installs.json
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::environment::DEFAULT_ENV_VAR;

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VsFindConfig {
    /// Global settings
    pub settings: Settings,

    /// Selection behaviour
    pub selection: SelectionConfig,
}

/// Presentation settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Default output mode: verbose, normal, quiet, silent
    pub default_output: OutputMode,
}

/// Settings that shape a selection run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Environment variable that pins the installation (points at `<install>\VC\`)
    pub env_var: String,

    /// Never pin to the environment, even inside a Developer Command Prompt
    #[serde(skip_serializing_if = "is_false")]
    pub ignore_environment: bool,

    /// Default installation records file (`-` for stdin)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<PathBuf>,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            env_var: DEFAULT_ENV_VAR.to_string(),
            ignore_environment: false,
            input: None,
        }
    }
}

fn is_false(v: &bool) -> bool {
    !*v
}

/// Output verbosity mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Verbose,
    #[default]
    Normal,
    Quiet,
    Silent,
}
