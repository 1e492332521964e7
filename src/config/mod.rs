//! Configuration loading for vsfind.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Layering in [`merger`]
//!
//! # Example
//!
//! ```
//! use vsfind::config::load_merged_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".vsfind");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("config.yml"), "selection:\n  env_var: MY_VC_DIR\n").unwrap();
//!
//! let config = load_merged_config(temp.path()).unwrap();
//! assert_eq!(config.selection.env_var, "MY_VC_DIR");
//! ```
//!
//! # Configuration File Locations
//!
//! 1. User global config (`~/.vsfind/config.yml`)
//! 2. Project config (`.vsfind/config.yml`)

pub mod loader;
pub mod merger;
pub mod schema;

pub use loader::{
    config_path_in, load_config_file, load_config_value, load_from_paths, load_merged_config,
    parse_config, ConfigPaths,
};
pub use merger::{deep_merge, merge_configs};
pub use schema::{OutputMode, SelectionConfig, Settings, VsFindConfig};
