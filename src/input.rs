//! Reading installation records.
//!
//! The discovery script prints a JSON array of
//! `{"path": ..., "version": ..., "packages": [...]}` objects. This module
//! decodes that document from a file or stdin. A source that cannot be read
//! or decoded is treated as reporting no installations.

use std::fmt;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::annotate::RawInstallation;
use crate::diagnostics::DiagnosticLog;
use crate::error::{Result, VsFindError};

/// Where installation records come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// `-` means stdin; anything else is a file path.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Self::Stdin
        } else {
            Self::File(PathBuf::from(arg))
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => write!(f, "<stdin>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Decode a JSON array of installation records.
pub fn parse_installations(content: &str, source_name: &str) -> Result<Vec<RawInstallation>> {
    let value: serde_json::Value =
        serde_json::from_str(content).map_err(|e| VsFindError::InputParseError {
            source_name: source_name.to_string(),
            message: e.to_string(),
        })?;

    if !value.is_array() {
        return Err(VsFindError::InputParseError {
            source_name: source_name.to_string(),
            message: "expected a JSON array of installations".to_string(),
        });
    }

    serde_json::from_value(value).map_err(|e| VsFindError::InputParseError {
        source_name: source_name.to_string(),
        message: e.to_string(),
    })
}

/// Read and decode records from a file.
pub fn read_installations_file(path: &Path) -> Result<Vec<RawInstallation>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_installations(&content, &path.display().to_string())
}

/// Read and decode records from `source`.
pub fn read_installations(source: &InputSource) -> Result<Vec<RawInstallation>> {
    match source {
        InputSource::Stdin => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read installation records from stdin")?;
            parse_installations(&content, "<stdin>")
        }
        InputSource::File(path) => read_installations_file(path),
    }
}

/// Read records, degrading any failure to an empty list.
///
/// The failure is logged so it shows up alongside the selection trail.
pub fn load_or_empty(source: &InputSource, log: &mut DiagnosticLog) -> Vec<RawInstallation> {
    match read_installations(source) {
        Ok(installs) => {
            tracing::debug!(count = installs.len(), source = %source, "read installation records");
            installs
        }
        Err(e) => {
            tracing::debug!(error = %e, "installation records unavailable");
            log.push(format!(
                "could not read installation records from {}, treating as empty",
                source
            ));
            Vec::new()
        }
    }
}
