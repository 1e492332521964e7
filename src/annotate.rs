//! Installation records and their annotated form.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::diagnostics::DiagnosticLog;
use crate::paths;
use crate::probe::{probe_capabilities, PathProbe};
use crate::version::{normalize, ReleaseYear};

/// One installation as reported by the discovery script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInstallation {
    /// Installation root, possibly relative or unnormalized.
    pub path: String,
    /// Free-form product version, e.g. `17.4.33213.308`.
    pub version: String,
    /// Installed package and component identifiers.
    #[serde(default)]
    pub packages: Vec<String>,
}

impl RawInstallation {
    pub fn new(path: impl Into<String>, version: impl Into<String>, packages: Vec<String>) -> Self {
        Self {
            path: path.into(),
            version: version.into(),
            packages,
        }
    }
}

/// An installation with its version decoded and capabilities probed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    /// Absolute, normalized installation root.
    pub path: PathBuf,
    pub version: String,
    pub major: Option<u64>,
    pub minor: Option<u64>,
    pub release_year: Option<ReleaseYear>,
    pub build_driver: Option<PathBuf>,
    pub toolset: Option<String>,
    pub sdk: Option<String>,
}

impl Candidate {
    /// Known release year plus build driver, toolset and SDK.
    pub fn is_qualified(&self) -> bool {
        self.release_year.is_some()
            && self.build_driver.is_some()
            && self.toolset.is_some()
            && self.sdk.is_some()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Decode and probe a single installation record.
///
/// Always yields a candidate, even for unparseable versions; filtering is
/// the selector's job.
pub fn annotate(raw: &RawInstallation, fs: &dyn PathProbe, log: &mut DiagnosticLog) -> Candidate {
    tracing::debug!(path = %raw.path, "processing installation");

    let path = paths::resolve(&raw.path);
    let version = normalize(&raw.version, log);
    let release_year = version.and_then(|v| v.release_year);
    let caps = probe_capabilities(&path, &raw.packages, release_year, fs, log);

    Candidate {
        version: raw.version.clone(),
        major: version.map(|v| v.major),
        minor: version.map(|v| v.minor),
        release_year,
        build_driver: caps.build_driver,
        toolset: caps.toolset,
        sdk: caps.sdk,
        path,
    }
}
