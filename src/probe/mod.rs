//! Capability probes.
//!
//! An installation is only usable when three independent components are
//! present: the build driver (MSBuild), a VC++ platform toolset and a Windows
//! SDK. Each probe inspects the installation's reported package identifiers;
//! only the build-driver probe additionally checks the filesystem.
//!
//! # Modules
//!
//! - [`build_driver`] - MSBuild location
//! - [`toolset`] - VC++ platform toolset label
//! - [`sdk`] - Windows SDK version
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use vsfind::diagnostics::DiagnosticLog;
//! use vsfind::probe::{probe_capabilities, MockFs};
//! use vsfind::version::ReleaseYear;
//!
//! let packages = vec![
//!     "Microsoft.VisualStudio.VC.MSBuild.Base".to_string(),
//!     "Microsoft.VisualStudio.Component.VC.Tools.x86.x64".to_string(),
//!     "Microsoft.VisualStudio.Component.Windows10SDK.19041".to_string(),
//! ];
//! let mut log = DiagnosticLog::new();
//! let caps = probe_capabilities(
//!     Path::new(r"C:\VS2019"),
//!     &packages,
//!     Some(ReleaseYear::Vs2019),
//!     &MockFs::new(),
//!     &mut log,
//! );
//! assert!(caps.is_complete());
//! assert_eq!(caps.toolset.as_deref(), Some("v142"));
//! assert_eq!(caps.sdk.as_deref(), Some("10.0.19041.0"));
//! assert_eq!(
//!     caps.build_driver.as_deref(),
//!     Some(Path::new(r"C:\VS2019\MSBuild\Current\Bin\MSBuild.exe"))
//! );
//! ```

pub mod build_driver;
pub mod sdk;
pub mod toolset;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::diagnostics::DiagnosticLog;
use crate::version::ReleaseYear;

pub use build_driver::{msbuild_path, probe_build_driver};
pub use sdk::probe_sdk;
pub use toolset::probe_toolset;

/// Filesystem existence check used by the probes.
///
/// Implemented by [`RealFs`] for production and [`MockFs`] for tests.
pub trait PathProbe {
    /// Whether something exists at `path`.
    fn exists(&self, path: &Path) -> bool;
}

/// Checks the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFs;

impl PathProbe for RealFs {
    fn exists(&self, path: &Path) -> bool {
        crate::paths::to_host(path).exists()
    }
}

/// In-memory filesystem that reports only registered paths as existing.
///
/// Also records every path it was asked about.
#[derive(Debug, Default)]
pub struct MockFs {
    present: HashSet<PathBuf>,
    queried: std::cell::RefCell<Vec<PathBuf>>,
}

impl MockFs {
    /// Create a filesystem where nothing exists.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `path` as existing.
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.present.insert(path.into());
        self
    }

    /// Every path queried so far, in order.
    pub fn queried(&self) -> Vec<PathBuf> {
        self.queried.borrow().clone()
    }
}

impl PathProbe for MockFs {
    fn exists(&self, path: &Path) -> bool {
        self.queried.borrow_mut().push(path.to_path_buf());
        self.present.contains(path)
    }
}

/// Result of running every probe against one installation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Capabilities {
    /// Absolute path to `MSBuild.exe`.
    pub build_driver: Option<PathBuf>,
    /// Platform toolset label, e.g. `v143`.
    pub toolset: Option<String>,
    /// Windows SDK version, e.g. `10.0.19041.0` or `8.1`.
    pub sdk: Option<String>,
}

impl Capabilities {
    /// Whether all three capabilities were found.
    pub fn is_complete(&self) -> bool {
        self.build_driver.is_some() && self.toolset.is_some() && self.sdk.is_some()
    }
}

/// Run the build-driver, toolset and SDK probes.
pub fn probe_capabilities(
    install_path: &Path,
    packages: &[String],
    release_year: Option<ReleaseYear>,
    fs: &dyn PathProbe,
    log: &mut DiagnosticLog,
) -> Capabilities {
    Capabilities {
        build_driver: probe_build_driver(install_path, packages, release_year, fs),
        toolset: probe_toolset(packages, release_year, log),
        sdk: probe_sdk(packages),
    }
}

/// Whether `packages` lists `id` exactly.
pub(crate) fn has_package(packages: &[String], id: &str) -> bool {
    packages.iter().any(|p| p == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pkgs(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn has_package_requires_exact_match() {
        let packages = pkgs(&["Microsoft.VisualStudio.WDExpress"]);
        assert!(has_package(&packages, "Microsoft.VisualStudio.WDExpress"));
        assert!(!has_package(&packages, "Microsoft.VisualStudio.WDExpres"));
        assert!(!has_package(&packages, "microsoft.visualstudio.wdexpress"));
    }

    #[test]
    fn real_fs_reports_existing_files() {
        let temp = tempfile::TempDir::new().unwrap();
        let file = temp.path().join("MSBuild.exe");
        std::fs::write(&file, "").unwrap();

        assert!(RealFs.exists(&file));
        assert!(!RealFs.exists(&temp.path().join("missing.exe")));
    }

    #[test]
    fn mock_fs_records_queries() {
        let fs = MockFs::new().with_file("/present");
        assert!(fs.exists(Path::new("/present")));
        assert!(!fs.exists(Path::new("/absent")));
        assert_eq!(
            fs.queried(),
            vec![PathBuf::from("/present"), PathBuf::from("/absent")]
        );
    }

    #[test]
    fn capabilities_complete_only_with_all_three() {
        let mut caps = Capabilities {
            build_driver: Some(PathBuf::from("/vs/MSBuild.exe")),
            toolset: Some("v142".into()),
            sdk: Some("8.1".into()),
        };
        assert!(caps.is_complete());

        caps.sdk = None;
        assert!(!caps.is_complete());
    }

    #[test]
    fn probe_capabilities_with_no_packages_finds_nothing() {
        let mut log = DiagnosticLog::new();
        let caps = probe_capabilities(
            Path::new("/vs"),
            &[],
            Some(ReleaseYear::Vs2022),
            &MockFs::new(),
            &mut log,
        );
        assert_eq!(caps, Capabilities::default());
        assert!(log.is_empty());
    }
}
