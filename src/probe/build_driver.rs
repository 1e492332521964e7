//! MSBuild location probe.

use std::path::{Path, PathBuf};

use super::{has_package, PathProbe};
use crate::paths;
use crate::version::ReleaseYear;

/// Package that marks the VC++ MSBuild integration as installed.
pub const MSBUILD_PACKAGE: &str = "Microsoft.VisualStudio.VC.MSBuild.Base";

/// `<install>\MSBuild\<subdir>\Bin\MSBuild.exe`
pub fn msbuild_path(install_path: &Path, subdir: &str) -> PathBuf {
    paths::join(install_path, &["MSBuild", subdir, "Bin", "MSBuild.exe"])
}

/// Locate `MSBuild.exe` for an installation.
///
/// With the package marker present, 2017 installs use the versioned `15.0`
/// directory and 2019 installs use `Current`. Any install, marker or not,
/// falls back to `Current` when that file exists on disk: 2022 ships MSBuild
/// without listing the marker.
pub fn probe_build_driver(
    install_path: &Path,
    packages: &[String],
    release_year: Option<ReleaseYear>,
    fs: &dyn PathProbe,
) -> Option<PathBuf> {
    let current = msbuild_path(install_path, "Current");

    if has_package(packages, MSBUILD_PACKAGE) {
        tracing::debug!("- found VC.MSBuild.Base");
        match release_year {
            Some(ReleaseYear::Vs2017) => return Some(msbuild_path(install_path, "15.0")),
            Some(ReleaseYear::Vs2019) => return Some(current),
            _ => {}
        }
    }

    if fs.exists(&current) {
        tracing::debug!(path = %current.display(), "- found MSBuild on disk");
        return Some(current);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::{MockFs, RealFs};

    fn marker() -> Vec<String> {
        vec![MSBUILD_PACKAGE.to_string()]
    }

    #[test]
    fn vs2017_with_marker_uses_versioned_dir() {
        let fs = MockFs::new();
        let result = probe_build_driver(
            Path::new("/vs2017"),
            &marker(),
            Some(ReleaseYear::Vs2017),
            &fs,
        );
        assert_eq!(result, Some(msbuild_path(Path::new("/vs2017"), "15.0")));
        assert!(fs.queried().is_empty());
    }

    #[test]
    fn vs2019_with_marker_uses_current_without_disk_check() {
        let fs = MockFs::new();
        let result = probe_build_driver(
            Path::new("/vs2019"),
            &marker(),
            Some(ReleaseYear::Vs2019),
            &fs,
        );
        assert_eq!(result, Some(msbuild_path(Path::new("/vs2019"), "Current")));
        assert!(fs.queried().is_empty());
    }

    #[test]
    fn vs2022_marker_falls_through_to_disk() {
        let install = Path::new("/vs2022");
        let fs = MockFs::new();
        let result = probe_build_driver(install, &marker(), Some(ReleaseYear::Vs2022), &fs);
        assert!(result.is_none());
        assert_eq!(fs.queried(), vec![msbuild_path(install, "Current")]);
    }

    #[test]
    fn missing_marker_uses_current_when_on_disk() {
        let install = Path::new("/vs2022");
        let fs = MockFs::new().with_file(msbuild_path(install, "Current"));
        let result = probe_build_driver(install, &[], Some(ReleaseYear::Vs2022), &fs);
        assert_eq!(result, Some(msbuild_path(install, "Current")));
    }

    #[test]
    fn missing_marker_and_file_is_absent() {
        let result = probe_build_driver(
            Path::new("/vs2019"),
            &[],
            Some(ReleaseYear::Vs2019),
            &MockFs::new(),
        );
        assert!(result.is_none());
    }

    #[test]
    fn unknown_year_still_probes_disk() {
        let install = Path::new("/vs-next");
        let fs = MockFs::new().with_file(msbuild_path(install, "Current"));
        let result = probe_build_driver(install, &marker(), None, &fs);
        assert_eq!(result, Some(msbuild_path(install, "Current")));
    }

    #[test]
    fn real_filesystem_fallback() {
        let temp = tempfile::TempDir::new().unwrap();
        let bin = temp.path().join("MSBuild").join("Current").join("Bin");
        std::fs::create_dir_all(&bin).unwrap();
        std::fs::write(bin.join("MSBuild.exe"), "").unwrap();

        let install = paths::resolve(temp.path());
        let result = probe_build_driver(&install, &[], Some(ReleaseYear::Vs2022), &RealFs);
        assert_eq!(result, Some(msbuild_path(&install, "Current")));
    }

    #[test]
    fn windows_install_path_uses_backslashes() {
        let fs = MockFs::new();
        let result = probe_build_driver(
            Path::new(r"C:\VS16"),
            &marker(),
            Some(ReleaseYear::Vs2019),
            &fs,
        );
        assert_eq!(
            result,
            Some(PathBuf::from(r"C:\VS16\MSBuild\Current\Bin\MSBuild.exe"))
        );
    }
}
