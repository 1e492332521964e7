//! Windows SDK probe.
//!
//! Windows 10/11 SDK components are named
//! `Microsoft.VisualStudio.Component.Windows10SDK.<build>[.<variant>]`. Only
//! desktop variants count; the highest build number wins. Installs without
//! any Windows 10 SDK may still carry the legacy 8.1 SDK.

use super::has_package;

/// Prefix shared by all Windows 10 SDK components.
pub const WIN10_SDK_PREFIX: &str = "Microsoft.VisualStudio.Component.Windows10SDK.";

/// Legacy Windows 8.1 SDK component.
pub const WIN81_SDK_PACKAGE: &str = "Microsoft.VisualStudio.Component.Windows81SDK";

/// SDK version string for an installation, e.g. `10.0.19041.0` or `8.1`.
pub fn probe_sdk(packages: &[String]) -> Option<String> {
    let newest = packages
        .iter()
        .filter_map(|pkg| win10_sdk_build(pkg))
        .max();

    if let Some(build) = newest {
        return Some(format!("10.0.{}.0", build));
    }

    if has_package(packages, WIN81_SDK_PACKAGE) {
        tracing::debug!("- found Win8SDK");
        return Some("8.1".to_string());
    }

    None
}

/// Build number of a desktop Windows 10 SDK component, if `pkg` is one.
fn win10_sdk_build(pkg: &str) -> Option<u64> {
    if !pkg.starts_with(WIN10_SDK_PREFIX) {
        return None;
    }

    let parts: Vec<&str> = pkg.split('.').collect();
    if parts.len() > 5 && parts[5] != "Desktop" {
        tracing::debug!(package = pkg, "- ignoring non-Desktop Win10SDK");
        return None;
    }

    match parts.get(4).and_then(|p| leading_integer(p)) {
        Some(build) => {
            tracing::debug!(build, "- found Win10SDK");
            Some(build)
        }
        None => {
            // e.g. Microsoft.VisualStudio.Component.Windows10SDK.IpOverUsb
            tracing::debug!(package = pkg, "- failed to parse Win10SDK number");
            None
        }
    }
}

/// Parse the leading ASCII digits of `s`, ignoring whatever follows.
fn leading_integer(s: &str) -> Option<u64> {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pkgs(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn single_sdk() {
        let packages = pkgs(&["Microsoft.VisualStudio.Component.Windows10SDK.19041"]);
        assert_eq!(probe_sdk(&packages).as_deref(), Some("10.0.19041.0"));
    }

    #[test]
    fn desktop_variant_counts() {
        let packages = pkgs(&["Microsoft.VisualStudio.Component.Windows10SDK.17763.Desktop"]);
        assert_eq!(probe_sdk(&packages).as_deref(), Some("10.0.17763.0"));
    }

    #[test]
    fn highest_build_wins_regardless_of_order() {
        let packages = pkgs(&[
            "Microsoft.VisualStudio.Component.Windows10SDK.18362",
            "Microsoft.VisualStudio.Component.Windows10SDK.22621",
            "Microsoft.VisualStudio.Component.Windows10SDK.19041",
        ]);
        assert_eq!(probe_sdk(&packages).as_deref(), Some("10.0.22621.0"));
    }

    #[test]
    fn non_desktop_variants_are_ignored() {
        let packages = pkgs(&[
            "Microsoft.VisualStudio.Component.Windows10SDK.17134",
            "Microsoft.VisualStudio.Component.Windows10SDK.22000.UWP",
            "Microsoft.VisualStudio.Component.Windows10SDK.22621.IoT",
        ]);
        assert_eq!(probe_sdk(&packages).as_deref(), Some("10.0.17134.0"));
    }

    #[test]
    fn unparseable_build_is_skipped() {
        let packages = pkgs(&["Microsoft.VisualStudio.Component.Windows10SDK.IpOverUsb"]);
        assert!(probe_sdk(&packages).is_none());
    }

    #[test]
    fn bare_prefix_is_skipped() {
        let packages = pkgs(&[WIN10_SDK_PREFIX]);
        assert!(probe_sdk(&packages).is_none());
    }

    #[test]
    fn falls_back_to_win81() {
        let packages = pkgs(&[
            "Microsoft.VisualStudio.Component.Windows10SDK.IpOverUsb",
            WIN81_SDK_PACKAGE,
        ]);
        assert_eq!(probe_sdk(&packages).as_deref(), Some("8.1"));
    }

    #[test]
    fn win10_preferred_over_win81() {
        let packages = pkgs(&[
            WIN81_SDK_PACKAGE,
            "Microsoft.VisualStudio.Component.Windows10SDK.10240",
        ]);
        assert_eq!(probe_sdk(&packages).as_deref(), Some("10.0.10240.0"));
    }

    #[test]
    fn nothing_found() {
        assert!(probe_sdk(&pkgs(&["Microsoft.VisualStudio.Component.VC.Tools.x86.x64"])).is_none());
    }

    #[test]
    fn leading_integer_parsing() {
        assert_eq!(leading_integer("19041"), Some(19041));
        assert_eq!(leading_integer("19041abc"), Some(19041));
        assert_eq!(leading_integer("IpOverUsb"), None);
        assert_eq!(leading_integer(""), None);
    }
}
