//! VC++ platform toolset probe.

use super::has_package;
use crate::diagnostics::DiagnosticLog;
use crate::version::ReleaseYear;

/// x86/x64 compiler tools component.
pub const VC_TOOLS_PACKAGE: &str = "Microsoft.VisualStudio.Component.VC.Tools.x86.x64";

/// Express editions bundle the compiler without the component above.
pub const EXPRESS_PACKAGE: &str = "Microsoft.VisualStudio.WDExpress";

/// Platform toolset label for an installation, e.g. `v142`.
///
/// Requires the compiler tools (or an Express edition) and a known release
/// year. Compiler tools without a year are recorded in `log`.
pub fn probe_toolset(
    packages: &[String],
    release_year: Option<ReleaseYear>,
    log: &mut DiagnosticLog,
) -> Option<String> {
    if has_package(packages, VC_TOOLS_PACKAGE) {
        tracing::debug!("- found VC.Tools.x86.x64");
    } else if has_package(packages, EXPRESS_PACKAGE) {
        tracing::debug!("- found Visual Studio Express (looking for toolset)");
    } else {
        return None;
    }

    match release_year {
        Some(year) => Some(year.toolset().to_string()),
        None => {
            log.push("- invalid version year, no VC++ toolset");
            None
        }
    }
}
