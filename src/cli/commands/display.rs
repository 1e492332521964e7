//! Shared helpers for the `select` and `list` commands.
//!
//! Config resolution, input source resolution and candidate rendering live
//! here so both commands report installations the same way.

use std::path::Path;

use crate::annotate::Candidate;
use crate::config::{load_config_file, load_merged_config, VsFindConfig};
use crate::diagnostics::DiagnosticLog;
use crate::input::InputSource;
use crate::select::ValidVersion;
use crate::ui::{OutputMode, UserInterface};

/// Load the explicit config file if given, otherwise the merged layers.
pub fn load_config(
    project_root: &Path,
    config_path: Option<&Path>,
) -> crate::error::Result<VsFindConfig> {
    match config_path {
        Some(path) => load_config_file(path),
        None => load_merged_config(project_root),
    }
}

/// Apply the configured default output mode unless a flag already changed it.
pub fn apply_default_output(ui: &mut dyn UserInterface, config: &VsFindConfig) {
    if ui.output_mode() == OutputMode::Normal {
        ui.set_output_mode(config.settings.default_output.into());
    }
}

/// Pick the input source: the flag, then the config, then stdin.
///
/// Relative config paths are anchored at the project root.
pub fn input_source(arg: Option<&str>, config: &VsFindConfig, project_root: &Path) -> InputSource {
    if let Some(arg) = arg {
        return InputSource::from_arg(arg);
    }
    match &config.selection.input {
        Some(path) if path.as_os_str() == "-" => InputSource::Stdin,
        Some(path) => InputSource::File(project_root.join(path)),
        None => InputSource::Stdin,
    }
}

/// One-line label for a candidate, e.g. `VS2022 (17.4.1)`.
pub fn candidate_label(candidate: &Candidate) -> String {
    match candidate.release_year {
        Some(year) => format!("VS{} ({})", year, candidate.version),
        None => format!("unknown ({})", candidate.version),
    }
}

/// Print a candidate's capabilities as indented key/value lines.
pub fn show_capabilities(ui: &mut dyn UserInterface, candidate: &Candidate) {
    let driver = candidate
        .build_driver
        .as_ref()
        .map(|p| p.display().to_string());
    ui.message(&format!("  path:    {}", candidate.path.display()));
    ui.message(&format!("  msbuild: {}", or_missing(driver.as_deref())));
    ui.message(&format!("  toolset: {}", or_missing(candidate.toolset.as_deref())));
    ui.message(&format!("  sdk:     {}", or_missing(candidate.sdk.as_deref())));
}

/// Print every diagnostic entry.
pub fn show_trail(ui: &mut dyn UserInterface, log: &DiagnosticLog, as_details: bool) {
    for entry in log {
        if as_details {
            ui.detail(entry);
        } else {
            ui.message(entry);
        }
    }
}

/// Print the installations that qualified on capabilities alone.
pub fn show_valid_versions(ui: &mut dyn UserInterface, valid: &[ValidVersion]) {
    if valid.is_empty() {
        return;
    }
    ui.message("");
    ui.message("usable installations found:");
    for v in valid {
        ui.message(&format!("  VS{}: \"{}\"", v.release_year, v.path.display()));
    }
}

fn or_missing(value: Option<&str>) -> &str {
    value.unwrap_or("(missing)")
}
