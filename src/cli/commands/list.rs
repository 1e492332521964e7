//! List command implementation.
//!
//! The `vsfind list` command shows every reported installation with its
//! decoded version and probed capabilities, in input order, without
//! selecting one.

use std::path::{Path, PathBuf};

use crate::cli::args::ListArgs;
use crate::diagnostics::DiagnosticLog;
use crate::error::{Result, VsFindError};
use crate::input::load_or_empty;
use crate::probe::RealFs;
use crate::select::annotate_all;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display;

/// The list command implementation.
pub struct ListCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: ListArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config_path = self.config_path.as_deref();
        let config = match display::load_config(&self.project_root, config_path) {
            Ok(c) => c,
            Err(VsFindError::ConfigNotFound { path }) => {
                ui.error(&format!("config file not found: {}", path.display()));
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };
        display::apply_default_output(ui, &config);

        let mut log = DiagnosticLog::new();
        let source =
            display::input_source(self.args.input.as_deref(), &config, &self.project_root);
        let installs = load_or_empty(&source, &mut log);
        let candidates = annotate_all(&installs, &RealFs, &mut log);

        if self.args.json {
            ui.data(&serde_json::to_string_pretty(&candidates)?);
            return Ok(CommandResult::success());
        }

        display::show_trail(ui, &log, true);

        if candidates.is_empty() {
            ui.warning("no installations reported");
            return Ok(CommandResult::success());
        }

        ui.show_header("Visual Studio installations");
        for candidate in &candidates {
            let label = display::candidate_label(candidate);
            if candidate.is_qualified() {
                ui.success(&label);
            } else {
                ui.warning(&format!("{} (not usable)", label));
            }
            display::show_capabilities(ui, candidate);
        }

        Ok(CommandResult::success())
    }
}
