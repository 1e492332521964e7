//! Select command implementation.
//!
//! The `vsfind select` command reads installation records, picks the newest
//! usable installation and reports it. When nothing qualifies the full
//! diagnostic trail is printed and the command exits with status 1.

use std::path::{Path, PathBuf};

use crate::cli::args::SelectArgs;
use crate::diagnostics::DiagnosticLog;
use crate::environment::EnvironmentConstraint;
use crate::error::{Result, VsFindError};
use crate::input::load_or_empty;
use crate::probe::RealFs;
use crate::select::{SelectionResult, Selector};
use crate::ui::{OutputMode, UserInterface};

use super::dispatcher::{Command, CommandResult};
use super::display;

/// The select command implementation.
pub struct SelectCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: SelectArgs,
}

impl SelectCommand {
    /// Create a new select command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: SelectArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &SelectArgs {
        &self.args
    }

    fn report_success(&self, ui: &mut dyn UserInterface, result: &SelectionResult) {
        let Some(chosen) = &result.chosen else {
            return;
        };

        display::show_trail(ui, &result.log, true);
        ui.success(&format!(
            "using {} found at: \"{}\"",
            display::candidate_label(chosen),
            chosen.path.display()
        ));
        display::show_capabilities(ui, chosen);

        if ui.output_mode() != OutputMode::Verbose {
            ui.show_hint("run with --verbose for detailed information");
        }
    }

    fn report_failure(&self, ui: &mut dyn UserInterface, result: &SelectionResult) {
        ui.error("could not find a usable Visual Studio installation");
        display::show_trail(ui, &result.log, false);
        display::show_valid_versions(ui, &result.valid_versions);
    }
}

impl Command for SelectCommand {
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
        let env_var = self
            .args
            .env_var
            .as_deref()
            .unwrap_or(&config.selection.env_var);

        let constraint = if self.args.no_env || config.selection.ignore_environment {
            log.push(format!("ignoring {}, not pinning to an environment", env_var));
            None
        } else {
            EnvironmentConstraint::detect(env_var, &mut log)
        };

        let source =
            display::input_source(self.args.input.as_deref(), &config, &self.project_root);
        let installs = load_or_empty(&source, &mut log);

        let fs = RealFs;
        let result = Selector::new(&fs)
            .with_constraint(constraint)
            .select_with_log(&installs, log);

        if self.args.json {
            ui.data(&serde_json::to_string_pretty(&result)?);
        } else if result.is_success() {
            self.report_success(ui, &result);
        } else {
            self.report_failure(ui, &result);
        }

        if result.is_success() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    const VS2019: &str = r#"[
        {
            "path": "/vs/2019",
            "version": "16.11.5",
            "packages": [
                "Microsoft.VisualStudio.VC.MSBuild.Base",
                "Microsoft.VisualStudio.Component.VC.Tools.x86.x64",
                "Microsoft.VisualStudio.Component.Windows10SDK.19041"
            ]
        }
    ]"#;

    const INCOMPLETE: &str = r#"[
        {
            "path": "/vs/2019",
            "version": "16.11.5",
            "packages": ["Microsoft.VisualStudio.VC.MSBuild.Base"]
        }
    ]"#;

    fn setup(records: &str) -> (TempDir, SelectArgs) {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("vs.json");
        fs::write(&input, records).unwrap();
        let args = SelectArgs {
            input: Some(input.to_string_lossy().into_owned()),
            no_env: true,
            ..Default::default()
        };
        (temp, args)
    }

    #[test]
    fn selects_usable_installation() {
        let (temp, args) = setup(VS2019);
        let cmd = SelectCommand::new(temp.path(), None, args);
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_success("using VS2019 (16.11.5) found at:"));
        assert!(ui.has_message("toolset: v142"));
        assert!(ui.has_message("sdk:     10.0.19041.0"));
        assert!(ui.has_hint("--verbose"));
    }

    #[test]
    fn success_trail_goes_to_details() {
        let (temp, args) = setup(VS2019);
        let cmd = SelectCommand::new(temp.path(), None, args);
        let mut ui = MockUI::with_mode(OutputMode::Verbose);

        cmd.execute(&mut ui).unwrap();

        assert!(ui.has_detail("checking VS2019 (16.11.5) found at:"));
        assert!(ui.hints().is_empty());
    }

    #[test]
    fn no_usable_installation_fails_with_trail() {
        let (temp, args) = setup(INCOMPLETE);
        let cmd = SelectCommand::new(temp.path(), None, args);
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("could not find a usable Visual Studio installation"));
        assert!(ui.has_message("missing any VC++ toolset"));
        assert!(ui.has_message("could not find a usable installation of version 2017 or newer"));
    }

    #[test]
    fn unreadable_input_is_treated_as_empty() {
        let temp = TempDir::new().unwrap();
        let args = SelectArgs {
            input: Some(temp.path().join("missing.json").to_string_lossy().into_owned()),
            no_env: true,
            ..Default::default()
        };
        let cmd = SelectCommand::new(temp.path(), None, args);
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_message("could not read installation records"));
    }

    #[test]
    fn json_output_serializes_result() {
        let (temp, mut args) = setup(VS2019);
        args.json = true;
        let cmd = SelectCommand::new(temp.path(), None, args);
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        let value: serde_json::Value = serde_json::from_str(&ui.data_output()).unwrap();
        assert_eq!(value["chosen"]["toolset"], "v142");
        assert_eq!(value["valid_versions"][0]["release_year"], 2019);
        assert!(value["log"].as_array().unwrap().len() > 1);
        assert!(ui.successes().is_empty());
    }

    #[test]
    fn no_env_is_logged() {
        let (temp, mut args) = setup(VS2019);
        args.json = true;
        args.env_var = Some("VSFIND_TEST_UNUSED_VAR".to_string());
        let cmd = SelectCommand::new(temp.path(), None, args);
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert!(ui.data_output().contains("ignoring VSFIND_TEST_UNUSED_VAR"));
    }

    #[test]
    fn input_from_config_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("vs.json"), VS2019).unwrap();
        let config = temp.path().join("vsfind.yml");
        fs::write(&config, "selection:\n  input: vs.json\n  ignore_environment: true\n").unwrap();

        let cmd = SelectCommand::new(temp.path(), Some(&config), SelectArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_success("VS2019"));
    }

    #[test]
    fn missing_explicit_config_exits_2() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("nope.yml");
        let cmd = SelectCommand::new(temp.path(), Some(&config), SelectArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 2);
        assert!(ui.has_error("config file not found"));
    }
}
