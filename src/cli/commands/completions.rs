//! Shell completions generation.
//!
//! The `vsfind completions` command writes a completion script to stdout.

use clap::CommandFactory;

use crate::cli::args::{Cli, CompletionsArgs};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

const BIN_NAME: &str = "vsfind";

/// The completions command implementation.
pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }

    fn render(&self) -> Vec<u8> {
        let mut cmd = Cli::command();
        let mut buf = Vec::new();
        clap_complete::generate(self.args.shell, &mut cmd, BIN_NAME, &mut buf);
        buf
    }
}

impl Command for CompletionsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> crate::error::Result<CommandResult> {
        let script = String::from_utf8_lossy(&self.render()).into_owned();
        ui.data(script.trim_end());
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap_complete::Shell;

    #[test]
    fn generates_bash_completions() {
        let cmd = CompletionsCommand::new(CompletionsArgs { shell: Shell::Bash });
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.data_output().contains("vsfind"));
        assert!(ui.data_output().contains("complete"));
    }

    #[test]
    fn zsh_completions_mention_subcommands() {
        let cmd = CompletionsCommand::new(CompletionsArgs { shell: Shell::Zsh });
        let output = String::from_utf8(cmd.render()).unwrap();
        assert!(output.contains("select"));
        assert!(output.contains("list"));
    }
}
