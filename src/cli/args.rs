//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// vsfind - Locate a usable Visual Studio C++ toolchain.
#[derive(Debug, Parser)]
#[command(name = "vsfind")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides ~/.vsfind and .vsfind/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show the full diagnostic trail
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Select the best usable installation (default if no command specified)
    Select(SelectArgs),

    /// Show every reported installation and its capabilities
    List(ListArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `select` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SelectArgs {
    /// Installation records as a JSON array ("-" for stdin)
    #[arg(short, long, env = "VSFIND_INPUT", value_name = "FILE")]
    pub input: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Ignore the Developer Command Prompt environment
    #[arg(long)]
    pub no_env: bool,

    /// Environment variable naming the pinned installation's VC directory
    #[arg(long, value_name = "VAR")]
    pub env_var: Option<String>,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Installation records as a JSON array ("-" for stdin)
    #[arg(short, long, env = "VSFIND_INPUT", value_name = "FILE")]
    pub input: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_parses() {
        let cli = Cli::parse_from(["vsfind"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn select_flags_parse() {
        let cli = Cli::parse_from([
            "vsfind",
            "select",
            "--input",
            "vs.json",
            "--json",
            "--no-env",
            "--env-var",
            "MY_VC",
        ]);
        let Some(Commands::Select(args)) = cli.command else {
            panic!("Expected Select command");
        };
        assert_eq!(args.input.as_deref(), Some("vs.json"));
        assert!(args.json);
        assert!(args.no_env);
        assert_eq!(args.env_var.as_deref(), Some("MY_VC"));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["vsfind", "list", "--verbose", "--no-color"]);
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert!(matches!(cli.command, Some(Commands::List(_))));
    }

    #[test]
    fn completions_requires_shell() {
        assert!(Cli::try_parse_from(["vsfind", "completions"]).is_err());
        assert!(Cli::try_parse_from(["vsfind", "completions", "bash"]).is_ok());
    }
}
