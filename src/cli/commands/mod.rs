//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations and carries the shared project root
//! and config override.

pub mod completions;
pub mod dispatcher;
pub mod display;
pub mod list;
pub mod select;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
