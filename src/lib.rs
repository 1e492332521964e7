//! vsfind - Locate a usable Visual Studio C++ toolchain.
//!
//! Given the installations reported by the Visual Studio setup
//! configuration API, vsfind decodes each product version, probes for a
//! build driver, a VC++ toolset and a Windows SDK, and picks the newest
//! installation that has all three. Every decision is recorded in a
//! [`diagnostics::DiagnosticLog`] so a failed search can be explained.
//!
//! # Modules
//!
//! - [`annotate`] - Installation records and their probed form
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and layering
//! - [`diagnostics`] - Ordered diagnostic trail
//! - [`environment`] - Developer Command Prompt pinning
//! - [`error`] - Error types and result aliases
//! - [`input`] - Reading installation records
//! - [`paths`] - Path resolution and comparison
//! - [`probe`] - Capability probes
//! - [`select`] - Ranking and selection
//! - [`ui`] - Terminal output
//! - [`version`] - Version normalization
//!
//! # Example
//!
//! ```
//! use vsfind::annotate::RawInstallation;
//! use vsfind::probe::MockFs;
//! use vsfind::select::Selector;
//!
//! let installs = vec![RawInstallation::new("/vs/unknown", "not-a-version", vec![])];
//! let fs = MockFs::new();
//! let result = Selector::new(&fs).select(&installs);
//!
//! assert!(result.chosen.is_none());
//! assert!(result.log.contains("failed to parse version: not-a-version"));
//! ```

pub mod annotate;
pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod environment;
pub mod error;
pub mod input;
pub mod paths;
pub mod probe;
pub mod select;
pub mod ui;
pub mod version;

pub use error::{Result, VsFindError};
