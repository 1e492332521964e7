//! Installation selection.
//!
//! Candidates are tried newest first. The first one with a build driver, a
//! toolset and a Windows SDK wins, unless a Developer Command Prompt pins a
//! different installation. Every step is written to the [`DiagnosticLog`]
//! so a failed selection can explain itself.
//!
//! # Example
//!
//! ```
//! use vsfind::annotate::RawInstallation;
//! use vsfind::probe::MockFs;
//! use vsfind::select::Selector;
//!
//! let installs = vec![RawInstallation::new(
//!     "/opt/vs2019",
//!     "16.11.5",
//!     vec![
//!         "Microsoft.VisualStudio.VC.MSBuild.Base".to_string(),
//!         "Microsoft.VisualStudio.Component.VC.Tools.x86.x64".to_string(),
//!         "Microsoft.VisualStudio.Component.Windows81SDK".to_string(),
//!     ],
//! )];
//!
//! let fs = MockFs::new();
//! let result = Selector::new(&fs).select(&installs);
//! let chosen = result.chosen.unwrap();
//! assert_eq!(chosen.toolset.as_deref(), Some("v142"));
//! assert_eq!(chosen.sdk.as_deref(), Some("8.1"));
//! ```

use std::path::PathBuf;

use serde::Serialize;

use crate::annotate::{annotate, Candidate, RawInstallation};
use crate::diagnostics::DiagnosticLog;
use crate::environment::EnvironmentConstraint;
use crate::probe::PathProbe;
use crate::version::ReleaseYear;

/// A capability-qualified installation seen during selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidVersion {
    pub release_year: ReleaseYear,
    pub path: PathBuf,
}

/// Outcome of one selection run.
#[derive(Debug, Clone, Serialize)]
pub struct SelectionResult {
    /// The selected installation, if any qualified.
    pub chosen: Option<Candidate>,
    /// Every qualified installation encountered before selection stopped,
    /// including ones rejected by the environment constraint.
    pub valid_versions: Vec<ValidVersion>,
    /// Diagnostic trail.
    pub log: DiagnosticLog,
}

impl SelectionResult {
    pub fn is_success(&self) -> bool {
        self.chosen.is_some()
    }
}

/// Picks the best installation from a list of records.
pub struct Selector<'a> {
    fs: &'a dyn PathProbe,
    constraint: Option<EnvironmentConstraint>,
}

impl<'a> Selector<'a> {
    /// Create a selector without an environment constraint.
    pub fn new(fs: &'a dyn PathProbe) -> Self {
        Self {
            fs,
            constraint: None,
        }
    }

    /// Restrict selection to the given installation, if any.
    pub fn with_constraint(mut self, constraint: Option<EnvironmentConstraint>) -> Self {
        self.constraint = constraint;
        self
    }

    /// Run selection with a fresh log.
    pub fn select(&self, installs: &[RawInstallation]) -> SelectionResult {
        self.select_with_log(installs, DiagnosticLog::new())
    }

    /// Run selection, appending to an existing log.
    pub fn select_with_log(
        &self,
        installs: &[RawInstallation],
        mut log: DiagnosticLog,
    ) -> SelectionResult {
        let candidates = annotate_all(installs, self.fs, &mut log);
        let ordered = order_candidates(candidates, &mut log);

        let mut valid_versions = Vec::new();
        for candidate in ordered {
            if let Some(release_year) = self.check(&candidate, &mut log) {
                valid_versions.push(ValidVersion {
                    release_year,
                    path: candidate.path.clone(),
                });

                if self.matches_constraint(&candidate, &mut log) {
                    return SelectionResult {
                        chosen: Some(candidate),
                        valid_versions,
                        log,
                    };
                }
            }
        }

        log.push("could not find a usable installation of version 2017 or newer");
        SelectionResult {
            chosen: None,
            valid_versions,
            log,
        }
    }

    /// Capability checks; returns the release year when all pass.
    fn check(&self, candidate: &Candidate, log: &mut DiagnosticLog) -> Option<ReleaseYear> {
        let release_year = candidate.release_year?;
        log.push(format!(
            "checking VS{} ({}) found at: \"{}\"",
            release_year,
            candidate.version,
            candidate.path.display()
        ));

        if candidate.build_driver.is_some() {
            log.push("- found \"Visual Studio C++ core features\"");
        } else {
            log.push("- \"Visual Studio C++ core features\" missing");
            return None;
        }

        match &candidate.toolset {
            Some(toolset) => log.push(format!("- found VC++ toolset: {}", toolset)),
            None => {
                log.push("- missing any VC++ toolset");
                return None;
            }
        }

        match &candidate.sdk {
            Some(sdk) => log.push(format!("- found Windows SDK: {}", sdk)),
            None => {
                log.push("- missing any Windows SDK");
                return None;
            }
        }

        Some(release_year)
    }

    fn matches_constraint(&self, candidate: &Candidate, log: &mut DiagnosticLog) -> bool {
        match &self.constraint {
            Some(constraint) if !constraint.matches(&candidate.path) => {
                log.push("- does not match this Visual Studio Command Prompt");
                false
            }
            _ => true,
        }
    }
}

/// Annotate every record, in input order.
pub fn annotate_all(
    installs: &[RawInstallation],
    fs: &dyn PathProbe,
    log: &mut DiagnosticLog,
) -> Vec<Candidate> {
    installs.iter().map(|raw| annotate(raw, fs, log)).collect()
}

/// Drop candidates without a release year and sort newest first.
///
/// The sort is stable: installs of the same year keep their input order.
pub fn order_candidates(candidates: Vec<Candidate>, log: &mut DiagnosticLog) -> Vec<Candidate> {
    let mut known: Vec<Candidate> = candidates
        .into_iter()
        .filter(|c| {
            if c.release_year.is_some() {
                return true;
            }
            log.push(format!(
                "unknown version \"{}\" found at \"{}\"",
                c.version,
                c.path.display()
            ));
            false
        })
        .collect();

    known.sort_by(|a, b| b.release_year.cmp(&a.release_year));
    known
}
