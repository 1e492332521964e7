//! Developer Command Prompt pinning.
//!
//! Inside a Visual Studio Developer Command Prompt, `VCINSTALLDIR` points at
//! `<install>\VC\`. When it is set only that installation may be selected,
//! so builds use the toolchain the user already activated.

use std::path::{Path, PathBuf};

use crate::diagnostics::DiagnosticLog;
use crate::paths;

/// Variable exported by the Developer Command Prompt.
pub const DEFAULT_ENV_VAR: &str = "VCINSTALLDIR";

/// Restricts selection to one installation root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentConstraint {
    install_path: PathBuf,
}

impl EnvironmentConstraint {
    /// Pin to an installation root directly.
    pub fn new(install_path: impl AsRef<Path>) -> Self {
        Self {
            install_path: paths::resolve(install_path),
        }
    }

    /// Pin to the installation owning a `VCINSTALLDIR` value.
    ///
    /// The value is a Windows path such as `C:\VS\VC\`; its parent is the
    /// installation root.
    pub fn from_vc_install_dir(vc_install_dir: impl AsRef<Path>) -> Self {
        Self::new(paths::join(vc_install_dir, &[".."]))
    }

    /// Read `env_var` from the process environment.
    pub fn detect(env_var: &str, log: &mut DiagnosticLog) -> Option<Self> {
        Self::detect_with_env(env_var, |key: &str| std::env::var(key), log)
    }

    /// Read `env_var` through a custom lookup.
    ///
    /// This allows testing without modifying actual environment variables.
    /// An empty value counts as unset.
    pub fn detect_with_env<F>(env_var: &str, env_fn: F, log: &mut DiagnosticLog) -> Option<Self>
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        match env_fn(env_var) {
            Ok(value) if !value.is_empty() => {
                let constraint = Self::from_vc_install_dir(&value);
                log.push(format!(
                    "running in VS Command Prompt, installation path is: \"{}\"",
                    constraint.install_path.display()
                ));
                log.push("- will only use this version");
                Some(constraint)
            }
            _ => {
                log.push(format!(
                    "{} not set, not running in VS Command Prompt",
                    env_var
                ));
                None
            }
        }
    }

    /// The pinned installation root.
    pub fn path(&self) -> &Path {
        &self.install_path
    }

    /// Whether `path` is the pinned installation.
    pub fn matches(&self, path: &Path) -> bool {
        paths::same_location(&self.install_path, path)
    }
}
