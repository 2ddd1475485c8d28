//! Dependency installation
//!
//! The generator never resolves packages itself. It asks a
//! [`DependencyInstaller`] to run the package manager inside the new project.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::info;

use crate::error::{Result, ScaffoldError};

/// Default package manager binary
pub const DEFAULT_PACKAGE_MANAGER: &str = "npm";

/// Runs `install` for a generated project
pub trait DependencyInstaller {
    /// Install dependencies in `cwd`
    ///
    /// An empty `packages` slice installs what the manifest declares;
    /// otherwise the listed packages are added.
    ///
    /// # Errors
    ///
    /// Returns an error if the install could not be started or did not
    /// succeed.
    fn install(&self, cwd: &Path, packages: &[String]) -> Result<()>;
}

/// Shells out to a package manager (`npm install ...`)
///
/// Standard streams are inherited so install progress shows up live.
#[derive(Debug, Clone)]
pub struct PackageManager {
    program: String,
}

impl PackageManager {
    /// Use the given package manager binary
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Binary this installer runs
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments for one install invocation
    #[must_use]
    pub fn install_args(packages: &[String]) -> Vec<String> {
        std::iter::once("install".to_string())
            .chain(packages.iter().cloned())
            .collect()
    }

    /// Build the child process for one install
    ///
    /// On Windows package managers ship as `.cmd` shims that `CreateProcess`
    /// does not resolve, so the call goes through `cmd /C`.
    #[must_use]
    pub fn command(&self, cwd: &Path, args: &[String]) -> Command {
        let mut command = if cfg!(windows) {
            let mut shell = Command::new("cmd");
            shell.arg("/C").arg(&self.program);
            shell
        } else {
            Command::new(&self.program)
        };
        command.args(args).current_dir(cwd);
        command
    }
}

impl Default for PackageManager {
    fn default() -> Self {
        Self::new(DEFAULT_PACKAGE_MANAGER)
    }
}

impl DependencyInstaller for PackageManager {
    fn install(&self, cwd: &Path, packages: &[String]) -> Result<()> {
        let args = Self::install_args(packages);
        info!(program = %self.program, ?args, cwd = %cwd.display(), "running package manager");

        let status = self
            .command(cwd, &args)
            .status()
            .map_err(|source| ScaffoldError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !status.success() {
            return Err(ScaffoldError::Install {
                program: self.program.clone(),
                args,
                status,
            });
        }

        Ok(())
    }
}

/// Installer that does nothing (`--skip-install`)
#[derive(Debug, Clone, Copy, Default)]
pub struct SkipInstall;

impl DependencyInstaller for SkipInstall {
    fn install(&self, cwd: &Path, packages: &[String]) -> Result<()> {
        info!(cwd = %cwd.display(), ?packages, "skipping dependency installation");
        Ok(())
    }
}

/// One recorded [`DependencyInstaller::install`] call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallCall {
    /// Working directory
    pub cwd: PathBuf,
    /// Requested packages
    pub packages: Vec<String>,
}

/// Installer that records calls instead of running anything
///
/// Useful for exercising the generator without touching the network.
#[derive(Debug, Default)]
pub struct RecordingInstaller {
    calls: RefCell<Vec<InstallCall>>,
}

impl RecordingInstaller {
    /// Create an empty recorder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls made so far, in order
    #[must_use]
    pub fn calls(&self) -> Vec<InstallCall> {
        self.calls.borrow().clone()
    }
}

impl DependencyInstaller for RecordingInstaller {
    fn install(&self, cwd: &Path, packages: &[String]) -> Result<()> {
        self.calls.borrow_mut().push(InstallCall {
            cwd: cwd.to_path_buf(),
            packages: packages.to_vec(),
        });
        Ok(())
    }
}

impl<T: DependencyInstaller + ?Sized> DependencyInstaller for &T {
    fn install(&self, cwd: &Path, packages: &[String]) -> Result<()> {
        (**self).install(cwd, packages)
    }
}

impl<T: DependencyInstaller + ?Sized> DependencyInstaller for Box<T> {
    fn install(&self, cwd: &Path, packages: &[String]) -> Result<()> {
        (**self).install(cwd, packages)
    }
}
