//! Project materialization
//!
//! Writes a rendered project to disk and installs its dependencies. The
//! sequence is not transactional: if a step fails, whatever was written before
//! it stays on disk.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Result, ScaffoldError};
use crate::installer::DependencyInstaller;
use crate::layout::{self, Layout};
use crate::templates;
use crate::Language;

/// Everything needed to generate one project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSpec {
    /// Project name as entered, possibly the sentinel `"."`
    pub raw_name: String,
    /// Language of the generated sources
    pub language: Language,
    /// Extra packages to install after the base install
    pub extra_packages: Vec<String>,
    /// Directory the project name is resolved against
    pub cwd: PathBuf,
}

impl ProjectSpec {
    /// Create a spec resolved against `cwd`
    pub fn new(raw_name: impl Into<String>, language: Language, cwd: impl Into<PathBuf>) -> Self {
        Self {
            raw_name: raw_name.into(),
            language,
            extra_packages: Vec::new(),
            cwd: cwd.into(),
        }
    }

    /// Set extra packages from whitespace-separated input
    #[must_use]
    pub fn with_extra_packages(mut self, input: &str) -> Self {
        self.extra_packages = parse_packages(input);
        self
    }
}

/// Split free-text package input into tokens
#[must_use]
pub fn parse_packages(input: &str) -> Vec<String> {
    input.split_whitespace().map(str::to_string).collect()
}

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Materialized {
    /// Where the project was written
    pub layout: Layout,
    /// Written files relative to the project root, in write order
    pub files: Vec<String>,
}

/// Observer for the phases of [`Materializer::materialize_with`]
///
/// Every method defaults to doing nothing.
pub trait Progress {
    /// Target directory claimed, nothing written yet
    fn planned(&mut self, _layout: &Layout) {}

    /// One file written, path relative to the project root
    fn file_written(&mut self, _relative_path: &str) {}

    /// All files written, install about to start
    fn files_done(&mut self, _files: &[String]) {}
}

impl Progress for () {}

/// Generates projects and hands them to a [`DependencyInstaller`]
#[derive(Debug)]
pub struct Materializer<I> {
    installer: I,
}

impl<I: DependencyInstaller> Materializer<I> {
    /// Create a materializer using `installer`
    pub const fn new(installer: I) -> Self {
        Self { installer }
    }

    /// Generate the project and install its dependencies
    ///
    /// # Errors
    ///
    /// Fails with [`ScaffoldError::Collision`] before anything is written if
    /// the target exists. Any later filesystem or install error aborts the
    /// remaining steps and leaves the partial project in place.
    pub fn materialize(&self, spec: &ProjectSpec) -> Result<Materialized> {
        self.materialize_with(spec, &mut ())
    }

    /// [`Materializer::materialize`], reporting each phase to `progress`
    ///
    /// # Errors
    ///
    /// Same as [`Materializer::materialize`].
    pub fn materialize_with(
        &self,
        spec: &ProjectSpec,
        progress: &mut impl Progress,
    ) -> Result<Materialized> {
        let layout = layout::plan(&spec.raw_name, &spec.cwd)?;
        info!(
            dir = %layout.target_directory.display(),
            language = %spec.language,
            "creating project"
        );
        progress.planned(&layout);

        let files = write_files(&layout, spec.language, &spec.raw_name, progress)?;
        progress.files_done(&files);

        self.install(&layout.target_directory, &spec.extra_packages)?;

        Ok(Materialized { layout, files })
    }

    /// Run the base install, then the extra-package install if needed
    ///
    /// # Errors
    ///
    /// Propagates the first installer failure.
    pub fn install(&self, target: &Path, extra_packages: &[String]) -> Result<()> {
        info!("installing dependencies");
        self.installer.install(target, &[])?;

        if !extra_packages.is_empty() {
            info!(packages = ?extra_packages, "installing extra packages");
            self.installer.install(target, extra_packages)?;
        }

        Ok(())
    }
}

/// Create the source directories and write every rendered file
///
/// Returns the relative paths written, in order.
///
/// # Errors
///
/// Returns an error on the first directory, render or write failure.
pub fn write_project(layout: &Layout, language: Language, raw_name: &str) -> Result<Vec<String>> {
    write_files(layout, language, raw_name, &mut ())
}

fn write_files(
    layout: &Layout,
    language: Language,
    raw_name: &str,
    progress: &mut impl Progress,
) -> Result<Vec<String>> {
    layout::create_source_dirs(&layout.target_directory)?;

    let rendered = templates::render(language, &layout.resolved_name, raw_name)?;

    let mut written = Vec::new();
    for file in rendered.files()? {
        let path = layout.target_directory.join(&file.relative_path);
        fs::write(&path, &file.content).map_err(|e| ScaffoldError::filesystem(&path, e))?;
        debug!(file = %file.relative_path, bytes = file.content.len(), "wrote file");
        progress.file_written(&file.relative_path);
        written.push(file.relative_path);
    }

    Ok(written)
}
