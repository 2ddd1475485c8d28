//! Target directory planning
//!
//! Decides where a project goes and claims that directory on disk. The
//! existence check and the directory creation are two separate calls, so a
//! directory created by another process in between is not detected. That gap
//! is accepted for a single-user interactive tool.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, ScaffoldError};

/// Project name meaning "generate into the current directory"
pub const SENTINEL: &str = ".";

/// Subdirectories created in every project, in creation order
pub const SOURCE_DIRS: [&str; 3] = ["src/routes", "src/controllers", "src/middlewares"];

/// Where a project will be generated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Absolute (or cwd-relative) project root
    pub target_directory: PathBuf,
    /// Final path segment of `target_directory`, used as the package name
    pub resolved_name: String,
    /// `true` when generating into the current directory
    pub in_place: bool,
}

/// Resolve the target directory for `raw_name` and claim it
///
/// For the sentinel `"."` the current directory is used as-is: nothing is
/// checked and nothing is created. Any other name is joined onto `cwd`, must
/// not exist yet, and is created empty.
///
/// # Errors
///
/// - [`ScaffoldError::InvalidName`] if the name is blank, absolute, or has
///   no final path segment
/// - [`ScaffoldError::Collision`] if the target already exists
/// - [`ScaffoldError::Filesystem`] if the directory cannot be created
pub fn plan(raw_name: &str, cwd: &Path) -> Result<Layout> {
    if raw_name.trim().is_empty() {
        return Err(ScaffoldError::InvalidName(raw_name.to_string()));
    }

    if raw_name == SENTINEL {
        let resolved_name = final_segment(cwd)
            .ok_or_else(|| ScaffoldError::InvalidName(raw_name.to_string()))?;
        debug!(dir = %cwd.display(), "generating into current directory");
        return Ok(Layout {
            target_directory: cwd.to_path_buf(),
            resolved_name,
            in_place: true,
        });
    }

    // `Path::join` replaces the base when given a rooted path
    let name_path = Path::new(raw_name);
    if name_path.is_absolute() || name_path.has_root() {
        return Err(ScaffoldError::InvalidName(raw_name.to_string()));
    }

    let target_directory = cwd.join(name_path);
    let resolved_name = final_segment(&target_directory)
        .ok_or_else(|| ScaffoldError::InvalidName(raw_name.to_string()))?;

    if target_directory.exists() {
        return Err(ScaffoldError::Collision {
            name: raw_name.to_string(),
            path: target_directory,
        });
    }

    fs::create_dir(&target_directory)
        .map_err(|e| ScaffoldError::filesystem(&target_directory, e))?;
    debug!(dir = %target_directory.display(), "created project directory");

    Ok(Layout {
        target_directory,
        resolved_name,
        in_place: false,
    })
}

/// Create the fixed source subdirectories under `root`
///
/// Succeeds if they already exist.
///
/// # Errors
///
/// Returns [`ScaffoldError::Filesystem`] if a directory cannot be created.
pub fn create_source_dirs(root: &Path) -> Result<()> {
    for dir in SOURCE_DIRS {
        let path = root.join(dir);
        fs::create_dir_all(&path).map_err(|e| ScaffoldError::filesystem(&path, e))?;
    }
    Ok(())
}

fn final_segment(path: &Path) -> Option<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
}
