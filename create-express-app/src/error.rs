//! Error types for project generation

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Result alias used throughout the generator
pub type Result<T, E = ScaffoldError> = std::result::Result<T, E>;

/// Everything that can stop a scaffolding run
///
/// Every variant is fatal to the run. Nothing is retried and nothing already
/// written to disk is cleaned up.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Target directory already exists
    #[error("Folder \"{name}\" already exists. Please choose another name.")]
    Collision {
        /// Project name as entered
        name: String,
        /// Directory that was found on disk
        path: PathBuf,
    },

    /// Project name cannot be turned into a directory
    #[error("Invalid project name: {0:?}")]
    InvalidName(String),

    /// Language string outside the supported set
    #[error("Unknown language: {0:?} (expected JavaScript or TypeScript)")]
    UnknownLanguage(String),

    /// Directory creation or file write failed
    #[error("Failed to write {}: {source}", .path.display())]
    Filesystem {
        /// Path being created or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Readme rendering failed
    #[error("Failed to render template: {file}")]
    Render {
        /// Relative path of the file being rendered
        file: String,
        /// Underlying handlebars error
        #[source]
        source: Box<handlebars::RenderError>,
    },

    /// Manifest or compiler config could not be serialized
    #[error("Failed to serialize JSON: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Package manager could not be started
    #[error("Failed to run {program}: {source}")]
    Spawn {
        /// Package manager binary
        program: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Package manager exited unsuccessfully
    #[error("`{program} {}` exited with {status}", .args.join(" "))]
    Install {
        /// Package manager binary
        program: String,
        /// Arguments passed to it
        args: Vec<String>,
        /// Exit status reported by the child
        status: ExitStatus,
    },

    /// Interactive prompt failed (closed terminal, I/O error)
    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl ScaffoldError {
    /// Wrap an I/O error with the path it concerns
    pub fn filesystem(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }

    /// Whether this is a name collision
    #[must_use]
    pub const fn is_collision(&self) -> bool {
        matches!(self, Self::Collision { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collision_message_names_folder() {
        let err = ScaffoldError::Collision {
            name: "demo".to_string(),
            path: PathBuf::from("/tmp/demo"),
        };
        assert_eq!(
            err.to_string(),
            "Folder \"demo\" already exists. Please choose another name."
        );
        assert!(err.is_collision());
    }

    #[test]
    fn test_filesystem_error_includes_path() {
        let err = ScaffoldError::filesystem(
            "/tmp/demo/package.json",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let message = err.to_string();
        assert!(message.contains("/tmp/demo/package.json"));
        assert!(message.contains("denied"));
        assert!(!err.is_collision());
    }

    #[test]
    fn test_unknown_language_message() {
        let err = ScaffoldError::UnknownLanguage("Rust".to_string());
        assert!(err.to_string().contains("\"Rust\""));
    }
}
