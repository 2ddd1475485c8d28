//! create-express-app library
//!
//! Generates minimal Express.js project skeletons: a fixed directory layout,
//! templated sources, `package.json`, `.gitignore`, `README.md` and, for
//! TypeScript, `tsconfig.json`. Dependency installation is delegated to a
//! [`DependencyInstaller`].
//!
//! ```rust,no_run
//! use create_express_app_lib::{Language, Materializer, PackageManager, ProjectSpec};
//!
//! # fn main() -> Result<(), create_express_app_lib::ScaffoldError> {
//! let spec = ProjectSpec::new("api", Language::TypeScript, std::env::current_dir().unwrap())
//!     .with_extra_packages("dotenv cors");
//! Materializer::new(PackageManager::default()).materialize(&spec)?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod error;
pub mod installer;
pub mod layout;
pub mod materialize;
pub mod observability;
pub mod prompt;
pub mod templates;

use std::fmt;
use std::str::FromStr;

pub use config::ScaffoldConfig;
pub use error::{Result, ScaffoldError};
pub use installer::{DependencyInstaller, PackageManager, RecordingInstaller, SkipInstall};
pub use layout::{Layout, SENTINEL};
pub use materialize::{Materialized, Materializer, Progress, ProjectSpec};
pub use templates::{render, RenderedProject};

/// Language of the generated project
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Language {
    /// Plain JavaScript with explicit `.js` imports
    #[default]
    #[value(name = "javascript", alias = "js")]
    JavaScript,
    /// TypeScript compiled with `tsc`
    #[value(name = "typescript", alias = "ts")]
    TypeScript,
}

impl Language {
    /// Every supported language, in prompt order
    pub const ALL: [Self; 2] = [Self::JavaScript, Self::TypeScript];

    /// Human-readable name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::JavaScript => "JavaScript",
            Self::TypeScript => "TypeScript",
        }
    }

    /// Source file extension, without the dot
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::JavaScript => "js",
            Self::TypeScript => "ts",
        }
    }

    /// `main` entry of `package.json`
    #[must_use]
    pub const fn main_entry(self) -> &'static str {
        match self {
            Self::JavaScript => "index.js",
            Self::TypeScript => "dist/index.js",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Language {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "javascript" | "js" => Ok(Self::JavaScript),
            "typescript" | "ts" => Ok(Self::TypeScript),
            _ => Err(ScaffoldError::UnknownLanguage(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_language() {
        assert_eq!("JavaScript".parse::<Language>().unwrap(), Language::JavaScript);
        assert_eq!("typescript".parse::<Language>().unwrap(), Language::TypeScript);
        assert_eq!("ts".parse::<Language>().unwrap(), Language::TypeScript);
    }

    #[test]
    fn test_parse_unknown_language_fails() {
        let err = "CoffeeScript".parse::<Language>().unwrap_err();
        assert!(matches!(err, ScaffoldError::UnknownLanguage(ref s) if s == "CoffeeScript"));
        assert!("".parse::<Language>().is_err());
    }

    #[test]
    fn test_language_tokens() {
        assert_eq!(Language::JavaScript.extension(), "js");
        assert_eq!(Language::TypeScript.extension(), "ts");
        assert_eq!(Language::TypeScript.to_string(), "TypeScript");
        assert_eq!(Language::default(), Language::JavaScript);
    }
}
