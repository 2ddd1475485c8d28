//! Interactive answer collection

use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::error::{Result, ScaffoldError};
use crate::Language;

/// Answers needed to generate a project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    /// Project name, possibly `"."`
    pub project_name: String,
    /// Language of the generated sources
    pub language: Language,
    /// Whitespace-separated extra packages, possibly empty
    pub extra_packages: String,
}

/// Answers already supplied on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Prefilled {
    /// `[NAME]` argument
    pub project_name: Option<String>,
    /// `--language`
    pub language: Option<Language>,
    /// `--packages`
    pub extra_packages: Option<String>,
}

impl Prefilled {
    /// Fill every missing answer with its default
    #[must_use]
    pub fn with_defaults(self, default_name: &str) -> Answers {
        Answers {
            project_name: self
                .project_name
                .unwrap_or_else(|| default_name.to_string()),
            language: self.language.unwrap_or_default(),
            extra_packages: self.extra_packages.unwrap_or_default(),
        }
    }

    /// Whether every answer is already known
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.project_name.is_some() && self.language.is_some() && self.extra_packages.is_some()
    }
}

/// Prompt for whatever `prefilled` does not already answer
///
/// # Errors
///
/// Returns [`ScaffoldError::Prompt`] if the terminal cannot be read.
pub fn collect(prefilled: Prefilled, default_name: &str) -> Result<Answers> {
    let theme = ColorfulTheme::default();

    let project_name = match prefilled.project_name {
        Some(name) => name,
        None => Input::<String>::with_theme(&theme)
            .with_prompt("What is your project name?")
            .default(default_name.to_string())
            .interact_text()?,
    };

    let language = match prefilled.language {
        Some(language) => language,
        None => {
            let names = Language::ALL.map(Language::display_name);
            let index = Select::with_theme(&theme)
                .with_prompt("Choose language:")
                .items(&names)
                .default(0)
                .interact()?;
            Language::ALL
                .get(index)
                .copied()
                .ok_or_else(|| ScaffoldError::UnknownLanguage(index.to_string()))?
        }
    };

    let extra_packages = match prefilled.extra_packages {
        Some(packages) => packages,
        None => Input::<String>::with_theme(&theme)
            .with_prompt(
                "Enter any extra NPM packages you want to install (space-separated, or leave blank):",
            )
            .allow_empty(true)
            .interact_text()?,
    };

    Ok(Answers {
        project_name,
        language,
        extra_packages,
    })
}
