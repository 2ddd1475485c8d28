//! Configuration for the generator
//!
//! Loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `CREATE_EXPRESS_APP_` prefix)
//! 2. `./create-express-app.toml`
//! 3. `~/.config/create-express-app/config.toml` (user config)
//! 4. Hardcoded defaults (fallback)
//!
//! Command-line flags override whatever is loaded here.
//!
//! # Example Configuration
//!
//! ```toml
//! package_manager = "pnpm"
//! default_project_name = "my-api"
//! ```

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::installer::DEFAULT_PACKAGE_MANAGER;

/// Application name used for config paths
pub const APP_NAME: &str = "create-express-app";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "CREATE_EXPRESS_APP_";

/// Local config file name
pub const LOCAL_CONFIG: &str = "create-express-app.toml";

/// Default answer for the project name prompt
pub const DEFAULT_PROJECT_NAME: &str = "my-express-app";

/// Generator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldConfig {
    /// Package manager binary used for installs
    pub package_manager: String,

    /// Default answer for the project name prompt
    pub default_project_name: String,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            package_manager: DEFAULT_PACKAGE_MANAGER.to_string(),
            default_project_name: DEFAULT_PROJECT_NAME.to_string(),
        }
    }
}

impl ScaffoldConfig {
    /// Load configuration from the standard locations
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Default configuration cannot be serialized to TOML
    /// - A configuration file cannot be read or parsed
    /// - A value has the wrong type
    pub fn load() -> anyhow::Result<Self> {
        let mut figment = Figment::new().merge(Toml::string(&toml::to_string(&Self::default())?));

        let user_config = Self::recommended_path();
        if user_config.exists() {
            figment = figment.merge(Toml::file(&user_config));
        }

        let local_config = PathBuf::from(LOCAL_CONFIG);
        if local_config.exists() {
            figment = figment.merge(Toml::file(&local_config));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).lowercase(true));

        let config = figment.extract()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    ///
    /// Environment variables still override the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file contains invalid TOML or a value has the
    /// wrong type.
    pub fn load_from(path: &str) -> anyhow::Result<Self> {
        let config = Figment::new()
            .merge(Toml::string(&toml::to_string(&Self::default())?))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).lowercase(true))
            .extract()?;

        Ok(config)
    }

    /// User config path, `~/.config/create-express-app/config.toml` on Linux
    #[must_use]
    pub fn recommended_path() -> PathBuf {
        dirs::config_dir().map_or_else(
            || PathBuf::from(LOCAL_CONFIG),
            |config_dir| config_dir.join(APP_NAME).join("config.toml"),
        )
    }
}
