//! Project template rendering
//!
//! Every generated file is a pure function of the chosen [`Language`] and the
//! package name. Nothing here touches the filesystem, so the full file set can
//! be inspected in tests before anything is written.

use handlebars::Handlebars;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::{Result, ScaffoldError};
use crate::layout::SENTINEL;
use crate::Language;

pub mod files;
pub use files::*;

/// Express version every project depends on
pub const EXPRESS_VERSION: &str = "^4.19.2";

/// Manifest file name
pub const MANIFEST_PATH: &str = "package.json";
/// Compiler configuration file name (TypeScript only)
pub const COMPILER_CONFIG_PATH: &str = "tsconfig.json";
/// Ignore file name
pub const IGNORE_PATH: &str = ".gitignore";
/// Readme file name
pub const README_PATH: &str = "README.md";

/// A single file to be written, relative to the project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTemplate {
    /// Path relative to the project root, `/`-separated
    pub relative_path: String,
    /// Full file contents
    pub content: String,
}

impl FileTemplate {
    fn new(relative_path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            relative_path: relative_path.into(),
            content: content.into(),
        }
    }
}

/// `package.json` contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    /// Package name
    pub name: String,
    /// Package version
    pub version: String,
    /// Entry point module
    pub main: String,
    /// License identifier
    pub license: String,
    /// npm script aliases, in declaration order
    pub scripts: IndexMap<String, String>,
    /// Runtime dependencies
    pub dependencies: IndexMap<String, String>,
    /// Development-only dependencies
    pub dev_dependencies: IndexMap<String, String>,
}

impl PackageManifest {
    /// Build the manifest for a language
    #[must_use]
    pub fn new(language: Language, name: &str) -> Self {
        let (scripts, dev_dependencies): (&[(&str, &str)], &[(&str, &str)]) = match language {
            Language::JavaScript => (
                &[("start", "node index.js"), ("dev", "nodemon index.js")],
                &[("nodemon", "^3.1.0")],
            ),
            Language::TypeScript => (
                &[
                    ("dev", "ts-node-dev --respawn index.ts"),
                    ("build", "tsc"),
                    ("start", "node dist/index.js"),
                ],
                &[
                    ("typescript", "^5.3.3"),
                    ("ts-node-dev", "^2.0.0"),
                    ("@types/express", "^4.17.21"),
                    ("@types/node", "^20.5.7"),
                ],
            ),
        };

        Self {
            name: name.to_string(),
            version: "1.0.0".to_string(),
            main: language.main_entry().to_string(),
            license: "MIT".to_string(),
            scripts: to_map(scripts),
            dependencies: to_map(&[("express", EXPRESS_VERSION)]),
            dev_dependencies: to_map(dev_dependencies),
        }
    }
}

fn to_map(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

/// `tsconfig.json` contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerConfig {
    /// `compilerOptions` block
    pub compiler_options: CompilerOptions,
    /// Globs the compiler picks up
    pub include: Vec<String>,
}

/// `compilerOptions` block of `tsconfig.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
pub struct CompilerOptions {
    /// ECMAScript target level
    pub target: String,
    /// Module system
    pub module: String,
    /// Source root
    pub root_dir: String,
    /// Compiled output directory
    pub out_dir: String,
    /// Interop for default imports
    pub es_module_interop: bool,
    /// Strict type checking
    pub strict: bool,
    /// Skip type checking of declaration files
    pub skip_lib_check: bool,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            compiler_options: CompilerOptions {
                target: "ES2020".to_string(),
                module: "CommonJS".to_string(),
                root_dir: ".".to_string(),
                out_dir: "dist".to_string(),
                es_module_interop: true,
                strict: true,
                skip_lib_check: true,
            },
            include: vec!["src/**/*".to_string(), "index.ts".to_string()],
        }
    }
}

/// Language-specific source files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceSet {
    /// `index.<ext>`
    pub entry_point: &'static str,
    /// `src/app.<ext>`
    pub app_file: &'static str,
    /// `src/routes/index.<ext>`
    pub router_file: &'static str,
    /// `src/controllers/home.<ext>`
    pub controller_file: &'static str,
    /// `src/middlewares/logger.<ext>`
    pub middleware_file: &'static str,
}

impl SourceSet {
    /// Look up the source files for a language
    #[must_use]
    pub const fn for_language(language: Language) -> Self {
        match language {
            Language::JavaScript => Self {
                entry_point: ENTRY_POINT_JS,
                app_file: APP_JS,
                router_file: ROUTER_JS,
                controller_file: CONTROLLER_JS,
                middleware_file: MIDDLEWARE_JS,
            },
            Language::TypeScript => Self {
                entry_point: ENTRY_POINT_TS,
                app_file: APP_TS,
                router_file: ROUTER_TS,
                controller_file: CONTROLLER_TS,
                middleware_file: MIDDLEWARE_TS,
            },
        }
    }
}

/// The complete rendered file set for one project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedProject {
    /// Language the project was rendered for
    pub language: Language,
    /// `package.json`
    pub manifest: PackageManifest,
    /// Source files
    pub sources: SourceSet,
    /// `.gitignore`
    pub ignore_file: &'static str,
    /// `README.md`
    pub readme: String,
    /// `tsconfig.json`, TypeScript only
    pub compiler_config: Option<CompilerConfig>,
}

impl RenderedProject {
    /// All files in write order
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest or compiler configuration cannot be
    /// serialized.
    pub fn files(&self) -> Result<Vec<FileTemplate>> {
        let ext = self.language.extension();
        let mut files = vec![
            FileTemplate::new(MANIFEST_PATH, serde_json::to_string_pretty(&self.manifest)?),
            FileTemplate::new(format!("index.{ext}"), self.sources.entry_point),
            FileTemplate::new(format!("src/app.{ext}"), self.sources.app_file),
            FileTemplate::new(format!("src/routes/index.{ext}"), self.sources.router_file),
            FileTemplate::new(
                format!("src/controllers/home.{ext}"),
                self.sources.controller_file,
            ),
            FileTemplate::new(
                format!("src/middlewares/logger.{ext}"),
                self.sources.middleware_file,
            ),
        ];

        if let Some(config) = &self.compiler_config {
            files.push(FileTemplate::new(
                COMPILER_CONFIG_PATH,
                serde_json::to_string_pretty(config)?,
            ));
        }

        files.push(FileTemplate::new(IGNORE_PATH, self.ignore_file));
        files.push(FileTemplate::new(README_PATH, self.readme.as_str()));

        Ok(files)
    }
}

/// Render every file for a project
///
/// `resolved_name` becomes the package name; `raw_name` only decides whether
/// the readme tells the user to `cd .` or `cd <name>`.
///
/// # Errors
///
/// Returns an error if the readme template fails to render.
pub fn render(language: Language, resolved_name: &str, raw_name: &str) -> Result<RenderedProject> {
    Ok(RenderedProject {
        language,
        manifest: PackageManifest::new(language, resolved_name),
        sources: SourceSet::for_language(language),
        ignore_file: GITIGNORE,
        readme: render_readme(language, resolved_name, raw_name)?,
        compiler_config: (language == Language::TypeScript).then(CompilerConfig::default),
    })
}

/// Render `README.md`
///
/// # Errors
///
/// Returns an error if handlebars rejects the template.
pub fn render_readme(language: Language, package_name: &str, raw_name: &str) -> Result<String> {
    let mut handlebars = Handlebars::new();

    // Disable HTML escaping since we're generating markdown
    handlebars.register_escape_fn(handlebars::no_escape);

    let context = json!({
        "package_name": package_name,
        "language": language.display_name(),
        "ext": language.extension(),
        "typescript": language == Language::TypeScript,
        "cd_target": cd_target(package_name, raw_name),
    });

    handlebars
        .render_template(README_MD, &context)
        .map_err(|source| ScaffoldError::Render {
            file: README_PATH.to_string(),
            source: Box::new(source),
        })
}

/// Directory the user should `cd` into after generation
#[must_use]
pub fn cd_target<'a>(package_name: &'a str, raw_name: &str) -> &'a str {
    if raw_name == SENTINEL {
        SENTINEL
    } else {
        package_name
    }
}
