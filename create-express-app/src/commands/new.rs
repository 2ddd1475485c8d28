//! Project scaffolding command

use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

use create_express_app_lib::installer::{DependencyInstaller, PackageManager, SkipInstall};
use create_express_app_lib::layout::Layout;
use create_express_app_lib::materialize::{Materializer, Progress, ProjectSpec};
use create_express_app_lib::prompt::{self, Prefilled};
use create_express_app_lib::{templates, Language, ScaffoldConfig};

/// Create a new Express project
pub struct NewCommand {
    prefilled: Prefilled,
    assume_defaults: bool,
    skip_install: bool,
    config: ScaffoldConfig,
}

impl NewCommand {
    /// Create a new command instance
    ///
    /// # Arguments
    ///
    /// * `prefilled` - Answers given on the command line
    /// * `assume_defaults` - Use defaults instead of prompting
    /// * `skip_install` - Do not run the package manager
    /// * `config` - Loaded configuration
    pub const fn new(
        prefilled: Prefilled,
        assume_defaults: bool,
        skip_install: bool,
        config: ScaffoldConfig,
    ) -> Self {
        Self {
            prefilled,
            assume_defaults,
            skip_install,
            config,
        }
    }

    /// Execute the command
    pub fn execute(&self) -> Result<()> {
        println!("{}", style("🛠️  Welcome to Create Express App!").bold());
        println!();

        let answers = if self.assume_defaults || self.prefilled.is_complete() {
            self.prefilled
                .clone()
                .with_defaults(&self.config.default_project_name)
        } else {
            prompt::collect(self.prefilled.clone(), &self.config.default_project_name)?
        };

        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        let spec = ProjectSpec::new(answers.project_name, answers.language, cwd)
            .with_extra_packages(&answers.extra_packages);

        let installer: Box<dyn DependencyInstaller> = if self.skip_install {
            Box::new(SkipInstall)
        } else {
            Box::new(PackageManager::new(&self.config.package_manager))
        };

        let mut progress = ConsoleProgress::new(spec.language)?;
        let materialized =
            Materializer::new(Announce(installer)).materialize_with(&spec, &mut progress)?;

        self.print_success(&materialized.layout, &spec.raw_name);

        Ok(())
    }

    /// Print success message with next steps
    fn print_success(&self, layout: &Layout, raw_name: &str) {
        let cd_target = templates::cd_target(&layout.resolved_name, raw_name);

        println!();
        println!("{}", style("✅ Setup complete!").green().bold());
        println!();
        println!("{}", style("To start:").bold());
        println!("  {} {}", style("$").dim(), style(format!("cd {cd_target}")).cyan());
        if self.skip_install {
            println!(
                "  {} {}",
                style("$").dim(),
                style(format!("{} install", self.config.package_manager)).cyan()
            );
        }
        println!(
            "  {} {}",
            style("$").dim(),
            style(format!("{} run dev", self.config.package_manager)).cyan()
        );
        println!();
    }
}

/// Spinner while files are written, then the list of created files
struct ConsoleProgress {
    language: Language,
    style: ProgressStyle,
    spinner: Option<ProgressBar>,
}

impl ConsoleProgress {
    fn new(language: Language) -> Result<Self> {
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .context("Failed to set progress style")?;

        Ok(Self {
            language,
            style,
            spinner: None,
        })
    }
}

impl Progress for ConsoleProgress {
    fn planned(&mut self, layout: &Layout) {
        println!();
        println!(
            "{} {} {}",
            style("📦 Creating").green().bold(),
            style(format!("{} Express app in", self.language)).bold(),
            style(layout.target_directory.display()).cyan().bold()
        );
        println!();

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(self.style.clone());
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));
        spinner.set_message("Generating project files...");
        self.spinner = Some(spinner);
    }

    fn file_written(&mut self, relative_path: &str) {
        if let Some(spinner) = &self.spinner {
            spinner.set_message(format!("Wrote {relative_path}"));
        }
    }

    fn files_done(&mut self, files: &[String]) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
        for file in files {
            println!("  {} {}", style("create").green(), file);
        }
    }
}

/// Prints what is about to be installed, then delegates
struct Announce<I>(I);

impl<I: DependencyInstaller> DependencyInstaller for Announce<I> {
    fn install(
        &self,
        cwd: &Path,
        packages: &[String],
    ) -> create_express_app_lib::Result<()> {
        println!();
        if packages.is_empty() {
            println!("{}", style("📥 Installing dependencies...").bold());
        } else {
            println!(
                "{} {}",
                style("📦 Installing extra packages:").bold(),
                style(packages.join(" ")).cyan()
            );
        }
        println!();
        self.0.install(cwd, packages)
    }
}
