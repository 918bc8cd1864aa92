//! Create a new Preact project
//!
//! Public interface for the scaffolding pipeline; the stage bodies live in
//! `internal/`.
//!
//! # Example
//!
//! ```no_run
//! use create_pika_app::config::Config;
//! use create_pika_app::reporter::Reporter;
//! use create_pika_app::scaffold::{Scaffold, ScaffoldPlan};
//! use create_pika_app::shell::SystemRunner;
//!
//! let cwd = std::env::current_dir()?;
//! let plan = ScaffoldPlan::new("my-pika-app", &cwd, &Config::default())?;
//! let mut reporter = Reporter::stdout();
//! Scaffold::new(&SystemRunner, &mut reporter).create_project(&plan)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod internal;

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::Config;
use crate::dependencies::{DependencySpec, PREACT_TEMPLATE};
use crate::error::{Result, ScaffoldError};
use crate::package_manager::PackageManager;
use crate::paths;
use crate::reporter::Reporter;
use crate::shell::CommandRunner;
use crate::templates::TemplateCandidates;

/// Everything the pipeline needs, fixed before the first side effect.
#[derive(Debug, Clone)]
pub struct ScaffoldPlan {
    pub name: String,
    pub project_path: PathBuf,
    pub package_manager: PackageManager,
    pub templates: TemplateCandidates,
    pub dependencies: &'static [DependencySpec],
}

impl ScaffoldPlan {
    /// Build the plan for `name`, resolving it against `cwd`.
    ///
    /// The only place a blank name is rejected.
    pub fn new(name: &str, cwd: &Path, config: &Config) -> Result<Self> {
        if name.trim().is_empty() {
            return Err(ScaffoldError::MissingProjectName);
        }
        let project_path = paths::project_path(name, cwd);
        let templates = TemplateCandidates::standard(&project_path, config.template_dir.as_deref());

        Ok(Self {
            name: name.to_string(),
            project_path,
            package_manager: config.package_manager,
            templates,
            dependencies: PREACT_TEMPLATE,
        })
    }

    pub fn with_templates(mut self, templates: TemplateCandidates) -> Self {
        self.templates = templates;
        self
    }
}

/// A pipeline step that can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    CreateDirectory,
    InitManifest,
    CopyTemplates,
    InstallDependencies,
    InstallDevDependencies,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Step::CreateDirectory => "create project directory",
            Step::InitManifest => "initialize package manifest",
            Step::CopyTemplates => "copy templates",
            Step::InstallDependencies => "install dependencies",
            Step::InstallDevDependencies => "install dev dependencies",
        };
        f.write_str(label)
    }
}

/// Where the pipeline is. `Done` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    ArgsParsed,
    DirectoryCreated,
    ManifestInitialized,
    TemplatesCopied,
    DepsInstalled,
    DevDepsInstalled,
    Done,
    Failed(Step),
}

impl Stage {
    /// The step that moves the pipeline out of this stage, if any.
    pub fn next_step(self) -> Option<Step> {
        match self {
            Stage::ArgsParsed => Some(Step::CreateDirectory),
            Stage::DirectoryCreated => Some(Step::InitManifest),
            Stage::ManifestInitialized => Some(Step::CopyTemplates),
            Stage::TemplatesCopied => Some(Step::InstallDependencies),
            Stage::DepsInstalled => Some(Step::InstallDevDependencies),
            Stage::DevDepsInstalled | Stage::Done | Stage::Failed(_) => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Stage::Done | Stage::Failed(_))
    }
}

pub struct Scaffold<'a> {
    runner: &'a dyn CommandRunner,
    reporter: &'a mut Reporter,
    stage: Stage,
}

impl<'a> Scaffold<'a> {
    pub fn new(runner: &'a dyn CommandRunner, reporter: &'a mut Reporter) -> Self {
        Self {
            runner,
            reporter,
            stage: Stage::ArgsParsed,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Run every step in order, halting at the first failure.
    ///
    /// Prints exactly one terminal banner: success, or failure with the
    /// error detail.
    ///
    /// # Errors
    ///
    /// - [`ScaffoldError::DirectoryExists`] / [`ScaffoldError::Io`] from
    ///   directory creation
    /// - [`ScaffoldError::PackageManagerNotFound`] / [`ScaffoldError::CommandFailed`]
    ///   from any package manager call
    /// - [`ScaffoldError::TemplateCopy`] if a resolved template cannot be copied
    pub fn create_project(&mut self, plan: &ScaffoldPlan) -> Result<()> {
        self.reporter.creating(&plan.name, &plan.project_path);

        while let Some(step) = self.stage.next_step() {
            debug!(%step, "starting step");
            if let Err(err) = self.run_step(step, plan) {
                self.stage = Stage::Failed(step);
                info!(%step, error = %err, "scaffold halted");
                self.reporter.failure(&err);
                return Err(err);
            }
            self.stage = advance(step);
        }

        self.stage = Stage::Done;
        self.reporter.success();
        Ok(())
    }

    fn run_step(&mut self, step: Step, plan: &ScaffoldPlan) -> Result<()> {
        match step {
            Step::CreateDirectory => internal::create_directory(plan, self.reporter),
            Step::InitManifest => internal::init_manifest(plan, self.runner, self.reporter),
            Step::CopyTemplates => internal::copy_templates(plan, self.reporter),
            Step::InstallDependencies => internal::install(
                plan,
                crate::dependencies::Tier::Runtime,
                self.runner,
                self.reporter,
            ),
            Step::InstallDevDependencies => internal::install(
                plan,
                crate::dependencies::Tier::Development,
                self.runner,
                self.reporter,
            ),
        }
    }
}

fn advance(step: Step) -> Stage {
    match step {
        Step::CreateDirectory => Stage::DirectoryCreated,
        Step::InitManifest => Stage::ManifestInitialized,
        Step::CopyTemplates => Stage::TemplatesCopied,
        Step::InstallDependencies => Stage::DepsInstalled,
        Step::InstallDevDependencies => Stage::DevDepsInstalled,
    }
}
