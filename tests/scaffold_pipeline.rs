//! End-to-end pipeline runs against a recording package manager.
//!
//! Run with: cargo test --test scaffold_pipeline

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use create_pika_app::dependencies::{self, Tier, PREACT_TEMPLATE};
use create_pika_app::error::Result;
use create_pika_app::package_manager::PackageManager;
use create_pika_app::paths;
use create_pika_app::reporter::capture::Captured;
use create_pika_app::reporter::Reporter;
use create_pika_app::shell::{CommandOutput, CommandRunner, CommandSpec};
use create_pika_app::templates::TemplateCandidates;
use create_pika_app::{Config, Scaffold, ScaffoldError, ScaffoldPlan, Stage};
use tempfile::TempDir;

/// Pretends to be a package manager: `init` writes a manifest, everything
/// else succeeds without touching disk.
#[derive(Default)]
struct FakePackageManager {
    calls: RefCell<Vec<CommandSpec>>,
}

impl CommandRunner for FakePackageManager {
    fn run(&self, spec: &CommandSpec) -> Result<CommandOutput> {
        self.calls.borrow_mut().push(spec.clone());
        if spec.args.first().map(String::as_str) == Some("init") {
            fs::write(spec.cwd.join(paths::MANIFEST_FILE), "{\"name\":\"newapp\"}")
                .expect("fake init writes manifest");
        }
        Ok(CommandOutput::success())
    }
}

fn bundled_templates() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("templates")
}

fn sorted(mut names: Vec<String>) -> Vec<String> {
    names.sort();
    names
}

#[test]
fn newapp_is_scaffolded_end_to_end() {
    colored::control::set_override(false);
    let cwd = TempDir::new().unwrap();
    let plan = ScaffoldPlan::new("newapp", cwd.path(), &Config::default())
        .unwrap()
        .with_templates(TemplateCandidates::new(vec![bundled_templates()]));

    let runner = FakePackageManager::default();
    let output = Captured::default();
    let mut reporter = Reporter::new(Box::new(output.clone()));
    let mut scaffold = Scaffold::new(&runner, &mut reporter);
    scaffold.create_project(&plan).unwrap();
    assert_eq!(scaffold.stage(), Stage::Done);

    let project = cwd.path().join("newapp");
    assert_eq!(plan.project_path, project);
    assert!(project.join("package.json").is_file());
    assert!(project.join("tsconfig.json").is_file());
    assert!(project.join(".babelrc").is_file());
    assert!(project.join("src/index.tsx").is_file());
    assert!(project.join("src/components/App.tsx").is_file());
    assert!(project.join("public/index.html").is_file());

    let calls = runner.calls.borrow();
    assert_eq!(calls.len(), 3);
    assert!(calls.iter().all(|call| call.program == "npm" && call.cwd == project));
    assert_eq!(calls[0].args, vec!["init", "-y"]);

    assert_eq!(&calls[1].args[..2], ["install", "--save"]);
    let expected_runtime: Vec<String> = dependencies::names(PREACT_TEMPLATE, Tier::Runtime)
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(sorted(calls[1].args[2..].to_vec()), sorted(expected_runtime));

    assert_eq!(&calls[2].args[..2], ["install", "-D"]);
    let expected_dev: Vec<String> = dependencies::names(PREACT_TEMPLATE, Tier::Development)
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(sorted(calls[2].args[2..].to_vec()), sorted(expected_dev));

    let text = output.text();
    assert!(text.contains("Finished installing dependencies"));
    assert!(text.contains("Finished installing dev dependencies"));
    assert_eq!(text.trim_end().lines().last(), Some("All done 🎉"));
}

#[test]
fn yarn_config_switches_every_command() {
    let cwd = TempDir::new().unwrap();
    let config = Config {
        package_manager: PackageManager::Yarn,
        template_dir: Some(bundled_templates()),
    };
    let plan = ScaffoldPlan::new("yarn-app", cwd.path(), &config).unwrap();

    let runner = FakePackageManager::default();
    let mut reporter = Reporter::new(Box::new(std::io::sink()));
    Scaffold::new(&runner, &mut reporter)
        .create_project(&plan)
        .unwrap();

    let rendered: Vec<String> = runner.calls.borrow().iter().map(CommandSpec::display).collect();
    assert_eq!(rendered[0], "yarn init -y");
    assert!(rendered[1].starts_with("yarn add preact"));
    assert!(rendered[2].starts_with("yarn add -D "));
    assert!(cwd.path().join("yarn-app/tsconfig.json").is_file());
}

#[test]
fn missing_templates_do_not_stop_installs() {
    colored::control::set_override(false);
    let cwd = TempDir::new().unwrap();
    let plan = ScaffoldPlan::new("bare", cwd.path(), &Config::default())
        .unwrap()
        .with_templates(TemplateCandidates::new(vec![cwd.path().join("nowhere")]));

    let runner = FakePackageManager::default();
    let output = Captured::default();
    let mut reporter = Reporter::new(Box::new(output.clone()));
    Scaffold::new(&runner, &mut reporter)
        .create_project(&plan)
        .unwrap();

    assert_eq!(runner.calls.borrow().len(), 3);
    assert!(output.text().contains("skipping template copy"));
    assert!(!cwd.path().join("bare/tsconfig.json").exists());
}

#[test]
fn rerunning_with_the_same_name_fails() {
    let cwd = TempDir::new().unwrap();
    let plan = ScaffoldPlan::new("twice", cwd.path(), &Config::default())
        .unwrap()
        .with_templates(TemplateCandidates::new(vec![bundled_templates()]));

    let first = FakePackageManager::default();
    let mut reporter = Reporter::new(Box::new(std::io::sink()));
    Scaffold::new(&first, &mut reporter)
        .create_project(&plan)
        .unwrap();

    let second = FakePackageManager::default();
    let mut scaffold = Scaffold::new(&second, &mut reporter);
    let err = scaffold.create_project(&plan).unwrap_err();

    assert!(matches!(err, ScaffoldError::DirectoryExists(_)));
    assert!(second.calls.borrow().is_empty());
    assert!(scaffold.stage().is_terminal());
}
