use anyhow::{Context, Result};

use create_pika_app::reporter::Reporter;
use create_pika_app::shell::SystemRunner;
use create_pika_app::{Config, Scaffold, ScaffoldPlan};

/// Scaffold `name` and return the process exit code.
///
/// Pipeline failures have already been reported by the time this returns, so
/// they map to exit code 1 rather than an `Err`.
pub fn execute(name: &str) -> Result<i32> {
    let config = Config::load().context("Failed to load create-pika-app configuration")?;
    let cwd = std::env::current_dir().context("Failed to read current directory")?;

    let plan = ScaffoldPlan::new(name, &cwd, &config)?;

    let mut reporter = Reporter::stdout();
    let mut scaffold = Scaffold::new(&SystemRunner, &mut reporter);
    match scaffold.create_project(&plan) {
        Ok(()) => Ok(0),
        Err(_) => Ok(1),
    }
}
