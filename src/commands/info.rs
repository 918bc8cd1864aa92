use anyhow::{Context, Result};
use colored::Colorize;

use create_pika_app::Environment;

/// Print the environment report. Touches nothing on disk.
pub fn execute() -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to read current directory")?;

    println!("{}", "\nEnvironment Info:".bold());
    let environment = Environment::detect(&cwd);
    println!("{}", environment.render());

    Ok(())
}
