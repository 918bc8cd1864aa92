//! Project directory creation

use std::fs;
use std::io::ErrorKind;

use tracing::debug;

use crate::error::{Result, ScaffoldError};
use crate::reporter::Reporter;
use crate::scaffold::ScaffoldPlan;

/// Create exactly one new directory at the plan's project path.
///
/// Parent directories are not created. An existing entry at the path is a
/// failure, so two runs with the same name never both succeed.
pub fn create_directory(plan: &ScaffoldPlan, reporter: &mut Reporter) -> Result<()> {
    let path = &plan.project_path;
    match fs::create_dir(path) {
        Ok(()) => {
            debug!(path = %path.display(), "created project directory");
            reporter.step_done(&format!("Created {}", path.display()));
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            Err(ScaffoldError::DirectoryExists(path.clone()))
        }
        Err(e) => Err(ScaffoldError::io(
            format!("failed to create {}", path.display()),
            e,
        )),
    }
}
