//! Package manifest initialization

use crate::error::Result;
use crate::paths;
use crate::reporter::Reporter;
use crate::scaffold::ScaffoldPlan;
use crate::shell::{run_checked, CommandRunner};

pub fn init_manifest(
    plan: &ScaffoldPlan,
    runner: &dyn CommandRunner,
    reporter: &mut Reporter,
) -> Result<()> {
    let spec = plan.package_manager.init(&plan.project_path);
    run_checked(runner, &spec)?;

    let manifest = paths::manifest_path(&plan.project_path);
    if manifest.is_file() {
        reporter.step_done(&format!("Initialized {}", paths::MANIFEST_FILE));
    } else {
        // Some package managers only write the manifest on first install.
        reporter.warning(&format!(
            "`{}` succeeded but {} was not found",
            spec.display(),
            paths::MANIFEST_FILE
        ));
    }
    Ok(())
}
