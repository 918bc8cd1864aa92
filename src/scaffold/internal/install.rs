//! Dependency installation

use crate::dependencies::{self, Tier};
use crate::error::Result;
use crate::reporter::Reporter;
use crate::scaffold::ScaffoldPlan;
use crate::shell::{run_checked, CommandRunner};

/// Install every package of `tier` from the plan's dependency table.
pub fn install(
    plan: &ScaffoldPlan,
    tier: Tier,
    runner: &dyn CommandRunner,
    reporter: &mut Reporter,
) -> Result<()> {
    let packages = dependencies::names(plan.dependencies, tier);
    if packages.is_empty() {
        return Ok(());
    }

    reporter.installing(tier, &packages);
    let spec = plan
        .package_manager
        .install(&plan.project_path, tier, &packages);
    run_checked(runner, &spec)?;
    reporter.installed(tier);
    Ok(())
}
