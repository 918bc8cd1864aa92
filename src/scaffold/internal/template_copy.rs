//! Template copy step

use tracing::debug;

use crate::error::Result;
use crate::reporter::Reporter;
use crate::scaffold::ScaffoldPlan;
use crate::templates::copy_tree;

/// Copy the first resolvable template into the project.
///
/// An unresolvable template is reported and skipped so the install steps
/// still run. A template that resolves but fails to copy is an error.
pub fn copy_templates(plan: &ScaffoldPlan, reporter: &mut Reporter) -> Result<()> {
    let Some(source) = plan.templates.resolve() else {
        debug!(candidates = ?plan.templates.dirs(), "no template source found");
        reporter.warning("Could not locate the bundled templates; skipping template copy");
        return Ok(());
    };

    debug!(source = %source.display(), "resolved template source");
    let copied = copy_tree(source, &plan.project_path)?;
    reporter.step_done(&format!("Copied {copied} template files"));
    Ok(())
}
