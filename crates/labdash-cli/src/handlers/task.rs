//! Task command handler.

use anyhow::Result;

use labdash_core::LabTask;

use crate::bootstrap::CliContext;
use crate::commands::TaskKind;
use crate::error::CliError;
use crate::presentation::display_outcome;

/// Execute a host-wide task and print the script output.
pub async fn execute(ctx: &CliContext, kind: TaskKind) -> Result<()> {
    let task = LabTask::from(kind);
    let outcome = ctx.app().run_lab_task(task).await?;

    display_outcome(task.script(), &outcome);
    if !outcome.is_success() {
        return Err(CliError::Core(format!("{} did not complete successfully", outcome.script)).into());
    }
    Ok(())
}
