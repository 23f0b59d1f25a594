//! Run command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::commands::OperationKind;
use crate::error::CliError;
use crate::presentation::display_outcome;

/// Execute a per-class operation and print the script output.
///
/// A script that ran but failed still has its output printed; the
/// command then exits non-zero.
pub async fn execute(
    ctx: &CliContext,
    class: &str,
    kind: OperationKind,
    student: Option<String>,
    vm: Option<String>,
) -> Result<()> {
    let operation = kind.into_operation(student, vm);
    let outcome = ctx.app().run_class_operation(class, &operation).await?;

    display_outcome(&format!("{operation}: {class}"), &outcome);
    if !outcome.is_success() {
        return Err(CliError::Core(format!("{} did not complete successfully", outcome.script)).into());
    }
    Ok(())
}
