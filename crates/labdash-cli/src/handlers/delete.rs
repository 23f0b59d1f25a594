//! Delete command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;

/// Execute the delete command.
///
/// Deleting a class that does not exist is not an error and saves nothing.
pub async fn execute(ctx: &mut CliContext, name: &str) -> Result<()> {
    let Some(removed) = ctx.app_mut().delete(name) else {
        println!("No class named '{name}'; nothing to delete.");
        return Ok(());
    };

    ctx.app().save().await?;
    println!("Deleted class '{}'.", removed.name);
    Ok(())
}
