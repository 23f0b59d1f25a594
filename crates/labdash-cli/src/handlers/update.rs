//! Update command handler.

use anyhow::Result;

use labdash_core::{ClassSubmission, CoreError, RegistryError};

use crate::bootstrap::CliContext;
use crate::commands::ClassArgs;

use super::class_form::build_fields;

/// Execute the update command.
///
/// Starts from the class's current fields, overwrites the ones given on
/// the command line and submits the full set, the same way the edit
/// dialog does.
pub async fn execute(ctx: &mut CliContext, original_name: &str, args: ClassArgs) -> Result<()> {
    let current = ctx
        .app()
        .classes()
        .get(original_name)
        .map(|c| c.fields())
        .ok_or_else(|| {
            CoreError::from(RegistryError::NotFound {
                name: original_name.to_string(),
            })
        })?;

    let fields = build_fields(args, current)?;
    let name = fields.name.trim().to_string();

    ctx.app_mut()
        .submit(ClassSubmission::editing(original_name, fields))?;
    ctx.app().save().await?;

    if name == original_name {
        println!("Updated class '{name}'.");
    } else {
        println!("Updated class '{original_name}' (now '{name}').");
    }
    Ok(())
}
