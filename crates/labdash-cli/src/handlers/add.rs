//! Add command handler.

use anyhow::Result;

use labdash_core::{ClassFields, ClassSubmission};

use crate::bootstrap::CliContext;
use crate::commands::ClassArgs;

use super::class_form::build_fields;

/// Execute the add command.
///
/// The new class is appended to the list and the list is saved.
pub async fn execute(ctx: &mut CliContext, args: ClassArgs) -> Result<()> {
    let fields = build_fields(args, ClassFields::default())?;
    let name = fields.name.trim().to_string();

    ctx.app_mut().submit(ClassSubmission::new(fields))?;
    ctx.app().save().await?;

    println!("Added class '{name}'.");
    Ok(())
}
