//! Show command handler.

use anyhow::Result;

use labdash_core::{CoreError, RegistryError};

use crate::bootstrap::CliContext;
use crate::presentation::display_class_detail;

/// Execute the show command.
///
/// An exact name match wins; otherwise the lookup ignores case.
pub fn execute(ctx: &CliContext, name: &str, json: bool) -> Result<()> {
    let classes = ctx.app().classes();
    let class = classes
        .get(name)
        .or_else(|| classes.find(name))
        .ok_or_else(|| {
            CoreError::from(RegistryError::NotFound {
                name: name.to_string(),
            })
        })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&class.fields())?);
    } else {
        display_class_detail(class);
    }
    Ok(())
}
