//! Catalog command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::presentation::{display_outcome, format_list};

/// Print the templates, datastores, adapters and VMs available for classes.
///
/// With `refresh` in production mode the template list is first reloaded
/// from the host.
pub async fn execute(ctx: &mut CliContext, refresh: bool) -> Result<()> {
    if refresh {
        if ctx.settings().mode.is_mock() {
            println!("Mock mode: showing canned catalog.\n");
        } else {
            let outcome = ctx.app_mut().refresh_templates().await?;
            if !outcome.is_success() {
                display_outcome("Template listing failed", &outcome);
                println!();
            }
        }
    }

    let catalog = ctx.app().catalog();

    println!("Templates:  {}", format_list(&catalog.templates, "(none known)"));
    println!("Datastores: {}", format_list(&catalog.datastores, "(none known)"));
    println!("Adapters:   {}", format_list(&catalog.network_adapters, "(none known)"));

    if catalog.vms.is_empty() {
        println!("VMs:        (none known)");
    } else {
        println!("VMs:");
        for vm in &catalog.vms {
            println!("  - {vm}");
        }
    }
    Ok(())
}
