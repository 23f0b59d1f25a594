//! List command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::presentation::{format_list, print_separator, truncate_string};

/// Execute the list command.
///
/// Prints every class in display order, or the JSON field sets with
/// `--json`.
pub fn execute(ctx: &CliContext, json: bool) -> Result<()> {
    let classes = ctx.app().classes().list();

    if json {
        let fields: Vec<_> = classes.iter().map(|c| c.fields()).collect();
        println!("{}", serde_json::to_string_pretty(&fields)?);
        return Ok(());
    }

    if classes.is_empty() {
        println!("No classes found.");
        println!("Use 'labdash add --name <name> --quarter <quarter> --student <user>' to add one.");
        return Ok(());
    }

    println!("Found {} class(es):\n", classes.len());
    println!(
        "{:<16} {:<14} {:<10} {:<16} {:<12} Adapters",
        "Name", "Quarter", "Students", "Template", "Datastore"
    );
    print_separator(90);

    for class in classes {
        println!(
            "{:<16} {:<14} {:<10} {:<16} {:<12} {}",
            truncate_string(&class.name, 15),
            truncate_string(&class.quarter, 13),
            class.students.len(),
            truncate_string(&class.template, 15),
            truncate_string(&class.datastore, 11),
            format_list(&class.network_adapters, "--"),
        );
    }

    Ok(())
}
