//! Class and script-result display.

use labdash_core::{ClassRecord, ScriptOutcome, ScriptStatus};

use super::tables::{format_list, print_separator};

/// Print every field of a class, students one per line.
pub fn display_class_detail(class: &ClassRecord) {
    println!("Name:      {}", class.name);
    println!("Quarter:   {}", class.quarter);
    println!("Course:    {}", or_dash(&class.course));
    println!("Template:  {}", or_dash(&class.template));
    println!("Datastore: {}", or_dash(&class.datastore));
    println!("Adapters:  {}", format_list(&class.network_adapters, "--"));
    println!("Students ({}):", class.students.len());
    for student in class.roster() {
        println!("  - {student}");
    }
}

/// Print a script result under a heading, the way the result window shows it.
pub fn display_outcome(title: &str, outcome: &ScriptOutcome) {
    println!("{title}");
    print_separator(title.chars().count().max(20));
    println!("{}", outcome.text.trim_end());
    if let Some(note) = status_note(&outcome.status) {
        print_separator(20);
        println!("{note}");
    }
}

fn status_note(status: &ScriptStatus) -> Option<String> {
    match status {
        ScriptStatus::Succeeded => None,
        ScriptStatus::Failed {
            exit_code: Some(code),
        } => Some(format!("(exit code {code})")),
        ScriptStatus::Failed { exit_code: None } => Some("(terminated by signal)".to_string()),
        ScriptStatus::TimedOut { after } => Some(format!("(timed out after {}s)", after.as_secs())),
    }
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() { "--" } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_status_note() {
        assert_eq!(status_note(&ScriptStatus::Succeeded), None);
        assert_eq!(
            status_note(&ScriptStatus::Failed { exit_code: Some(2) }).as_deref(),
            Some("(exit code 2)")
        );
        assert_eq!(
            status_note(&ScriptStatus::TimedOut {
                after: Duration::from_secs(30)
            })
            .as_deref(),
            Some("(timed out after 30s)")
        );
    }
}
