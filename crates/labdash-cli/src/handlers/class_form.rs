//! Turns class flags into the field set the core expects.

use std::fs;

use labdash_core::ClassFields;

use crate::commands::ClassArgs;
use crate::error::CliError;

/// Overlay the given flags onto `base`.
///
/// Flags that were not given keep the base value. Students from
/// `--student` and `--students-file` are combined in that order and
/// replace the base roster when either is present. Trimming and blank
/// removal are left to the core.
pub fn build_fields(args: ClassArgs, base: ClassFields) -> Result<ClassFields, CliError> {
    let mut fields = base;

    if let Some(name) = args.name {
        fields.name = name;
    }
    if let Some(quarter) = args.quarter {
        fields.quarter = quarter;
    }
    if let Some(course) = args.course {
        fields.course = course;
    }
    if let Some(template) = args.template {
        fields.template = template;
    }
    if let Some(datastore) = args.datastore {
        fields.datastore = datastore;
    }
    if !args.adapters.is_empty() {
        fields.network_adapters = args.adapters;
    }

    if !args.students.is_empty() || args.students_file.is_some() {
        let mut students = args.students;
        if let Some(path) = &args.students_file {
            let text = fs::read_to_string(path)
                .map_err(|e| CliError::Io(format!("{}: {e}", path.display())))?;
            students.extend(text.lines().map(str::to_string));
        }
        fields.students = students;
    }

    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn base() -> ClassFields {
        ClassFields::new("CS470", "Spring 2025", ["alice", "bob"])
            .with_template("UbuntuTemplate")
            .with_adapters(["NAT"])
    }

    #[test]
    fn test_unset_flags_keep_base_values() {
        let args = ClassArgs {
            quarter: Some("Fall 2025".to_string()),
            ..ClassArgs::default()
        };
        let fields = build_fields(args, base()).unwrap();

        assert_eq!(fields.name, "CS470");
        assert_eq!(fields.quarter, "Fall 2025");
        assert_eq!(fields.students, vec!["alice", "bob"]);
        assert_eq!(fields.template, "UbuntuTemplate");
        assert_eq!(fields.network_adapters, vec!["NAT"]);
    }

    #[test]
    fn test_students_flags_and_file_are_combined() {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), "carol\n\n  dave \n").unwrap();

        let args = ClassArgs {
            students: vec!["zoe".to_string()],
            students_file: Some(file.path().to_path_buf()),
            ..ClassArgs::default()
        };
        let fields = build_fields(args, base()).unwrap();

        assert_eq!(fields.students, vec!["zoe", "carol", "", "  dave "]);
        assert_eq!(fields.normalized().students, vec!["zoe", "carol", "dave"]);
    }

    #[test]
    fn test_missing_students_file_is_io_error() {
        let args = ClassArgs {
            students_file: Some("/nonexistent/labdash/students.txt".into()),
            ..ClassArgs::default()
        };
        let err = build_fields(args, base()).unwrap_err();
        assert_eq!(err.exit_code(), 74);
    }
}
