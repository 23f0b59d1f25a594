//! Class record domain types.
//!
//! A class record is a saved course section: its roster plus the VM
//! template, datastore and network adapters used when provisioning
//! student machines.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::roster::Student;
use crate::services::RegistryError;

/// Stable, session-scoped identifier for a class record.
///
/// Assigned by the registry when a record is inserted or loaded. It is
/// never persisted, so it stays valid across renames but not across
/// process restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassId(Uuid);

impl ClassId {
    /// Generate a fresh identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ClassId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The editable fields of a class, as collected from user input.
///
/// This is the flat field set handed across the presentation boundary.
/// Call [`ClassFields::normalized`] before checking it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassFields {
    /// Class name, unique across the registry (case-insensitive).
    pub name: String,
    /// Quarter or semester, e.g. "Fall 2024".
    pub quarter: String,
    /// Course code or title. Optional.
    pub course: String,
    /// Student usernames in display order.
    pub students: Vec<String>,
    /// VM template name. Opaque to the core.
    pub template: String,
    /// Datastore name. Opaque to the core.
    pub datastore: String,
    /// Selected network adapter types, e.g. "NAT".
    pub network_adapters: Vec<String>,
}

impl ClassFields {
    /// Create a field set with the required values filled in.
    pub fn new(
        name: impl Into<String>,
        quarter: impl Into<String>,
        students: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            quarter: quarter.into(),
            students: students.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Set the course code.
    #[must_use]
    pub fn with_course(mut self, course: impl Into<String>) -> Self {
        self.course = course.into();
        self
    }

    /// Set the VM template.
    #[must_use]
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    /// Set the datastore.
    #[must_use]
    pub fn with_datastore(mut self, datastore: impl Into<String>) -> Self {
        self.datastore = datastore.into();
        self
    }

    /// Set the network adapters.
    #[must_use]
    pub fn with_adapters(mut self, adapters: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.network_adapters = adapters.into_iter().map(Into::into).collect();
        self
    }

    /// Return a copy with whitespace trimmed and blank entries removed.
    ///
    /// Student order and duplicates are kept. Adapters are a set, so a
    /// repeated adapter keeps only its first occurrence.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let mut adapters: Vec<String> = Vec::with_capacity(self.network_adapters.len());
        for adapter in &self.network_adapters {
            let adapter = adapter.trim();
            if !adapter.is_empty() && !adapters.iter().any(|a| a == adapter) {
                adapters.push(adapter.to_string());
            }
        }

        Self {
            name: self.name.trim().to_string(),
            quarter: self.quarter.trim().to_string(),
            course: self.course.trim().to_string(),
            students: self
                .students
                .iter()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            template: self.template.trim().to_string(),
            datastore: self.datastore.trim().to_string(),
            network_adapters: adapters,
        }
    }

    /// Name of the first required field that is empty, if any.
    ///
    /// Checked in order: `name`, `quarter`, `students`.
    pub fn missing_required_field(&self) -> Option<&'static str> {
        if self.name.trim().is_empty() {
            Some("name")
        } else if self.quarter.trim().is_empty() {
            Some("quarter")
        } else if !self.students.iter().any(|s| !s.trim().is_empty()) {
            Some("students")
        } else {
            None
        }
    }

    /// Check that the required fields are present.
    pub fn validate(&self) -> Result<(), RegistryError> {
        match self.missing_required_field() {
            Some(field) => Err(RegistryError::Validation { field }),
            None => Ok(()),
        }
    }
}

/// A class record owned by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRecord {
    /// Stable identifier, independent of the editable name.
    pub id: ClassId,
    pub name: String,
    pub quarter: String,
    pub course: String,
    pub students: Vec<String>,
    pub template: String,
    pub datastore: String,
    pub network_adapters: Vec<String>,
}

impl ClassRecord {
    /// Build a record from already-normalized fields.
    pub fn from_fields(id: ClassId, fields: ClassFields) -> Self {
        Self {
            id,
            name: fields.name,
            quarter: fields.quarter,
            course: fields.course,
            students: fields.students,
            template: fields.template,
            datastore: fields.datastore,
            network_adapters: fields.network_adapters,
        }
    }

    /// The editable view of this record, used to prefill an edit.
    pub fn fields(&self) -> ClassFields {
        ClassFields {
            name: self.name.clone(),
            quarter: self.quarter.clone(),
            course: self.course.clone(),
            students: self.students.clone(),
            template: self.template.clone(),
            datastore: self.datastore.clone(),
            network_adapters: self.network_adapters.clone(),
        }
    }

    /// Students as roster entries, in display order.
    pub fn roster(&self) -> Vec<Student> {
        self.students.iter().map(|s| Student::new(s.as_str())).collect()
    }

    /// Case-insensitive name comparison used for uniqueness checks.
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

impl fmt::Display for ClassRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.students.len();
        let noun = if count == 1 { "student" } else { "students" };
        write!(f, "{} ({count} {noun})", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_trims_and_drops_blank_students() {
        let fields = ClassFields::new("  CS101 ", " Fall 2024", ["alice ", "", "  ", "bob", "alice"])
            .with_course(" CS101 ");

        let normalized = fields.normalized();
        assert_eq!(normalized.name, "CS101");
        assert_eq!(normalized.quarter, "Fall 2024");
        assert_eq!(normalized.course, "CS101");
        assert_eq!(normalized.students, vec!["alice", "bob", "alice"]);
    }

    #[test]
    fn test_normalized_dedupes_adapters_keeping_first() {
        let fields = ClassFields::new("CS101", "Fall", ["a"]).with_adapters([
            "NAT",
            " Inside",
            "NAT ",
            "",
            "Instructor",
        ]);

        assert_eq!(
            fields.normalized().network_adapters,
            vec!["NAT", "Inside", "Instructor"]
        );
    }

    #[test]
    fn test_missing_required_field_order() {
        assert_eq!(
            ClassFields::new(" ", "", Vec::<String>::new()).missing_required_field(),
            Some("name")
        );
        assert_eq!(
            ClassFields::new("CS101", "  ", ["alice"]).missing_required_field(),
            Some("quarter")
        );
        assert_eq!(
            ClassFields::new("CS101", "Fall", [" ", ""]).missing_required_field(),
            Some("students")
        );
        assert_eq!(
            ClassFields::new("CS101", "Fall", ["alice"]).missing_required_field(),
            None
        );
    }

    #[test]
    fn test_validate_names_missing_field() {
        let err = ClassFields::new("CS101", "", ["alice"]).validate().unwrap_err();
        assert_eq!(err.to_string(), "Missing required field: quarter");
        assert!(ClassFields::new("CS101", "Fall", ["alice"]).validate().is_ok());
    }

    #[test]
    fn test_display_counts_students() {
        let record = ClassRecord::from_fields(
            ClassId::new(),
            ClassFields::new("CS101", "Fall 2024", ["alice", "bob"]),
        );
        assert_eq!(record.to_string(), "CS101 (2 students)");

        let single = ClassRecord::from_fields(
            ClassId::new(),
            ClassFields::new("CS102", "Fall 2024", ["carol"]),
        );
        assert_eq!(single.to_string(), "CS102 (1 student)");
    }

    #[test]
    fn test_fields_round_trip_through_record() {
        let fields = ClassFields::new("CS470", "Spring 2025", ["alice"])
            .with_course("CS470")
            .with_template("UbuntuTemplate")
            .with_datastore("Datastore1")
            .with_adapters(["NAT"]);

        let record = ClassRecord::from_fields(ClassId::new(), fields.clone());
        assert_eq!(record.fields(), fields);
    }

    #[test]
    fn test_name_matches_ignores_case() {
        let record =
            ClassRecord::from_fields(ClassId::new(), ClassFields::new("CS101", "Fall", ["a"]));
        assert!(record.name_matches("cs101"));
        assert!(!record.name_matches("CS102"));
    }

    #[test]
    fn test_class_id_serializes_as_plain_uuid() {
        let id = ClassId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{id}\""));
    }
}
