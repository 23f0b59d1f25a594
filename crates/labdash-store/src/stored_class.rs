//! On-disk representation of a class.
//!
//! Field names and order are the persisted contract; changing them breaks
//! existing `classes.json` files.

use serde::{Deserialize, Serialize};

use labdash_core::{ClassFields, ClassId, ClassRecord};

/// One element of the stored JSON array.
///
/// Every key is required and unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoredClass {
    pub name: String,
    pub quarter: String,
    pub course: String,
    pub template: String,
    pub datastore: String,
    pub network_adapters: Vec<String>,
    pub students: Vec<String>,
}

impl From<&ClassRecord> for StoredClass {
    fn from(record: &ClassRecord) -> Self {
        Self {
            name: record.name.clone(),
            quarter: record.quarter.clone(),
            course: record.course.clone(),
            template: record.template.clone(),
            datastore: record.datastore.clone(),
            network_adapters: record.network_adapters.clone(),
            students: record.students.clone(),
        }
    }
}

impl StoredClass {
    /// Convert into a domain record with a fresh session identifier.
    pub fn into_record(self) -> ClassRecord {
        let fields = ClassFields {
            name: self.name,
            quarter: self.quarter,
            course: self.course,
            students: self.students,
            template: self.template,
            datastore: self.datastore,
            network_adapters: self.network_adapters,
        };
        ClassRecord::from_fields(ClassId::new(), fields)
    }
}
