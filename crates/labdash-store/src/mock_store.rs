//! In-memory class store for running without a backend.

use async_trait::async_trait;
use std::sync::{Mutex, PoisonError};
use tracing::info;

use labdash_core::{ClassFields, ClassId, ClassRecord, ClassStore, StoreError};

/// The canned classes the mock store starts with.
pub fn mock_classes() -> Vec<ClassRecord> {
    vec![
        ClassRecord::from_fields(
            ClassId::new(),
            ClassFields::new("CS470", "Spring 2025", ["alice", "bob", "carol"])
                .with_course("CS470")
                .with_template("UbuntuTemplate")
                .with_datastore("Datastore1")
                .with_adapters(["NAT", "Instructor"]),
        ),
        ClassRecord::from_fields(
            ClassId::new(),
            ClassFields::new("CS480", "Winter 2025", ["dave", "emma"])
                .with_course("CS480")
                .with_template("WinTemplate")
                .with_datastore("Datastore2")
                .with_adapters(["Inside"]),
        ),
    ]
}

/// Class store that never touches the filesystem.
///
/// Saves replace the in-memory snapshot, so a later `load` in the same
/// process sees them.
#[derive(Debug)]
pub struct MockClassStore {
    records: Mutex<Vec<ClassRecord>>,
}

impl MockClassStore {
    /// Store seeded with [`mock_classes`].
    pub fn new() -> Self {
        Self::with_records(mock_classes())
    }

    pub fn with_records(records: Vec<ClassRecord>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }
}

impl Default for MockClassStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClassStore for MockClassStore {
    async fn load(&self) -> Result<Vec<ClassRecord>, StoreError> {
        Ok(self
            .records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    async fn save(&self, records: &[ClassRecord]) -> Result<(), StoreError> {
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        info!(?names, "[MOCK] Saved classes");
        *self.records.lock().unwrap_or_else(PoisonError::into_inner) = records.to_vec();
        Ok(())
    }

    fn describe(&self) -> String {
        "mock".to_string()
    }
}
