//! JSON file implementation of the `ClassStore` trait.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use labdash_core::{ClassRecord, ClassStore, StoreError, ensure_parent_dir};

use crate::stored_class::StoredClass;

/// Stores the class list as a pretty-printed JSON array.
///
/// A missing file reads as an empty list. `save` overwrites the file in
/// place, so a crash mid-write can leave a truncated document behind.
#[derive(Debug, Clone)]
pub struct JsonClassStore {
    path: PathBuf,
}

impl JsonClassStore {
    /// Create a store backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, e: &std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            reason: e.to_string(),
        }
    }
}

#[async_trait]
impl ClassStore for JsonClassStore {
    async fn load(&self) -> Result<Vec<ClassRecord>, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No class file yet, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(self.io_error(&e)),
        };

        let stored: Vec<StoredClass> =
            serde_json::from_slice(&bytes).map_err(|e| StoreError::Corrupt {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;

        debug!(path = %self.path.display(), classes = stored.len(), "Loaded class file");
        Ok(stored.into_iter().map(StoredClass::into_record).collect())
    }

    async fn save(&self, records: &[ClassRecord]) -> Result<(), StoreError> {
        let stored: Vec<StoredClass> = records.iter().map(StoredClass::from).collect();
        let bytes = to_pretty_json(&stored)?;

        ensure_parent_dir(&self.path).map_err(|e| StoreError::Io {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;
        tokio::fs::write(&self.path, bytes)
            .await
            .map_err(|e| self.io_error(&e))?;

        debug!(path = %self.path.display(), classes = records.len(), "Saved class file");
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Serialize with a four-space indent.
fn to_pretty_json<T: Serialize>(value: &T) -> Result<Vec<u8>, StoreError> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value
        .serialize(&mut serializer)
        .map_err(|e| StoreError::Serialization(e.to_string()))?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use labdash_core::{ClassFields, ClassId};
    use tempfile::tempdir;

    fn record(name: &str, students: &[&str]) -> ClassRecord {
        ClassRecord::from_fields(
            ClassId::new(),
            ClassFields::new(name, "Fall 2024", students.iter().copied())
                .with_course(name)
                .with_template("UbuntuTemplate")
                .with_datastore("Datastore1")
                .with_adapters(["NAT", "Inside"]),
        )
    }

    #[tokio::test]
    async fn test_missing_file_loads_empty() {
        let temp = tempdir().unwrap();
        let store = JsonClassStore::new(temp.path().join("classes.json"));

        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load_preserves_order_and_fields() {
        let temp = tempdir().unwrap();
        let store = JsonClassStore::new(temp.path().join("classes.json"));
        let records = vec![record("CS480", &["dave"]), record("CS101", &["alice", "bob"])];

        store.save(&records).await.unwrap();
        let loaded = store.load().await.unwrap();

        let fields: Vec<_> = loaded.iter().map(ClassRecord::fields).collect();
        let expected: Vec<_> = records.iter().map(ClassRecord::fields).collect();
        assert_eq!(fields, expected);
    }

    #[tokio::test]
    async fn test_save_writes_four_space_indented_schema() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("classes.json");
        let store = JsonClassStore::new(&path);

        store.save(&[record("CS101", &["alice"])]).await.unwrap();
        let text = std::fs::read_to_string(&path).unwrap();

        assert!(text.starts_with("[\n    {\n        \"name\": \"CS101\","));
        assert!(text.contains("\"network_adapters\": [\n            \"NAT\","));
        assert!(!text.contains("\"id\""));
    }

    #[tokio::test]
    async fn test_save_creates_parent_directories() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("nested").join("dir").join("classes.json");
        let store = JsonClassStore::new(&path);

        store.save(&[]).await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }

    #[tokio::test]
    async fn test_invalid_json_is_corrupt() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("classes.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = JsonClassStore::new(&path).load().await.unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
    }

    #[tokio::test]
    async fn test_wrong_shape_is_corrupt() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("classes.json");
        std::fs::write(&path, r#"{"name": "CS101"}"#).unwrap();

        let err = JsonClassStore::new(&path).load().await.unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
    }

    #[tokio::test]
    async fn test_directory_path_is_io_error() {
        let temp = tempdir().unwrap();
        let store = JsonClassStore::new(temp.path());

        let err = store.load().await.unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }
}
