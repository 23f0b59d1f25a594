//! Class registry - the authoritative in-memory class list.
//!
//! The registry owns every [`ClassRecord`] and enforces the invariants:
//! names are unique ignoring case, and no record is missing its name,
//! quarter or students. Every failed operation leaves the list untouched.

use thiserror::Error;
use tracing::{debug, info};

use crate::domain::{ClassFields, ClassId, ClassRecord};

/// Reasons a registry operation was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A required field was empty after trimming.
    #[error("Missing required field: {field}")]
    Validation { field: &'static str },

    /// Another class already uses this name (ignoring case).
    #[error("A class named '{name}' already exists")]
    DuplicateName { name: String },

    /// No class matches the given handle.
    #[error("Class not found: {name}")]
    NotFound { name: String },
}

/// In-memory collection of class records in display order.
#[derive(Debug, Clone, Default)]
pub struct ClassRegistry {
    records: Vec<ClassRecord>,
}

impl ClassRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a registry from previously stored records.
    ///
    /// Every record is re-checked against the registry invariants and
    /// assigned a fresh identifier. Fails on the first record that would
    /// have been rejected by [`ClassRegistry::add`].
    pub fn from_records(
        records: impl IntoIterator<Item = ClassRecord>,
    ) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for record in records {
            registry.add(record.fields())?;
        }
        Ok(registry)
    }

    /// Validate and append a new class.
    pub fn add(&mut self, fields: ClassFields) -> Result<ClassId, RegistryError> {
        let fields = checked(&fields)?;
        self.ensure_unique(&fields.name, None)?;

        let id = ClassId::new();
        info!(class = %fields.name, students = fields.students.len(), "Adding class");
        self.records.push(ClassRecord::from_fields(id, fields));
        Ok(id)
    }

    /// Overwrite the class currently named `original_name`.
    ///
    /// `original_name` is the exact (case-sensitive) name captured when the
    /// edit started. Uniqueness is re-checked only if the name changes
    /// other than by case.
    pub fn update(
        &mut self,
        original_name: &str,
        fields: ClassFields,
    ) -> Result<ClassId, RegistryError> {
        let index = self
            .position_by_name(original_name)
            .ok_or_else(|| RegistryError::NotFound {
                name: original_name.to_string(),
            })?;
        self.replace_at(index, &fields, original_name)
    }

    /// Overwrite the class with the given identifier.
    pub fn update_by_id(&mut self, id: ClassId, fields: ClassFields) -> Result<ClassId, RegistryError> {
        let index = self
            .position_by_id(id)
            .ok_or_else(|| RegistryError::NotFound {
                name: id.to_string(),
            })?;
        let current_name = self.records[index].name.clone();
        self.replace_at(index, &fields, &current_name)
    }

    /// Remove the class named `original_name`, if present.
    ///
    /// Deleting a missing class is a no-op and returns `None`.
    pub fn delete(&mut self, original_name: &str) -> Option<ClassRecord> {
        let Some(index) = self.position_by_name(original_name) else {
            debug!(class = %original_name, "Delete of unknown class ignored");
            return None;
        };
        info!(class = %original_name, "Deleting class");
        Some(self.records.remove(index))
    }

    /// Remove the class with the given identifier, if present.
    pub fn delete_by_id(&mut self, id: ClassId) -> Option<ClassRecord> {
        let index = self.position_by_id(id)?;
        let removed = self.records.remove(index);
        info!(class = %removed.name, "Deleting class");
        Some(removed)
    }

    /// Snapshot of all records in display order.
    pub fn list(&self) -> Vec<ClassRecord> {
        self.records.clone()
    }

    /// Borrow all records in display order.
    pub fn records(&self) -> &[ClassRecord] {
        &self.records
    }

    /// Exact (case-sensitive) name lookup.
    pub fn get(&self, name: &str) -> Option<&ClassRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    /// Case-insensitive name lookup.
    pub fn find(&self, name: &str) -> Option<&ClassRecord> {
        self.records.iter().find(|r| r.name_matches(name))
    }

    pub fn get_by_id(&self, id: ClassId) -> Option<&ClassRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position_by_name(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name == name)
    }

    fn position_by_id(&self, id: ClassId) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    fn replace_at(
        &mut self,
        index: usize,
        fields: &ClassFields,
        original_name: &str,
    ) -> Result<ClassId, RegistryError> {
        let fields = checked(fields)?;
        if fields.name.to_lowercase() != original_name.to_lowercase() {
            self.ensure_unique(&fields.name, Some(index))?;
        }

        // Built in full before the swap so a caller never sees a half-updated record.
        let id = self.records[index].id;
        info!(class = %original_name, new_name = %fields.name, "Updating class");
        self.records[index] = ClassRecord::from_fields(id, fields);
        Ok(id)
    }

    fn ensure_unique(&self, name: &str, skip: Option<usize>) -> Result<(), RegistryError> {
        let clash = self
            .records
            .iter()
            .enumerate()
            .any(|(i, r)| Some(i) != skip && r.name_matches(name));
        if clash {
            return Err(RegistryError::DuplicateName {
                name: name.to_string(),
            });
        }
        Ok(())
    }
}

/// Normalize and validate input fields.
fn checked(fields: &ClassFields) -> Result<ClassFields, RegistryError> {
    let fields = fields.normalized();
    fields.validate()?;
    Ok(fields)
}
