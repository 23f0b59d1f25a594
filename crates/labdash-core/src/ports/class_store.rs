//! Class store trait definition.
//!
//! This port defines the interface for persisting the class list.
//! Implementations must handle all storage details internally.

use async_trait::async_trait;

use super::StoreError;
use crate::domain::ClassRecord;

/// Persistence gateway for the full list of class records.
///
/// The store works on whole snapshots: `load` returns every record and
/// `save` replaces everything previously stored.
///
/// # Design Rules
///
/// - Snapshot-only: no per-record insert/update/delete
/// - Order is significant and must round-trip
/// - Record identifiers are session-scoped; stores assign fresh ones on load
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClassStore: Send + Sync {
    /// Load all stored class records in display order.
    ///
    /// Returns an empty list if nothing has been stored yet.
    /// Returns `Err(StoreError::Corrupt)` if stored data cannot be parsed.
    async fn load(&self) -> Result<Vec<ClassRecord>, StoreError>;

    /// Replace the stored records with `records`.
    async fn save(&self, records: &[ClassRecord]) -> Result<(), StoreError>;

    /// Human-readable description of where records live (for logs and display).
    fn describe(&self) -> String;
}
