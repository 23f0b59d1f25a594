//! Requests crossing the presentation/core boundary.
//!
//! Presentation code never calls registry methods through closures; it
//! builds a [`ClassRequest`] and hands it to
//! [`AppCore::handle`](crate::services::AppCore::handle).

use serde::{Deserialize, Serialize};

use crate::domain::{ClassFields, ClassId, ClassRecord};

/// Everything an add/edit form collects.
///
/// `original_name` is empty when adding and holds the record's name at
/// the time the edit started otherwise. `specific_student` and
/// `target_vm` parameterize class operations and are not stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSubmission {
    pub original_name: String,
    pub fields: ClassFields,
    pub specific_student: String,
    pub target_vm: String,
}

impl ClassSubmission {
    /// Submission for a new class.
    pub fn new(fields: ClassFields) -> Self {
        Self {
            fields,
            ..Self::default()
        }
    }

    /// Submission editing the class currently named `original_name`.
    pub fn editing(original_name: impl Into<String>, fields: ClassFields) -> Self {
        Self {
            original_name: original_name.into(),
            fields,
            ..Self::default()
        }
    }
}

/// A mutation of the class registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassRequest {
    Add(ClassFields),
    Update {
        original_name: String,
        fields: ClassFields,
    },
    Delete {
        original_name: String,
    },
}

impl ClassRequest {
    /// Route a form submission to add or update.
    ///
    /// An empty (after trimming) `original_name` means the form was opened
    /// for a new class.
    pub fn from_submission(submission: ClassSubmission) -> Self {
        if submission.original_name.trim().is_empty() {
            Self::Add(submission.fields)
        } else {
            Self::Update {
                original_name: submission.original_name,
                fields: submission.fields,
            }
        }
    }

    pub fn delete(original_name: impl Into<String>) -> Self {
        Self::Delete {
            original_name: original_name.into(),
        }
    }
}

/// Result of a successfully handled [`ClassRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOutcome {
    Added(ClassId),
    Updated(ClassId),
    /// The removed record, or `None` if nothing matched.
    Deleted(Option<ClassRecord>),
}
