//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `serde_json` or file-format types in any signature
//! - No process-launching details: callers describe a script run, adapters execute it
//! - Script failures are data ([`ScriptOutcome`]), not errors

pub mod class_store;
pub mod script_runner;

use std::path::PathBuf;
use thiserror::Error;

pub use class_store::ClassStore;
pub use script_runner::{
    ArgValue, ScriptArg, ScriptInvocation, ScriptOutcome, ScriptRunner, ScriptStatus,
};

/// Errors from class persistence operations.
///
/// This error type abstracts away storage implementation details (JSON,
/// filesystem) and provides a clean interface for services to handle
/// storage failures.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The stored document exists but does not match the expected schema.
    #[error("Corrupt class storage at {path}: {reason}")]
    Corrupt { path: PathBuf, reason: String },

    /// Reading or writing the backing storage failed.
    #[error("Storage I/O error at {path}: {reason}")]
    Io { path: PathBuf, reason: String },

    /// Serialization of the records failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Hard failures of the script runner.
///
/// A script that runs and exits with an error is *not* represented here;
/// that is a [`ScriptStatus::Failed`] outcome. These variants cover
/// conditions where no script could be launched at all.
#[derive(Debug, Error)]
pub enum ScriptError {
    /// The script interpreter binary is missing from the host.
    #[error("Script interpreter not found: {interpreter}")]
    InterpreterNotFound { interpreter: String },

    /// Spawning the process failed for another reason.
    #[error("Failed to launch {script}: {reason}")]
    Spawn { script: String, reason: String },

    /// Reading process output failed.
    #[error("I/O error while running script: {0}")]
    Io(String),
}

/// Core error type for semantic domain errors.
///
/// This is the canonical error type used across the core domain.
/// Adapters should map this to their own error types (CLI exit codes,
/// dialog messages).
#[derive(Debug, Error)]
pub enum CoreError {
    /// A registry invariant rejected the request.
    #[error(transparent)]
    Registry(#[from] crate::services::RegistryError),

    /// Persistence failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The script runner could not launch a script.
    #[error(transparent)]
    Script(#[from] ScriptError),

    /// Settings validation error.
    #[error(transparent)]
    Settings(#[from] crate::settings::SettingsError),

    /// Validation error (invalid operation parameters).
    #[error("Validation error: {0}")]
    Validation(String),
}
