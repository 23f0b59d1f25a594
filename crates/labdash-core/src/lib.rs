//! Core domain for labdash.
//!
//! Owns the class roster model, the [`ClassRegistry`] that enforces its
//! invariants, and the port traits ([`ClassStore`], [`ScriptRunner`]) that
//! adapters implement. The only I/O here is creating parent directories
//! in [`paths`].

pub mod domain;
pub mod operations;
pub mod paths;
pub mod ports;
pub mod requests;
pub mod services;
pub mod settings;

// Re-export commonly used types for convenience
pub use domain::{
    ClassFields, ClassId, ClassRecord, LabCatalog, PowerState, SelectionWarning, Student, VmInfo,
};
pub use operations::{ClassOperation, LabTask};
pub use ports::{
    ArgValue, ClassStore, CoreError, ScriptArg, ScriptError, ScriptInvocation, ScriptOutcome,
    ScriptRunner, ScriptStatus, StoreError,
};
pub use requests::{ClassRequest, ClassSubmission, RequestOutcome};
pub use services::{AppCore, ClassRegistry, RegistryError};
pub use settings::{
    DEFAULT_INTERPRETER, MAX_SCRIPT_TIMEOUT_SECS, RuntimeMode, Settings, SettingsError,
    default_interpreter_args, validate_settings,
};

// Re-export path utilities
pub use paths::{PathError, data_root, default_data_file, default_script_dir, ensure_parent_dir};
