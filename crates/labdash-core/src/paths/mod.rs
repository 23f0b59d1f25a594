//! Path utilities for labdash data directories.
//!
//! This module provides the default locations for:
//! - The class list JSON document
//! - The automation script directory
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No environment lookups; adapters map their own overrides into `Settings`
//! - OS-specific logic is delegated to the `dirs` crate in `platform`

mod ensure;
mod error;
mod platform;

// Error type
pub use error::PathError;

// Platform roots and default locations
pub use platform::{data_root, default_data_file, default_script_dir};

// Directory operations
pub use ensure::ensure_parent_dir;
