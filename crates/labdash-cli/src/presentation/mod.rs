//! Shared CLI presentation utilities.
//!
//! # Guidelines
//!
//! - Keep this module format-only: no domain transforms
//! - Domain transforms belong in core services

pub mod class_display;
pub mod tables;

// Re-export commonly used items
pub use class_display::{display_class_detail, display_outcome};
pub use tables::{format_list, print_separator, truncate_string};
