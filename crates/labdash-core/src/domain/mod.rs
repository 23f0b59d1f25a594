//! Core domain types.
//!
//! These types represent the lab roster model, independent of any
//! infrastructure concerns (JSON files, PowerShell, terminals).
//!
//! # Structure
//!
//! - `class` - Class records and the flat field set used to create/edit them
//! - `roster` - Student usernames
//! - `vm` - Virtual machine summaries and power state
//! - `catalog` - Externally supplied enumerations (templates, datastores, adapters)

mod catalog;
mod class;
mod roster;
mod vm;

pub use catalog::{LabCatalog, SelectionWarning};
pub use class::{ClassFields, ClassId, ClassRecord};
pub use roster::Student;
pub use vm::{PowerState, VmInfo};
