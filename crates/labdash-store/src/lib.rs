//! Class storage implementations for labdash.
//!
//! Two [`ClassStore`](labdash_core::ClassStore) adapters live here:
//!
//! - [`JsonClassStore`] reads and writes the class list as a JSON array on disk
//! - [`MockClassStore`] serves canned classes and keeps saves in memory
//!
//! Use [`build_store`] to pick one from [`Settings`](labdash_core::Settings).

#![deny(unsafe_code)]

pub mod factory;
pub mod json_store;
pub mod mock_store;
mod stored_class;

pub use factory::build_store;
pub use json_store::JsonClassStore;
pub use mock_store::{MockClassStore, mock_classes};
pub use stored_class::StoredClass;
