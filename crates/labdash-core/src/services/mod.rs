//! Core services - the application's business logic layer.
//!
//! This module contains the class registry and the facade that
//! orchestrates it together with the ports. Services here are pure
//! orchestrators - they don't know about concrete implementations.

mod app_core;
mod class_registry;

pub use app_core::AppCore;
pub use class_registry::{ClassRegistry, RegistryError};
