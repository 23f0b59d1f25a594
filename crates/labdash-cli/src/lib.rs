//! Command-line adapter for labdash.
//!
//! The binary in `main.rs` is the composition root; everything it needs
//! (argument parsing, bootstrap, handlers, presentation) lives here so it
//! can be tested without spawning the binary.

#![deny(unsafe_code)]

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::{ClassArgs, Commands, OperationKind, TaskKind};
pub use error::CliError;
pub use parser::Cli;
