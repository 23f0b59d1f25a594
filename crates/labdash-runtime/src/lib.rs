//! Script execution runtime for labdash.
//!
//! Provides the [`ScriptRunner`](labdash_core::ScriptRunner) implementations:
//! [`PowerShellRunner`] launches real scripts, [`MockScriptRunner`] echoes
//! what would have been run.

#![deny(unsafe_code)]

pub mod factory;
pub mod mock;
pub mod powershell;

pub use factory::build_runner;
pub use mock::MockScriptRunner;
pub use powershell::PowerShellRunner;
