//! Command handlers that delegate to AppCore.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that:
//!   1. Parse/validate CLI-specific input
//!   2. Call AppCore methods
//!   3. Format output for the terminal
//!
//! Handlers that change the class list call `save()` themselves once the
//! change succeeded; nothing is persisted implicitly.

pub mod add;
pub mod catalog;
pub mod class_form;
pub mod delete;
pub mod list;
pub mod paths;
pub mod run;
pub mod show;
pub mod task;
pub mod update;
