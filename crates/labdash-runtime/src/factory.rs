//! Composition utilities for picking a script runner.

use std::sync::Arc;

use labdash_core::{RuntimeMode, ScriptRunner, Settings};

use crate::{MockScriptRunner, PowerShellRunner};

/// Build the script runner selected by `settings.mode`.
pub fn build_runner(settings: &Settings) -> Arc<dyn ScriptRunner> {
    match settings.mode {
        RuntimeMode::Mock => Arc::new(MockScriptRunner::new()),
        RuntimeMode::Production => Arc::new(PowerShellRunner::from_settings(settings)),
    }
}
