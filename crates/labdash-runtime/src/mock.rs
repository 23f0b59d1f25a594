//! Script runner that only reports what it would have run.

use async_trait::async_trait;
use std::sync::{Mutex, PoisonError};
use tracing::info;

use labdash_core::{ScriptError, ScriptInvocation, ScriptOutcome, ScriptRunner};

/// Echoes every invocation back as `[MOCK] <script> <args>`.
#[derive(Debug, Default)]
pub struct MockScriptRunner {
    history: Mutex<Vec<ScriptInvocation>>,
}

impl MockScriptRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Invocations received so far, oldest first.
    pub fn invocations(&self) -> Vec<ScriptInvocation> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl ScriptRunner for MockScriptRunner {
    async fn run(&self, invocation: &ScriptInvocation) -> Result<ScriptOutcome, ScriptError> {
        info!(script = %invocation.script, "[MOCK] Running script");
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(invocation.clone());
        Ok(ScriptOutcome::succeeded(
            invocation.script.clone(),
            format!("[MOCK] {invocation}"),
        ))
    }
}
