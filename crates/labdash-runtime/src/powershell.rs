//! Runs automation scripts through an external interpreter.
//!
//! The command line is `interpreter [interpreter_args...] <script path> [argv...]`.
//! Arguments go straight to the process without a shell, so values with
//! spaces or quotes need no escaping.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{Output, Stdio};
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, warn};

use labdash_core::{ScriptError, ScriptInvocation, ScriptOutcome, ScriptRunner, Settings};

/// Production script runner.
#[derive(Debug, Clone)]
pub struct PowerShellRunner {
    interpreter: String,
    interpreter_args: Vec<String>,
    script_dir: PathBuf,
    timeout: Option<Duration>,
}

impl PowerShellRunner {
    pub fn new(
        interpreter: impl Into<String>,
        interpreter_args: Vec<String>,
        script_dir: impl Into<PathBuf>,
        timeout: Option<Duration>,
    ) -> Self {
        Self {
            interpreter: interpreter.into(),
            interpreter_args,
            script_dir: script_dir.into(),
            timeout,
        }
    }

    /// Build a runner from validated settings.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.interpreter.clone(),
            settings.interpreter_args.clone(),
            settings.script_dir.clone(),
            settings.script_timeout(),
        )
    }

    pub fn script_dir(&self) -> &Path {
        &self.script_dir
    }

    fn command(&self, script_path: &Path, invocation: &ScriptInvocation) -> Command {
        let mut cmd = Command::new(&self.interpreter);
        cmd.args(&self.interpreter_args)
            .arg(script_path)
            .args(invocation.to_argv())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        cmd
    }
}

#[async_trait]
impl ScriptRunner for PowerShellRunner {
    async fn run(&self, invocation: &ScriptInvocation) -> Result<ScriptOutcome, ScriptError> {
        let script_path = self.script_dir.join(&invocation.script);
        debug!(
            interpreter = %self.interpreter,
            script = %script_path.display(),
            args = ?invocation.to_argv(),
            "Launching script"
        );

        let child = self
            .command(&script_path, invocation)
            .spawn()
            .map_err(|e| {
                if e.kind() == ErrorKind::NotFound {
                    ScriptError::InterpreterNotFound {
                        interpreter: self.interpreter.clone(),
                    }
                } else {
                    ScriptError::Spawn {
                        script: invocation.script.clone(),
                        reason: e.to_string(),
                    }
                }
            })?;

        // Dropping the child on timeout kills it.
        let waited = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, child.wait_with_output()).await {
                Ok(result) => result,
                Err(_) => {
                    warn!(script = %invocation.script, secs = limit.as_secs(), "Script timed out");
                    return Ok(ScriptOutcome::timed_out(
                        invocation.script.clone(),
                        limit,
                        format!(
                            "ERROR executing {}: timed out after {}s",
                            script_path.display(),
                            limit.as_secs()
                        ),
                    ));
                }
            },
            None => child.wait_with_output().await,
        };
        let output = waited.map_err(|e| ScriptError::Io(e.to_string()))?;

        Ok(outcome(&invocation.script, &script_path, &output))
    }
}

fn outcome(script: &str, script_path: &Path, output: &Output) -> ScriptOutcome {
    let stdout = String::from_utf8_lossy(&output.stdout);
    if output.status.success() {
        return ScriptOutcome::succeeded(script, stdout);
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    debug!(script, code = ?output.status.code(), "Script exited with failure");
    ScriptOutcome::failed(
        script,
        output.status.code(),
        format!("ERROR executing {}: {stdout}{stderr}", script_path.display()),
    )
}
