//! Script runner trait definition.
//!
//! This port defines the interface for running external automation
//! scripts (PowerShell against the ESXi host). Implementations handle
//! all process lifecycle details internally.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use super::ScriptError;

/// Value of a single named script parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArgValue {
    /// A plain string value.
    Text(String),
    /// A boolean switch, passed as `-Name:$true`.
    Switch(bool),
    /// A list value, comma-joined on the wire.
    List(Vec<String>),
}

/// A named script parameter, e.g. `-ClassName 'CS101'`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptArg {
    /// Parameter name without the leading dash.
    pub name: String,
    pub value: ArgValue,
}

/// A request to run one script with structured arguments.
///
/// Arguments are kept as name/value pairs so that the runner, not the
/// caller, decides how to quote them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptInvocation {
    /// Script file name, relative to the configured script directory.
    pub script: String,
    pub args: Vec<ScriptArg>,
}

impl ScriptInvocation {
    /// Create an invocation with no arguments.
    pub fn new(script: impl Into<String>) -> Self {
        Self {
            script: script.into(),
            args: Vec::new(),
        }
    }

    /// Add a text parameter.
    #[must_use]
    pub fn arg(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.args.push(ScriptArg {
            name: name.into(),
            value: ArgValue::Text(value.into()),
        });
        self
    }

    /// Add a boolean switch parameter.
    #[must_use]
    pub fn switch(mut self, name: impl Into<String>, on: bool) -> Self {
        self.args.push(ScriptArg {
            name: name.into(),
            value: ArgValue::Switch(on),
        });
        self
    }

    /// Add a list parameter.
    #[must_use]
    pub fn list(
        mut self,
        name: impl Into<String>,
        values: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.args.push(ScriptArg {
            name: name.into(),
            value: ArgValue::List(values.into_iter().map(Into::into).collect()),
        });
        self
    }

    /// Render the arguments the way a PowerShell user would type them.
    ///
    /// Text and list values are single-quoted with embedded quotes doubled.
    /// Used for display and for the mock runner's echo, never for execution.
    pub fn render(&self) -> String {
        self.args
            .iter()
            .map(|arg| match &arg.value {
                ArgValue::Text(v) => format!("-{} {}", arg.name, quote(v)),
                ArgValue::Switch(on) => format!("-{} {}", arg.name, switch_literal(*on)),
                ArgValue::List(vs) => format!("-{} {}", arg.name, quote(&vs.join(","))),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Argument vector for direct process execution (no shell involved).
    pub fn to_argv(&self) -> Vec<String> {
        let mut argv = Vec::with_capacity(self.args.len() * 2);
        for arg in &self.args {
            match &arg.value {
                ArgValue::Text(v) => {
                    argv.push(format!("-{}", arg.name));
                    argv.push(v.clone());
                }
                ArgValue::Switch(on) => {
                    argv.push(format!("-{}:{}", arg.name, switch_literal(*on)));
                }
                ArgValue::List(vs) => {
                    argv.push(format!("-{}", arg.name));
                    argv.push(vs.join(","));
                }
            }
        }
        argv
    }
}

impl fmt::Display for ScriptInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self.render();
        if rendered.is_empty() {
            f.write_str(&self.script)
        } else {
            write!(f, "{} {rendered}", self.script)
        }
    }
}

fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

const fn switch_literal(on: bool) -> &'static str {
    if on { "$true" } else { "$false" }
}

/// How a script run ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScriptStatus {
    /// The script exited successfully.
    Succeeded,
    /// The script exited with a failure status.
    Failed { exit_code: Option<i32> },
    /// The script was killed after exceeding the configured timeout.
    TimedOut { after: Duration },
}

/// Text result of a script run, success or not.
///
/// The presentation layer shows `text` verbatim regardless of `status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptOutcome {
    pub script: String,
    pub status: ScriptStatus,
    pub text: String,
}

impl ScriptOutcome {
    pub fn succeeded(script: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            script: script.into(),
            status: ScriptStatus::Succeeded,
            text: text.into(),
        }
    }

    /// A failed run. `text` is the failure description shown to the user.
    pub fn failed(
        script: impl Into<String>,
        exit_code: Option<i32>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            script: script.into(),
            status: ScriptStatus::Failed { exit_code },
            text: text.into(),
        }
    }

    pub fn timed_out(script: impl Into<String>, after: Duration, text: impl Into<String>) -> Self {
        Self {
            script: script.into(),
            status: ScriptStatus::TimedOut { after },
            text: text.into(),
        }
    }

    pub const fn is_success(&self) -> bool {
        matches!(self.status, ScriptStatus::Succeeded)
    }
}

impl fmt::Display for ScriptOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Runner for external automation scripts.
///
/// # Design Rules
///
/// - A script that runs and fails returns `Ok` with a failed outcome
/// - `Err` is reserved for hosts where nothing could be launched
/// - Arguments are passed through untouched; the runner never validates them
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScriptRunner: Send + Sync {
    /// Run a script and capture its output.
    async fn run(&self, invocation: &ScriptInvocation) -> Result<ScriptOutcome, ScriptError>;
}
