//! Settings domain types and validation.
//!
//! This module contains the runtime configuration injected at startup.
//! These are pure domain types with no infrastructure dependencies; the
//! core never reads environment variables itself.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Default script interpreter.
pub const DEFAULT_INTERPRETER: &str = "powershell";

/// Upper bound for the script timeout (one day).
pub const MAX_SCRIPT_TIMEOUT_SECS: u64 = 86_400;

/// Interpreter flags placed before the script path.
pub fn default_interpreter_args() -> Vec<String> {
    ["-NoProfile", "-ExecutionPolicy", "Bypass", "-File"]
        .iter()
        .map(|s| (*s).to_string())
        .collect()
}

/// Selects real backends or deterministic stand-ins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeMode {
    /// Canned class data, in-memory saves and echoing script runs.
    #[default]
    Mock,
    /// JSON file storage and real PowerShell invocations.
    Production,
}

impl RuntimeMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mock => "mock",
            Self::Production => "production",
        }
    }

    pub const fn is_mock(self) -> bool {
        matches!(self, Self::Mock)
    }
}

impl fmt::Display for RuntimeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuntimeMode {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mock" => Ok(Self::Mock),
            "production" => Ok(Self::Production),
            other => Err(SettingsError::UnknownMode(other.to_string())),
        }
    }
}

/// Application settings structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Mock vs. production backends.
    pub mode: RuntimeMode,

    /// JSON document holding the class list.
    pub data_file: PathBuf,

    /// Directory containing the automation scripts.
    pub script_dir: PathBuf,

    /// Interpreter binary used to run scripts.
    pub interpreter: String,

    /// Arguments passed to the interpreter before the script path.
    pub interpreter_args: Vec<String>,

    /// Kill scripts that run longer than this. `None` waits forever.
    pub script_timeout_secs: Option<u64>,
}

impl Settings {
    /// Create settings with sensible defaults for the given storage locations.
    pub fn new(mode: RuntimeMode, data_file: PathBuf, script_dir: PathBuf) -> Self {
        Self {
            mode,
            data_file,
            script_dir,
            interpreter: DEFAULT_INTERPRETER.to_string(),
            interpreter_args: default_interpreter_args(),
            script_timeout_secs: None,
        }
    }

    #[must_use]
    pub fn with_interpreter(mut self, interpreter: impl Into<String>) -> Self {
        self.interpreter = interpreter.into();
        self
    }

    #[must_use]
    pub fn with_interpreter_args(mut self, args: Vec<String>) -> Self {
        self.interpreter_args = args;
        self
    }

    #[must_use]
    pub const fn with_script_timeout(mut self, secs: Option<u64>) -> Self {
        self.script_timeout_secs = secs;
        self
    }

    /// Script timeout as a `Duration`, if configured.
    pub fn script_timeout(&self) -> Option<std::time::Duration> {
        self.script_timeout_secs.map(std::time::Duration::from_secs)
    }
}

/// Settings validation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("Unknown runtime mode '{0}' (expected 'mock' or 'production')")]
    UnknownMode(String),

    #[error("Script interpreter cannot be empty")]
    EmptyInterpreter,

    #[error("Data file path cannot be empty")]
    EmptyDataFile,

    #[error("Script timeout must be between 1 and {MAX_SCRIPT_TIMEOUT_SECS} seconds, got {0}")]
    InvalidTimeout(u64),
}

/// Validate settings values.
pub fn validate_settings(settings: &Settings) -> Result<(), SettingsError> {
    if settings.interpreter.trim().is_empty() {
        return Err(SettingsError::EmptyInterpreter);
    }

    if settings.data_file.as_os_str().is_empty() {
        return Err(SettingsError::EmptyDataFile);
    }

    if let Some(secs) = settings.script_timeout_secs {
        if secs == 0 || secs > MAX_SCRIPT_TIMEOUT_SECS {
            return Err(SettingsError::InvalidTimeout(secs));
        }
    }

    Ok(())
}
