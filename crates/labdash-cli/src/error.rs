//! CLI-specific error types and mappings.
//!
//! Handlers return `anyhow::Result`; at the top level the error is
//! converted back into a [`CliError`] to pick the process exit code.

use labdash_core::{CoreError, PathError, RegistryError, StoreError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// General failure, including scripts that ran and failed.
    #[error("{0}")]
    Core(String),

    /// Rejected input: missing fields, duplicate names, blank parameters.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// The named class does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Stored class data could not be understood.
    #[error("Storage error: {0}")]
    Storage(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The script interpreter could not be launched.
    #[error("Process error: {0}")]
    Process(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Core(_) => 1,
            Self::Arguments(_) => 2,
            Self::Storage(_) => 65,  // EX_DATAERR
            Self::NotFound(_) => 66, // EX_NOINPUT
            Self::Process(_) => 71,  // EX_OSERR
            Self::Io(_) => 74,       // EX_IOERR
            Self::Config(_) => 78,   // EX_CONFIG
        }
    }

    /// Recover the most specific error from a handler failure.
    pub fn from_anyhow(err: anyhow::Error) -> Self {
        let err = match err.downcast::<Self>() {
            Ok(cli) => return cli,
            Err(other) => other,
        };
        let err = match err.downcast::<CoreError>() {
            Ok(core) => return core.into(),
            Err(other) => other,
        };
        match err.downcast::<std::io::Error>() {
            Ok(io) => io.into(),
            Err(other) => Self::Core(format!("{other:#}")),
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Registry(RegistryError::NotFound { name }) => {
                Self::NotFound(format!("Class not found: {name}"))
            }
            CoreError::Registry(registry_err) => Self::Arguments(registry_err.to_string()),
            CoreError::Store(StoreError::Io { path, reason }) => {
                Self::Io(format!("{}: {reason}", path.display()))
            }
            CoreError::Store(store_err) => Self::Storage(store_err.to_string()),
            CoreError::Script(script_err) => Self::Process(script_err.to_string()),
            CoreError::Settings(settings_err) => Self::Config(settings_err.to_string()),
            CoreError::Validation(msg) => Self::Arguments(msg),
        }
    }
}

impl From<PathError> for CliError {
    fn from(err: PathError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use labdash_core::{ScriptError, SettingsError};

    #[test]
    fn test_core_errors_map_to_exit_codes() {
        let cases = [
            (
                CoreError::Registry(RegistryError::Validation { field: "quarter" }),
                2,
            ),
            (
                CoreError::Registry(RegistryError::DuplicateName {
                    name: "CS101".to_string(),
                }),
                2,
            ),
            (
                CoreError::Registry(RegistryError::NotFound {
                    name: "CS999".to_string(),
                }),
                66,
            ),
            (
                CoreError::Store(StoreError::Corrupt {
                    path: "classes.json".into(),
                    reason: "bad".to_string(),
                }),
                65,
            ),
            (
                CoreError::Store(StoreError::Io {
                    path: "classes.json".into(),
                    reason: "denied".to_string(),
                }),
                74,
            ),
            (
                CoreError::Script(ScriptError::InterpreterNotFound {
                    interpreter: "powershell".to_string(),
                }),
                71,
            ),
            (CoreError::Settings(SettingsError::EmptyInterpreter), 78),
            (CoreError::Validation("blank".to_string()), 2),
        ];

        for (core, code) in cases {
            assert_eq!(CliError::from(core).exit_code(), code);
        }
    }

    #[test]
    fn test_from_anyhow_recovers_core_error() {
        let err = anyhow::Error::new(CoreError::Registry(RegistryError::NotFound {
            name: "CS999".to_string(),
        }));
        let cli = CliError::from_anyhow(err);

        assert_eq!(cli.exit_code(), 66);
        assert_eq!(cli.to_string(), "Class not found: CS999");
    }

    #[test]
    fn test_from_anyhow_keeps_cli_error_and_falls_back() {
        let cli = CliError::from_anyhow(CliError::Config("bad".to_string()).into());
        assert_eq!(cli.exit_code(), 78);

        let other = CliError::from_anyhow(anyhow::anyhow!("something else"));
        assert_eq!(other.exit_code(), 1);
    }
}
