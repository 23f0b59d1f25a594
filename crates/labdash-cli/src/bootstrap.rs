//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter:
//! - Class store (via labdash-store)
//! - Script runner (via labdash-runtime)
//! - Core facade (via labdash-core)
//!
//! Command handlers receive the fully-composed [`CliContext`] and delegate
//! work to its `AppCore`.

use std::path::PathBuf;

use labdash_core::{
    AppCore, LabCatalog, PathError, Settings, default_data_file, default_script_dir,
    validate_settings,
};
use labdash_runtime::build_runner;
use labdash_store::build_store;
use tracing::debug;

use crate::error::CliError;
use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Validated settings, flags and environment already applied.
    pub settings: Settings,
}

impl CliConfig {
    /// Resolve settings from parsed flags, falling back to platform defaults.
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let data_file = resolve(cli.data_file.clone(), default_data_file)?;
        let script_dir = resolve(cli.script_dir.clone(), default_script_dir)?;

        let mut settings = Settings::new(cli.mode, data_file, script_dir)
            .with_script_timeout(cli.script_timeout);
        if let Some(interpreter) = &cli.interpreter {
            settings = settings.with_interpreter(interpreter.clone());
        }

        validate_settings(&settings).map_err(|e| CliError::Config(e.to_string()))?;
        Ok(Self { settings })
    }
}

fn resolve(
    explicit: Option<PathBuf>,
    default: fn() -> Result<PathBuf, PathError>,
) -> Result<PathBuf, CliError> {
    match explicit {
        Some(path) => Ok(path),
        None => default().map_err(CliError::from),
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The core application facade.
    pub app: AppCore,
    /// Settings the context was built from.
    pub settings: Settings,
}

impl CliContext {
    /// Access the AppCore.
    pub const fn app(&self) -> &AppCore {
        &self.app
    }

    /// Mutable access for registry changes.
    pub const fn app_mut(&mut self) -> &mut AppCore {
        &mut self.app
    }

    pub const fn settings(&self) -> &Settings {
        &self.settings
    }
}

/// Bootstrap the CLI application.
///
/// Builds the store and runner selected by the mode and loads the
/// class list through them.
pub async fn bootstrap(config: CliConfig) -> Result<CliContext, CliError> {
    let settings = config.settings;
    debug!(mode = %settings.mode, "Bootstrapping");

    let catalog = if settings.mode.is_mock() {
        LabCatalog::mock()
    } else {
        LabCatalog::default()
    };
    let app = AppCore::open(build_store(&settings), build_runner(&settings), catalog).await?;

    Ok(CliContext { app, settings })
}
