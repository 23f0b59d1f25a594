//! Paths command handler.
//!
//! Displays the resolved settings for diagnostics. Does not load the
//! class list, so it works even when the data file is corrupt.

use anyhow::Result;

use labdash_core::{Settings, data_root};

/// Execute the paths command, printing `key = value` lines.
pub fn execute(settings: &Settings) -> Result<()> {
    let root = data_root().map_or_else(|e| format!("<{e}>"), |p| p.display().to_string());
    let timeout = settings
        .script_timeout_secs
        .map_or_else(|| "none".to_string(), |s| format!("{s}s"));

    println!("mode = {}", settings.mode);
    println!("data_root = {root}");
    println!("data_file = {}", settings.data_file.display());
    println!("data_file_exists = {}", settings.data_file.exists());
    println!("script_dir = {}", settings.script_dir.display());
    println!("script_dir_exists = {}", settings.script_dir.is_dir());
    println!("interpreter = {}", settings.interpreter);
    println!("interpreter_args = {}", settings.interpreter_args.join(" "));
    println!("script_timeout = {timeout}");
    Ok(())
}
