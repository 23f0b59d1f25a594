//! Platform-appropriate default locations.

use std::path::PathBuf;

use super::error::PathError;

/// File name of the class list document inside the data root.
const CLASSES_FILE_NAME: &str = "classes.json";

/// Directory name for automation scripts inside the data root.
const SCRIPTS_DIR_NAME: &str = "scripts";

/// Get the root directory for application data.
///
/// This is the system data directory (e.g. `~/.local/share/labdash`).
/// The directory is not created here.
pub fn data_root() -> Result<PathBuf, PathError> {
    let data_dir = dirs::data_local_dir().ok_or(PathError::NoDataDir)?;
    Ok(data_dir.join("labdash"))
}

/// Default location of the class list JSON document.
pub fn default_data_file() -> Result<PathBuf, PathError> {
    Ok(data_root()?.join(CLASSES_FILE_NAME))
}

/// Default directory holding the `.ps1`/`.psm1` automation scripts.
pub fn default_script_dir() -> Result<PathBuf, PathError> {
    Ok(data_root()?.join(SCRIPTS_DIR_NAME))
}
