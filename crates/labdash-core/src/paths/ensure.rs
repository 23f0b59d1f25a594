//! Directory creation utilities.

use std::fs;
use std::path::Path;

use super::error::PathError;

/// Create every missing parent directory of `file`.
///
/// A parent that exists but is not a directory is an error. Paths with
/// no parent component (a bare file name) succeed without doing anything.
pub fn ensure_parent_dir(file: &Path) -> Result<(), PathError> {
    let Some(parent) = file.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };

    if parent.exists() {
        if !parent.is_dir() {
            return Err(PathError::NotADirectory(parent.to_path_buf()));
        }
        return Ok(());
    }

    fs::create_dir_all(parent).map_err(|e| PathError::CreateFailed {
        path: parent.to_path_buf(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_creates_nested_parents() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("a").join("b").join("classes.json");

        ensure_parent_dir(&file).unwrap();
        assert!(temp.path().join("a").join("b").is_dir());
        assert!(!file.exists());
    }

    #[test]
    fn test_bare_file_name_is_ok() {
        assert!(ensure_parent_dir(Path::new("classes.json")).is_ok());
    }

    #[test]
    fn test_parent_that_is_a_file_fails() {
        let temp = tempdir().unwrap();
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, b"x").unwrap();

        let result = ensure_parent_dir(&blocker.join("classes.json"));
        assert!(matches!(result, Err(PathError::NotADirectory(_))));
    }
}
