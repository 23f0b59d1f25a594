//! Composition utilities for picking a class store.
//!
//! Construction only; no domain logic belongs here.

use std::sync::Arc;

use labdash_core::{ClassStore, RuntimeMode, Settings};

use crate::{JsonClassStore, MockClassStore};

/// Build the class store selected by `settings.mode`.
///
/// Mock mode ignores `data_file` entirely.
pub fn build_store(settings: &Settings) -> Arc<dyn ClassStore> {
    match settings.mode {
        RuntimeMode::Mock => Arc::new(MockClassStore::new()),
        RuntimeMode::Production => Arc::new(JsonClassStore::new(settings.data_file.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_routes_by_mode() {
        let data_file = PathBuf::from("/tmp/labdash/classes.json");
        let mock = Settings::new(RuntimeMode::Mock, data_file.clone(), PathBuf::from("scripts"));
        let prod = Settings::new(RuntimeMode::Production, data_file.clone(), PathBuf::from("scripts"));

        assert_eq!(build_store(&mock).describe(), "mock");
        assert_eq!(
            build_store(&prod).describe(),
            data_file.display().to_string()
        );
    }
}
