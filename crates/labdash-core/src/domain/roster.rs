use serde::{Deserialize, Serialize};
use std::fmt;

/// A single student, identified by username.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Student {
    pub username: String,
}

impl Student {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.username)
    }
}

impl From<&str> for Student {
    fn from(username: &str) -> Self {
        Self::new(username)
    }
}
