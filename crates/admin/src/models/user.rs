//! Acting user record.

use serde::{Deserialize, Serialize};

/// The user on whose behalf template tags are rendered.
///
/// Request-scoped: built by the host framework from its session layer and
/// handed to every tag. Authentication itself is out of scope here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub mail: String,
    /// Super-administrators bypass all permission checks.
    #[serde(default)]
    pub is_superuser: bool,
    /// Preferred interface language, when set.
    #[serde(default)]
    pub language: Option<String>,
}

impl User {
    /// Create a regular user.
    pub fn new(id: i64, name: impl Into<String>, mail: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            mail: mail.into(),
            is_superuser: false,
            language: None,
        }
    }

    /// Mark as super-administrator.
    pub fn superuser(mut self) -> Self {
        self.is_superuser = true;
        self
    }

    /// Set the preferred interface language.
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}
