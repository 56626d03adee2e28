//! Common type definitions and newtype wrappers for domain modeling.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Identifier selecting which translation table is active (e.g. `en`, `vi`).
///
/// No validation happens on construction; a locale id only has to match a key
/// of the resource table it is used with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleId(String);

impl LocaleId {
    /// Creates a locale id from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LocaleId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for LocaleId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&LocaleId> for LocaleId {
    fn from(id: &LocaleId) -> Self {
        id.clone()
    }
}

impl Borrow<str> for LocaleId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for LocaleId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for LocaleId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for LocaleId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Common result type for the workspace.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Workspace-wide error type.
#[derive(thiserror::Error, Debug)]
pub enum LingoError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}
