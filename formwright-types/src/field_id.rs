use std::fmt;

use serde::{Deserialize, Serialize};

/// The identity of a field, e.g. `"3f2b7c1e-..."`.
///
/// Used as keys in `Answers` and `ValidationErrors`. Ids are generated once when a
/// field is created and never change afterwards; imported fields keep the id they
/// were exported with.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldId {
    id: String,
}

impl FieldId {
    /// Create an id from an existing string.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Generate a fresh random id.
    pub fn generate() -> Self {
        Self::new(uuid::Uuid::new_v4().to_string())
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.id
    }

    /// An id consisting only of whitespace cannot address a field.
    pub fn is_blank(&self) -> bool {
        self.id.trim().is_empty()
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl From<&str> for FieldId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for FieldId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for FieldId {
    fn as_ref(&self) -> &str {
        &self.id
    }
}
