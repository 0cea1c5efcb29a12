//! Thumbnail value object.

use super::BoardDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque, already-encoded thumbnail payload (typically a data URL).
///
/// The payload must be non-empty after trimming; its encoding is never
/// inspected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Thumbnail(String);

impl Thumbnail {
    /// Creates a validated thumbnail payload.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyThumbnail`] when the payload is empty
    /// after trimming.
    pub fn new(payload: impl Into<String>) -> Result<Self, BoardDomainError> {
        let raw = payload.into();
        if raw.trim().is_empty() {
            return Err(BoardDomainError::EmptyThumbnail);
        }
        Ok(Self(raw))
    }

    /// Returns the payload as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Thumbnail {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Thumbnail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
