//! The fixed set of production roles a task passes through.

use super::ParseRoleError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Production responsibility a task must pass through.
///
/// The set is fixed at five roles; roles are never created or destroyed at
/// runtime. The discriminant ordering doubles as the board's column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Writing the script.
    Scriptwriting,
    /// Recording the voiceover.
    Voiceover,
    /// Organising the raw footage and project files.
    FileOrganization,
    /// Editing the video.
    VideoEdit,
    /// Producing the thumbnail image.
    Thumbnail,
}

impl Role {
    /// All roles in board order.
    pub const ALL: [Self; 5] = [
        Self::Scriptwriting,
        Self::Voiceover,
        Self::FileOrganization,
        Self::VideoEdit,
        Self::Thumbnail,
    ];

    /// Returns the stable numeric identifier (1-based).
    #[must_use]
    pub const fn id(self) -> u8 {
        match self {
            Self::Scriptwriting => 1,
            Self::Voiceover => 2,
            Self::FileOrganization => 3,
            Self::VideoEdit => 4,
            Self::Thumbnail => 5,
        }
    }

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scriptwriting => "scriptwriting",
            Self::Voiceover => "voiceover",
            Self::FileOrganization => "file_organization",
            Self::VideoEdit => "video_edit",
            Self::Thumbnail => "thumbnail",
        }
    }

    /// Returns the human-readable display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Scriptwriting => "Scriptwriting",
            Self::Voiceover => "Voiceover",
            Self::FileOrganization => "File Organization",
            Self::VideoEdit => "Video Edit",
            Self::Thumbnail => "Thumbnail",
        }
    }
}

impl TryFrom<u8> for Role {
    type Error = ParseRoleError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Scriptwriting),
            2 => Ok(Self::Voiceover),
            3 => Ok(Self::FileOrganization),
            4 => Ok(Self::VideoEdit),
            5 => Ok(Self::Thumbnail),
            _ => Err(ParseRoleError(value.to_string())),
        }
    }
}

impl TryFrom<&str> for Role {
    type Error = ParseRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "scriptwriting" => Ok(Self::Scriptwriting),
            "voiceover" => Ok(Self::Voiceover),
            "file_organization" => Ok(Self::FileOrganization),
            "video_edit" => Ok(Self::VideoEdit),
            "thumbnail" => Ok(Self::Thumbnail),
            _ => Err(ParseRoleError(value.to_owned())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
