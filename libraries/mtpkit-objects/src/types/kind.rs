/// Record kind tags
use serde::{Deserialize, Serialize};

/// The seven device-object record kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    /// Album container
    Album,
    /// Playlist container
    Playlist,
    /// Audio track
    Track,
    /// Generic file
    File,
    /// Folder node
    Folder,
    /// Storage volume
    Storage,
    /// Supported-device entry
    Entry,
}

impl RecordKind {
    /// Convert to string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Album => "album",
            Self::Playlist => "playlist",
            Self::Track => "track",
            Self::File => "file",
            Self::Folder => "folder",
            Self::Storage => "storage",
            Self::Entry => "entry",
        }
    }

    /// Parse from string
    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "album" => Some(Self::Album),
            "playlist" => Some(Self::Playlist),
            "track" => Some(Self::Track),
            "file" => Some(Self::File),
            "folder" => Some(Self::Folder),
            "storage" => Some(Self::Storage),
            "entry" => Some(Self::Entry),
            _ => None,
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
