//! mtpkit Objects
//!
//! Platform-agnostic domain types for MTP-style device objects.
//!
//! This crate models the metadata objects a portable media device exposes
//! (tracks, files, folders, albums, playlists, storage volumes, and
//! supported-device entries) as plain owned values, independent of any
//! transport or protocol layer.
//!
//! # Architecture
//!
//! The crate defines:
//! - **Record Types**: `Track`, `File`, `Folder`, `Album`, `Playlist`,
//!   `Storage`, `Entry` - one struct per record kind, plus the `Record`
//!   tagged union over all of them
//! - **Dynamic Fields**: the `FieldAccess` trait and `Value` union for
//!   data arriving as a runtime key/value mapping
//! - **Listings**: `ChainNode`/`FolderNode` and `materialize` for turning
//!   linked enumeration results into owned collections
//! - **Error Handling**: unified `ObjectError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use mtpkit_objects::{Album, FieldAccess, Track, Value};
//!
//! // Build a track from a dynamic mapping
//! let track = Track::from_fields([
//!     ("title", Value::from("Song")),
//!     ("file_size", Value::from(1024u64)),
//! ])
//! .unwrap();
//! assert_eq!(track.title.as_deref(), Some("Song"));
//!
//! // Album track lists grow on index assignment
//! let mut album = Album::new();
//! album.tracks.set(3, 20);
//! assert_eq!(album.tracks.len(), 4);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod fields;
pub mod listing;
pub mod types;
pub mod value;

// Re-export commonly used types
pub use error::{ObjectError, Result};
pub use fields::FieldAccess;
pub use listing::{materialize, try_materialize, ChainNode, FolderNode, Linked};
pub use value::Value;

// Export all record types
pub use types::{
    Album, Entry, File, Folder, Playlist, Record, RecordKind, Storage, Track, TrackIdList,
};
