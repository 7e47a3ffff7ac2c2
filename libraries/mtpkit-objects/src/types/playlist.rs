//! Playlist record type

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::{RecordKind, TrackIdList};
use crate::error::{ObjectError, Result};
use crate::fields::FieldAccess;
use crate::value::Value;

/// Metadata for one playlist container on a device
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Device-assigned object id
    pub playlist_id: u32,
    pub name: Option<String>,
    /// Member track ids, in play order
    pub tracks: TrackIdList,
}

impl Playlist {
    /// Create an empty playlist
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a member track id; negative indices count from the end
    pub fn track(&self, index: i64) -> Result<u32> {
        self.tracks.get(index)
    }

    /// Write a member track id, growing the list if needed
    pub fn set_track(&mut self, index: usize, id: u32) {
        self.tracks.set(index, id);
    }

    /// Three-way comparison by playlist id
    pub fn cmp_by_id(&self, other: &Self) -> Ordering {
        self.playlist_id.cmp(&other.playlist_id)
    }
}

impl FieldAccess for Playlist {
    const KIND: RecordKind = RecordKind::Playlist;

    const FIELDS: &'static [&'static str] = &["playlist_id", "name", "tracks"];

    fn field(&self, name: &str) -> Result<Value> {
        let value = match name {
            "playlist_id" => Value::from(self.playlist_id),
            "name" => Value::from(self.name.clone()),
            "tracks" => Value::from(self.tracks.to_vec()),
            _ => return Err(ObjectError::unknown_field(Self::KIND, name)),
        };
        Ok(value)
    }

    fn set_field(&mut self, name: &str, value: Value) -> Result<()> {
        match name {
            "playlist_id" => self.playlist_id = value.into_u32(name)?,
            "name" => self.name = value.into_text(name)?,
            "tracks" => self.tracks = TrackIdList::from(value.into_ids(name)?),
            _ => return Err(ObjectError::unknown_field(Self::KIND, name)),
        }
        Ok(())
    }
}
