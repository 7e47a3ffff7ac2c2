//! Album record type

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::{RecordKind, TrackIdList};
use crate::error::{ObjectError, Result};
use crate::fields::FieldAccess;
use crate::value::Value;

/// Metadata for one album container on a device.
///
/// The embedded [`TrackIdList`] holds the member track ids and grows on
/// index assignment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    /// Device-assigned object id
    pub album_id: u32,
    pub name: Option<String>,
    pub artist: Option<String>,
    pub genre: Option<String>,
    /// Member track ids, in album order
    pub tracks: TrackIdList,
}

impl Album {
    /// Create an empty album
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

    /// Three-way comparison by album id
    pub fn cmp_by_id(&self, other: &Self) -> Ordering {
        self.album_id.cmp(&other.album_id)
    }
}

impl FieldAccess for Album {
    const KIND: RecordKind = RecordKind::Album;

    const FIELDS: &'static [&'static str] = &["album_id", "name", "artist", "genre", "tracks"];

    fn field(&self, name: &str) -> Result<Value> {
        let value = match name {
            "album_id" => Value::from(self.album_id),
            "name" => Value::from(self.name.clone()),
            "artist" => Value::from(self.artist.clone()),
            "genre" => Value::from(self.genre.clone()),
            "tracks" => Value::from(self.tracks.to_vec()),
            _ => return Err(ObjectError::unknown_field(Self::KIND, name)),
        };
        Ok(value)
    }

    fn set_field(&mut self, name: &str, value: Value) -> Result<()> {
        match name {
            "album_id" => self.album_id = value.into_u32(name)?,
            "name" => self.name = value.into_text(name)?,
            "artist" => self.artist = value.into_text(name)?,
            "genre" => self.genre = value.into_text(name)?,
            "tracks" => self.tracks = TrackIdList::from(value.into_ids(name)?),
            _ => return Err(ObjectError::unknown_field(Self::KIND, name)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_list_grows_on_assignment() {
        let mut album = Album::new();
        album.set_track(0, 10);
        album.set_track(3, 20);

        assert_eq!(album.tracks.len(), 4);
        assert_eq!(album.tracks.as_slice(), &[10, 0, 0, 20]);
        assert_eq!(album.track(-1), Ok(20));
    }

    #[test]
    fn tracks_field_round_trips() {
        let album = Album::from_fields([
            ("album_id", Value::from(5u32)),
            ("name", Value::from("Greatest Hits")),
            ("tracks", Value::from(vec![7, 8, 9])),
        ])
        .unwrap();

        assert_eq!(album.tracks.as_slice(), &[7, 8, 9]);
        assert_eq!(album.field("tracks"), Ok(Value::Ids(vec![7, 8, 9])));
    }

    #[test]
    fn compare_by_album_id() {
        let mut a = Album::new();
        let mut b = Album::new();
        a.album_id = 2;
        b.album_id = 2;
        assert_eq!(a.cmp_by_id(&b), Ordering::Equal);
    }
}
