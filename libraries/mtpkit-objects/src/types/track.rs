//! Track record type

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::RecordKind;
use crate::error::{ObjectError, Result};
use crate::fields::FieldAccess;
use crate::value::Value;

/// Metadata for one audio track on a device
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Device-assigned object id
    pub track_id: u32,
    /// Object id of the containing folder
    pub parent_id: u32,
    pub title: Option<String>,
    pub artist: Option<String>,
    pub genre: Option<String>,
    pub album: Option<String>,
    pub date: Option<String>,
    /// Track number within its album
    pub number: u16,
    /// Duration in milliseconds
    pub duration: u32,
    /// Sample rate in Hz
    pub rate: u32,
    pub channels: u16,
    pub codec: u32,
    pub bitrate: u32,
    pub bitrate_type: u16,
    pub rating: u16,
    pub use_count: u32,
    pub file_name: Option<String>,
    pub file_size: u64,
    pub file_type: u32,
}

impl Track {
    /// Create an empty track (numeric fields zero, string fields absent)
    pub fn new() -> Self {
        Self::default()
    }

    /// Three-way comparison by track id
    pub fn cmp_by_id(&self, other: &Self) -> Ordering {
        self.track_id.cmp(&other.track_id)
    }
}

impl FieldAccess for Track {
    const KIND: RecordKind = RecordKind::Track;

    const FIELDS: &'static [&'static str] = &[
        "track_id",
        "parent_id",
        "title",
        "artist",
        "genre",
        "album",
        "date",
        "number",
        "duration",
        "rate",
        "channels",
        "codec",
        "bitrate",
        "bitrate_type",
        "rating",
        "use_count",
        "file_name",
        "file_size",
        "file_type",
    ];

    fn field(&self, name: &str) -> Result<Value> {
        let value = match name {
            "track_id" => Value::from(self.track_id),
            "parent_id" => Value::from(self.parent_id),
            "title" => Value::from(self.title.clone()),
            "artist" => Value::from(self.artist.clone()),
            "genre" => Value::from(self.genre.clone()),
            "album" => Value::from(self.album.clone()),
            "date" => Value::from(self.date.clone()),
            "number" => Value::from(self.number),
            "duration" => Value::from(self.duration),
            "rate" => Value::from(self.rate),
            "channels" => Value::from(self.channels),
            "codec" => Value::from(self.codec),
            "bitrate" => Value::from(self.bitrate),
            "bitrate_type" => Value::from(self.bitrate_type),
            "rating" => Value::from(self.rating),
            "use_count" => Value::from(self.use_count),
            "file_name" => Value::from(self.file_name.clone()),
            "file_size" => Value::from(self.file_size),
            "file_type" => Value::from(self.file_type),
            _ => return Err(ObjectError::unknown_field(Self::KIND, name)),
        };
        Ok(value)
    }

    fn set_field(&mut self, name: &str, value: Value) -> Result<()> {
        match name {
            "track_id" => self.track_id = value.into_u32(name)?,
            "parent_id" => self.parent_id = value.into_u32(name)?,
            "title" => self.title = value.into_text(name)?,
            "artist" => self.artist = value.into_text(name)?,
            "genre" => self.genre = value.into_text(name)?,
            "album" => self.album = value.into_text(name)?,
            "date" => self.date = value.into_text(name)?,
            "number" => self.number = value.into_u16(name)?,
            "duration" => self.duration = value.into_u32(name)?,
            "rate" => self.rate = value.into_u32(name)?,
            "channels" => self.channels = value.into_u16(name)?,
            "codec" => self.codec = value.into_u32(name)?,
            "bitrate" => self.bitrate = value.into_u32(name)?,
            "bitrate_type" => self.bitrate_type = value.into_u16(name)?,
            "rating" => self.rating = value.into_u16(name)?,
            "use_count" => self.use_count = value.into_u32(name)?,
            "file_name" => self.file_name = value.into_text(name)?,
            "file_size" => self.file_size = value.into_u64(name)?,
            "file_type" => self.file_type = value.into_u32(name)?,
            _ => return Err(ObjectError::unknown_field(Self::KIND, name)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construct_from_mapping() {
        let track = Track::from_fields([
            ("title", Value::from("Song")),
            ("file_size", Value::from(1024u64)),
            ("file_type", Value::from(3u32)),
        ])
        .unwrap();

        assert_eq!(track.title.as_deref(), Some("Song"));
        assert!(track.artist.is_none());
        assert_eq!(track.file_size, 1024);
        assert_eq!(track.file_type, 3);
    }

    #[test]
    fn unknown_field_is_rejected() {
        let err = Track::new()
            .set_field("bogus_field", Value::from(1u32))
            .unwrap_err();
        assert_eq!(err, ObjectError::unknown_field(RecordKind::Track, "bogus_field"));
    }

    #[test]
    fn empty_string_clears_field() {
        let mut track = Track::new();
        track.set_field("artist", Value::from("Band")).unwrap();
        assert_eq!(track.artist.as_deref(), Some("Band"));

        track.set_field("artist", Value::from("")).unwrap();
        assert!(track.artist.is_none());
        assert_eq!(track.field("artist"), Ok(Value::Null));
    }

    #[test]
    fn narrow_field_rejects_wide_value() {
        let mut track = Track::new();
        let err = track
            .set_field("number", Value::from(100_000u64))
            .unwrap_err();
        assert!(matches!(err, ObjectError::ValueOutOfRange { .. }));
        // Nothing was written
        assert_eq!(track.number, 0);
    }

    #[test]
    fn compare_by_track_id() {
        let mut a = Track::new();
        let mut b = Track::new();
        a.track_id = 1;
        b.track_id = 2;
        // Differing metadata does not affect the ordering
        a.title = Some("Z".to_string());
        b.title = Some("A".to_string());

        assert_eq!(a.cmp_by_id(&b), Ordering::Less);
        assert_eq!(b.cmp_by_id(&a), Ordering::Greater);
        assert_eq!(a.cmp_by_id(&a), Ordering::Equal);
    }

    #[test]
    fn clone_shares_nothing() {
        let mut source = Track::new();
        source.title = Some("Original".to_string());

        let mut copy = source.clone();
        copy.title = Some("Changed".to_string());

        assert_eq!(source.title.as_deref(), Some("Original"));
    }
}
