//! Tagged union over the seven record kinds
//!
//! `Record` carries one record of any kind through code that does not
//! know the kind at compile time. Cross-kind comparison is the one
//! operation that can fail with a kind mismatch; everything else
//! delegates to the wrapped record.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::{Album, Entry, File, Folder, Playlist, RecordKind, Storage, Track};
use crate::error::{ObjectError, Result};
use crate::fields::FieldAccess;
use crate::value::Value;

/// One device-object record of any kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Record {
    /// An album container
    Album(Album),
    /// A playlist container
    Playlist(Playlist),
    /// An audio track
    Track(Track),
    /// A generic file
    File(File),
    /// A folder node
    Folder(Folder),
    /// A storage volume
    Storage(Storage),
    /// A supported-device entry
    Entry(Entry),
}

impl Record {
    /// Create an empty record of the given kind
    pub fn new(kind: RecordKind) -> Self {
        match kind {
            RecordKind::Album => Self::Album(Album::new()),
            RecordKind::Playlist => Self::Playlist(Playlist::new()),
            RecordKind::Track => Self::Track(Track::new()),
            RecordKind::File => Self::File(File::new()),
            RecordKind::Folder => Self::Folder(Folder::new()),
            RecordKind::Storage => Self::Storage(Storage::new()),
            RecordKind::Entry => Self::Entry(Entry::new()),
        }
    }

    /// Construct a record of the given kind from an ordered mapping
    pub fn from_fields<I, K>(kind: RecordKind, pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, Value)>,
        K: AsRef<str>,
    {
        let record = match kind {
            RecordKind::Album => Self::Album(Album::from_fields(pairs)?),
            RecordKind::Playlist => Self::Playlist(Playlist::from_fields(pairs)?),
            RecordKind::Track => Self::Track(Track::from_fields(pairs)?),
            RecordKind::File => Self::File(File::from_fields(pairs)?),
            RecordKind::Folder => Self::Folder(Folder::from_fields(pairs)?),
            RecordKind::Storage => Self::Storage(Storage::from_fields(pairs)?),
            RecordKind::Entry => Self::Entry(Entry::from_fields(pairs)?),
        };
        Ok(record)
    }

    /// The kind of the wrapped record
    pub fn kind(&self) -> RecordKind {
        match self {
            Self::Album(_) => RecordKind::Album,
            Self::Playlist(_) => RecordKind::Playlist,
            Self::Track(_) => RecordKind::Track,
            Self::File(_) => RecordKind::File,
            Self::Folder(_) => RecordKind::Folder,
            Self::Storage(_) => RecordKind::Storage,
            Self::Entry(_) => RecordKind::Entry,
        }
    }

    /// Recognized field names for the wrapped record, in declared order
    pub fn field_names(&self) -> &'static [&'static str] {
        match self {
            Self::Album(_) => Album::FIELDS,
            Self::Playlist(_) => Playlist::FIELDS,
            Self::Track(_) => Track::FIELDS,
            Self::File(_) => File::FIELDS,
            Self::Folder(_) => Folder::FIELDS,
            Self::Storage(_) => Storage::FIELDS,
            Self::Entry(_) => Entry::FIELDS,
        }
    }

    /// Current value of a declared field
    pub fn field(&self, name: &str) -> Result<Value> {
        match self {
            Self::Album(r) => r.field(name),
            Self::Playlist(r) => r.field(name),
            Self::Track(r) => r.field(name),
            Self::File(r) => r.field(name),
            Self::Folder(r) => r.field(name),
            Self::Storage(r) => r.field(name),
            Self::Entry(r) => r.field(name),
        }
    }

    /// Assign a declared field
    pub fn set_field(&mut self, name: &str, value: Value) -> Result<()> {
        match self {
            Self::Album(r) => r.set_field(name, value),
            Self::Playlist(r) => r.set_field(name, value),
            Self::Track(r) => r.set_field(name, value),
            Self::File(r) => r.set_field(name, value),
            Self::Folder(r) => r.set_field(name, value),
            Self::Storage(r) => r.set_field(name, value),
            Self::Entry(r) => r.set_field(name, value),
        }
    }

    /// Project every declared field as a name/value pair
    pub fn to_fields(&self) -> Vec<(&'static str, Value)> {
        match self {
            Self::Album(r) => r.to_fields(),
            Self::Playlist(r) => r.to_fields(),
            Self::Track(r) => r.to_fields(),
            Self::File(r) => r.to_fields(),
            Self::Folder(r) => r.to_fields(),
            Self::Storage(r) => r.to_fields(),
            Self::Entry(r) => r.to_fields(),
        }
    }

    /// Three-way comparison by primary identifier.
    ///
    /// Fails with [`ObjectError::KindMismatch`] when the records are of
    /// different kinds.
    pub fn compare(&self, other: &Self) -> Result<Ordering> {
        match (self, other) {
            (Self::Album(a), Self::Album(b)) => Ok(a.cmp_by_id(b)),
            (Self::Playlist(a), Self::Playlist(b)) => Ok(a.cmp_by_id(b)),
            (Self::Track(a), Self::Track(b)) => Ok(a.cmp_by_id(b)),
            (Self::File(a), Self::File(b)) => Ok(a.cmp_by_id(b)),
            (Self::Folder(a), Self::Folder(b)) => Ok(a.cmp_by_id(b)),
            (Self::Storage(a), Self::Storage(b)) => Ok(a.cmp_by_id(b)),
            (Self::Entry(a), Self::Entry(b)) => Ok(a.cmp_by_id(b)),
            _ => Err(ObjectError::kind_mismatch(self.kind(), other.kind())),
        }
    }
}

impl From<Album> for Record {
    fn from(r: Album) -> Self {
        Self::Album(r)
    }
}

impl From<Playlist> for Record {
    fn from(r: Playlist) -> Self {
        Self::Playlist(r)
    }
}

impl From<Track> for Record {
    fn from(r: Track) -> Self {
        Self::Track(r)
    }
}

impl From<File> for Record {
    fn from(r: File) -> Self {
        Self::File(r)
    }
}

impl From<Folder> for Record {
    fn from(r: Folder) -> Self {
        Self::Folder(r)
    }
}

impl From<Storage> for Record {
    fn from(r: Storage) -> Self {
        Self::Storage(r)
    }
}

impl From<Entry> for Record {
    fn from(r: Entry) -> Self {
        Self::Entry(r)
    }
}
