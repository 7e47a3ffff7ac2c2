mod album;
mod entry;
mod file;
mod folder;
mod kind;
mod playlist;
mod record;
mod storage;
mod track;
mod track_list;

pub use album::Album;
pub use entry::Entry;
pub use file::File;
pub use folder::Folder;
pub use kind::RecordKind;
pub use playlist::Playlist;
pub use record::Record;
pub use storage::Storage;
pub use track::Track;
pub use track_list::TrackIdList;
