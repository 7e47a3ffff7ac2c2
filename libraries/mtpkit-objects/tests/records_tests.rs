//! Integration tests for record construction, field access, and listings

use std::cmp::Ordering;

use mtpkit_objects::{
    materialize, Album, ChainNode, FieldAccess, ObjectError, Record, RecordKind, Storage, Track,
    Value,
};

#[test]
fn track_from_mapping_scenario() {
    let track = Track::from_fields([
        ("title", Value::from("Song")),
        ("file_size", Value::from(1024u64)),
        ("file_type", Value::from(3u32)),
    ])
    .unwrap();

    assert_eq!(track.field("title"), Ok(Value::from("Song")));
    assert_eq!(track.field("artist"), Ok(Value::Null));
    assert_eq!(track.field("file_size"), Ok(Value::Unsigned(1024)));
}

#[test]
fn album_index_assignment_scenario() {
    let mut album = Album::new();
    album.set_track(0, 10);
    album.set_track(3, 20);

    assert_eq!(album.tracks.len(), 4);
    assert_eq!(album.tracks.as_slice(), &[10, 0, 0, 20]);
}

#[test]
fn storage_capacity_is_a_full_64_bit_value() {
    let mut storage = Storage::new();
    storage
        .set_field("max_capacity", Value::from(5_000_000_000u64))
        .unwrap();
    assert_eq!(
        storage.field("max_capacity"),
        Ok(Value::Unsigned(5_000_000_000))
    );
}

#[test]
fn unknown_field_leaves_other_fields_unchanged() {
    let mut track = Track::new();
    track.set_field("title", Value::from("Keep me")).unwrap();
    track.set_field("rating", Value::from(5u16)).unwrap();

    let before = track.clone();
    let err = track.set_field("bogus_field", Value::from(1u32)).unwrap_err();

    assert_eq!(
        err,
        ObjectError::unknown_field(RecordKind::Track, "bogus_field")
    );
    assert_eq!(track, before);
}

#[test]
fn failed_construction_yields_no_record() {
    let result = Track::from_fields([
        ("title", Value::from("Song")),
        ("bogus_field", Value::from(1u32)),
    ]);
    assert!(matches!(result, Err(ObjectError::UnknownField { .. })));
}

#[test]
fn negative_indexing_mirrors_positive() {
    let mut album = Album::new();
    for (i, id) in [11, 12, 13].into_iter().enumerate() {
        album.set_track(i, id);
    }

    let len = album.tracks.len() as i64;
    assert_eq!(album.track(-1), album.track(len - 1));
    assert!(album.track(len).is_err());
    assert!(album.track(-(len + 1)).is_err());
}

#[test]
fn materialized_listing_sorts_by_id() {
    let head = ChainNode::from_objects([5u32, 1, 3].map(|id| {
        let mut track = Track::new();
        track.track_id = id;
        track
    }));

    let mut tracks = materialize(head);
    assert_eq!(tracks.len(), 3);

    // Source order is preserved; sorting is the caller's choice
    let ids: Vec<_> = tracks.iter().map(|t| t.track_id).collect();
    assert_eq!(ids, vec![5, 1, 3]);

    tracks.sort_by(|a, b| a.cmp_by_id(b));
    let ids: Vec<_> = tracks.iter().map(|t| t.track_id).collect();
    assert_eq!(ids, vec![1, 3, 5]);
}

#[test]
fn dynamic_records_compare_only_within_a_kind() {
    let mut a = Track::new();
    a.track_id = 7;
    let a = Record::from(a);

    let b = Record::from_fields(RecordKind::Track, [("track_id", Value::from(9u32))]).unwrap();
    assert_eq!(a.compare(&b), Ok(Ordering::Less));

    let folder = Record::new(RecordKind::Folder);
    assert_eq!(
        a.compare(&folder),
        Err(ObjectError::kind_mismatch(
            RecordKind::Track,
            RecordKind::Folder
        ))
    );
}

#[test]
fn projection_covers_every_declared_field() {
    for kind in [
        RecordKind::Album,
        RecordKind::Playlist,
        RecordKind::Track,
        RecordKind::File,
        RecordKind::Folder,
        RecordKind::Storage,
        RecordKind::Entry,
    ] {
        let record = Record::new(kind);
        let names: Vec<_> = record.to_fields().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, record.field_names(), "{kind} projection mismatch");
    }
}
