//! Runtime keyed access to record fields
//!
//! Every record kind exposes its fields as typed struct members; this
//! trait is the secondary path for data that arrives as a dynamic
//! key/value mapping. Field names are validated against the kind's
//! whitelist and unknown names fail with [`ObjectError::UnknownField`].

use crate::error::{ObjectError, Result};
use crate::types::RecordKind;
use crate::value::Value;

/// Keyed field access for one record kind
pub trait FieldAccess: Default {
    /// The record kind implementing this interface
    const KIND: RecordKind;

    /// Recognized field names, in declared order
    const FIELDS: &'static [&'static str];

    /// Current value of a declared field.
    ///
    /// Absent string fields read as [`Value::Null`] rather than failing.
    fn field(&self, name: &str) -> Result<Value>;

    /// Assign a declared field.
    ///
    /// String fields treat null and the empty string as "clear"; numeric
    /// fields reject values outside their declared width.
    fn set_field(&mut self, name: &str, value: Value) -> Result<()>;

    /// Construct a record from an ordered mapping of field names to values.
    ///
    /// Construction is atomic: pairs are applied to a fresh record that is
    /// discarded if any name or value is rejected, so a failure observes
    /// no partial mutation.
    fn from_fields<I, K>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, Value)>,
        K: AsRef<str>,
    {
        let mut record = Self::default();
        for (name, value) in pairs {
            record.set_field(name.as_ref(), value)?;
        }
        Ok(record)
    }

    /// Construct a record from a deserialized JSON object
    fn from_json(map: &serde_json::Map<String, serde_json::Value>) -> Result<Self> {
        let mut record = Self::default();
        for (name, value) in map {
            let value = Value::from_json(value).ok_or_else(|| ObjectError::WrongValueType {
                field: name.clone(),
                expected: "null, an unsigned integer, a string, or an id array",
            })?;
            record.set_field(name, value)?;
        }
        Ok(record)
    }

    /// Project every declared field as a name/value pair, in declared order
    fn to_fields(&self) -> Vec<(&'static str, Value)> {
        Self::FIELDS
            .iter()
            .map(|name| (*name, self.field(name).unwrap_or(Value::Null)))
            .collect()
    }

    /// Project every declared field into a JSON object
    fn to_json(&self) -> serde_json::Value {
        let mut map = serde_json::Map::new();
        for (name, value) in self.to_fields() {
            map.insert(name.to_string(), value.into_json());
        }
        serde_json::Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Folder;

    #[test]
    fn to_fields_follows_declared_order() {
        let folder = Folder::new();
        let names: Vec<_> = folder.to_fields().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, Folder::FIELDS);
    }

    #[test]
    fn from_json_object() {
        let json = serde_json::json!({
            "folder_id": 7,
            "parent_id": 1,
            "name": "Music",
        });
        let folder = Folder::from_json(json.as_object().unwrap()).unwrap();
        assert_eq!(folder.folder_id, 7);
        assert_eq!(folder.name.as_deref(), Some("Music"));
    }

    #[test]
    fn from_json_rejects_unsupported_value() {
        let json = serde_json::json!({ "folder_id": true });
        let err = Folder::from_json(json.as_object().unwrap()).unwrap_err();
        assert!(matches!(err, ObjectError::WrongValueType { .. }));
    }

    #[test]
    fn json_projection_round_trips() {
        let mut folder = Folder::new();
        folder.folder_id = 3;
        folder.name = Some("Podcasts".to_string());

        let json = folder.to_json();
        let back = Folder::from_json(json.as_object().unwrap()).unwrap();
        assert_eq!(back, folder);
    }
}
