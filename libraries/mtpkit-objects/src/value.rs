//! Dynamic field values
//!
//! `Value` is the unit of exchange for the runtime keyed interface on
//! record types. Typed struct fields are the primary access path; `Value`
//! exists for data that genuinely arrives as a dynamic mapping, such as
//! deserialized input.

use serde::{Deserialize, Serialize};

use crate::error::{ObjectError, Result};

/// A dynamically typed field value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Absent string field or explicit null
    Null,
    /// Any unsigned numeric field, widened to 64 bits
    Unsigned(u64),
    /// A string field
    Text(String),
    /// An embedded track-id list
    Ids(Vec<u32>),
}

impl Value {
    /// True if this is `Value::Null`
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The numeric value, if this is `Value::Unsigned`
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Unsigned(v) => Some(*v),
            _ => None,
        }
    }

    /// The string value, if this is `Value::Text`
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Convert a JSON value into a field value.
    ///
    /// Returns `None` for JSON shapes no field accepts (floats, negative
    /// numbers, booleans, nested objects).
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Null => Some(Self::Null),
            serde_json::Value::Number(n) => n.as_u64().map(Self::Unsigned),
            serde_json::Value::String(s) => Some(Self::Text(s.clone())),
            serde_json::Value::Array(items) => {
                let mut ids = Vec::with_capacity(items.len());
                for item in items {
                    let id = u32::try_from(item.as_u64()?).ok()?;
                    ids.push(id);
                }
                Some(Self::Ids(ids))
            }
            _ => None,
        }
    }

    /// Convert this field value into a JSON value
    pub fn into_json(self) -> serde_json::Value {
        match self {
            Self::Null => serde_json::Value::Null,
            Self::Unsigned(v) => serde_json::Value::from(v),
            Self::Text(s) => serde_json::Value::String(s),
            Self::Ids(ids) => serde_json::Value::from(ids),
        }
    }

    /// Coerce to a u64 field
    pub(crate) fn into_u64(self, field: &str) -> Result<u64> {
        match self {
            Self::Unsigned(v) => Ok(v),
            _ => Err(ObjectError::WrongValueType {
                field: field.to_string(),
                expected: "an unsigned integer",
            }),
        }
    }

    /// Coerce to a u32 field, rejecting values outside the declared width
    pub(crate) fn into_u32(self, field: &str) -> Result<u32> {
        let value = self.into_u64(field)?;
        u32::try_from(value).map_err(|_| ObjectError::ValueOutOfRange {
            field: field.to_string(),
            value,
        })
    }

    /// Coerce to a u16 field, rejecting values outside the declared width
    pub(crate) fn into_u16(self, field: &str) -> Result<u16> {
        let value = self.into_u64(field)?;
        u16::try_from(value).map_err(|_| ObjectError::ValueOutOfRange {
            field: field.to_string(),
            value,
        })
    }

    /// Coerce to a string field.
    ///
    /// Null and the empty string both clear the field; a record never
    /// stores an empty string.
    pub(crate) fn into_text(self, field: &str) -> Result<Option<String>> {
        match self {
            Self::Null => Ok(None),
            Self::Text(s) if s.is_empty() => Ok(None),
            Self::Text(s) => Ok(Some(s)),
            _ => Err(ObjectError::WrongValueType {
                field: field.to_string(),
                expected: "a string or null",
            }),
        }
    }

    /// Coerce to an embedded id-list field
    pub(crate) fn into_ids(self, field: &str) -> Result<Vec<u32>> {
        match self {
            Self::Ids(ids) => Ok(ids),
            _ => Err(ObjectError::WrongValueType {
                field: field.to_string(),
                expected: "an array of track ids",
            }),
        }
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Self::Unsigned(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Self::Unsigned(u64::from(v))
    }
}

impl From<u16> for Value {
    fn from(v: u16) -> Self {
        Self::Unsigned(u64::from(v))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Option<String>> for Value {
    fn from(s: Option<String>) -> Self {
        match s {
            Some(s) => Self::Text(s),
            None => Self::Null,
        }
    }
}

impl From<Vec<u32>> for Value {
    fn from(ids: Vec<u32>) -> Self {
        Self::Ids(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_round_trip() {
        let cases = [
            Value::Null,
            Value::Unsigned(5_000_000_000),
            Value::Text("Song".to_string()),
            Value::Ids(vec![1, 2, 3]),
        ];
        for value in cases {
            let json = value.clone().into_json();
            assert_eq!(Value::from_json(&json), Some(value));
        }
    }

    #[test]
    fn json_rejects_unsupported_shapes() {
        assert_eq!(Value::from_json(&serde_json::json!(true)), None);
        assert_eq!(Value::from_json(&serde_json::json!(1.5)), None);
        assert_eq!(Value::from_json(&serde_json::json!(-1)), None);
        assert_eq!(Value::from_json(&serde_json::json!({"a": 1})), None);
        assert_eq!(Value::from_json(&serde_json::json!([1, "x"])), None);
    }

    #[test]
    fn narrowing_rejects_wide_values() {
        let err = Value::Unsigned(70_000).into_u16("channels").unwrap_err();
        assert_eq!(
            err,
            ObjectError::ValueOutOfRange {
                field: "channels".to_string(),
                value: 70_000,
            }
        );
        assert_eq!(Value::Unsigned(70_000).into_u32("duration"), Ok(70_000));
    }

    #[test]
    fn empty_text_clears() {
        assert_eq!(Value::Text(String::new()).into_text("title"), Ok(None));
        assert_eq!(Value::Null.into_text("title"), Ok(None));
        assert_eq!(
            Value::Text("x".to_string()).into_text("title"),
            Ok(Some("x".to_string()))
        );
    }
}
