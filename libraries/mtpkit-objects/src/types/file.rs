//! File record type

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::RecordKind;
use crate::error::{ObjectError, Result};
use crate::fields::FieldAccess;
use crate::value::Value;

/// Metadata for one file object on a device
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
    /// Device-assigned object id
    pub file_id: u32,
    /// Object id of the containing folder
    pub parent_id: u32,
    pub file_name: Option<String>,
    pub file_size: u64,
    pub file_type: u32,
}

impl File {
    /// Create an empty file record
    pub fn new() -> Self {
        Self::default()
    }

    /// Three-way comparison by file id
    pub fn cmp_by_id(&self, other: &Self) -> Ordering {
        self.file_id.cmp(&other.file_id)
    }
}

impl FieldAccess for File {
    const KIND: RecordKind = RecordKind::File;

    const FIELDS: &'static [&'static str] =
        &["file_id", "parent_id", "file_name", "file_size", "file_type"];

    fn field(&self, name: &str) -> Result<Value> {
        let value = match name {
            "file_id" => Value::from(self.file_id),
            "parent_id" => Value::from(self.parent_id),
            "file_name" => Value::from(self.file_name.clone()),
            "file_size" => Value::from(self.file_size),
            "file_type" => Value::from(self.file_type),
            _ => return Err(ObjectError::unknown_field(Self::KIND, name)),
        };
        Ok(value)
    }

    fn set_field(&mut self, name: &str, value: Value) -> Result<()> {
        match name {
            "file_id" => self.file_id = value.into_u32(name)?,
            "parent_id" => self.parent_id = value.into_u32(name)?,
            "file_name" => self.file_name = value.into_text(name)?,
            "file_size" => self.file_size = value.into_u64(name)?,
            "file_type" => self.file_type = value.into_u32(name)?,
            _ => return Err(ObjectError::unknown_field(Self::KIND, name)),
        }
        Ok(())
    }
}
