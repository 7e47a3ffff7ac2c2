//! Storage-volume record type

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::RecordKind;
use crate::error::{ObjectError, Result};
use crate::fields::FieldAccess;
use crate::value::Value;

/// Metadata for one storage volume on a device.
///
/// Capacity and free-space figures are full 64-bit quantities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Storage {
    /// Device-assigned volume id
    pub storage_id: u32,
    pub storage_type: u16,
    pub filesystem_type: u16,
    pub access_capability: u16,
    pub max_capacity: u64,
    pub free_space_in_bytes: u64,
    pub free_space_in_objects: u64,
    pub description: Option<String>,
    pub volume_id: Option<String>,
}

impl Storage {
    /// Create an empty storage record
    pub fn new() -> Self {
        Self::default()
    }

    /// Three-way comparison by storage id
    pub fn cmp_by_id(&self, other: &Self) -> Ordering {
        self.storage_id.cmp(&other.storage_id)
    }
}

impl FieldAccess for Storage {
    const KIND: RecordKind = RecordKind::Storage;

    const FIELDS: &'static [&'static str] = &[
        "storage_id",
        "storage_type",
        "filesystem_type",
        "access_capability",
        "max_capacity",
        "free_space_in_bytes",
        "free_space_in_objects",
        "description",
        "volume_id",
    ];

    fn field(&self, name: &str) -> Result<Value> {
        let value = match name {
            "storage_id" => Value::from(self.storage_id),
            "storage_type" => Value::from(self.storage_type),
            "filesystem_type" => Value::from(self.filesystem_type),
            "access_capability" => Value::from(self.access_capability),
            "max_capacity" => Value::from(self.max_capacity),
            "free_space_in_bytes" => Value::from(self.free_space_in_bytes),
            "free_space_in_objects" => Value::from(self.free_space_in_objects),
            "description" => Value::from(self.description.clone()),
            "volume_id" => Value::from(self.volume_id.clone()),
            _ => return Err(ObjectError::unknown_field(Self::KIND, name)),
        };
        Ok(value)
    }

    fn set_field(&mut self, name: &str, value: Value) -> Result<()> {
        match name {
            "storage_id" => self.storage_id = value.into_u32(name)?,
            "storage_type" => self.storage_type = value.into_u16(name)?,
            "filesystem_type" => self.filesystem_type = value.into_u16(name)?,
            "access_capability" => self.access_capability = value.into_u16(name)?,
            "max_capacity" => self.max_capacity = value.into_u64(name)?,
            "free_space_in_bytes" => self.free_space_in_bytes = value.into_u64(name)?,
            "free_space_in_objects" => self.free_space_in_objects = value.into_u64(name)?,
            "description" => self.description = value.into_text(name)?,
            "volume_id" => self.volume_id = value.into_text(name)?,
            _ => return Err(ObjectError::unknown_field(Self::KIND, name)),
        }
        Ok(())
    }
}
