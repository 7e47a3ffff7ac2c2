//! Folder record type

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::RecordKind;
use crate::error::{ObjectError, Result};
use crate::fields::FieldAccess;
use crate::value::Value;

/// Metadata for one folder on a device.
///
/// Folders form a forest through `parent_id`; the tree shape of a native
/// enumeration is carried by [`crate::listing::FolderNode`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    /// Device-assigned object id
    pub folder_id: u32,
    /// Object id of the parent folder, zero at the root
    pub parent_id: u32,
    pub name: Option<String>,
}

impl Folder {
    /// Create an empty folder record
    pub fn new() -> Self {
        Self::default()
    }

    /// Three-way comparison by folder id
    pub fn cmp_by_id(&self, other: &Self) -> Ordering {
        self.folder_id.cmp(&other.folder_id)
    }
}

impl FieldAccess for Folder {
    const KIND: RecordKind = RecordKind::Folder;

    const FIELDS: &'static [&'static str] = &["folder_id", "parent_id", "name"];

    fn field(&self, name: &str) -> Result<Value> {
        let value = match name {
            "folder_id" => Value::from(self.folder_id),
            "parent_id" => Value::from(self.parent_id),
            "name" => Value::from(self.name.clone()),
            _ => return Err(ObjectError::unknown_field(Self::KIND, name)),
        };
        Ok(value)
    }

    fn set_field(&mut self, name: &str, value: Value) -> Result<()> {
        match name {
            "folder_id" => self.folder_id = value.into_u32(name)?,
            "parent_id" => self.parent_id = value.into_u32(name)?,
            "name" => self.name = value.into_text(name)?,
            _ => return Err(ObjectError::unknown_field(Self::KIND, name)),
        }
        Ok(())
    }
}
