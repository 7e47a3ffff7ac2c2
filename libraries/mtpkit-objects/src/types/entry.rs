//! Supported-device entry record type

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::RecordKind;
use crate::error::{ObjectError, Result};
use crate::fields::FieldAccess;
use crate::value::Value;

/// One entry in the table of supported devices.
///
/// Entries order by vendor id, then by product id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// USB vendor id
    pub vendor_id: u16,
    /// USB product id
    pub product_id: u16,
    /// Device quirk flags
    pub flags: u32,
    pub vendor: Option<String>,
    pub product: Option<String>,
}

impl Entry {
    /// Create an empty entry
    pub fn new() -> Self {
        Self::default()
    }

    /// Three-way comparison by vendor id, breaking ties on product id
    pub fn cmp_by_id(&self, other: &Self) -> Ordering {
        self.vendor_id
            .cmp(&other.vendor_id)
            .then(self.product_id.cmp(&other.product_id))
    }
}

impl FieldAccess for Entry {
    const KIND: RecordKind = RecordKind::Entry;

    const FIELDS: &'static [&'static str] =
        &["vendor_id", "product_id", "flags", "vendor", "product"];

    fn field(&self, name: &str) -> Result<Value> {
        let value = match name {
            "vendor_id" => Value::from(self.vendor_id),
            "product_id" => Value::from(self.product_id),
            "flags" => Value::from(self.flags),
            "vendor" => Value::from(self.vendor.clone()),
            "product" => Value::from(self.product.clone()),
            _ => return Err(ObjectError::unknown_field(Self::KIND, name)),
        };
        Ok(value)
    }

    fn set_field(&mut self, name: &str, value: Value) -> Result<()> {
        match name {
            "vendor_id" => self.vendor_id = value.into_u16(name)?,
            "product_id" => self.product_id = value.into_u16(name)?,
            "flags" => self.flags = value.into_u32(name)?,
            "vendor" => self.vendor = value.into_text(name)?,
            "product" => self.product = value.into_text(name)?,
            _ => return Err(ObjectError::unknown_field(Self::KIND, name)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_by_vendor_then_product() {
        let mut a = Entry::new();
        let mut b = Entry::new();

        a.vendor_id = 0x041e;
        b.vendor_id = 0x0471;
        assert_eq!(a.cmp_by_id(&b), Ordering::Less);

        b.vendor_id = a.vendor_id;
        a.product_id = 0x4101;
        b.product_id = 0x4102;
        assert_eq!(a.cmp_by_id(&b), Ordering::Less);

        b.product_id = a.product_id;
        assert_eq!(a.cmp_by_id(&b), Ordering::Equal);
    }

    #[test]
    fn construct_from_mapping() {
        let entry = Entry::from_fields([
            ("vendor", Value::from("Creative")),
            ("vendor_id", Value::from(0x041eu16)),
            ("product", Value::from("Zen")),
            ("product_id", Value::from(0x4101u16)),
        ])
        .unwrap();

        assert_eq!(entry.vendor.as_deref(), Some("Creative"));
        assert_eq!(entry.product_id, 0x4101);
    }
}
