/// Error types for device-object records
use crate::types::RecordKind;
use thiserror::Error;

/// Result type alias using `ObjectError`
pub type Result<T> = std::result::Result<T, ObjectError>;

/// Error type for record and listing operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ObjectError {
    /// A field name outside the record kind's whitelist
    #[error("unknown field `{field}` for {kind} record")]
    UnknownField {
        /// Record kind the assignment targeted
        kind: RecordKind,
        /// The rejected field name
        field: String,
    },

    /// A track-id list index that resolves outside the list
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange {
        /// The index as given by the caller (before negative resolution)
        index: i64,
        /// List length at the time of access
        len: usize,
    },

    /// Comparison between records of different kinds
    #[error("cannot compare {expected} record with {found} record")]
    KindMismatch {
        /// Kind of the left-hand record
        expected: RecordKind,
        /// Kind of the right-hand record
        found: RecordKind,
    },

    /// A numeric value wider than the field it was assigned to
    #[error("value {value} does not fit field `{field}`")]
    ValueOutOfRange {
        /// Target field name
        field: String,
        /// The rejected value
        value: u64,
    },

    /// A value of the wrong shape for the field it was assigned to
    #[error("field `{field}` expects {expected}")]
    WrongValueType {
        /// Target field name
        field: String,
        /// Description of the accepted shape
        expected: &'static str,
    },
}

impl ObjectError {
    /// Create an unknown-field error
    pub fn unknown_field(kind: RecordKind, field: impl Into<String>) -> Self {
        Self::UnknownField {
            kind,
            field: field.into(),
        }
    }

    /// Create an out-of-range error
    pub fn out_of_range(index: i64, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Create a kind-mismatch error
    pub fn kind_mismatch(expected: RecordKind, found: RecordKind) -> Self {
        Self::KindMismatch { expected, found }
    }
}
