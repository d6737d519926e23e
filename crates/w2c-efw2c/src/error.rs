//! Error types for EFW2C generation.

use thiserror::Error;
use w2c_standards::RecordKind;

/// Errors that can occur while generating an EFW2C stream.
///
/// `UnknownField` and `RecordLength` are programmer errors (a builder out
/// of step with the layout tables); both abort generation before any byte
/// reaches the sink. `Io` is the sink refusing a write, in which case a
/// partial stream may already be on the sink.
#[derive(Debug, Error)]
pub enum Efw2cError {
    /// A builder addressed a field name absent from the record's layout.
    #[error("field {field:?} not found in the {record} layout")]
    UnknownField { record: RecordKind, field: String },

    /// An assembled record is not exactly 1024 bytes.
    #[error("{record} record is {actual} bytes (want 1024)")]
    RecordLength { record: RecordKind, actual: usize },

    /// The output sink refused a write.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Efw2cError {
    /// Create an UnknownField error.
    pub fn unknown_field(record: RecordKind, field: impl Into<String>) -> Self {
        Self::UnknownField {
            record,
            field: field.into(),
        }
    }
}

/// Result type alias for EFW2C operations.
pub type Result<T> = std::result::Result<T, Efw2cError>;
