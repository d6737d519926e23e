//! Structural checks for record layouts.
//!
//! Every field list must partition `[1, 1024]` gaplessly and without
//! overlap. A violation is a transcription error in the layout tables, not
//! a runtime condition, so these checks live in the test suite and in
//! debug assertions of downstream consumers.

use thiserror::Error;

use crate::field::{Field, RECORD_LEN};
use crate::record::RecordKind;

/// A layout table violating the partition contract.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("{record} layout is empty")]
    Empty { record: RecordKind },

    #[error("{record} layout starts at {start}, want 1")]
    BadStart { record: RecordKind, start: u16 },

    #[error("{record} field {name} spans {start}-{end}, expected start {expected}")]
    NotContiguous {
        record: RecordKind,
        name: &'static str,
        start: u16,
        end: u16,
        expected: u16,
    },

    #[error("{record} field {name} spans {start}-{end}, an empty range")]
    EmptyRange {
        record: RecordKind,
        name: &'static str,
        start: u16,
        end: u16,
    },

    #[error("{record} layout ends at {end}, want 1024")]
    BadEnd { record: RecordKind, end: u16 },
}

/// Check that `fields` partitions `[1, RECORD_LEN]`: the first field starts
/// at 1, each field starts where the previous one ended plus one, no field
/// is inverted, and the last field ends at 1024.
pub fn validate_layout(record: RecordKind, fields: &[Field]) -> Result<(), LayoutError> {
    let first = fields.first().ok_or(LayoutError::Empty { record })?;
    if first.start != 1 {
        return Err(LayoutError::BadStart {
            record,
            start: first.start,
        });
    }

    let mut expected = 1u16;
    for field in fields {
        if field.end < field.start {
            return Err(LayoutError::EmptyRange {
                record,
                name: field.name,
                start: field.start,
                end: field.end,
            });
        }
        if field.start != expected {
            return Err(LayoutError::NotContiguous {
                record,
                name: field.name,
                start: field.start,
                end: field.end,
                expected,
            });
        }
        expected = field.end + 1;
    }

    let end = expected - 1;
    if usize::from(end) != RECORD_LEN {
        return Err(LayoutError::BadEnd { record, end });
    }
    Ok(())
}
