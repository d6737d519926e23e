//! RCF (final) record layout.

use super::{blank, req};
use crate::field::{Field, FieldKind::*};

pub(crate) fn fields() -> Vec<Field> {
    vec![
        req("RecordIdentifier", 1, 3, Fixed, "Constant 'RCF'"),
        req("TotalRCWRecords", 4, 10, Numeric, "RCW count, 7 digits zero-padded"),
        blank("Blank11", 11, 1024),
    ]
}
