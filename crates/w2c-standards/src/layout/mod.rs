//! Per-record-kind field tables.
//!
//! One module per record kind, each exposing the field list shared by tax
//! years 2021-2024. Positions are per SSA Pub 42-014 TY2024; the RCA, RCE,
//! RCW, RCS, RCT and RCF layouts are unchanged since TY2021. Year-specific
//! deltas (TY2024 adds Box 12 Code II to RCO) are spliced in by the catalog.

pub(crate) mod rca;
pub(crate) mod rce;
pub(crate) mod rcf;
pub(crate) mod rco;
pub(crate) mod rcs;
pub(crate) mod rct;
pub(crate) mod rcw;

use crate::field::{Field, FieldKind};

/// A required field.
pub(crate) fn req(
    name: &'static str,
    start: u16,
    end: u16,
    kind: FieldKind,
    description: &'static str,
) -> Field {
    Field {
        name,
        start,
        end,
        kind,
        required: true,
        description,
    }
}

/// An optional field.
pub(crate) fn opt(
    name: &'static str,
    start: u16,
    end: u16,
    kind: FieldKind,
    description: &'static str,
) -> Field {
    Field {
        name,
        start,
        end,
        kind,
        required: false,
        description,
    }
}

/// A reserved all-spaces range.
pub(crate) fn blank(name: &'static str, start: u16, end: u16) -> Field {
    Field {
        name,
        start,
        end,
        kind: FieldKind::Blank,
        required: false,
        description: "",
    }
}
