//! Field descriptors for fixed-width EFW2C records.

use std::fmt;

/// Length of every EFW2C record, in bytes.
pub const RECORD_LEN: usize = 1024;

/// The semantic type of a field, which determines its byte rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Left-justified, space-filled, uppercased.
    Alpha,
    /// Digits only, left-justified, trailing spaces when not populated.
    Numeric,
    /// 11-character zero-padded cents, no decimal point (RCW/RCO/RCS).
    Money11,
    /// 15-character zero-padded cents (RCT totals).
    Money15,
    /// Literal constant (the 3-character record identifier).
    Fixed,
    /// Must be spaces.
    Blank,
}

/// One named byte range within a 1024-byte record.
///
/// Positions are 1-based and inclusive at both ends, as printed in
/// SSA Pub 42-014.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// Field name, unique within its record kind.
    pub name: &'static str,
    /// First byte position, 1-based inclusive.
    pub start: u16,
    /// Last byte position, 1-based inclusive.
    pub end: u16,
    pub kind: FieldKind,
    /// Whether SSA requires the field to be populated.
    pub required: bool,
    pub description: &'static str,
}

impl Field {
    /// Width of the field in bytes.
    pub fn width(&self) -> usize {
        usize::from(self.end) - usize::from(self.start) + 1
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}-{})", self.name, self.start, self.end)
    }
}

/// Find a field by name in a field list.
///
/// The lists are tens of fields long, so a linear scan is fine.
pub fn find_field<'a>(fields: &'a [Field], name: &str) -> Option<&'a Field> {
    fields.iter().find(|f| f.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_width() {
        let field = Field {
            name: "OrigSSN",
            start: 4,
            end: 12,
            kind: FieldKind::Numeric,
            required: true,
            description: "",
        };
        assert_eq!(field.width(), 9);
        assert_eq!(field.to_string(), "OrigSSN (4-12)");
    }

    #[test]
    fn test_find_field() {
        let fields = [
            Field {
                name: "RecordIdentifier",
                start: 1,
                end: 3,
                kind: FieldKind::Fixed,
                required: true,
                description: "",
            },
            Field {
                name: "Blank4",
                start: 4,
                end: 1024,
                kind: FieldKind::Blank,
                required: false,
                description: "",
            },
        ];
        assert!(find_field(&fields, "Blank4").is_some());
        assert!(find_field(&fields, "blank4").is_none());
    }
}
