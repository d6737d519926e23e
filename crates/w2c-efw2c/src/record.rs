//! The fixed 1024-byte record workspace.

use w2c_standards::{find_field, Field, RecordKind, RECORD_LEN};

use crate::error::{Efw2cError, Result};

/// A 1024-byte record buffer bound to one record kind's field list.
///
/// The buffer starts as all spaces, so any field a builder never touches
/// (and every `Blank` range) is already correct. Writes address fields by
/// name; the builder never computes a byte offset itself.
pub struct RecordBuf<'a> {
    kind: RecordKind,
    fields: &'a [Field],
    data: [u8; RECORD_LEN],
}

impl<'a> RecordBuf<'a> {
    /// A space-filled buffer for one record of `kind`.
    pub fn new(kind: RecordKind, fields: &'a [Field]) -> Self {
        Self {
            kind,
            fields,
            data: [b' '; RECORD_LEN],
        }
    }

    /// Write `value` at the byte range of the named field, truncating to
    /// the field width when longer. Shorter values leave the remainder of
    /// the range as spaces.
    ///
    /// A name absent from the field list is a builder bug and fails with
    /// [`Efw2cError::UnknownField`].
    pub fn put(&mut self, name: &str, value: &str) -> Result<()> {
        let field = find_field(self.fields, name)
            .ok_or_else(|| Efw2cError::unknown_field(self.kind, name))?;
        let start = usize::from(field.start) - 1;
        let bytes = value.as_bytes();
        let take = bytes.len().min(field.width());
        self.data[start..start + take].copy_from_slice(&bytes[..take]);
        Ok(())
    }

    /// Whether the field list carries a field named `name`.
    ///
    /// Year deltas add fields some layouts lack (e.g. RCO Code II exists
    /// only from TY2024); builders probe before writing those.
    pub fn has_field(&self, name: &str) -> bool {
        find_field(self.fields, name).is_some()
    }

    /// The record kind this buffer was bound to.
    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    /// Yield the finished 1024-byte record.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use w2c_standards::FieldKind;

    fn fields() -> Vec<Field> {
        vec![
            Field {
                name: "RecordIdentifier",
                start: 1,
                end: 3,
                kind: FieldKind::Fixed,
                required: true,
                description: "",
            },
            Field {
                name: "Name",
                start: 4,
                end: 8,
                kind: FieldKind::Alpha,
                required: false,
                description: "",
            },
            Field {
                name: "Blank9",
                start: 9,
                end: 1024,
                kind: FieldKind::Blank,
                required: false,
                description: "",
            },
        ]
    }

    #[test]
    fn test_starts_space_filled() {
        let fields = fields();
        let buf = RecordBuf::new(RecordKind::Rca, &fields);
        let bytes = buf.into_bytes();
        assert_eq!(bytes.len(), RECORD_LEN);
        assert!(bytes.iter().all(|&b| b == b' '));
    }

    #[test]
    fn test_put_places_at_field_range() {
        let fields = fields();
        let mut buf = RecordBuf::new(RecordKind::Rca, &fields);
        buf.put("RecordIdentifier", "RCA").unwrap();
        buf.put("Name", "AB").unwrap();
        let bytes = buf.into_bytes();
        assert_eq!(&bytes[0..3], b"RCA");
        assert_eq!(&bytes[3..8], b"AB   ");
    }

    #[test]
    fn test_put_truncates_long_values() {
        let fields = fields();
        let mut buf = RecordBuf::new(RecordKind::Rca, &fields);
        buf.put("Name", "ABCDEFGH").unwrap();
        let bytes = buf.into_bytes();
        assert_eq!(&bytes[3..8], b"ABCDE");
        assert_eq!(bytes[8], b' ');
    }

    #[test]
    fn test_unknown_field_is_an_error() {
        let fields = fields();
        let mut buf = RecordBuf::new(RecordKind::Rca, &fields);
        let err = buf.put("NoSuchField", "X").unwrap_err();
        assert!(matches!(err, Efw2cError::UnknownField { .. }));
    }

    #[test]
    fn test_has_field() {
        let fields = fields();
        let buf = RecordBuf::new(RecordKind::Rca, &fields);
        assert!(buf.has_field("Name"));
        assert!(!buf.has_field("name"));
    }
}
