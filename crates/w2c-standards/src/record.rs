//! Record kinds of an EFW2C file.

use std::fmt;

/// The seven record kinds of an EFW2C correction file, in stream order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RecordKind {
    /// Submitter record (one per file).
    Rca,
    /// Employer record (one per file).
    Rce,
    /// Employee correction record (one per employee).
    Rcw,
    /// Employee optional record: Box 8 and additional Box 12 codes.
    Rco,
    /// State record. SSA does not process it; carried for state agencies.
    Rcs,
    /// Total record: sums of the RCW money fields.
    Rct,
    /// Final record: RCW count.
    Rcf,
}

impl RecordKind {
    /// All record kinds in stream order.
    pub const ALL: [RecordKind; 7] = [
        RecordKind::Rca,
        RecordKind::Rce,
        RecordKind::Rcw,
        RecordKind::Rco,
        RecordKind::Rcs,
        RecordKind::Rct,
        RecordKind::Rcf,
    ];

    /// The three-byte literal written at positions 1-3 of the record.
    pub fn identifier(&self) -> &'static str {
        match self {
            RecordKind::Rca => "RCA",
            RecordKind::Rce => "RCE",
            RecordKind::Rcw => "RCW",
            RecordKind::Rco => "RCO",
            RecordKind::Rcs => "RCS",
            RecordKind::Rct => "RCT",
            RecordKind::Rcf => "RCF",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifiers_are_three_bytes() {
        for kind in RecordKind::ALL {
            assert_eq!(kind.identifier().len(), 3);
        }
    }
}
