//! Submission and submitter types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::employee::EmployeeRecord;
use crate::employer::EmployerRecord;

/// Who prepared the submission, per SSA Pub 42-014 (RCA position 316).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PreparerCode {
    /// A = Accounting firm
    AccountingFirm,
    /// L = Self-prepared
    #[default]
    SelfPrepared,
    /// S = Service bureau
    ServiceBureau,
    /// P = Parent company
    ParentCompany,
    /// O = Other
    Other,
}

impl PreparerCode {
    /// The single-character code written to the RCA record.
    pub fn as_str(&self) -> &'static str {
        match self {
            PreparerCode::AccountingFirm => "A",
            PreparerCode::SelfPrepared => "L",
            PreparerCode::ServiceBureau => "S",
            PreparerCode::ParentCompany => "P",
            PreparerCode::Other => "O",
        }
    }
}

impl fmt::Display for PreparerCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PreparerCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "A" => Ok(PreparerCode::AccountingFirm),
            "L" => Ok(PreparerCode::SelfPrepared),
            "S" => Ok(PreparerCode::ServiceBureau),
            "P" => Ok(PreparerCode::ParentCompany),
            "O" => Ok(PreparerCode::Other),
            _ => Err(format!("Unknown preparer code: {}", s)),
        }
    }
}

/// Submitter identity and contact for the RCA record.
///
/// In this system the submitter is the employer itself; the RCA company
/// name and address are filled from the [`EmployerRecord`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmitterRecord {
    /// BSO User ID, 8 alphanumeric characters assigned at SSA registration.
    pub bso_user_id: String,
    pub contact_name: String,
    /// Contact phone, digits only (e.g. "8005551234").
    pub contact_phone: String,
    pub contact_email: String,
    pub preparer_code: PreparerCode,
    /// True when this file is a resubmission of a rejected one.
    pub resubmission: bool,
    /// The WFID of the original submission (resubmissions only), 6 chars.
    pub resub_wfid: Option<String>,
}

/// An employer plus a batch of employee corrections, ready for generation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: i64,
    pub submitter: SubmitterRecord,
    pub employer: EmployerRecord,
    pub employees: Vec<EmployeeRecord>,
    /// Free-form notes, not rendered into the EFW2C stream.
    pub notes: String,
    pub created_at: Option<DateTime<Utc>>,
    pub submitted_at: Option<DateTime<Utc>>,
}

/// A supported tax year paired with its SSA publication, for year pickers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxYearInfo {
    /// Four-digit year, e.g. "2024".
    pub year: String,
    pub publication_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preparer_code_roundtrip() {
        for code in ["A", "L", "S", "P", "O"] {
            let parsed: PreparerCode = code.parse().expect("parse code");
            assert_eq!(parsed.as_str(), code);
        }
        assert!("X".parse::<PreparerCode>().is_err());
        assert!(" l ".parse::<PreparerCode>().is_ok());
    }

    #[test]
    fn test_preparer_code_default_is_self_prepared() {
        assert_eq!(PreparerCode::default(), PreparerCode::SelfPrepared);
        assert_eq!(PreparerCode::default().as_str(), "L");
    }

    #[test]
    fn test_submission_serde_roundtrip() {
        let submission = Submission {
            id: 7,
            notes: "amended after AccuWage errors".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_string(&submission).expect("serialize");
        let back: Submission = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, submission);
    }
}
