//! Employee correction records, monetary amounts, and Box 13 flags.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Paired original/correct monetary amounts, in cents.
///
/// Every W-2c box is a pair: what was originally reported and what should
/// have been. A pair with both sides zero means "no correction" and renders
/// as spaces in the stream (except Boxes 1-7, which always render).
/// Negative values are clamped to zero at format time; the model does not
/// reject them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonetaryAmounts {
    // Boxes 1-7
    pub original_wages_tips_other: i64,
    pub correct_wages_tips_other: i64,
    pub original_federal_income_tax: i64,
    pub correct_federal_income_tax: i64,
    pub original_social_security_wages: i64,
    pub correct_social_security_wages: i64,
    pub original_social_security_tax: i64,
    pub correct_social_security_tax: i64,
    pub original_medicare_wages: i64,
    pub correct_medicare_wages: i64,
    pub original_medicare_tax: i64,
    pub correct_medicare_tax: i64,
    pub original_social_security_tips: i64,
    pub correct_social_security_tips: i64,

    // Box 8 (RCO)
    pub original_allocated_tips: i64,
    pub correct_allocated_tips: i64,

    // Box 10
    pub original_dependent_care: i64,
    pub correct_dependent_care: i64,

    // Box 11, split into Section 457 and non-457 portions
    pub original_nonqual_plan_457: i64,
    pub correct_nonqual_plan_457: i64,
    pub original_nonqual_not_457: i64,
    pub correct_nonqual_not_457: i64,

    // Box 12 codes carried in RCW
    pub original_code_d_401k: i64,
    pub correct_code_d_401k: i64,
    pub original_code_e_403b: i64,
    pub correct_code_e_403b: i64,
    pub original_code_g_457b: i64,
    pub correct_code_g_457b: i64,
    pub original_code_w_hsa: i64,
    pub correct_code_w_hsa: i64,
    pub original_code_aa_roth_401k: i64,
    pub correct_code_aa_roth_401k: i64,
    pub original_code_bb_roth_403b: i64,
    pub correct_code_bb_roth_403b: i64,
    pub original_code_dd_health_coverage: i64,
    pub correct_code_dd_health_coverage: i64,

    /// Box 12 Code II, Medicaid waiver payment exclusion. Only rendered
    /// under tax-year layouts that carry the field (TY2024 onward).
    pub original_code_ii_medicaid_waiver: i64,
    pub correct_code_ii_medicaid_waiver: i64,

    // Boxes 16/17 (RCS)
    pub original_state_wages: i64,
    pub correct_state_wages: i64,
    pub original_state_income_tax: i64,
    pub correct_state_income_tax: i64,
}

/// One Box 13 checkbox correction.
///
/// `None` on a side means no correction is being reported for that side and
/// the byte stays a space; `Some(false)`/`Some(true)` render as `0`/`1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckboxCorrection {
    pub original: Option<bool>,
    pub correct: Option<bool>,
}

impl CheckboxCorrection {
    /// True when neither side carries a correction.
    pub fn is_unset(&self) -> bool {
        self.original.is_none() && self.correct.is_none()
    }
}

/// The three Box 13 checkbox corrections of the RCW record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Box13Flags {
    pub statutory_employee: CheckboxCorrection,
    pub retirement_plan: CheckboxCorrection,
    pub third_party_sick_pay: CheckboxCorrection,
}

/// One W-2c employee correction (one RCW record, plus optional RCO/RCS).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub id: i64,
    pub submission_id: i64,
    /// The employee's correct SSN, 9 digits.
    pub ssn: String,
    /// The originally reported (wrong) SSN; set only when correcting SSN.
    pub original_ssn: Option<String>,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub suffix: String,
    /// Originally reported name parts; set only when correcting the name.
    pub original_first_name: Option<String>,
    pub original_middle_name: Option<String>,
    pub original_last_name: Option<String>,
    pub address_line1: String,
    pub address_line2: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub zip_extension: String,
    /// State postal abbreviations for Box 15; presence of either (or of any
    /// state wage/tax amount) triggers an RCS record.
    pub original_state_code: Option<String>,
    pub correct_state_code: Option<String>,
    pub amounts: MonetaryAmounts,
    pub box13: Box13Flags,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl EmployeeRecord {
    /// True when any original-name field is populated, i.e. this record
    /// corrects the employee's name.
    pub fn corrects_name(&self) -> bool {
        has_text(&self.original_first_name)
            || has_text(&self.original_middle_name)
            || has_text(&self.original_last_name)
    }

    /// True when this record corrects the employee's SSN.
    pub fn corrects_ssn(&self) -> bool {
        has_text(&self.original_ssn)
    }
}

/// Whether an optional field is populated. `None` and `Some("")` both mean
/// absent; any other content, whitespace included, counts as populated.
pub(crate) fn has_text(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkbox_unset() {
        assert!(CheckboxCorrection::default().is_unset());
        let set = CheckboxCorrection {
            original: Some(false),
            correct: None,
        };
        assert!(!set.is_unset());
    }

    #[test]
    fn test_corrects_name() {
        let mut employee = EmployeeRecord {
            first_name: "JOHN".to_string(),
            last_name: "SMITH".to_string(),
            ..Default::default()
        };
        assert!(!employee.corrects_name());

        employee.original_last_name = Some("SMYTH".to_string());
        assert!(employee.corrects_name());

        employee.original_last_name = Some(String::new());
        assert!(!employee.corrects_name());
    }

    #[test]
    fn test_corrects_ssn() {
        let mut employee = EmployeeRecord {
            ssn: "987654321".to_string(),
            ..Default::default()
        };
        assert!(!employee.corrects_ssn());
        employee.original_ssn = Some("111223333".to_string());
        assert!(employee.corrects_ssn());
    }
}
