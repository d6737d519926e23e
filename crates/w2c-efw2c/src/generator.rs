//! The EFW2C stream generator.
//!
//! Record order per SSA Pub 42-014: RCA, RCE, then per employee an RCW
//! followed by its optional RCO and RCS, then RCT with the accumulated
//! totals, then RCF. Records are 1024 bytes each, concatenated with no
//! separators.

use std::io::Write;

use w2c_model::{EmployeeRecord, MonetaryAmounts, Submission, TaxYearInfo};
use w2c_standards::{catalog, for_year, RecordKind, YearSpec, RECORD_LEN};

use crate::error::{Efw2cError, Result};
use crate::format::{
    bool_char, clean_digits, money11, money15, pad_alpha, pad_email, pad_numeric, state_code,
};
use crate::record::RecordBuf;

/// An EFW2C correction-file generator bound to a tax year.
///
/// Construction never fails: a year without an exact layout falls back to
/// the default year's, and [`exact`](Generator::exact) reports the miss so
/// callers can warn. The layout actually used by [`generate`] is re-resolved
/// from the submission's employer tax year, so one generator can serve
/// submissions for different years.
pub struct Generator {
    year: u16,
    spec: &'static YearSpec,
    exact: bool,
}

impl Generator {
    /// A generator for `year`, falling back to the default year's layout
    /// when the year is not explicitly modeled.
    pub fn new(year: u16) -> Self {
        let (spec, exact) = for_year(year);
        Self { year, spec, exact }
    }

    /// The tax year requested at construction.
    pub fn year(&self) -> u16 {
        self.year
    }

    /// The resolved year spec.
    pub fn spec(&self) -> &'static YearSpec {
        self.spec
    }

    /// False when the requested year had no exact layout and the default
    /// year's layout is standing in.
    pub fn exact(&self) -> bool {
        self.exact
    }

    /// Write a complete EFW2C byte stream for `submission` to `sink`.
    ///
    /// All records are assembled and length-checked in memory first, so a
    /// programmer error (unknown field, bad record length) never produces
    /// partial output. A sink failure aborts mid-stream and surfaces the
    /// underlying cause; the caller may regenerate against a fresh sink.
    pub fn generate<W: Write>(&self, submission: &Submission, sink: &mut W) -> Result<()> {
        let year = submission
            .employer
            .tax_year
            .trim()
            .parse::<u16>()
            .unwrap_or(0);
        let (spec, exact) = for_year(year);
        if !exact {
            tracing::warn!(
                year,
                fallback = spec.tax_year,
                "no exact EFW2C layout for tax year; using fallback layout"
            );
        }

        let mut records = Vec::with_capacity(4 + submission.employees.len());
        records.push(build_rca(spec, submission)?);
        records.push(build_rce(spec, submission)?);

        let mut totals = RctTotals::default();
        for employee in &submission.employees {
            records.push(build_rcw(spec, employee)?);
            if has_rco_data(employee) {
                records.push(build_rco(spec, employee)?);
            }
            if has_rcs_data(employee) {
                records.push(build_rcs(spec, employee)?);
            }
            totals.add(&employee.amounts);
        }

        let rcw_count = submission.employees.len();
        records.push(build_rct(spec, &totals, rcw_count)?);
        records.push(build_rcf(spec, rcw_count)?);

        for record in &records {
            if record.len() != RECORD_LEN {
                let kind = record_kind_of(record);
                return Err(Efw2cError::RecordLength {
                    record: kind,
                    actual: record.len(),
                });
            }
        }
        for record in &records {
            sink.write_all(record)?;
        }

        tracing::debug!(
            records = records.len(),
            employees = rcw_count,
            tax_year = spec.tax_year,
            "wrote EFW2C stream"
        );
        Ok(())
    }
}

/// Supported tax years, ascending, each with its SSA publication URL.
pub fn supported_years() -> Vec<TaxYearInfo> {
    catalog::supported()
        .iter()
        .map(|&year| {
            let (spec, _) = for_year(year);
            TaxYearInfo {
                year: year.to_string(),
                publication_url: spec.publication_url.to_string(),
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Presence checks
// ---------------------------------------------------------------------------

/// RCO is owed when Box 8 or Code II carries a correction.
fn has_rco_data(employee: &EmployeeRecord) -> bool {
    let a = &employee.amounts;
    pair_set(a.original_allocated_tips, a.correct_allocated_tips)
        || pair_set(
            a.original_code_ii_medicaid_waiver,
            a.correct_code_ii_medicaid_waiver,
        )
}

/// RCS is owed when any state/locality data is present.
fn has_rcs_data(employee: &EmployeeRecord) -> bool {
    let a = &employee.amounts;
    nonempty(&employee.original_state_code).is_some()
        || nonempty(&employee.correct_state_code).is_some()
        || pair_set(a.original_state_wages, a.correct_state_wages)
        || pair_set(a.original_state_income_tax, a.correct_state_income_tax)
}

fn pair_set(original: i64, correct: i64) -> bool {
    original != 0 || correct != 0
}

/// `None` and `Some("")` both mean absent, matching the empty-string
/// convention of the stored records. No trimming: whitespace counts as
/// populated.
fn nonempty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

// ---------------------------------------------------------------------------
// Record builders
// ---------------------------------------------------------------------------

fn build_rca(spec: &YearSpec, submission: &Submission) -> Result<Vec<u8>> {
    let submitter = &submission.submitter;
    let employer = &submission.employer;

    let mut buf = RecordBuf::new(RecordKind::Rca, &spec.rca);
    buf.put("RecordIdentifier", "RCA")?;
    // The submitter in this system is the employer itself.
    buf.put("SubmitterEIN", &clean_digits(&employer.ein, 9))?;
    buf.put("BSOUID", &pad_alpha(&submitter.bso_user_id, 8))?;
    // SoftwareVendorCode and SoftwareCode stay blank; not a software vendor.
    buf.put("CompanyName", &pad_alpha(&employer.name, 57))?;
    buf.put("LocationAddress", &pad_alpha(&employer.address_line1, 22))?;
    buf.put("DeliveryAddress", &pad_alpha(&employer.address_line2, 22))?;
    buf.put("City", &pad_alpha(&employer.city, 22))?;
    buf.put("StateAbbrev", &pad_alpha(&employer.state, 2))?;
    buf.put("ZIPCode", &pad_numeric(&employer.zip, 5))?;
    buf.put("ZIPExtension", &pad_numeric(&employer.zip_extension, 4))?;
    buf.put("ContactName", &pad_alpha(&submitter.contact_name, 27))?;
    buf.put("ContactPhone", &pad_numeric(&submitter.contact_phone, 15))?;
    buf.put("ContactEmail", &pad_email(&submitter.contact_email, 40))?;
    buf.put("PreparerCode", submitter.preparer_code.as_str())?;
    buf.put(
        "ResubIndicator",
        if submitter.resubmission { "1" } else { "0" },
    )?;
    if let Some(wfid) = nonempty(&submitter.resub_wfid) {
        buf.put("ResubWFID", &pad_alpha(wfid, 6))?;
    }
    Ok(buf.into_bytes())
}

fn build_rce(spec: &YearSpec, submission: &Submission) -> Result<Vec<u8>> {
    let employer = &submission.employer;

    let mut buf = RecordBuf::new(RecordKind::Rce, &spec.rce);
    buf.put("RecordIdentifier", "RCE")?;
    buf.put("TaxYear", employer.tax_year.trim())?;
    if let Some(original_ein) = nonempty(&employer.original_ein) {
        buf.put("OrigReportedEIN", &clean_digits(original_ein, 9))?;
    }
    buf.put("EmployerEIN", &clean_digits(&employer.ein, 9))?;
    if let Some(agent) = employer.agent_indicator {
        buf.put("AgentIndicatorCode", agent.as_str())?;
    }
    if let Some(agent_ein) = nonempty(&employer.agent_ein) {
        buf.put("AgentForEIN", &clean_digits(agent_ein, 9))?;
    }
    buf.put("EmployerName", &pad_alpha(&employer.name, 57))?;
    buf.put("LocationAddress", &pad_alpha(&employer.address_line1, 22))?;
    buf.put("DeliveryAddress", &pad_alpha(&employer.address_line2, 22))?;
    buf.put("City", &pad_alpha(&employer.city, 22))?;
    buf.put("StateAbbrev", &pad_alpha(&employer.state, 2))?;
    buf.put("ZIPCode", &pad_numeric(&employer.zip, 5))?;
    buf.put("ZIPExtension", &pad_numeric(&employer.zip_extension, 4))?;
    // OrigEmploymentCode (222) stays blank unless an employment-code
    // correction is being filed, which this system does not produce.
    buf.put("CorrectEmploymentCode", employer.employment_code.as_str())?;
    buf.put("KindOfEmployer", employer.kind_of_employer.as_str())?;
    if let Some(contact_name) = nonempty(&employer.contact_name) {
        buf.put("ContactName", &pad_alpha(contact_name, 27))?;
    }
    if let Some(contact_phone) = nonempty(&employer.contact_phone) {
        buf.put("ContactPhone", &pad_numeric(contact_phone, 15))?;
    }
    if let Some(contact_email) = nonempty(&employer.contact_email) {
        buf.put("ContactEmail", &pad_email(contact_email, 40))?;
    }
    Ok(buf.into_bytes())
}

fn build_rcw(spec: &YearSpec, employee: &EmployeeRecord) -> Result<Vec<u8>> {
    let mut buf = RecordBuf::new(RecordKind::Rcw, &spec.rcw);
    buf.put("RecordIdentifier", "RCW")?;

    // SSN pairing: OrigSSN carries the previously reported SSN. Only an
    // SSN correction populates CorrectSSN.
    if employee.corrects_ssn() {
        buf.put(
            "OrigSSN",
            &clean_digits(employee.original_ssn.as_deref().unwrap_or(""), 9),
        )?;
        buf.put("CorrectSSN", &clean_digits(&employee.ssn, 9))?;
    } else {
        buf.put("OrigSSN", &clean_digits(&employee.ssn, 9))?;
    }

    // Name pairing: the current name always lands in the Correct fields;
    // the Orig fields are populated only for a name correction.
    if employee.corrects_name() {
        buf.put(
            "OrigFirstName",
            &pad_alpha(employee.original_first_name.as_deref().unwrap_or(""), 15),
        )?;
        buf.put(
            "OrigMiddleName",
            &pad_alpha(employee.original_middle_name.as_deref().unwrap_or(""), 15),
        )?;
        buf.put(
            "OrigLastName",
            &pad_alpha(employee.original_last_name.as_deref().unwrap_or(""), 20),
        )?;
    }
    buf.put("CorrectFirstName", &pad_alpha(&employee.first_name, 15))?;
    buf.put("CorrectMiddleName", &pad_alpha(&employee.middle_name, 15))?;
    buf.put("CorrectLastName", &pad_alpha(&employee.last_name, 20))?;

    buf.put("LocationAddress", &pad_alpha(&employee.address_line1, 22))?;
    buf.put("DeliveryAddress", &pad_alpha(&employee.address_line2, 22))?;
    buf.put("City", &pad_alpha(&employee.city, 22))?;
    buf.put("StateAbbrev", &pad_alpha(&employee.state, 2))?;
    buf.put("ZIPCode", &pad_numeric(&employee.zip, 5))?;
    buf.put("ZIPExtension", &pad_numeric(&employee.zip_extension, 4))?;

    // Boxes 1-7 always render; no correction renders as zero cents.
    let a = &employee.amounts;
    buf.put("OrigWagesTipsOther", &money11(a.original_wages_tips_other))?;
    buf.put("CorrectWagesTipsOther", &money11(a.correct_wages_tips_other))?;
    buf.put("OrigFedIncomeTax", &money11(a.original_federal_income_tax))?;
    buf.put("CorrectFedIncomeTax", &money11(a.correct_federal_income_tax))?;
    buf.put("OrigSSWages", &money11(a.original_social_security_wages))?;
    buf.put("CorrectSSWages", &money11(a.correct_social_security_wages))?;
    buf.put("OrigSSTax", &money11(a.original_social_security_tax))?;
    buf.put("CorrectSSTax", &money11(a.correct_social_security_tax))?;
    buf.put("OrigMedicareWages", &money11(a.original_medicare_wages))?;
    buf.put("CorrectMedicareWages", &money11(a.correct_medicare_wages))?;
    buf.put("OrigMedicareTax", &money11(a.original_medicare_tax))?;
    buf.put("CorrectMedicareTax", &money11(a.correct_medicare_tax))?;
    buf.put("OrigSSTips", &money11(a.original_social_security_tips))?;
    buf.put("CorrectSSTips", &money11(a.correct_social_security_tips))?;

    // Optional pairs stay spaces unless either side is non-zero.
    put_money11_pair(
        &mut buf,
        "OrigDependentCare",
        "CorrectDependentCare",
        a.original_dependent_care,
        a.correct_dependent_care,
    )?;
    put_money11_pair(
        &mut buf,
        "OrigCode401k",
        "CorrectCode401k",
        a.original_code_d_401k,
        a.correct_code_d_401k,
    )?;
    put_money11_pair(
        &mut buf,
        "OrigCode403b",
        "CorrectCode403b",
        a.original_code_e_403b,
        a.correct_code_e_403b,
    )?;
    put_money11_pair(
        &mut buf,
        "OrigCode457bGovt",
        "CorrectCode457bGovt",
        a.original_code_g_457b,
        a.correct_code_g_457b,
    )?;
    put_money11_pair(
        &mut buf,
        "OrigCodeW_HSA",
        "CorrectCodeW_HSA",
        a.original_code_w_hsa,
        a.correct_code_w_hsa,
    )?;
    put_money11_pair(
        &mut buf,
        "OrigCodeAA_Roth401k",
        "CorrectCodeAA_Roth401k",
        a.original_code_aa_roth_401k,
        a.correct_code_aa_roth_401k,
    )?;
    put_money11_pair(
        &mut buf,
        "OrigCodeBB_Roth403b",
        "CorrectCodeBB_Roth403b",
        a.original_code_bb_roth_403b,
        a.correct_code_bb_roth_403b,
    )?;
    put_money11_pair(
        &mut buf,
        "OrigCodeDD_EmpHealth",
        "CorrectCodeDD_EmpHealth",
        a.original_code_dd_health_coverage,
        a.correct_code_dd_health_coverage,
    )?;
    put_money11_pair(
        &mut buf,
        "OrigNonqualPlan457",
        "CorrectNonqualPlan457",
        a.original_nonqual_plan_457,
        a.correct_nonqual_plan_457,
    )?;
    put_money11_pair(
        &mut buf,
        "OrigNonqualNotSection457",
        "CorrectNonqualNotSection457",
        a.original_nonqual_not_457,
        a.correct_nonqual_not_457,
    )?;

    // Box 13 checkboxes: space = no correction, else 0/1.
    let box13 = &employee.box13;
    put_checkbox_pair(
        &mut buf,
        "OrigStatutoryEmployee",
        "CorrectStatutoryEmployee",
        box13.statutory_employee.original,
        box13.statutory_employee.correct,
    )?;
    put_checkbox_pair(
        &mut buf,
        "OrigRetirementPlan",
        "CorrectRetirementPlan",
        box13.retirement_plan.original,
        box13.retirement_plan.correct,
    )?;
    put_checkbox_pair(
        &mut buf,
        "OrigThirdPartySickPay",
        "CorrectThirdPartySickPay",
        box13.third_party_sick_pay.original,
        box13.third_party_sick_pay.correct,
    )?;

    Ok(buf.into_bytes())
}

fn build_rco(spec: &YearSpec, employee: &EmployeeRecord) -> Result<Vec<u8>> {
    let mut buf = RecordBuf::new(RecordKind::Rco, &spec.rco);
    buf.put("RecordIdentifier", "RCO")?;
    let a = &employee.amounts;
    put_money11_pair(
        &mut buf,
        "OrigAllocatedTips",
        "CorrectAllocatedTips",
        a.original_allocated_tips,
        a.correct_allocated_tips,
    )?;
    // Code II exists only in TY2024+ layouts; earlier years leave the
    // range as part of the trailing blank.
    if buf.has_field("OrigMedicaidWaiver") {
        put_money11_pair(
            &mut buf,
            "OrigMedicaidWaiver",
            "CorrectMedicaidWaiver",
            a.original_code_ii_medicaid_waiver,
            a.correct_code_ii_medicaid_waiver,
        )?;
    }
    Ok(buf.into_bytes())
}

fn build_rcs(spec: &YearSpec, employee: &EmployeeRecord) -> Result<Vec<u8>> {
    let mut buf = RecordBuf::new(RecordKind::Rcs, &spec.rcs);
    buf.put("RecordIdentifier", "RCS")?;

    let abbrev = nonempty(&employee.correct_state_code)
        .or_else(|| nonempty(&employee.original_state_code))
        .unwrap_or("");
    buf.put("StateCode", &pad_numeric(state_code(abbrev), 2))?;
    buf.put("CorrectSSN", &clean_digits(&employee.ssn, 9))?;
    buf.put("CorrectFirstName", &pad_alpha(&employee.first_name, 15))?;
    buf.put("CorrectMiddleName", &pad_alpha(&employee.middle_name, 15))?;
    buf.put("CorrectLastName", &pad_alpha(&employee.last_name, 20))?;
    buf.put("StateCode2", &pad_numeric(state_code(abbrev), 2))?;

    let a = &employee.amounts;
    put_money11_pair(
        &mut buf,
        "OrigStateWages",
        "CorrectStateWages",
        a.original_state_wages,
        a.correct_state_wages,
    )?;
    put_money11_pair(
        &mut buf,
        "OrigStateIncomeTax",
        "CorrectStateIncomeTax",
        a.original_state_income_tax,
        a.correct_state_income_tax,
    )?;
    Ok(buf.into_bytes())
}

fn build_rct(spec: &YearSpec, totals: &RctTotals, rcw_count: usize) -> Result<Vec<u8>> {
    let mut buf = RecordBuf::new(RecordKind::Rct, &spec.rct);
    buf.put("RecordIdentifier", "RCT")?;
    buf.put("TotalRCWRecords", &format!("{rcw_count:07}"))?;

    // Boxes 1-7 totals always render, mirroring the RCW fields they sum.
    buf.put("OrigTotalWagesTips", &money15(totals.original_wages))?;
    buf.put("CorrectTotalWagesTips", &money15(totals.correct_wages))?;
    buf.put("OrigTotalFedIncomeTax", &money15(totals.original_fed_tax))?;
    buf.put("CorrectTotalFedIncomeTax", &money15(totals.correct_fed_tax))?;
    buf.put("OrigTotalSSWages", &money15(totals.original_ss_wages))?;
    buf.put("CorrectTotalSSWages", &money15(totals.correct_ss_wages))?;
    buf.put("OrigTotalSSTax", &money15(totals.original_ss_tax))?;
    buf.put("CorrectTotalSSTax", &money15(totals.correct_ss_tax))?;
    buf.put("OrigTotalMedicareWages", &money15(totals.original_medicare_wages))?;
    buf.put("CorrectTotalMedicareWages", &money15(totals.correct_medicare_wages))?;
    buf.put("OrigTotalMedicareTax", &money15(totals.original_medicare_tax))?;
    buf.put("CorrectTotalMedicareTax", &money15(totals.correct_medicare_tax))?;
    buf.put("OrigTotalSSTips", &money15(totals.original_ss_tips))?;
    buf.put("CorrectTotalSSTips", &money15(totals.correct_ss_tips))?;

    put_money15_pair(
        &mut buf,
        "OrigTotalDependentCare",
        "CorrectTotalDependentCare",
        totals.original_dependent_care,
        totals.correct_dependent_care,
    )?;
    put_money15_pair(
        &mut buf,
        "OrigTotalCode401k",
        "CorrectTotalCode401k",
        totals.original_code_d,
        totals.correct_code_d,
    )?;
    put_money15_pair(
        &mut buf,
        "OrigTotalCode403b",
        "CorrectTotalCode403b",
        totals.original_code_e,
        totals.correct_code_e,
    )?;
    put_money15_pair(
        &mut buf,
        "OrigTotalCode457bGovt",
        "CorrectTotalCode457bGovt",
        totals.original_code_g,
        totals.correct_code_g,
    )?;
    put_money15_pair(
        &mut buf,
        "OrigTotalCodeW_HSA",
        "CorrectTotalCodeW_HSA",
        totals.original_code_w,
        totals.correct_code_w,
    )?;
    put_money15_pair(
        &mut buf,
        "OrigTotalNonqualPlan457",
        "CorrectTotalNonqualPlan457",
        totals.original_nonqual_457,
        totals.correct_nonqual_457,
    )?;
    put_money15_pair(
        &mut buf,
        "OrigTotalNonqualNotSection457",
        "CorrectTotalNonqualNotSection457",
        totals.original_nonqual_not_457,
        totals.correct_nonqual_not_457,
    )?;
    put_money15_pair(
        &mut buf,
        "OrigTotalCodeAA_Roth401k",
        "CorrectTotalCodeAA_Roth401k",
        totals.original_code_aa,
        totals.correct_code_aa,
    )?;
    put_money15_pair(
        &mut buf,
        "OrigTotalCodeBB_Roth403b",
        "CorrectTotalCodeBB_Roth403b",
        totals.original_code_bb,
        totals.correct_code_bb,
    )?;
    put_money15_pair(
        &mut buf,
        "OrigTotalCodeDD_EmpHealth",
        "CorrectTotalCodeDD_EmpHealth",
        totals.original_code_dd,
        totals.correct_code_dd,
    )?;

    Ok(buf.into_bytes())
}

fn build_rcf(spec: &YearSpec, rcw_count: usize) -> Result<Vec<u8>> {
    let mut buf = RecordBuf::new(RecordKind::Rcf, &spec.rcf);
    buf.put("RecordIdentifier", "RCF")?;
    buf.put("TotalRCWRecords", &format!("{rcw_count:07}"))?;
    Ok(buf.into_bytes())
}

// ---------------------------------------------------------------------------
// Pair helpers
// ---------------------------------------------------------------------------

/// Write an 11-char money pair, or leave both ranges as spaces when the
/// pair carries no correction. A one-sided correction still writes both.
fn put_money11_pair(
    buf: &mut RecordBuf<'_>,
    original_name: &str,
    correct_name: &str,
    original: i64,
    correct: i64,
) -> Result<()> {
    if !pair_set(original, correct) {
        return Ok(());
    }
    buf.put(original_name, &money11(original))?;
    buf.put(correct_name, &money11(correct))
}

/// The 15-char variant for RCT totals.
fn put_money15_pair(
    buf: &mut RecordBuf<'_>,
    original_name: &str,
    correct_name: &str,
    original: i64,
    correct: i64,
) -> Result<()> {
    if !pair_set(original, correct) {
        return Ok(());
    }
    buf.put(original_name, &money15(original))?;
    buf.put(correct_name, &money15(correct))
}

/// Write a Box 13 indicator pair. `None` leaves the byte a space.
fn put_checkbox_pair(
    buf: &mut RecordBuf<'_>,
    original_name: &str,
    correct_name: &str,
    original: Option<bool>,
    correct: Option<bool>,
) -> Result<()> {
    if let Some(value) = original {
        buf.put(original_name, bool_char(value))?;
    }
    if let Some(value) = correct {
        buf.put(correct_name, bool_char(value))?;
    }
    Ok(())
}

/// Recover the record kind from an assembled record's identifier bytes,
/// for error reporting only.
fn record_kind_of(record: &[u8]) -> RecordKind {
    let tag = record.get(0..3).unwrap_or_default();
    RecordKind::ALL
        .into_iter()
        .find(|kind| kind.identifier().as_bytes() == tag)
        .unwrap_or(RecordKind::Rca)
}

// ---------------------------------------------------------------------------
// RCT accumulators
// ---------------------------------------------------------------------------

/// Sums of the RCW money pairs across one generation pass. Only RCW fields
/// total into RCT; RCO and RCS payloads do not.
#[derive(Debug, Default)]
struct RctTotals {
    original_wages: i64,
    correct_wages: i64,
    original_fed_tax: i64,
    correct_fed_tax: i64,
    original_ss_wages: i64,
    correct_ss_wages: i64,
    original_ss_tax: i64,
    correct_ss_tax: i64,
    original_medicare_wages: i64,
    correct_medicare_wages: i64,
    original_medicare_tax: i64,
    correct_medicare_tax: i64,
    original_ss_tips: i64,
    correct_ss_tips: i64,
    original_dependent_care: i64,
    correct_dependent_care: i64,
    original_nonqual_457: i64,
    correct_nonqual_457: i64,
    original_nonqual_not_457: i64,
    correct_nonqual_not_457: i64,
    original_code_d: i64,
    correct_code_d: i64,
    original_code_e: i64,
    correct_code_e: i64,
    original_code_g: i64,
    correct_code_g: i64,
    original_code_w: i64,
    correct_code_w: i64,
    original_code_aa: i64,
    correct_code_aa: i64,
    original_code_bb: i64,
    correct_code_bb: i64,
    original_code_dd: i64,
    correct_code_dd: i64,
}

impl RctTotals {
    fn add(&mut self, amounts: &MonetaryAmounts) {
        self.original_wages += amounts.original_wages_tips_other;
        self.correct_wages += amounts.correct_wages_tips_other;
        self.original_fed_tax += amounts.original_federal_income_tax;
        self.correct_fed_tax += amounts.correct_federal_income_tax;
        self.original_ss_wages += amounts.original_social_security_wages;
        self.correct_ss_wages += amounts.correct_social_security_wages;
        self.original_ss_tax += amounts.original_social_security_tax;
        self.correct_ss_tax += amounts.correct_social_security_tax;
        self.original_medicare_wages += amounts.original_medicare_wages;
        self.correct_medicare_wages += amounts.correct_medicare_wages;
        self.original_medicare_tax += amounts.original_medicare_tax;
        self.correct_medicare_tax += amounts.correct_medicare_tax;
        self.original_ss_tips += amounts.original_social_security_tips;
        self.correct_ss_tips += amounts.correct_social_security_tips;
        self.original_dependent_care += amounts.original_dependent_care;
        self.correct_dependent_care += amounts.correct_dependent_care;
        self.original_nonqual_457 += amounts.original_nonqual_plan_457;
        self.correct_nonqual_457 += amounts.correct_nonqual_plan_457;
        self.original_nonqual_not_457 += amounts.original_nonqual_not_457;
        self.correct_nonqual_not_457 += amounts.correct_nonqual_not_457;
        self.original_code_d += amounts.original_code_d_401k;
        self.correct_code_d += amounts.correct_code_d_401k;
        self.original_code_e += amounts.original_code_e_403b;
        self.correct_code_e += amounts.correct_code_e_403b;
        self.original_code_g += amounts.original_code_g_457b;
        self.correct_code_g += amounts.correct_code_g_457b;
        self.original_code_w += amounts.original_code_w_hsa;
        self.correct_code_w += amounts.correct_code_w_hsa;
        self.original_code_aa += amounts.original_code_aa_roth_401k;
        self.correct_code_aa += amounts.correct_code_aa_roth_401k;
        self.original_code_bb += amounts.original_code_bb_roth_403b;
        self.correct_code_bb += amounts.correct_code_bb_roth_403b;
        self.original_code_dd += amounts.original_code_dd_health_coverage;
        self.correct_code_dd += amounts.correct_code_dd_health_coverage;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals_accumulate() {
        let mut totals = RctTotals::default();
        let amounts = MonetaryAmounts {
            original_wages_tips_other: 5_000_000,
            correct_wages_tips_other: 5_100_000,
            original_code_d_401k: 100,
            ..Default::default()
        };
        totals.add(&amounts);
        totals.add(&amounts);
        assert_eq!(totals.original_wages, 10_000_000);
        assert_eq!(totals.correct_wages, 10_200_000);
        assert_eq!(totals.original_code_d, 200);
        assert_eq!(totals.correct_code_d, 0);
    }

    #[test]
    fn test_rco_trigger() {
        let mut employee = EmployeeRecord::default();
        assert!(!has_rco_data(&employee));
        employee.amounts.correct_allocated_tips = 1;
        assert!(has_rco_data(&employee));

        let mut employee = EmployeeRecord::default();
        employee.amounts.original_code_ii_medicaid_waiver = 50;
        assert!(has_rco_data(&employee));
    }

    #[test]
    fn test_rcs_trigger() {
        let mut employee = EmployeeRecord::default();
        assert!(!has_rcs_data(&employee));
        employee.correct_state_code = Some("IL".to_string());
        assert!(has_rcs_data(&employee));

        let mut employee = EmployeeRecord::default();
        employee.amounts.original_state_income_tax = 100;
        assert!(has_rcs_data(&employee));

        // Empty string means absent; any other content is populated.
        let mut employee = EmployeeRecord::default();
        employee.original_state_code = Some(String::new());
        assert!(!has_rcs_data(&employee));
        employee.original_state_code = Some("  ".to_string());
        assert!(has_rcs_data(&employee));
    }

    #[test]
    fn test_record_kind_of() {
        let mut record = vec![b' '; RECORD_LEN];
        record[0..3].copy_from_slice(b"RCT");
        assert_eq!(record_kind_of(&record), RecordKind::Rct);
    }
}
