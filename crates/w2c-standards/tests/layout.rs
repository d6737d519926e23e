use w2c_standards::{find_field, for_year, supported, Field, FieldKind, RecordKind};

fn field<'a>(fields: &'a [Field], name: &str) -> &'a Field {
    find_field(fields, name).unwrap_or_else(|| panic!("field {name} missing"))
}

fn assert_position(fields: &[Field], name: &str, start: u16, end: u16) {
    let f = field(fields, name);
    assert_eq!(
        (f.start, f.end),
        (start, end),
        "{name} expected {start}-{end}, got {}-{}",
        f.start,
        f.end
    );
}

#[test]
fn every_year_and_kind_partitions_the_record() {
    for &year in supported() {
        let (spec, exact) = for_year(year);
        assert!(exact, "TY{year} should be modeled");
        spec.validate()
            .unwrap_or_else(|e| panic!("TY{year}: {e}"));
    }
}

#[test]
fn record_identifiers_occupy_first_three_bytes() {
    for &year in supported() {
        let (spec, _) = for_year(year);
        for kind in RecordKind::ALL {
            let first = &spec.fields(kind)[0];
            assert_eq!(first.name, "RecordIdentifier");
            assert_eq!((first.start, first.end), (1, 3));
            assert_eq!(first.kind, FieldKind::Fixed);
        }
    }
}

#[test]
fn rca_positions() {
    let (spec, _) = for_year(2024);
    assert_position(&spec.rca, "SubmitterEIN", 4, 12);
    assert_position(&spec.rca, "BSOUID", 13, 20);
    assert_position(&spec.rca, "CompanyName", 32, 88);
    assert_position(&spec.rca, "ContactName", 212, 238);
    assert_position(&spec.rca, "ContactPhone", 239, 253);
    assert_position(&spec.rca, "ContactEmail", 262, 301);
    assert_position(&spec.rca, "PreparerCode", 316, 316);
    assert_position(&spec.rca, "ResubIndicator", 317, 317);
    assert_position(&spec.rca, "ResubWFID", 318, 323);
}

#[test]
fn rce_positions() {
    let (spec, _) = for_year(2024);
    assert_position(&spec.rce, "TaxYear", 4, 7);
    assert_position(&spec.rce, "OrigReportedEIN", 8, 16);
    assert_position(&spec.rce, "EmployerEIN", 17, 25);
    assert_position(&spec.rce, "AgentIndicatorCode", 26, 26);
    assert_position(&spec.rce, "AgentForEIN", 27, 35);
    assert_position(&spec.rce, "EmployerName", 44, 100);
    assert_position(&spec.rce, "OrigEmploymentCode", 222, 222);
    assert_position(&spec.rce, "CorrectEmploymentCode", 223, 223);
    assert_position(&spec.rce, "KindOfEmployer", 227, 227);
    assert_position(&spec.rce, "ContactEmail", 285, 324);
}

#[test]
fn rcw_key_positions() {
    let (spec, _) = for_year(2024);
    assert_position(&spec.rcw, "OrigSSN", 4, 12);
    assert_position(&spec.rcw, "CorrectSSN", 13, 21);
    assert_position(&spec.rcw, "OrigFirstName", 22, 36);
    assert_position(&spec.rcw, "OrigLastName", 52, 71);
    assert_position(&spec.rcw, "CorrectFirstName", 72, 86);
    assert_position(&spec.rcw, "CorrectLastName", 102, 121);
    assert_position(&spec.rcw, "OrigWagesTipsOther", 244, 254);
    assert_position(&spec.rcw, "CorrectWagesTipsOther", 255, 265);
    assert_position(&spec.rcw, "OrigMedicareTax", 354, 364);
    assert_position(&spec.rcw, "OrigSSTips", 376, 386);
    assert_position(&spec.rcw, "CorrectSSTips", 387, 397);
    assert_position(&spec.rcw, "OrigDependentCare", 420, 430);
    assert_position(&spec.rcw, "CorrectDependentCare", 431, 441);
    assert_position(&spec.rcw, "OrigNonqualPlan457", 596, 606);
    assert_position(&spec.rcw, "OrigNonqualNotSection457", 640, 650);
    assert_position(&spec.rcw, "OrigStatutoryEmployee", 1003, 1003);
    assert_position(&spec.rcw, "CorrectThirdPartySickPay", 1008, 1008);

    for name in [
        "OrigWagesTipsOther",
        "CorrectCodeDD_EmpHealth",
        "OrigCodeW_HSA",
    ] {
        assert_eq!(field(&spec.rcw, name).kind, FieldKind::Money11);
        assert_eq!(field(&spec.rcw, name).width(), 11);
    }
}

#[test]
fn rco_positions() {
    let (spec, _) = for_year(2024);
    assert_position(&spec.rco, "OrigAllocatedTips", 13, 23);
    assert_position(&spec.rco, "CorrectAllocatedTips", 24, 34);
    assert_position(&spec.rco, "OrigCodeEE_Roth457b", 211, 221);
    assert_position(&spec.rco, "OrigCodeHH_83iDeferral", 255, 265);
    assert_position(&spec.rco, "CorrectCodeHH_83iDeferral", 266, 276);
}

#[test]
fn rct_key_positions() {
    let (spec, _) = for_year(2024);
    assert_position(&spec.rct, "TotalRCWRecords", 4, 10);
    assert_position(&spec.rct, "OrigTotalWagesTips", 11, 25);
    assert_position(&spec.rct, "CorrectTotalWagesTips", 26, 40);
    assert_position(&spec.rct, "OrigTotalSSTips", 191, 205);
    assert_position(&spec.rct, "CorrectTotalSSTips", 206, 220);
    assert_position(&spec.rct, "OrigTotalDependentCare", 251, 265);
    assert_position(&spec.rct, "CorrectTotalCodeDD_EmpHealth", 806, 820);

    for name in ["OrigTotalWagesTips", "CorrectTotalCodeFF_QSEHRA"] {
        assert_eq!(field(&spec.rct, name).kind, FieldKind::Money15);
        assert_eq!(field(&spec.rct, name).width(), 15);
    }
}

#[test]
fn ty2024_rco_carries_code_ii() {
    let (spec, _) = for_year(2024);
    assert_position(&spec.rco, "OrigMedicaidWaiver", 277, 287);
    assert_position(&spec.rco, "CorrectMedicaidWaiver", 288, 298);
    assert_position(&spec.rco, "Blank299", 299, 1024);
}

#[test]
fn pre_2024_rco_has_no_code_ii() {
    for year in [2021, 2022, 2023] {
        let (spec, _) = for_year(year);
        assert!(find_field(&spec.rco, "OrigMedicaidWaiver").is_none());
        assert_position(&spec.rco, "Blank277", 277, 1024);
    }
}

#[test]
fn wage_bases_and_publications() {
    let cases = [
        (2021, 14_280_000, "21efw2c.pdf"),
        (2022, 14_700_000, "22efw2c.pdf"),
        (2023, 16_020_000, "23efw2c.pdf"),
        (2024, 16_860_000, "24efw2c.pdf"),
    ];
    for (year, wage_base, suffix) in cases {
        let (spec, _) = for_year(year);
        assert_eq!(spec.ss_wage_base, wage_base, "TY{year} wage base");
        assert!(
            spec.publication_url.ends_with(suffix),
            "TY{year} publication URL"
        );
    }
}
