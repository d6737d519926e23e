//! RCW (employee correction) record layout, SSA Pub 42-014 TY2024
//! section 5.7. Money amounts are the 11-char zero-filled format.

use super::{blank, opt, req};
use crate::field::{Field, FieldKind::*};

pub(crate) fn fields() -> Vec<Field> {
    vec![
        req("RecordIdentifier", 1, 3, Fixed, "Constant 'RCW'"),
        req("OrigSSN", 4, 12, Numeric, "Originally reported SSN, 9 digits"),
        opt("CorrectSSN", 13, 21, Numeric, "Correct SSN, only when correcting SSN"),
        // Name fields: first / middle / last ordering per the publication.
        opt("OrigFirstName", 22, 36, Alpha, "Originally reported first name, 15 chars"),
        opt("OrigMiddleName", 37, 51, Alpha, "Originally reported middle name or initial, 15 chars"),
        opt("OrigLastName", 52, 71, Alpha, "Originally reported last name, 20 chars"),
        opt("CorrectFirstName", 72, 86, Alpha, "Correct first name, 15 chars"),
        opt("CorrectMiddleName", 87, 101, Alpha, "Correct middle name or initial, 15 chars"),
        opt("CorrectLastName", 102, 121, Alpha, "Correct last name, 20 chars"),
        opt("LocationAddress", 122, 143, Alpha, "Attn, suite, etc., 22 chars"),
        opt("DeliveryAddress", 144, 165, Alpha, "Street or PO box, 22 chars"),
        opt("City", 166, 187, Alpha, "City, 22 chars"),
        opt("StateAbbrev", 188, 189, Alpha, "State abbreviation; blank for foreign address"),
        opt("ZIPCode", 190, 194, Numeric, "ZIP code"),
        opt("ZIPExtension", 195, 198, Numeric, "ZIP+4 extension"),
        blank("Blank199", 199, 203),
        opt("ForeignStateProvince", 204, 226, Alpha, "Foreign state/province, 23 chars"),
        opt("ForeignPostalCode", 227, 241, Alpha, "Foreign postal code, 15 chars"),
        opt("CountryCode", 242, 243, Alpha, "Appendix I country code; blank for USA"),
        // Boxes 1-7 at 244-397.
        opt("OrigWagesTipsOther", 244, 254, Money11, "Box 1 orig"),
        opt("CorrectWagesTipsOther", 255, 265, Money11, "Box 1 corr"),
        opt("OrigFedIncomeTax", 266, 276, Money11, "Box 2 orig"),
        opt("CorrectFedIncomeTax", 277, 287, Money11, "Box 2 corr"),
        opt("OrigSSWages", 288, 298, Money11, "Box 3 orig"),
        opt("CorrectSSWages", 299, 309, Money11, "Box 3 corr"),
        opt("OrigSSTax", 310, 320, Money11, "Box 4 orig"),
        opt("CorrectSSTax", 321, 331, Money11, "Box 4 corr"),
        opt("OrigMedicareWages", 332, 342, Money11, "Box 5 orig"),
        opt("CorrectMedicareWages", 343, 353, Money11, "Box 5 corr"),
        opt("OrigMedicareTax", 354, 364, Money11, "Box 6 orig"),
        opt("CorrectMedicareTax", 365, 375, Money11, "Box 6 corr"),
        opt("OrigSSTips", 376, 386, Money11, "Box 7 orig"),
        opt("CorrectSSTips", 387, 397, Money11, "Box 7 corr"),
        blank("Blank398", 398, 419), // was Box 9 Advance EIC, eliminated 2011
        opt("OrigDependentCare", 420, 430, Money11, "Box 10 orig, dependent care benefits"),
        opt("CorrectDependentCare", 431, 441, Money11, "Box 10 corr"),
        opt("OrigCode401k", 442, 452, Money11, "Box 12 Code D orig, 401(k) elective deferrals"),
        opt("CorrectCode401k", 453, 463, Money11, "Box 12 Code D corr"),
        opt("OrigCode403b", 464, 474, Money11, "Box 12 Code E orig, 403(b) elective deferrals"),
        opt("CorrectCode403b", 475, 485, Money11, "Box 12 Code E corr"),
        opt("OrigCodeF", 486, 496, Money11, "Box 12 Code F orig, 408(k)(6) SEP"),
        opt("CorrectCodeF", 497, 507, Money11, "Box 12 Code F corr"),
        opt("OrigCode457bGovt", 508, 518, Money11, "Box 12 Code G orig, 457(b) govt plan deferrals"),
        opt("CorrectCode457bGovt", 519, 529, Money11, "Box 12 Code G corr"),
        opt("OrigCodeH", 530, 540, Money11, "Box 12 Code H orig, 501(c)(18)(D) plan"),
        opt("CorrectCodeH", 541, 551, Money11, "Box 12 Code H corr"),
        opt("OrigTIBDeferredComp", 552, 562, Money11, "Total deferred comp, TIB format only (1987-2005)"),
        opt("CorrectTIBDeferredComp", 563, 573, Money11, "Total deferred comp corr, TIB only"),
        blank("Blank574", 574, 595),
        // Box 11 nonqualified plans, split into Section 457 and non-457.
        opt("OrigNonqualPlan457", 596, 606, Money11, "Box 11 orig, Section 457"),
        opt("CorrectNonqualPlan457", 607, 617, Money11, "Box 11 corr, Section 457"),
        opt("OrigCodeW_HSA", 618, 628, Money11, "Box 12 Code W orig, employer HSA contributions"),
        opt("CorrectCodeW_HSA", 629, 639, Money11, "Box 12 Code W corr"),
        opt("OrigNonqualNotSection457", 640, 650, Money11, "Box 11 orig, not Section 457"),
        opt("CorrectNonqualNotSection457", 651, 661, Money11, "Box 11 corr, not Section 457"),
        opt("OrigCodeQ", 662, 672, Money11, "Box 12 Code Q orig, nontaxable combat pay"),
        opt("CorrectCodeQ", 673, 683, Money11, "Box 12 Code Q corr"),
        blank("Blank684", 684, 705),
        opt("OrigCodeC", 706, 716, Money11, "Box 12 Code C orig, group-term life insurance over $50k"),
        opt("CorrectCodeC", 717, 727, Money11, "Box 12 Code C corr"),
        opt("OrigCodeV", 728, 738, Money11, "Box 12 Code V orig, nonstatutory stock options"),
        opt("CorrectCodeV", 739, 749, Money11, "Box 12 Code V corr"),
        opt("OrigCodeY", 750, 760, Money11, "Box 12 Code Y orig, 409A NQDC deferrals"),
        opt("CorrectCodeY", 761, 771, Money11, "Box 12 Code Y corr"),
        opt("OrigCodeAA_Roth401k", 772, 782, Money11, "Box 12 Code AA orig, designated Roth 401(k)"),
        opt("CorrectCodeAA_Roth401k", 783, 793, Money11, "Box 12 Code AA corr"),
        opt("OrigCodeBB_Roth403b", 794, 804, Money11, "Box 12 Code BB orig, designated Roth 403(b)"),
        opt("CorrectCodeBB_Roth403b", 805, 815, Money11, "Box 12 Code BB corr"),
        opt("OrigCodeDD_EmpHealth", 816, 826, Money11, "Box 12 Code DD orig, employer health coverage cost"),
        opt("CorrectCodeDD_EmpHealth", 827, 837, Money11, "Box 12 Code DD corr"),
        opt("OrigCodeFF_QSEHRA", 838, 848, Money11, "Box 12 Code FF orig, QSEHRA permitted benefits"),
        opt("CorrectCodeFF_QSEHRA", 849, 859, Money11, "Box 12 Code FF corr"),
        blank("Blank860", 860, 1002),
        // Box 13 checkboxes, one orig/correct indicator pair each.
        opt("OrigStatutoryEmployee", 1003, 1003, Alpha, "Box 13 statutory employee orig, 1=yes 0=no"),
        opt("CorrectStatutoryEmployee", 1004, 1004, Alpha, "Box 13 statutory employee correct"),
        opt("OrigRetirementPlan", 1005, 1005, Alpha, "Box 13 retirement plan orig"),
        opt("CorrectRetirementPlan", 1006, 1006, Alpha, "Box 13 retirement plan correct"),
        opt("OrigThirdPartySickPay", 1007, 1007, Alpha, "Box 13 third-party sick pay orig"),
        opt("CorrectThirdPartySickPay", 1008, 1008, Alpha, "Box 13 third-party sick pay correct"),
        blank("Blank1009", 1009, 1024),
    ]
}
