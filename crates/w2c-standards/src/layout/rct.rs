//! RCT (total) record layout, SSA Pub 42-014 TY2024 section 5.10.
//!
//! Totals of the RCW money fields for the preceding RCE, in the 15-char
//! money format.

use super::{blank, opt, req};
use crate::field::{Field, FieldKind::*};

pub(crate) fn fields() -> Vec<Field> {
    vec![
        req("RecordIdentifier", 1, 3, Fixed, "Constant 'RCT'"),
        req("TotalRCWRecords", 4, 10, Numeric, "RCW count, 7 digits zero-padded"),
        opt("OrigTotalWagesTips", 11, 25, Money15, "Box 1 orig total"),
        opt("CorrectTotalWagesTips", 26, 40, Money15, "Box 1 corr total"),
        opt("OrigTotalFedIncomeTax", 41, 55, Money15, "Box 2 orig total"),
        opt("CorrectTotalFedIncomeTax", 56, 70, Money15, "Box 2 corr total"),
        opt("OrigTotalSSWages", 71, 85, Money15, "Box 3 orig total"),
        opt("CorrectTotalSSWages", 86, 100, Money15, "Box 3 corr total"),
        opt("OrigTotalSSTax", 101, 115, Money15, "Box 4 orig total"),
        opt("CorrectTotalSSTax", 116, 130, Money15, "Box 4 corr total"),
        opt("OrigTotalMedicareWages", 131, 145, Money15, "Box 5 orig total"),
        opt("CorrectTotalMedicareWages", 146, 160, Money15, "Box 5 corr total"),
        opt("OrigTotalMedicareTax", 161, 175, Money15, "Box 6 orig total"),
        opt("CorrectTotalMedicareTax", 176, 190, Money15, "Box 6 corr total"),
        opt("OrigTotalSSTips", 191, 205, Money15, "Box 7 orig total"),
        opt("CorrectTotalSSTips", 206, 220, Money15, "Box 7 corr total"),
        blank("Blank221", 221, 250),
        opt("OrigTotalDependentCare", 251, 265, Money15, "Box 10 orig total"),
        opt("CorrectTotalDependentCare", 266, 280, Money15, "Box 10 corr total"),
        opt("OrigTotalCode401k", 281, 295, Money15, "Box 12 Code D orig total"),
        opt("CorrectTotalCode401k", 296, 310, Money15, "Box 12 Code D corr total"),
        opt("OrigTotalCode403b", 311, 325, Money15, "Box 12 Code E orig total"),
        opt("CorrectTotalCode403b", 326, 340, Money15, "Box 12 Code E corr total"),
        opt("OrigTotalCodeF", 341, 355, Money15, "Box 12 Code F orig total"),
        opt("CorrectTotalCodeF", 356, 370, Money15, "Box 12 Code F corr total"),
        opt("OrigTotalCode457bGovt", 371, 385, Money15, "Box 12 Code G orig total"),
        opt("CorrectTotalCode457bGovt", 386, 400, Money15, "Box 12 Code G corr total"),
        opt("OrigTotalCodeH", 401, 415, Money15, "Box 12 Code H orig total"),
        opt("CorrectTotalCodeH", 416, 430, Money15, "Box 12 Code H corr total"),
        opt("OrigTotalTIBDeferredComp", 431, 445, Money15, "TIB total deferred comp orig"),
        opt("CorrectTotalTIBDeferredComp", 446, 460, Money15, "TIB total deferred comp corr"),
        blank("Blank461", 461, 490),
        opt("OrigTotalNonqualPlan457", 491, 505, Money15, "Box 11 Section 457 orig total"),
        opt("CorrectTotalNonqualPlan457", 506, 520, Money15, "Box 11 Section 457 corr total"),
        opt("OrigTotalCodeW_HSA", 521, 535, Money15, "Box 12 Code W orig total"),
        opt("CorrectTotalCodeW_HSA", 536, 550, Money15, "Box 12 Code W corr total"),
        opt("OrigTotalNonqualNotSection457", 551, 565, Money15, "Box 11 non-457 orig total"),
        opt("CorrectTotalNonqualNotSection457", 566, 580, Money15, "Box 11 non-457 corr total"),
        opt("OrigTotalCodeQ", 581, 595, Money15, "Box 12 Code Q orig total"),
        opt("CorrectTotalCodeQ", 596, 610, Money15, "Box 12 Code Q corr total"),
        blank("Blank611", 611, 640),
        opt("OrigTotalCodeC", 641, 655, Money15, "Box 12 Code C orig total"),
        opt("CorrectTotalCodeC", 656, 670, Money15, "Box 12 Code C corr total"),
        opt("OrigTotalCodeV", 671, 685, Money15, "Box 12 Code V orig total"),
        opt("CorrectTotalCodeV", 686, 700, Money15, "Box 12 Code V corr total"),
        opt("OrigTotalCodeY", 701, 715, Money15, "Box 12 Code Y orig total"),
        opt("CorrectTotalCodeY", 716, 730, Money15, "Box 12 Code Y corr total"),
        opt("OrigTotalCodeAA_Roth401k", 731, 745, Money15, "Box 12 Code AA orig total"),
        opt("CorrectTotalCodeAA_Roth401k", 746, 760, Money15, "Box 12 Code AA corr total"),
        opt("OrigTotalCodeBB_Roth403b", 761, 775, Money15, "Box 12 Code BB orig total"),
        opt("CorrectTotalCodeBB_Roth403b", 776, 790, Money15, "Box 12 Code BB corr total"),
        opt("OrigTotalCodeDD_EmpHealth", 791, 805, Money15, "Box 12 Code DD orig total"),
        opt("CorrectTotalCodeDD_EmpHealth", 806, 820, Money15, "Box 12 Code DD corr total"),
        opt("OrigTotalCodeFF_QSEHRA", 821, 835, Money15, "Box 12 Code FF orig total"),
        opt("CorrectTotalCodeFF_QSEHRA", 836, 850, Money15, "Box 12 Code FF corr total"),
        blank("Blank851", 851, 1024),
    ]
}
