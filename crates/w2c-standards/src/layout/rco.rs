//! RCO (employee optional) record layout, SSA Pub 42-014 TY2024
//! section 5.8. Emitted when Box 8 or one of its Box 12 codes needs
//! correction.
//!
//! TY2021-2023 end with a blank at 277-1024; TY2024 splices the Box 12
//! Code II pair over the head of that range (see the catalog).

use super::{blank, opt, req};
use crate::field::{Field, FieldKind::*};

pub(crate) fn fields() -> Vec<Field> {
    vec![
        req("RecordIdentifier", 1, 3, Fixed, "Constant 'RCO'"),
        blank("Blank4", 4, 12),
        opt("OrigAllocatedTips", 13, 23, Money11, "Box 8 orig, allocated tips"),
        opt("CorrectAllocatedTips", 24, 34, Money11, "Box 8 corr"),
        opt("OrigUncollectedEETax", 35, 45, Money11, "Box 12 Codes A&B orig, uncollected tax on tips"),
        opt("CorrectUncollectedEETax", 46, 56, Money11, "Box 12 Codes A&B corr"),
        opt("OrigCodeR_MSA", 57, 67, Money11, "Box 12 Code R orig, medical savings account"),
        opt("CorrectCodeR_MSA", 68, 78, Money11, "Box 12 Code R corr"),
        opt("OrigCodeS_SIMPLE", 79, 89, Money11, "Box 12 Code S orig, SIMPLE retirement account"),
        opt("CorrectCodeS_SIMPLE", 90, 100, Money11, "Box 12 Code S corr"),
        opt("OrigCodeT_Adoption", 101, 111, Money11, "Box 12 Code T orig, qualified adoption expenses"),
        opt("CorrectCodeT_Adoption", 112, 122, Money11, "Box 12 Code T corr"),
        opt("OrigCodeM_UncollSS", 123, 133, Money11, "Box 12 Code M orig, uncollected SS/RRTA on group-term life"),
        opt("CorrectCodeM_UncollSS", 134, 144, Money11, "Box 12 Code M corr"),
        opt("OrigCodeN_UncollMed", 145, 155, Money11, "Box 12 Code N orig, uncollected Medicare on group-term life"),
        opt("CorrectCodeN_UncollMed", 156, 166, Money11, "Box 12 Code N corr"),
        opt("OrigCodeZ_409A", 167, 177, Money11, "Box 12 Code Z orig, 409A income failing the section"),
        opt("CorrectCodeZ_409A", 178, 188, Money11, "Box 12 Code Z corr"),
        blank("Blank189", 189, 210),
        opt("OrigCodeEE_Roth457b", 211, 221, Money11, "Box 12 Code EE orig, designated Roth 457(b)"),
        opt("CorrectCodeEE_Roth457b", 222, 232, Money11, "Box 12 Code EE corr"),
        opt("OrigCodeGG_83i", 233, 243, Money11, "Box 12 Code GG orig, qualified equity grants (83(i))"),
        opt("CorrectCodeGG_83i", 244, 254, Money11, "Box 12 Code GG corr"),
        opt("OrigCodeHH_83iDeferral", 255, 265, Money11, "Box 12 Code HH orig, aggregate 83(i) deferrals"),
        opt("CorrectCodeHH_83iDeferral", 266, 276, Money11, "Box 12 Code HH corr"),
        blank("Blank277", 277, 1024),
    ]
}

/// The TY2024 Box 12 Code II (Medicaid waiver) delta, replacing Blank277.
pub(crate) fn code_ii_fields() -> Vec<Field> {
    vec![
        opt("OrigMedicaidWaiver", 277, 287, Money11, "Box 12 Code II orig, Medicaid waiver exclusion (TY2024+)"),
        opt("CorrectMedicaidWaiver", 288, 298, Money11, "Box 12 Code II corr"),
        blank("Blank299", 299, 1024),
    ]
}
