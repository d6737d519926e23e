//! RCS (state) record layout, SSA Pub 42-014 TY2024 section 5.9.
//!
//! Optional; SSA and IRS do not process it. Key fields only, the state
//! taxable wages and income tax of Boxes 16/17.

use super::{blank, opt, req};
use crate::field::{Field, FieldKind::*};

pub(crate) fn fields() -> Vec<Field> {
    vec![
        req("RecordIdentifier", 1, 3, Fixed, "Constant 'RCS'"),
        req("StateCode", 4, 5, Numeric, "Appendix H numeric state code"),
        opt("OrigTaxingEntityCode", 6, 10, Alpha, ""),
        opt("CorrectTaxingEntityCode", 11, 15, Alpha, ""),
        opt("OrigSSN", 16, 24, Numeric, ""),
        opt("CorrectSSN", 25, 33, Numeric, ""),
        opt("OrigFirstName", 34, 48, Alpha, ""),
        opt("OrigMiddleName", 49, 63, Alpha, ""),
        opt("OrigLastName", 64, 83, Alpha, ""),
        opt("CorrectFirstName", 84, 98, Alpha, ""),
        opt("CorrectMiddleName", 99, 113, Alpha, ""),
        opt("CorrectLastName", 114, 133, Alpha, ""),
        opt("LocationAddress", 134, 155, Alpha, ""),
        opt("DeliveryAddress", 156, 177, Alpha, ""),
        opt("City", 178, 199, Alpha, ""),
        opt("StateAbbrev", 200, 201, Alpha, ""),
        opt("ZIPCode", 202, 206, Numeric, ""),
        opt("ZIPExtension", 207, 210, Numeric, ""),
        blank("Blank211", 211, 395), // optional state-specific fields not required by SSA
        opt("StateCode2", 396, 397, Numeric, "State code for the Box 16/17 data"),
        opt("OrigStateWages", 398, 408, Money11, "Box 16 orig, state taxable wages"),
        opt("CorrectStateWages", 409, 419, Money11, "Box 16 corr"),
        opt("OrigStateIncomeTax", 420, 430, Money11, "Box 17 orig, state income tax withheld"),
        opt("CorrectStateIncomeTax", 431, 441, Money11, "Box 17 corr"),
        blank("Blank442", 442, 1024),
    ]
}
