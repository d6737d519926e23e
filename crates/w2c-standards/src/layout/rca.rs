//! RCA (submitter) record layout, SSA Pub 42-014 TY2024 section 5.5.
//!
//! Positions verified against AccuWage Online TY2021 error output.

use super::{blank, opt, req};
use crate::field::{Field, FieldKind::*};

pub(crate) fn fields() -> Vec<Field> {
    vec![
        req("RecordIdentifier", 1, 3, Fixed, "Constant 'RCA'"),
        req("SubmitterEIN", 4, 12, Numeric, "Submitter EIN, 9 digits, no hyphens"),
        req("BSOUID", 13, 20, Alpha, "BSO User ID assigned at SSA registration, 8 chars"),
        opt("SoftwareVendorCode", 21, 24, Numeric, "NACTP vendor code; only when SoftwareCode=99"),
        blank("Blank25", 25, 29),
        opt("SoftwareCode", 30, 31, Numeric, "98=in-house program 99=off-the-shelf software"),
        req("CompanyName", 32, 88, Alpha, "Submitter company name, 57 chars"),
        req("LocationAddress", 89, 110, Alpha, "Attn, suite, etc., 22 chars"),
        req("DeliveryAddress", 111, 132, Alpha, "Street or PO box, 22 chars"),
        req("City", 133, 154, Alpha, "City, 22 chars"),
        opt("StateAbbrev", 155, 156, Alpha, "State abbreviation; blank for foreign address"),
        opt("ZIPCode", 157, 161, Numeric, "ZIP code; blank for foreign address"),
        opt("ZIPExtension", 162, 165, Numeric, "ZIP+4 extension"),
        blank("Blank166", 166, 171),
        opt("ForeignStateProvince", 172, 194, Alpha, "Required when StateAbbrev is blank"),
        opt("ForeignPostalCode", 195, 209, Alpha, "Foreign postal code, 15 chars"),
        opt("CountryCode", 210, 211, Alpha, "Appendix I country code; blank for USA"),
        req("ContactName", 212, 238, Alpha, "A-Z 0-9 space hyphen period apostrophe only"),
        req("ContactPhone", 239, 253, Numeric, "Numeric only, e.g. 8005551234"),
        opt("PhoneExtension", 254, 258, Numeric, "Phone extension"),
        blank("Blank259", 259, 261),
        req("ContactEmail", 262, 301, Alpha, "Contact e-mail"),
        blank("Blank302", 302, 304),
        opt("ContactFax", 305, 314, Numeric, "Contact fax number"),
        blank("Blank315", 315, 315),
        opt("PreparerCode", 316, 316, Alpha, "A=accounting firm L=self S=service bureau P=parent O=other"),
        req("ResubIndicator", 317, 317, Alpha, "0=original submission 1=resubmission"),
        opt("ResubWFID", 318, 323, Alpha, "Original WFID, resubmissions only, 6 chars"),
        blank("Blank324", 324, 1024),
    ]
}
