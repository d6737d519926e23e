//! RCE (employer) record layout, SSA Pub 42-014 TY2024 section 5.6.

use super::{blank, opt, req};
use crate::field::{Field, FieldKind::*};

pub(crate) fn fields() -> Vec<Field> {
    vec![
        req("RecordIdentifier", 1, 3, Fixed, "Constant 'RCE'"),
        req("TaxYear", 4, 7, Alpha, "Tax year being corrected, e.g. '2024'"),
        opt("OrigReportedEIN", 8, 16, Numeric, "Originally reported EIN, EIN-correction filings only"),
        req("EmployerEIN", 17, 25, Numeric, "Employer/agent EIN used to post W-2c data"),
        opt("AgentIndicatorCode", 26, 26, Alpha, "blank=none 1=2678 agent 2=common paymaster 3=3504 agent"),
        opt("AgentForEIN", 27, 35, Numeric, "Client EIN for 2678/3504 agents and common paymasters"),
        opt("OrigEstablishmentNum", 36, 39, Alpha, "Originally reported establishment number"),
        opt("CorrectEstablishmentNum", 40, 43, Alpha, "Correct establishment number"),
        req("EmployerName", 44, 100, Alpha, "Employer name, 57 chars"),
        req("LocationAddress", 101, 122, Alpha, "Attn, suite, etc., 22 chars"),
        opt("DeliveryAddress", 123, 144, Alpha, "Street or PO box, 22 chars"),
        req("City", 145, 166, Alpha, "City, 22 chars"),
        opt("StateAbbrev", 167, 168, Alpha, "State abbreviation; blank for foreign address"),
        opt("ZIPCode", 169, 173, Numeric, "ZIP code; blank for foreign address"),
        opt("ZIPExtension", 174, 177, Numeric, "ZIP+4 extension"),
        blank("Blank178", 178, 181),
        opt("ForeignStateProvince", 182, 204, Alpha, "Foreign state/province, 23 chars"),
        opt("ForeignPostalCode", 205, 219, Alpha, "Foreign postal code, 15 chars"),
        opt("CountryCode", 220, 221, Alpha, "Appendix I country code; blank for USA"),
        opt("OrigEmploymentCode", 222, 222, Alpha, "Originally reported employment code; blank if no correction"),
        req("CorrectEmploymentCode", 223, 223, Alpha, "A=agri H=household M=military Q=MQGE R=regular X=railroad"),
        opt("OrigThirdPartySick", 224, 224, Alpha, "Originally reported third-party sick pay indicator"),
        opt("CorrectThirdPartySick", 225, 225, Alpha, "Correct third-party sick pay indicator, 1=yes"),
        blank("Blank226", 226, 226),
        opt("KindOfEmployer", 227, 227, Alpha, "F=federal S=state/local T=tax-exempt Y=state/local 501c N=none"),
        opt("ContactName", 228, 254, Alpha, "Employer contact name, 27 chars"),
        opt("ContactPhone", 255, 269, Numeric, "Employer contact phone, 15 chars"),
        opt("PhoneExtension", 270, 274, Numeric, "Employer contact phone extension"),
        opt("ContactFax", 275, 284, Numeric, "Employer contact fax number"),
        opt("ContactEmail", 285, 324, Alpha, "Employer contact e-mail, 40 chars"),
        blank("Blank325", 325, 1024),
    ]
}
