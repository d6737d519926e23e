//! Employer record and its code enums.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Agent indicator code, RCE position 26.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgentIndicator {
    /// 1 = 2678 agent
    Agent2678,
    /// 2 = Common paymaster
    CommonPaymaster,
    /// 3 = 3504 agent
    Agent3504,
}

impl AgentIndicator {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentIndicator::Agent2678 => "1",
            AgentIndicator::CommonPaymaster => "2",
            AgentIndicator::Agent3504 => "3",
        }
    }
}

impl fmt::Display for AgentIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AgentIndicator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(AgentIndicator::Agent2678),
            "2" => Ok(AgentIndicator::CommonPaymaster),
            "3" => Ok(AgentIndicator::Agent3504),
            _ => Err(format!("Unknown agent indicator: {}", s)),
        }
    }
}

/// Employment code, RCE position 223.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmploymentCode {
    /// A = Agriculture
    Agriculture,
    /// H = Household
    Household,
    /// M = Military
    Military,
    /// Q = Medicare Qualified Government Employment
    Mqge,
    /// R = Regular (all others)
    #[default]
    Regular,
    /// X = Railroad
    Railroad,
}

impl EmploymentCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmploymentCode::Agriculture => "A",
            EmploymentCode::Household => "H",
            EmploymentCode::Military => "M",
            EmploymentCode::Mqge => "Q",
            EmploymentCode::Regular => "R",
            EmploymentCode::Railroad => "X",
        }
    }
}

impl fmt::Display for EmploymentCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EmploymentCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "A" => Ok(EmploymentCode::Agriculture),
            "H" => Ok(EmploymentCode::Household),
            "M" => Ok(EmploymentCode::Military),
            "Q" => Ok(EmploymentCode::Mqge),
            "R" => Ok(EmploymentCode::Regular),
            "X" => Ok(EmploymentCode::Railroad),
            _ => Err(format!("Unknown employment code: {}", s)),
        }
    }
}

/// Kind of employer, RCE position 227.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum KindOfEmployer {
    /// F = Federal government
    Federal,
    /// S = State/local government, non-501(c)
    StateLocal,
    /// T = Tax-exempt 501(c) organization
    TaxExempt,
    /// Y = State/local government, 501(c)
    StateLocalTaxExempt,
    /// N = None apply
    #[default]
    None,
}

impl KindOfEmployer {
    pub fn as_str(&self) -> &'static str {
        match self {
            KindOfEmployer::Federal => "F",
            KindOfEmployer::StateLocal => "S",
            KindOfEmployer::TaxExempt => "T",
            KindOfEmployer::StateLocalTaxExempt => "Y",
            KindOfEmployer::None => "N",
        }
    }
}

impl fmt::Display for KindOfEmployer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for KindOfEmployer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "F" => Ok(KindOfEmployer::Federal),
            "S" => Ok(KindOfEmployer::StateLocal),
            "T" => Ok(KindOfEmployer::TaxExempt),
            "Y" => Ok(KindOfEmployer::StateLocalTaxExempt),
            "N" => Ok(KindOfEmployer::None),
            _ => Err(format!("Unknown kind of employer: {}", s)),
        }
    }
}

/// Employer identity for the RCE record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployerRecord {
    /// Employer EIN, 9 digits, no hyphens.
    pub ein: String,
    /// Originally reported EIN; set only for EIN-correction filings.
    pub original_ein: Option<String>,
    pub name: String,
    /// Location address (Attn, Suite, etc.).
    pub address_line1: String,
    /// Delivery address (street or PO box).
    pub address_line2: String,
    pub city: String,
    /// Two-letter state postal abbreviation.
    pub state: String,
    pub zip: String,
    pub zip_extension: String,
    /// Tax year being corrected, e.g. "2024".
    pub tax_year: String,
    pub agent_indicator: Option<AgentIndicator>,
    /// Client EIN for 2678/3504 agents and common paymasters.
    pub agent_ein: Option<String>,
    pub terminating_business: bool,
    pub employment_code: EmploymentCode,
    pub kind_of_employer: KindOfEmployer,
    pub contact_name: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employment_code_defaults() {
        assert_eq!(EmploymentCode::default().as_str(), "R");
        assert_eq!(KindOfEmployer::default().as_str(), "N");
    }

    #[test]
    fn test_code_parsing() {
        assert_eq!(
            "q".parse::<EmploymentCode>().unwrap(),
            EmploymentCode::Mqge
        );
        assert_eq!(
            "Y".parse::<KindOfEmployer>().unwrap(),
            KindOfEmployer::StateLocalTaxExempt
        );
        assert_eq!(
            "2".parse::<AgentIndicator>().unwrap(),
            AgentIndicator::CommonPaymaster
        );
        assert!("0".parse::<AgentIndicator>().is_err());
    }
}
