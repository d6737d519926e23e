//! The per-tax-year layout catalog.
//!
//! One [`YearSpec`] per supported tax year, built once at first use and
//! read-only thereafter. Later years derive from the shared base layout
//! plus their deltas; the base is never mutated.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::field::Field;
use crate::layout;
use crate::record::RecordKind;
use crate::structure::{validate_layout, LayoutError};

/// The tax year whose layout is used when an unmodeled year is requested.
pub const DEFAULT_YEAR: u16 = 2024;

/// The record layouts and constants of one tax year.
#[derive(Debug, Clone)]
pub struct YearSpec {
    pub tax_year: u16,
    /// The SSA Pub 42-014 edition this layout was transcribed from.
    pub publication_url: &'static str,
    /// Social Security taxable-wage ceiling for the year, in cents.
    pub ss_wage_base: i64,
    pub rca: Vec<Field>,
    pub rce: Vec<Field>,
    pub rcw: Vec<Field>,
    pub rco: Vec<Field>,
    pub rcs: Vec<Field>,
    pub rct: Vec<Field>,
    pub rcf: Vec<Field>,
}

impl YearSpec {
    /// The field list for a record kind.
    pub fn fields(&self, kind: RecordKind) -> &[Field] {
        match kind {
            RecordKind::Rca => &self.rca,
            RecordKind::Rce => &self.rce,
            RecordKind::Rcw => &self.rcw,
            RecordKind::Rco => &self.rco,
            RecordKind::Rcs => &self.rcs,
            RecordKind::Rct => &self.rct,
            RecordKind::Rcf => &self.rcf,
        }
    }

    /// Check every record kind against the partition contract
    /// (start at 1, gapless, non-overlapping, end at 1024).
    pub fn validate(&self) -> Result<(), LayoutError> {
        for kind in RecordKind::ALL {
            validate_layout(kind, self.fields(kind))?;
        }
        Ok(())
    }
}

/// Supported tax years, ascending.
pub fn supported() -> &'static [u16] {
    &[2021, 2022, 2023, 2024]
}

/// The spec for a tax year.
///
/// Total: an unmodeled year falls back to the [`DEFAULT_YEAR`] layout, with
/// the second tuple element `false` so callers can surface the fallback.
pub fn for_year(year: u16) -> (&'static YearSpec, bool) {
    match SPECS.get(&year) {
        Some(spec) => (spec, true),
        None => (
            SPECS.get(&DEFAULT_YEAR).expect("default year spec"),
            false,
        ),
    }
}

static SPECS: LazyLock<BTreeMap<u16, YearSpec>> = LazyLock::new(|| {
    BTreeMap::from([
        (2021, ty2021()),
        (2022, ty2022()),
        (2023, ty2023()),
        (2024, ty2024()),
    ])
});

fn ty2021() -> YearSpec {
    let mut spec = base_spec(2021);
    spec.publication_url = "https://www.ssa.gov/employer/efw/21efw2c.pdf";
    spec.ss_wage_base = 14_280_000;
    spec
}

fn ty2022() -> YearSpec {
    let mut spec = base_spec(2022);
    spec.publication_url = "https://www.ssa.gov/employer/efw/22efw2c.pdf";
    spec.ss_wage_base = 14_700_000;
    spec
}

fn ty2023() -> YearSpec {
    let mut spec = base_spec(2023);
    spec.publication_url = "https://www.ssa.gov/employer/efw/23efw2c.pdf";
    spec.ss_wage_base = 16_020_000;
    spec
}

fn ty2024() -> YearSpec {
    let mut spec = base_spec(2024);
    spec.publication_url = "https://www.ssa.gov/employer/efw/24efw2c.pdf";
    spec.ss_wage_base = 16_860_000;
    // TY2024 adds Box 12 Code II (Medicaid waiver) to RCO at 277-298,
    // replacing the head of the trailing blank.
    spec.rco.pop();
    spec.rco.extend(layout::rco::code_ii_fields());
    spec
}

/// The record layouts shared across TY2021-TY2024.
fn base_spec(year: u16) -> YearSpec {
    YearSpec {
        tax_year: year,
        publication_url: "",
        ss_wage_base: 0,
        rca: layout::rca::fields(),
        rce: layout::rce::fields(),
        rcw: layout::rcw::fields(),
        rco: layout::rco::fields(),
        rcs: layout::rcs::fields(),
        rct: layout::rct::fields(),
        rcf: layout::rcf::fields(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_year_exact() {
        let (spec, exact) = for_year(2022);
        assert!(exact);
        assert_eq!(spec.tax_year, 2022);
        assert_eq!(spec.ss_wage_base, 14_700_000);
    }

    #[test]
    fn test_for_year_fallback() {
        let (spec, exact) = for_year(2019);
        assert!(!exact);
        assert_eq!(spec.tax_year, DEFAULT_YEAR);
    }

    #[test]
    fn test_supported_is_ascending() {
        let years = supported();
        assert!(years.windows(2).all(|w| w[0] < w[1]));
        for &year in years {
            assert!(for_year(year).1, "year {year} should be modeled");
        }
    }
}
