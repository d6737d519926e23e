//! EFW2C record layout catalog per SSA Publication 42-014.
//!
//! This crate is the authority on byte positions: for every supported tax
//! year it carries the field tables of the seven EFW2C record kinds (RCA,
//! RCE, RCW, RCO, RCS, RCT, RCF), each a gapless, non-overlapping partition
//! of the 1024-byte record. The generator crate consumes these tables; it
//! never hard-codes a position.
//!
//! # Modules
//!
//! - [`catalog`] - [`YearSpec`] lookup by tax year, with default-year fallback
//! - [`field`] - [`Field`] and [`FieldKind`] descriptors
//! - `layout` - the per-record-kind tables (TY2021-TY2024)
//! - [`record`] - [`RecordKind`]
//! - [`states`] - Appendix H postal-to-numeric state codes
//! - [`structure`] - the partition contract check
//!
//! # Example
//!
//! ```
//! use w2c_standards::{for_year, RecordKind};
//!
//! let (spec, exact) = for_year(2024);
//! assert!(exact);
//! let rcw = spec.fields(RecordKind::Rcw);
//! let box1 = rcw.iter().find(|f| f.name == "OrigWagesTipsOther").unwrap();
//! assert_eq!((box1.start, box1.end), (244, 254));
//! ```

pub mod catalog;
pub mod field;
mod layout;
pub mod record;
pub mod states;
pub mod structure;

pub use catalog::{for_year, supported, YearSpec, DEFAULT_YEAR};
pub use field::{find_field, Field, FieldKind, RECORD_LEN};
pub use record::RecordKind;
pub use states::postal_to_ssa_code;
pub use structure::{validate_layout, LayoutError};
