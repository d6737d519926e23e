//! Domain model for W-2c correction submissions.
//!
//! This crate provides the data types an enclosing application assembles
//! before handing a submission to the EFW2C generator: the submitter and
//! employer identities, the per-employee correction records with their
//! paired original/correct monetary amounts, and the tri-state Box 13
//! checkbox corrections.
//!
//! # Modules
//!
//! - [`employee`] - Employee correction records, monetary amounts, Box 13
//! - [`employer`] - Employer record and its code enums
//! - [`submission`] - Submission, submitter, and tax-year info types

pub mod employee;
pub mod employer;
pub mod submission;

pub use employee::{Box13Flags, CheckboxCorrection, EmployeeRecord, MonetaryAmounts};
pub use employer::{AgentIndicator, EmployerRecord, EmploymentCode, KindOfEmployer};
pub use submission::{PreparerCode, Submission, SubmitterRecord, TaxYearInfo};
