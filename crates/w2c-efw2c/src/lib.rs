//! EFW2C (SSA Publication 42-014) correction file writer.
//!
//! Produces the byte-exact fixed-width submission stream for correcting
//! previously filed W-2 wage statements: 1024-byte records, no separators,
//! in the order RCA, RCE, then per employee an RCW with optional RCO and
//! RCS, then RCT totals and the RCF final record.
//!
//! Byte positions come from the [`w2c_standards`] layout catalog; this
//! crate never hard-codes one.
//!
//! # Example
//!
//! ```
//! use w2c_efw2c::Generator;
//! use w2c_model::Submission;
//!
//! let submission = Submission::default();
//! let generator = Generator::new(2024);
//! let mut stream = Vec::new();
//! generator.generate(&submission, &mut stream).unwrap();
//! assert_eq!(stream.len() % 1024, 0);
//! assert_eq!(&stream[0..3], b"RCA");
//! ```

pub mod error;
pub mod format;
pub mod generator;
pub mod record;

pub use error::{Efw2cError, Result};
pub use generator::{supported_years, Generator};
pub use record::RecordBuf;
