//! Parse and format human-readable byte sizes.
//!
//! This crate provides:
//! - [`format()`]: byte count → `"1.5MiB"` with configurable precision, unit and separators
//! - [`parse()`]: `"10MB"` / `"10 MiB"` / `"1.2e+29GB"` → byte count
//! - [`parse_to_unit`]: size string → size string in a chosen unit
//! - [`validation`]: advisory checks for [`FormatOptions`]
//! - [`schema`]: JSON Schema for option documents
//!
//! All conversions are pure functions over two fixed magnitude tables
//! (powers of 1024 and powers of 1000). They never panic and signal bad input
//! by returning `None`.
//!
//! # Capacity bases
//! - [`CapacityBase::Binary`] (default): 1 KB = 1024 bytes, labels KiB, MiB, ...
//! - [`CapacityBase::Decimal`]: 1 KB = 1000 bytes, labels KB, MB, ...
//!
//! Parsing under the decimal base still returns the binary byte count unless
//! [`ParseOptions::convert`] is turned off.
//!
//! # Example
//! ```
//! use bytefmt_core::{format, parse, CapacityBase, FormatOptions, ParseOptions};
//!
//! let bytes = parse("1.5GiB", &ParseOptions::default()).unwrap();
//! assert_eq!(bytes, 1_610_612_736.0);
//!
//! let opts = FormatOptions::new()
//!     .with_capacity_base(CapacityBase::Decimal)
//!     .with_unit_separator(" ");
//! assert_eq!(format(bytes, &opts).unwrap().to_string(), "1.61 GB");
//! ```

pub mod convert;
pub mod error;
pub mod format;
mod numeral;
pub mod options;
pub mod parse;
pub mod schema;
pub mod units;
pub mod validation;

// Re-exports for convenient access
pub use convert::parse_to_unit;
pub use error::{Error, Result};
pub use format::{Formatted, MAX_DECIMAL_PLACES, format};
pub use options::{FormatOptions, ParseOptions};
pub use parse::parse;
pub use schema::{OptionsDocument, schema_json_pretty};
pub use units::{CapacityBase, Unit};
