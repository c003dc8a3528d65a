//! Number base conversion, boolean expression evaluation and IPv4 subnet
//! calculation.
//!
//! - [`conversions`] - [`NumberConverter`] and the inverse digit parsers
//! - [`boolean_algebra`] - [`BooleanExpr`], its parser and truth tables
//! - [`networking`] - [`SubnetCalculator`] and IPv4 mask arithmetic
//! - [`output`] - CSV and JSON rendering for the command line tool
//!
//! All types are immutable values; every failure is an [`Error`].

pub mod boolean_algebra;
pub mod config;
pub mod conversions;
mod error;
pub mod networking;
pub mod output;
pub mod smoke;

pub use boolean_algebra::BooleanExpr;
pub use conversions::{binary_to_decimal, hex_to_decimal, octal_to_decimal, NumberConverter};
pub use error::{Error, Result};
pub use networking::SubnetCalculator;
