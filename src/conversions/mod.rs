//! Number base conversion.
//!
//! - [`NumberConverter`] - renders a fixed `i64` in base 2, 8, 10 or 16
//! - [`binary_to_decimal`], [`octal_to_decimal`], [`hex_to_decimal`] - strict
//!   unsigned digit-string parsers
//! - [`to_decimal`] - general inverse of [`NumberConverter::to_base`]

mod base;
mod converter;
mod decode;

pub use base::Base;
pub use converter::NumberConverter;
pub use decode::{binary_to_decimal, hex_to_decimal, octal_to_decimal, to_decimal};
