//! Supported radixes.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Radix of a textual number representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Base {
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
}

impl Base {
    /// All bases, smallest radix first.
    pub const ALL: [Base; 4] = [Base::Binary, Base::Octal, Base::Decimal, Base::Hexadecimal];

    pub fn radix(self) -> u32 {
        match self {
            Base::Binary => 2,
            Base::Octal => 8,
            Base::Decimal => 10,
            Base::Hexadecimal => 16,
        }
    }

    /// Value of `c` as a digit of this base, if it is one.
    ///
    /// Hex digits are accepted in either case.
    pub fn digit_value(self, c: char) -> Option<u32> {
        c.to_digit(self.radix())
    }

    /// Character for a digit value below the radix. Hex digits are uppercase.
    pub(crate) fn digit_char(self, digit: u32) -> char {
        std::char::from_digit(digit, self.radix())
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('?')
    }
}

impl TryFrom<u32> for Base {
    type Error = Error;

    fn try_from(radix: u32) -> Result<Self> {
        match radix {
            2 => Ok(Base::Binary),
            8 => Ok(Base::Octal),
            10 => Ok(Base::Decimal),
            16 => Ok(Base::Hexadecimal),
            other => Err(Error::range(format!(
                "unsupported base {other}, expected one of 2, 8, 10, 16"
            ))),
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Base::Binary => "binary",
            Base::Octal => "octal",
            Base::Decimal => "decimal",
            Base::Hexadecimal => "hexadecimal",
        };
        write!(f, "{name}")
    }
}
