//! Integer to string conversion.

use super::Base;
use serde::{Deserialize, Serialize};

/// A decimal integer that can be rendered in any supported [`Base`].
///
/// Negative values render as `-` followed by the magnitude, so `-42` in
/// binary is `"-101010"`.
///
/// # Examples
/// ```
/// use calckit::conversions::NumberConverter;
/// assert_eq!(NumberConverter::new(42).to_binary(), "101010");
/// assert_eq!(NumberConverter::new(255).to_hex(), "FF");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NumberConverter {
    value: i64,
}

impl NumberConverter {
    pub fn new(value: i64) -> Self {
        NumberConverter { value }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn to_binary(&self) -> String {
        self.to_base(Base::Binary)
    }

    pub fn to_octal(&self) -> String {
        self.to_base(Base::Octal)
    }

    pub fn to_decimal(&self) -> String {
        self.to_base(Base::Decimal)
    }

    pub fn to_hex(&self) -> String {
        self.to_base(Base::Hexadecimal)
    }

    /// Render the value by repeated division of its magnitude by the radix.
    pub fn to_base(&self, base: Base) -> String {
        let radix = u64::from(base.radix());
        let mut magnitude = self.value.unsigned_abs();
        if magnitude == 0 {
            return "0".to_string();
        }

        let mut digits = Vec::new();
        while magnitude > 0 {
            digits.push(base.digit_char((magnitude % radix) as u32));
            magnitude /= radix;
        }
        if self.value < 0 {
            digits.push('-');
        }
        digits.iter().rev().collect()
    }
}

impl From<i64> for NumberConverter {
    fn from(value: i64) -> Self {
        NumberConverter::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_binary() {
        assert_eq!(NumberConverter::new(0).to_binary(), "0");
        assert_eq!(NumberConverter::new(1).to_binary(), "1");
        assert_eq!(NumberConverter::new(10).to_binary(), "1010");
        assert_eq!(NumberConverter::new(42).to_binary(), "101010");
        assert_eq!(NumberConverter::new(-42).to_binary(), "-101010");
    }

    #[test]
    fn test_other_bases() {
        let n = NumberConverter::new(42);
        assert_eq!(n.to_octal(), "52");
        assert_eq!(n.to_decimal(), "42");
        assert_eq!(n.to_hex(), "2A");
        assert_eq!(NumberConverter::new(0).to_hex(), "0");
        assert_eq!(NumberConverter::new(-255).to_hex(), "-FF");
    }

    #[test]
    fn test_extremes() {
        assert_eq!(
            NumberConverter::new(i64::MAX).to_hex(),
            "7FFFFFFFFFFFFFFF"
        );
        assert_eq!(
            NumberConverter::new(i64::MIN).to_hex(),
            "-8000000000000000"
        );
        assert_eq!(
            NumberConverter::new(i64::MIN).to_decimal(),
            i64::MIN.to_string()
        );
    }

    #[test]
    fn test_binary_has_no_leading_zero() {
        for n in 1..=1024 {
            let s = NumberConverter::new(n).to_binary();
            assert!(s.starts_with('1'), "{n} -> {s}");
            assert!(s.chars().all(|c| c == '0' || c == '1'), "{n} -> {s}");
        }
    }

    #[test]
    fn test_decimal_matches_std() {
        for n in [-1_000_000, -7, 0, 7, 123_456_789] {
            assert_eq!(NumberConverter::new(n).to_decimal(), n.to_string());
        }
    }
}
