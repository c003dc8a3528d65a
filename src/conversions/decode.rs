//! String to integer conversion.
//!
//! Parsing is strict: no whitespace trimming, no `+` sign, no `0x`/`0b`
//! prefixes and no digit separators.

use super::Base;
use crate::error::{Error, Result};

/// Parse a string of `0`/`1` characters.
///
/// # Examples
/// ```
/// use calckit::conversions::binary_to_decimal;
/// assert_eq!(binary_to_decimal("1010").unwrap(), 10);
/// assert!(binary_to_decimal("102").is_err());
/// ```
pub fn binary_to_decimal(digits: &str) -> Result<i64> {
    parse_unsigned(digits, Base::Binary)
}

/// Parse a string of octal digits.
pub fn octal_to_decimal(digits: &str) -> Result<i64> {
    parse_unsigned(digits, Base::Octal)
}

/// Parse a string of hex digits, either case.
pub fn hex_to_decimal(digits: &str) -> Result<i64> {
    parse_unsigned(digits, Base::Hexadecimal)
}

/// Inverse of [`NumberConverter::to_base`](super::NumberConverter::to_base).
///
/// Accepts one optional leading `-`, the sign convention used when rendering
/// negative values.
pub fn to_decimal(text: &str, base: Base) -> Result<i64> {
    match text.strip_prefix('-') {
        Some(digits) => {
            let magnitude = accumulate(text, digits, base)?;
            let value = 0i64.checked_sub_unsigned(magnitude);
            value.ok_or_else(|| Error::range(format!("'{text}' is below {}", i64::MIN)))
        }
        None => parse_unsigned(text, base),
    }
}

fn parse_unsigned(text: &str, base: Base) -> Result<i64> {
    let magnitude = accumulate(text, text, base)?;
    i64::try_from(magnitude).map_err(|_| Error::range(format!("'{text}' exceeds {}", i64::MAX)))
}

/// Positional-weighted sum of `digits`; `text` is the full input for error reporting.
fn accumulate(text: &str, digits: &str, base: Base) -> Result<u64> {
    if digits.is_empty() {
        return Err(Error::parse(text, format!("expected at least one {base} digit")));
    }

    let radix = u64::from(base.radix());
    let mut total: u64 = 0;
    for (pos, c) in digits.char_indices() {
        let digit = base
            .digit_value(c)
            .ok_or_else(|| Error::parse(text, format!("invalid {base} digit '{c}' at {pos}")))?;
        total = total
            .checked_mul(radix)
            .and_then(|t| t.checked_add(u64::from(digit)))
            .ok_or_else(|| Error::range(format!("'{text}' does not fit in 64 bits")))?;
    }
    log::trace!("decoded {text:?} as {base} -> {total}");
    Ok(total)
}
