//! Decoding of share values written in an arbitrary numeric base.

use num_bigint::BigInt;

use crate::error::{ParseShareError, ParseShareResult};

/// Smallest radix accepted by [`parse_in_radix`].
pub const MIN_RADIX: u32 = 2;
/// Largest radix accepted by [`parse_in_radix`].
pub const MAX_RADIX: u32 = 36;

/// Convert `digits` written in base `radix` into a [`BigInt`].
///
/// Accepts an optional leading sign; letter digits may be upper or lower
/// case. Fails on an empty string, a digit outside the radix, or a radix
/// outside 2..=36.
///
/// ```
/// use shamir_reconstruct::radix::parse_in_radix;
///
/// let value = parse_in_radix("111", 2).unwrap();
/// assert_eq!(value, 7.into());
/// ```
pub fn parse_in_radix(digits: &str, radix: u32) -> ParseShareResult<BigInt> {
    if !(MIN_RADIX..=MAX_RADIX).contains(&radix) {
        return Err(ParseShareError::UnsupportedRadix(radix));
    }

    BigInt::parse_bytes(digits.as_bytes(), radix).ok_or_else(|| {
        ParseShareError::InvalidDigit {
            digits: digits.to_owned(),
            radix,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_digits() {
        assert_eq!(parse_in_radix("213", 10).unwrap(), BigInt::from(213));
    }

    #[test]
    fn parses_base_four() {
        assert_eq!(parse_in_radix("213", 4).unwrap(), BigInt::from(39));
    }

    #[test]
    fn parses_letter_digits_in_either_case() {
        let lower = parse_in_radix("aed7015a346d63", 15).unwrap();
        let upper = parse_in_radix("AED7015A346D63", 15).unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower, BigInt::from(21_394_886_326_566_393u64));
    }

    #[test]
    fn parses_negative_values() {
        assert_eq!(parse_in_radix("-ff", 16).unwrap(), BigInt::from(-255));
    }

    #[test]
    fn rejects_digit_outside_radix() {
        let err = parse_in_radix("1021", 2).unwrap_err();
        assert!(matches!(
            err,
            ParseShareError::InvalidDigit { ref digits, radix: 2 } if digits == "1021"
        ));
    }

    #[test]
    fn rejects_empty_string() {
        assert!(matches!(
            parse_in_radix("", 10),
            Err(ParseShareError::InvalidDigit { .. })
        ));
    }

    #[test]
    fn rejects_radix_outside_supported_range() {
        assert!(matches!(
            parse_in_radix("10", 1),
            Err(ParseShareError::UnsupportedRadix(1))
        ));
        assert!(matches!(
            parse_in_radix("10", 37),
            Err(ParseShareError::UnsupportedRadix(37))
        ));
    }
}
