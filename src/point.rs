use std::fmt;

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

use crate::error::ParseShareResult;
use crate::radix::parse_in_radix;

/// A single share: one evaluation point `(x, y)` of the hidden polynomial.
///
/// `x` is the share index handed to a participant and stays small; `y` is
/// the polynomial value at that index and can be arbitrarily large. Within
/// one reconstruction all `x` values must be pairwise distinct.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i64,
    pub y: BigInt,
}

impl Point {
    pub fn new(x: i64, y: impl Into<BigInt>) -> Self {
        Point { x, y: y.into() }
    }

    /// Decode a share whose value is written in base `radix`.
    pub fn from_radix(x: i64, digits: &str, radix: u32) -> ParseShareResult<Self> {
        Ok(Point {
            x,
            y: parse_in_radix(digits, radix)?,
        })
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseShareError;

    #[test]
    fn test_point_creation() {
        let point = Point::new(2, 7);
        assert_eq!(point.x, 2);
        assert_eq!(point.y, BigInt::from(7));
    }

    #[test]
    fn test_point_from_radix() {
        let point = Point::from_radix(2, "111", 2).unwrap();
        assert_eq!(point, Point::new(2, 7));
    }

    #[test]
    fn test_point_from_radix_propagates_parse_errors() {
        assert!(matches!(
            Point::from_radix(1, "12z", 10),
            Err(ParseShareError::InvalidDigit { .. })
        ));
    }

    #[test]
    fn test_point_display() {
        let point = Point::new(-3, 1234);
        assert_eq!(point.to_string(), "(-3, 1234)");
    }

    #[test]
    fn test_point_debug_representation() {
        let debug_str = format!("{:?}", Point::new(1, 4));
        assert!(debug_str.contains("Point"));
        assert!(debug_str.contains("x: 1"));
    }
}
