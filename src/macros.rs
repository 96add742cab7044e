//! Shared macros for constructing shares.
//!
//! These macros delegate to the types they create, which keeps fixture
//! setup in tests and demos concise.

/// Simplifies constructing a [`Point`](crate::point::Point).
///
/// ```
/// use shamir_reconstruct::prelude::*;
///
/// let share = point!(1, 4);
/// assert_eq!(share, Point::new(1, 4));
/// ```
#[macro_export]
macro_rules! point {
    ($x:expr, $y:expr) => {
        $crate::point::Point::new($x, $y)
    };
}

/// Create a [`Vec`] of [`Point`](crate::point::Point)s from `(x, y)` pairs.
///
/// ```
/// use shamir_reconstruct::prelude::*;
///
/// let shares = points![(1, 4), (2, 7), (3, 12)];
/// assert_eq!(shares.len(), 3);
/// assert_eq!(shares[1], Point::new(2, 7));
/// ```
#[macro_export]
macro_rules! points {
    () => {
        ::std::vec::Vec::<$crate::point::Point>::new()
    };
    ($(($x:expr, $y:expr)),+ $(,)?) => {
        vec![$($crate::point::Point::new($x, $y)),+]
    };
}
