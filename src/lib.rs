//! Recover a shared secret from threshold shares by Lagrange interpolation
//! at x = 0, carried out exactly over arbitrary-precision integers.
//!
//! This is the reconstruction half of a Shamir-style scheme run over the
//! plain integers rather than a prime field: given k points sampled from an
//! integer polynomial of degree k-1, [`Interpolator::reconstruct_secret`]
//! returns the constant term. Share values can be decoded from any base in
//! 2..=36 via [`radix::parse_in_radix`].
//!
//! ```
//! use shamir_reconstruct::prelude::*;
//!
//! // f(x) = x^2 + 3
//! let mut interpolator = Interpolator::new();
//! interpolator.add_point(1, 4);
//! interpolator.add_point(2, 7);
//! interpolator.add_point(3, 12);
//!
//! let secret = interpolator.reconstruct_secret().unwrap();
//! assert_eq!(secret, 3.into());
//! ```

pub mod error;
pub mod interpolate;
pub mod macros;
pub mod point;
pub mod prelude;
pub mod radix;

pub use error::{Error, ParseShareError, ReconstructError, Result};
pub use interpolate::Interpolator;
pub use point::Point;
pub use radix::parse_in_radix;
