use num_bigint::BigInt;
use thiserror::Error;

/// Result type specialized for secret reconstruction.
pub type ReconstructResult<T> = std::result::Result<T, ReconstructError>;

/// Result type specialized for share-string decoding.
pub type ParseShareResult<T> = std::result::Result<T, ParseShareError>;

/// Common result type used across this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors that can arise while reconstructing a secret from points.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReconstructError {
    #[error("no points loaded")]
    EmptyPointSet,
    #[error("duplicate abscissa: x = {0}")]
    DuplicateAbscissa(i64),
    #[error(
        "interpolated value at x = 0 is not an integer (remainder {remainder} \
         over denominator {denominator}); the points do not lie on one \
         integer polynomial of this degree"
    )]
    InexactDivision {
        remainder: BigInt,
        denominator: BigInt,
    },
}

/// Errors returned when decoding a share value written in base N.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseShareError {
    #[error("unsupported radix {0}, expected 2..=36")]
    UnsupportedRadix(u32),
    #[error("invalid digits {digits:?} for radix {radix}")]
    InvalidDigit { digits: String, radix: u32 },
}

/// Top-level error type to keep error management simple for users.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Reconstruct(#[from] ReconstructError),
    #[error(transparent)]
    Parse(#[from] ParseShareError),
}
