//! Lagrange interpolation at x = 0 over the plain integers.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::error::{ReconstructError, ReconstructResult};
use crate::point::Point;

/// Accumulates shares and recovers the constant term of the unique
/// polynomial of degree < n passing through them.
///
/// The computation runs over exact big integers rather than a prime field,
/// so it assumes the points were sampled from an integer-coefficient
/// polynomial; inconsistent inputs surface as
/// [`ReconstructError::InexactDivision`] instead of a silently wrong value.
///
/// Instances are cheap to construct, so prefer one per computation;
/// [`clear`](Interpolator::clear) exists for deliberate reuse.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Interpolator {
    points: Vec<Point>,
}

impl Interpolator {
    /// Create an empty interpolator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an interpolator preloaded with `points`.
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Self {
        Interpolator {
            points: points.into_iter().collect(),
        }
    }

    /// Append a share given as raw coordinates.
    ///
    /// Distinctness of `x` is not checked here; a repeated abscissa is
    /// reported by [`reconstruct_secret`](Interpolator::reconstruct_secret).
    pub fn add_point(&mut self, x: i64, y: impl Into<BigInt>) {
        self.points.push(Point::new(x, y));
    }

    /// Append a ready-made share.
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Drop all accumulated shares. Idempotent.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Read-only view of the accumulated shares, in insertion order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Recover f(0) from the accumulated points.
    ///
    /// Each basis term contributes `y_i * Π_{j≠i} (0 - x_j) / (x_i - x_j)`.
    /// The terms are summed as one exact fraction and divided only once at
    /// the end: individual terms are allowed to be non-integer (they often
    /// are when the abscissas are not consecutive), but a consistent point
    /// set always sums to an integer. A non-zero final remainder means the
    /// points do not lie on one integer polynomial and is reported instead
    /// of being truncated away.
    pub fn reconstruct_secret(&self) -> ReconstructResult<BigInt> {
        if self.points.is_empty() {
            return Err(ReconstructError::EmptyPointSet);
        }
        self.ensure_distinct_abscissas()?;

        // Running sum of the basis terms, kept as `sum_num / sum_den` in
        // lowest terms with `sum_den > 0`.
        let mut sum_num = BigInt::zero();
        let mut sum_den = BigInt::one();

        for (i, point) in self.points.iter().enumerate() {
            let mut numerator = point.y.clone();
            let mut denominator = BigInt::one();

            for (j, other) in self.points.iter().enumerate() {
                if i == j {
                    continue;
                }
                numerator *= BigInt::from(-other.x);
                denominator *= BigInt::from(point.x - other.x);
            }

            // Keep denominators positive so the final truncating division
            // cannot flip rounding direction.
            if denominator.is_negative() {
                numerator = -numerator;
                denominator = -denominator;
            }

            sum_num = sum_num * &denominator + &numerator * &sum_den;
            sum_den *= denominator;

            let gcd = sum_num.gcd(&sum_den);
            if gcd > BigInt::one() {
                sum_num /= &gcd;
                sum_den /= &gcd;
            }
        }

        let (secret, remainder) = sum_num.div_rem(&sum_den);
        if !remainder.is_zero() {
            return Err(ReconstructError::InexactDivision {
                remainder,
                denominator: sum_den,
            });
        }

        Ok(secret)
    }

    /// Reject point sets that repeat a share index; those would divide by
    /// zero inside a basis term.
    fn ensure_distinct_abscissas(&self) -> ReconstructResult<()> {
        for (i, point) in self.points.iter().enumerate() {
            if self.points[..i].iter().any(|earlier| earlier.x == point.x) {
                return Err(ReconstructError::DuplicateAbscissa(point.x));
            }
        }
        Ok(())
    }
}

impl FromIterator<Point> for Interpolator {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Interpolator::from_points(iter)
    }
}

impl Extend<Point> for Interpolator {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}
