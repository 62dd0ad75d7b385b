//! Ready-made metrics for coordinate points.
//!
//! Points are plain `[f64; N]` arrays or `(f64, f64)` pairs. Anything richer is
//! expected to bring its own [`Metric`] implementation or a closure.

use std::convert::Infallible;

use crate::traits::Metric;

/// Squared Euclidean distance. Cheaper than [`Euclidean`] and yields the same
/// optimal coupling, since squaring is monotone on non-negative values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SquaredEuclidean;

/// Euclidean (L2) distance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Euclidean;

#[inline]
fn squared_l2(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum()
}

impl<const N: usize> Metric<[f64; N]> for SquaredEuclidean {
    type Distance = f64;
    type Error = Infallible;

    #[inline]
    fn distance(&self, a: &[f64; N], b: &[f64; N]) -> Result<f64, Infallible> {
        Ok(squared_l2(a, b))
    }
}

impl Metric<(f64, f64)> for SquaredEuclidean {
    type Distance = f64;
    type Error = Infallible;

    #[inline]
    fn distance(&self, a: &(f64, f64), b: &(f64, f64)) -> Result<f64, Infallible> {
        Ok(squared_l2(&[a.0, a.1], &[b.0, b.1]))
    }
}

impl<const N: usize> Metric<[f64; N]> for Euclidean {
    type Distance = f64;
    type Error = Infallible;

    #[inline]
    fn distance(&self, a: &[f64; N], b: &[f64; N]) -> Result<f64, Infallible> {
        Ok(squared_l2(a, b).sqrt())
    }
}

impl Metric<(f64, f64)> for Euclidean {
    type Distance = f64;
    type Error = Infallible;

    #[inline]
    fn distance(&self, a: &(f64, f64), b: &(f64, f64)) -> Result<f64, Infallible> {
        Ok(squared_l2(&[a.0, a.1], &[b.0, b.1]).sqrt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squared_and_plain() {
        assert_eq!(SquaredEuclidean.distance(&[0.0, 0.0], &[3.0, 4.0]), Ok(25.0));
        assert_eq!(Euclidean.distance(&[0.0, 0.0], &[3.0, 4.0]), Ok(5.0));
        assert_eq!(SquaredEuclidean.distance(&(1.0, 1.0), &(1.0, 1.0)), Ok(0.0));
        assert_eq!(
            Euclidean.distance(&[1.0, 2.0, 2.0], &[0.0, 0.0, 0.0]),
            Ok(3.0)
        );
    }
}
