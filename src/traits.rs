//! Core trait definitions: comparable distance values and point metrics.
//!
//! The recurrence only ever compares distances, so the single requirement on a
//! distance type is a *total* order. [`DistanceValue`] provides that order for
//! the primitive numeric types (floats through IEEE-754 `total_cmp`) and for
//! [`TotalF64`].
//!
//! [`Metric`] is the distance capability consumed by
//! [`FrechetEngine`](crate::engine::FrechetEngine). The free functions in the
//! crate root take plain closures instead.

use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;

/// A value returned by a distance function.
///
/// Semantics:
/// - `cmp_distance` must be a total order (reflexive, antisymmetric,
///   transitive, total).
/// - No arithmetic is ever performed on distance values.
pub trait DistanceValue: Copy {
    /// Total-order comparison between two distances.
    fn cmp_distance(&self, other: &Self) -> Ordering;

    /// The larger of two distances; `self` wins ties.
    #[inline]
    fn max_of(self, other: Self) -> Self {
        match other.cmp_distance(&self) {
            Ordering::Greater => other,
            _ => self,
        }
    }

    /// The smaller of two distances; `self` wins ties.
    #[inline]
    fn min_of(self, other: Self) -> Self {
        match other.cmp_distance(&self) {
            Ordering::Less => other,
            _ => self,
        }
    }

    /// `self <= other` under the total order.
    #[inline]
    fn at_most(&self, other: &Self) -> bool {
        self.cmp_distance(other) != Ordering::Greater
    }
}

macro_rules! ord_distance {
    ($($t:ty),* $(,)?) => {
        $(
            impl DistanceValue for $t {
                #[inline]
                fn cmp_distance(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }
            }
        )*
    };
}

ord_distance!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl DistanceValue for f64 {
    #[inline]
    fn cmp_distance(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl DistanceValue for f32 {
    #[inline]
    fn cmp_distance(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

/// Total-ordering wrapper for f64 to satisfy `Ord` (NaN-safe via `total_cmp`).
#[derive(Clone, Copy, Debug, Default)]
pub struct TotalF64(pub f64);

impl PartialEq for TotalF64 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for TotalF64 {}
impl PartialOrd for TotalF64 {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for TotalF64 {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for TotalF64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<f64> for TotalF64 {
    fn from(value: f64) -> Self {
        TotalF64(value)
    }
}

impl DistanceValue for TotalF64 {
    #[inline]
    fn cmp_distance(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

/// Distance capability between a point of trajectory P (`A`) and a point of
/// trajectory Q (`B`).
///
/// Requirements:
/// - Referentially consistent for the duration of one computation: the same
///   pair must always yield the same distance.
/// - Need not be symmetric nor satisfy the triangle inequality.
///
/// A failing call aborts the computation and the error is handed back to the
/// caller unchanged inside [`FrechetError::Distance`](crate::FrechetError::Distance).
pub trait Metric<A: ?Sized, B: ?Sized = A> {
    /// Distance type produced for one pair of points.
    type Distance: DistanceValue;

    /// Failure type; use [`Infallible`] for total functions.
    type Error;

    /// Distance between `a` (from P) and `b` (from Q).
    fn distance(&self, a: &A, b: &B) -> Result<Self::Distance, Self::Error>;
}

impl<A: ?Sized, B: ?Sized, M: Metric<A, B> + ?Sized> Metric<A, B> for &M {
    type Distance = M::Distance;
    type Error = M::Error;

    #[inline]
    fn distance(&self, a: &A, b: &B) -> Result<Self::Distance, Self::Error> {
        (**self).distance(a, b)
    }
}

/// Adapter turning a total closure `Fn(&A, &B) -> D` into a [`Metric`].
pub struct FnMetric<F, D> {
    f: F,
    _distance: std::marker::PhantomData<fn() -> D>,
}

impl<F, D> FnMetric<F, D> {
    pub fn new(f: F) -> Self {
        Self {
            f,
            _distance: std::marker::PhantomData,
        }
    }
}

impl<F: Clone, D> Clone for FnMetric<F, D> {
    fn clone(&self) -> Self {
        Self::new(self.f.clone())
    }
}

impl<A, B, D, F> Metric<A, B> for FnMetric<F, D>
where
    F: Fn(&A, &B) -> D,
    D: DistanceValue,
{
    type Distance = D;
    type Error = Infallible;

    #[inline]
    fn distance(&self, a: &A, b: &B) -> Result<D, Infallible> {
        Ok((self.f)(a, b))
    }
}

/// Adapter turning a fallible closure `Fn(&A, &B) -> Result<D, E>` into a
/// [`Metric`].
pub struct TryFnMetric<F, D, E> {
    f: F,
    _out: std::marker::PhantomData<fn() -> (D, E)>,
}

impl<F, D, E> TryFnMetric<F, D, E> {
    pub fn new(f: F) -> Self {
        Self {
            f,
            _out: std::marker::PhantomData,
        }
    }
}

impl<A, B, D, E, F> Metric<A, B> for TryFnMetric<F, D, E>
where
    F: Fn(&A, &B) -> Result<D, E>,
    D: DistanceValue,
{
    type Distance = D;
    type Error = E;

    #[inline]
    fn distance(&self, a: &A, b: &B) -> Result<D, E> {
        (self.f)(a, b)
    }
}
