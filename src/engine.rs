//! Rolling two-row discrete Fréchet engine.
//!
//! For trajectories P (length m) and Q (length n) the Eiter–Mannila table is
//!
//! ```text
//! CR[0][0] = d(P[0], Q[0])
//! CR[i][0] = max(CR[i-1][0], d(P[i], Q[0]))
//! CR[0][j] = max(CR[0][j-1], d(P[0], Q[j]))
//! CR[i][j] = max(d(P[i], Q[j]), min(CR[i-1][j], CR[i-1][j-1], CR[i][j-1]))
//! ```
//!
//! and the distance is `CR[m-1][n-1]`. Row `j` only reads row `j-1` and the
//! cells to its left, so two buffers of the inner length suffice; they are
//! swapped after each outer step instead of reallocated.
//!
//! When either side has a single point the table collapses to one row and
//! the distance is the maximum pointwise distance from that point, computed
//! by a linear scan.

use crate::coupling::{full_table_coupling, Coupling};
use crate::decision::reachable_within;
use crate::error::{ensure_non_empty, CellFailure, FrechetError};
use crate::traits::{DistanceValue, Metric};
use crate::utils::RowLayout;

/// Discrete Fréchet engine bound to a metric.
///
/// Typical usage:
/// ```
/// use discrete_frechet::{metrics::SquaredEuclidean, FrechetEngine};
///
/// let p = [[0.0, 0.0], [1.0, 0.0], [2.0, 0.0], [3.0, 0.0]];
/// let q = [[0.0, 1.0], [1.0, 1.0], [2.0, 1.0], [3.0, 1.0], [4.0, 0.0]];
/// let engine = FrechetEngine::new(SquaredEuclidean);
/// assert_eq!(engine.distance(&p, &q), Ok(1.0));
/// ```
#[derive(Clone, Debug, Default)]
pub struct FrechetEngine<M> {
    metric: M,
    layout: RowLayout,
}

impl<M> FrechetEngine<M> {
    /// Create an engine with the default row layout (P inner).
    pub fn new(metric: M) -> Self {
        Self::with_layout(metric, RowLayout::default())
    }

    /// Create an engine with an explicit row layout.
    pub fn with_layout(metric: M, layout: RowLayout) -> Self {
        Self { metric, layout }
    }

    /// Expose immutable reference to the underlying metric.
    pub fn metric(&self) -> &M {
        &self.metric
    }

    /// Expose mutable reference if callers need to adjust configuration.
    pub fn metric_mut(&mut self) -> &mut M {
        &mut self.metric
    }

    /// Return the configured row layout.
    pub fn layout(&self) -> RowLayout {
        self.layout
    }

    /// Discrete Fréchet distance between `p` and `q`.
    ///
    /// # Errors
    /// [`FrechetError::EmptyTrajectory`] if either side is empty, or
    /// [`FrechetError::Distance`] with the first error the metric reports.
    pub fn distance<A, B>(
        &self,
        p: &[A],
        q: &[B],
    ) -> Result<M::Distance, FrechetError<M::Error>>
    where
        M: Metric<A, B>,
    {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("discrete_frechet", p_len = p.len(), q_len = q.len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        dispatch(p, q, self.layout, |a, b| self.metric.distance(a, b))
    }

    /// Distance together with one optimal coupling.
    ///
    /// Materialises the full `m × n` table; prefer [`distance`](Self::distance)
    /// when only the value is needed.
    pub fn coupling<A, B>(
        &self,
        p: &[A],
        q: &[B],
    ) -> Result<Coupling<M::Distance>, FrechetError<M::Error>>
    where
        M: Metric<A, B>,
    {
        full_table_coupling(p, q, |a, b| self.metric.distance(a, b))
    }

    /// Whether the distance between `p` and `q` is at most `threshold`.
    pub fn within<A, B>(
        &self,
        p: &[A],
        q: &[B],
        threshold: M::Distance,
    ) -> Result<bool, FrechetError<M::Error>>
    where
        M: Metric<A, B>,
    {
        reachable_within(p, q, threshold, |a, b| self.metric.distance(a, b))
    }
}

/// Discrete Fréchet distance for a total distance function.
///
/// ```
/// use discrete_frechet::compute_discrete_frechet;
///
/// let p = [0i64, 1, 2, 3];
/// let q = [0i64, 2, 3];
/// let d = compute_discrete_frechet(&p, &q, |a, b| (a - b).abs());
/// assert_eq!(d, Ok(1));
/// ```
///
/// # Errors
/// Only [`FrechetError::EmptyTrajectory`].
pub fn compute_discrete_frechet<A, B, D, F>(p: &[A], q: &[B], mut dist: F) -> Result<D, FrechetError>
where
    D: DistanceValue,
    F: FnMut(&A, &B) -> D,
{
    dispatch(p, q, RowLayout::default(), |a, b| Ok(dist(a, b)))
}

/// Discrete Fréchet distance for a fallible distance function.
///
/// The first error returned by `dist` aborts the computation and is passed
/// through unchanged as [`FrechetError::Distance`].
pub fn try_compute_discrete_frechet<A, B, D, E, F>(
    p: &[A],
    q: &[B],
    dist: F,
) -> Result<D, FrechetError<E>>
where
    D: DistanceValue,
    F: FnMut(&A, &B) -> Result<D, E>,
{
    dispatch(p, q, RowLayout::default(), dist)
}

/// Maximum of `dist(probe, x)` over every point `x` of `trajectory`.
///
/// This is exactly the discrete Fréchet distance between the one-point
/// trajectory `[probe]` and `trajectory`: the single point has to be paired
/// with every point of the other side.
pub fn singleton_distance<A, B, D, E, F>(
    probe: &A,
    trajectory: &[B],
    mut dist: F,
) -> Result<D, FrechetError<E>>
where
    D: DistanceValue,
    F: FnMut(&A, &B) -> Result<D, E>,
{
    ensure_non_empty(1, trajectory.len())?;
    max_scan(trajectory.len(), |k| {
        dist(probe, &trajectory[k]).map_err(|e| CellFailure::new(e, 0, k))
    })
    .map_err(FrechetError::from)
}

/// Validate, then route to the singleton scan or the rolling table.
pub(crate) fn dispatch<A, B, D, E, F>(
    p: &[A],
    q: &[B],
    layout: RowLayout,
    dist: F,
) -> Result<D, FrechetError<E>>
where
    D: DistanceValue,
    F: FnMut(&A, &B) -> Result<D, E>,
{
    ensure_non_empty(p.len(), q.len())?;
    evaluate(p, q, layout, dist).map_err(FrechetError::from)
}

/// Evaluate non-empty trajectories; failures carry their `(P, Q)` cell.
fn evaluate<A, B, D, E, F>(
    p: &[A],
    q: &[B],
    layout: RowLayout,
    mut dist: F,
) -> Result<D, CellFailure<E>>
where
    D: DistanceValue,
    F: FnMut(&A, &B) -> Result<D, E>,
{
    let (m, n) = (p.len(), q.len());
    let mut pair = |i: usize, j: usize| dist(&p[i], &q[j]).map_err(|e| CellFailure::new(e, i, j));

    if m == 1 {
        #[cfg(feature = "tracing")]
        let _span = tracing::trace_span!("singleton", probe = "P", len = n).entered();
        return max_scan(n, |j| pair(0, j));
    }
    if n == 1 {
        #[cfg(feature = "tracing")]
        let _span = tracing::trace_span!("singleton", probe = "Q", len = m).entered();
        return max_scan(m, |i| pair(i, 0));
    }

    if layout.inner_is_p(m, n) {
        #[cfg(feature = "tracing")]
        let _span = tracing::trace_span!("rolling_rows", inner = "P", inner_len = m, outer_len = n)
            .entered();
        rolling_rows(m, n, pair)
    } else {
        #[cfg(feature = "tracing")]
        let _span = tracing::trace_span!("rolling_rows", inner = "Q", inner_len = n, outer_len = m)
            .entered();
        // Transposed table: inner index walks Q, outer index walks P.
        rolling_rows(n, m, |j, i| pair(i, j))
    }
}

/// Linear scan keeping the running maximum.
fn max_scan<D, X, C>(len: usize, mut cost: C) -> Result<D, X>
where
    D: DistanceValue,
    C: FnMut(usize) -> Result<D, X>,
{
    debug_assert!(len >= 1);
    let mut best = cost(0)?;
    for k in 1..len {
        best = best.max_of(cost(k)?);
    }
    Ok(best)
}

/// Fill the table two rows at a time; `cost(i, j)` addresses inner index `i`
/// and outer index `j`.
fn rolling_rows<D, X, C>(inner_len: usize, outer_len: usize, mut cell: C) -> Result<D, X>
where
    D: DistanceValue,
    C: FnMut(usize, usize) -> Result<D, X>,
{
    debug_assert!(inner_len >= 2 && outer_len >= 2);

    // First row: only the left neighbour is a predecessor.
    let mut current: Vec<D> = Vec::with_capacity(inner_len);
    current.push(cell(0, 0)?);
    for i in 1..inner_len {
        let d = cell(i, 0)?;
        let left = current[i - 1];
        current.push(left.max_of(d));
    }
    let mut next = current.clone();

    for j in 1..outer_len {
        next[0] = current[0].max_of(cell(0, j)?);
        for i in 1..inner_len {
            let d = cell(i, j)?;
            let reach = next[i - 1].min_of(current[i - 1]).min_of(current[i]);
            next[i] = reach.max_of(d);
        }
        std::mem::swap(&mut current, &mut next);
    }

    debug_assert_eq!(current.len(), next.len());
    Ok(current[inner_len - 1])
}
