//! Decision variant: is the discrete Fréchet distance at most a threshold?
//!
//! `CR[i][j] <= t` holds exactly when `d(P[i], Q[j]) <= t` and at least one
//! predecessor cell satisfies the same, so the table reduces to booleans.
//! Distances are only evaluated for cells with a reachable predecessor, and
//! the scan stops as soon as a whole row is unreachable.

use crate::error::{ensure_non_empty, CellFailure, FrechetError};
use crate::traits::DistanceValue;

/// True iff the discrete Fréchet distance between `p` and `q` is `<= threshold`.
///
/// Agrees with [`compute_discrete_frechet`](crate::compute_discrete_frechet)
/// for every threshold, but may evaluate far fewer pairs.
pub fn discrete_frechet_within<A, B, D, E, F>(
    p: &[A],
    q: &[B],
    threshold: D,
    dist: F,
) -> Result<bool, FrechetError<E>>
where
    D: DistanceValue,
    F: FnMut(&A, &B) -> Result<D, E>,
{
    reachable_within(p, q, threshold, dist)
}

pub(crate) fn reachable_within<A, B, D, E, F>(
    p: &[A],
    q: &[B],
    threshold: D,
    mut dist: F,
) -> Result<bool, FrechetError<E>>
where
    D: DistanceValue,
    F: FnMut(&A, &B) -> Result<D, E>,
{
    ensure_non_empty(p.len(), q.len())?;
    let (m, n) = (p.len(), q.len());

    let mut ok = |i: usize, j: usize| -> Result<bool, FrechetError<E>> {
        dist(&p[i], &q[j])
            .map(|d| d.at_most(&threshold))
            .map_err(|e| CellFailure::new(e, i, j).into())
    };

    // Both endpoints are on every coupling.
    if !ok(0, 0)? || !ok(m - 1, n - 1)? {
        return Ok(false);
    }

    let mut current = vec![false; m];
    current[0] = true;
    for i in 1..m {
        current[i] = current[i - 1] && ok(i, 0)?;
    }
    let mut next = vec![false; m];

    for j in 1..n {
        next[0] = current[0] && ok(0, j)?;
        for i in 1..m {
            let pred = next[i - 1] || current[i - 1] || current[i];
            next[i] = pred && ok(i, j)?;
        }
        if !next.iter().any(|&r| r) {
            #[cfg(feature = "tracing")]
            tracing::trace!(row = j, "no reachable cell, stopping early");
            return Ok(false);
        }
        std::mem::swap(&mut current, &mut next);
    }

    Ok(current[m - 1])
}
