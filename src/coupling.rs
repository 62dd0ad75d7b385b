//! Optimal coupling reconstruction.
//!
//! The rolling engine only keeps two rows and therefore cannot say *which*
//! alignment realises the distance. This module fills the full `m × n` table
//! (plus the pointwise distances) and backtracks from `(m-1, n-1)` to
//! `(0, 0)`.
//!
//! Tie-breaking while backtracking is deterministic: the diagonal predecessor
//! first, then advancing P only, then advancing Q only.

use crate::error::{ensure_non_empty, CellFailure, FrechetError};
use crate::traits::DistanceValue;

/// Distance plus one monotone coupling achieving it.
#[derive(Clone, Debug, PartialEq)]
pub struct Coupling<D> {
    /// The discrete Fréchet distance.
    pub distance: D,
    /// Index pairs `(i, j)` from `(0, 0)` to `(m-1, n-1)`; every step advances
    /// `i`, `j` or both by exactly one.
    pub pairs: Vec<(usize, usize)>,
    /// `d(P[i], Q[j])` for each entry of `pairs`.
    pub pair_distances: Vec<D>,
}

impl<D: DistanceValue> Coupling<D> {
    /// Number of pairs in the coupling.
    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true if the coupling has no pairs (never the case for a
    /// successful computation).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// First pair whose pointwise distance equals the Fréchet distance.
    pub fn bottleneck(&self) -> Option<(usize, usize)> {
        self.pairs
            .iter()
            .zip(&self.pair_distances)
            .find(|(_, d)| d.cmp_distance(&self.distance).is_eq())
            .map(|(pair, _)| *pair)
    }
}

/// Discrete Fréchet distance and an optimal coupling for a fallible distance
/// function.
///
/// Uses O(m·n) memory.
pub fn discrete_frechet_coupling<A, B, D, E, F>(
    p: &[A],
    q: &[B],
    dist: F,
) -> Result<Coupling<D>, FrechetError<E>>
where
    D: DistanceValue,
    F: FnMut(&A, &B) -> Result<D, E>,
{
    full_table_coupling(p, q, dist)
}

pub(crate) fn full_table_coupling<A, B, D, E, F>(
    p: &[A],
    q: &[B],
    mut dist: F,
) -> Result<Coupling<D>, FrechetError<E>>
where
    D: DistanceValue,
    F: FnMut(&A, &B) -> Result<D, E>,
{
    ensure_non_empty(p.len(), q.len())?;

    #[cfg(feature = "tracing")]
    let _span = tracing::trace_span!("reconstruct_coupling", p_len = p.len(), q_len = q.len())
        .entered();

    let (m, n) = (p.len(), q.len());
    let at = |i: usize, j: usize| i * n + j;

    // Row-major over i (P); pointwise distances and prefix distances.
    let mut point: Vec<D> = Vec::with_capacity(m * n);
    for (i, a) in p.iter().enumerate() {
        for (j, b) in q.iter().enumerate() {
            point.push(dist(a, b).map_err(|e| CellFailure::new(e, i, j))?);
        }
    }

    let mut cr: Vec<D> = point.clone();
    for j in 1..n {
        cr[at(0, j)] = cr[at(0, j - 1)].max_of(point[at(0, j)]);
    }
    for i in 1..m {
        cr[at(i, 0)] = cr[at(i - 1, 0)].max_of(point[at(i, 0)]);
        for j in 1..n {
            let reach = cr[at(i - 1, j - 1)]
                .min_of(cr[at(i - 1, j)])
                .min_of(cr[at(i, j - 1)]);
            cr[at(i, j)] = reach.max_of(point[at(i, j)]);
        }
    }

    let (mut i, mut j) = (m - 1, n - 1);
    let mut rev_pairs = Vec::with_capacity(m + n - 1);
    rev_pairs.push((i, j));
    while i > 0 || j > 0 {
        (i, j) = match (i, j) {
            (0, _) => (0, j - 1),
            (_, 0) => (i - 1, 0),
            _ => {
                let diag = cr[at(i - 1, j - 1)];
                let up = cr[at(i - 1, j)];
                let left = cr[at(i, j - 1)];
                if diag.at_most(&up) && diag.at_most(&left) {
                    (i - 1, j - 1)
                } else if up.at_most(&left) {
                    (i - 1, j)
                } else {
                    (i, j - 1)
                }
            }
        };
        rev_pairs.push((i, j));
    }
    rev_pairs.reverse();

    let pair_distances = rev_pairs.iter().map(|&(i, j)| point[at(i, j)]).collect();

    Ok(Coupling {
        distance: cr[at(m - 1, n - 1)],
        pairs: rev_pairs,
        pair_distances,
    })
}
