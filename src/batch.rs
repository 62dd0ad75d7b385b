//! Distance matrices over collections of trajectories.
//!
//! Each entry is an independent, sequential discrete Fréchet computation with
//! its own row buffers, so entries can be evaluated in any order. With the
//! `parallel` feature the matrix rows are spread over the `rayon` pool; the
//! result is identical to the sequential build.
//!
//! Errors are reported for the first failing pair in row-major order.

use crate::engine::dispatch;
use crate::error::BatchError;
use crate::traits::DistanceValue;
use crate::utils::RowLayout;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Dense row-major matrix of pairwise distances.
#[derive(Clone, Debug, PartialEq)]
pub struct PairwiseMatrix<D> {
    rows: usize,
    cols: usize,
    values: Vec<D>,
}

impl<D: Copy> PairwiseMatrix<D> {
    /// Number of rows (trajectories on the left side).
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (trajectories on the right side).
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Distance between left trajectory `i` and right trajectory `j`.
    pub fn get(&self, i: usize, j: usize) -> Option<D> {
        (i < self.rows && j < self.cols).then(|| self.values[i * self.cols + j])
    }

    /// All distances from left trajectory `i`.
    pub fn row(&self, i: usize) -> Option<&[D]> {
        (i < self.rows).then(|| &self.values[i * self.cols..(i + 1) * self.cols])
    }

    pub fn as_slice(&self) -> &[D] {
        &self.values
    }
}

/// Full `n × n` matrix of distances within one collection.
///
/// Entry `(i, j)` is `F(trajectories[i], trajectories[j])`; every entry is
/// computed, so asymmetric distance functions are honoured.
pub fn pairwise<T, A, D, E, F>(trajectories: &[T], dist: F) -> Result<PairwiseMatrix<D>, BatchError<E>>
where
    T: AsRef<[A]> + Sync,
    A: Sync,
    D: DistanceValue + Send,
    E: Send,
    F: Fn(&A, &A) -> Result<D, E> + Sync,
{
    cross(trajectories, trajectories, dist)
}

/// Rectangular matrix between two collections.
pub fn cross<L, R, A, B, D, E, F>(
    left: &[L],
    right: &[R],
    dist: F,
) -> Result<PairwiseMatrix<D>, BatchError<E>>
where
    L: AsRef<[A]> + Sync,
    R: AsRef<[B]> + Sync,
    A: Sync,
    B: Sync,
    D: DistanceValue + Send,
    E: Send,
    F: Fn(&A, &B) -> Result<D, E> + Sync,
{
    #[cfg(feature = "tracing")]
    let _span = tracing::info_span!(
        "pairwise_matrix",
        trajectories = left.len(),
        against = right.len()
    )
    .entered();

    let cols = right.len();
    let rows = fill_rows(left.len(), |i| {
        (0..cols)
            .map(|j| {
                dispatch(left[i].as_ref(), right[j].as_ref(), RowLayout::Shorter, &dist)
                    .map_err(|source| BatchError { row: i, col: j, source })
            })
            .collect::<Result<Vec<D>, _>>()
    })?;

    Ok(PairwiseMatrix {
        rows: left.len(),
        cols,
        values: rows.into_iter().flatten().collect(),
    })
}

/// `n × n` matrix for a symmetric distance function.
///
/// Only the upper triangle (diagonal included) is computed and mirrored. The
/// discrete Fréchet distance is symmetric whenever `d` is, so this halves the
/// work without changing any entry.
pub fn pairwise_symmetric<T, A, D, E, F>(
    trajectories: &[T],
    dist: F,
) -> Result<PairwiseMatrix<D>, BatchError<E>>
where
    T: AsRef<[A]> + Sync,
    A: Sync,
    D: DistanceValue + Send,
    E: Send,
    F: Fn(&A, &A) -> Result<D, E> + Sync,
{
    #[cfg(feature = "tracing")]
    let _span = tracing::info_span!("pairwise_matrix", trajectories = trajectories.len(), symmetric = true)
        .entered();

    let n = trajectories.len();
    let upper = fill_rows(n, |i| {
        (i..n)
            .map(|j| {
                dispatch(
                    trajectories[i].as_ref(),
                    trajectories[j].as_ref(),
                    RowLayout::Shorter,
                    &dist,
                )
                .map_err(|source| BatchError { row: i, col: j, source })
            })
            .collect::<Result<Vec<D>, _>>()
    })?;

    let mut values = Vec::with_capacity(n * n);
    for i in 0..n {
        for j in 0..n {
            let v = if j >= i {
                upper[i][j - i]
            } else {
                upper[j][i - j]
            };
            values.push(v);
        }
    }

    Ok(PairwiseMatrix {
        rows: n,
        cols: n,
        values,
    })
}

#[cfg(feature = "parallel")]
fn fill_rows<D, E, G>(rows: usize, row: G) -> Result<Vec<Vec<D>>, BatchError<E>>
where
    D: Send,
    E: Send,
    G: Fn(usize) -> Result<Vec<D>, BatchError<E>> + Sync,
{
    // Collect everything, then surface the first failure in row order.
    let computed: Vec<_> = (0..rows).into_par_iter().map(&row).collect();
    computed.into_iter().collect()
}

#[cfg(not(feature = "parallel"))]
fn fill_rows<D, E, G>(rows: usize, row: G) -> Result<Vec<Vec<D>>, BatchError<E>>
where
    G: Fn(usize) -> Result<Vec<D>, BatchError<E>>,
{
    (0..rows).map(row).collect()
}
