//! Error types for discrete Fréchet computations.
//!
//! Only two things can go wrong: a caller hands over an empty trajectory, or
//! the caller's distance function reports a failure. Both abort the whole
//! computation; there is never a partial result.

use std::convert::Infallible;
use std::fmt;

use thiserror::Error;

/// Which of the two input trajectories an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The first trajectory (the one passed as `p`).
    P,
    /// The second trajectory (the one passed as `q`).
    Q,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::P => f.write_str("P"),
            Side::Q => f.write_str("Q"),
        }
    }
}

/// Failure of a single discrete Fréchet computation.
///
/// `E` is the error type of the caller's distance function. The infallible
/// entry points use the default `E = Infallible`, so only
/// [`FrechetError::EmptyTrajectory`] can actually occur there.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrechetError<E = Infallible> {
    /// One of the trajectories has no points.
    #[error("trajectory {side} is empty")]
    EmptyTrajectory { side: Side },

    /// The distance function failed; the caller's error is carried unchanged.
    #[error("distance function failed")]
    Distance(#[source] E),
}

impl<E> FrechetError<E> {
    /// Map the carried distance-function error to another type.
    pub fn map_distance<E2, F>(self, f: F) -> FrechetError<E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            FrechetError::EmptyTrajectory { side } => FrechetError::EmptyTrajectory { side },
            FrechetError::Distance(e) => FrechetError::Distance(f(e)),
        }
    }

    /// The distance-function error, if that is what failed.
    pub fn into_distance_error(self) -> Option<E> {
        match self {
            FrechetError::Distance(e) => Some(e),
            FrechetError::EmptyTrajectory { .. } => None,
        }
    }

    /// True for the empty-input precondition failure.
    pub fn is_empty_trajectory(&self) -> bool {
        matches!(self, FrechetError::EmptyTrajectory { .. })
    }
}

impl FrechetError<Infallible> {
    /// Widen an infallible-metric error into any distance error type.
    pub fn widen<E>(self) -> FrechetError<E> {
        self.map_distance(|never| match never {})
    }
}

/// Check the shared non-empty precondition, P first.
pub(crate) fn ensure_non_empty<E>(p_len: usize, q_len: usize) -> Result<(), FrechetError<E>> {
    let side = if p_len == 0 {
        Side::P
    } else if q_len == 0 {
        Side::Q
    } else {
        return Ok(());
    };
    #[cfg(feature = "tracing")]
    tracing::debug!(%side, "rejecting empty trajectory");
    Err(FrechetError::EmptyTrajectory { side })
}

/// A distance-function failure together with the cell it happened at.
///
/// Indices always address the caller's trajectories (`p_index` into P,
/// `q_index` into Q), whatever layout the table was evaluated in.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
pub(crate) struct CellFailure<E> {
    pub(crate) p_index: usize,
    pub(crate) q_index: usize,
    pub(crate) error: E,
}

impl<E> CellFailure<E> {
    pub(crate) fn new(error: E, p_index: usize, q_index: usize) -> Self {
        Self {
            p_index,
            q_index,
            error,
        }
    }
}

impl<E> From<CellFailure<E>> for FrechetError<E> {
    fn from(failure: CellFailure<E>) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            p_index = failure.p_index,
            q_index = failure.q_index,
            "distance function failed, aborting"
        );
        FrechetError::Distance(failure.error)
    }
}

/// Failure of one pair inside a batch computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("pair ({row}, {col}) failed: {source}")]
pub struct BatchError<E = Infallible> {
    /// Index of the trajectory on the row side.
    pub row: usize,
    /// Index of the trajectory on the column side.
    pub col: usize,
    /// The failure of that single computation.
    #[source]
    pub source: FrechetError<E>,
}
