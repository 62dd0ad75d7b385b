//! Exact discrete Fréchet distance between trajectories.
//!
//! The discrete Fréchet distance between two point sequences P and Q is the
//! smallest "leash length" that lets two walkers traverse P and Q from start
//! to end, each step advancing one walker, the other, or both, never going
//! back. Formally it is the minimum over monotone couplings of the maximum
//! pointwise distance along the coupling.
//!
//! ## Core idea
//! 1. Supply the trajectories as slices and a distance function, either as a
//!    closure or as a [`Metric`] implementation.
//! 2. The Eiter–Mannila recurrence is evaluated row by row with two rolling
//!    buffers: O(m·n) time, O(m) space.
//! 3. When one side has a single point the table degenerates to a linear scan.
//!
//! Empty trajectories are rejected with [`FrechetError::EmptyTrajectory`];
//! failures of a fallible distance function are returned unchanged as
//! [`FrechetError::Distance`].
//!
//! ## Quick start
//! ```
//! use discrete_frechet::compute_discrete_frechet;
//!
//! let p = [(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)];
//! let q = [(0.0, 1.0), (1.0, 1.0), (2.0, 1.0), (3.0, 1.0), (4.0, 0.0)];
//! let squared = |a: &(f64, f64), b: &(f64, f64)| (a.0 - b.0).powi(2) + (a.1 - b.1).powi(2);
//! assert_eq!(compute_discrete_frechet(&p, &q, squared), Ok(1.0));
//! ```
//!
//! ## Beyond the distance
//! - [`coupling`]: an optimal coupling (full table, O(m·n) space).
//! - [`decision`]: threshold test with early exit.
//! - [`batch`]: distance matrices over trajectory collections, optionally
//!   parallel with the `parallel` feature.
//!
//! Enable the `tracing` feature for spans around each computation.

pub mod batch;
pub mod builder;
pub mod coupling;
pub mod decision;
pub mod engine;
pub mod error;
pub mod metrics;
pub mod traits;
pub mod utils;

pub use crate::builder::FrechetEngineBuilder;
pub use crate::coupling::{discrete_frechet_coupling, Coupling};
pub use crate::decision::discrete_frechet_within;
pub use crate::engine::{
    compute_discrete_frechet, singleton_distance, try_compute_discrete_frechet, FrechetEngine,
};
pub use crate::error::{BatchError, FrechetError, Side};
pub use crate::traits::{DistanceValue, FnMetric, Metric, TotalF64, TryFnMetric};
pub use crate::utils::RowLayout;
