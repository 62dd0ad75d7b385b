use std::cell::Cell;
use std::fmt;

use discrete_frechet::{
    compute_discrete_frechet, discrete_frechet_coupling, discrete_frechet_within,
    try_compute_discrete_frechet, FrechetEngine, FrechetError, Metric, Side, TryFnMetric,
};

#[derive(Debug, Clone, PartialEq, Eq)]
struct OutOfRange(i32);

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "point {} out of range", self.0)
    }
}

impl std::error::Error for OutOfRange {}

fn bounded(a: &i32, b: &i32) -> Result<i32, OutOfRange> {
    if *b > 100 {
        Err(OutOfRange(*b))
    } else {
        Ok((a - b).abs())
    }
}

#[test]
fn empty_p_rejected_without_calling_distance() {
    let calls = Cell::new(0);
    let empty: Vec<i32> = Vec::new();
    let r = compute_discrete_frechet(&empty, &[1, 2], |a: &i32, b: &i32| {
        calls.set(calls.get() + 1);
        a - b
    });
    assert_eq!(r, Err(FrechetError::EmptyTrajectory { side: Side::P }));
    assert_eq!(calls.get(), 0);
}

#[test]
fn empty_q_rejected_everywhere() {
    let p = [1, 2, 3];
    let empty: [i32; 0] = [];
    let expected = FrechetError::EmptyTrajectory { side: Side::Q };
    assert_eq!(try_compute_discrete_frechet(&p, &empty, bounded), Err(expected.clone()));
    assert_eq!(discrete_frechet_coupling(&p, &empty, bounded), Err(expected.clone()));
    assert_eq!(discrete_frechet_within(&p, &empty, 3, bounded), Err(expected));
}

#[test]
fn distance_error_passes_through_unchanged() {
    let p = [0, 1, 2];
    let q = [0, 50, 101, 3];
    let err = try_compute_discrete_frechet(&p, &q, bounded).unwrap_err();
    assert_eq!(err, FrechetError::Distance(OutOfRange(101)));
    assert_eq!(err.into_distance_error(), Some(OutOfRange(101)));
}

#[test]
fn error_source_chain_exposes_caller_error() {
    use std::error::Error;

    let err = try_compute_discrete_frechet(&[0], &[200], bounded).unwrap_err();
    assert_eq!(err.to_string(), "distance function failed");
    let source = err.source().expect("caller error is the source");
    assert_eq!(source.to_string(), "point 200 out of range");
}

#[test]
fn singleton_scan_stops_at_first_failure() {
    let calls = Cell::new(0);
    let r = try_compute_discrete_frechet(&[0], &[1, 2, 500, 3, 4], |a: &i32, b: &i32| {
        calls.set(calls.get() + 1);
        bounded(a, b)
    });
    assert_eq!(r, Err(FrechetError::Distance(OutOfRange(500))));
    assert_eq!(calls.get(), 3);
}

#[test]
fn engine_propagates_metric_errors() {
    let engine = FrechetEngine::new(TryFnMetric::new(bounded));
    assert_eq!(engine.distance(&[0, 1], &[1, 2]), Ok(1));
    assert_eq!(
        engine.distance(&[0, 1], &[1, 102]),
        Err(FrechetError::Distance(OutOfRange(102)))
    );
    assert_eq!(
        engine.within(&[0, 1], &[1, 102], 5),
        Err(FrechetError::Distance(OutOfRange(102)))
    );
    assert!(engine.coupling(&[0], &[103]).is_err());
    assert_eq!(engine.metric().distance(&0, &7), Ok(7));
}
