use discrete_frechet::{
    compute_discrete_frechet, metrics::SquaredEuclidean, FrechetEngine, Metric,
};

type Point = (f64, f64);

fn squared(a: &Point, b: &Point) -> f64 {
    (a.0 - b.0) * (a.0 - b.0) + (a.1 - b.1) * (a.1 - b.1)
}

fn trajectory_p() -> Vec<Point> {
    vec![(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]
}

fn trajectory_q() -> Vec<Point> {
    vec![(1.2, 1.1), (1.0, 1.1), (2.1, 1.0), (3.1, 1.0), (4.0, 0.0)]
}

#[test]
fn parallel_lines_at_unit_distance() {
    let p = trajectory_p();
    let q = vec![(0.0, 1.0), (1.0, 1.0), (2.0, 1.0), (3.0, 1.0), (4.0, 0.0)];
    assert_eq!(compute_discrete_frechet(&p, &q, squared), Ok(1.0));
}

#[test]
fn two_point_prefix_of_q() {
    let p = trajectory_p();
    let q = trajectory_q();
    let frechet = compute_discrete_frechet(&p, &q[..2], squared).unwrap();
    assert_eq!(frechet, squared(&q[1], &p[3]));
    assert!((frechet - 5.21).abs() < 1e-12);
}

#[test]
fn zero_distance_function() {
    let p = trajectory_p();
    let q = trajectory_q();
    let frechet = compute_discrete_frechet(&p, &q[..2], |_: &Point, _: &Point| 0);
    assert_eq!(frechet, Ok(0));
}

#[test]
fn single_point_p_against_full_q() {
    let p = trajectory_p();
    let q = trajectory_q();
    let frechet = compute_discrete_frechet(&p[..1], &q, squared).unwrap();
    assert_eq!(frechet, squared(&p[0], &q[4]));
    assert_eq!(frechet, 16.0);
}

#[test]
fn single_point_q_against_full_p() {
    let p = trajectory_p();
    let q = trajectory_q();
    // Q reduced to its second point only: the probe is (1, 1.1).
    let frechet = compute_discrete_frechet(&p, &q[1..2], squared).unwrap();
    assert_eq!(frechet, squared(&p[3], &q[1]));
    assert!((frechet - 5.21).abs() < 1e-12);
}

#[test]
fn engine_with_squared_metric_agrees() {
    let p = trajectory_p();
    let q = trajectory_q();
    let engine = FrechetEngine::new(SquaredEuclidean);
    for end in 1..=q.len() {
        let expected = compute_discrete_frechet(&p, &q[..end], squared);
        assert_eq!(engine.distance(&p, &q[..end]), expected, "prefix {end}");
    }
    assert_eq!(SquaredEuclidean.distance(&p[0], &q[4]), Ok(16.0));
}
