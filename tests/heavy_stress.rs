#![cfg(feature = "heavy")]
use discrete_frechet::{compute_discrete_frechet, FrechetEngine, FnMetric, RowLayout};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_walk(rng: &mut StdRng, len: usize) -> Vec<(f64, f64)> {
    let mut pos = (0.0, 0.0);
    (0..len)
        .map(|_| {
            pos.0 += rng.gen_range(-1.0..1.0);
            pos.1 += rng.gen_range(-1.0..1.0);
            pos
        })
        .collect()
}

fn squared(a: &(f64, f64), b: &(f64, f64)) -> f64 {
    (a.0 - b.0) * (a.0 - b.0) + (a.1 - b.1) * (a.1 - b.1)
}

#[test]
fn heavy_stress_random_walks() {
    let mut rng = StdRng::seed_from_u64(123);
    let p = random_walk(&mut rng, 5_000);
    let q = random_walk(&mut rng, 5_000);
    let d = compute_discrete_frechet(&p, &q, squared).unwrap();
    assert!(d.is_finite());
    assert!(d >= squared(&p[0], &q[0]));
    assert!(d >= squared(&p[p.len() - 1], &q[q.len() - 1]));
}

#[test]
fn heavy_skewed_layouts_agree() {
    let mut rng = StdRng::seed_from_u64(7);
    let p = random_walk(&mut rng, 200_000);
    let q = random_walk(&mut rng, 24);
    let a = FrechetEngine::with_layout(FnMetric::new(squared), RowLayout::PInner)
        .distance(&p, &q)
        .unwrap();
    let b = FrechetEngine::with_layout(FnMetric::new(squared), RowLayout::Shorter)
        .distance(&p, &q)
        .unwrap();
    assert_eq!(a, b);
}
