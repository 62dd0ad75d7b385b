use discrete_frechet::{
    compute_discrete_frechet, discrete_frechet_coupling, discrete_frechet_within,
    FrechetEngine, FnMetric, RowLayout,
};
use proptest::prelude::*;

fn abs_diff(a: &i64, b: &i64) -> i64 {
    (a - b).abs()
}

fn full_frechet(p: &[i64], q: &[i64]) -> i64 {
    let m = p.len();
    let n = q.len();
    let mut dp = vec![vec![0i64; n]; m];
    for i in 0..m {
        for j in 0..n {
            let d = abs_diff(&p[i], &q[j]);
            dp[i][j] = match (i, j) {
                (0, 0) => d,
                (_, 0) => dp[i - 1][0].max(d),
                (0, _) => dp[0][j - 1].max(d),
                _ => dp[i - 1][j].min(dp[i - 1][j - 1]).min(dp[i][j - 1]).max(d),
            };
        }
    }
    dp[m - 1][n - 1]
}

/// Brute force over all monotone couplings, for very small inputs.
fn brute_force(p: &[i64], q: &[i64], i: usize, j: usize) -> i64 {
    let here = abs_diff(&p[i], &q[j]);
    if i + 1 == p.len() && j + 1 == q.len() {
        return here;
    }
    let mut best = i64::MAX;
    if i + 1 < p.len() {
        best = best.min(brute_force(p, q, i + 1, j));
    }
    if j + 1 < q.len() {
        best = best.min(brute_force(p, q, i, j + 1));
    }
    if i + 1 < p.len() && j + 1 < q.len() {
        best = best.min(brute_force(p, q, i + 1, j + 1));
    }
    here.max(best)
}

fn coupling_monotone(pairs: &[(usize, usize)]) -> bool {
    pairs.windows(2).all(|w| {
        let (a, b) = (w[0], w[1]);
        let di = b.0 as isize - a.0 as isize;
        let dj = b.1 as isize - a.1 as isize;
        matches!((di, dj), (1, 0) | (0, 1) | (1, 1))
    })
}

fn trajectory(max_len: usize) -> impl Strategy<Value = Vec<i64>> {
    proptest::collection::vec(-50i64..50, 1..max_len)
}

proptest! {
    #[test]
    fn rolling_matches_full_table(p in trajectory(24), q in trajectory(24)) {
        prop_assert_eq!(compute_discrete_frechet(&p, &q, abs_diff), Ok(full_frechet(&p, &q)));
    }

    #[test]
    fn full_table_matches_brute_force(p in trajectory(6), q in trajectory(6)) {
        prop_assert_eq!(full_frechet(&p, &q), brute_force(&p, &q, 0, 0));
    }

    #[test]
    fn every_layout_matches_full_table(p in trajectory(16), q in trajectory(16)) {
        let expected = full_frechet(&p, &q);
        for layout in [RowLayout::PInner, RowLayout::QInner, RowLayout::Shorter] {
            let engine = FrechetEngine::with_layout(FnMetric::new(abs_diff), layout);
            prop_assert_eq!(engine.distance(&p, &q), Ok(expected));
        }
    }

    #[test]
    fn coupling_realises_distance(p in trajectory(16), q in trajectory(16)) {
        let coupling = discrete_frechet_coupling(&p, &q, |a, b| Ok::<_, ()>(abs_diff(a, b))).unwrap();
        prop_assert_eq!(coupling.distance, full_frechet(&p, &q));
        prop_assert_eq!(coupling.pairs.first(), Some(&(0, 0)));
        prop_assert_eq!(coupling.pairs.last(), Some(&(p.len() - 1, q.len() - 1)));
        prop_assert!(coupling_monotone(&coupling.pairs));
        let worst = coupling.pair_distances.iter().copied().max();
        prop_assert_eq!(worst, Some(coupling.distance));
        prop_assert!(coupling.bottleneck().is_some());
    }

    #[test]
    fn decision_agrees_with_exact(p in trajectory(16), q in trajectory(16), slack in -3i64..3) {
        let exact = full_frechet(&p, &q);
        let threshold = exact + slack;
        let within = discrete_frechet_within(&p, &q, threshold, |a, b| Ok::<_, ()>(abs_diff(a, b)));
        prop_assert_eq!(within, Ok(exact <= threshold));
    }
}
