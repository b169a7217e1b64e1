use lcs_diff::{utils::split_depth_bound, Hirschberg};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_lines(rng: &mut StdRng, len: usize) -> Vec<String> {
    (0..len)
        .map(|_| format!("line {}", rng.gen_range(0..8)))
        .collect()
}

#[test]
fn row_memory_is_independent_of_outer_length() {
    let mut rng = StdRng::seed_from_u64(7);
    let y = random_lines(&mut rng, 64);
    let solver = Hirschberg::new();

    let mut cells = Vec::new();
    for &len in &[1usize, 16, 256, 4096] {
        let x = random_lines(&mut rng, len);
        let (_, stats) = solver.run(&x, &y);
        assert!(stats.row_cells >= 4 * (y.len() + 1));
        cells.push(stats.row_cells);
    }
    assert!(
        cells.windows(2).all(|w| w[0] == w[1]),
        "row cells changed with |x|: {cells:?}"
    );
}

#[test]
fn depth_grows_logarithmically() {
    let mut rng = StdRng::seed_from_u64(11);
    let y = random_lines(&mut rng, 32);
    let solver = Hirschberg::new();

    for &len in &[2usize, 3, 5, 64, 1000, 5000] {
        let x = random_lines(&mut rng, len);
        let (_, stats) = solver.run(&x, &y);
        assert!(
            stats.max_depth <= split_depth_bound(len),
            "depth {} exceeds bound {} for |x| = {len}",
            stats.max_depth,
            split_depth_bound(len)
        );
    }

    // Identical inputs never short-cut, so the bound is reached exactly.
    let x = random_lines(&mut rng, 1000);
    let (_, stats) = solver.run(&x, &x);
    assert_eq!(stats.max_depth, split_depth_bound(1000));
    assert_eq!(stats.splits, 999);
}

#[test]
fn empty_inner_sequence_needs_one_frame() {
    let x: Vec<String> = (0..100).map(|i| i.to_string()).collect();
    let y: Vec<String> = Vec::new();
    let (pairs, stats) = Hirschberg::new().run(&x, &y);
    assert!(pairs.is_empty());
    assert_eq!(stats.max_depth, 1);
    assert_eq!(stats.splits, 0);
}
