#![cfg(feature = "parallel")]

use lcs_diff::{diff_with, HirschbergBuilder};
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_dna(rng: &mut StdRng, len: usize) -> Vec<u8> {
    const ALPHABET: &[u8] = b"ACGT";
    (0..len)
        .map(|_| {
            let idx = rng.gen_range(0..ALPHABET.len());
            ALPHABET[idx]
        })
        .collect()
}

proptest! {
    #[test]
    fn parallel_matches_sequential(a in "[ACGT]{0,40}", b in "[ACGT]{0,40}") {
        let s = a.as_bytes();
        let t = b.as_bytes();
        let parallel = HirschbergBuilder::new().with_parallel_threshold(0).build();
        let sequential = HirschbergBuilder::new().sequential().build();
        prop_assert_eq!(parallel.lcs_pairs(s, t), sequential.lcs_pairs(s, t));
        prop_assert_eq!(diff_with(&parallel, s, t), diff_with(&sequential, s, t));
    }
}

#[test]
fn parallel_matches_sequential_large() {
    let mut rng = StdRng::seed_from_u64(42);
    let s = random_dna(&mut rng, 3_000);
    let t = random_dna(&mut rng, 2_500);
    let parallel = HirschbergBuilder::new().with_parallel_threshold(1).build();
    let sequential = HirschbergBuilder::new().sequential().build();
    let (pairs_par, stats_par) = parallel.run(&s, &t);
    let (pairs_seq, stats_seq) = sequential.run(&s, &t);
    assert_eq!(pairs_par, pairs_seq);
    assert_eq!(stats_par, stats_seq);
}
