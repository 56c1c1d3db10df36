#![cfg(feature = "parallel")]

use choice_dp::walks::{random_walk, seeded_rng};
use choice_dp::engine::Strategy as Solve;
use choice_dp::{ChoiceEngine, Path};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn layered_matches_memoized(
        values in prop::collection::vec(-50i32..50, 1usize..64),
        m in 0usize..12,
    ) {
        let values: Vec<f64> = values.into_iter().map(f64::from).collect();
        let path = Path::from_values(&values).unwrap();
        let m = m.min(path.len());
        let memo = ChoiceEngine::with_strategy(&path, m, Solve::Memoized).run();
        let layered = ChoiceEngine::with_strategy(&path, m, Solve::Layered).run();
        prop_assert_eq!(&memo.0, &layered.0);
        prop_assert_eq!(memo.1.to_bits(), layered.1.to_bits());
    }
}

#[test]
fn layered_matches_memoized_on_jagged_walks() {
    for seed in 0..4u64 {
        let path = random_walk(&mut seeded_rng(seed), 200, 3);
        let memo = ChoiceEngine::with_strategy(&path, 16, Solve::Memoized).run();
        let layered = ChoiceEngine::with_strategy(&path, 16, Solve::Layered).run();
        assert_eq!(memo.0, layered.0, "seed {seed}");
        assert_eq!(memo.1.to_bits(), layered.1.to_bits(), "seed {seed}");
    }
}
