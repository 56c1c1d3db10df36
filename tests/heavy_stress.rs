#![cfg(feature = "heavy")]

use choice_dp::reference::partition_cost;
use choice_dp::utils::is_monotone_chain;
use choice_dp::walks::{seeded_rng, simple_random_walk};
use choice_dp::{ChoiceEngine, Strategy};

#[test]
fn long_walk_layered() {
    let path = simple_random_walk(&mut seeded_rng(42), 3000);
    let (choices, cost) = ChoiceEngine::with_strategy(&path, 40, Strategy::Layered).run();
    assert_eq!(choices.len(), 40);
    assert!(is_monotone_chain(&choices, path.len()));
    assert_eq!(partition_cost(&path, &choices).to_bits(), cost.to_bits());
}

#[test]
fn long_walk_strategies_agree() {
    let path = simple_random_walk(&mut seeded_rng(7), 1500);
    let memo = ChoiceEngine::with_strategy(&path, 25, Strategy::Memoized).run();
    let layered = ChoiceEngine::with_strategy(&path, 25, Strategy::Layered).run();
    assert_eq!(memo.0, layered.0);
    assert_eq!(memo.1.to_bits(), layered.1.to_bits());
}
