//! Example: bottom-up selection on a longer two-dimensional walk.
//!
//! Run with:
//! `cargo run --release --example layered --features parallel`

use std::time::Instant;

use choice_dp::walks::{random_walk, seeded_rng};
use choice_dp::{ChoiceEngine, Strategy};

fn main() {
    let mut rng = seeded_rng(11);
    let walk = random_walk(&mut rng, 500, 2);

    for strategy in [Strategy::Memoized, Strategy::Layered] {
        let start = Instant::now();
        let (choices, cost, stats) = ChoiceEngine::with_strategy(&walk, 30, strategy).run_with_stats();
        println!(
            "{:<9} cost={cost:.6} cells={} time={:.3}s",
            strategy.as_str(),
            stats.total(),
            start.elapsed().as_secs_f64()
        );
        println!("          choices={choices:?}");
    }
}
