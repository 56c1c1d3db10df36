//! Example: pick representative points on a seeded integer random walk.
//!
//! Run with:
//! `cargo run --example walk`

use choice_dp::utils::distinct_anchors;
use choice_dp::walks::{seeded_rng, simple_random_walk};
use choice_dp::best_choices;

fn main() {
    let mut rng = seeded_rng(0);
    let walk = simple_random_walk(&mut rng, 20);

    let (choices, cost) = best_choices(7, &walk);

    println!("Walk (transposed):");
    print!("{walk}");
    println!("Choices: {choices:?}");
    println!("Distinct anchors: {:?}", distinct_anchors(&choices));
    println!("Cost: {cost}");
}
