//! Synthetic paths for tests, demos and benchmarks.
//!
//! Generators draw from the rng they are handed; seed it with
//! [`seeded_rng`] for reproducible walks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Exp1, StandardNormal};

use crate::path::Path;

/// Standard deviation of the per-step acceleration in [`random_walk`].
pub const ACCELERATION_SCALE: f64 = 0.001;

/// Rate of the exponential factor applied to the velocity in [`random_walk`];
/// the factor has mean `1 / JAGGEDNESS_RATE`.
pub const JAGGEDNESS_RATE: f64 = 0.5;

/// Deterministic 64-bit generator for a given seed.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// One-dimensional integer-valued walk of `steps` points starting at 0.
///
/// Each step draws an acceleration in `0..5`, adds or subtracts it from the
/// velocity with equal probability, then moves by the velocity.
///
/// # Panics
/// Panics if `steps == 0`.
pub fn simple_random_walk<R: Rng + ?Sized>(rng: &mut R, steps: usize) -> Path {
    assert!(steps > 0, "a walk needs at least one point");
    let mut positions = Vec::with_capacity(steps);
    positions.push(0.0);
    let mut pos = 0i64;
    let mut vel = 0i64;
    for _ in 1..steps {
        let acc: i64 = rng.gen_range(0..5);
        let coin: f64 = StandardNormal.sample(rng);
        if coin > 0.0 {
            vel += acc;
        } else {
            vel -= acc;
        }
        pos += vel;
        positions.push(pos as f64);
    }
    Path::new(steps, 1, positions).unwrap_or_else(|err| panic!("walk is well formed: {err}"))
}

/// `dim`-dimensional walk of `steps` points starting at the origin.
///
/// The velocity picks up a small Gaussian acceleration every step and is
/// then scaled by an exponential factor, which makes the path jagged.
///
/// # Panics
/// Panics if `steps == 0` or `dim == 0`.
pub fn random_walk<R: Rng + ?Sized>(rng: &mut R, steps: usize, dim: usize) -> Path {
    assert!(steps > 0, "a walk needs at least one point");
    assert!(dim > 0, "a walk needs at least one dimension");
    let mut data = vec![0.0; steps * dim];
    let mut vel = vec![0.0; dim];
    for i in 1..steps {
        for v in vel.iter_mut() {
            let acc: f64 = StandardNormal.sample(rng);
            *v += acc * ACCELERATION_SCALE;
        }
        let noise: f64 = Exp1.sample(rng);
        let noise = noise / JAGGEDNESS_RATE;
        for (k, v) in vel.iter_mut().enumerate() {
            *v *= noise;
            data[i * dim + k] = data[(i - 1) * dim + k] + *v;
        }
    }
    Path::new(steps, dim, data).unwrap_or_else(|err| panic!("walk is well formed: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_walk_starts_at_zero_and_stays_integral() {
        let mut rng = seeded_rng(7);
        let walk = simple_random_walk(&mut rng, 50);
        assert_eq!(walk.len(), 50);
        assert_eq!(walk.dim(), 1);
        assert_eq!(walk.row(0), &[0.0]);
        assert!(walk.as_slice().iter().all(|v| v.fract() == 0.0));
    }

    #[test]
    fn same_seed_same_walk() {
        let a = simple_random_walk(&mut seeded_rng(3), 20);
        let b = simple_random_walk(&mut seeded_rng(3), 20);
        assert_eq!(a, b);
        let c = random_walk(&mut seeded_rng(3), 20, 3);
        let d = random_walk(&mut seeded_rng(3), 20, 3);
        assert_eq!(c, d);
    }

    #[test]
    fn random_walk_shape_and_origin() {
        let walk = random_walk(&mut seeded_rng(11), 30, 2);
        assert_eq!(walk.len(), 30);
        assert_eq!(walk.dim(), 2);
        assert_eq!(walk.row(0), &[0.0, 0.0]);
        assert!(walk.as_slice().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn random_walk_scales_velocity_by_exponential_over_rate() {
        let walk = random_walk(&mut seeded_rng(4), 6, 1);
        let mut rng = seeded_rng(4);
        let (mut pos, mut vel) = (0.0, 0.0);
        for i in 1..6 {
            let acc: f64 = StandardNormal.sample(&mut rng);
            vel += acc * ACCELERATION_SCALE;
            let noise: f64 = Exp1.sample(&mut rng);
            vel *= noise / 0.5;
            pos += vel;
            assert_eq!(walk.row(i), &[pos]);
        }
    }

    #[test]
    fn single_point_walks() {
        assert_eq!(simple_random_walk(&mut seeded_rng(0), 1).len(), 1);
        assert_eq!(random_walk(&mut seeded_rng(0), 1, 4).len(), 1);
    }

    #[test]
    #[should_panic(expected = "at least one point")]
    fn empty_walk_panics() {
        let _ = simple_random_walk(&mut seeded_rng(0), 0);
    }
}
