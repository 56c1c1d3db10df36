//! Representative break-point selection on a path.
//!
//! Given an ordered path of N points in D-dimensional space and a budget of
//! M break-points ("choices"), this crate finds the M indices whose
//! piecewise-constant approximation of the path is cheapest, together with
//! that cost.
//!
//! ## Cost model
//! The cost of a segment `[a, b)` is the distance walked along the path from
//! point `a` to point `b - 1`:
//!
//! ```text
//! cost[a, b] = ||P[a+1] - P[a]|| + cost[a+1, b],   cost[a, a] = cost[a, a+1] = 0
//! ```
//!
//! A choice list `c1 <= c2 <= ... <= cM` costs
//! `cost[0, c1) + cost[c1, c2) + ... + cost[cM, N)`.
//!
//! ## Core idea
//! 1. [`Selector::segment_cost`] memoizes segment costs in a dense table.
//! 2. [`Selector::next_choice`] memoizes, for every remaining budget `m` and
//!    start `s`, the best next break-point and the total it achieves.
//! 3. [`Selector::best_choices_with_cache`] walks those tables to
//!    materialize the optimal list.
//!
//! [`layered::fill_cache`] computes the same tables bottom-up (in parallel
//! with the `parallel` feature); [`ChoiceEngine`] picks between the two.
//!
//! ## Quick start
//! ```
//! use choice_dp::{best_choices, Path};
//!
//! let path = Path::from_values(&[0.0, 0.0, 10.0, 0.0, 0.0]).unwrap();
//! let (choices, cost) = best_choices(1, &path);
//! assert_eq!(choices, vec![2]);
//! assert_eq!(cost, 10.0);
//! ```

pub mod builder;
pub mod cache;
pub mod choice;
pub mod engine;
pub mod error;
pub mod layered;
pub mod path;
pub mod reference;
pub mod segment;
pub mod selector;
pub mod table;
pub mod utils;
pub mod walks;

pub use crate::builder::ChoiceEngineBuilder;
pub use crate::cache::{CacheStats, ChoiceCache};
pub use crate::engine::{ChoiceEngine, Strategy};
pub use crate::error::{PathError, SelectionError};
pub use crate::path::Path;
pub use crate::selector::{best_choices, try_best_choices, Selector};
