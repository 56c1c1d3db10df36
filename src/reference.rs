//! Un-memoized reference implementations.
//!
//! These recompute everything from scratch on every call and exist to check
//! the cached solvers against: [`exhaustive_best_choices`] is exponential in
//! the budget and only practical for paths of about ten points.

use crate::path::Path;

/// Cost of `[start, stop)` without any caching.
///
/// Accumulates from the far end so the result is bit-identical to the
/// cached evaluator.
///
/// # Panics
/// Panics if `start > stop` or `stop > path.len()`.
pub fn segment_cost(path: &Path, start: usize, stop: usize) -> f64 {
    assert!(
        start <= stop && stop <= path.len(),
        "segment [{start}, {stop}) invalid for path of length {}",
        path.len()
    );
    if stop - start <= 1 {
        return 0.0;
    }
    (start..stop - 1)
        .rev()
        .fold(0.0, |acc, k| path.step_length(k) + acc)
}

/// Cost of the partition induced by a non-decreasing `choices` list:
/// `cost(0, c1) + cost(c1, c2) + ... + cost(cM, N)`, associated from the right.
///
/// # Panics
/// Panics if `choices` is not non-decreasing or an entry is `>= N`.
pub fn partition_cost(path: &Path, choices: &[usize]) -> f64 {
    let n = path.len();
    assert!(
        crate::utils::is_monotone_chain(choices, n),
        "choices {choices:?} must be non-decreasing and below {n}"
    );
    let mut bounds = Vec::with_capacity(choices.len() + 2);
    bounds.push(0);
    bounds.extend_from_slice(choices);
    bounds.push(n);
    bounds
        .windows(2)
        .rev()
        .fold(0.0, |acc, w| segment_cost(path, w[0], w[1]) + acc)
}

/// Try every next break-point for every remaining choice, recursing on the
/// suffix. Keeps the first minimum in ascending index order.
///
/// Returns the choices in ascending order and the achieved cost.
///
/// # Panics
/// Panics if `n_choices > path.len()`.
pub fn exhaustive_best_choices(path: &Path, n_choices: usize) -> (Vec<usize>, f64) {
    assert!(
        n_choices <= path.len(),
        "choice budget {n_choices} exceeds path length {}",
        path.len()
    );
    let (mut choices, cost) = exhaustive_from(path, n_choices, 0);
    choices.reverse();
    (choices, cost)
}

/// Innermost-first choices for the suffix at `start`.
fn exhaustive_from(path: &Path, n_choices: usize, start: usize) -> (Vec<usize>, f64) {
    let n = path.len();
    if n_choices == 0 {
        return (Vec::new(), segment_cost(path, start, n));
    }
    let mut best: Option<(Vec<usize>, f64)> = None;
    for i in start..n {
        let (mut tail, after) = if n_choices == 1 {
            (Vec::new(), segment_cost(path, i, n))
        } else {
            exhaustive_from(path, n_choices - 1, i)
        };
        let total = segment_cost(path, start, i) + after;
        if best.as_ref().map_or(true, |(_, cost)| total < *cost) {
            tail.push(i);
            best = Some((tail, total));
        }
    }
    best.unwrap_or_else(|| unreachable!("scan over [{start}, {n}) is never empty"))
}
