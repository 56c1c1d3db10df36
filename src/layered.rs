//! Bottom-up fill of the selection cache.
//!
//! Equivalent to the memoized recursion but without stack depth proportional
//! to N, and with every cell of a layer independent of its neighbours:
//!
//! 1. `cost[a, b]` for every `b - a >= 2`, one column `b` at a time, replaying
//!    the recurrence from `a = b - 2` down to `0`.
//! 2. `costWithChoices[m, s]` for `m = 1..=M` and every `s < N`, each cell
//!    reading only the cost table and layer `m - 1`.
//!
//! With the `parallel` feature the columns of step 1 and the cells of each
//! layer in step 2 are computed with rayon. Every cell is still computed
//! exactly once, the inner scan stays sequential (smallest index wins ties),
//! and each `(choice, cost)` pair is produced together before it is stored.

use crate::cache::ChoiceCache;
use crate::choice::first_minimum;
use crate::path::Path;
use crate::selector::check_budget;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Cost column `b`: entry `a` holds `cost[a, b]` for `a < b`.
fn cost_column(path: &Path, stop: usize) -> Vec<f64> {
    let mut column = vec![0.0; stop];
    let mut acc = 0.0;
    for a in (0..stop.saturating_sub(1)).rev() {
        acc = path.step_length(a) + acc;
        column[a] = acc;
    }
    column
}

/// Dense `cost[a][b]` lookup built from the columns.
struct CostGrid {
    columns: Vec<Vec<f64>>,
}

impl CostGrid {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(path), fields(n = path.len()))
    )]
    fn build(path: &Path) -> Self {
        let n = path.len();
        #[cfg(feature = "parallel")]
        let columns = (0..=n)
            .into_par_iter()
            .map(|b| cost_column(path, b))
            .collect();
        #[cfg(not(feature = "parallel"))]
        let columns = (0..=n).map(|b| cost_column(path, b)).collect();
        Self { columns }
    }

    #[inline]
    fn get(&self, start: usize, stop: usize) -> f64 {
        if stop - start <= 1 {
            0.0
        } else {
            self.columns[stop][start]
        }
    }
}

/// One cell of layer `m`: scan `i = s..N` against the previous layer.
fn layer_cell(costs: &CostGrid, previous: &[f64], start: usize) -> (usize, f64) {
    let n = previous.len();
    first_minimum((start..n).map(|i| (i, costs.get(start, i) + previous[i])))
        .unwrap_or_else(|| unreachable!("scan over [{start}, {n}) is never empty"))
}

#[cfg(feature = "parallel")]
fn compute_layer(costs: &CostGrid, previous: &[f64]) -> Vec<(usize, f64)> {
    (0..previous.len())
        .into_par_iter()
        .map(|s| layer_cell(costs, previous, s))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn compute_layer(costs: &CostGrid, previous: &[f64]) -> Vec<(usize, f64)> {
    (0..previous.len())
        .map(|s| layer_cell(costs, previous, s))
        .collect()
}

/// Fill a cache for `n_choices` over `path` bottom-up.
///
/// The returned cache holds every non-trivial segment cost and every
/// `(m, s)` cell with `1 <= m <= n_choices`, `s < N`. Handing it to
/// [`Selector::with_cache`](crate::Selector::with_cache) yields the same
/// reconstruction as the memoized path, served entirely from the cache.
///
/// # Panics
/// Panics if `n_choices > path.len()`.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "debug", skip(path), fields(n = path.len()))
)]
pub fn fill_cache(path: &Path, n_choices: usize) -> ChoiceCache {
    let n = path.len();
    check_budget(n_choices, n).unwrap_or_else(|err| panic!("{err}"));
    let mut cache = ChoiceCache::new(n_choices, n);

    let costs = CostGrid::build(path);
    for stop in 2..=n {
        for start in 0..stop - 1 {
            cache.store_cost(start, stop, costs.get(start, stop));
        }
    }

    // f(1, i) = cost[i, N)
    let mut previous: Vec<f64> = (0..n).map(|i| costs.get(i, n)).collect();
    for m in 1..=n_choices {
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("fill_layer", m);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let layer = compute_layer(&costs, &previous);
        for (s, &(choice, cost)) in layer.iter().enumerate() {
            cache.store_next_choice(m, s, choice, cost);
        }
        previous = layer.into_iter().map(|(_, cost)| cost).collect();
    }
    cache
}
