//! Selection engine.
//!
//! [`ChoiceEngine`] ties a path and a choice budget to a solving
//! [`Strategy`]:
//! 1. `Memoized`: top-down recursion that only materializes the cells
//!    reachable from `(M, 0)`.
//! 2. `Layered`: bottom-up fill of the whole cache (see [`crate::layered`]),
//!    followed by the same reconstruction. Parallel under the `parallel`
//!    feature.
//!
//! Both strategies return identical choices and bit-identical costs.

use crate::cache::CacheStats;
use crate::layered::fill_cache;
use crate::path::Path;
use crate::selector::{check_budget, Selector};

/// How the engine fills the cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Top-down recursion with lazy memoization.
    #[default]
    Memoized,
    /// Bottom-up fill of every layer.
    Layered,
}

impl Strategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Memoized => "memoized",
            Strategy::Layered => "layered",
        }
    }
}

/// Selection engine for a given path and budget.
///
/// Typical usage:
/// ```
/// use choice_dp::{ChoiceEngine, Path, Strategy};
///
/// let path = Path::from_values(&[0.0, 1.0, 2.0, 3.0]).unwrap();
/// let engine = ChoiceEngine::with_strategy(&path, 1, Strategy::Layered);
/// let (choices, cost) = engine.run();
/// assert_eq!(choices, vec![1]);
/// assert_eq!(cost, 2.0);
/// ```
#[derive(Debug, Clone)]
pub struct ChoiceEngine<'p> {
    path: &'p Path,
    n_choices: usize,
    strategy: Strategy,
}

impl<'p> ChoiceEngine<'p> {
    /// Create an engine using the default (memoized) strategy.
    ///
    /// # Panics
    /// Panics if `n_choices > path.len()`.
    pub fn new(path: &'p Path, n_choices: usize) -> Self {
        Self::with_strategy(path, n_choices, Strategy::default())
    }

    /// Create an engine with an explicit strategy.
    ///
    /// # Panics
    /// Panics if `n_choices > path.len()`.
    pub fn with_strategy(path: &'p Path, n_choices: usize, strategy: Strategy) -> Self {
        check_budget(n_choices, path.len()).unwrap_or_else(|err| panic!("{err}"));
        Self {
            path,
            n_choices,
            strategy,
        }
    }

    /// The path being summarised.
    pub fn path(&self) -> &'p Path {
        self.path
    }

    /// Choice budget M.
    pub fn n_choices(&self) -> usize {
        self.n_choices
    }

    /// Configured strategy.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    fn selector(&self) -> Selector<'p> {
        match self.strategy {
            Strategy::Memoized => Selector::new(self.path, self.n_choices),
            Strategy::Layered => Selector::with_cache(self.path, fill_cache(self.path, self.n_choices)),
        }
    }

    /// Run the selection: ascending choices and total cost.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            level = "debug",
            skip(self),
            fields(n = self.path.len(), m = self.n_choices, strategy = self.strategy.as_str())
        )
    )]
    pub fn run(&self) -> (Vec<usize>, f64) {
        self.selector().solve()
    }

    /// Like [`run`](Self::run) but also reports how many cache cells were
    /// materialized.
    pub fn run_with_stats(&self) -> (Vec<usize>, f64, CacheStats) {
        let mut selector = self.selector();
        let (choices, cost) = selector.solve();
        (choices, cost, selector.cache().stats())
    }
}
