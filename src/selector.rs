//! Memoized selector: owns the cache for one `(M, N)` problem and exposes
//! the recursive building blocks plus the reconstruction of the optimal
//! choice list.
//!
//! The segment-cost evaluator lives in [`crate::segment`] and the choice DP
//! in [`crate::choice`]; both are methods on [`Selector`].

use crate::cache::ChoiceCache;
use crate::error::SelectionError;
use crate::path::Path;

/// Memoized solver state for one path and one choice budget.
///
/// ```
/// use choice_dp::{Path, Selector};
///
/// let path = Path::from_values(&[0.0, 0.0, 10.0, 0.0, 0.0]).unwrap();
/// let mut selector = Selector::new(&path, 1);
/// let (mut choices, cost) = selector.best_choices_with_cache(1, 0);
/// choices.reverse();
/// assert_eq!(choices, vec![2]);
/// assert_eq!(cost, 10.0);
/// ```
#[derive(Debug, Clone)]
pub struct Selector<'p> {
    pub(crate) path: &'p Path,
    pub(crate) cache: ChoiceCache,
}

impl<'p> Selector<'p> {
    /// Allocate a fresh cache sized for `n_choices` over `path`.
    ///
    /// # Panics
    /// Panics if `n_choices > path.len()`.
    pub fn new(path: &'p Path, n_choices: usize) -> Self {
        check_budget(n_choices, path.len()).unwrap_or_else(|err| panic!("{err}"));
        Self::with_cache(path, ChoiceCache::new(n_choices, path.len()))
    }

    /// Resume from an existing cache, e.g. one filled by
    /// [`layered::fill_cache`](crate::layered::fill_cache).
    ///
    /// # Panics
    /// Panics if the cache was sized for a different path length.
    pub fn with_cache(path: &'p Path, cache: ChoiceCache) -> Self {
        assert_eq!(
            cache.path_len(),
            path.len(),
            "cache sized for a path of length {}, got {}",
            cache.path_len(),
            path.len()
        );
        Self { path, cache }
    }

    /// The path being summarised.
    pub fn path(&self) -> &'p Path {
        self.path
    }

    /// Read-only view of the cache.
    pub fn cache(&self) -> &ChoiceCache {
        &self.cache
    }

    /// Give the cache back to the caller.
    pub fn into_cache(self) -> ChoiceCache {
        self.cache
    }

    /// Optimal choices for the suffix starting at `start` with `n_choices`
    /// left, innermost first (the last break-point leads the list), and
    /// the total cost of the suffix.
    ///
    /// With no choices left the whole suffix is one segment.
    pub fn best_choices_with_cache(&mut self, n_choices: usize, start: usize) -> (Vec<usize>, f64) {
        if n_choices == 0 {
            let n = self.path.len();
            return (Vec::new(), self.segment_cost(start, n));
        }
        let (choice, cost) = self.next_choice(n_choices, start);
        let (mut choices, _) = self.best_choices_with_cache(n_choices - 1, choice);
        choices.push(choice);
        (choices, cost)
    }

    /// Optimal choices for the whole path in ascending order, and their cost.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self), fields(n = self.path.len()))
    )]
    pub fn solve(&mut self) -> (Vec<usize>, f64) {
        let n_choices = self.cache.n_choices();
        let (mut choices, cost) = self.best_choices_with_cache(n_choices, 0);
        choices.reverse();
        #[cfg(feature = "tracing")]
        tracing::debug!(?choices, cost, stats = ?self.cache.stats(), "selection complete");
        (choices, cost)
    }

    /// Cost of the partition of the path induced by `choices`:
    /// `cost(0, c1) + cost(c1, c2) + ... + cost(cM, N)`.
    ///
    /// Accumulated from the right, the same way the DP builds its totals, so
    /// the cost of the DP's own choices reproduces its reported cost exactly.
    ///
    /// # Panics
    /// Panics if `choices` is not non-decreasing or an entry is `>= N`.
    pub fn partition_cost(&mut self, choices: &[usize]) -> f64 {
        let n = self.path.len();
        let mut bounds = Vec::with_capacity(choices.len() + 2);
        bounds.push(0);
        bounds.extend_from_slice(choices);
        bounds.push(n);
        assert!(
            crate::utils::is_monotone_chain(choices, n),
            "choices {choices:?} must be non-decreasing and below {n}"
        );
        let mut acc = 0.0;
        for w in bounds.windows(2).rev() {
            acc = self.segment_cost(w[0], w[1]) + acc;
        }
        acc
    }
}

pub(crate) fn check_budget(n_choices: usize, path_len: usize) -> Result<(), SelectionError> {
    if n_choices > path_len {
        return Err(SelectionError::BudgetExceedsPath {
            n_choices,
            path_len,
        });
    }
    Ok(())
}

/// Choose `n_choices` break-points on `path` minimizing the total segment
/// cost. Returns the choices in ascending order (duplicates possible, length
/// exactly `n_choices`) and the achieved cost.
///
/// ```
/// use choice_dp::{best_choices, Path};
///
/// let path = Path::from_values(&[0.0, 1.0, 2.0, 3.0]).unwrap();
/// assert_eq!(best_choices(1, &path), (vec![1], 2.0));
/// ```
///
/// # Panics
/// Panics if `n_choices > path.len()`; see [`try_best_choices`] for the
/// fallible form.
pub fn best_choices(n_choices: usize, path: &Path) -> (Vec<usize>, f64) {
    Selector::new(path, n_choices).solve()
}

/// Fallible form of [`best_choices`].
pub fn try_best_choices(n_choices: usize, path: &Path) -> Result<(Vec<usize>, f64), SelectionError> {
    check_budget(n_choices, path.len())?;
    Ok(best_choices(n_choices, path))
}
