//! Memoization store shared by the segment-cost evaluator and the choice DP.
//!
//! Three tables, all allocated up front and filled lazily:
//!
//! | table               | shape           | cell `(i, j)`                                 |
//! |---------------------|-----------------|-----------------------------------------------|
//! | `cost`              | `N x (N+1)`     | cost of segment `[i, j)`                      |
//! | `choice`            | `(M+1) x (N+1)` | best next break-point, `i` choices left at `j`|
//! | `cost_with_choices` | `(M+1) x (N+1)` | total cost achieved by that choice            |
//!
//! Absent cells hold a sentinel: `f64::NAN` in the cost tables and
//! [`NO_CHOICE`] in the index table. `choice` and `cost_with_choices` are
//! twins: a cell is present in one iff it is present in the other, and any
//! disagreement is treated as a fatal programming error.

use crate::table::Table;

/// Sentinel for an absent cell of the `choice` table.
pub const NO_CHOICE: usize = usize::MAX;

/// Number of materialized cells per table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub cost_cells: usize,
    pub choice_cells: usize,
}

impl CacheStats {
    /// Sum over both tables (`choice` and its twin count once).
    pub fn total(&self) -> usize {
        self.cost_cells + self.choice_cells
    }
}

/// Dense memoization cache for one `(M, N)` selection problem.
#[derive(Debug, Clone)]
pub struct ChoiceCache {
    n_choices: usize,
    path_len: usize,
    cost: Table<f64>,
    choice: Table<usize>,
    cost_with_choices: Table<f64>,
}

impl ChoiceCache {
    /// Allocate an empty cache for budget `n_choices` over a path of `path_len` points.
    pub fn new(n_choices: usize, path_len: usize) -> Self {
        Self {
            n_choices,
            path_len,
            cost: Table::filled(path_len, path_len + 1, f64::NAN),
            choice: Table::filled(n_choices + 1, path_len + 1, NO_CHOICE),
            cost_with_choices: Table::filled(n_choices + 1, path_len + 1, f64::NAN),
        }
    }

    /// Choice budget M the cache was sized for.
    #[inline]
    pub fn n_choices(&self) -> usize {
        self.n_choices
    }

    /// Path length N the cache was sized for.
    #[inline]
    pub fn path_len(&self) -> usize {
        self.path_len
    }

    fn check_segment(&self, start: usize, stop: usize) {
        assert!(
            start <= stop && stop <= self.path_len,
            "segment [{start}, {stop}) invalid for path of length {}",
            self.path_len
        );
    }

    fn check_choice_cell(&self, n_choices: usize, start: usize) {
        assert!(
            n_choices <= self.n_choices && start <= self.path_len,
            "choice cell ({n_choices}, {start}) outside cache sized for ({}, {})",
            self.n_choices,
            self.path_len
        );
    }

    /// Cached cost of `[start, stop)`, if present.
    ///
    /// # Panics
    /// Panics if `start > stop`, `stop > N` or `start >= N`.
    #[inline]
    pub fn load_cost(&self, start: usize, stop: usize) -> Option<f64> {
        self.check_segment(start, stop);
        let cost = self.cost.get(start, stop);
        (!cost.is_nan()).then_some(cost)
    }

    /// Cache the cost of `[start, stop)`.
    ///
    /// Storing the value already present is a no-op.
    ///
    /// # Panics
    /// Panics on an invalid segment, a NaN cost, or an attempt to overwrite
    /// a present cell with a different value.
    pub fn store_cost(&mut self, start: usize, stop: usize, cost: f64) {
        assert!(!cost.is_nan(), "cannot cache NaN cost for [{start}, {stop})");
        if let Some(existing) = self.load_cost(start, stop) {
            assert!(
                existing == cost,
                "cost cache overwrite at [{start}, {stop}): {existing} != {cost}"
            );
            return;
        }
        self.cost.set(start, stop, cost);
    }

    /// Cached `(choice, cost)` for `n_choices` remaining from `start`, if present.
    ///
    /// # Panics
    /// Panics if the cell is out of range or the twin tables disagree.
    pub fn load_next_choice(&self, n_choices: usize, start: usize) -> Option<(usize, f64)> {
        self.check_choice_cell(n_choices, start);
        let choice = self.choice.get(n_choices, start);
        let cost = self.cost_with_choices.get(n_choices, start);
        match (choice == NO_CHOICE, cost.is_nan()) {
            (true, true) => None,
            (false, false) => Some((choice, cost)),
            _ => panic!("choice caches out of sync at ({n_choices}, {start})"),
        }
    }

    /// Cache `(choice, cost)` for `n_choices` remaining from `start`.
    ///
    /// # Panics
    /// Panics if the cell is out of range, either value is a sentinel, or a
    /// present cell would change.
    pub fn store_next_choice(&mut self, n_choices: usize, start: usize, choice: usize, cost: f64) {
        assert!(
            choice != NO_CHOICE && !cost.is_nan(),
            "cannot cache sentinel at ({n_choices}, {start})"
        );
        if let Some((prev_choice, prev_cost)) = self.load_next_choice(n_choices, start) {
            assert!(
                prev_choice == choice && prev_cost == cost,
                "choice cache overwrite at ({n_choices}, {start}): \
                 ({prev_choice}, {prev_cost}) != ({choice}, {cost})"
            );
            return;
        }
        self.choice.set(n_choices, start, choice);
        self.cost_with_choices.set(n_choices, start, cost);
    }

    /// Count the materialized cells.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            cost_cells: self.cost.iter().filter(|c| !c.is_nan()).count(),
            choice_cells: self.choice.iter().filter(|&&c| c != NO_CHOICE).count(),
        }
    }

    #[cfg(test)]
    pub(crate) fn corrupt_choice_cell(&mut self, n_choices: usize, start: usize, choice: usize) {
        self.choice.set(n_choices, start, choice);
    }
}
