//! Choice DP: best next break-point for a suffix under a remaining budget.
//!
//! For `m` choices left starting at `s`, the optimum is
//!
//! ```text
//! costWithChoices[m, s] = min_{s <= i < N} ( cost[s, i) + f(m, i) )
//! f(1, i) = cost[i, N)
//! f(m, i) = costWithChoices[m - 1, i]
//! ```
//!
//! The scan starts at `i = s`, so a zero-length first segment is allowed and
//! the reconstructed chain is non-decreasing rather than strictly increasing.
//! Ties keep the first optimum in ascending `i`.

use crate::selector::Selector;

/// Pick the smallest-index minimum of `totals`: the first candidate is taken
/// as is, later ones replace it only when strictly smaller.
///
/// Shared by the memoized and layered solvers so both break ties the same way.
/// Returns `None` only for an empty iterator; an all-`+inf` scan yields its
/// first candidate.
#[inline]
pub(crate) fn first_minimum<I>(totals: I) -> Option<(usize, f64)>
where
    I: IntoIterator<Item = (usize, f64)>,
{
    let mut totals = totals.into_iter();
    let mut best = totals.next()?;
    for (i, total) in totals {
        if total < best.1 {
            best = (i, total);
        }
    }
    Some(best)
}

impl<'p> Selector<'p> {
    /// Best next break-point and the total cost it achieves for the suffix
    /// starting at `start` with `n_choices` choices left.
    ///
    /// # Panics
    /// Panics if `n_choices == 0`, `n_choices` exceeds the budget the cache
    /// was sized for, or `start >= N`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", skip(self), ret)
    )]
    pub fn next_choice(&mut self, n_choices: usize, start: usize) -> (usize, f64) {
        let n = self.path.len();
        assert!(n_choices > 0, "next_choice needs at least one choice left");
        assert!(
            start < n,
            "start {start} must be less than path length {n}"
        );

        if let Some(hit) = self.cache.load_next_choice(n_choices, start) {
            return hit;
        }

        let mut totals = Vec::with_capacity(n - start);
        for i in start..n {
            let before = self.segment_cost(start, i);
            let after = if n_choices == 1 {
                self.segment_cost(i, n)
            } else {
                self.next_choice(n_choices - 1, i).1
            };
            totals.push((i, before + after));
        }
        let (choice, cost) = first_minimum(totals)
            .unwrap_or_else(|| unreachable!("scan over [{start}, {n}) is never empty"));

        self.cache.store_next_choice(n_choices, start, choice, cost);
        (choice, cost)
    }
}

#[cfg(test)]
mod tests {
    use super::first_minimum;
    use crate::path::Path;
    use crate::selector::Selector;

    #[test]
    fn first_minimum_prefers_smallest_index() {
        assert_eq!(first_minimum(vec![(3, 2.0), (4, 1.0), (5, 1.0)]), Some((4, 1.0)));
        assert_eq!(first_minimum(vec![(0, 0.0), (1, 0.0)]), Some((0, 0.0)));
        assert_eq!(first_minimum(Vec::new()), None);
    }

    #[test]
    fn first_minimum_keeps_first_of_infinite_totals() {
        let inf = f64::INFINITY;
        assert_eq!(first_minimum(vec![(2, inf), (3, inf)]), Some((2, inf)));
        assert_eq!(first_minimum(vec![(0, inf), (1, 4.0), (2, 4.0)]), Some((1, 4.0)));
    }

    #[test]
    fn single_choice_on_a_line_ties_to_first() {
        let path = Path::from_values(&[0.0, 1.0, 2.0, 3.0]).unwrap();
        let mut sel = Selector::new(&path, 1);
        // totals: i=0 -> 3, i=1 -> 2, i=2 -> 2, i=3 -> 2
        assert_eq!(sel.next_choice(1, 0), (1, 2.0));
    }

    #[test]
    fn zero_length_first_segment_is_admissible() {
        let path = Path::from_values(&[0.0, 5.0, 0.0]).unwrap();
        let mut sel = Selector::new(&path, 3);
        assert_eq!(sel.next_choice(3, 0), (0, 0.0));
        assert_eq!(sel.next_choice(2, 0), (1, 0.0));
        assert_eq!(sel.next_choice(1, 0), (1, 5.0));
        assert_eq!(sel.next_choice(1, 1), (2, 0.0));
    }

    #[test]
    fn last_point_start_has_only_itself() {
        let path = Path::from_values(&[1.0, 4.0, 9.0]).unwrap();
        let mut sel = Selector::new(&path, 2);
        assert_eq!(sel.next_choice(1, 2), (2, 0.0));
        assert_eq!(sel.next_choice(2, 2), (2, 0.0));
    }

    #[test]
    fn results_are_cached_as_twins() {
        let path = Path::from_values(&[0.0, 0.0, 10.0, 0.0, 0.0]).unwrap();
        let mut sel = Selector::new(&path, 1);
        let first = sel.next_choice(1, 0);
        assert_eq!(first, (2, 10.0));
        assert_eq!(sel.cache().load_next_choice(1, 0), Some(first));
        let stats = sel.cache().stats();
        assert_eq!(sel.next_choice(1, 0), first);
        assert_eq!(sel.cache().stats(), stats);
    }

    #[test]
    #[should_panic(expected = "at least one choice")]
    fn zero_budget_is_fatal() {
        let path = Path::from_values(&[0.0, 1.0]).unwrap();
        let mut sel = Selector::new(&path, 1);
        let _ = sel.next_choice(0, 0);
    }

    #[test]
    #[should_panic(expected = "must be less than path length")]
    fn start_at_end_is_fatal() {
        let path = Path::from_values(&[0.0, 1.0]).unwrap();
        let mut sel = Selector::new(&path, 1);
        let _ = sel.next_choice(1, 2);
    }

    #[test]
    #[should_panic(expected = "outside cache")]
    fn budget_beyond_cache_is_fatal() {
        let path = Path::from_values(&[0.0, 1.0, 2.0]).unwrap();
        let mut sel = Selector::new(&path, 1);
        let _ = sel.next_choice(2, 0);
    }
}
