//! Segment-cost evaluator.
//!
//! The cost of the half-open segment `[a, b)` follows the recurrence
//!
//! ```text
//! cost[a, b] = ||P[a+1] - P[a]|| + cost[a+1, b]     (b - a >= 2)
//! cost[a, b] = 0                                    (b - a <= 1)
//! ```
//!
//! Trivial segments are never cached. Every other `(a, b)` is stored the
//! first time it is computed.

use crate::selector::Selector;

impl<'p> Selector<'p> {
    /// Cost of the segment `[start, stop)`.
    ///
    /// Rather than recursing `stop - start` frames deep, this walks forward
    /// to the first suffix `[k, stop)` that is either cached or trivial and
    /// then replays the recurrence back down to `start`, caching every
    /// intermediate cell. The sequence of floating-point operations is the
    /// same as the recursive form, so results are bit-identical.
    ///
    /// # Panics
    /// Panics if `start > stop` or `stop > N`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", skip(self), ret)
    )]
    pub fn segment_cost(&mut self, start: usize, stop: usize) -> f64 {
        let n = self.path.len();
        assert!(
            start <= stop && stop <= n,
            "segment [{start}, {stop}) invalid for path of length {n}"
        );
        if stop - start <= 1 {
            return 0.0;
        }
        if let Some(cost) = self.cache.load_cost(start, stop) {
            return cost;
        }

        let mut k = start + 1;
        let mut acc = loop {
            if stop - k <= 1 {
                break 0.0;
            }
            if let Some(cost) = self.cache.load_cost(k, stop) {
                break cost;
            }
            k += 1;
        };
        while k > start {
            k -= 1;
            acc = self.path.step_length(k) + acc;
            self.cache.store_cost(k, stop, acc);
        }
        acc
    }
}
