//! Assorted utilities and helpers.

/// Euclidean distance between two points of equal dimension.
///
/// Folds the coordinate differences with `hypot`, so the result stays finite
/// whenever every difference is.
#[inline]
pub fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).fold(0.0, |acc: f64, (x, y)| acc.hypot(x - y))
}

/// De-duplicated view of a non-decreasing choice list.
///
/// The DP may pick the same index more than once (zero-length segments are
/// admissible); callers that only care about the distinct anchors use this.
pub fn distinct_anchors(choices: &[usize]) -> Vec<usize> {
    let mut anchors = choices.to_vec();
    anchors.dedup();
    anchors
}

/// True if `choices` is non-decreasing and every entry lies in `[0, len)`.
pub fn is_monotone_chain(choices: &[usize], len: usize) -> bool {
    choices.windows(2).all(|w| w[0] <= w[1]) && choices.iter().all(|&c| c < len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclidean_matches_pythagoras() {
        assert_eq!(euclidean(&[0.0, 0.0], &[3.0, 4.0]), 5.0);
        assert_eq!(euclidean(&[2.0], &[-1.0]), 3.0);
        assert_eq!(euclidean(&[1.5, 1.5, 1.5], &[1.5, 1.5, 1.5]), 0.0);
    }

    #[test]
    fn euclidean_does_not_overflow_on_large_coordinates() {
        assert_eq!(euclidean(&[0.0], &[1e200]), 1e200);
        let d = euclidean(&[0.0, 0.0], &[3e300, 4e300]);
        assert!(d.is_finite());
        assert!((d - 5e300).abs() <= 5e300 * f64::EPSILON);
    }

    #[test]
    fn anchors_drop_repeats_only() {
        assert_eq!(distinct_anchors(&[0, 0, 2, 2, 3]), vec![0, 2, 3]);
        assert_eq!(distinct_anchors(&[]), Vec::<usize>::new());
        assert_eq!(distinct_anchors(&[4]), vec![4]);
    }

    #[test]
    fn monotone_chain_checks_order_and_range() {
        assert!(is_monotone_chain(&[], 1));
        assert!(is_monotone_chain(&[0, 0, 1, 3], 4));
        assert!(!is_monotone_chain(&[1, 0], 4));
        assert!(!is_monotone_chain(&[0, 4], 4));
    }
}
