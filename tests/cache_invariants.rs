use choice_dp::cache::NO_CHOICE;
use choice_dp::layered::fill_cache;
use choice_dp::walks::{random_walk, seeded_rng, simple_random_walk};
use choice_dp::{ChoiceCache, Selector};

#[test]
fn resolving_reuses_every_cell() {
    let path = simple_random_walk(&mut seeded_rng(5), 12);
    let mut selector = Selector::new(&path, 4);
    let first = selector.solve();
    let after_first = selector.cache().stats();
    assert!(after_first.total() > 0);

    let second = selector.solve();
    assert_eq!(first, second);
    assert_eq!(selector.cache().stats(), after_first);
}

#[test]
fn choice_tables_stay_in_sync_after_solve() {
    let path = random_walk(&mut seeded_rng(2), 15, 2);
    let mut selector = Selector::new(&path, 5);
    let _ = selector.solve();
    let cache = selector.cache();
    for m in 1..=5 {
        for s in 0..path.len() {
            if let Some((choice, total)) = cache.load_next_choice(m, s) {
                assert_ne!(choice, NO_CHOICE);
                assert!(choice >= s && choice < path.len());
                assert!(total.is_finite() && total >= 0.0);
            }
        }
    }
}

#[test]
fn cached_totals_are_minimal_over_later_cells() {
    let path = simple_random_walk(&mut seeded_rng(9), 10);
    let cache = fill_cache(&path, 3);
    let mut selector = Selector::with_cache(&path, cache);
    for m in 1..=3 {
        for s in 0..path.len() {
            let (choice, total) = selector.next_choice(m, s);
            for i in s..path.len() {
                let after = if m == 1 {
                    selector.segment_cost(i, path.len())
                } else {
                    selector.next_choice(m - 1, i).1
                };
                let candidate = selector.segment_cost(s, i) + after;
                assert!(total <= candidate, "({m}, {s}) beaten by {i}");
                if i < choice {
                    assert!(total < candidate, "({m}, {s}) tie not kept at {i}");
                }
            }
        }
    }
}

#[test]
fn seeded_cache_answers_without_new_cells() {
    let path = simple_random_walk(&mut seeded_rng(1), 20);
    let mut selector = Selector::with_cache(&path, fill_cache(&path, 6));
    let before = selector.cache().stats();
    let _ = selector.solve();
    assert_eq!(selector.cache().stats(), before);
}

#[test]
fn fresh_cache_is_empty() {
    let cache = ChoiceCache::new(3, 8);
    assert_eq!(cache.stats().total(), 0);
    assert_eq!(cache.load_cost(0, 8), None);
    assert_eq!(cache.load_next_choice(3, 0), None);
}
