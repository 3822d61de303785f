use eytzinger_search::{
    eytzinger, is_eytzinger, logical_index, physical_index, search, search_with, Eytzinger,
};
use proptest::prelude::*;

mod common;
use common::{count_less, sorted_with_duplicates, sorted_words};

proptest! {
    #[test]
    fn transform_output_is_valid_layout(sorted in sorted_with_duplicates(300)) {
        let layout = eytzinger(&sorted);
        prop_assert_eq!(layout.len(), sorted.len());
        prop_assert!(is_eytzinger(&layout), "layout invariant broken");
    }

    #[test]
    fn every_element_is_found_at_an_equal_position(sorted in sorted_with_duplicates(300)) {
        let layout = eytzinger(&sorted);
        for value in &sorted {
            let (position, found) = search(&layout, value);
            prop_assert!(found, "{} not found", value);
            prop_assert_eq!(sorted[position], *value);
        }
    }

    #[test]
    fn absent_targets_report_strictly_less_count(
        sorted in sorted_with_duplicates(300),
        target in -60i32..60,
    ) {
        // Even values, odd target: never present.
        let evens: Vec<i32> = sorted.iter().map(|v| v * 2).collect();
        let target = target * 2 + 1;
        let layout = eytzinger(&evens);
        prop_assert_eq!(search(&layout, &target), (count_less(&evens, &target), false));
    }

    #[test]
    fn found_position_bounds_the_strictly_less_count(
        sorted in sorted_with_duplicates(300),
        target in -60i32..60,
    ) {
        let layout = eytzinger(&sorted);
        let (position, found) = search(&layout, &target);
        let below = count_less(&sorted, &target);
        let through = below + sorted.iter().filter(|v| **v == target).count();
        if found {
            prop_assert!(position >= below && position < through);
        } else {
            prop_assert_eq!(position, below);
        }
    }

    #[test]
    fn comparator_search_agrees_on_words(
        sorted in sorted_words(120),
        target in "[a-d]{0,3}",
    ) {
        let layout = eytzinger(&sorted);
        let by_cmp = search_with(&layout, target.as_str(), |probe, t| probe.as_str().cmp(t));
        prop_assert_eq!(by_cmp, search(&layout, &target));
        if !by_cmp.1 {
            prop_assert_eq!(by_cmp.0, count_less(&sorted, &target));
        }
    }

    #[test]
    fn sorted_iteration_inverts_transform(sorted in sorted_with_duplicates(300)) {
        let tree = Eytzinger::from_sorted(&sorted);
        prop_assert_eq!(tree.to_sorted(), sorted.clone());
        for (i, value) in sorted.iter().enumerate() {
            prop_assert_eq!(tree.get(i), Some(value));
        }
    }

    #[test]
    fn index_mappings_are_inverse(
        (n, k) in (1usize..5000).prop_flat_map(|n| (Just(n), 0..n)),
    ) {
        let logical = logical_index(n, k);
        prop_assert!(logical < n);
        prop_assert_eq!(physical_index(n, logical), Some(k));
    }
}

#[test]
fn empty_input_round_trips() {
    let empty: Vec<i32> = Vec::new();
    let layout = eytzinger(&empty);
    assert!(layout.is_empty());
    assert!(is_eytzinger(&layout));
    assert_eq!(search(&layout, &1), (0, false));
}

#[test]
fn plain_sorted_prefix_is_rejected() {
    for n in 2..64 {
        let sorted: Vec<i32> = (0..n).collect();
        assert!(!is_eytzinger(&sorted), "n={n}");
    }
}
