//! Ordering and bookkeeping properties that hold for every algorithm.

use proptest::prelude::*;
use sort_visualizer::theme::SPRING;
use sort_visualizer::{count_sorted_prefix, AlgorithmId, Item, Runner, SortedRun};
use std::collections::HashMap;

fn dataset(values: &[u8]) -> Vec<Item> {
    values.iter().map(|&v| Item::of(&SPRING, v)).collect()
}

fn sort_with(id: AlgorithmId, items: &[Item]) -> SortedRun {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
        .block_on(Runner::default().run_sorted(id, items, None))
}

fn multiset(items: &[Item]) -> HashMap<Item, usize> {
    let mut counts = HashMap::new();
    for item in items {
        *counts.entry(*item).or_insert(0) += 1;
    }
    counts
}

proptest! {
    #[test]
    fn sorted_permutation(values in prop::collection::vec(0u8..4, 0..300)) {
        let items = dataset(&values);
        for id in AlgorithmId::ALL {
            let run = sort_with(id, &items);
            prop_assert!(run.items.windows(2).all(|w| w[0].value <= w[1].value), "{}", id);
            prop_assert_eq!(multiset(&run.items), multiset(&items));

            let metrics = &run.result.metrics;
            prop_assert!(!metrics.data_points.is_empty());
            prop_assert_eq!(
                metrics.data_points.last().map(|p| p.operations),
                Some(metrics.comparisons + metrics.swaps)
            );
            for w in metrics.data_points.windows(2) {
                prop_assert!(w[0].time <= w[1].time);
                prop_assert!(w[0].operations <= w[1].operations);
            }
        }
    }

    #[test]
    fn counting_and_radix_agree(values in prop::collection::vec(0u8..4, 0..300)) {
        let items = dataset(&values);
        let counting = sort_with(AlgorithmId::Counting, &items);
        let radix = sort_with(AlgorithmId::Radix, &items);
        prop_assert_eq!(counting.items, radix.items);
    }

    #[test]
    fn prefix_never_exceeds_tally(values in prop::collection::vec(0u8..4, 0..200)) {
        let items = dataset(&values);
        let prefix = count_sorted_prefix(&items);
        let sorted = sort_with(AlgorithmId::Merge, &items).items;
        let full = count_sorted_prefix(&sorted);
        for b in 0..4 {
            prop_assert!(prefix[b] <= full[b]);
        }
        prop_assert_eq!(full.iter().sum::<usize>(), items.len());
    }
}
