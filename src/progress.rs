//! Sorted-prefix progress sampling.

use crate::item::{BucketCounts, Item, BUCKET_COUNT};
use std::sync::Arc;

/// Receives fresh bucket counts while a sort is running.
pub type ProgressFn = Arc<dyn Fn(BucketCounts) + Send + Sync>;

/// Count, per bucket value, the leading items already in their final place.
///
/// The counted prefix is the leading non-decreasing run, cut short at the
/// first item that is larger than something after the run. Nothing past the
/// first inversion is ever counted, so the result only reaches the full tally
/// once the whole array is sorted.
pub fn count_sorted_prefix(items: &[Item]) -> BucketCounts {
    let mut counts = [0; BUCKET_COUNT];

    let run = items
        .windows(2)
        .position(|w| w[1].value < w[0].value)
        .map_or(items.len(), |i| i + 1);
    let rest_min = items[run..].iter().map(|item| item.value).min();

    for item in &items[..run] {
        if rest_min.is_some_and(|min| item.value > min) {
            break;
        }
        counts[item.value as usize] += 1;
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::tally;
    use crate::theme::GARDEN;

    fn items(values: &[u8]) -> Vec<Item> {
        values.iter().map(|&v| Item::of(&GARDEN, v)).collect()
    }

    #[test]
    fn test_sorted_array_counts_everything() {
        let values: Vec<u8> = (0..4u8).flat_map(|v| std::iter::repeat(v).take(125)).collect();
        assert_eq!(count_sorted_prefix(&items(&values)), [125, 125, 125, 125]);
    }

    #[test]
    fn test_uneven_sorted_split() {
        let data = items(&[0, 0, 1, 3, 3, 3]);
        assert_eq!(count_sorted_prefix(&data), tally(&data));
        assert_eq!(count_sorted_prefix(&data), [2, 1, 0, 3]);
    }

    #[test]
    fn test_stops_at_first_inversion() {
        assert_eq!(count_sorted_prefix(&items(&[0, 2, 1])), [1, 0, 0, 0]);
        assert_eq!(count_sorted_prefix(&items(&[0, 0, 1, 3, 2, 3])), [2, 1, 0, 0]);
    }

    #[test]
    fn test_ignores_sorted_tail_after_inversion() {
        assert_eq!(count_sorted_prefix(&items(&[1, 0, 0, 1, 2, 3])), [0; BUCKET_COUNT]);
        assert_eq!(count_sorted_prefix(&items(&[3, 0])), [0; BUCKET_COUNT]);
    }

    #[test]
    fn test_ties_with_the_tail_still_count() {
        assert_eq!(count_sorted_prefix(&items(&[0, 1, 1, 0])), [1, 0, 0, 0]);
    }

    #[test]
    fn test_empty() {
        assert_eq!(count_sorted_prefix(&[]), [0; BUCKET_COUNT]);
    }
}
