//! Sortable items and dataset generation.

use crate::theme::{ItemKind, Theme};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

/// Number of distinct bucket values; item values live in `0..BUCKET_COUNT`.
pub const BUCKET_COUNT: usize = 4;

/// Per-bucket tallies, indexed by item value.
pub type BucketCounts = [usize; BUCKET_COUNT];

/// A decorative item. Only `value` takes part in ordering.
///
/// Items borrow their text from the static theme tables, so cloning a
/// dataset copies the sequence without touching the items' contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Item {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub emoji: &'static str,
    pub label: &'static str,
    pub value: u8,
}

impl Item {
    pub fn from_kind(kind: &ItemKind) -> Self {
        debug_assert!((kind.value as usize) < BUCKET_COUNT);
        Self {
            kind: kind.key,
            emoji: kind.emoji,
            label: kind.label,
            value: kind.value,
        }
    }

    /// The item a theme uses for `value`.
    pub fn of(theme: &Theme, value: u8) -> Self {
        Self::from_kind(theme.kind(value))
    }
}

/// Draw `count` items uniformly from the theme's four kinds.
pub fn generate_items<R: Rng + ?Sized>(count: usize, theme: &Theme, rng: &mut R) -> Vec<Item> {
    (0..count)
        .map(|_| Item::from_kind(&theme.kinds[rng.gen_range(0..BUCKET_COUNT)]))
        .collect()
}

/// Return a shuffled copy, leaving the input untouched.
pub fn shuffled<R: Rng + ?Sized>(items: &[Item], rng: &mut R) -> Vec<Item> {
    let mut out = items.to_vec();
    out.shuffle(rng);
    out
}

/// Full per-value tally of a dataset.
pub fn tally(items: &[Item]) -> BucketCounts {
    let mut counts = [0; BUCKET_COUNT];
    for item in items {
        counts[item.value as usize] += 1;
    }
    counts
}
