//! The seven instrumented sorts.
//!
//! Each one sorts ascending by `value`, in place, on the slice it is handed.
//! They trade speed for observability: every comparison and every
//! relocation is counted and followed by a checkpoint, so the progress
//! callback sees intermediate states.

use crate::error::Error;
use crate::instrument::SortContext;
use crate::item::{Item, BUCKET_COUNT};
use crate::{SortFuture, Sorter};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

/// Identifies one of the seven algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlgorithmId {
    Insertion,
    Merge,
    Quick,
    Heap,
    Counting,
    Radix,
    Bucket,
}

impl AlgorithmId {
    pub const ALL: [AlgorithmId; 7] = [
        AlgorithmId::Insertion,
        AlgorithmId::Merge,
        AlgorithmId::Quick,
        AlgorithmId::Heap,
        AlgorithmId::Counting,
        AlgorithmId::Radix,
        AlgorithmId::Bucket,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AlgorithmId::Insertion => "insertion",
            AlgorithmId::Merge => "merge",
            AlgorithmId::Quick => "quick",
            AlgorithmId::Heap => "heap",
            AlgorithmId::Counting => "counting",
            AlgorithmId::Radix => "radix",
            AlgorithmId::Bucket => "bucket",
        }
    }

    /// Human readable name used in legends.
    pub fn display_name(self) -> &'static str {
        match self {
            AlgorithmId::Insertion => "Insertion Sort",
            AlgorithmId::Merge => "Merge Sort",
            AlgorithmId::Quick => "Quick Sort",
            AlgorithmId::Heap => "Heap Sort",
            AlgorithmId::Counting => "Counting Sort",
            AlgorithmId::Radix => "Radix Sort",
            AlgorithmId::Bucket => "Bucket Sort",
        }
    }

    pub fn sorter(self) -> &'static dyn Sorter {
        match self {
            AlgorithmId::Insertion => &InsertionSort,
            AlgorithmId::Merge => &MergeSort,
            AlgorithmId::Quick => &QuickSort,
            AlgorithmId::Heap => &HeapSort,
            AlgorithmId::Counting => &CountingSort,
            AlgorithmId::Radix => &RadixSort,
            AlgorithmId::Bucket => &BucketSort,
        }
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlgorithmId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        AlgorithmId::ALL
            .into_iter()
            .find(|id| id.as_str() == name)
            .ok_or_else(|| Error::UnknownAlgorithm(s.to_string()))
    }
}

/// Shift-based insertion sort
pub struct InsertionSort;

impl Sorter for InsertionSort {
    fn sort<'a>(&self, items: &'a mut [Item], ctx: &'a mut SortContext) -> SortFuture<'a> {
        Box::pin(async move {
            let len = items.len();
            insertion_pass(items, 0..len, ctx).await;
        })
    }
}

/// Insertion sort over `range` of the full array.
///
/// Only probes that lead to a shift are counted, so an already ordered range
/// costs nothing.
async fn insertion_pass(items: &mut [Item], range: Range<usize>, ctx: &mut SortContext) {
    for i in range.start + 1..range.end {
        let key = items[i];
        let mut j = i;
        while j > range.start && items[j - 1].value > key.value {
            ctx.compare();
            items[j] = items[j - 1];
            ctx.relocate();
            j -= 1;
            ctx.checkpoint(items).await;
        }
        items[j] = key;
    }
}

/// Top-down merge sort, stable
pub struct MergeSort;

impl Sorter for MergeSort {
    fn sort<'a>(&self, items: &'a mut [Item], ctx: &'a mut SortContext) -> SortFuture<'a> {
        Box::pin(async move {
            if let Some(last) = items.len().checked_sub(1) {
                merge_sort(items, 0, last, ctx).await;
            }
        })
    }
}

fn merge_sort<'a>(
    items: &'a mut [Item],
    left: usize,
    right: usize,
    ctx: &'a mut SortContext,
) -> SortFuture<'a> {
    Box::pin(async move {
        if left < right {
            let mid = (left + right) / 2;
            merge_sort(items, left, mid, ctx).await;
            merge_sort(items, mid + 1, right, ctx).await;
            merge(items, left, mid, right, ctx).await;
        }
    })
}

async fn merge(items: &mut [Item], left: usize, mid: usize, right: usize, ctx: &mut SortContext) {
    let left_run = items[left..=mid].to_vec();
    let right_run = items[mid + 1..=right].to_vec();
    let (mut i, mut j, mut k) = (0, 0, left);

    while i < left_run.len() && j < right_run.len() {
        ctx.compare();
        if left_run[i].value <= right_run[j].value {
            items[k] = left_run[i];
            i += 1;
        } else {
            items[k] = right_run[j];
            j += 1;
        }
        k += 1;
        ctx.relocate();
        ctx.checkpoint(items).await;
    }

    // Leftovers need no comparison but still move
    for &item in left_run[i..].iter().chain(&right_run[j..]) {
        items[k] = item;
        k += 1;
        ctx.relocate();
        ctx.checkpoint(items).await;
    }
}

/// Quicksort with Lomuto partitioning around the last element.
///
/// Ranges are kept on an explicit stack in the same order plain recursion
/// would visit them; runs of equal values make the recursion as deep as the
/// input is long.
pub struct QuickSort;

impl Sorter for QuickSort {
    fn sort<'a>(&self, items: &'a mut [Item], ctx: &'a mut SortContext) -> SortFuture<'a> {
        Box::pin(async move {
            let mut pending = Vec::new();
            if let Some(last) = items.len().checked_sub(1) {
                pending.push((0, last));
            }
            while let Some((low, high)) = pending.pop() {
                if low >= high {
                    continue;
                }
                let pi = partition(items, low, high, ctx).await;
                pending.push((pi + 1, high));
                if pi > low {
                    pending.push((low, pi - 1));
                }
            }
        })
    }
}

async fn partition(items: &mut [Item], low: usize, high: usize, ctx: &mut SortContext) -> usize {
    let pivot = items[high].value;
    let mut store = low;

    for j in low..high {
        ctx.compare();
        if items[j].value < pivot {
            items.swap(store, j);
            ctx.relocate();
            store += 1;
        }
        ctx.checkpoint(items).await;
    }

    items.swap(store, high);
    ctx.relocate();
    ctx.checkpoint(items).await;
    store
}

/// Heap sort on a max-heap
pub struct HeapSort;

impl Sorter for HeapSort {
    fn sort<'a>(&self, items: &'a mut [Item], ctx: &'a mut SortContext) -> SortFuture<'a> {
        Box::pin(async move {
            let n = items.len();
            if n <= 1 {
                return;
            }

            // Build max heap
            for i in (0..n / 2).rev() {
                sift_down(items, n, i, ctx).await;
            }

            // Move the max behind the shrinking heap
            for end in (1..n).rev() {
                items.swap(0, end);
                ctx.relocate();
                ctx.checkpoint(items).await;
                sift_down(items, end, 0, ctx).await;
            }
        })
    }
}

async fn sift_down(items: &mut [Item], heap_len: usize, mut root: usize, ctx: &mut SortContext) {
    loop {
        let mut largest = root;
        let left = 2 * root + 1;
        let right = left + 1;

        for child in [left, right] {
            if child < heap_len {
                ctx.compare();
                if items[child].value > items[largest].value {
                    largest = child;
                }
                ctx.checkpoint(items).await;
            }
        }

        if largest == root {
            return;
        }
        items.swap(root, largest);
        ctx.relocate();
        ctx.checkpoint(items).await;
        root = largest;
    }
}

/// Counting sort over the fixed bucket domain
pub struct CountingSort;

impl Sorter for CountingSort {
    fn sort<'a>(&self, items: &'a mut [Item], ctx: &'a mut SortContext) -> SortFuture<'a> {
        Box::pin(distribute(items, SortKey::Value, ctx))
    }
}

/// What a counting pass distributes on.
#[derive(Clone, Copy, Debug)]
enum SortKey {
    Value,
    /// Decimal digit at position `exp` (1, 10, 100, ...)
    Digit { exp: u32 },
}

impl SortKey {
    fn buckets(self) -> usize {
        match self {
            SortKey::Value => BUCKET_COUNT,
            SortKey::Digit { .. } => RADIX as usize,
        }
    }

    #[inline]
    fn of(self, item: &Item) -> usize {
        match self {
            SortKey::Value => item.value as usize,
            SortKey::Digit { exp } => ((u32::from(item.value) / exp) % RADIX) as usize,
        }
    }
}

/// One stable counting pass.
///
/// Reading a key counts as a comparison; the backward scatter into the
/// scratch buffer and the copy back each count one relocation per item.
async fn distribute(items: &mut [Item], key: SortKey, ctx: &mut SortContext) {
    let buckets = key.buckets();
    let mut counts = vec![0usize; buckets];
    for idx in 0..items.len() {
        ctx.compare();
        counts[key.of(&items[idx])] += 1;
        ctx.checkpoint(items).await;
    }

    for b in 1..buckets {
        counts[b] += counts[b - 1];
    }

    let mut output = items.to_vec();
    for idx in (0..items.len()).rev() {
        let item = items[idx];
        let slot = &mut counts[key.of(&item)];
        *slot -= 1;
        output[*slot] = item;
        ctx.relocate();
        ctx.checkpoint(items).await;
    }

    for (idx, item) in output.into_iter().enumerate() {
        items[idx] = item;
        ctx.relocate();
        ctx.checkpoint(items).await;
    }
}

/// LSD radix sort, base 10
pub struct RadixSort;

const RADIX: u32 = 10;

impl Sorter for RadixSort {
    fn sort<'a>(&self, items: &'a mut [Item], ctx: &'a mut SortContext) -> SortFuture<'a> {
        Box::pin(async move {
            let Some(first) = items.first() else {
                return;
            };

            let mut max = first.value;
            for idx in 1..items.len() {
                ctx.compare();
                max = max.max(items[idx].value);
                ctx.checkpoint(items).await;
            }

            // One pass per decimal digit of the largest value
            let max = u32::from(max);
            let mut exp = 1;
            while max / exp > 0 {
                distribute(items, SortKey::Digit { exp }, ctx).await;
                exp *= RADIX;
            }
        })
    }
}

/// Bucket sort with one bucket per value
pub struct BucketSort;

impl Sorter for BucketSort {
    fn sort<'a>(&self, items: &'a mut [Item], ctx: &'a mut SortContext) -> SortFuture<'a> {
        Box::pin(async move {
            let mut buckets: [Vec<Item>; BUCKET_COUNT] = Default::default();
            for idx in 0..items.len() {
                ctx.compare();
                let item = items[idx];
                buckets[item.value as usize].push(item);
                ctx.checkpoint(items).await;
            }

            // Lay the buckets back out in value order
            let mut bounds = [0usize; BUCKET_COUNT + 1];
            for (b, bucket) in buckets.iter().enumerate() {
                let start = bounds[b];
                items[start..start + bucket.len()].copy_from_slice(bucket);
                bounds[b + 1] = start + bucket.len();
            }

            for b in 0..BUCKET_COUNT {
                insertion_pass(items, bounds[b]..bounds[b + 1], ctx).await;
            }
        })
    }
}
