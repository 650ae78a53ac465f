//! Divide-and-conquer comparison sorts.

use crate::iterative::insertion_sort;

/// Merge two sorted slices into a new sorted `Vec`. On ties the item from
/// `left` comes first.
pub fn merge<T: PartialOrd + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        if right[j] < left[i] {
            out.push(right[j].clone());
            j += 1;
        } else {
            out.push(left[i].clone());
            i += 1;
        }
    }
    out.extend_from_slice(&left[i..]);
    out.extend_from_slice(&right[j..]);
    out
}

/// Insertion-sort each half, then merge them. Still O(n²), but on half-size
/// inputs.
pub fn split_sort_merge<T: PartialOrd + Clone>(items: &mut [T]) {
    let mid = items.len() / 2;
    let mut left = items[..mid].to_vec();
    let mut right = items[mid..].to_vec();
    insertion_sort(&mut left);
    insertion_sort(&mut right);
    items.clone_from_slice(&merge(&left, &right));
}

/// Top-down merge sort. O(n log n) time, O(n) auxiliary space per level.
pub fn merge_sort<T: PartialOrd + Clone>(items: &mut [T]) {
    if items.len() < 2 {
        return;
    }

    let mid = items.len() / 2;
    {
        let (left, right) = items.split_at_mut(mid);
        merge_sort(left);
        merge_sort(right);
    }
    let merged = merge(&items[..mid], &items[mid..]);
    items.clone_from_slice(&merged);
}

/// Partition `items[low..=high]` around the pivot `items[low]`.
///
/// Returns the pivot's final index `p`: everything in `low..p` is `<=` the
/// pivot and everything in `p + 1..=high` is `>` it.
///
/// # Panics
/// If `low > high` or `high >= items.len()`.
pub fn partition<T: PartialOrd>(items: &mut [T], low: usize, high: usize) -> usize {
    assert!(low <= high && high < items.len(), "invalid range {}..={}", low, high);

    let mut i = low + 1;
    let mut j = high;
    loop {
        while i <= high && items[i] <= items[low] {
            i += 1;
        }
        while j > low && items[j] > items[low] {
            j -= 1;
        }
        if j < i {
            break;
        }
        items.swap(i, j);
    }
    items.swap(low, j);
    j
}

/// In-place quicksort with a first-item pivot.
///
/// Recurses into the smaller side and loops on the larger, so stack depth
/// stays O(log n) even when partitions are lopsided.
pub fn quick_sort<T: PartialOrd>(mut items: &mut [T]) {
    while items.len() > 1 {
        let high = items.len() - 1;
        let p = partition(items, 0, high);
        let (left, rest) = std::mem::take(&mut items).split_at_mut(p);
        let right = &mut rest[1..];
        if left.len() < right.len() {
            quick_sort(left);
            items = right;
        } else {
            quick_sort(right);
            items = left;
        }
    }
}
