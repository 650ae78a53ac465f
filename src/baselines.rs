use std::num::NonZeroUsize;

use log::warn;

use crate::heap::BinaryMinHeap;
use crate::{heap_sort, integer, iterative, recursive, Sorter};

/// Standard library stable sort
pub struct StdSort;

impl Sorter for StdSort {
    #[inline]
    fn sort(&self, data: &mut [i64]) {
        data.sort();
    }

    fn name(&self) -> &'static str {
        "std_sort"
    }
}

/// Standard library unstable sort (faster, no stability guarantee)
pub struct StdUnstable;

impl Sorter for StdUnstable {
    #[inline]
    fn sort(&self, data: &mut [i64]) {
        data.sort_unstable();
    }

    fn name(&self) -> &'static str {
        "std_unstable"
    }
}

/// Heap sort - O(n log n) worst case, in-place
pub struct HeapSort;

impl Sorter for HeapSort {
    fn sort(&self, data: &mut [i64]) {
        heap_sort::heap_sort(data);
    }

    fn name(&self) -> &'static str {
        "heap_sort"
    }
}

/// Insert everything into a [`BinaryMinHeap`], then extract until empty.
/// O(n log n), O(n) extra space.
pub struct MinHeapSort;

impl Sorter for MinHeapSort {
    fn sort(&self, data: &mut [i64]) {
        let heap: BinaryMinHeap<i64> = data.iter().copied().collect();
        data.copy_from_slice(&heap.into_sorted_vec());
    }

    fn name(&self) -> &'static str {
        "min_heap_sort"
    }
}

/// Classic O(n²) bubble sort with early exit on a swap-free pass
pub struct BubbleSort;

impl Sorter for BubbleSort {
    fn sort(&self, data: &mut [i64]) {
        iterative::bubble_sort(data);
    }

    fn name(&self) -> &'static str {
        "bubble_sort"
    }

    fn is_quadratic(&self) -> bool {
        true
    }
}

/// Selection sort - Θ(n²) comparisons on any input
pub struct SelectionSort;

impl Sorter for SelectionSort {
    fn sort(&self, data: &mut [i64]) {
        iterative::selection_sort(data);
    }

    fn name(&self) -> &'static str {
        "selection_sort"
    }

    fn is_quadratic(&self) -> bool {
        true
    }
}

/// Insertion sort - O(n²), O(n) on nearly sorted input
pub struct InsertionSort;

impl Sorter for InsertionSort {
    fn sort(&self, data: &mut [i64]) {
        iterative::insertion_sort(data);
    }

    fn name(&self) -> &'static str {
        "insertion_sort"
    }

    fn is_quadratic(&self) -> bool {
        true
    }
}

/// Iterative merge sort over doubling run widths
pub struct BottomUpMergeSort;

impl Sorter for BottomUpMergeSort {
    fn sort(&self, data: &mut [i64]) {
        iterative::bottom_up_merge_sort(data);
    }

    fn name(&self) -> &'static str {
        "bottom_up_merge_sort"
    }
}

/// Insertion sort on each half, then one merge
pub struct SplitSortMerge;

impl Sorter for SplitSortMerge {
    fn sort(&self, data: &mut [i64]) {
        recursive::split_sort_merge(data);
    }

    fn name(&self) -> &'static str {
        "split_sort_merge"
    }

    fn is_quadratic(&self) -> bool {
        true
    }
}

/// Top-down merge sort - O(n log n), stable
pub struct MergeSort;

impl Sorter for MergeSort {
    fn sort(&self, data: &mut [i64]) {
        recursive::merge_sort(data);
    }

    fn name(&self) -> &'static str {
        "merge_sort"
    }
}

/// First-item pivot quicksort
pub struct QuickSort;

impl Sorter for QuickSort {
    fn sort(&self, data: &mut [i64]) {
        recursive::quick_sort(data);
    }

    fn name(&self) -> &'static str {
        "quick_sort"
    }
}

/// Counting sort - O(n + k) for a value span of k, heap sort when k is too wide
pub struct CountingSort;

impl Sorter for CountingSort {
    fn sort(&self, data: &mut [i64]) {
        if let Err(e) = integer::counting_sort(data) {
            warn!("{}; falling back to heap sort", e);
            heap_sort::heap_sort(data);
        }
    }

    fn name(&self) -> &'static str {
        "counting_sort"
    }
}

pub const DEFAULT_BUCKETS: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(n) => n,
    None => panic!("bucket count must be non-zero"),
};

/// Bucket sort over equal-width value ranges, insertion sort per bucket
pub struct BucketSort {
    buckets: NonZeroUsize,
}

impl BucketSort {
    pub const fn new(buckets: NonZeroUsize) -> Self {
        Self { buckets }
    }
}

impl Default for BucketSort {
    fn default() -> Self {
        Self::new(DEFAULT_BUCKETS)
    }
}

impl Sorter for BucketSort {
    fn sort(&self, data: &mut [i64]) {
        integer::bucket_sort(data, self.buckets);
    }

    fn name(&self) -> &'static str {
        "bucket_sort"
    }
}
