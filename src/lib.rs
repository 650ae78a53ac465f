//! Binary Min-Heap and Sorting Algorithms
//!
//! An array-backed binary min-heap, an in-place heap sort built on the same
//! sift-down traversal, and a set of classic sorting routines that can be
//! benchmarked against each other.

pub mod algorithm;
pub mod baselines;
pub mod config;
pub mod error;
pub mod heap;
pub mod heap_sort;
pub mod integer;
pub mod iterative;
pub mod logging;
pub mod recursive;

pub use algorithm::Algorithm;
pub use error::{LabError, Result};
pub use heap::BinaryMinHeap;
pub use heap_sort::heap_sort;

/// Trait for sorting implementations
pub trait Sorter {
    /// Sort the slice in-place in ascending order
    fn sort(&self, data: &mut [i64]);

    /// Name used on the command line and in benchmark output
    fn name(&self) -> &'static str;

    /// Whether the algorithm is O(n²) on typical input
    fn is_quadratic(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iterative::is_sorted;
    use rand::{Rng, SeedableRng};
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn test_sorter(sorter: &dyn Sorter) {
        let name = sorter.name();

        // Empty
        let mut empty: Vec<i64> = vec![];
        sorter.sort(&mut empty);
        assert!(empty.is_empty(), "{name}");

        // Single element
        let mut single = vec![42i64];
        sorter.sort(&mut single);
        assert_eq!(single, vec![42], "{name}");

        // Two elements
        let mut two = vec![5i64, 3];
        sorter.sort(&mut two);
        assert_eq!(two, vec![3, 5], "{name}");

        // Already sorted
        let mut sorted: Vec<i64> = (0..100).collect();
        sorter.sort(&mut sorted);
        assert!(is_sorted(&sorted), "{name}");

        // Reverse sorted
        let mut reverse: Vec<i64> = (0..1000).rev().collect();
        sorter.sort(&mut reverse);
        assert_eq!(reverse, (0..1000).collect::<Vec<_>>(), "{name}");

        // All same
        let mut same = vec![7i64; 100];
        sorter.sort(&mut same);
        assert_eq!(same, vec![7; 100], "{name}");

        // Duplicates with negatives
        let mut dups = vec![5i64, 5, 4, 4, 3, 3, 2, 2, -1];
        sorter.sort(&mut dups);
        assert_eq!(dups, vec![-1, 2, 2, 3, 3, 4, 4, 5, 5], "{name}");

        // Random, narrow and wide ranges
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(12345);
        for hi in [10i64, 1_000, 1_000_000] {
            let mut random: Vec<i64> = (0..1000).map(|_| rng.gen_range(-hi..=hi)).collect();
            let mut expected = random.clone();
            expected.sort();
            sorter.sort(&mut random);
            assert_eq!(random, expected, "{name} (range ±{hi})");
        }
    }

    #[test]
    fn test_every_registered_sorter() {
        for algorithm in Algorithm::ALL {
            test_sorter(algorithm.sorter());
        }
    }

    #[test]
    fn test_heap_sort_scenario() {
        let mut data = vec![5, 3, 8, 1, 9, 2];
        baselines::HeapSort.sort(&mut data);
        assert_eq!(data, vec![1, 2, 3, 5, 8, 9]);
    }

    #[test]
    fn test_min_heap_sorter_matches_heap_sort() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(2024);
        let data: Vec<i64> = (0..500).map(|_| rng.gen()).collect();

        let mut a = data.clone();
        let mut b = data;
        baselines::HeapSort.sort(&mut a);
        baselines::MinHeapSort.sort(&mut b);
        assert_eq!(a, b);
    }
}
