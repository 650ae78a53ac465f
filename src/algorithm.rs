//! Name-to-sorter mapping used by the binaries.
//!
//! Every selectable algorithm is a variant here, so lookup by name is a plain
//! match rather than a search over whatever happens to be in scope.

use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use clap::ValueEnum;
use serde::Serialize;

use crate::baselines::{
    BottomUpMergeSort, BubbleSort, BucketSort, CountingSort, HeapSort, InsertionSort, MergeSort,
    MinHeapSort, QuickSort, SelectionSort, SplitSortMerge, StdSort, StdUnstable, DEFAULT_BUCKETS,
};
use crate::error::LabError;
use crate::Sorter;

static BUCKET_SORT: BucketSort = BucketSort::new(DEFAULT_BUCKETS);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum, Serialize)]
#[value(rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    HeapSort,
    MinHeapSort,
    BubbleSort,
    SelectionSort,
    InsertionSort,
    BottomUpMergeSort,
    SplitSortMerge,
    MergeSort,
    QuickSort,
    CountingSort,
    BucketSort,
    StdSort,
    StdUnstable,
}

impl Algorithm {
    pub const ALL: [Algorithm; 13] = [
        Algorithm::HeapSort,
        Algorithm::MinHeapSort,
        Algorithm::BubbleSort,
        Algorithm::SelectionSort,
        Algorithm::InsertionSort,
        Algorithm::BottomUpMergeSort,
        Algorithm::SplitSortMerge,
        Algorithm::MergeSort,
        Algorithm::QuickSort,
        Algorithm::CountingSort,
        Algorithm::BucketSort,
        Algorithm::StdSort,
        Algorithm::StdUnstable,
    ];

    /// The sorter for this algorithm with default parameters.
    pub fn sorter(self) -> &'static dyn Sorter {
        match self {
            Algorithm::HeapSort => &HeapSort,
            Algorithm::MinHeapSort => &MinHeapSort,
            Algorithm::BubbleSort => &BubbleSort,
            Algorithm::SelectionSort => &SelectionSort,
            Algorithm::InsertionSort => &InsertionSort,
            Algorithm::BottomUpMergeSort => &BottomUpMergeSort,
            Algorithm::SplitSortMerge => &SplitSortMerge,
            Algorithm::MergeSort => &MergeSort,
            Algorithm::QuickSort => &QuickSort,
            Algorithm::CountingSort => &CountingSort,
            Algorithm::BucketSort => &BUCKET_SORT,
            Algorithm::StdSort => &StdSort,
            Algorithm::StdUnstable => &StdUnstable,
        }
    }

    /// Like [`Algorithm::sorter`], but bucket sort uses `buckets` buckets.
    pub fn sorter_with_buckets(self, buckets: NonZeroUsize) -> Box<dyn Sorter> {
        match self {
            Algorithm::BucketSort => Box::new(BucketSort::new(buckets)),
            other => Box::new(StaticSorter(other.sorter())),
        }
    }

    pub fn name(self) -> &'static str {
        self.sorter().name()
    }
}

/// Adapter so borrowed statics fit in a `Box<dyn Sorter>`.
struct StaticSorter(&'static dyn Sorter);

impl Sorter for StaticSorter {
    fn sort(&self, data: &mut [i64]) {
        self.0.sort(data);
    }

    fn name(&self) -> &'static str {
        self.0.name()
    }

    fn is_quadratic(&self) -> bool {
        self.0.is_quadratic()
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = LabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| LabError::UnknownAlgorithm(s.to_string()))
    }
}
