//! Distribution sorts for integers.

use std::num::NonZeroUsize;

use crate::error::{LabError, Result};
use crate::iterative::insertion_sort;

/// Largest number of distinct values `counting_sort` will allocate counts for.
pub const MAX_COUNTING_SPAN: usize = 1 << 22;

/// Count occurrences of every value in `[min, max]`, then rewrite the slice
/// from the counts. O(n + k) time and O(k) space for a value span of k.
///
/// Fails with [`LabError::SpanTooWide`] when `max - min + 1` exceeds
/// [`MAX_COUNTING_SPAN`]; the slice is left untouched in that case.
pub fn counting_sort(numbers: &mut [i64]) -> Result<()> {
    let Some((min, max)) = bounds(numbers) else {
        return Ok(());
    };
    if min == max {
        return Ok(());
    }

    let span = span(min, max);
    let len = usize::try_from(span)
        .ok()
        .and_then(|s| s.checked_add(1))
        .filter(|&len| len <= MAX_COUNTING_SPAN)
        .ok_or(LabError::SpanTooWide {
            span,
            limit: MAX_COUNTING_SPAN,
        })?;

    let mut counts = vec![0usize; len];
    for &n in numbers.iter() {
        counts[n.abs_diff(min) as usize] += 1;
    }

    let mut out = numbers.iter_mut();
    for (offset, &count) in counts.iter().enumerate() {
        let value = min.wrapping_add(offset as i64);
        for slot in out.by_ref().take(count) {
            *slot = value;
        }
    }
    Ok(())
}

/// Distribute into `num_buckets` equal-width subranges of `[min, max]`,
/// insertion-sort each bucket, and concatenate.
///
/// O(n + k) when values are evenly spread, O(n²) when they all land in one
/// bucket.
pub fn bucket_sort(numbers: &mut [i64], num_buckets: NonZeroUsize) {
    let Some((min, max)) = bounds(numbers) else {
        return;
    };
    let k = num_buckets.get();
    let width = span(min, max) as u128 + 1;

    let mut buckets: Vec<Vec<i64>> = vec![Vec::new(); k];
    for &n in numbers.iter() {
        let index = (n.abs_diff(min) as u128 * k as u128 / width) as usize;
        buckets[index].push(n);
    }

    let mut offset = 0;
    for bucket in &mut buckets {
        insertion_sort(bucket);
        numbers[offset..offset + bucket.len()].copy_from_slice(bucket);
        offset += bucket.len();
    }
}

fn bounds(numbers: &[i64]) -> Option<(i64, i64)> {
    let (&first, rest) = numbers.split_first()?;
    Some(rest.iter().fold((first, first), |(lo, hi), &n| (lo.min(n), hi.max(n))))
}

#[inline]
fn span(min: i64, max: i64) -> u64 {
    max.abs_diff(min)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn ten() -> NonZeroUsize {
        NonZeroUsize::new(10).unwrap()
    }

    #[test]
    fn test_counting_small() {
        let mut items = vec![5, 5, 4, 4, 3, 3, 2, 2, -1];
        counting_sort(&mut items).unwrap();
        assert_eq!(items, vec![-1, 2, 2, 3, 3, 4, 4, 5, 5]);
    }

    #[test]
    fn test_counting_trivial() {
        let mut empty: Vec<i64> = vec![];
        counting_sort(&mut empty).unwrap();
        assert!(empty.is_empty());

        let mut same = vec![1_000_000; 10];
        counting_sort(&mut same).unwrap();
        assert_eq!(same, vec![1_000_000; 10]);
    }

    #[test]
    fn test_counting_full_span_is_rejected() {
        let mut items = vec![i64::MAX, 0, i64::MIN];
        let err = counting_sort(&mut items).unwrap_err();
        assert!(matches!(err, LabError::SpanTooWide { span: u64::MAX, .. }));
        assert_eq!(items, vec![i64::MAX, 0, i64::MIN]);

        let mut wide = vec![4_000_000_000_000_000_000, -4_000_000_000_000_000_000];
        assert!(matches!(
            counting_sort(&mut wide),
            Err(LabError::SpanTooWide { .. })
        ));
    }

    #[test]
    fn test_counting_at_span_limit() {
        let top = MAX_COUNTING_SPAN as i64 - 1;
        let mut items = vec![top, 0, top / 2];
        counting_sort(&mut items).unwrap();
        assert_eq!(items, vec![0, top / 2, top]);

        let mut over = vec![top + 1, 0];
        assert!(counting_sort(&mut over).is_err());
    }

    #[test]
    fn test_bucket_values_above_bucket_count() {
        // Values far larger than the bucket count must still land in range.
        let mut items = vec![950, 12, 400, 999, 0, 500, 12];
        bucket_sort(&mut items, ten());
        assert_eq!(items, vec![0, 12, 12, 400, 500, 950, 999]);
    }

    #[test]
    fn test_bucket_extreme_values() {
        let mut items = vec![i64::MAX, 0, i64::MIN, -1, 1];
        bucket_sort(&mut items, NonZeroUsize::new(3).unwrap());
        assert_eq!(items, vec![i64::MIN, -1, 0, 1, i64::MAX]);
    }

    #[test]
    fn test_bucket_single_bucket() {
        let mut items = vec![3, 1, 2];
        bucket_sort(&mut items, NonZeroUsize::new(1).unwrap());
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn test_random_against_std() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(99);
        for (len, hi) in [(10, 20), (50, 20), (100, 30), (1000, 100_000)] {
            let data: Vec<i64> = (0..len).map(|_| rng.gen_range(-hi..=hi)).collect();
            let mut expected = data.clone();
            expected.sort();

            let mut counted = data.clone();
            counting_sort(&mut counted).unwrap();
            assert_eq!(counted, expected);

            let mut bucketed = data;
            bucket_sort(&mut bucketed, ten());
            assert_eq!(bucketed, expected);
        }
    }
}
