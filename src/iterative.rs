//! Quadratic comparison sorts and an iterative merge sort.

/// True when no adjacent pair is descending. Empty and single-item slices are
/// sorted.
pub fn is_sorted<T: PartialOrd>(items: &[T]) -> bool {
    items.windows(2).all(|w| w[0] <= w[1])
}

/// Repeated passes swapping adjacent descending pairs, until a pass makes no
/// swap. O(n²) worst case, O(n) on sorted input.
pub fn bubble_sort<T: PartialOrd>(items: &mut [T]) {
    let n = items.len();
    if n <= 1 {
        return;
    }

    // After pass i the largest i + 1 items are final
    for i in 0..n {
        let mut swapped = false;
        for j in 0..n - 1 - i {
            if items[j + 1] < items[j] {
                items.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

/// Swap the minimum of the unsorted suffix into each position. Θ(n²)
/// comparisons regardless of input order.
pub fn selection_sort<T: PartialOrd>(items: &mut [T]) {
    let n = items.len();
    for i in 0..n {
        let mut min = i;
        for j in i + 1..n {
            if items[j] < items[min] {
                min = j;
            }
        }
        if min != i {
            items.swap(i, min);
        }
    }
}

/// Shift each item left past its larger predecessors.
pub fn insertion_sort<T: PartialOrd>(items: &mut [T]) {
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && items[j] < items[j - 1] {
            items.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// Merge sorted runs of width 1, 2, 4, ... until one run covers the slice.
pub fn bottom_up_merge_sort<T: PartialOrd + Clone>(items: &mut [T]) {
    let n = items.len();
    let mut width = 1;
    let mut aux: Vec<T> = Vec::with_capacity(n);

    while width < n {
        let mut start = 0;
        while start + width < n {
            let mid = start + width;
            let end = (start + 2 * width).min(n);
            merge_runs(items, start, mid, end, &mut aux);
            start = end;
        }
        width *= 2;
    }
}

/// Merge the sorted runs `items[start..mid]` and `items[mid..end]` in place,
/// using `aux` as scratch space.
fn merge_runs<T: PartialOrd + Clone>(
    items: &mut [T],
    start: usize,
    mid: usize,
    end: usize,
    aux: &mut Vec<T>,
) {
    debug_assert!(is_sorted(&items[start..mid]));
    debug_assert!(is_sorted(&items[mid..end]));

    aux.clear();
    let (mut i, mut j) = (start, mid);
    while i < mid && j < end {
        // Left run wins ties so equal items keep their order
        if items[j] < items[i] {
            aux.push(items[j].clone());
            j += 1;
        } else {
            aux.push(items[i].clone());
            i += 1;
        }
    }
    aux.extend_from_slice(&items[i..mid]);
    aux.extend_from_slice(&items[j..end]);

    items[start..end].clone_from_slice(&aux[..]);
}
