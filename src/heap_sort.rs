//! In-place heap sort over an implicit max-heap.

/// Sort `items` ascending in place. O(n log n) time, O(1) extra space.
pub fn heap_sort<T: PartialOrd>(items: &mut [T]) {
    let n = items.len();
    if n <= 1 {
        return;
    }

    // Build max heap: everything past n/2 - 1 is already a leaf
    for i in (0..n / 2).rev() {
        max_heapify(items, i, n);
    }

    // Move the current max behind the shrinking heap boundary
    for end in (1..n).rev() {
        items.swap(0, end);
        max_heapify(items, 0, end);
    }
}

/// Sift `items[i]` down within `items[..hi]` until it is at least as large as
/// both children.
#[inline]
fn max_heapify<T: PartialOrd>(items: &mut [T], mut i: usize, hi: usize) {
    loop {
        let left = 2 * i + 1;
        let right = left + 1;
        let mut largest = i;

        if left < hi && items[left] > items[largest] {
            largest = left;
        }
        if right < hi && items[right] > items[largest] {
            largest = right;
        }

        if largest == i {
            break;
        }

        items.swap(i, largest);
        i = largest;
    }
}
