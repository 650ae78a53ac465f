//! Array-backed binary min-heap.
//!
//! Items live in a `Vec` that implicitly represents a complete binary tree:
//! the root is at index 0, the children of `i` are at `2i + 1` and `2i + 2`,
//! and the parent of `i > 0` is at `(i - 1) / 2`. Every public operation
//! leaves `items[parent(i)] <= items[i]` true for all non-root `i`.

use std::fmt;

use crate::error::{LabError, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryMinHeap<T> {
    items: Vec<T>,
}

impl<T> Default for BinaryMinHeap<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: PartialOrd> BinaryMinHeap<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items in the heap.
    #[inline]
    pub fn size(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.size()
    }

    /// Read-only view of the backing array, in tree order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Append `item` at the next free leaf and sift it up.
    ///
    /// O(1) when the item is not smaller than its parent, O(log n) when it
    /// becomes the new minimum.
    pub fn insert(&mut self, item: T) {
        self.items.push(item);
        if self.size() > 1 {
            self.sift_up(self.last_index());
        }
    }

    /// The minimum item, found at the root.
    pub fn peek_min(&self) -> Result<&T> {
        self.items.first().ok_or(LabError::Empty)
    }

    /// Remove and return the minimum item.
    ///
    /// The last leaf moves into the root slot and is sifted down.
    pub fn extract_min(&mut self) -> Result<T> {
        let last = self.items.pop().ok_or(LabError::Empty)?;
        if self.items.is_empty() {
            return Ok(last);
        }
        let min = std::mem::replace(&mut self.items[0], last);
        if self.size() > 1 {
            self.sift_down(0);
        }
        Ok(min)
    }

    /// Swap the minimum for `item` and return the old minimum.
    ///
    /// Same resulting contents as `extract_min` followed by `insert`, but the
    /// array length never changes and only one sift runs.
    pub fn replace_min(&mut self, item: T) -> Result<T> {
        let root = self.items.first_mut().ok_or(LabError::Empty)?;
        let min = std::mem::replace(root, item);
        if self.size() > 1 {
            self.sift_down(0);
        }
        Ok(min)
    }

    /// Drain the heap in ascending order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.size());
        while let Ok(item) = self.extract_min() {
            out.push(item);
        }
        out
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = parent_index(index);
            if self.items[parent] > self.items[index] {
                self.items.swap(parent, index);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.items.len();
        loop {
            let left = left_child_index(index);
            if left >= len {
                break; // leaf
            }
            let right = right_child_index(index);

            // Ties between the children go to the right child.
            let child = if right < len && self.items[right] <= self.items[left] {
                right
            } else {
                left
            };

            // Equal keys still swap; each step moves strictly down a level.
            if self.items[child] <= self.items[index] {
                self.items.swap(index, child);
                index = child;
            } else {
                break;
            }
        }
    }

    #[inline]
    fn last_index(&self) -> usize {
        self.items.len() - 1
    }
}

#[inline]
fn parent_index(index: usize) -> usize {
    debug_assert!(index > 0, "root has no parent");
    (index - 1) >> 1
}

#[inline]
fn left_child_index(index: usize) -> usize {
    (index << 1) + 1
}

#[inline]
fn right_child_index(index: usize) -> usize {
    (index << 1) + 2
}

impl<T: PartialOrd> FromIterator<T> for BinaryMinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

impl<T: PartialOrd> Extend<T> for BinaryMinHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: PartialOrd> From<Vec<T>> for BinaryMinHeap<T> {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}

impl<T: fmt::Debug> fmt::Display for BinaryMinHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BinaryMinHeap({:?})", self.items)
    }
}
