//! Standard library compatibility layer
//!
//! Lets [`WBLeftistHeap`] stand in for `std::collections::BinaryHeap` in
//! ordinary collection code: `collect` into it, `extend` it, and iterate it.
//!
//! # Differences from BinaryHeap
//!
//! - **Min-heap vs Max-heap**: This is a min-heap, while `BinaryHeap` is a max-heap.
//!   Use [`ReverseOrder`](crate::comparator::ReverseOrder) to get max-heap behavior.
//! - **Owned iteration is sorted**: `into_iter` yields ascending elements, like
//!   `BinaryHeap::into_sorted_vec` does, not the arbitrary order of `BinaryHeap::into_iter`.
//! - **Bulk operations are linear**: `collect` and `extend` build the new elements
//!   into a heap in O(k) and meld it in, instead of k separate pushes.
//!
//! # Example
//!
//! ```rust
//! use rust_leftist_heaps::wb_leftist::WBLeftistHeap;
//!
//! let mut heap: WBLeftistHeap<i32> = vec![5, 3, 7].into_iter().collect();
//! heap.extend([1, 9]);
//! assert_eq!(heap.peek(), Some(&1)); // min-heap, unlike BinaryHeap's max-heap
//! assert_eq!(heap.into_iter().collect::<Vec<_>>(), vec![1, 3, 5, 7, 9]);
//! ```

use crate::comparator::{Comparator, NaturalOrder};
use crate::wb_leftist::{merge_all, Iter, Node, WBLeftistHeap};
use std::iter::FusedIterator;

impl<T: Ord> FromIterator<T> for WBLeftistHeap<T, NaturalOrder> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        WBLeftistHeap::from_iterable(NaturalOrder, iter)
    }
}

impl<T, C: Comparator<T>> Extend<T> for WBLeftistHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let batch = merge_all(
            self.comparator(),
            iter.into_iter().map(Node::singleton).collect(),
        );
        self.meld_root(batch);
    }
}

/// Owning iterator yielding a heap's elements in ascending order
///
/// Created by [`WBLeftistHeap::into_iter`]. Each step is a `pop`, so a full
/// drain costs O(n log n); dropping the iterator early frees the rest in O(n).
pub struct IntoIter<T, C> {
    heap: WBLeftistHeap<T, C>,
}

impl<T, C: Comparator<T>> Iterator for IntoIter<T, C> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.size();
        (len, Some(len))
    }
}

impl<T, C: Comparator<T>> ExactSizeIterator for IntoIter<T, C> {}

impl<T, C: Comparator<T>> FusedIterator for IntoIter<T, C> {}

impl<T, C: Comparator<T>> IntoIterator for WBLeftistHeap<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T, C>;

    fn into_iter(self) -> IntoIter<T, C> {
        IntoIter { heap: self }
    }
}

impl<'a, T, C> IntoIterator for &'a WBLeftistHeap<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparator::ReverseOrder;

    #[test]
    fn test_collect_and_drain() {
        let heap: WBLeftistHeap<i32> = (0..50).rev().collect();
        assert_eq!(heap.size(), 50);
        assert_eq!(heap.check_invariants(), Ok(()));

        let drained: Vec<i32> = heap.into_iter().collect();
        assert_eq!(drained, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_extend_melds_batch() {
        let mut heap = WBLeftistHeap::of(ReverseOrder, [4, 10]);
        heap.extend(vec![7, 12, 1]);
        assert_eq!(heap.size(), 5);
        assert_eq!(heap.check_invariants(), Ok(()));
        assert_eq!(heap.peek(), Some(&12));
    }

    #[test]
    fn test_extend_with_nothing() {
        let mut heap = WBLeftistHeap::of(NaturalOrder, [2]);
        heap.extend(Vec::new());
        assert_eq!(heap.size(), 1);
    }

    #[test]
    fn test_into_iter_size_hint() {
        let heap = WBLeftistHeap::of(NaturalOrder, [3, 2, 1]);
        let mut iter = heap.into_iter();
        assert_eq!(iter.len(), 3);
        iter.next();
        assert_eq!(iter.len(), 2);
    }

    #[test]
    fn test_borrowing_iteration() {
        let heap = WBLeftistHeap::of(NaturalOrder, [3, 2, 1]);
        let total: i32 = (&heap).into_iter().sum();
        assert_eq!(total, 6);
    }
}
