//! Orderings for heap elements
//!
//! A heap never calls `Ord` directly; every comparison goes through a
//! [`Comparator`] chosen when the heap is built. This lets the same element
//! type be kept as a min-heap ([`NaturalOrder`]), a max-heap
//! ([`ReverseOrder`]), ordered by a projected key ([`ByKey`]), or by any
//! closure `Fn(&T, &T) -> Ordering`.
//!
//! # Example
//!
//! ```rust
//! use rust_leftist_heaps::comparator::{ByKey, ReverseOrder};
//! use rust_leftist_heaps::wb_leftist::WBLeftistHeap;
//!
//! let mut max_heap = WBLeftistHeap::of(ReverseOrder, [3, 9, 4]);
//! assert_eq!(max_heap.pop(), Some(9));
//!
//! let by_len = WBLeftistHeap::of(ByKey::new(|s: &&str| s.len()), ["ccc", "a", "bb"]);
//! assert_eq!(by_len.peek(), Some(&"a"));
//! ```

use std::cmp::Ordering;
use std::fmt;

/// A total order over `T`
///
/// Implementations must be consistent for the lifetime of a heap: the heap
/// relies on the order never changing between two calls. If `compare` panics
/// during a merge, the trees being merged are freed and the heap is left empty.
pub trait Comparator<T: ?Sized> {
    /// Compares two elements, `Less` meaning `a` is served before `b`
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Orders elements by their `Ord` implementation (min-heap)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Orders elements opposite to their `Ord` implementation (max-heap)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ReverseOrder;

impl<T: Ord + ?Sized> Comparator<T> for ReverseOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }
}

/// Orders elements by a key extracted from each of them
#[derive(Clone, Copy)]
pub struct ByKey<F> {
    key: F,
}

impl<F> ByKey<F> {
    /// Creates a comparator ordering by `key(element)`
    pub fn new(key: F) -> Self {
        ByKey { key }
    }
}

impl<F> fmt::Debug for ByKey<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByKey").finish_non_exhaustive()
    }
}

impl<T, K, F> Comparator<T> for ByKey<F>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.key)(a).cmp(&(self.key)(b))
    }
}
