//! Common traits for heap data structures
//!
//! This module provides a two-tier trait hierarchy for priority queues:
//!
//! - [`Heap`]: Base trait for comparator-ordered min-heaps
//! - [`MeldableHeap`]: Extended trait adding destructive `merge` of two heaps
//!
//! Unlike `std::collections::BinaryHeap`, which always orders by `Ord` and
//! returns the maximum, these heaps are min-heaps ordered by an explicit
//! [`Comparator`] fixed when the heap is created.

use crate::comparator::Comparator;
use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The operation needs at least one element but the heap is empty
    EmptyHeap,
    /// A sizing argument was zero
    InvalidArgument,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::EmptyHeap => write!(f, "operation on empty heap"),
            HeapError::InvalidArgument => {
                write!(f, "invalid argument: capacity must be positive")
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// Base trait for priority queues ordered by a [`Comparator`]
///
/// # Example
///
/// ```rust
/// use rust_leftist_heaps::Heap;
/// use rust_leftist_heaps::wb_leftist::WBLeftistHeap;
///
/// let mut heap = WBLeftistHeap::new();
/// heap.insert(3);
/// heap.insert(1);
/// heap.insert(2);
///
/// assert_eq!(heap.minimum(), Ok(&1));
/// heap.delete_minimum().unwrap();
/// assert_eq!(heap.minimum(), Ok(&2));
/// ```
pub trait Heap<T> {
    /// The ordering used for every comparison, fixed for the heap's lifetime
    type Comparator: Comparator<T>;

    /// Returns the comparator this heap is ordered by
    fn comparator(&self) -> &Self::Comparator;

    /// Returns true if the heap holds no element
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn size(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n)
    fn insert(&mut self, element: T);

    /// Returns the smallest element without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if the heap is empty.
    ///
    /// # Time Complexity
    /// O(1)
    fn minimum(&self) -> Result<&T, HeapError>;

    /// Removes the smallest element
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if the heap is empty. The heap is
    /// left untouched in that case.
    ///
    /// # Time Complexity
    /// O(log n)
    fn delete_minimum(&mut self) -> Result<(), HeapError>;

    /// Removes every element
    fn clear(&mut self);
}

/// Heaps that can be melded with another heap of the same type
///
/// `merge` is destructive: `other` is moved into the call and its nodes are
/// re-parented into `self`, so it cannot be used afterwards. The comparator of
/// `self` orders the result; both heaps share the comparator type, so for
/// stateless comparators they share the ordering too.
pub trait MeldableHeap<T>: Heap<T> {
    /// Merges another heap into this one, consuming the other heap
    ///
    /// # Time Complexity
    /// O(log n + log m)
    fn merge(&mut self, other: Self);
}
