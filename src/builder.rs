//! Bulk construction of weight-biased leftist heaps
//!
//! [`HeapBuilder`] collects elements as singleton trees and melds them all in
//! one linear-time pass when [`build`](HeapBuilder::build) is called. Use it
//! when the elements arrive piecemeal but are all known before the first
//! `minimum`; inserting them one by one would cost O(n log n).
//!
//! # Example
//!
//! ```rust
//! use rust_leftist_heaps::builder::HeapBuilder;
//! use rust_leftist_heaps::comparator::NaturalOrder;
//!
//! let mut builder = HeapBuilder::with_capacity(NaturalOrder, 3).unwrap();
//! builder.push(7);
//! builder.extend([2, 9]);
//! let heap = builder.build();
//! assert_eq!(heap.minimum(), Ok(&2));
//! ```

use crate::comparator::Comparator;
use crate::traits::HeapError;
use crate::wb_leftist::{merge_all, Node, WBLeftistHeap};
use std::collections::VecDeque;

/// Accumulates elements for an O(n) heap build
pub struct HeapBuilder<T, C> {
    comparator: C,
    nodes: VecDeque<Box<Node<T>>>,
}

impl<T, C: Comparator<T>> HeapBuilder<T, C> {
    /// Creates an empty builder for a heap ordered by `comparator`
    pub fn new(comparator: C) -> Self {
        HeapBuilder {
            comparator,
            nodes: VecDeque::new(),
        }
    }

    /// Creates an empty builder with room for `capacity` elements
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidArgument`] if `capacity` is zero.
    pub fn with_capacity(comparator: C, capacity: usize) -> Result<Self, HeapError> {
        if capacity == 0 {
            return Err(HeapError::InvalidArgument);
        }
        Ok(HeapBuilder {
            comparator,
            nodes: VecDeque::with_capacity(capacity),
        })
    }

    /// Adds an element to the heap being built
    pub fn push(&mut self, element: T) {
        self.nodes.push_back(Node::singleton(element));
    }

    /// Number of elements collected so far
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if no element has been collected yet
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Melds every collected element into one heap
    ///
    /// # Time Complexity
    /// O(n)
    pub fn build(self) -> WBLeftistHeap<T, C> {
        let root = merge_all(&self.comparator, self.nodes);
        WBLeftistHeap::from_root(self.comparator, root)
    }
}

impl<T, C: Comparator<T>> Extend<T> for HeapBuilder<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.nodes.extend(iter.into_iter().map(Node::singleton));
    }
}
