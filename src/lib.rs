//! Weight-Biased Leftist Heaps for Rust
//!
//! This crate provides a meldable priority queue built on weight-biased leftist
//! trees: heap-ordered binary trees whose left subtrees always hold at least as
//! many nodes as their right subtrees.
//!
//! # Features
//!
//! - **Weight-Biased Leftist Heap**: O(log n) insert, delete-min and merge; O(1) minimum and size
//! - **Linear bulk build**: O(n) construction from any iterator by pairwise melding
//! - **Pluggable ordering**: natural, reversed, by key, or any `Fn(&T, &T) -> Ordering`
//! - **Deep copies**: O(n) `copy_of` / `Clone` sharing no node with the original
//!
//! Every tree walk (drop, clone, rendering, invariant checks) is iterative, so
//! heaps of any shape are safe to drop and copy.
//!
//! # Example
//!
//! ```rust
//! use rust_leftist_heaps::wb_leftist::WBLeftistHeap;
//! use rust_leftist_heaps::comparator::NaturalOrder;
//!
//! let mut heap = WBLeftistHeap::of(NaturalOrder, [5, 3, 8]);
//! heap.insert(1);
//! heap.merge(WBLeftistHeap::of(NaturalOrder, [4, 2]));
//!
//! assert_eq!(heap.minimum(), Ok(&1));
//! heap.delete_minimum().unwrap();
//! assert_eq!(heap.minimum(), Ok(&2));
//! assert_eq!(heap.size(), 5);
//! ```
//!
//! # Cargo features
//!
//! - `check-invariants`: re-validate heap order and weight bias after every
//!   mutating operation and panic on the first violation, in debug and release
//!   builds alike (O(n) per operation).

pub mod builder;
pub mod comparator;
pub mod stdlib_compat;
pub mod traits;
pub mod wb_leftist;

// Re-export the main traits for convenience
pub use comparator::{Comparator, NaturalOrder, ReverseOrder};
pub use traits::{Heap, HeapError, MeldableHeap};
pub use wb_leftist::WBLeftistHeap;
