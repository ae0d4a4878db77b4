//! Weight-Biased Leftist Heap implementation
//!
//! A weight-biased leftist heap is a heap-ordered binary tree where every
//! node's left subtree holds at least as many nodes as its right subtree.
//! That bias keeps the right spine of a heap with n elements at most
//! ⌊log₂(n + 1)⌋ nodes long, and every operation only ever walks right spines:
//!
//! | Operation        | Complexity |
//! |------------------|------------|
//! | `insert`         | O(log n)   |
//! | `minimum`        | O(1)       |
//! | `delete_minimum` | O(log n)   |
//! | `merge`          | O(log n)   |
//! | `from_iterable`  | O(n)       |
//! | `copy_of`        | O(n)       |
//!
//! Each node stores its subtree weight, so `size` is O(1) and the bias can be
//! restored locally after a merge step without rescanning anything.
//!
//! Nodes are owned strictly parent-to-child (`Option<Box<Node>>`). Merging
//! moves whole subtrees between parents, so no node is ever aliased and
//! merge consumes both of its operands.
//!
//! # Example
//!
//! ```rust
//! use rust_leftist_heaps::wb_leftist::WBLeftistHeap;
//! use rust_leftist_heaps::comparator::NaturalOrder;
//!
//! let mut heap = WBLeftistHeap::of(NaturalOrder, [5, 3, 8, 1]);
//! assert_eq!(heap.minimum(), Ok(&1));
//!
//! let other = WBLeftistHeap::of(NaturalOrder, [2, 0]);
//! heap.merge(other);
//! assert_eq!(heap.size(), 6);
//! assert_eq!(heap.into_sorted_vec(), vec![0, 1, 2, 3, 5, 8]);
//! ```

use crate::builder::HeapBuilder;
use crate::comparator::{Comparator, NaturalOrder};
use crate::traits::{Heap, HeapError, MeldableHeap};
use log::{debug, trace};
use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;
use std::mem;

pub(crate) type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub(crate) element: T,
    /// Number of nodes in the subtree rooted here, this one included
    pub(crate) weight: usize,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn singleton(element: T) -> Box<Self> {
        Box::new(Node {
            element,
            weight: 1,
            left: None,
            right: None,
        })
    }

    /// Recomputes the weight from the children and moves the heavier child left
    fn restore_bias(&mut self) {
        let left = weight(&self.left);
        let right = weight(&self.right);
        self.weight = 1 + left + right;
        if left < right {
            mem::swap(&mut self.left, &mut self.right);
        }
    }
}

#[inline]
fn weight<T>(link: &Link<T>) -> usize {
    link.as_ref().map_or(0, |node| node.weight)
}

/// Trees owned by a merge in progress.
///
/// If the comparator panics, unwinding frees them with [`free_tree`] instead
/// of the recursive `Box` drop, which could overflow on a deep left chain.
struct Melding<T> {
    /// Winners taken off the right spines, top first
    path: Vec<Box<Node<T>>>,
    a: Link<T>,
    b: Link<T>,
}

impl<T> Drop for Melding<T> {
    fn drop(&mut self) {
        free_tree(self.a.take());
        free_tree(self.b.take());
        for node in self.path.drain(..) {
            free_tree(Some(node));
        }
    }
}

/// Melds two trees along their right spines.
///
/// Walks down taking the smaller root at each step, then rebuilds bottom-up,
/// fixing weights and moving the heavier child left. On equal elements `a`
/// stays on top.
pub(crate) fn merge_links<T, C>(comparator: &C, a: Link<T>, b: Link<T>) -> Link<T>
where
    C: Comparator<T> + ?Sized,
{
    let mut melding = Melding {
        path: Vec::new(),
        a,
        b,
    };

    let mut merged = loop {
        match (melding.a.as_ref(), melding.b.as_ref()) {
            (Some(a), Some(b)) => {
                if comparator.compare(&a.element, &b.element) == Ordering::Greater {
                    mem::swap(&mut melding.a, &mut melding.b);
                }
                if let Some(mut winner) = melding.a.take() {
                    melding.a = winner.right.take();
                    melding.path.push(winner);
                }
            }
            _ => break melding.a.take().or_else(|| melding.b.take()),
        }
    };

    while let Some(mut node) = melding.path.pop() {
        node.right = merged;
        node.restore_bias();
        merged = Some(node);
    }
    merged
}

/// Folds a queue of trees into one by repeatedly melding the two front trees
/// and queueing the result at the back.
///
/// Trees are consumed in rounds of similar sizes, so the total merge work over
/// n singletons is O(n).
pub(crate) fn merge_all<T, C>(comparator: &C, mut queue: VecDeque<Box<Node<T>>>) -> Link<T>
where
    C: Comparator<T> + ?Sized,
{
    debug!("building weight-biased leftist heap from {} trees", queue.len());
    while queue.len() > 1 {
        if let (Some(a), Some(b)) = (queue.pop_front(), queue.pop_front()) {
            queue.extend(merge_links(comparator, Some(a), Some(b)));
        }
    }
    queue.pop_front()
}

/// Clones every node with an explicit stack, so tree height is unbounded.
fn copy_tree<T: Clone>(root: &Link<T>) -> Link<T> {
    enum Step<'a, T> {
        Visit(&'a Link<T>),
        Build(&'a Node<T>),
    }

    let mut steps = vec![Step::Visit(root)];
    let mut built: Vec<Link<T>> = Vec::new();

    while let Some(step) = steps.pop() {
        match step {
            Step::Visit(None) => built.push(None),
            Step::Visit(Some(node)) => {
                steps.push(Step::Build(&**node));
                steps.push(Step::Visit(&node.right));
                steps.push(Step::Visit(&node.left));
            }
            Step::Build(node) => {
                let right = built.pop().flatten();
                let left = built.pop().flatten();
                built.push(Some(Box::new(Node {
                    element: node.element.clone(),
                    weight: node.weight,
                    left,
                    right,
                })));
            }
        }
    }

    built.pop().flatten()
}

/// Frees a tree without recursing, since left paths can be O(n) long.
fn free_tree<T>(root: Link<T>) {
    let mut stack: Vec<Box<Node<T>>> = root.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

/// Which structural invariant a heap failed, as reported by
/// [`WBLeftistHeap::check_invariants`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantViolation {
    /// A child compares less than its parent
    HeapOrder,
    /// A node's right subtree is heavier than its left subtree
    WeightBias,
    /// A stored weight differs from 1 + weight(left) + weight(right)
    WeightMismatch,
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantViolation::HeapOrder => write!(f, "child ordered before its parent"),
            InvariantViolation::WeightBias => {
                write!(f, "right subtree heavier than left subtree")
            }
            InvariantViolation::WeightMismatch => {
                write!(f, "stored weight disagrees with subtree sizes")
            }
        }
    }
}

impl std::error::Error for InvariantViolation {}

/// Weight-Biased Leftist Heap
///
/// A min-heap ordered by the comparator `C` (by default [`NaturalOrder`]).
/// The comparator is fixed when the heap is created.
///
/// # Example
///
/// ```rust
/// use rust_leftist_heaps::wb_leftist::WBLeftistHeap;
/// use rust_leftist_heaps::HeapError;
///
/// let mut heap = WBLeftistHeap::new();
/// heap.insert("pear");
/// heap.insert("apple");
/// assert_eq!(heap.minimum(), Ok(&"apple"));
///
/// heap.clear();
/// assert_eq!(heap.delete_minimum(), Err(HeapError::EmptyHeap));
/// ```
pub struct WBLeftistHeap<T, C = NaturalOrder> {
    comparator: C,
    root: Link<T>,
}

impl<T, C> Drop for WBLeftistHeap<T, C> {
    fn drop(&mut self) {
        free_tree(self.root.take());
    }
}

impl<T: Ord> WBLeftistHeap<T, NaturalOrder> {
    /// Creates an empty heap ordered by `T`'s `Ord` implementation
    pub fn new() -> Self {
        Self::empty(NaturalOrder)
    }

    /// Creates a heap holding exactly `elements`, ordered by `Ord`
    ///
    /// # Time Complexity
    /// O(n)
    pub fn of_natural<const N: usize>(elements: [T; N]) -> Self {
        Self::of(NaturalOrder, elements)
    }
}

impl<T, C> WBLeftistHeap<T, C> {
    /// Creates an empty heap ordered by `comparator`
    ///
    /// # Time Complexity
    /// O(1)
    pub fn empty(comparator: C) -> Self {
        WBLeftistHeap {
            comparator,
            root: None,
        }
    }

    pub(crate) fn from_root(comparator: C, root: Link<T>) -> Self {
        WBLeftistHeap { comparator, root }
    }

    /// Creates an independent deep copy of `heap`
    ///
    /// The copy has the same shape and elements but shares no node with the
    /// original, so later changes to either heap do not affect the other.
    ///
    /// # Time Complexity
    /// O(n)
    pub fn copy_of(heap: &Self) -> Self
    where
        T: Clone,
        C: Clone,
    {
        trace!("deep-copying heap of {} elements", heap.size());
        WBLeftistHeap {
            comparator: heap.comparator.clone(),
            root: copy_tree(&heap.root),
        }
    }

    /// Returns the comparator this heap is ordered by
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Returns true if the heap holds no element
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of elements, read from the root's weight
    ///
    /// # Time Complexity
    /// O(1)
    pub fn size(&self) -> usize {
        weight(&self.root)
    }

    /// Alias of [`size`](Self::size), matching the std collections
    pub fn len(&self) -> usize {
        self.size()
    }

    /// Returns the smallest element
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if the heap is empty.
    pub fn minimum(&self) -> Result<&T, HeapError> {
        self.peek().ok_or(HeapError::EmptyHeap)
    }

    /// Returns the smallest element, or `None` if the heap is empty
    pub fn peek(&self) -> Option<&T> {
        self.root.as_ref().map(|node| &node.element)
    }

    /// Removes every element
    ///
    /// The handle is reset in O(1); the old nodes are freed iteratively.
    pub fn clear(&mut self) {
        trace!("clearing heap of {} elements", self.size());
        free_tree(self.root.take());
    }

    /// Number of nodes on the path from the root following right children
    ///
    /// Never more than ⌊log₂(n + 1)⌋ for a heap of n elements.
    pub fn right_spine_len(&self) -> usize {
        let mut len = 0;
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            len += 1;
            current = node.right.as_deref();
        }
        len
    }

    /// Returns an iterator over the elements in no particular order
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            stack: self.root.as_deref().into_iter().collect(),
            remaining: self.size(),
        }
    }
}

impl<T, C: Comparator<T>> WBLeftistHeap<T, C> {
    /// Creates a heap holding exactly `elements`
    ///
    /// # Time Complexity
    /// O(n), see [`from_iterable`](Self::from_iterable)
    pub fn of<const N: usize>(comparator: C, elements: [T; N]) -> Self {
        Self::from_iterable(comparator, elements)
    }

    /// Creates a heap holding exactly the elements of `iterable`
    ///
    /// Duplicates are kept. Every element becomes a singleton tree and the
    /// trees are melded pairwise, which is O(n) rather than the O(n log n) of
    /// inserting one element at a time.
    pub fn from_iterable<I>(comparator: C, iterable: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut builder = HeapBuilder::new(comparator);
        builder.extend(iterable);
        builder.build()
    }

    /// Merges two heaps into a new one, consuming both
    ///
    /// The comparator of `a` orders the result.
    pub fn merged(mut a: Self, b: Self) -> Self {
        a.merge(b);
        a
    }

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn insert(&mut self, element: T) {
        self.meld_root(Some(Node::singleton(element)));
    }

    /// Alias of [`insert`](Self::insert), matching `BinaryHeap::push`
    pub fn push(&mut self, element: T) {
        self.insert(element);
    }

    /// Merges another heap into this one, consuming the other heap
    ///
    /// # Time Complexity
    /// O(log n + log m)
    pub fn merge(&mut self, mut other: Self) {
        self.meld_root(other.root.take());
    }

    /// Removes the smallest element
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if the heap is empty, leaving it
    /// unchanged.
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn delete_minimum(&mut self) -> Result<(), HeapError> {
        self.pop().map(drop).ok_or(HeapError::EmptyHeap)
    }

    /// Removes and returns the smallest element, or `None` if the heap is empty
    pub fn pop(&mut self) -> Option<T> {
        let root = self.root.take()?;
        let Node {
            element,
            left,
            right,
            ..
        } = *root;
        self.root = merge_links(&self.comparator, left, right);
        self.assert_invariants();
        Some(element)
    }

    /// Consumes the heap, returning its elements in ascending order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.size());
        while let Some(element) = self.pop() {
            sorted.push(element);
        }
        sorted
    }

    /// Walks the whole tree and reports the first broken invariant
    ///
    /// # Time Complexity
    /// O(n)
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let mut stack: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            let left = weight(&node.left);
            let right = weight(&node.right);
            if node.weight != 1 + left + right {
                return Err(InvariantViolation::WeightMismatch);
            }
            if left < right {
                return Err(InvariantViolation::WeightBias);
            }
            for child in [node.left.as_deref(), node.right.as_deref()].into_iter().flatten() {
                if self.comparator.compare(&node.element, &child.element) == Ordering::Greater {
                    return Err(InvariantViolation::HeapOrder);
                }
                stack.push(child);
            }
        }
        Ok(())
    }

    /// Melds a detached tree into this heap's root
    pub(crate) fn meld_root(&mut self, other: Link<T>) {
        self.root = merge_links(&self.comparator, self.root.take(), other);
        self.assert_invariants();
    }

    #[inline]
    fn assert_invariants(&self) {
        #[cfg(feature = "check-invariants")]
        {
            if let Err(violation) = self.check_invariants() {
                panic!("heap invariant broken: {:?}", violation);
            }
        }
    }
}

impl<T, C: Comparator<T>> Heap<T> for WBLeftistHeap<T, C> {
    type Comparator = C;

    fn comparator(&self) -> &C {
        WBLeftistHeap::comparator(self)
    }

    fn is_empty(&self) -> bool {
        WBLeftistHeap::is_empty(self)
    }

    fn size(&self) -> usize {
        WBLeftistHeap::size(self)
    }

    fn insert(&mut self, element: T) {
        WBLeftistHeap::insert(self, element)
    }

    fn minimum(&self) -> Result<&T, HeapError> {
        WBLeftistHeap::minimum(self)
    }

    fn delete_minimum(&mut self) -> Result<(), HeapError> {
        WBLeftistHeap::delete_minimum(self)
    }

    fn clear(&mut self) {
        WBLeftistHeap::clear(self)
    }
}

impl<T, C: Comparator<T>> MeldableHeap<T> for WBLeftistHeap<T, C> {
    fn merge(&mut self, other: Self) {
        WBLeftistHeap::merge(self, other)
    }
}

impl<T, C: Default> Default for WBLeftistHeap<T, C> {
    fn default() -> Self {
        Self::empty(C::default())
    }
}

impl<T: Clone, C: Clone> Clone for WBLeftistHeap<T, C> {
    fn clone(&self) -> Self {
        Self::copy_of(self)
    }
}

impl<T: fmt::Debug, C> fmt::Debug for WBLeftistHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WBLeftistHeap")
            .field("size", &self.size())
            .field("minimum", &self.peek())
            .finish()
    }
}

/// Renders the tree as `WBLeftistHeap(Node(left, element, right))`, with
/// `null` for absent children.
impl<T: fmt::Display, C> fmt::Display for WBLeftistHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        enum Token<'a, T> {
            Tree(&'a Link<T>),
            Element(&'a T),
            Text(&'static str),
        }

        f.write_str("WBLeftistHeap(")?;
        let mut tokens = vec![Token::Tree(&self.root)];
        while let Some(token) = tokens.pop() {
            match token {
                Token::Text(text) => f.write_str(text)?,
                Token::Element(element) => write!(f, "{}", element)?,
                Token::Tree(None) => f.write_str("null")?,
                Token::Tree(Some(node)) => {
                    f.write_str("Node(")?;
                    tokens.push(Token::Text(")"));
                    tokens.push(Token::Tree(&node.right));
                    tokens.push(Token::Text(", "));
                    tokens.push(Token::Element(&node.element));
                    tokens.push(Token::Text(", "));
                    tokens.push(Token::Tree(&node.left));
                }
            }
        }
        f.write_str(")")
    }
}

/// Borrowing iterator over a heap's elements in unspecified order
///
/// Created by [`WBLeftistHeap::iter`].
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.stack.pop()?;
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        self.remaining -= 1;
        Some(&node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> std::iter::FusedIterator for Iter<'_, T> {}
