//! Common traits for max-heap data structures
//!
//! This module provides the [`MaxHeap`] trait describing the operations of a
//! max-oriented priority queue, and the [`HeapError`] type returned when an
//! operation cannot be carried out.
//!
//! The trait mirrors the shape of Rust's `BinaryHeap` API, except that
//! removing from an empty heap is reported as an error instead of `None`.

use thiserror::Error;

/// Error type for heap operations
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// `remove_top` was called on a heap with no elements
    #[error("attempt to remove top of empty heap")]
    Empty,
}

/// Base trait for max-heap data structures
///
/// Elements serve as their own priority: the greatest element according to
/// `PartialOrd` is always the next one removed.
///
/// # Preconditions
///
/// Callers must not insert a value that is already present in the heap.
/// This is not checked; the heap stays memory-safe, but the relative order
/// in which equal values come out is unspecified.
///
/// # Example
///
/// ```rust
/// use binary_max_heap::{Heap, HeapError, MaxHeap};
///
/// let mut heap = Heap::new();
/// heap.insert(3);
/// heap.insert(7);
/// heap.insert(5);
///
/// assert_eq!(heap.peek(), Some(&7));
/// assert_eq!(heap.remove_top(), Ok(7));
/// assert_eq!(heap.remove_top(), Ok(5));
/// assert_eq!(heap.remove_top(), Ok(3));
/// assert_eq!(heap.remove_top(), Err(HeapError::Empty));
/// ```
pub trait MaxHeap<T: PartialOrd> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// The value must not already be present in the heap.
    ///
    /// # Time Complexity
    /// O(log n)
    fn insert(&mut self, value: T);

    /// Returns the maximum element without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the maximum element
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap has no elements.
    ///
    /// # Time Complexity
    /// O(log n)
    fn remove_top(&mut self) -> Result<T, HeapError>;
}
