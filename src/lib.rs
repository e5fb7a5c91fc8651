//! Binary Max-Heap for Rust
//!
//! This crate provides an array-backed binary max-heap: an ordered container
//! with logarithmic insertion and extraction of the greatest element.
//!
//! # Features
//!
//! - **Dense storage**: the heap is a complete binary tree laid out in a single `Vec`
//! - **O(log n)** `insert` and `remove_top`, O(1) `peek` and `is_empty`
//! - **Explicit errors**: removing from an empty heap returns [`HeapError::Empty`]
//! - **`check-invariants`** cargo feature: verifies the heap property after every mutation
//!
//! Values inserted into a heap must be distinct. Duplicates are not detected;
//! the heap stays memory-safe but the order in which equal values come out is
//! unspecified.
//!
//! # Example
//!
//! ```rust
//! use binary_max_heap::{Heap, HeapError, MaxHeap};
//!
//! let mut heap = Heap::new();
//! heap.insert(5);
//! heap.insert(2);
//! heap.insert(8);
//! heap.insert(1);
//!
//! let mut ordered = Vec::new();
//! while !heap.is_empty() {
//!     ordered.push(heap.remove_top()?);
//! }
//! assert_eq!(ordered, vec![8, 5, 2, 1]);
//! assert_eq!(heap.remove_top(), Err(HeapError::Empty));
//! # Ok::<(), HeapError>(())
//! ```

pub mod heap;
pub mod traits;

// Re-export the main types for convenience
pub use heap::{DrainDescending, Heap};
pub use traits::{HeapError, MaxHeap};
