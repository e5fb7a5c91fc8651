//! Binary Max-Heap implementation
//!
//! A binary max-heap stored as a dense vector. The element at index `i` has
//! its children at `2i + 1` and `2i + 2`, so the vector always describes a
//! complete binary tree: elements are only ever appended to or popped from
//! the end.
//!
//! # Time Complexity
//!
//! | Operation    | Complexity |
//! |--------------|------------|
//! | `insert`     | O(log n)   |
//! | `remove_top` | O(log n)   |
//! | `peek`       | O(1)       |
//! | `is_empty`   | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use binary_max_heap::{Heap, MaxHeap};
//!
//! let mut heap = Heap::from_elements([5, 2, 8, 1]);
//!
//! assert_eq!(heap.peek(), Some(&8));
//! assert_eq!(heap.remove_top(), Ok(8));
//! assert_eq!(heap.remove_top(), Ok(5));
//! assert_eq!(heap.remove_top(), Ok(2));
//! assert_eq!(heap.remove_top(), Ok(1));
//! assert!(heap.remove_top().is_err());
//! ```

use std::iter::FusedIterator;

use log::{debug, trace};

use crate::traits::{HeapError, MaxHeap};

/// A binary max-heap
///
/// The greatest element, according to `PartialOrd`, is always at the root
/// and is the next one returned by [`remove_top`](MaxHeap::remove_top).
///
/// Values must be distinct: inserting a value already in the heap is a
/// caller error that is not detected.
#[derive(Debug, Clone)]
pub struct Heap<T: PartialOrd> {
    /// Elements laid out as an implicit complete binary tree
    data: Vec<T>,
}

impl<T: PartialOrd> MaxHeap<T> for Heap<T> {
    fn new() -> Self {
        Self { data: Vec::new() }
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn insert(&mut self, value: T) {
        self.data.push(value);
        self.sift_up(self.data.len() - 1);

        #[cfg(feature = "check-invariants")]
        self.assert_heap_property();
    }

    fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    fn remove_top(&mut self) -> Result<T, HeapError> {
        let Some(last) = self.data.pop() else {
            trace!("remove_top on empty heap");
            return Err(HeapError::Empty);
        };

        // A single remaining element is the maximum itself
        if self.data.is_empty() {
            return Ok(last);
        }

        let top = std::mem::replace(&mut self.data[0], last);
        self.sift_down(0);

        #[cfg(feature = "check-invariants")]
        self.assert_heap_property();

        Ok(top)
    }
}

impl<T: PartialOrd> Heap<T> {
    /// Creates an empty heap able to hold `capacity` elements without
    /// reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Builds a heap by inserting each element in iteration order
    ///
    /// The elements must be distinct.
    pub fn from_elements<I: IntoIterator<Item = T>>(elements: I) -> Self {
        let elements = elements.into_iter();
        let mut heap = Self::with_capacity(elements.size_hint().0);
        for element in elements {
            heap.insert(element);
        }
        debug!("built heap from {} initial elements", heap.len());
        heap
    }

    /// Consumes the heap and returns its elements from greatest to least
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        self.drain_descending().collect()
    }

    /// Removes elements from greatest to least
    ///
    /// Exhausting the iterator leaves the heap empty. Dropping it early
    /// leaves the remaining elements in the heap.
    pub fn drain_descending(&mut self) -> DrainDescending<'_, T> {
        DrainDescending { heap: self }
    }

    /// Move element at index up while it is greater than its parent
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.data[index] > self.data[parent] {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down while one of its children exceeds it
    ///
    /// With two children the swap goes to the left child only when it is
    /// strictly greater than the right one.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        while self.violates(index) {
            let left = 2 * index + 1;
            let right = left + 1;

            let child = if right >= len || self.data[left] > self.data[right] {
                left
            } else {
                right
            };

            self.data.swap(index, child);
            index = child;
        }
    }

    /// Whether a child of the node at index is greater than it
    fn violates(&self, index: usize) -> bool {
        let left = 2 * index + 1;
        let right = left + 1;
        let len = self.data.len();

        if left >= len {
            false
        } else if right >= len {
            self.data[left] > self.data[index]
        } else {
            self.data[left] > self.data[index] || self.data[right] > self.data[index]
        }
    }

    /// Returns the first (parent, child) index pair breaking the heap
    /// property
    #[cfg(any(test, feature = "check-invariants"))]
    fn first_violation(&self) -> Option<(usize, usize)> {
        (1..self.data.len())
            .map(|child| ((child - 1) / 2, child))
            .find(|&(parent, child)| self.data[child] > self.data[parent])
    }

    #[cfg(feature = "check-invariants")]
    fn assert_heap_property(&self) {
        if let Some((parent, child)) = self.first_violation() {
            panic!(
                "max-heap property violated: element at {} exceeds its parent at {}",
                child, parent
            );
        }
    }
}

impl<T: PartialOrd> Default for Heap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialOrd> FromIterator<T> for Heap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_elements(iter)
    }
}

impl<T: PartialOrd> Extend<T> for Heap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

/// Iterator returned by [`Heap::drain_descending`]
#[derive(Debug)]
pub struct DrainDescending<'a, T: PartialOrd> {
    heap: &'a mut Heap<T>,
}

impl<T: PartialOrd> Iterator for DrainDescending<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.remove_top().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<T: PartialOrd> ExactSizeIterator for DrainDescending<'_, T> {}

impl<T: PartialOrd> FusedIterator for DrainDescending<'_, T> {}
