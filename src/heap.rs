//! Bounded array-backed binary heap priority queue.
//!
//! The queue stores elements in a preallocated `Vec<T>` laid out as an
//! implicit binary tree: the parent of slot `i` is `(i - 1) / 2` and its
//! children are `2i + 1` and `2i + 2`. Capacity is fixed at construction
//! and the queue never reallocates; an insert at capacity drops the item
//! and reports [`Error::QueueFull`](crate::Error::QueueFull).
//!
//! "Higher priority" means `Ord::cmp` returns `Greater`. The queue itself
//! is direction-agnostic: wrap elements in [`std::cmp::Reverse`] to get a
//! min-queue from the same machinery.

use crate::error::{Error, Result};

/// A fixed-capacity priority queue implemented as a binary heap.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T: Ord> PriorityQueue<T> {
    /// Create an empty queue that can hold at most `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        PriorityQueue {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Build a queue from existing elements in O(n).
    ///
    /// The capacity is fixed at the input length; the heap is repaired by
    /// sifting down from the last parent to the root.
    pub fn from_items(items: Vec<T>) -> Self {
        let mut queue = PriorityQueue {
            capacity: items.len(),
            items,
        };
        queue.build_heap();
        queue
    }

    /// Insert an item, sifting it up to its proper slot.
    ///
    /// At capacity the item is dropped, the queue is left unchanged and
    /// `Error::QueueFull` is returned.
    pub fn add(&mut self, item: T) -> Result<()> {
        if self.items.len() == self.capacity {
            log::debug!(
                "priority queue at capacity ({}), dropping insert",
                self.capacity
            );
            return Err(Error::QueueFull {
                capacity: self.capacity,
            });
        }
        self.items.push(item);
        self.sift_up(self.items.len() - 1);
        Ok(())
    }

    /// Remove and return the highest-priority element, or `None` if empty.
    ///
    /// The last element moves into the root slot and sifts down.
    pub fn remove(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let root = self.items.pop();
        self.sift_down(0);
        root
    }

    /// Peek at the highest-priority element without removing it.
    pub fn front(&self) -> Option<&T> {
        self.items.first()
    }

    /// Sort the vector's elements by descending priority in O(n log n).
    ///
    /// The queue adopts the vector's elements as its storage (resetting
    /// its capacity to their number), bulk-builds the heap, then extracts
    /// every element back into the vector in extraction order. The queue
    /// is empty afterwards.
    pub fn heap_sort(&mut self, items: &mut Vec<T>) {
        self.capacity = items.len();
        self.items = std::mem::take(items);
        self.build_heap();
        while let Some(item) = self.remove() {
            items.push(item);
        }
    }

    fn build_heap(&mut self) {
        for i in (0..self.items.len() / 2).rev() {
            self.sift_down(i);
        }
    }

    fn sift_up(&mut self, mut child: usize) {
        while child > 0 {
            let parent = (child - 1) / 2;
            if self.items[child] > self.items[parent] {
                self.items.swap(child, parent);
                child = parent;
            } else {
                return;
            }
        }
    }

    fn sift_down(&mut self, mut parent: usize) {
        loop {
            let left = 2 * parent + 1;
            if left >= self.items.len() {
                return;
            }
            // Take the right child only when it strictly outranks the left.
            let mut child = left;
            let right = left + 1;
            if right < self.items.len() && self.items[right] > self.items[left] {
                child = right;
            }
            if self.items[child] > self.items[parent] {
                self.items.swap(child, parent);
                parent = child;
            } else {
                return;
            }
        }
    }
}

impl<T> PriorityQueue<T> {
    /// Number of elements currently in the queue.
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// True if the queue holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The fixed maximum number of elements.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop every element; capacity is unchanged.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}
