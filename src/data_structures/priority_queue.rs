use std::fmt::Debug;

use crate::{Error, Result};

/// A binary min-heap of (vertex, priority) entries for shortest path search
///
/// There is no decrease-key: pushing a vertex that is already queued adds a
/// second entry, and callers must tolerate stale entries when popping.
/// Priorities only need a partial order; incomparable priorities never swap.
#[derive(Debug, Clone)]
pub struct MinHeap<V, P>
where
    V: Copy + Debug,
    P: PartialOrd + Copy + Debug,
{
    /// Heap-ordered entries, root at index 0
    heap: Vec<(V, P)>,
}

impl<V, P> Default for MinHeap<V, P>
where
    V: Copy + Debug,
    P: PartialOrd + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, P> MinHeap<V, P>
where
    V: Copy + Debug,
    P: PartialOrd + Copy + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        MinHeap { heap: Vec::new() }
    }

    /// Creates an empty priority queue with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        MinHeap {
            heap: Vec::with_capacity(capacity),
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of elements in the priority queue
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes an element with the given priority into the priority queue
    pub fn push(&mut self, vertex: V, priority: P) {
        self.heap.push((vertex, priority));
        self.bubble_up(self.heap.len() - 1);
    }

    /// Removes and returns the entry with the smallest priority
    ///
    /// Fails with `Error::EmptyQueue` when there is nothing to extract.
    pub fn extract_min(&mut self) -> Result<(V, P)> {
        self.pop().ok_or(Error::EmptyQueue)
    }

    /// Removes the entry with the smallest priority, if any
    pub fn pop(&mut self) -> Option<(V, P)> {
        let last = self.heap.pop()?;
        if self.heap.is_empty() {
            return Some(last);
        }

        let min = std::mem::replace(&mut self.heap[0], last);
        self.sink_down(0);
        Some(min)
    }

    /// Returns the entry with the smallest priority without removing it
    pub fn peek(&self) -> Option<(V, P)> {
        self.heap.first().copied()
    }

    /// Clears the priority queue
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    fn bubble_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.heap[index].1 < self.heap[parent].1 {
                self.heap.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn sink_down(&mut self, mut index: usize) {
        let len = self.heap.len();

        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut swap = None;

            if left < len && self.heap[left].1 < self.heap[index].1 {
                swap = Some(left);
            }

            if right < len {
                // Right wins only when strictly smaller than the current pick
                let pick = swap.unwrap_or(index);
                if self.heap[right].1 < self.heap[pick].1 {
                    swap = Some(right);
                }
            }

            match swap {
                Some(child) => {
                    self.heap.swap(index, child);
                    index = child;
                }
                None => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_extract_in_priority_order() {
        let mut queue = MinHeap::new();
        queue.push(1usize, 30u32);
        queue.push(2, 10);
        queue.push(3, 20);
        queue.push(4, 5);

        assert_eq!(queue.len(), 4);
        assert_eq!(queue.peek(), Some((4, 5)));
        assert_eq!(queue.extract_min().unwrap(), (4, 5));
        assert_eq!(queue.extract_min().unwrap(), (2, 10));
        assert_eq!(queue.extract_min().unwrap(), (3, 20));
        assert_eq!(queue.extract_min().unwrap(), (1, 30));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_extract_from_empty_queue_fails() {
        let mut queue: MinHeap<usize, u32> = MinHeap::new();
        assert_eq!(queue.extract_min(), Err(Error::EmptyQueue));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn test_duplicate_vertices_are_separate_entries() {
        let mut queue = MinHeap::with_capacity(4);
        queue.push(7usize, 9.0);
        queue.push(7, 3.0);

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.pop(), Some((7, 3.0)));
        assert_eq!(queue.pop(), Some((7, 9.0)));
    }

    #[test]
    fn test_clear() {
        let mut queue = MinHeap::new();
        queue.push(0usize, 1u8);
        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.peek(), None);
    }

    proptest! {
        /// Repeated extraction yields priorities in non-decreasing order.
        #[test]
        fn extraction_is_non_decreasing(priorities in prop::collection::vec(0u32..1000, 0..200)) {
            let mut queue = MinHeap::new();
            for (vertex, &priority) in priorities.iter().enumerate() {
                queue.push(vertex, priority);
            }

            let mut extracted = Vec::with_capacity(priorities.len());
            while !queue.is_empty() {
                extracted.push(queue.extract_min().unwrap().1);
            }

            let mut expected = priorities.clone();
            expected.sort_unstable();
            prop_assert_eq!(extracted, expected);
        }

        /// Interleaved pushes and pops always hand out the current minimum.
        #[test]
        fn pop_returns_current_minimum(ops in prop::collection::vec(prop::option::of(0u32..50), 1..100)) {
            let mut queue = MinHeap::new();
            let mut shadow: Vec<u32> = Vec::new();

            for op in ops {
                match op {
                    Some(priority) => {
                        queue.push(0usize, priority);
                        shadow.push(priority);
                    }
                    None => {
                        let expected = shadow.iter().copied().min();
                        if let Some(min) = expected {
                            let pos = shadow.iter().position(|&p| p == min).unwrap();
                            shadow.swap_remove(pos);
                        }
                        prop_assert_eq!(queue.pop().map(|(_, p)| p), expected);
                    }
                }
            }
        }
    }
}
