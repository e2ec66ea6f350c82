use std::cmp::Ordering;
use std::fmt;

/// Binary min-heap ordered by a comparator given at construction.
///
/// The comparator returns [`Ordering::Less`] when the first item has a strictly higher priority
/// than the second one. Priorities are never cached: the comparator is called every time two
/// items are compared, so it may read state that changes while items are queued (for example the
/// current distance of a vertex). Items are not deduplicated.
pub struct PriorityQueue<T, F> {
    heap: Vec<T>,
    compare: F,
}

impl<T, F> PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    pub fn new(compare: F) -> Self {
        Self {
            heap: Vec::new(),
            compare,
        }
    }

    pub fn with_capacity(capacity: usize, compare: F) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            compare,
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Gets the item with the highest priority without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.heap.first()
    }

    pub fn enqueue(&mut self, item: T) {
        self.heap.push(item);
        self.sift_up(self.heap.len() - 1);
    }

    /// Removes and returns the item with the highest priority.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.heap.is_empty() {
            return None;
        }

        let root = self.heap.swap_remove(0);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }

        Some(root)
    }

    fn has_priority(&self, a: usize, b: usize) -> bool {
        (self.compare)(&self.heap[a], &self.heap[b]) == Ordering::Less
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.has_priority(index, parent) {
                break;
            }
            self.heap.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut first = index;

            if left < self.heap.len() && self.has_priority(left, first) {
                first = left;
            }

            // the right child wins only if strictly better than the left one
            if right < self.heap.len() && self.has_priority(right, first) {
                first = right;
            }

            if first == index {
                break;
            }

            self.heap.swap(index, first);
            index = first;
        }
    }
}

impl<T: fmt::Debug, F> fmt::Debug for PriorityQueue<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("heap", &self.heap)
            .finish_non_exhaustive()
    }
}
