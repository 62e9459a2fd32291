//! Array-backed binary min-heap
//!
//! Elements live in a dense `Vec` read as a complete binary tree: the
//! children of index `i` sit at `2i + 1` and `2i + 2`, its parent at
//! `(i - 1) / 2`. Every parent compares less than or equal to its children,
//! so the minimum is always at index 0.

use crate::error::{QueueError, RecordError, Result};
use crate::record::Record;
use crate::storage::TextStore;
use tracing::{debug, warn};

fn parent(index: usize) -> usize {
    (index - 1) / 2
}

fn left_child(index: usize) -> usize {
    2 * index + 1
}

fn right_child(index: usize) -> usize {
    2 * index + 2
}

/// Priority queue that always yields its smallest element first
#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    items: Vec<T>,
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Ord> MinHeap<T> {
    /// Create an empty heap
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored elements
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Remove every element
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Elements in level order (the underlying array layout)
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Add an element, restoring the heap property by sifting it upward
    pub fn insert(&mut self, item: T) {
        self.items.push(item);
        self.sift_up(self.items.len() - 1);
    }

    /// The smallest element, without removing it
    ///
    /// # Returns
    /// `QueueError::EmptyQueue` if there is nothing to peek at
    pub fn peek_min(&self) -> Result<&T> {
        self.items.first().ok_or(QueueError::EmptyQueue)
    }

    /// Remove and return the smallest element
    ///
    /// The last element moves into the root slot and is sifted downward.
    ///
    /// # Returns
    /// `QueueError::EmptyQueue` if the heap is empty
    pub fn extract_min(&mut self) -> Result<T> {
        if self.items.is_empty() {
            return Err(QueueError::EmptyQueue);
        }

        let min = self.items.swap_remove(0);
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        Ok(min)
    }

    /// Every element in ascending order, leaving the heap untouched
    pub fn ascending_snapshot(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.sorted_refs().into_iter().cloned().collect()
    }

    /// Check the heap property over the whole array
    pub fn is_valid(&self) -> bool {
        (1..self.items.len()).all(|i| self.items[parent(i)] <= self.items[i])
    }

    fn sorted_refs(&self) -> Vec<&T> {
        let mut refs: Vec<&T> = self.items.iter().collect();
        refs.sort_unstable();
        refs
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = parent(index);
            if self.items[index] < self.items[parent] {
                self.items.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.items.len();
        loop {
            let left = left_child(index);
            if left >= len {
                break;
            }

            // The right child only wins when strictly smaller
            let right = right_child(index);
            let smaller = if right < len && self.items[right] < self.items[left] {
                right
            } else {
                left
            };

            if self.items[smaller] < self.items[index] {
                self.items.swap(index, smaller);
                index = smaller;
            } else {
                break;
            }
        }
    }
}

/// A store line that [`MinHeap::load_from_skipping`] could not decode
#[derive(Debug)]
pub struct SkippedRecord {
    /// Always `QueueError::MalformedRecord`
    pub error: QueueError,
    /// The line exactly as stored, without its terminator
    pub raw: Vec<u8>,
}

impl<T: Ord + Record> MinHeap<T> {
    /// Replace the contents with the records in `store`
    ///
    /// A missing store leaves the heap empty. Blank lines are ignored. The
    /// first line that fails to decode (including one that is not UTF-8)
    /// aborts the load with `QueueError::MalformedRecord`, leaving the heap
    /// empty.
    pub fn load_from(&mut self, store: &TextStore) -> Result<()> {
        self.load_with(store, |error, _| Err(error))?;
        debug!(path = %store.file_path().display(), count = self.len(), "loaded queue");
        Ok(())
    }

    /// Like [`MinHeap::load_from`], but skips records that fail to decode
    ///
    /// # Returns
    /// One [`SkippedRecord`] per skipped line. Store I/O errors are still
    /// returned as `Err`.
    pub fn load_from_skipping(&mut self, store: &TextStore) -> Result<Vec<SkippedRecord>> {
        let mut skipped = Vec::new();
        self.load_with(store, |error, raw| {
            warn!(path = %store.file_path().display(), "skipping record: {}", error);
            skipped.push(SkippedRecord { error, raw });
            Ok(())
        })?;

        debug!(
            path = %store.file_path().display(),
            count = self.len(),
            skipped = skipped.len(),
            "loaded queue"
        );
        Ok(skipped)
    }

    /// Clear, then decode every non-blank store line into the heap
    ///
    /// `on_malformed` gets each undecodable line (numbered from 1) and decides
    /// whether loading continues; an `Err` from it empties the heap.
    fn load_with<F>(&mut self, store: &TextStore, mut on_malformed: F) -> Result<()>
    where
        F: FnMut(QueueError, Vec<u8>) -> Result<()>,
    {
        self.clear();
        let Some(lines) = store.read_lines()? else {
            return Ok(());
        };

        for (index, raw) in lines.into_iter().enumerate() {
            let decoded = match std::str::from_utf8(&raw) {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => T::decode(line),
                Err(_) => Err(RecordError::InvalidUtf8),
            };

            match decoded {
                Ok(item) => self.insert(item),
                Err(source) => {
                    let error = QueueError::MalformedRecord {
                        line: index + 1,
                        source,
                    };
                    if let Err(e) = on_malformed(error, raw) {
                        self.clear();
                        return Err(e);
                    }
                }
            }
        }
        Ok(())
    }

    /// Write every element to `store` in ascending order, one record per line
    pub fn save_to(&self, store: &TextStore) -> Result<()> {
        let lines = self.sorted_refs().into_iter().map(|item| item.encode());
        store.write_lines(lines)?;
        debug!(path = %store.file_path().display(), count = self.len(), "saved queue");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heap_of(values: &[i32]) -> MinHeap<i32> {
        let mut heap = MinHeap::new();
        for &v in values {
            heap.insert(v);
        }
        heap
    }

    #[test]
    fn test_index_arithmetic() {
        assert_eq!(left_child(0), 1);
        assert_eq!(right_child(0), 2);
        assert_eq!(left_child(3), 7);
        assert_eq!(right_child(3), 8);
        assert_eq!(parent(1), 0);
        assert_eq!(parent(2), 0);
        assert_eq!(parent(7), 3);
        assert_eq!(parent(8), 3);
    }

    #[test]
    fn test_empty_heap() {
        let mut heap: MinHeap<i32> = MinHeap::new();
        assert_eq!(heap.len(), 0);
        assert!(heap.is_empty());
        assert!(matches!(heap.peek_min(), Err(QueueError::EmptyQueue)));
        assert!(matches!(heap.extract_min(), Err(QueueError::EmptyQueue)));
    }

    #[test]
    fn test_insert_sifts_new_minimum_to_root() {
        let mut heap = heap_of(&[5, 7, 9]);
        assert_eq!(heap.as_slice(), &[5, 7, 9]);

        heap.insert(1);
        // 1 lands at index 3, swaps with 7 then with 5
        assert_eq!(heap.as_slice(), &[1, 5, 9, 7]);
        assert_eq!(*heap.peek_min().unwrap(), 1);
        assert!(heap.is_valid());
    }

    #[test]
    fn test_insert_equal_to_parent_does_not_swap() {
        let heap = heap_of(&[3, 3]);
        assert_eq!(heap.as_slice(), &[3, 3]);
    }

    #[test]
    fn test_extract_min_sifts_down_toward_smaller_child() {
        let mut heap = heap_of(&[1, 4, 2, 8, 9, 3]);
        assert_eq!(heap.as_slice(), &[1, 4, 2, 8, 9, 3]);

        assert_eq!(heap.extract_min().unwrap(), 1);
        // 3 moves to the root and swaps with the right child 2
        assert_eq!(heap.as_slice(), &[2, 4, 3, 8, 9]);
        assert!(heap.is_valid());
    }

    #[test]
    fn test_sift_down_prefers_left_child_on_tie() {
        let mut heap = MinHeap {
            items: vec![1, 2, 2, 5],
        };
        assert_eq!(heap.extract_min().unwrap(), 1);
        // 5 moves to the root; both children are 2, the left one is taken
        assert_eq!(heap.as_slice(), &[2, 5, 2]);
    }

    #[test]
    fn test_extract_drains_in_order() {
        let mut heap = heap_of(&[6, 2, 9, 2, 7, 1, 8, 3]);
        let mut drained = Vec::new();
        while let Ok(v) = heap.extract_min() {
            drained.push(v);
        }
        assert_eq!(drained, vec![1, 2, 2, 3, 6, 7, 8, 9]);
        assert!(heap.is_empty());
    }

    #[test]
    fn test_single_element_extract() {
        let mut heap = heap_of(&[42]);
        assert_eq!(heap.extract_min().unwrap(), 42);
        assert!(heap.is_empty());
    }

    #[test]
    fn test_ascending_snapshot_is_non_destructive() {
        let heap = heap_of(&[4, 1, 3, 2]);
        let layout = heap.as_slice().to_vec();

        let first = heap.ascending_snapshot();
        let second = heap.ascending_snapshot();
        assert_eq!(first, vec![1, 2, 3, 4]);
        assert_eq!(first, second);
        assert_eq!(heap.len(), 4);
        assert_eq!(heap.as_slice(), layout.as_slice());
    }

    #[test]
    fn test_is_valid_detects_violation() {
        let heap = MinHeap {
            items: vec![2, 1, 3],
        };
        assert!(!heap.is_valid());
    }
}
