// Copyright (c) 2016, 2017, 2020, 2024 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! Indexed binary heap implementation

use super::IndexedPriQueue;
use crate::error::HeapError;

/// Binary min-heap over the items `0..capacity` with decrease-key.
///
/// The heap stores a dense array of `(item, key)` entries ordered as a binary
/// heap by key and, for each possible item, its current position in that
/// array. An item that is not in the heap has position `capacity`.
///
/// # Example
///
/// ```
/// use rs_ixgraph::collections::{IndexedBinHeap, IndexedPriQueue};
///
/// let mut heap = IndexedBinHeap::with_capacity(3);
/// heap.push(0, 5).unwrap();
/// heap.push(1, 3).unwrap();
/// heap.push(2, 8).unwrap();
/// heap.decrease_key(2, 1).unwrap();
///
/// assert_eq!(heap.pop_min(), Ok((2, 1)));
/// assert_eq!(heap.pop_min(), Ok((1, 3)));
/// assert_eq!(heap.pop_min(), Ok((0, 5)));
/// assert!(heap.is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct IndexedBinHeap<K> {
    /// The heap elements.
    entries: Vec<(usize, K)>,
    /// The position of each item in `entries`, or `slot_of.len()` if the
    /// item is not on the heap.
    slot_of: Vec<usize>,
}

impl<K> IndexedBinHeap<K> {
    /// Create an empty heap for the items `0..capacity`.
    pub fn with_capacity(capacity: usize) -> Self {
        IndexedBinHeap {
            entries: Vec::with_capacity(capacity),
            slot_of: vec![capacity; capacity],
        }
    }

    /// Return the element with the smallest key without removing it.
    pub fn peek_min(&self) -> Option<(usize, &K)> {
        self.entries.first().map(|(item, key)| (*item, key))
    }

    /// Position of `item` on the heap.
    fn slot(&self, item: usize) -> Option<usize> {
        self.slot_of.get(item).copied().filter(|&pos| pos < self.entries.len())
    }

    /// Swap the entries at positions `i` and `j` and update their slots.
    fn swap_entries(&mut self, i: usize, j: usize) {
        self.entries.swap(i, j);
        self.slot_of[self.entries[i].0] = i;
        self.slot_of[self.entries[j].0] = j;
    }
}

impl<K> IndexedBinHeap<K>
where
    K: PartialOrd,
{
    /// Move the element at `pos` up in the heap until its parent does not
    /// have a larger key or the root node is reached.
    fn upheap(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.entries[pos].1 < self.entries[parent].1 {
                self.swap_entries(pos, parent);
                pos = parent;
            } else {
                break;
            }
        }
    }

    /// Move the element at `pos` down in the heap until no child has a
    /// smaller key.
    fn downheap(&mut self, mut pos: usize) {
        let n = self.entries.len();
        loop {
            let left = 2 * pos + 1;
            let right = left + 1;
            if left >= n {
                break;
            }
            // ties go to the left child
            let child = if right < n && self.entries[right].1 < self.entries[left].1 {
                right
            } else {
                left
            };
            if self.entries[child].1 < self.entries[pos].1 {
                self.swap_entries(pos, child);
                pos = child;
            } else {
                break;
            }
        }
    }
}

impl<K> IndexedPriQueue<K> for IndexedBinHeap<K>
where
    K: PartialOrd,
{
    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn capacity(&self) -> usize {
        self.slot_of.len()
    }

    fn clear(&mut self) {
        let absent = self.slot_of.len();
        for &(item, _) in &self.entries {
            self.slot_of[item] = absent;
        }
        self.entries.clear();
    }

    fn reset(&mut self, capacity: usize) {
        if capacity == self.slot_of.len() {
            self.clear();
        } else {
            self.entries.clear();
            self.entries.reserve(capacity);
            self.slot_of.clear();
            self.slot_of.resize(capacity, capacity);
        }
    }

    fn contains(&self, item: usize) -> bool {
        self.slot(item).is_some()
    }

    fn key(&self, item: usize) -> Option<&K> {
        self.slot(item).map(|pos| &self.entries[pos].1)
    }

    fn push(&mut self, item: usize, key: K) -> Result<(), HeapError> {
        let capacity = self.slot_of.len();
        if item >= capacity {
            return Err(HeapError::OutOfRange { vertex: item, capacity });
        }
        if self.contains(item) {
            return Err(HeapError::Duplicate(item));
        }
        if self.entries.len() >= capacity {
            return Err(HeapError::Overflow { capacity });
        }

        let pos = self.entries.len();
        self.entries.push((item, key));
        self.slot_of[item] = pos;
        self.upheap(pos);
        Ok(())
    }

    fn decrease_key(&mut self, item: usize, key: K) -> Result<(), HeapError> {
        let pos = self.slot(item).ok_or(HeapError::NotPresent(item))?;
        if key < self.entries[pos].1 {
            self.entries[pos].1 = key;
            self.upheap(pos);
            Ok(())
        } else {
            Err(HeapError::KeyNotSmaller(item))
        }
    }

    fn pop_min(&mut self) -> Result<(usize, K), HeapError> {
        if self.entries.is_empty() {
            return Err(HeapError::Empty);
        }

        // the last element replaces the root
        let (item, key) = self.entries.swap_remove(0);
        self.slot_of[item] = self.slot_of.len();
        if let Some(&(root, _)) = self.entries.first() {
            self.slot_of[root] = 0;
            self.downheap(0);
        }
        Ok((item, key))
    }
}
