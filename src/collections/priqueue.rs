/*
 * Copyright (c) 2018, 2024 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

mod binheap;
pub use self::binheap::IndexedBinHeap;

use crate::error::HeapError;

/// A priority queue over the items `0..capacity` supporting decrease-key.
///
/// Items are identified by their index, so no handles have to be stored by
/// the caller. Each item is contained at most once.
pub trait IndexedPriQueue<K> {
    /// Return `true` iff the queue contains no element.
    fn is_empty(&self) -> bool;

    /// Return the number of elements in the queue.
    fn len(&self) -> usize;

    /// Return the number of distinct items the queue can hold.
    fn capacity(&self) -> usize;

    /// Remove all elements from the queue.
    fn clear(&mut self);

    /// Remove all elements and accept the items `0..capacity` afterwards.
    fn reset(&mut self, capacity: usize);

    /// Return `true` iff `item` is currently in the queue.
    fn contains(&self, item: usize) -> bool;

    /// Return the current key of `item` or `None` if it is not in the queue.
    fn key(&self, item: usize) -> Option<&K>;

    /// Push `item` with the given `key` onto the queue.
    ///
    /// Fails if the item is already contained (use `decrease_key`
    /// instead), if it is out of range or if the queue is full.
    fn push(&mut self, item: usize, key: K) -> Result<(), HeapError>;

    /// Decrease the key of `item`.
    ///
    /// Fails if the item is not in the queue or if `key` is not strictly
    /// smaller than its current key. The queue is unchanged on failure.
    fn decrease_key(&mut self, item: usize, key: K) -> Result<(), HeapError>;

    /// Remove and return the element with the smallest key.
    fn pop_min(&mut self) -> Result<(usize, K), HeapError>;
}

impl<'a, P, K> IndexedPriQueue<K> for &'a mut P
where
    P: IndexedPriQueue<K>,
{
    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn capacity(&self) -> usize {
        (**self).capacity()
    }

    fn clear(&mut self) {
        (**self).clear()
    }

    fn reset(&mut self, capacity: usize) {
        (**self).reset(capacity)
    }

    fn contains(&self, item: usize) -> bool {
        (**self).contains(item)
    }

    fn key(&self, item: usize) -> Option<&K> {
        (**self).key(item)
    }

    fn push(&mut self, item: usize, key: K) -> Result<(), HeapError> {
        (**self).push(item, key)
    }

    fn decrease_key(&mut self, item: usize, key: K) -> Result<(), HeapError> {
        (**self).decrease_key(item, key)
    }

    fn pop_min(&mut self) -> Result<(usize, K), HeapError> {
        (**self).pop_min()
    }
}
