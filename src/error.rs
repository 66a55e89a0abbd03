// Copyright (c) 2024 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Error types.
//!
//! There are two families of errors. [`Error`] is returned by graph
//! construction and by the algorithms. [`HeapError`] signals a misuse of an
//! [`IndexedPriQueue`][crate::collections::IndexedPriQueue]; the algorithms
//! never trigger it on valid input but propagate it as [`Error::Heap`] if
//! they do.
//!
//! Unreachable vertices are not errors, they are part of the normal result.

use thiserror::Error;

/// Misuse of an indexed priority queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// The item is already in the queue, use `decrease_key` instead.
    #[error("item {0} is already in the queue")]
    Duplicate(usize),
    /// The queue already holds `capacity` items.
    #[error("queue is full (capacity {capacity})")]
    Overflow { capacity: usize },
    /// Extraction from an empty queue.
    #[error("queue is empty")]
    Empty,
    /// The item is not in the queue.
    #[error("item {0} is not in the queue")]
    NotPresent(usize),
    /// The new key is not strictly smaller than the current one.
    #[error("new key of item {0} is not smaller than its current key")]
    KeyNotSmaller(usize),
    /// The item is not a valid identity for this queue.
    #[error("item {vertex} out of range (capacity {capacity})")]
    OutOfRange { vertex: usize, capacity: usize },
}

/// Error constructing a graph or running an algorithm on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The number of vertices is zero or too large.
    #[error("invalid number of vertices: {0}")]
    InvalidSize(usize),
    /// A vertex is not in `0..num_vertices`.
    #[error("vertex {vertex} out of range (graph has {num_vertices} vertices)")]
    VertexOutOfRange { vertex: usize, num_vertices: usize },
    /// A negative edge weight was found by an upfront scan.
    #[error("negative weight on edge ({u}, {v})")]
    NegativeWeight { u: usize, v: usize },
    /// The key of `vertex` is not representable by the weight type.
    #[error("key of vertex {vertex} overflows the weight type")]
    Overflow { vertex: usize },
    #[error(transparent)]
    Heap(#[from] HeapError),
}

pub type Result<T> = std::result::Result<T, Error>;
