/*
 * Copyright (c) 2017, 2018, 2020, 2024 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! # Graph search.
//!
//! This module contains the best-first search shared by Dijkstra's and
//! Prim's algorithm, the observer interface used to trace a search and the
//! reconstruction of paths from parent arrays.
//!
//! The search is implemented as an iterator. It produces the vertices in the
//! order in which they are settled, together with their parent and their
//! final key.

pub mod bestfirst;
pub use self::bestfirst::{BestFirst, Step};

use crate::num::traits::CheckedAdd;

use std::fmt::Debug;

/// A binary operation used to accumulate the key of a vertex and the weight
/// of an outgoing edge.
///
/// The default operation for Dijkstra's algorithm is the sum, for Prim's
/// algorithm it is simply the edge weight ignoring the key. `None` signals
/// that the result is not representable.
pub trait Accumulator<T> {
    fn accum(key: T, weight: T) -> Option<T>;
}

/// Accumulates by adding key and weight.
pub struct SumAccumulator;

impl<T> Accumulator<T> for SumAccumulator
where
    T: CheckedAdd,
{
    fn accum(key: T, weight: T) -> Option<T> {
        key.checked_add(&weight)
    }
}

/// Accumulates by taking the edge weight.
pub struct WeightAccumulator;

impl<T> Accumulator<T> for WeightAccumulator {
    fn accum(_key: T, weight: T) -> Option<T> {
        Some(weight)
    }
}

/// A single step of a search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event<W> {
    /// `vertex` has been extracted from the queue with its final key.
    Settled { vertex: usize, key: W },
    /// `to` has been reached for the first time via `from` and pushed.
    Discovered { from: usize, to: usize, key: W },
    /// The key of `to` has been decreased because of the edge from `from`.
    Improved { from: usize, to: usize, key: W },
}

/// Receives the events of a search.
///
/// Any closure `FnMut(Event<W>)` is an observer.
pub trait Observer<W> {
    fn notify(&mut self, event: Event<W>);
}

impl<F, W> Observer<W> for F
where
    F: FnMut(Event<W>),
{
    fn notify(&mut self, event: Event<W>) {
        (*self)(event)
    }
}

/// Observer ignoring all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl<W> Observer<W> for Silent {
    fn notify(&mut self, _event: Event<W>) {}
}

/// Observer writing every event to the `log` facade at trace level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogObserver;

impl<W> Observer<W> for LogObserver
where
    W: Debug,
{
    fn notify(&mut self, event: Event<W>) {
        match event {
            Event::Settled { vertex, key } => log::trace!("settle vertex {} (key {:?})", vertex, key),
            Event::Discovered { from, to, key } => log::trace!("push vertex {} via {} (key {:?})", to, from, key),
            Event::Improved { from, to, key } => log::trace!("decrease vertex {} via {} (key {:?})", to, from, key),
        }
    }
}

/// Compute the path from the root to `dst` from a parent array.
///
/// `parents[v]` is the predecessor of `v`, the root is its own parent and
/// `None` marks vertices that have never been reached.
///
/// Returns the sequence of vertices from the root to `dst` (both included)
/// or `None` if `dst` has not been reached. `None` is also returned if the
/// parents do not lead to a root.
///
/// # Example
///
/// ```
/// use rs_ixgraph::search::path_from_parents;
///
/// let parents = [Some(0), Some(3), None, Some(0), Some(1)];
/// assert_eq!(path_from_parents(&parents, 4), Some(vec![0, 3, 1, 4]));
/// assert_eq!(path_from_parents(&parents, 0), Some(vec![0]));
/// assert_eq!(path_from_parents(&parents, 2), None);
/// ```
pub fn path_from_parents(parents: &[Option<usize>], dst: usize) -> Option<Vec<usize>> {
    let mut path = vec![dst];
    let mut u = dst;
    loop {
        let p = (*parents.get(u)?)?;
        if p == u {
            break;
        }
        // a path visits each vertex at most once
        if path.len() >= parents.len() {
            return None;
        }
        path.push(p);
        u = p;
    }
    path.reverse();
    Some(path)
}
