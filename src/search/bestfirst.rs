/*
 * Copyright (c) 2017, 2018, 2021, 2022, 2024 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Best-first search with an indexed priority queue.
//!
//! The search starts with the start vertex at key zero. In each step the
//! vertex with the smallest key is extracted from the queue and *settled*.
//! Then all outgoing edges to unsettled neighbors are *relaxed*: the
//! candidate key `Accum::accum(key(u), weight(u,v))` is computed and, if it
//! is strictly smaller than the best known key of `v`, `u` becomes the parent
//! of `v` and `v` is either pushed onto the queue (first discovery) or its key
//! is decreased.
//!
//! With [`SumAccumulator`][crate::search::SumAccumulator] this is Dijkstra's
//! algorithm, with [`WeightAccumulator`][crate::search::WeightAccumulator] it
//! is Prim's algorithm.
//!
//! # Example
//!
//! ```
//! use rs_ixgraph::AdjListGraph;
//! use rs_ixgraph::collections::IndexedBinHeap;
//! use rs_ixgraph::search::{bestfirst, Silent, Step, SumAccumulator};
//!
//! let g = AdjListGraph::from_edges(4, vec![(0, 1, 2), (1, 2, 2), (0, 2, 5), (2, 3, 1)]).unwrap();
//!
//! let steps = bestfirst::start_generic::<_, _, _, SumAccumulator>(&g, 0, IndexedBinHeap::default(), Silent)
//!     .unwrap()
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap();
//!
//! assert_eq!(
//!     steps,
//!     vec![
//!         Step { vertex: 0, parent: 0, key: 0 },
//!         Step { vertex: 1, parent: 0, key: 2 },
//!         Step { vertex: 2, parent: 1, key: 4 },
//!         Step { vertex: 3, parent: 2, key: 5 },
//!     ]
//! );
//! ```

use crate::adjacencies::Adjacencies;
use crate::collections::IndexedPriQueue;
use crate::error::{Error, Result};
use crate::search::{Accumulator, Event, Observer};

use crate::num::traits::Zero;

use std::marker::PhantomData;

/// A settled vertex.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step<W> {
    /// the settled vertex
    pub vertex: usize,
    /// its parent, the start vertex is its own parent
    pub parent: usize,
    /// its final key
    pub key: W,
}

/// Best-first search iterator.
///
/// The iterator returns the settled vertices in order. It stops after the
/// first error.
pub struct BestFirst<'a, A, P, O, Accum>
where
    A: Adjacencies,
{
    adj: &'a A,
    heap: P,
    observer: O,
    /// best known key of each vertex, `None` if not reached yet
    keys: Vec<Option<A::Weight>>,
    parents: Vec<Option<usize>>,
    settled: Vec<bool>,
    failed: bool,
    phantom: PhantomData<Accum>,
}

/// Start and return a best-first search iterator.
///
/// The queue `heap` is reset to the number of vertices of `adj` before it is
/// used, so the same queue can be reused for multiple searches. All state
/// besides the queue is local to the returned iterator.
///
/// Fails with [`Error::VertexOutOfRange`] if `src` is not a vertex.
///
/// # Parameters
///
/// - `adj`: adjacency information for the graph
/// - `src`: the start vertex
/// - `heap`: the priority queue
/// - `observer`: receives the events of the search
pub fn start_generic<'a, A, P, O, Accum>(
    adj: &'a A,
    src: usize,
    mut heap: P,
    observer: O,
) -> Result<BestFirst<'a, A, P, O, Accum>>
where
    A: Adjacencies,
    A::Weight: PartialOrd + Zero,
    P: IndexedPriQueue<A::Weight>,
    O: Observer<A::Weight>,
    Accum: Accumulator<A::Weight>,
{
    let n = adj.num_vertices();
    if src >= n {
        return Err(Error::VertexOutOfRange {
            vertex: src,
            num_vertices: n,
        });
    }

    let mut keys = vec![None; n];
    let mut parents = vec![None; n];
    keys[src] = Some(A::Weight::zero());
    parents[src] = Some(src);

    heap.reset(n);
    heap.push(src, A::Weight::zero())?;

    Ok(BestFirst {
        adj,
        heap,
        observer,
        keys,
        parents,
        settled: vec![false; n],
        failed: false,
        phantom: PhantomData,
    })
}

impl<'a, A, P, O, Accum> Iterator for BestFirst<'a, A, P, O, Accum>
where
    A: Adjacencies,
    A::Weight: PartialOrd,
    P: IndexedPriQueue<A::Weight>,
    O: Observer<A::Weight>,
    Accum: Accumulator<A::Weight>,
{
    type Item = Result<Step<A::Weight>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let result = self.settle_next().transpose();
        self.failed = matches!(result, Some(Err(_)));
        result
    }
}

impl<'a, A, P, O, Accum> BestFirst<'a, A, P, O, Accum>
where
    A: Adjacencies,
    A::Weight: PartialOrd,
    P: IndexedPriQueue<A::Weight>,
    O: Observer<A::Weight>,
    Accum: Accumulator<A::Weight>,
{
    fn settle_next(&mut self) -> Result<Option<Step<A::Weight>>> {
        while !self.heap.is_empty() {
            let (u, key) = self.heap.pop_min()?;
            // each vertex is pushed at most once, but never settle twice
            if self.settled[u] {
                continue;
            }
            // mark before relaxing, otherwise `u` could be pushed again
            self.settled[u] = true;
            self.observer.notify(Event::Settled { vertex: u, key });
            self.relax(u, key)?;
            return Ok(Some(Step {
                vertex: u,
                parent: self.parents[u].unwrap_or(u),
                key,
            }));
        }
        Ok(None)
    }

    fn relax(&mut self, u: usize, key: A::Weight) -> Result<()> {
        let n = self.settled.len();
        let adj = self.adj;
        for (v, weight) in adj.neighs(u) {
            if v >= n {
                return Err(Error::VertexOutOfRange {
                    vertex: v,
                    num_vertices: n,
                });
            }
            if self.settled[v] {
                continue;
            }
            let newkey = Accum::accum(key, weight).ok_or(Error::Overflow { vertex: v })?;
            // strict improvement, the first of several equal candidates wins
            let improves = match self.keys[v] {
                Some(oldkey) => newkey < oldkey,
                None => true,
            };
            if !improves {
                continue;
            }
            self.keys[v] = Some(newkey);
            self.parents[v] = Some(u);
            if self.heap.contains(v) {
                self.heap.decrease_key(v, newkey)?;
                self.observer.notify(Event::Improved {
                    from: u,
                    to: v,
                    key: newkey,
                });
            } else {
                self.heap.push(v, newkey)?;
                self.observer.notify(Event::Discovered {
                    from: u,
                    to: v,
                    key: newkey,
                });
            }
        }
        Ok(())
    }

    /// Run the search completely.
    pub fn run(&mut self) -> Result<()> {
        for step in self {
            step?;
        }
        Ok(())
    }

    /// Return `true` iff `u` has been settled.
    pub fn is_settled(&self, u: usize) -> bool {
        self.settled[u]
    }

    /// Return the best known key of each vertex.
    ///
    /// For settled vertices this is the final key.
    pub fn keys(&self) -> &[Option<A::Weight>] {
        &self.keys
    }

    /// Return the parent of each vertex on its best known path.
    pub fn parents(&self) -> &[Option<usize>] {
        &self.parents
    }

    /// Return the keys and the parents.
    pub fn into_parts(self) -> (Vec<Option<A::Weight>>, Vec<Option<usize>>) {
        (self.keys, self.parents)
    }
}
