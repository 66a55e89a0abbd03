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

//! Dijkstra's shortest path algorithm.
//!
//! Dijkstra's algorithm computes the shortest path from some start vertex $s
//! \in V$ to all other vertices in a directed graph. Each edge is assigned a
//! non-negative weight (or length) $w \colon E \to \mathbb{R}_+$. For
//! negative weights the result is meaningless; use [`run_nonnegative`] to
//! reject such graphs upfront.
//!
//! Dijkstra's algorithm is a [best-first search][crate::search::bestfirst]
//! where the key of a vertex is the length of the best known path.
//!
//! # Example
//!
//! ```
//! use rs_ixgraph::AdjListGraph;
//! use rs_ixgraph::shortestpath::dijkstra;
//!
//! //      10      5
//! //  0 ----> 1 ----> 2
//! //  |       |       |
//! //  |5      |3      |2
//! //  v       v       v
//! //  3 ----> 4 <-----+
//! //      1
//! let g = AdjListGraph::from_edges(5, vec![(0, 1, 10), (0, 3, 5), (1, 2, 5), (1, 4, 3), (2, 4, 2), (3, 4, 1)]).unwrap();
//!
//! let paths = dijkstra::run(&g, 0).unwrap();
//! assert_eq!(paths.distances(), &[Some(0), Some(10), Some(15), Some(5), Some(6)]);
//! assert_eq!(paths.path_to(2), Some(vec![0, 1, 2]));
//! assert_eq!(paths.path_to(4), Some(vec![0, 3, 4]));
//! ```

use crate::adjacencies::Adjacencies;
use crate::collections::{IndexedBinHeap, IndexedPriQueue};
use crate::error::{Error, Result};
use crate::search::{bestfirst, path_from_parents, LogObserver, Observer, Silent, SumAccumulator};

use crate::num::traits::{CheckedAdd, Zero};

use std::fmt::Debug;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// The result of Dijkstra's algorithm.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct ShortestPaths<W> {
    start: usize,
    distances: Vec<Option<W>>,
    parents: Vec<Option<usize>>,
}

impl<W> ShortestPaths<W>
where
    W: Copy,
{
    /// Return the start vertex.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Return the length of a shortest path from the start to `v`.
    ///
    /// Returns `None` if `v` is not reachable (or not a vertex).
    pub fn distance(&self, v: usize) -> Option<W> {
        self.distances.get(v).copied().flatten()
    }

    /// Return the distance of each vertex, `None` means unreachable.
    pub fn distances(&self) -> &[Option<W>] {
        &self.distances
    }

    /// Return the predecessor of `v` on a shortest path.
    ///
    /// The start vertex is its own parent, unreachable vertices have none.
    pub fn parent(&self, v: usize) -> Option<usize> {
        self.parents.get(v).copied().flatten()
    }

    /// Return the parent of each vertex.
    pub fn parents(&self) -> &[Option<usize>] {
        &self.parents
    }

    /// Return `true` iff `v` is reachable from the start.
    pub fn is_reachable(&self, v: usize) -> bool {
        self.distance(v).is_some()
    }

    /// Return the vertices of a shortest path from the start to `v`.
    pub fn path_to(&self, v: usize) -> Option<Vec<usize>> {
        path_from_parents(&self.parents, v)
    }

    /// Return the distances and the parents.
    pub fn into_parts(self) -> (Vec<Option<W>>, Vec<Option<usize>>) {
        (self.distances, self.parents)
    }
}

/// Run Dijkstra's algorithm from `start`.
///
/// Each step of the algorithm is logged at trace level.
///
/// Fails with [`Error::VertexOutOfRange`] if `start` is not a vertex.
pub fn run<A>(adj: &A, start: usize) -> Result<ShortestPaths<A::Weight>>
where
    A: Adjacencies,
    A::Weight: PartialOrd + Zero + CheckedAdd + Debug,
{
    run_with_observer(adj, start, LogObserver)
}

/// Run Dijkstra's algorithm from `start` and report each step to `observer`.
///
/// # Example
///
/// ```
/// use rs_ixgraph::AdjListGraph;
/// use rs_ixgraph::search::Event;
/// use rs_ixgraph::shortestpath::dijkstra;
///
/// let g = AdjListGraph::from_edges(3, vec![(0, 1, 4), (0, 2, 1), (2, 1, 2)]).unwrap();
///
/// let mut settled = vec![];
/// let observer = |e: Event<i64>| {
///     if let Event::Settled { vertex, .. } = e {
///         settled.push(vertex)
///     }
/// };
/// dijkstra::run_with_observer(&g, 0, observer).unwrap();
/// assert_eq!(settled, vec![0, 2, 1]);
/// ```
pub fn run_with_observer<A, O>(adj: &A, start: usize, observer: O) -> Result<ShortestPaths<A::Weight>>
where
    A: Adjacencies,
    A::Weight: PartialOrd + Zero + CheckedAdd,
    O: Observer<A::Weight>,
{
    run_with_data(adj, start, IndexedBinHeap::with_capacity(adj.num_vertices()), observer)
}

/// Run Dijkstra's algorithm from `start` with a custom priority queue.
///
/// The queue is reset before it is used, so it can be reused for several
/// runs (e.g. by passing `&mut heap`).
pub fn run_with_data<A, P, O>(adj: &A, start: usize, heap: P, observer: O) -> Result<ShortestPaths<A::Weight>>
where
    A: Adjacencies,
    A::Weight: PartialOrd + Zero + CheckedAdd,
    P: IndexedPriQueue<A::Weight>,
    O: Observer<A::Weight>,
{
    log::debug!("dijkstra from vertex {} ({} vertices)", start, adj.num_vertices());

    let mut search = bestfirst::start_generic::<_, _, _, SumAccumulator>(adj, start, heap, observer)?;
    search.run()?;
    let (distances, parents) = search.into_parts();

    log::debug!(
        "dijkstra from vertex {} reached {} vertices",
        start,
        distances.iter().filter(|d| d.is_some()).count()
    );

    Ok(ShortestPaths {
        start,
        distances,
        parents,
    })
}

/// Run Dijkstra's algorithm from `start` after checking that no edge has a
/// negative weight.
///
/// Fails with [`Error::NegativeWeight`] for the first negative edge found.
pub fn run_nonnegative<A>(adj: &A, start: usize) -> Result<ShortestPaths<A::Weight>>
where
    A: Adjacencies,
    A::Weight: PartialOrd + Zero + CheckedAdd + Debug,
{
    for u in 0..adj.num_vertices() {
        if let Some((v, _)) = adj.neighs(u).find(|&(_, w)| w < A::Weight::zero()) {
            return Err(Error::NegativeWeight { u, v });
        }
    }
    run(adj, start)
}

/// Compute a shortest path from `src` to `dst`.
///
/// The search stops as soon as `dst` is settled. Returns the vertices on the
/// path and its length, or `None` if `dst` is not reachable.
///
/// # Example
///
/// ```
/// use rs_ixgraph::AdjListGraph;
/// use rs_ixgraph::shortestpath::dijkstra;
///
/// let g = AdjListGraph::from_undirected_edges(4, vec![(0, 1, 7), (0, 2, 2), (2, 1, 3)]).unwrap();
///
/// assert_eq!(dijkstra::find_path(&g, 0, 1).unwrap(), Some((vec![0, 2, 1], 5)));
/// assert_eq!(dijkstra::find_path(&g, 0, 3).unwrap(), None);
/// ```
pub fn find_path<A>(adj: &A, src: usize, dst: usize) -> Result<Option<(Vec<usize>, A::Weight)>>
where
    A: Adjacencies,
    A::Weight: PartialOrd + Zero + CheckedAdd,
{
    let n = adj.num_vertices();
    if dst >= n {
        return Err(Error::VertexOutOfRange {
            vertex: dst,
            num_vertices: n,
        });
    }

    let mut search =
        bestfirst::start_generic::<_, _, _, SumAccumulator>(adj, src, IndexedBinHeap::with_capacity(n), Silent)?;
    while let Some(step) = search.next() {
        let step = step?;
        if step.vertex == dst {
            let path = path_from_parents(search.parents(), dst);
            return Ok(path.map(|path| (path, step.key)));
        }
    }
    Ok(None)
}
