// Copyright (c) 2016, 2017, 2018, 2020, 2022, 2024 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Implementation of Prim's algorithm

use crate::adjacencies::Adjacencies;
use crate::collections::{IndexedBinHeap, IndexedPriQueue};
use crate::error::{Error, Result};
use crate::search::{bestfirst, path_from_parents, LogObserver, Observer, WeightAccumulator};

use crate::num::traits::{CheckedAdd, Zero};

use std::fmt::Debug;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// The result of Prim's algorithm.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct SpanningTree<W> {
    root: usize,
    parents: Vec<Option<usize>>,
    edges: Vec<(usize, usize, W)>,
    weight: W,
}

impl<W> SpanningTree<W>
where
    W: Copy,
{
    /// Return the root vertex.
    pub fn root(&self) -> usize {
        self.root
    }

    /// Return the total weight of the tree edges.
    pub fn weight(&self) -> W {
        self.weight
    }

    /// Return the tree edges `(parent, child, weight)` in the order in which
    /// they have been chosen.
    pub fn edges(&self) -> &[(usize, usize, W)] {
        &self.edges
    }

    /// Return the parent of `v` in the tree.
    ///
    /// The root is its own parent, vertices not spanned have none.
    pub fn parent(&self, v: usize) -> Option<usize> {
        self.parents.get(v).copied().flatten()
    }

    /// Return the parent of each vertex.
    pub fn parents(&self) -> &[Option<usize>] {
        &self.parents
    }

    /// Return `true` iff `v` is spanned by the tree.
    pub fn contains(&self, v: usize) -> bool {
        self.parent(v).is_some()
    }

    /// Return `true` iff the tree spans all vertices.
    ///
    /// This is the case iff the graph is connected.
    pub fn is_spanning(&self) -> bool {
        self.edges.len() + 1 == self.parents.len()
    }

    /// Return the vertices on the tree path from the root to `v`.
    pub fn path_to(&self, v: usize) -> Option<Vec<usize>> {
        path_from_parents(&self.parents, v)
    }
}

/// Run Prim's algorithm to solve the *Minimum Spanning Tree* problem on a
/// graph.
///
/// The graph must be undirected, i.e. each edge must be present in both
/// directions with the same weight. The tree is grown from `start`.
///
/// If the graph is not connected, the returned tree only spans the
/// component of `start`. This can be checked with
/// [`SpanningTree::is_spanning`].
///
/// Fails with [`Error::VertexOutOfRange`] if `start` is not a vertex.
///
/// # Example
///
/// ```
/// use rs_ixgraph::AdjListGraph;
/// use rs_ixgraph::mst::prim;
///
/// let g = AdjListGraph::from_undirected_edges(
///     7,
///     vec![
///         (0, 1, 29), (1, 2, 16), (2, 3, 12), (3, 4, 22), (4, 5, 27),
///         (5, 0, 10), (6, 1, 15), (6, 3, 18), (6, 4, 25),
///     ],
/// )
/// .unwrap();
///
/// let tree = prim::run(&g, 0).unwrap();
///
/// assert!(tree.is_spanning());
/// assert_eq!(tree.weight(), 102);
/// assert_eq!(
///     tree.edges(),
///     &[(0, 5, 10), (5, 4, 27), (4, 3, 22), (3, 2, 12), (2, 1, 16), (1, 6, 15)]
/// );
/// assert_eq!(tree.path_to(6), Some(vec![0, 5, 4, 3, 2, 1, 6]));
/// ```
pub fn run<A>(adj: &A, start: usize) -> Result<SpanningTree<A::Weight>>
where
    A: Adjacencies,
    A::Weight: PartialOrd + Zero + CheckedAdd + Debug,
{
    run_with_observer(adj, start, LogObserver)
}

/// Run Prim's algorithm from `start` and report each step to `observer`.
pub fn run_with_observer<A, O>(adj: &A, start: usize, observer: O) -> Result<SpanningTree<A::Weight>>
where
    A: Adjacencies,
    A::Weight: PartialOrd + Zero + CheckedAdd,
    O: Observer<A::Weight>,
{
    run_with_data(adj, start, IndexedBinHeap::with_capacity(adj.num_vertices()), observer)
}

/// Run Prim's algorithm from `start` with a custom priority queue.
///
/// The queue is reset before it is used, so it can be reused for several
/// runs.
pub fn run_with_data<A, P, O>(adj: &A, start: usize, heap: P, observer: O) -> Result<SpanningTree<A::Weight>>
where
    A: Adjacencies,
    A::Weight: PartialOrd + Zero + CheckedAdd,
    P: IndexedPriQueue<A::Weight>,
    O: Observer<A::Weight>,
{
    let n = adj.num_vertices();
    log::debug!("prim from vertex {} ({} vertices)", start, n);

    let mut search = bestfirst::start_generic::<_, _, _, WeightAccumulator>(adj, start, heap, observer)?;
    let mut edges = Vec::with_capacity(n.saturating_sub(1));
    let mut weight = A::Weight::zero();

    while edges.len() + 1 < n {
        let step = match search.next() {
            Some(step) => step?,
            None => break,
        };
        // the root has no tree edge
        if step.vertex == start {
            continue;
        }
        weight = weight
            .checked_add(&step.key)
            .ok_or(Error::Overflow { vertex: step.vertex })?;
        edges.push((step.parent, step.vertex, step.key));
    }

    let (_, parents) = search.into_parts();

    log::debug!("prim from vertex {} chose {} of {} tree edges", start, edges.len(), n - 1);

    Ok(SpanningTree {
        root: start,
        parents,
        edges,
        weight,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{Event, Silent};
    use crate::AdjListGraph;

    #[test]
    fn test_single_vertex() {
        let g = AdjListGraph::<i32>::new(1).unwrap();
        let tree = run(&g, 0).unwrap();
        assert_eq!(tree.root(), 0);
        assert_eq!(tree.weight(), 0);
        assert!(tree.edges().is_empty());
        assert!(tree.is_spanning());
        assert_eq!(tree.parents(), &[Some(0)]);
    }

    #[test]
    fn test_invalid_start() {
        let g = AdjListGraph::<i32>::new(2).unwrap();
        assert_eq!(
            run(&g, 5),
            Err(Error::VertexOutOfRange {
                vertex: 5,
                num_vertices: 2
            })
        );
    }

    #[test]
    fn test_disconnected() {
        let g = AdjListGraph::from_undirected_edges(5, vec![(0, 1, 3), (1, 2, 1), (0, 2, 2), (3, 4, 1)]).unwrap();
        let tree = run(&g, 1).unwrap();
        assert!(!tree.is_spanning());
        assert_eq!(tree.weight(), 3);
        assert_eq!(tree.edges(), &[(1, 2, 1), (2, 0, 2)]);
        assert!(tree.contains(0));
        assert!(!tree.contains(3));
        assert_eq!(tree.parent(3), None);
        assert_eq!(tree.parent(4), None);
        assert_eq!(tree.path_to(4), None);
    }

    #[test]
    fn test_negative_weights() {
        let g = AdjListGraph::from_undirected_edges(3, vec![(0, 1, -4), (1, 2, 2), (0, 2, -1)]).unwrap();
        let tree = run(&g, 0).unwrap();
        assert_eq!(tree.weight(), -5);
        assert_eq!(tree.edges(), &[(0, 1, -4), (0, 2, -1)]);
    }

    #[test]
    fn test_raw_edge_weight() {
        // Dijkstra would attach 2 to 0 (3 < 2 + 2), Prim attaches it to 1
        let g = AdjListGraph::from_undirected_edges(3, vec![(0, 1, 2), (1, 2, 2), (0, 2, 3)]).unwrap();
        let tree = run(&g, 0).unwrap();
        assert_eq!(tree.parent(2), Some(1));
        assert_eq!(tree.weight(), 4);
    }

    #[test]
    fn test_stops_after_last_edge() {
        let g = AdjListGraph::from_undirected_edges(3, vec![(0, 1, 1), (1, 2, 1)]).unwrap();
        let mut settled = vec![];
        let observer = |e: Event<i32>| {
            if let Event::Settled { vertex, .. } = e {
                settled.push(vertex);
            }
        };
        let tree = run_with_observer(&g, 0, observer).unwrap();
        assert_eq!(settled, vec![0, 1, 2]);
        assert_eq!(tree.edges().len(), 2);

        let mut heap = IndexedBinHeap::default();
        for start in g.vertices() {
            let tree = run_with_data(&g, start, &mut heap, Silent).unwrap();
            assert_eq!(tree.weight(), 2);
            assert_eq!(tree.root(), start);
            assert_eq!(tree.parent(start), Some(start));
        }
    }

    #[test]
    fn test_overflow() {
        let g = AdjListGraph::from_undirected_edges(3, vec![(0, 1, 200u8), (1, 2, 100u8)]).unwrap();
        assert_eq!(run(&g, 0), Err(Error::Overflow { vertex: 2 }));
    }
}
