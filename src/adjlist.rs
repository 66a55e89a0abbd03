/*
 * Copyright (c) 2021, 2022, 2024 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! A weighted directed graph stored as adjacency lists.

use crate::adjacencies::Adjacencies;
use crate::error::{Error, Result};

use crate::num::traits::Zero;

use std::ops::Range;
use std::slice::Iter as SliceIter;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// The maximal number of vertices of an [`AdjListGraph`].
pub const MAX_VERTICES: usize = 1 << 31;

/// A weighted directed graph with a fixed number of vertices.
///
/// Vertices are the indices `0..num_vertices()`. Each vertex owns the list of
/// its outgoing edges as `(neighbor, weight)` pairs. The order of the edges in
/// such a list is an implementation detail, algorithms must not depend on it.
///
/// # Example
///
/// ```
/// use rs_ixgraph::AdjListGraph;
///
/// let mut g = AdjListGraph::new(3).unwrap();
/// g.add_edge(0, 1, 4).unwrap();
/// g.add_undirected_edge(1, 2, 7).unwrap();
///
/// assert_eq!(g.num_edges(), 3);
/// assert_eq!(g.neighbors(1).collect::<Vec<_>>(), vec![(2, 7)]);
/// assert!(g.add_edge(0, 3, 1).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct AdjListGraph<W = i64> {
    adj: Vec<Vec<(usize, W)>>,
    nedges: usize,
}

/// Iterator over the outgoing edges of a vertex.
#[derive(Clone)]
pub struct Neighbors<'a, W>(SliceIter<'a, (usize, W)>);

impl<'a, W> Iterator for Neighbors<'a, W>
where
    W: Copy,
{
    type Item = (usize, W);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, W> ExactSizeIterator for Neighbors<'a, W> where W: Copy {}

/// Iterator over all edges `(u, v, weight)` of a graph.
#[derive(Clone)]
pub struct EdgeIt<'a, W> {
    adj: &'a [Vec<(usize, W)>],
    u: usize,
    it: SliceIter<'a, (usize, W)>,
}

impl<'a, W> Iterator for EdgeIt<'a, W>
where
    W: Copy,
{
    type Item = (usize, usize, W);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(&(v, w)) = self.it.next() {
                return Some((self.u, v, w));
            }
            self.u += 1;
            self.it = self.adj.get(self.u)?.iter();
        }
    }
}

impl<W> AdjListGraph<W>
where
    W: Copy,
{
    /// Create a graph with `n` isolated vertices.
    ///
    /// Fails with [`Error::InvalidSize`] if `n` is zero or larger than
    /// [`MAX_VERTICES`].
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 || n > MAX_VERTICES {
            return Err(Error::InvalidSize(n));
        }
        Ok(AdjListGraph {
            adj: (0..n).map(|_| Vec::new()).collect(),
            nedges: 0,
        })
    }

    /// Create a graph with `n` vertices and the given directed edges.
    pub fn from_edges<I>(n: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut g = Self::new(n)?;
        for (u, v, w) in edges {
            g.add_edge(u, v, w)?;
        }
        Ok(g)
    }

    /// Create a graph with `n` vertices and the given undirected edges.
    pub fn from_undirected_edges<I>(n: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut g = Self::new(n)?;
        for (u, v, w) in edges {
            g.add_undirected_edge(u, v, w)?;
        }
        Ok(g)
    }

    /// Return the number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.adj.len()
    }

    /// Return the number of directed edges.
    ///
    /// An undirected edge counts twice.
    pub fn num_edges(&self) -> usize {
        self.nedges
    }

    /// Return the range of all vertices.
    pub fn vertices(&self) -> Range<usize> {
        0..self.adj.len()
    }

    /// Add the directed edge `(u, v)` with weight `weight`.
    ///
    /// Any weight is accepted, but note that Dijkstra's algorithm requires
    /// non-negative weights.
    pub fn add_edge(&mut self, u: usize, v: usize, weight: W) -> Result<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        self.adj[u].push((v, weight));
        self.nedges += 1;
        Ok(())
    }

    /// Add the undirected edge `{u, v}` with weight `weight`.
    ///
    /// This is the same as adding both directed edges `(u, v)` and `(v, u)`.
    /// Either both or none of them is added.
    pub fn add_undirected_edge(&mut self, u: usize, v: usize, weight: W) -> Result<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        self.add_edge(u, v, weight)?;
        self.add_edge(v, u, weight)
    }

    /// Return an iterator over the outgoing `(neighbor, weight)` pairs of `u`.
    ///
    /// The iterator can be cloned to restart the traversal.
    ///
    /// # Panics
    ///
    /// If `u` is not a vertex of the graph.
    pub fn neighbors(&self, u: usize) -> Neighbors<'_, W> {
        Neighbors(self.adj[u].iter())
    }

    /// Return an iterator over all directed edges `(u, v, weight)`.
    pub fn edges(&self) -> EdgeIt<'_, W> {
        let empty: &[(usize, W)] = &[];
        EdgeIt {
            adj: &self.adj,
            u: 0,
            it: self.adj.first().map_or(empty.iter(), |a| a.iter()),
        }
    }

    /// Return some edge with a negative weight, if there is one.
    pub fn find_negative_edge(&self) -> Option<(usize, usize, W)>
    where
        W: Zero + PartialOrd,
    {
        self.edges().find(|&(_, _, w)| w < W::zero())
    }

    fn check_vertex(&self, u: usize) -> Result<()> {
        if u < self.adj.len() {
            Ok(())
        } else {
            Err(Error::VertexOutOfRange {
                vertex: u,
                num_vertices: self.adj.len(),
            })
        }
    }
}

impl<W> Adjacencies for AdjListGraph<W>
where
    W: Copy,
{
    type Weight = W;
    type NeighIt<'b> = Neighbors<'b, W> where Self: 'b;

    fn num_vertices(&self) -> usize {
        self.adj.len()
    }

    fn neighs(&self, u: usize) -> Self::NeighIt<'_> {
        self.neighbors(u)
    }
}
