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

//! Abstraction of weighted outgoing edges.
//!
//! This module implements the arguably simplest representation of a graph:
//! the number of vertices and, for each vertex, the list of outgoing edges
//! together with their weights. Vertices are dense indices `0..num_vertices()`.
//!
//! The search algorithms in this crate are described in terms of adjacencies
//! only, so they run on any type implementing [`Adjacencies`], not just on
//! [`AdjListGraph`][crate::AdjListGraph].
//!
//! # Example
//!
//! ```
//! use rs_ixgraph::adjacencies::Adjacencies;
//! use rs_ixgraph::shortestpath::dijkstra;
//!
//! /// A directed path 0 -> 1 -> ... -> n-1 with unit weights.
//! struct Line(usize);
//!
//! impl Adjacencies for Line {
//!     type Weight = u32;
//!     type NeighIt<'b> = std::option::IntoIter<(usize, u32)>;
//!
//!     fn num_vertices(&self) -> usize {
//!         self.0
//!     }
//!
//!     fn neighs(&self, u: usize) -> Self::NeighIt<'_> {
//!         if u + 1 < self.0 { Some((u + 1, 1)) } else { None }.into_iter()
//!     }
//! }
//!
//! let paths = dijkstra::run(&Line(5), 1).unwrap();
//! assert_eq!(paths.distance(4), Some(3));
//! assert_eq!(paths.distance(0), None);
//! ```

/// Weighted outgoing edges of each vertex.
pub trait Adjacencies {
    /// The edge weight type.
    type Weight: Copy;

    /// Iterator over the outgoing edges of a vertex.
    type NeighIt<'b>: Iterator<Item = (usize, Self::Weight)>
    where
        Self: 'b;

    /// Return the number of vertices.
    fn num_vertices(&self) -> usize;

    /// Return an iterator over the `(neighbor, weight)` pairs of vertex `u`.
    ///
    /// `u` must be in `0..num_vertices()`.
    fn neighs(&self, u: usize) -> Self::NeighIt<'_>;
}

impl<'a, A> Adjacencies for &'a A
where
    A: Adjacencies + ?Sized,
{
    type Weight = A::Weight;
    type NeighIt<'b> = A::NeighIt<'b> where Self: 'b;

    fn num_vertices(&self) -> usize {
        (**self).num_vertices()
    }

    fn neighs(&self, u: usize) -> Self::NeighIt<'_> {
        (**self).neighs(u)
    }
}
