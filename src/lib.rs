// Copyright (c) 2015-2024 Frank Fischer <frank-fischer@shadow-soft.de>
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

#![forbid(unsafe_code)]

//! Shortest paths and minimum spanning trees on weighted adjacency-list
//! graphs, driven by an indexed binary heap with decrease-key.
//!
//! Vertices are plain indices `0..n`. The graph is stored in an
//! [`AdjListGraph`], but all algorithms work on any implementation of
//! [`Adjacencies`][crate::adjacencies::Adjacencies].
//!
//! # Example
//!
//! ```
//! use rs_ixgraph::AdjListGraph;
//! use rs_ixgraph::{mst::prim, shortestpath::dijkstra};
//!
//! let g = AdjListGraph::from_undirected_edges(4, vec![(0, 1, 1), (1, 2, 2), (0, 2, 4), (2, 3, 1)]).unwrap();
//!
//! let sp = dijkstra::run(&g, 0).unwrap();
//! assert_eq!(sp.distance(3), Some(4));
//! assert_eq!(sp.path_to(3), Some(vec![0, 1, 2, 3]));
//!
//! let tree = prim::run(&g, 0).unwrap();
//! assert_eq!(tree.weight(), 4);
//! ```

mod num {
    pub use num_traits as traits;
}

pub mod error;
pub use self::error::{Error, HeapError, Result};

// # Data structures

pub mod adjacencies;

pub mod adjlist;
pub use self::adjlist::AdjListGraph;

/// The default graph type.
///
/// An adjacency list graph with up to 2^31 vertices and `i64` weights.
pub type Net = self::AdjListGraph<i64>;

pub mod collections;

// # Algorithms

pub mod mst;
pub mod search;
pub mod shortestpath;
