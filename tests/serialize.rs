/*
 * Copyright (c) 2024 Frank Fischer <frank-fischer@shadow-soft.de>
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

#![cfg(feature = "serialize")]

use rs_ixgraph::mst::{prim, SpanningTree};
use rs_ixgraph::shortestpath::{dijkstra, ShortestPaths};
use rs_ixgraph::AdjListGraph;

#[test]
fn test_graph_json() {
    let g = AdjListGraph::from_edges(3, vec![(0, 1, 4i64), (1, 2, 2)]).unwrap();
    let json = serde_json::to_string(&g).unwrap();
    let h: AdjListGraph<i64> = serde_json::from_str(&json).unwrap();
    assert_eq!(g, h);
    assert_eq!(dijkstra::run(&h, 0).unwrap().distance(2), Some(6));
}

#[test]
fn test_results_json() {
    let g = AdjListGraph::from_undirected_edges(4, vec![(0, 1, 1i64), (1, 2, 5), (0, 2, 2)]).unwrap();

    let paths = dijkstra::run(&g, 0).unwrap();
    let json = serde_json::to_value(&paths).unwrap();
    assert_eq!(json["distances"], serde_json::json!([0, 1, 2, null]));
    let back: ShortestPaths<i64> = serde_json::from_value(json).unwrap();
    assert_eq!(back, paths);

    let tree = prim::run(&g, 0).unwrap();
    let json = serde_json::to_string(&tree).unwrap();
    let back: SpanningTree<i64> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, tree);
    assert_eq!(back.weight(), 3);
}
