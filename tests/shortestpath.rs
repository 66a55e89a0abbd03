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

use rs_ixgraph::collections::IndexedBinHeap;
use rs_ixgraph::search::Silent;
use rs_ixgraph::shortestpath::dijkstra;
use rs_ixgraph::{AdjListGraph, Error};

use proptest::prelude::*;

const EDGES: &[(usize, usize, i64)] = &[(0, 1, 10), (0, 3, 5), (1, 2, 5), (1, 4, 3), (2, 4, 2), (3, 4, 1)];

/// Shortest path distances by Moore-Bellman-Ford.
fn bellman_ford(n: usize, edges: &[(usize, usize, i64)], start: usize) -> Vec<Option<i64>> {
    let mut dist = vec![None; n];
    dist[start] = Some(0);
    for _ in 1..n {
        let mut changed = false;
        for &(u, v, w) in edges {
            if let Some(du) = dist[u] {
                let d = du + w;
                if dist[v].map_or(true, |dv| d < dv) {
                    dist[v] = Some(d);
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }
    dist
}

fn min_weight(edges: &[(usize, usize, i64)], u: usize, v: usize) -> Option<i64> {
    edges.iter().filter(|e| e.0 == u && e.1 == v).map(|e| e.2).min()
}

#[test]
fn test_directed() -> Result<(), Error> {
    let g = AdjListGraph::from_edges(5, EDGES.iter().copied())?;
    let paths = dijkstra::run(&g, 0)?;

    assert_eq!(paths.distances(), &[Some(0), Some(10), Some(15), Some(5), Some(6)]);
    assert_eq!(paths.parents(), &[Some(0), Some(0), Some(1), Some(0), Some(3)]);
    assert_eq!(paths.path_to(2), Some(vec![0, 1, 2]));
    assert_eq!(paths.path_to(4), Some(vec![0, 3, 4]));
    assert_eq!(paths.distances(), &bellman_ford(5, EDGES, 0)[..]);

    // nothing leaves 4
    let paths = dijkstra::run(&g, 4)?;
    assert_eq!(paths.distances(), &[None, None, None, None, Some(0)]);

    Ok(())
}

#[test]
fn test_undirected() -> Result<(), Error> {
    let g = AdjListGraph::from_undirected_edges(5, EDGES.iter().copied())?;
    let paths = dijkstra::run(&g, 0)?;

    assert_eq!(paths.distances(), &[Some(0), Some(9), Some(8), Some(5), Some(6)]);
    assert_eq!(paths.path_to(2), Some(vec![0, 3, 4, 2]));
    assert_eq!(paths.path_to(1), Some(vec![0, 3, 4, 1]));
    assert_eq!(dijkstra::find_path(&g, 0, 2)?, Some((vec![0, 3, 4, 2], 8)));

    Ok(())
}

#[test]
fn test_disconnected() -> Result<(), Error> {
    let g = AdjListGraph::from_undirected_edges(6, vec![(0, 1, 1), (1, 2, 1), (3, 4, 2), (4, 5, 2)])?;

    let paths = dijkstra::run(&g, 1)?;
    for v in 0..3 {
        assert!(paths.is_reachable(v));
    }
    for v in 3..6 {
        assert!(!paths.is_reachable(v));
        assert_eq!(paths.distance(v), None);
        assert_eq!(paths.parent(v), None);
        assert_eq!(paths.path_to(v), None);
    }

    let paths = dijkstra::run(&g, 5)?;
    assert_eq!(paths.distances(), &[None, None, None, Some(4), Some(2), Some(0)]);

    Ok(())
}

#[test]
fn test_reuse_heap_across_graphs() -> Result<(), Error> {
    let small = AdjListGraph::from_edges(2, vec![(0, 1, 3)])?;
    let large = AdjListGraph::from_edges(5, EDGES.iter().copied())?;

    let mut heap = IndexedBinHeap::default();
    let a = dijkstra::run_with_data(&small, 0, &mut heap, Silent)?;
    let b = dijkstra::run_with_data(&large, 0, &mut heap, Silent)?;
    let c = dijkstra::run_with_data(&small, 1, &mut heap, Silent)?;

    assert_eq!(a.distances(), &[Some(0), Some(3)]);
    assert_eq!(b, dijkstra::run(&large, 0)?);
    assert_eq!(c.distances(), &[None, Some(0)]);

    Ok(())
}

fn graph_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize, i64)>)> {
    (1usize..12).prop_flat_map(|n| (Just(n), prop::collection::vec((0..n, 0..n, 0i64..50), 0..40)))
}

proptest! {
    #[test]
    fn proptest_distances((n, edges) in graph_strategy(), start in 0usize..12) {
        let start = start % n;
        let g = AdjListGraph::from_edges(n, edges.iter().copied()).unwrap();
        let paths = dijkstra::run(&g, start).unwrap();
        let expected = bellman_ford(n, &edges, start);

        prop_assert_eq!(paths.distances(), &expected[..]);
        prop_assert_eq!(paths.parent(start), Some(start));

        for v in 0..n {
            match paths.path_to(v) {
                Some(path) => {
                    // the tree path is a shortest path
                    prop_assert_eq!(path[0], start);
                    prop_assert_eq!(*path.last().unwrap(), v);
                    let mut len = 0;
                    for uv in path.windows(2) {
                        len += min_weight(&edges, uv[0], uv[1]).unwrap();
                    }
                    prop_assert_eq!(Some(len), paths.distance(v));
                }
                None => {
                    prop_assert_eq!(paths.distance(v), None);
                    prop_assert_eq!(paths.parent(v), None);
                }
            }
        }
    }

    #[test]
    fn proptest_unreachable_independent_of_order((n, edges) in graph_strategy(), start in 0usize..12) {
        let start = start % n;
        let g = AdjListGraph::from_edges(n, edges.iter().copied()).unwrap();
        let h = AdjListGraph::from_edges(n, edges.iter().rev().copied()).unwrap();

        let a = dijkstra::run(&g, start).unwrap();
        let b = dijkstra::run(&h, start).unwrap();

        prop_assert_eq!(a.distances(), b.distances());
        for v in 0..n {
            prop_assert_eq!(a.is_reachable(v), b.is_reachable(v));
            if !a.is_reachable(v) {
                prop_assert_eq!(b.parent(v), None);
            }
        }
    }

    #[test]
    fn proptest_find_path((n, edges) in graph_strategy(), src in 0usize..12, dst in 0usize..12) {
        let (src, dst) = (src % n, dst % n);
        let g = AdjListGraph::from_edges(n, edges.iter().copied()).unwrap();
        let paths = dijkstra::run(&g, src).unwrap();

        match dijkstra::find_path(&g, src, dst).unwrap() {
            Some((path, len)) => {
                prop_assert_eq!(Some(len), paths.distance(dst));
                prop_assert_eq!(path.first().copied(), Some(src));
                prop_assert_eq!(path.last().copied(), Some(dst));
            }
            None => prop_assert!(!paths.is_reachable(dst)),
        }
    }
}
