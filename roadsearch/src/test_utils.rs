use crate::graph::*;
use crate::graph_impl::*;

use std::collections::{HashMap, VecDeque};

/// A(0,0) B(1,0) C(2,0) D(3,0) E(4,0) with
/// A->B(1), B->C(2), A->C(5), C->D(1), D->E(1), B->D(4).
pub fn line_graph() -> RoadGraph<char> {
  let mut graph = RoadGraph::new();
  for (i, id) in ['A', 'B', 'C', 'D', 'E'].iter().enumerate() {
    graph.add_node(*id, i as f64, 0.0);
  }
  for &(from, to, weight) in &[
    ('A', 'B', 1.0),
    ('B', 'C', 2.0),
    ('A', 'C', 5.0),
    ('C', 'D', 1.0),
    ('D', 'E', 1.0),
    ('B', 'D', 4.0),
  ] {
    graph.add_edge(from, to, weight).unwrap();
  }
  graph
}

/// [`line_graph`] plus a node F(5,5) without any edges.
pub fn line_graph_with_island() -> RoadGraph<char> {
  let mut graph = line_graph();
  graph.add_node('F', 5.0, 5.0);
  graph
}

/// 1(0,0) 2(1,1) 3(1,0) with 1->2(1), 2->3(1) and two parallel edges 1->3 of 10 and 1.5.
pub fn parallel_edges_graph() -> RoadGraph<u32> {
  let mut graph = RoadGraph::new();
  graph
    .add_node(1, 0.0, 0.0)
    .add_node(2, 1.0, 1.0)
    .add_node(3, 1.0, 0.0);
  graph.add_edge(1, 3, 10.0).unwrap();
  graph.add_edge(1, 2, 1.0).unwrap();
  graph.add_edge(2, 3, 1.0).unwrap();
  graph.add_edge(1, 3, 1.5).unwrap();
  graph
}

/// `width x height` grid, node `id = row * width + col` at `(col, row)`, edges in both
/// directions between horizontal and vertical neighbours. Weights are integers in 1..=5, so they
/// never undercut the straight-line distance and sums compare exactly.
pub fn grid_graph(width: u32, height: u32) -> RoadGraph<u32> {
  let mut graph = RoadGraph::new();
  for id in 0..width * height {
    graph.add_node(id, (id % width) as f64, (id / width) as f64);
  }

  let weight = |from: u32, to: u32| (1 + (from * 7 + to * 3) % 5) as f64;
  for id in 0..width * height {
    let (col, row) = (id % width, id / width);
    let mut neighbours = Vec::new();
    if col + 1 < width {
      neighbours.push(id + 1);
    }
    if col > 0 {
      neighbours.push(id - 1);
    }
    if row + 1 < height {
      neighbours.push(id + width);
    }
    if row > 0 {
      neighbours.push(id - width);
    }
    for to in neighbours {
      graph.add_edge(id, to, weight(id, to)).unwrap();
    }
  }
  graph
}

/// Brute force hop distance by exhaustive breadth-first expansion.
pub fn hop_distance<G>(graph: G, source: G::NodeId, target: G::NodeId) -> Option<usize>
where
  G: Copy + IntoEdges,
{
  let mut hops = HashMap::new();
  let mut queue = VecDeque::new();
  hops.insert(source, 0);
  queue.push_back(source);

  while let Some(node) = queue.pop_front() {
    let next = hops[&node] + 1;
    for edge in edges_forward(graph, node) {
      if !hops.contains_key(&edge.target) {
        hops.insert(edge.target, next);
        queue.push_back(edge.target);
      }
    }
  }
  hops.get(&target).copied()
}

/// Floyd-Warshall shortest path weights between all pairs of nodes.
pub fn all_pairs_weights<G>(graph: G) -> HashMap<(G::NodeId, G::NodeId), Weight>
where
  G: Copy + HasNodes + IntoEdges,
{
  let nodes = graph.node_ids();
  let mut dist = HashMap::new();
  for &u in &nodes {
    for &v in &nodes {
      dist.insert((u, v), if u == v { 0.0 } else { f64::INFINITY });
    }
    for edge in edges_forward(graph, u) {
      let d = dist.get_mut(&(u, edge.target)).unwrap();
      if edge.weight < *d {
        *d = edge.weight;
      }
    }
  }

  for &k in &nodes {
    for &i in &nodes {
      for &j in &nodes {
        let through = dist[&(i, k)] + dist[&(k, j)];
        if through < dist[&(i, j)] {
          dist.insert((i, j), through);
        }
      }
    }
  }
  dist
}

#[test]
fn test_fixtures() {
  let graph = line_graph();
  assert_eq!(graph.number_of_nodes(), 5);
  assert_eq!(graph.number_of_edges(), 6);
  assert_eq!(hop_distance(&graph, 'A', 'E'), Some(3));
  assert_eq!(all_pairs_weights(&graph)[&('A', 'E')], 5.0);

  let grid = grid_graph(3, 2);
  assert_eq!(grid.number_of_edges(), 14);
  assert_eq!(hop_distance(&grid, 0, 5), Some(3));
}
