use super::common::*;
use crate::error::{Result, SearchError};
use crate::graph::*;
use crate::spatial::{position, Position};
use rstar::RTree;
use std::collections::HashMap;

#[derive(Copy, Clone, Debug)]
struct Edge {
  target: Idx,
  key: EdgeKey,
  weight: Weight,
}

#[derive(Clone, Debug)]
struct Node<N> {
  id: N,
  position: Position,
  out_edges: Vec<Edge>,
}

/// Road network topology: positioned nodes connected by directed, weighted multi-edges.
///
/// Outgoing edges are kept in insertion order, which is also the order in which searches relax
/// them. Node ids are opaque to the graph, internally every node gets a dense index. The graph
/// carries no search state, see [`crate::state::SearchState`].
pub struct RoadGraph<N: Identifier> {
  nodes: Vec<Node<N>>,
  index: HashMap<N, Idx>,
  rtree: RTree<Entry>,
}

impl<N: Identifier> Default for RoadGraph<N> {
  fn default() -> Self {
    Self::new()
  }
}

impl<N: Identifier> RoadGraph<N> {
  pub fn new() -> Self {
    Self {
      nodes: Vec::new(),
      index: HashMap::new(),
      rtree: RTree::new(),
    }
  }

  /// Adds a node at `(x, y)`. Adding an existing id moves the node and keeps its edges.
  pub fn add_node(&mut self, id: N, x: f64, y: f64) -> &mut Self {
    let new_position = position(x, y);
    if let Some(&idx) = self.index.get(&id) {
      let node = &mut self.nodes[idx as usize];
      self.rtree.remove(&Entry::new(idx, &node.position));
      node.position = new_position;
      self.rtree.insert(Entry::new(idx, &new_position));
      return self;
    }

    let idx = self.nodes.len() as Idx;
    self.nodes.push(Node {
      id,
      position: new_position,
      out_edges: Vec::new(),
    });
    self.index.insert(id, idx);
    self.rtree.insert(Entry::new(idx, &new_position));
    self
  }

  /// Adds a directed edge and returns its key. Keys are assigned per `(from, to)` pair starting
  /// from 0, so the first edge between two nodes always has key 0.
  pub fn add_edge(&mut self, from: N, to: N, weight: Weight) -> Result<EdgeKey> {
    let from_idx = self.idx(from)?;
    let to_idx = self.idx(to)?;

    let out_edges = &mut self.nodes[from_idx as usize].out_edges;
    let key = out_edges.iter().filter(|e| e.target == to_idx).count() as EdgeKey;
    out_edges.push(Edge {
      target: to_idx,
      key,
      weight,
    });
    Ok(key)
  }

  pub fn number_of_edges(&self) -> usize {
    self.nodes.iter().map(|node| node.out_edges.len()).sum()
  }

  fn idx(&self, id: N) -> Result<Idx> {
    self
      .index
      .get(&id)
      .copied()
      .ok_or_else(|| SearchError::invalid_node(id))
  }

  fn node(&self, id: N) -> Option<&Node<N>> {
    self.index.get(&id).map(|idx| &self.nodes[*idx as usize])
  }

  fn edge_ref(&self, source: N, edge: &Edge) -> EdgeRef<N> {
    EdgeRef {
      source,
      target: self.nodes[edge.target as usize].id,
      key: edge.key,
      weight: edge.weight,
    }
  }
}

/// Iterator over outgoing edges of a single node
pub struct OutEdges<'a, N: Identifier> {
  graph: &'a RoadGraph<N>,
  source: N,
  edges: std::slice::Iter<'a, Edge>,
}

impl<'a, N: Identifier> Iterator for OutEdges<'a, N> {
  type Item = EdgeRef<N>;

  fn next(&mut self) -> Option<Self::Item> {
    let edge = self.edges.next()?;
    Some(self.graph.edge_ref(self.source, edge))
  }
}

impl<N: Identifier> GraphBase for RoadGraph<N> {
  type NodeId = N;
}

impl<N: Identifier> HasNodes for RoadGraph<N> {
  fn contains_node(&self, node: N) -> bool {
    self.index.contains_key(&node)
  }

  fn number_of_nodes(&self) -> usize {
    self.nodes.len()
  }

  fn node_ids(&self) -> Vec<N> {
    self.nodes.iter().map(|node| node.id).collect()
  }
}

impl<'a, N: Identifier> IntoEdges for &'a RoadGraph<N> {
  type Edges = OutEdges<'a, N>;

  fn edges(self, node_id: N) -> Self::Edges {
    let no_edges: &'a [Edge] = &[];
    let edges = match self.node(node_id) {
      Some(node) => node.out_edges.iter(),
      None => no_edges.iter(),
    };
    OutEdges {
      graph: self,
      source: node_id,
      edges,
    }
  }
}

impl<N: Identifier> Weighted for RoadGraph<N> {
  fn edge(&self, from: N, to: N, key: EdgeKey) -> Option<EdgeRef<N>> {
    let to_idx = *self.index.get(&to)?;
    self
      .node(from)?
      .out_edges
      .iter()
      .find(|e| e.target == to_idx && e.key == key)
      .map(|e| self.edge_ref(from, e))
  }

  fn cheapest_edge(&self, from: N, to: N) -> Option<EdgeRef<N>> {
    let to_idx = *self.index.get(&to)?;
    self
      .node(from)?
      .out_edges
      .iter()
      .filter(|e| e.target == to_idx)
      .min_by(|a, b| a.weight.total_cmp(&b.weight))
      .map(|e| self.edge_ref(from, e))
  }
}

impl<N: Identifier> Located for RoadGraph<N> {
  fn position(&self, node: N) -> Option<Position> {
    self.node(node).map(|n| n.position)
  }
}

impl<N: Identifier> Spatial for RoadGraph<N> {
  fn nearest_node(&self, position: &Position) -> Option<(N, f64)> {
    use rstar::PointDistance;

    let query = [position.x, position.y];
    self
      .rtree
      .nearest_neighbor(&query)
      .map(|entry| (self.nodes[entry.idx as usize].id, entry.distance_2(&query)))
  }
}
