//! Per-run search state.
//!
//! The graph only describes the road network. Everything a search writes (visited flags,
//! back-pointers, tentative costs) lives in a [`SearchState`] which is owned by the caller,
//! reset with [`initialize`] before each run, and read afterwards by route reconstruction.

use crate::graph::*;
use std::collections::HashMap;

/// Mutable metadata of a single node.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NodeState<N> {
  pub visited: bool,
  /// Predecessor on the best known path.
  pub previous: Option<N>,
  /// Key of the edge `previous -> node` the node was reached through.
  pub previous_key: Option<EdgeKey>,
  /// Cumulative weight from the source, used by the weighted search.
  pub distance: Weight,
  /// Cumulative weight from the source, used by the heuristic search.
  pub g_score: Weight,
  /// `g_score` plus the estimate to the target.
  pub f_score: Weight,
}

impl<N> NodeState<N> {
  pub fn baseline() -> Self {
    Self {
      visited: false,
      previous: None,
      previous_key: None,
      distance: f64::INFINITY,
      g_score: f64::INFINITY,
      f_score: f64::INFINITY,
    }
  }
}

impl<N> Default for NodeState<N> {
  fn default() -> Self {
    Self::baseline()
  }
}

/// Node states keyed by node id. Nodes without an entry read as [`NodeState::baseline`].
#[derive(Clone, Debug)]
pub struct SearchState<N: Identifier> {
  nodes: HashMap<N, NodeState<N>>,
}

impl<N: Identifier> Default for SearchState<N> {
  fn default() -> Self {
    Self::new()
  }
}

impl<N: Identifier> SearchState<N> {
  pub fn new() -> Self {
    Self {
      nodes: HashMap::new(),
    }
  }

  /// Creates a state with every node of `graph` at the baseline.
  pub fn for_graph<G: HasNodes<NodeId = N>>(graph: &G) -> Self {
    let mut state = Self::new();
    initialize(graph, &mut state);
    state
  }

  pub fn get(&self, node: N) -> NodeState<N> {
    self.nodes.get(&node).copied().unwrap_or_default()
  }

  pub fn node_mut(&mut self, node: N) -> &mut NodeState<N> {
    self.nodes.entry(node).or_insert_with(NodeState::baseline)
  }

  pub fn is_visited(&self, node: N) -> bool {
    self.nodes.get(&node).map_or(false, |s| s.visited)
  }

  pub fn previous(&self, node: N) -> Option<N> {
    self.nodes.get(&node).and_then(|s| s.previous)
  }

  /// Puts the source of a run at zero cost with `estimate` as its `f_score`. Every search seeds
  /// its source this way; searches without a heuristic pass 0.
  pub fn seed_source(&mut self, source: N, estimate: Weight) {
    let node_state = self.node_mut(source);
    node_state.distance = 0.0;
    node_state.g_score = 0.0;
    node_state.f_score = estimate;
  }

  /// Sets the back-pointer of `node` to the edge it was reached through.
  pub fn set_previous(&mut self, node: N, edge: &EdgeRef<N>) {
    let node_state = self.node_mut(node);
    node_state.previous = Some(edge.source);
    node_state.previous_key = Some(edge.key);
  }

  /// Marks the node as visited. Returns `false` if it already was.
  pub fn mark_visited(&mut self, node: N) -> bool {
    let node_state = self.node_mut(node);
    if node_state.visited {
      return false;
    }
    node_state.visited = true;
    true
  }

  pub fn visited_count(&self) -> usize {
    self.nodes.values().filter(|s| s.visited).count()
  }

  pub fn visited_nodes(&self) -> Vec<N> {
    let mut result: Vec<N> = self
      .nodes
      .iter()
      .filter(|(_, s)| s.visited)
      .map(|(id, _)| *id)
      .collect();
    result.sort();
    result
  }
}

/// Resets every node of the graph to the baseline: not visited, no predecessor, infinite costs.
///
/// Must run before each search; searches only seed their source node. Entries for nodes which
/// are not part of the graph are dropped.
pub fn initialize<G: HasNodes>(graph: &G, state: &mut SearchState<G::NodeId>) {
  state.nodes.clear();
  for node in graph.node_ids() {
    state.nodes.insert(node, NodeState::baseline());
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_utils::line_graph;

  #[test]
  fn test_initialize_resets_nodes() {
    let graph = line_graph();
    let mut state = SearchState::for_graph(&graph);

    {
      let a = state.node_mut('A');
      a.distance = 0.0;
      a.g_score = 0.0;
    }
    state.mark_visited('A');
    state.set_previous(
      'B',
      &EdgeRef {
        source: 'A',
        target: 'B',
        key: 0,
        weight: 1.0,
      },
    );
    state.node_mut('Z').visited = true;

    initialize(&graph, &mut state);

    for node in graph.node_ids() {
      assert_eq!(state.get(node), NodeState::baseline());
    }
    assert_eq!(state.visited_count(), 0);
    assert!(!state.is_visited('Z'));
  }

  #[test]
  fn test_initialize_empty_graph() {
    let graph = crate::graph_impl::RoadGraph::<u32>::new();
    let mut state = SearchState::new();
    initialize(&graph, &mut state);
    assert_eq!(state.visited_count(), 0);
    assert_eq!(state.get(3), NodeState::baseline());
  }

  #[test]
  fn test_seed_source() {
    let mut state = SearchState::new();
    state.seed_source('A', 4.0);

    let a = state.get('A');
    assert_eq!(a.distance, 0.0);
    assert_eq!(a.g_score, 0.0);
    assert_eq!(a.f_score, 4.0);
    assert!(!a.visited);
    assert_eq!(a.previous, None);
  }

  #[test]
  fn test_mark_visited_once() {
    let mut state = SearchState::new();
    assert!(state.mark_visited(1));
    assert!(!state.mark_visited(1));
    assert_eq!(state.visited_nodes(), vec![1]);
  }
}
