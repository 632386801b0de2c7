//! Route reconstruction.
//!
//! After a search the state holds a back-pointer for every reached node. Following them from the
//! target yields the route in reverse; [`PathWalk`] does that one edge at a time, [`reconstruct`]
//! collects the whole route.

use crate::error::{Result, SearchError};
use crate::graph::*;
use crate::search::check_endpoints;
use crate::state::SearchState;
use log::warn;
use serde::{Deserialize, Serialize};

/// A route from source to target.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Route<N: Identifier> {
  /// Visited nodes in travel order, both endpoints included.
  pub nodes: Vec<N>,
  /// Traversed edges in travel order.
  pub edges: Vec<EdgeRef<N>>,
  /// Sum of traversed edge weights.
  pub cost: Weight,
  /// Number of traversed edges.
  pub hops: usize,
}

/// Walks back-pointers from the target towards the source, yielding one edge per step.
///
/// Yields `Err(PathNotFound)` once and stops if the chain breaks before reaching the source, or
/// if it is longer than the number of nodes in the graph (a cycle in corrupted state).
pub struct PathWalk<'a, G: GraphBase> {
  graph: G,
  state: &'a SearchState<G::NodeId>,
  source: G::NodeId,
  target: G::NodeId,
  current: Option<G::NodeId>,
  remaining: usize,
}

pub fn walk_back<'a, G>(
  graph: G,
  state: &'a SearchState<G::NodeId>,
  source: G::NodeId,
  target: G::NodeId,
) -> PathWalk<'a, G>
where
  G: HasNodes + Weighted,
{
  let remaining = graph.number_of_nodes();
  PathWalk {
    graph,
    state,
    source,
    target,
    current: Some(target),
    remaining,
  }
}

impl<'a, G: HasNodes + Weighted> PathWalk<'a, G> {
  fn fail(&mut self) -> Option<Result<EdgeRef<G::NodeId>>> {
    warn!(
      "Path reconstruction failed: no path found from {:?} to {:?}",
      self.source, self.target
    );
    self.current = None;
    Some(Err(SearchError::path_not_found(self.source, self.target)))
  }
}

impl<'a, G: HasNodes + Weighted> Iterator for PathWalk<'a, G> {
  type Item = Result<EdgeRef<G::NodeId>>;

  fn next(&mut self) -> Option<Self::Item> {
    let current = self.current?;
    if current == self.source {
      self.current = None;
      return None;
    }
    if self.remaining == 0 {
      return self.fail();
    }
    self.remaining -= 1;

    let node_state = self.state.get(current);
    let previous = match node_state.previous {
      Some(previous) => previous,
      None => return self.fail(),
    };

    let edge = match node_state.previous_key {
      Some(key) => self.graph.edge(previous, current, key),
      None => self.graph.cheapest_edge(previous, current),
    };
    match edge {
      Some(edge) => {
        self.current = Some(previous);
        Some(Ok(edge))
      }
      None => self.fail(),
    }
  }
}

/// Builds the route found by the last search from the back-pointers in `state`.
///
/// `source == target` gives a single node route with zero cost. Does not modify the state, so
/// repeated calls return the same route.
pub fn reconstruct<G>(
  graph: G,
  state: &SearchState<G::NodeId>,
  source: G::NodeId,
  target: G::NodeId,
) -> Result<Route<G::NodeId>>
where
  G: HasNodes + Weighted,
{
  check_endpoints(&graph, source, target)?;

  let mut edges = walk_back(graph, state, source, target).collect::<Result<Vec<_>>>()?;
  edges.reverse();

  let mut nodes = Vec::with_capacity(edges.len() + 1);
  nodes.push(source);
  nodes.extend(edges.iter().map(|edge| edge.target));

  Ok(Route {
    cost: edges.iter().fold(0.0, |cost, edge| cost + edge.weight),
    hops: edges.len(),
    nodes,
    edges,
  })
}
