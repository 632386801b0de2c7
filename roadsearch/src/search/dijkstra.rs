use super::{run, AlgorithmKind, Relaxation, Traversal};
use crate::error::Result;
use crate::frontier::{Frontier, PriorityFrontier};
use crate::graph::*;
use crate::observer::Observer;
use crate::state::SearchState;

struct ByDistance;

impl<G: GraphBase> Relaxation<G> for ByDistance {
  type Frontier = PriorityFrontier<G::NodeId>;

  fn seed(
    &self,
    _graph: G,
    state: &mut SearchState<G::NodeId>,
    frontier: &mut Self::Frontier,
    source: G::NodeId,
    _target: G::NodeId,
  ) {
    state.seed_source(source, 0.0);
    frontier.push(source, 0.0);
  }

  fn relax(
    &self,
    _graph: G,
    state: &mut SearchState<G::NodeId>,
    frontier: &mut Self::Frontier,
    edge: &EdgeRef<G::NodeId>,
    _target: G::NodeId,
  ) {
    let candidate = state.get(edge.source).distance + edge.weight;
    if candidate < state.get(edge.target).distance {
      state.node_mut(edge.target).distance = candidate;
      state.set_previous(edge.target, edge);
      frontier.push(edge.target, candidate);
    }
  }
}

/// Dijkstra's shortest path search.
///
/// The frontier is ordered by `(distance, node id)`. With non-negative weights the route to the
/// target has minimal total weight once the target is popped; negative weights are not detected
/// and give undefined results.
pub fn dijkstra<G>(
  graph: G,
  state: &mut SearchState<G::NodeId>,
  source: G::NodeId,
  target: G::NodeId,
  observer: Option<&mut dyn Observer<G::NodeId>>,
) -> Result<Traversal>
where
  G: Copy + HasNodes + IntoEdges,
{
  run(
    AlgorithmKind::Weighted,
    graph,
    state,
    source,
    target,
    &ByDistance,
    observer,
  )
}
