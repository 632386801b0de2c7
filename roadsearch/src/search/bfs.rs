use super::{run, AlgorithmKind, Relaxation, Traversal};
use crate::error::Result;
use crate::frontier::{FifoFrontier, Frontier};
use crate::graph::*;
use crate::observer::Observer;
use crate::state::SearchState;

struct Unweighted<N> {
  source: N,
}

impl<G: GraphBase> Relaxation<G> for Unweighted<G::NodeId> {
  type Frontier = FifoFrontier<G::NodeId>;

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
    let neighbor = edge.target;
    let neighbor_state = state.get(neighbor);
    // Only the first discovery sets the back-pointer, which keeps hop counts minimal
    if neighbor_state.visited || neighbor_state.previous.is_some() || neighbor == self.source {
      return;
    }
    state.set_previous(neighbor, edge);
    frontier.push(neighbor, 0.0);
  }
}

/// Breadth-first search. Ignores edge weights and finds a route with the fewest edges.
pub fn bfs<G>(
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
    AlgorithmKind::Unweighted,
    graph,
    state,
    source,
    target,
    &Unweighted { source },
    observer,
  )
}
