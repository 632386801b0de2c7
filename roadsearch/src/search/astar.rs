use super::{run, AlgorithmKind, Relaxation, Traversal};
use crate::error::Result;
use crate::frontier::{Frontier, PriorityFrontier};
use crate::graph::*;
use crate::observer::Observer;
use crate::spatial::euclidean_distance;
use crate::state::SearchState;

/// Estimate of the remaining cost between two nodes.
///
/// A* returns a minimal route only if the estimate never exceeds the true remaining cost
/// (admissible) and is consistent. The estimate has to be in the same units as the edge weights.
pub trait Heuristic<G: GraphBase> {
  fn estimate(&self, graph: G, from: G::NodeId, to: G::NodeId) -> Weight;
}

/// Straight-line distance between node positions. Admissible when edge weights are lengths.
/// Nodes without a position estimate 0.
#[derive(Copy, Clone, Debug, Default)]
pub struct Euclidean;

impl<G: Located> Heuristic<G> for Euclidean {
  fn estimate(&self, graph: G, from: G::NodeId, to: G::NodeId) -> Weight {
    match (graph.position(from), graph.position(to)) {
      (Some(a), Some(b)) => euclidean_distance(&a, &b),
      _ => 0.0,
    }
  }
}

/// Straight-line distance multiplied by a constant.
///
/// For graphs weighted by travel time, `ScaledEuclidean(1.0 / max_speed)` converts the distance
/// into the fastest possible travel time and keeps the estimate admissible.
#[derive(Copy, Clone, Debug)]
pub struct ScaledEuclidean(pub f64);

impl<G: Located> Heuristic<G> for ScaledEuclidean {
  fn estimate(&self, graph: G, from: G::NodeId, to: G::NodeId) -> Weight {
    self.0 * Euclidean.estimate(graph, from, to)
  }
}

struct ByEstimate<'h, H> {
  heuristic: &'h H,
}

impl<'h, G: GraphBase, H: Heuristic<G>> Relaxation<G> for ByEstimate<'h, H> {
  type Frontier = PriorityFrontier<G::NodeId>;

  fn seed(
    &self,
    graph: G,
    state: &mut SearchState<G::NodeId>,
    frontier: &mut Self::Frontier,
    source: G::NodeId,
    target: G::NodeId,
  ) {
    let f_score = self.heuristic.estimate(graph, source, target);
    state.seed_source(source, f_score);
    frontier.push(source, f_score);
  }

  fn relax(
    &self,
    graph: G,
    state: &mut SearchState<G::NodeId>,
    frontier: &mut Self::Frontier,
    edge: &EdgeRef<G::NodeId>,
    target: G::NodeId,
  ) {
    let candidate = state.get(edge.source).g_score + edge.weight;
    if candidate < state.get(edge.target).g_score {
      let f_score = candidate + self.heuristic.estimate(graph, edge.target, target);
      let neighbor_state = state.node_mut(edge.target);
      neighbor_state.g_score = candidate;
      neighbor_state.f_score = f_score;
      state.set_previous(edge.target, edge);
      frontier.push(edge.target, f_score);
    }
  }
}

/// A* search guided by the [`Euclidean`] heuristic.
pub fn astar<G>(
  graph: G,
  state: &mut SearchState<G::NodeId>,
  source: G::NodeId,
  target: G::NodeId,
  observer: Option<&mut dyn Observer<G::NodeId>>,
) -> Result<Traversal>
where
  G: Copy + HasNodes + IntoEdges + Located,
{
  astar_with(graph, state, source, target, &Euclidean, observer)
}

/// A* search with a caller supplied heuristic. The frontier is ordered by `(f_score, node id)`.
pub fn astar_with<G, H>(
  graph: G,
  state: &mut SearchState<G::NodeId>,
  source: G::NodeId,
  target: G::NodeId,
  heuristic: &H,
  observer: Option<&mut dyn Observer<G::NodeId>>,
) -> Result<Traversal>
where
  G: Copy + HasNodes + IntoEdges,
  H: Heuristic<G>,
{
  run(
    AlgorithmKind::Heuristic,
    graph,
    state,
    source,
    target,
    &ByEstimate { heuristic },
    observer,
  )
}
