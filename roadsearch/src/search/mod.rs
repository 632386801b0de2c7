//! Route search algorithms.
//!
//! Three strategies share one traversal loop and differ only in their frontier and relaxation
//! rule:
//!
//! | Kind | Frontier | Relaxation |
//! |---|---|---|
//! | [`AlgorithmKind::Unweighted`] | FIFO | first discovery sets the back-pointer |
//! | [`AlgorithmKind::Weighted`] | min `(distance, id)` | `distance[u] + w < distance[v]` |
//! | [`AlgorithmKind::Heuristic`] | min `(f_score, id)` | `g_score[u] + w < g_score[v]` |
//!
//! A search does not return a route. It leaves back-pointers in the [`SearchState`], which
//! [`crate::route::reconstruct`] turns into a [`crate::route::Route`]. The state must be reset with
//! [`crate::state::initialize`] before every run.

mod astar;
mod bfs;
mod dijkstra;

pub use astar::{astar, astar_with, Euclidean, Heuristic, ScaledEuclidean};
pub use bfs::bfs;
pub use dijkstra::dijkstra;

use crate::error::{Result, SearchError};
use crate::frontier::Frontier;
use crate::graph::*;
use crate::observer::Observer;
use crate::state::SearchState;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Instant;

/// Selects one of the search strategies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlgorithmKind {
  #[serde(alias = "bfs")]
  Unweighted,
  #[serde(alias = "dijkstra")]
  Weighted,
  #[serde(alias = "astar", alias = "a*")]
  Heuristic,
}

impl AlgorithmKind {
  pub const ALL: [AlgorithmKind; 3] = [
    AlgorithmKind::Unweighted,
    AlgorithmKind::Weighted,
    AlgorithmKind::Heuristic,
  ];

  pub fn name(&self) -> &'static str {
    match self {
      AlgorithmKind::Unweighted => "BFS",
      AlgorithmKind::Weighted => "Dijkstra",
      AlgorithmKind::Heuristic => "A*",
    }
  }
}

impl fmt::Display for AlgorithmKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.name())
  }
}

impl FromStr for AlgorithmKind {
  type Err = String;

  fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
    match s.to_ascii_lowercase().as_str() {
      "unweighted" | "bfs" => Ok(AlgorithmKind::Unweighted),
      "weighted" | "dijkstra" => Ok(AlgorithmKind::Weighted),
      "heuristic" | "astar" | "a*" => Ok(AlgorithmKind::Heuristic),
      _ => Err(format!("Unknown algorithm: {}", s)),
    }
  }
}

/// Summary of a finished search.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Traversal {
  /// Nodes marked visited, i.e. popped from the frontier for the first time.
  pub processed: usize,
  /// Frontier pushes, stale duplicates included.
  pub enqueued: usize,
  /// Whether the target was popped. `false` means the frontier ran empty.
  pub reached: bool,
}

/// Runs the selected search from `source` towards `target`, mutating `state`.
///
/// Fails with [`SearchError::InvalidNode`] if either endpoint is not in the graph. An unreachable
/// target is not an error: the search stops when the frontier is exhausted and `target` keeps no
/// back-pointer.
pub fn execute<G>(
  kind: AlgorithmKind,
  graph: G,
  state: &mut SearchState<G::NodeId>,
  source: G::NodeId,
  target: G::NodeId,
  observer: Option<&mut dyn Observer<G::NodeId>>,
) -> Result<Traversal>
where
  G: Copy + HasNodes + IntoEdges + Located,
{
  match kind {
    AlgorithmKind::Unweighted => bfs(graph, state, source, target, observer),
    AlgorithmKind::Weighted => dijkstra(graph, state, source, target, observer),
    AlgorithmKind::Heuristic => astar(graph, state, source, target, observer),
  }
}

pub(crate) fn check_endpoints<G: HasNodes>(
  graph: &G,
  source: G::NodeId,
  target: G::NodeId,
) -> Result<()> {
  for node in &[source, target] {
    if !graph.contains_node(*node) {
      return Err(SearchError::invalid_node(*node));
    }
  }
  Ok(())
}

/// Strategy specific part of a search: how the frontier is seeded and how an edge is relaxed.
pub(crate) trait Relaxation<G: GraphBase> {
  type Frontier: Frontier<G::NodeId> + Default;

  fn seed(
    &self,
    graph: G,
    state: &mut SearchState<G::NodeId>,
    frontier: &mut Self::Frontier,
    source: G::NodeId,
    target: G::NodeId,
  );

  fn relax(
    &self,
    graph: G,
    state: &mut SearchState<G::NodeId>,
    frontier: &mut Self::Frontier,
    edge: &EdgeRef<G::NodeId>,
    target: G::NodeId,
  );
}

/// Validates endpoints, then runs [`traverse`] with timing and logging.
pub(crate) fn run<G, R>(
  kind: AlgorithmKind,
  graph: G,
  state: &mut SearchState<G::NodeId>,
  source: G::NodeId,
  target: G::NodeId,
  relaxation: &R,
  observer: Option<&mut dyn Observer<G::NodeId>>,
) -> Result<Traversal>
where
  G: Copy + HasNodes + IntoEdges,
  R: Relaxation<G>,
{
  check_endpoints(&graph, source, target)?;

  info!("{} started: {:?} -> {:?}", kind, source, target);
  let timer = Instant::now();

  let traversal = traverse(graph, state, source, target, relaxation, observer);

  if !traversal.reached {
    debug!("{}: frontier exhausted before reaching {:?}", kind, target);
  }
  info!(
    "{} completed in {:.4}s: processed = {}, enqueued = {}, reached = {}",
    kind,
    timer.elapsed().as_secs_f64(),
    traversal.processed,
    traversal.enqueued,
    traversal.reached
  );
  Ok(traversal)
}

/// The shared traversal loop.
///
/// A popped node that is already visited is a stale entry and is skipped. Otherwise it is marked
/// visited, its out-edges are relaxed (unless it is the target), the observer is notified, and
/// the loop stops if the node is the target.
pub(crate) fn traverse<G, R>(
  graph: G,
  state: &mut SearchState<G::NodeId>,
  source: G::NodeId,
  target: G::NodeId,
  relaxation: &R,
  mut observer: Option<&mut dyn Observer<G::NodeId>>,
) -> Traversal
where
  G: Copy + IntoEdges,
  R: Relaxation<G>,
{
  let mut frontier = R::Frontier::default();
  relaxation.seed(graph, state, &mut frontier, source, target);

  let mut processed = 0;
  let mut reached = false;

  while let Some(node) = frontier.pop() {
    if !state.mark_visited(node) {
      continue;
    }
    processed += 1;

    if node != target {
      for edge in edges_forward(graph, node) {
        relaxation.relax(graph, state, &mut frontier, &edge, target);
      }
    }

    if let Some(observer) = observer.as_deref_mut() {
      notify(observer, node);
    }

    if node == target {
      reached = true;
      break;
    }
  }

  Traversal {
    processed,
    enqueued: frontier.pushed(),
    reached,
  }
}

fn notify<N: Identifier>(observer: &mut dyn Observer<N>, node: N) {
  if let Err(err) = observer.node_processed(node) {
    warn!("Observer failed on node {:?}: {}", node, err);
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::observer::ObserverResult;
  use crate::state::initialize;
  use crate::test_utils::*;

  #[test]
  fn test_each_node_processed_once() {
    let graph = grid_graph(5, 4);
    let mut state = SearchState::for_graph(&graph);

    for kind in AlgorithmKind::ALL.iter() {
      initialize(&graph, &mut state);
      let mut processed = Vec::new();
      let mut observer = |node: u32| -> ObserverResult {
        processed.push(node);
        Ok(())
      };
      let traversal = execute(*kind, &graph, &mut state, 0, 19, Some(&mut observer)).unwrap();

      assert!(traversal.reached, "{} did not reach the target", kind);
      assert_eq!(traversal.processed, state.visited_count());
      assert_eq!(processed.len(), traversal.processed);

      let mut unique = processed.clone();
      unique.sort();
      unique.dedup();
      assert_eq!(unique, state.visited_nodes());
      assert_eq!(processed.last(), Some(&19));
    }
  }

  #[test]
  fn test_exhausts_whole_component_when_unreachable() {
    let graph = line_graph_with_island();

    for kind in AlgorithmKind::ALL.iter() {
      let mut state = SearchState::for_graph(&graph);
      let traversal = execute(*kind, &graph, &mut state, 'A', 'F', None).unwrap();

      assert!(!traversal.reached);
      assert_eq!(traversal.processed, 5);
      assert_eq!(state.visited_nodes(), vec!['A', 'B', 'C', 'D', 'E']);
      assert_eq!(state.previous('F'), None);
    }
  }

  #[test]
  fn test_source_equals_target() {
    let graph = line_graph();

    for kind in AlgorithmKind::ALL.iter() {
      let mut state = SearchState::for_graph(&graph);
      let traversal = execute(*kind, &graph, &mut state, 'A', 'A', None).unwrap();

      assert!(traversal.reached);
      assert_eq!(traversal.processed, 1);
      assert_eq!(traversal.enqueued, 1);
      assert_eq!(state.previous('B'), None);
    }
  }

  #[test]
  fn test_every_search_seeds_source() {
    let graph = line_graph();

    for kind in AlgorithmKind::ALL.iter() {
      let mut state = SearchState::for_graph(&graph);
      execute(*kind, &graph, &mut state, 'A', 'E', None).unwrap();

      let source = state.get('A');
      assert_eq!(source.distance, 0.0, "{}", kind);
      assert_eq!(source.g_score, 0.0, "{}", kind);
      let estimate = if *kind == AlgorithmKind::Heuristic { 4.0 } else { 0.0 };
      assert_eq!(source.f_score, estimate, "{}", kind);
    }
  }

  #[test]
  fn test_invalid_nodes_rejected_before_search() {
    let graph = line_graph();

    for kind in AlgorithmKind::ALL.iter() {
      let mut state = SearchState::for_graph(&graph);
      let err = execute(*kind, &graph, &mut state, 'A', 'Q', None).unwrap_err();
      assert!(matches!(err, SearchError::InvalidNode { .. }));

      let err = execute(*kind, &graph, &mut state, 'Q', 'A', None).unwrap_err();
      assert!(matches!(err, SearchError::InvalidNode { .. }));
      assert_eq!(state.visited_count(), 0);
    }
  }

  #[test]
  fn test_failing_observer_does_not_abort() {
    let graph = line_graph();
    let mut state = SearchState::for_graph(&graph);
    let mut calls = 0;
    let mut observer = |_: char| -> ObserverResult {
      calls += 1;
      Err("frame capture failed".into())
    };

    let traversal = execute(
      AlgorithmKind::Weighted,
      &graph,
      &mut state,
      'A',
      'E',
      Some(&mut observer),
    )
    .unwrap();

    assert!(traversal.reached);
    assert_eq!(calls, traversal.processed);
  }

  #[test]
  fn test_algorithm_kind_names() {
    assert_eq!("bfs".parse::<AlgorithmKind>(), Ok(AlgorithmKind::Unweighted));
    assert_eq!("Dijkstra".parse::<AlgorithmKind>(), Ok(AlgorithmKind::Weighted));
    assert_eq!("A*".parse::<AlgorithmKind>(), Ok(AlgorithmKind::Heuristic));
    assert!("greedy".parse::<AlgorithmKind>().is_err());
    assert_eq!(AlgorithmKind::Heuristic.to_string(), "A*");
  }
}
