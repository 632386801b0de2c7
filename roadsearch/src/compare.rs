//! Side by side comparison of the search algorithms on one query.

use crate::config::CompareConfig;
use crate::error::Result;
use crate::graph::*;
use crate::route::reconstruct;
use crate::search::{astar_with, check_endpoints, execute, AlgorithmKind, ScaledEuclidean};
use crate::state::{initialize, SearchState};
use log::info;
use serde::Serialize;
use std::time::{Duration, Instant};

/// Measurements of a run that found a route.
#[derive(Clone, Debug, Serialize)]
pub struct AlgorithmMetrics<N: Identifier> {
  pub algorithm: AlgorithmKind,
  pub elapsed: Duration,
  pub cost: Weight,
  /// Nodes processed by the search.
  pub processed: usize,
  pub hops: usize,
  pub route: Vec<N>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome<N: Identifier> {
  Found(AlgorithmMetrics<N>),
  NotFound {
    algorithm: AlgorithmKind,
    elapsed: Duration,
    processed: usize,
  },
}

impl<N: Identifier> Outcome<N> {
  pub fn algorithm(&self) -> AlgorithmKind {
    match self {
      Outcome::Found(metrics) => metrics.algorithm,
      Outcome::NotFound { algorithm, .. } => *algorithm,
    }
  }

  pub fn metrics(&self) -> Option<&AlgorithmMetrics<N>> {
    match self {
      Outcome::Found(metrics) => Some(metrics),
      Outcome::NotFound { .. } => None,
    }
  }
}

/// Outcomes in run order.
#[derive(Clone, Debug, Serialize)]
pub struct Comparison<N: Identifier> {
  pub outcomes: Vec<Outcome<N>>,
}

impl<N: Identifier> Comparison<N> {
  pub fn get(&self, algorithm: AlgorithmKind) -> Option<&Outcome<N>> {
    self.outcomes.iter().find(|o| o.algorithm() == algorithm)
  }

  fn found(&self) -> impl Iterator<Item = &AlgorithmMetrics<N>> {
    self.outcomes.iter().filter_map(|o| o.metrics())
  }

  /// Lowest route cost; the earlier run wins ties.
  pub fn cheapest(&self) -> Option<&AlgorithmMetrics<N>> {
    self.found().min_by(|a, b| a.cost.total_cmp(&b.cost))
  }

  /// Fewest processed nodes among runs that found a route; the earlier run wins ties.
  pub fn fewest_processed(&self) -> Option<&AlgorithmMetrics<N>> {
    self.found().min_by_key(|m| m.processed)
  }
}

/// Runs every configured algorithm from `source` to `target` on a freshly initialized state and
/// collects route metrics.
pub fn compare<G>(
  graph: G,
  source: G::NodeId,
  target: G::NodeId,
  config: &CompareConfig,
) -> Result<Comparison<G::NodeId>>
where
  G: Copy + HasNodes + IntoEdges + Located + Weighted,
{
  check_endpoints(&graph, source, target)?;

  let mut state = SearchState::for_graph(&graph);
  let mut outcomes = Vec::with_capacity(config.algorithms.len());

  for &algorithm in &config.algorithms {
    initialize(&graph, &mut state);

    let timer = Instant::now();
    let traversal = match algorithm {
      AlgorithmKind::Heuristic => {
        let heuristic = ScaledEuclidean(config.heuristic_scale);
        astar_with(graph, &mut state, source, target, &heuristic, None)?
      }
      _ => execute(algorithm, graph, &mut state, source, target, None)?,
    };
    let elapsed = timer.elapsed();

    match reconstruct(graph, &state, source, target) {
      Ok(route) => {
        info!(
          "{} completed in {:.4}s with cost = {}, processed = {}, hops = {}",
          algorithm,
          elapsed.as_secs_f64(),
          route.cost,
          traversal.processed,
          route.hops
        );
        outcomes.push(Outcome::Found(AlgorithmMetrics {
          algorithm,
          elapsed,
          cost: route.cost,
          processed: traversal.processed,
          hops: route.hops,
          route: route.nodes,
        }));
      }
      Err(err) if err.is_path_not_found() => {
        info!("{} failed to find a valid path", algorithm);
        outcomes.push(Outcome::NotFound {
          algorithm,
          elapsed,
          processed: traversal.processed,
        });
      }
      Err(err) => return Err(err),
    }
  }

  Ok(Comparison { outcomes })
}
