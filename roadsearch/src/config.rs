//! Comparator configuration.

use crate::error::Result;
use crate::search::AlgorithmKind;
use serde::{Deserialize, Serialize};

/// Which algorithms [`crate::compare::compare`] runs and how.
///
/// ```toml
/// algorithms = ["dijkstra", "astar", "bfs"]
/// heuristic_scale = 0.0277
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareConfig {
  /// Algorithms in run order.
  pub algorithms: Vec<AlgorithmKind>,
  /// Multiplier for the euclidean A* estimate. Use `1 / max_speed` for travel time weights.
  pub heuristic_scale: f64,
}

impl Default for CompareConfig {
  fn default() -> Self {
    Self {
      algorithms: vec![
        AlgorithmKind::Weighted,
        AlgorithmKind::Heuristic,
        AlgorithmKind::Unweighted,
      ],
      heuristic_scale: 1.0,
    }
  }
}

impl CompareConfig {
  pub fn from_toml_str(s: &str) -> Result<Self> {
    Ok(toml::from_str(s)?)
  }
}
