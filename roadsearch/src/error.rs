//! Error types.

use std::fmt::Debug;
use thiserror::Error;

/// Errors surfaced by searches, route reconstruction and configuration loading.
///
/// Node ids are rendered with their `Debug` representation so that the error type does not
/// depend on the graph's node id type.
#[derive(Error, Debug)]
pub enum SearchError {
  /// The node is not part of the graph. Reported before any search state is touched.
  #[error("node {node} does not exist in the graph")]
  InvalidNode { node: String },

  /// The target is not reachable from the source.
  #[error("no path found from {from} to {to}")]
  PathNotFound { from: String, to: String },

  #[error("invalid configuration: {0}")]
  Config(#[from] toml::de::Error),
}

impl SearchError {
  pub fn invalid_node<N: Debug>(node: N) -> Self {
    SearchError::InvalidNode {
      node: format!("{:?}", node),
    }
  }

  pub fn path_not_found<N: Debug>(from: N, to: N) -> Self {
    SearchError::PathNotFound {
      from: format!("{:?}", from),
      to: format!("{:?}", to),
    }
  }

  pub fn is_path_not_found(&self) -> bool {
    matches!(self, SearchError::PathNotFound { .. })
  }
}

pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors returned from an [`crate::observer::Observer`]. They are logged and otherwise ignored.
pub type ObserverError = Box<dyn std::error::Error + Send + Sync>;
