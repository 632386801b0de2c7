use crate::graph::{GraphBase, Identifier};
use serde::{Deserialize, Serialize};

/// Edge weight(cost). Expected to be non-negative, which is not checked.
pub type Weight = f64;

/// Disambiguates parallel edges between the same pair of nodes.
pub type EdgeKey = u32;

/// A directed edge `source -> target` as seen by the search algorithms.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EdgeRef<N: Identifier> {
  pub source: N,
  pub target: N,
  pub key: EdgeKey,
  pub weight: Weight,
}

/// Weighted multigraph
///
/// The weight is the cost of traversing a specific edge. Since a pair of nodes may be connected
/// by several edges, lookups are either by key or for the cheapest of them.
pub trait Weighted: GraphBase {
  fn edge(
    &self,
    from: Self::NodeId,
    to: Self::NodeId,
    key: EdgeKey,
  ) -> Option<EdgeRef<Self::NodeId>>;
  fn cheapest_edge(&self, from: Self::NodeId, to: Self::NodeId)
    -> Option<EdgeRef<Self::NodeId>>;
}

impl<'a, G: Weighted> Weighted for &'a G {
  fn edge(
    &self,
    from: Self::NodeId,
    to: Self::NodeId,
    key: EdgeKey,
  ) -> Option<EdgeRef<Self::NodeId>> {
    (*self).edge(from, to, key)
  }

  fn cheapest_edge(&self, from: Self::NodeId, to: Self::NodeId) -> Option<EdgeRef<Self::NodeId>> {
    (*self).cheapest_edge(from, to)
  }
}
