//! Waypoint matching.

use crate::graph::{Identifier, Spatial};
use crate::spatial::*;
use serde::Serialize;
use std::fmt;

/// A free position snapped to the closest graph node.
#[derive(Copy, Clone, Serialize)]
pub struct MatchedNode<N: Identifier> {
  pub waypoint: Position,
  pub node: N,
  pub distance: f64,
}

/// Finds the node closest to `waypoint`, if it lies within `max_distance`.
pub fn match_node<G: Spatial>(
  graph: &G,
  waypoint: &Position,
  max_distance: f64,
) -> Option<MatchedNode<G::NodeId>> {
  let (node, distance_2) = graph.nearest_node(waypoint)?;
  let distance = distance_2.sqrt();
  if distance > max_distance {
    return None;
  }
  Some(MatchedNode {
    waypoint: *waypoint,
    node,
    distance,
  })
}

impl<N: Identifier> fmt::Debug for MatchedNode<N> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{{({}, {}) -> {:?}, d = {}}}",
      self.waypoint.x, self.waypoint.y, self.node, self.distance
    )
  }
}
