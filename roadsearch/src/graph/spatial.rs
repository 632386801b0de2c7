use crate::graph::GraphBase;
use crate::spatial::Position;

/// Defines how to obtain the planar position of a graph node
///
/// Positions are only consulted by heuristic searches and waypoint matching, never by the
/// relaxation rules themselves.
pub trait Located: GraphBase {
  fn position(&self, node: Self::NodeId) -> Option<Position>;
}

/// Defines a spatial index for graph nodes
pub trait Spatial: GraphBase {
  /// Closest node to `position` together with its squared euclidean distance.
  fn nearest_node(&self, position: &Position) -> Option<(Self::NodeId, f64)>;
}

impl<'a, G: Located> Located for &'a G {
  fn position(&self, node: Self::NodeId) -> Option<Position> {
    (*self).position(node)
  }
}

impl<'a, G: Spatial> Spatial for &'a G {
  fn nearest_node(&self, position: &Position) -> Option<(Self::NodeId, f64)> {
    (*self).nearest_node(position)
  }
}
