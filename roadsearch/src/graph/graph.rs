use std::fmt::Debug;
use std::hash::Hash;
use std::iter::Iterator;

use crate::graph::EdgeRef;

// ====== Basic traits =====

/// Requirements for a node identifier
///
/// `Ord` is required so that priority queues can break cost ties by node id.
pub trait Identifier: Eq + Hash + Ord + Copy + Debug {}
impl<T> Identifier for T where T: Eq + Hash + Ord + Copy + Debug {}

/// Defines type of the identifier for the graph
pub trait GraphBase {
  type NodeId: Identifier;
}

/// Node membership and enumeration.
pub trait HasNodes: GraphBase {
  fn contains_node(&self, node: Self::NodeId) -> bool;
  fn number_of_nodes(&self) -> usize;
  fn node_ids(&self) -> Vec<Self::NodeId>;
}

// ====== Edge access =====

/// Trait for defining graph connectivity
///
/// `IntoEdges::edges()` for node `u` must return every edge `(u, v, key)` of the graph, in a
/// stable order. Parallel edges between the same pair of nodes are returned separately.
pub trait IntoEdges: GraphBase {
  type Edges: Iterator<Item = EdgeRef<Self::NodeId>>;
  fn edges(self, node: Self::NodeId) -> Self::Edges;
}

/// Returns an iterator over all outgoing edges of the node
pub fn edges_forward<G: IntoEdges>(graph: G, node_id: G::NodeId) -> G::Edges {
  graph.edges(node_id)
}

// ====== Blanket implementations =====

impl<'a, G: GraphBase> GraphBase for &'a G {
  type NodeId = G::NodeId;
}

impl<'a, G: HasNodes> HasNodes for &'a G {
  fn contains_node(&self, node: Self::NodeId) -> bool {
    (*self).contains_node(node)
  }

  fn number_of_nodes(&self) -> usize {
    (*self).number_of_nodes()
  }

  fn node_ids(&self) -> Vec<Self::NodeId> {
    (*self).node_ids()
  }
}
