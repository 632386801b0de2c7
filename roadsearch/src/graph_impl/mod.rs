//! Graph data structures.
//!
//! [`RoadGraph`] is an in-memory road network which can grow by adding nodes or edges. Nodes are
//! indexed in an R-tree so that arbitrary positions can be snapped to the closest node.

mod common;
mod road_graph;

pub use road_graph::*;
