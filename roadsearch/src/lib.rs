//! Breadth-first, Dijkstra and A* route search over road networks.
//!
//! A search runs in three steps over a graph and a separate, reusable [`state::SearchState`]:
//!
//! 1. [`state::initialize`] resets every node to the baseline,
//! 2. [`search::execute`] runs one of the algorithms and leaves back-pointers in the state,
//! 3. [`route::reconstruct`] follows the back-pointers into a [`route::Route`].
//!
//! ```
//! use roadsearch::graph_impl::RoadGraph;
//! use roadsearch::route::reconstruct;
//! use roadsearch::search::{execute, AlgorithmKind};
//! use roadsearch::state::SearchState;
//!
//! let mut graph = RoadGraph::new();
//! graph.add_node(1, 0.0, 0.0).add_node(2, 1.0, 0.0).add_node(3, 2.0, 0.0);
//! graph.add_edge(1, 2, 1.0).unwrap();
//! graph.add_edge(2, 3, 1.0).unwrap();
//! graph.add_edge(1, 3, 5.0).unwrap();
//!
//! let mut state = SearchState::for_graph(&graph);
//! execute(AlgorithmKind::Weighted, &graph, &mut state, 1, 3, None).unwrap();
//!
//! let route = reconstruct(&graph, &state, 1, 3).unwrap();
//! assert_eq!(route.nodes, vec![1, 2, 3]);
//! assert_eq!(route.cost, 2.0);
//! ```

pub mod compare;
pub mod config;
pub mod error;
pub mod frontier;
pub mod graph;
pub mod graph_impl;
pub mod observer;
pub mod route;
pub mod search;
pub mod spatial;
pub mod state;
pub mod waypoint;

pub use error::{Result, SearchError};

#[cfg(test)]
mod test_utils;
