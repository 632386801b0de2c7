//! Set of traits for defining a graph abstraction.
//!
//! The module contains traits for defining directed, weighted multigraphs whose nodes carry a
//! planar position.
//!
mod graph;
mod spatial;
mod weighted;

pub use graph::*;
pub use spatial::*;
pub use weighted::*;
