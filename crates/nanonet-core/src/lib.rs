//! Core topology and MNA assembly for nanonet.
//!
//! This crate holds the graph representation of a conduction network
//! (nodes with physical positions, edges owning conduction elements) and
//! the Modified Nodal Analysis assembly: conductance Laplacian, source
//! incidence blocks, ground elimination via an explicit index remap, and
//! the right-hand-side vector.

pub mod error;
pub mod gate;
pub mod graph;
pub mod mna;
pub mod node;

pub use error::{Error, Result};
pub use gate::GateArea;
pub use graph::{Edge, NetworkGraph, NodeOrder};
pub use node::{Node, NodeId};
