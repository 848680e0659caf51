//! # Nanonet
//!
//! Conduction solver for graph-structured resistive networks, such as
//! randomly generated stick/junction networks modelling percolating
//! nanoscale devices.
//!
//! A network is a graph whose edges each own one conduction element (a
//! fixed resistor, a threshold switch, or one of two nonlinear transistor
//! models). Solving assembles a Modified Nodal Analysis system, removes
//! the ground nodes, and yields node voltages, source currents and branch
//! current magnitudes. Gate voltages can be applied globally or to a
//! spatial subregion, then re-solved.
//!
//! ## Quick start
//!
//! ```rust
//! use nanonet::prelude::*;
//!
//! // node0 -- 1 ohm -- node1 -- 1 ohm -- node2
//! let mut graph = NetworkGraph::new();
//! for id in 0..3u32 {
//!     graph.add_node(NodeId::new(id), (id as f64, 0.0)).unwrap();
//! }
//! for i in 0..2u32 {
//!     let r: ConductanceElement = Resistor::new(1.0).unwrap().into();
//!     graph
//!         .add_edge(NodeId::new(i), NodeId::new(i + 1), r, (i as f64 + 0.5, 0.0))
//!         .unwrap();
//! }
//!
//! // ground node2, drive node0 at 5 V
//! let mut network =
//!     ConductionNetwork::new(graph, vec![NodeId::new(2)], vec![(NodeId::new(0), 5.0)]).unwrap();
//! network.update().unwrap();
//!
//! let v1 = network.voltage(NodeId::new(1)).unwrap();
//! assert!((v1 - 2.5).abs() < 1e-10);
//! assert!((network.source_currents()[0] - 2.5).abs() < 1e-10);
//! ```

// Re-export member crates
pub use nanonet_core as core;
pub use nanonet_devices as devices;
pub use nanonet_solver as solver;

// Convenient re-exports from nanonet_core
pub use nanonet_core::{
    Edge,
    // Errors
    Error as CoreError,
    GateArea,
    // Topology
    NetworkGraph,
    Node,
    NodeId,
    NodeOrder,
};

// MNA assembly (exported from submodule)
pub use nanonet_core::mna::{GroundRemap, MnaSystem, assemble, conductance_matrix};

// Convenient re-exports from nanonet_devices
pub use nanonet_devices::{
    ConductanceElement,
    // Errors
    Error as DeviceError,
    FermiDiracTransistor,
    JunctionType,
    LinExpTransistor,
    // Element models
    Resistor,
    ThresholdSwitch,
};

// Convenient re-exports from nanonet_solver
pub use nanonet_solver::{
    ConductionNetwork,
    // Errors
    Error as SolverError,
    solve_dense,
};

/// Re-export of nalgebra's dynamic matrix and vector types.
pub use nalgebra::{DMatrix, DVector};

/// Prelude module containing commonly used types.
///
/// ```rust
/// use nanonet::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        ConductanceElement, ConductionNetwork, FermiDiracTransistor, GateArea, JunctionType,
        LinExpTransistor, NetworkGraph, NodeId, Resistor, ThresholdSwitch,
    };

    pub use crate::{DMatrix, DVector};
}
