//! Conduction-network solver for nanonet.
//!
//! Drives the full solve pipeline: refresh element conductances, assemble
//! the ground-eliminated MNA system, solve it with dense LU, and derive
//! node voltages, per-source currents and branch current magnitudes.
//! Gating entry points mutate element state and take effect on the next
//! [`ConductionNetwork::update`].

pub mod error;
pub mod linear;
pub mod network;

pub use error::{Error, Result};
pub use linear::solve_dense;
pub use network::ConductionNetwork;
