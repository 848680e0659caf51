//! Conduction-element models for nanonet.
//!
//! Each element turns a gate voltage into a strictly positive conductance:
//! a fixed resistor, a two-state threshold switch, and two nonlinear
//! transistor models (exponential and Fermi-Dirac gate response) whose
//! parameters come from fixed per-junction-type preset tables.

pub mod element;
pub mod error;
pub mod junction;

pub use element::{
    ConductanceElement, FermiDiracTransistor, LinExpTransistor, Resistor, ThresholdSwitch,
};
pub use error::{Error, Result};
pub use junction::JunctionType;
