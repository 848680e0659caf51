//! Error types for nanonet-devices.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{element} requires a positive {parameter}, got {value}")]
    NonPositiveResistance {
        element: &'static str,
        parameter: &'static str,
        value: f64,
    },

    #[error("unknown {model} preset index {index}")]
    UnknownPreset { model: &'static str, index: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
