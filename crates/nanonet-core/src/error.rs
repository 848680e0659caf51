//! Error types for nanonet-core.

use thiserror::Error;

use crate::node::NodeId;

/// Configuration errors raised eagerly at construction or assembly time.
#[derive(Debug, Error)]
pub enum Error {
    #[error("node not found: {0}")]
    NodeNotFound(NodeId),

    #[error("duplicate node: {0}")]
    DuplicateNode(NodeId),

    #[error("duplicate ground node: {0}")]
    DuplicateGround(NodeId),

    #[error("no voltage sources defined")]
    NoVoltageSources,

    #[error("node {0} is both a ground node and a voltage-source node")]
    GroundedSource(NodeId),
}

pub type Result<T> = std::result::Result<T, Error>;
