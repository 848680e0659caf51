//! Node representation for the conduction graph.

use std::fmt;

/// Unique identifier for a node in the network.
///
/// There is no distinguished ground id; ground membership is a property of
/// a particular network configuration, not of the node itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    pub fn new(id: u32) -> Self {
        NodeId(id)
    }

    pub fn as_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// A node in the network: a junction or electrode contact point in the
/// physical stick layout.
#[derive(Debug, Clone)]
pub struct Node {
    pub id: NodeId,
    /// Physical (x, y) position in the device plane.
    pub position: (f64, f64),
    /// Solved voltage. `None` until the first successful solve.
    pub voltage: Option<f64>,
}

impl Node {
    pub fn new(id: NodeId, position: (f64, f64)) -> Self {
        Self {
            id,
            position,
            voltage: None,
        }
    }
}
