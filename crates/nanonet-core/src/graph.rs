//! Network topology: nodes, edges, and the conduction elements they own.

use indexmap::IndexMap;
use nanonet_devices::ConductanceElement;

use crate::error::{Error, Result};
use crate::gate::GateArea;
use crate::node::{Node, NodeId};

/// An edge of the conduction graph. Each edge exclusively owns one
/// conduction element and carries the values derived from it.
#[derive(Debug, Clone)]
pub struct Edge {
    /// Unordered endpoint pair.
    pub nodes: (NodeId, NodeId),
    /// Physical position of the junction, used only for spatial gating.
    pub position: (f64, f64),
    pub element: ConductanceElement,
    /// Conductance at the element's current gate voltage, refreshed by
    /// [`NetworkGraph::refresh_conductances`].
    pub conductance: f64,
    /// 1 / conductance.
    pub resistance: f64,
    /// Branch current magnitude from the most recent solve. Zero until the
    /// first solve; direction is not modelled.
    pub current: f64,
}

/// The topology holder: node records keyed by id, edges in insertion
/// order. Edge iteration order is stable across calls, so matrix assembly
/// is deterministic; parallel edges are simply repeated entries.
#[derive(Debug, Clone, Default)]
pub struct NetworkGraph {
    nodes: IndexMap<NodeId, Node>,
    edges: Vec<Edge>,
}

impl NetworkGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node at the given physical position.
    pub fn add_node(&mut self, id: NodeId, position: (f64, f64)) -> Result<()> {
        if self.nodes.contains_key(&id) {
            return Err(Error::DuplicateNode(id));
        }
        self.nodes.insert(id, Node::new(id, position));
        Ok(())
    }

    /// Add an edge owning `element`, positioned at `position`. Both
    /// endpoints must already exist.
    pub fn add_edge(
        &mut self,
        a: NodeId,
        b: NodeId,
        element: ConductanceElement,
        position: (f64, f64),
    ) -> Result<()> {
        for id in [a, b] {
            if !self.nodes.contains_key(&id) {
                return Err(Error::NodeNotFound(id));
            }
        }
        let conductance = element.conductance();
        self.edges.push(Edge {
            nodes: (a, b),
            position,
            element,
            conductance,
            resistance: 1.0 / conductance,
            current: 0.0,
        });
        Ok(())
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(&id)
    }

    pub fn has_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edges_mut(&mut self) -> &mut [Edge] {
        &mut self.edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Re-read every edge's element and update the derived conductance and
    /// resistance fields.
    pub fn refresh_conductances(&mut self) {
        for edge in &mut self.edges {
            let g = edge.element.conductance();
            edge.conductance = g;
            edge.resistance = 1.0 / g;
        }
    }

    /// The deterministic node ordering used for matrix assembly:
    /// ascending node id.
    pub fn node_order(&self) -> NodeOrder {
        let mut ids: Vec<NodeId> = self.nodes.keys().copied().collect();
        ids.sort_unstable();
        NodeOrder { ids }
    }

    /// Indices of the edges whose position lies within `area` (inclusive
    /// bounds), in edge order.
    pub fn edges_in_area(&self, area: &GateArea) -> Vec<usize> {
        self.edges
            .iter()
            .enumerate()
            .filter(|(_, e)| area.contains(e.position))
            .map(|(i, _)| i)
            .collect()
    }
}

/// Assembly-time node ordering: maps between node ids and matrix row
/// positions.
#[derive(Debug, Clone)]
pub struct NodeOrder {
    ids: Vec<NodeId>,
}

impl NodeOrder {
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Node id at matrix position `index`.
    pub fn id(&self, index: usize) -> NodeId {
        self.ids[index]
    }

    /// Matrix position of `id`, if it is part of the ordering.
    pub fn position(&self, id: NodeId) -> Option<usize> {
        self.ids.binary_search(&id).ok()
    }

    pub fn ids(&self) -> &[NodeId] {
        &self.ids
    }
}
