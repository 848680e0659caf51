//! The conduction network driver.
//!
//! [`ConductionNetwork`] owns a topology plus its ground/source
//! configuration, and turns gate-voltage state into solved node voltages,
//! source currents and branch currents via one full MNA pass per
//! [`update`](ConductionNetwork::update).

use nanonet_core::gate::GateArea;
use nanonet_core::graph::NetworkGraph;
use nanonet_core::mna;
use nanonet_core::node::NodeId;

use crate::error::Result;
use crate::linear::solve_dense;

/// A conduction network ready to solve: graph topology, an ordered set of
/// ground nodes fixed at 0 V, and an ordered list of voltage sources.
///
/// Not safe for concurrent mutation: gating calls and `update` share the
/// element and topology state.
#[derive(Debug)]
pub struct ConductionNetwork {
    graph: NetworkGraph,
    ground_nodes: Vec<NodeId>,
    voltage_sources: Vec<(NodeId, f64)>,
    /// Per-source solved currents, parallel to `voltage_sources`. Empty
    /// until the first successful solve.
    source_currents: Vec<f64>,
    /// Append-only log of local gate applications, kept for diagnostics
    /// only; conductance always derives from each element's current gate
    /// voltage, never from this history.
    gate_history: Vec<(GateArea, f64)>,
}

impl ConductionNetwork {
    /// Create a network over `graph`. Fails fast on an empty source list,
    /// ground or source nodes missing from the graph, duplicate ground
    /// nodes, or a node that is both grounded and driven.
    pub fn new(
        graph: NetworkGraph,
        ground_nodes: Vec<NodeId>,
        voltage_sources: Vec<(NodeId, f64)>,
    ) -> Result<Self> {
        use nanonet_core::Error as ConfigError;

        if voltage_sources.is_empty() {
            return Err(ConfigError::NoVoltageSources.into());
        }
        for (i, &id) in ground_nodes.iter().enumerate() {
            if !graph.has_node(id) {
                return Err(ConfigError::NodeNotFound(id).into());
            }
            if ground_nodes[..i].contains(&id) {
                return Err(ConfigError::DuplicateGround(id).into());
            }
        }
        for &(id, _) in &voltage_sources {
            if !graph.has_node(id) {
                return Err(ConfigError::NodeNotFound(id).into());
            }
            if ground_nodes.contains(&id) {
                return Err(ConfigError::GroundedSource(id).into());
            }
        }

        Ok(Self {
            graph,
            ground_nodes,
            voltage_sources,
            source_currents: Vec::new(),
            gate_history: Vec::new(),
        })
    }

    /// Full recompute: refresh conductances, assemble the ground-eliminated
    /// MNA system, solve it, and derive node voltages, source currents and
    /// branch current magnitudes.
    ///
    /// On failure the previously solved voltages and currents are left
    /// untouched; only the refreshed conductances (a pure function of
    /// element state) may have changed.
    pub fn update(&mut self) -> Result<()> {
        self.graph.refresh_conductances();

        let order = self.graph.node_order();
        let system = mna::assemble(
            &self.graph,
            &order,
            &self.ground_nodes,
            &self.voltage_sources,
        )?;
        tracing::debug!(
            unknowns = system.size(),
            nodes = order.len(),
            sources = self.voltage_sources.len(),
            grounds = self.ground_nodes.len(),
            "solving conduction network"
        );
        let solution = solve_dense(&system.matrix, &system.rhs)?;

        let voltages = system.remap.scatter_voltages(&solution);
        for (position, &id) in order.ids().iter().enumerate() {
            let node = self
                .graph
                .node_mut(id)
                .expect("ordered node present in graph");
            node.voltage = Some(voltages[position]);
        }

        // Raw branch currents flow out of the network into the source;
        // expose them with positive = injected by the source.
        self.source_currents = system
            .remap
            .source_currents(&solution)
            .iter()
            .map(|&i| -i)
            .collect();

        for edge in self.graph.edges_mut() {
            let i = order
                .position(edge.nodes.0)
                .expect("edge endpoint present in node order");
            let j = order
                .position(edge.nodes.1)
                .expect("edge endpoint present in node order");
            edge.current = (edge.conductance * (voltages[i] - voltages[j])).abs();
        }

        Ok(())
    }

    /// Set the gate voltage on every edge's element. Takes effect on the
    /// next `update`.
    pub fn set_global_gate(&mut self, voltage: f64) {
        for edge in self.graph.edges_mut() {
            edge.element.set_gate_voltage(voltage);
        }
    }

    /// Set the gate voltage on the elements of edges positioned within
    /// `area` (inclusive bounds), and log the application. Takes effect on
    /// the next `update`.
    pub fn set_local_gate(&mut self, area: GateArea, voltage: f64) {
        let selected = self.graph.edges_in_area(&area);
        tracing::debug!(edges = selected.len(), ?area, voltage, "local gate");
        for index in selected {
            self.graph.edges_mut()[index].element.set_gate_voltage(voltage);
        }
        self.gate_history.push((area, voltage));
    }

    /// Solved voltage at `id`; `None` for an unknown node or before the
    /// first successful solve.
    pub fn voltage(&self, id: NodeId) -> Option<f64> {
        self.graph.node(id).and_then(|n| n.voltage)
    }

    /// Whether `id` is one of this network's ground nodes.
    pub fn is_ground(&self, id: NodeId) -> bool {
        self.ground_nodes.contains(&id)
    }

    /// Per-source currents from the last solve, in source order, positive
    /// when the source injects current into the network.
    pub fn source_currents(&self) -> &[f64] {
        &self.source_currents
    }

    pub fn ground_nodes(&self) -> &[NodeId] {
        &self.ground_nodes
    }

    pub fn voltage_sources(&self) -> &[(NodeId, f64)] {
        &self.voltage_sources
    }

    /// The local-gate application log, oldest first.
    pub fn gate_history(&self) -> &[(GateArea, f64)] {
        &self.gate_history
    }

    pub fn graph(&self) -> &NetworkGraph {
        &self.graph
    }

    pub fn graph_mut(&mut self) -> &mut NetworkGraph {
        &mut self.graph
    }
}
