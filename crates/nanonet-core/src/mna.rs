//! Modified Nodal Analysis assembly.
//!
//! The network is described by the block system
//!
//! ```text
//! [ L  B ] [ v ]   [ 0 ]
//! [ Bt 0 ] [ i ] = [ vs ]
//! ```
//!
//! where `L` is the conductance Laplacian over all nodes, `B` the
//! voltage-source incidence matrix, `v` the node voltages and `i` the
//! source branch currents. Ground rows and columns are removed before
//! solving via a precomputed index remap, and the same remap scatters the
//! ground zeros back into the solution afterwards.

use nalgebra::{DMatrix, DVector};

use crate::error::{Error, Result};
use crate::graph::{NetworkGraph, NodeOrder};
use crate::node::NodeId;

/// Conductance (Laplacian) matrix over `order`: diagonal entry i is the
/// sum of conductances incident to node i, off-diagonal (i, j) the
/// negated sum of conductances of all edges between i and j. Every row
/// sums to zero.
pub fn conductance_matrix(graph: &NetworkGraph, order: &NodeOrder) -> DMatrix<f64> {
    let n = order.len();
    let mut l = DMatrix::zeros(n, n);
    for edge in graph.edges() {
        let i = order
            .position(edge.nodes.0)
            .expect("edge endpoint present in node order");
        let j = order
            .position(edge.nodes.1)
            .expect("edge endpoint present in node order");
        let g = edge.conductance;
        l[(i, i)] += g;
        l[(j, j)] += g;
        l[(i, j)] -= g;
        l[(j, i)] -= g;
    }
    l
}

/// Index remap for ground elimination, computed once per assembly.
///
/// `kept` holds the augmented-system indices that survive elimination, in
/// ascending order; position `k` of the reduced system corresponds to
/// original index `kept[k]`. The remap is applied by explicit gather when
/// building the reduced matrix and explicit scatter when reinserting the
/// ground voltages, so no index ever shifts mid-operation.
#[derive(Debug, Clone)]
pub struct GroundRemap {
    kept: Vec<usize>,
    ground_positions: Vec<usize>,
    num_nodes: usize,
}

impl GroundRemap {
    /// `ground_positions` are node-order positions; they are sorted and
    /// deduplicated here so the free-node count stays consistent with the
    /// kept index set for any input.
    pub fn new(num_nodes: usize, num_sources: usize, mut ground_positions: Vec<usize>) -> Self {
        ground_positions.sort_unstable();
        ground_positions.dedup();
        let kept = (0..num_nodes + num_sources)
            .filter(|i| ground_positions.binary_search(i).is_err())
            .collect();
        Self {
            kept,
            ground_positions,
            num_nodes,
        }
    }

    /// Size of the reduced system: n + m - g.
    pub fn reduced_len(&self) -> usize {
        self.kept.len()
    }

    pub fn num_grounds(&self) -> usize {
        self.ground_positions.len()
    }

    /// Number of non-ground node unknowns (n - g).
    pub fn num_free_nodes(&self) -> usize {
        self.num_nodes - self.ground_positions.len()
    }

    /// Gather the kept rows and columns of the full augmented matrix.
    pub fn gather(&self, full: &DMatrix<f64>) -> DMatrix<f64> {
        DMatrix::from_fn(self.kept.len(), self.kept.len(), |r, c| {
            full[(self.kept[r], self.kept[c])]
        })
    }

    /// Scatter the node-voltage part of a reduced solution back to a full
    /// length-n vector, with zeros at the ground positions.
    pub fn scatter_voltages(&self, solution: &DVector<f64>) -> DVector<f64> {
        let mut voltages = DVector::zeros(self.num_nodes);
        for (slot, &original) in self.kept.iter().take(self.num_free_nodes()).enumerate() {
            voltages[original] = solution[slot];
        }
        voltages
    }

    /// The trailing per-source branch currents of a reduced solution, in
    /// source order.
    pub fn source_currents<'a>(&self, solution: &'a DVector<f64>) -> &'a [f64] {
        &solution.as_slice()[self.num_free_nodes()..]
    }
}

/// An assembled, ground-eliminated MNA system ready to solve.
#[derive(Debug, Clone)]
pub struct MnaSystem {
    /// The reduced coefficient matrix A, (n + m - g) square.
    pub matrix: DMatrix<f64>,
    /// Right-hand side: zeros for the current-conservation rows, then the
    /// source voltages in source order.
    pub rhs: DVector<f64>,
    /// The ground-elimination remap used to build `matrix`.
    pub remap: GroundRemap,
}

impl MnaSystem {
    pub fn size(&self) -> usize {
        self.remap.reduced_len()
    }
}

/// Assemble the ground-eliminated MNA system for `graph` with the given
/// ground set and voltage sources.
///
/// Assumes `refresh_conductances` has already run; uses each edge's stored
/// conductance as-is.
pub fn assemble(
    graph: &NetworkGraph,
    order: &NodeOrder,
    ground_nodes: &[NodeId],
    voltage_sources: &[(NodeId, f64)],
) -> Result<MnaSystem> {
    let n = order.len();
    let m = voltage_sources.len();

    let mut full = DMatrix::zeros(n + m, n + m);
    full.view_mut((0, 0), (n, n))
        .copy_from(&conductance_matrix(graph, order));

    // B and Bt blocks: source k pins its node's voltage and introduces one
    // branch-current unknown.
    for (k, &(id, _)) in voltage_sources.iter().enumerate() {
        let i = order.position(id).ok_or(Error::NodeNotFound(id))?;
        full[(i, n + k)] = 1.0;
        full[(n + k, i)] = 1.0;
    }

    let mut ground_positions = Vec::with_capacity(ground_nodes.len());
    for &id in ground_nodes {
        let position = order.position(id).ok_or(Error::NodeNotFound(id))?;
        if ground_positions.contains(&position) {
            return Err(Error::DuplicateGround(id));
        }
        ground_positions.push(position);
    }

    let remap = GroundRemap::new(n, m, ground_positions);
    let matrix = remap.gather(&full);

    let mut rhs = DVector::zeros(remap.reduced_len());
    for (k, &(_, voltage)) in voltage_sources.iter().enumerate() {
        rhs[remap.num_free_nodes() + k] = voltage;
    }

    Ok(MnaSystem { matrix, rhs, remap })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::NetworkGraph;
    use approx::assert_relative_eq;
    use nanonet_devices::{ConductanceElement, Resistor};

    fn resistor(r: f64) -> ConductanceElement {
        Resistor::new(r).unwrap().into()
    }

    /// node0 -- 1ohm -- node1 -- 2ohm -- node2
    fn chain() -> NetworkGraph {
        let mut g = NetworkGraph::new();
        for id in 0..3u32 {
            g.add_node(NodeId::new(id), (id as f64, 0.0)).unwrap();
        }
        g.add_edge(NodeId::new(0), NodeId::new(1), resistor(1.0), (0.5, 0.0))
            .unwrap();
        g.add_edge(NodeId::new(1), NodeId::new(2), resistor(2.0), (1.5, 0.0))
            .unwrap();
        g
    }

    #[test]
    fn test_conductance_matrix_rows_sum_to_zero() {
        let g = chain();
        let l = conductance_matrix(&g, &g.node_order());
        for row in 0..3 {
            assert_relative_eq!(l.row(row).sum(), 0.0, epsilon = 1e-12);
        }
        assert_relative_eq!(l[(0, 0)], 1.0);
        assert_relative_eq!(l[(1, 1)], 1.5);
        assert_relative_eq!(l[(0, 1)], -1.0);
    }

    #[test]
    fn test_parallel_edges_accumulate() {
        let mut g = NetworkGraph::new();
        g.add_node(NodeId::new(0), (0.0, 0.0)).unwrap();
        g.add_node(NodeId::new(1), (1.0, 0.0)).unwrap();
        g.add_edge(NodeId::new(0), NodeId::new(1), resistor(1.0), (0.5, 0.0))
            .unwrap();
        g.add_edge(NodeId::new(0), NodeId::new(1), resistor(0.5), (0.5, 0.1))
            .unwrap();

        let l = conductance_matrix(&g, &g.node_order());
        assert_relative_eq!(l[(0, 1)], -3.0);
        assert_relative_eq!(l[(0, 0)], 3.0);
    }

    #[test]
    fn test_assembled_dimensions() {
        let g = chain();
        let order = g.node_order();
        let sys = assemble(&g, &order, &[NodeId::new(2)], &[(NodeId::new(0), 5.0)]).unwrap();
        // n + m - g = 3 + 1 - 1
        assert_eq!(sys.size(), 3);
        assert_eq!(sys.rhs.len(), 3);
        assert_relative_eq!(sys.rhs[0], 0.0);
        assert_relative_eq!(sys.rhs[1], 0.0);
        assert_relative_eq!(sys.rhs[2], 5.0);
    }

    #[test]
    fn test_source_incidence_survives_elimination() {
        let g = chain();
        let order = g.node_order();
        let sys = assemble(&g, &order, &[NodeId::new(2)], &[(NodeId::new(0), 5.0)]).unwrap();
        // after removing ground position 2, node0 stays row 0 and the
        // source column is the last one
        assert_relative_eq!(sys.matrix[(0, 2)], 1.0);
        assert_relative_eq!(sys.matrix[(2, 0)], 1.0);
        assert_relative_eq!(sys.matrix[(1, 2)], 0.0);
    }

    #[test]
    fn test_remap_is_position_stable() {
        // eliminating positions {1, 3} must not shift as it goes: kept
        // indices are computed once
        let remap = GroundRemap::new(5, 1, vec![1, 3]);
        assert_eq!(remap.reduced_len(), 4);
        assert_eq!(remap.num_free_nodes(), 3);

        let full = DMatrix::from_fn(6, 6, |r, c| (r * 10 + c) as f64);
        let reduced = remap.gather(&full);
        assert_eq!(reduced[(0, 0)], 0.0);
        assert_eq!(reduced[(1, 1)], 22.0);
        assert_eq!(reduced[(2, 2)], 44.0);
        assert_eq!(reduced[(3, 3)], 55.0);
    }

    #[test]
    fn test_scatter_reinserts_ground_zeros_in_order() {
        let remap = GroundRemap::new(5, 1, vec![0, 2]);
        // reduced solution: nodes 1, 3, 4 then one source current
        let x = DVector::from_vec(vec![10.0, 30.0, 40.0, -7.0]);
        let v = remap.scatter_voltages(&x);
        assert_eq!(v.as_slice(), &[0.0, 10.0, 0.0, 30.0, 40.0]);
        assert_eq!(remap.source_currents(&x), &[-7.0]);
    }

    #[test]
    fn test_assemble_rejects_duplicate_ground() {
        let g = chain();
        let order = g.node_order();
        let err = assemble(
            &g,
            &order,
            &[NodeId::new(2), NodeId::new(2)],
            &[(NodeId::new(0), 5.0)],
        );
        assert!(matches!(err, Err(Error::DuplicateGround(id)) if id == NodeId::new(2)));
    }

    #[test]
    fn test_remap_dedupes_ground_positions() {
        // a repeated position must not undercount the free nodes and
        // misalign the source-current split
        let remap = GroundRemap::new(3, 1, vec![2, 2]);
        assert_eq!(remap.num_grounds(), 1);
        assert_eq!(remap.reduced_len(), 3);
        assert_eq!(remap.num_free_nodes(), 2);

        let x = DVector::from_vec(vec![10.0, 20.0, -5.0]);
        assert_eq!(remap.scatter_voltages(&x).as_slice(), &[10.0, 20.0, 0.0]);
        assert_eq!(remap.source_currents(&x), &[-5.0]);
    }

    #[test]
    fn test_unknown_ground_node_rejected() {
        let g = chain();
        let order = g.node_order();
        let err = assemble(&g, &order, &[NodeId::new(9)], &[(NodeId::new(0), 5.0)]);
        assert!(matches!(err, Err(Error::NodeNotFound(id)) if id == NodeId::new(9)));
    }
}
