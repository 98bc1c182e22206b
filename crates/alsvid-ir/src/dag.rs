//! DAG-based circuit representation.

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex as PetNodeIndex};
use petgraph::visit::EdgeRef;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::instruction::{Instruction, InstructionKind};
use crate::qubit::{ClbitId, QubitId};

/// Node index type for the circuit DAG.
pub type NodeIndex = PetNodeIndex<u32>;

/// A node in the circuit DAG.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DagNode {
    /// Input node for a wire.
    In(WireId),
    /// Output node for a wire.
    Out(WireId),
    /// Operation node containing an instruction.
    Op(Instruction),
}

/// Identifier for a wire in the DAG.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WireId {
    /// A quantum wire.
    Qubit(QubitId),
    /// A classical wire.
    Clbit(ClbitId),
}

impl From<QubitId> for WireId {
    fn from(q: QubitId) -> Self {
        WireId::Qubit(q)
    }
}

impl From<ClbitId> for WireId {
    fn from(c: ClbitId) -> Self {
        WireId::Clbit(c)
    }
}

/// An edge in the circuit DAG representing a wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DagEdge {
    /// The wire this edge represents.
    pub wire: WireId,
}

/// DAG-based circuit representation.
///
/// The circuit is represented as a directed acyclic graph where:
/// - Nodes are either input nodes, output nodes, or operation nodes
/// - Edges represent wires (quantum or classical)
/// - Each wire has exactly one input and one output node
/// - Operations are connected to wires in topological order
///
/// ## Performance
///
/// The DAG maintains a `wire_front` index that maps each wire to the
/// last node before the output node. This enables O(1) predecessor
/// lookups in `apply()` instead of scanning all incoming edges of the
/// output node (which was O(degree) per qubit).
#[derive(Debug)]
pub struct CircuitDag {
    /// The underlying graph.
    graph: DiGraph<DagNode, DagEdge, u32>,
    /// Map from qubit to its input node.
    qubit_inputs: FxHashMap<QubitId, NodeIndex>,
    /// Map from qubit to its current output node.
    qubit_outputs: FxHashMap<QubitId, NodeIndex>,
    /// Map from classical bit to its input node.
    clbit_inputs: FxHashMap<ClbitId, NodeIndex>,
    /// Map from classical bit to its current output node.
    clbit_outputs: FxHashMap<ClbitId, NodeIndex>,
    /// Wire front: maps each wire to the node just before the output node.
    /// Updated on every `apply()` to enable O(1) predecessor lookups
    /// instead of edge scanning.
    wire_front: FxHashMap<WireId, NodeIndex>,
}

impl CircuitDag {
    /// Create a new empty circuit DAG.
    pub fn new() -> Self {
        Self {
            graph: DiGraph::default(),
            qubit_inputs: FxHashMap::default(),
            qubit_outputs: FxHashMap::default(),
            clbit_inputs: FxHashMap::default(),
            clbit_outputs: FxHashMap::default(),
            wire_front: FxHashMap::default(),
        }
    }

    /// Add a qubit to the circuit.
    pub fn add_qubit(&mut self, qubit: QubitId) {
        if self.qubit_inputs.contains_key(&qubit) {
            return;
        }
        let wire = WireId::Qubit(qubit);
        let in_node = self.graph.add_node(DagNode::In(wire));
        let out_node = self.graph.add_node(DagNode::Out(wire));
        self.graph.add_edge(in_node, out_node, DagEdge { wire });
        self.qubit_inputs.insert(qubit, in_node);
        self.qubit_outputs.insert(qubit, out_node);
        // Wire front: initially the input node is the predecessor of the output.
        self.wire_front.insert(wire, in_node);
    }

    /// Add a classical bit to the circuit.
    pub fn add_clbit(&mut self, clbit: ClbitId) {
        if self.clbit_inputs.contains_key(&clbit) {
            return;
        }
        let wire = WireId::Clbit(clbit);
        let in_node = self.graph.add_node(DagNode::In(wire));
        let out_node = self.graph.add_node(DagNode::Out(wire));
        self.graph.add_edge(in_node, out_node, DagEdge { wire });
        self.clbit_inputs.insert(clbit, in_node);
        self.clbit_outputs.insert(clbit, out_node);
        self.wire_front.insert(wire, in_node);
    }

    /// Apply an instruction to the circuit.
    #[allow(clippy::needless_pass_by_value, clippy::cast_possible_truncation)]
    pub fn apply(&mut self, instruction: Instruction) -> IrResult<NodeIndex> {
        // Get gate name for error context
        let gate_name = match &instruction.kind {
            InstructionKind::Gate(gate) => Some(gate.name().to_string()),
            _ => None,
        };

        // Validate gate arity matches qubit count
        if let InstructionKind::Gate(gate) = &instruction.kind {
            let expected = gate.num_qubits() as usize;
            let got = instruction.qubits.len();
            if expected != got {
                return Err(IrError::QubitCountMismatch {
                    gate_name: gate.name().to_string(),
                    expected: expected as u32,
                    got: got as u32,
                });
            }
        }

        // Validate qubits exist
        for &qubit in &instruction.qubits {
            if !self.qubit_inputs.contains_key(&qubit) {
                return Err(IrError::QubitNotFound {
                    qubit,
                    gate_name: gate_name.clone(),
                });
            }
        }

        // Validate classical bits exist
        for &clbit in &instruction.clbits {
            if !self.clbit_inputs.contains_key(&clbit) {
                return Err(IrError::ClbitNotFound {
                    clbit,
                    gate_name: gate_name.clone(),
                });
            }
        }

        // Check for duplicate qubits in the instruction
        let mut seen = rustc_hash::FxHashSet::default();
        for &qubit in &instruction.qubits {
            if !seen.insert(qubit) {
                return Err(IrError::DuplicateQubit {
                    qubit,
                    gate_name: gate_name.clone(),
                });
            }
        }

        // Add the operation node
        let op_node = self.graph.add_node(DagNode::Op(instruction.clone()));

        // Connect quantum wires, O(1) per qubit via the wire_front index.
        for &qubit in &instruction.qubits {
            let out_node = self.qubit_outputs[&qubit];
            let wire = WireId::Qubit(qubit);

            // Look up the current front node (predecessor of output) in O(1).
            let prev_node = self.wire_front[&wire];

            // Find and remove the edge from prev to output on this wire.
            let edge_id = self
                .graph
                .edges_directed(prev_node, Direction::Outgoing)
                .find(|e| e.weight().wire == wire && e.target() == out_node)
                .map(|e| e.id());

            let eid = edge_id.ok_or_else(|| {
                IrError::InvalidDag(format!(
                    "Missing edge from predecessor to output for qubit wire {qubit:?}"
                ))
            })?;
            self.graph.remove_edge(eid);
            self.graph.add_edge(prev_node, op_node, DagEdge { wire });
            self.graph.add_edge(op_node, out_node, DagEdge { wire });
            // Update wire front: this op is now the predecessor of the output.
            self.wire_front.insert(wire, op_node);
        }

        // Connect classical wires the same way.
        for &clbit in &instruction.clbits {
            let out_node = self.clbit_outputs[&clbit];
            let wire = WireId::Clbit(clbit);

            let prev_node = self.wire_front[&wire];

            let edge_id = self
                .graph
                .edges_directed(prev_node, Direction::Outgoing)
                .find(|e| e.weight().wire == wire && e.target() == out_node)
                .map(|e| e.id());

            let eid = edge_id.ok_or_else(|| {
                IrError::InvalidDag(format!(
                    "Missing edge from predecessor to output for classical wire {clbit:?}"
                ))
            })?;
            self.graph.remove_edge(eid);
            self.graph.add_edge(prev_node, op_node, DagEdge { wire });
            self.graph.add_edge(op_node, out_node, DagEdge { wire });
            self.wire_front.insert(wire, op_node);
        }

        Ok(op_node)
    }

    /// Iterate over operations in topological order.
    pub fn topological_ops(&self) -> impl Iterator<Item = (NodeIndex, &Instruction)> {
        let sorted: Vec<_> = petgraph::algo::toposort(&self.graph, None)
            .expect("DAG must be acyclic: cycle detected in circuit graph")
            .into_iter()
            .filter_map(|idx| {
                if let DagNode::Op(inst) = &self.graph[idx] {
                    Some((idx, inst))
                } else {
                    None
                }
            })
            .collect();

        sorted.into_iter()
    }

    /// Get the number of qubits.
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.qubit_inputs.len()
    }

    /// Get the number of classical bits.
    #[inline]
    pub fn num_clbits(&self) -> usize {
        self.clbit_inputs.len()
    }

    /// Get the number of operations.
    ///
    /// Computed as total nodes minus input and output nodes (2 per qubit + 2 per clbit).
    #[inline]
    pub fn num_ops(&self) -> usize {
        let io_nodes = 2 * (self.qubit_inputs.len() + self.clbit_inputs.len());
        self.graph.node_count().saturating_sub(io_nodes)
    }

    /// Calculate the circuit depth.
    pub fn depth(&self) -> usize {
        let node_count = self.graph.node_count();
        // Pre-allocate with expected capacity
        let mut depths: FxHashMap<NodeIndex, usize> =
            FxHashMap::with_capacity_and_hasher(node_count, Default::default());

        let mut max_depth = 0usize;

        for node in petgraph::algo::toposort(&self.graph, None)
            .expect("DAG must be acyclic: cycle detected in circuit graph")
        {
            let max_pred_depth = self
                .graph
                .edges_directed(node, Direction::Incoming)
                .map(|e| depths.get(&e.source()).copied().unwrap_or(0))
                .max()
                .unwrap_or(0);

            let node_depth = if matches!(self.graph[node], DagNode::Op(_)) {
                max_pred_depth + 1
            } else {
                max_pred_depth
            };

            if node_depth > max_depth {
                max_depth = node_depth;
            }
            depths.insert(node, node_depth);
        }

        max_depth
    }

    /// Verify the structural integrity of the DAG.
    ///
    /// Checks that:
    /// - Every qubit has exactly one In node and one Out node
    /// - Every classical bit has exactly one In node and one Out node
    /// - The graph is acyclic
    /// - All operation nodes are reachable from some In node
    /// - Wire edges form valid paths from In to Out for each wire
    pub fn verify_integrity(&self) -> IrResult<()> {
        // 1. Check that the graph is acyclic
        if petgraph::algo::is_cyclic_directed(&self.graph) {
            return Err(IrError::InvalidDag("Graph contains a cycle".into()));
        }

        // 2. Check that every qubit has In and Out nodes
        for &qubit in self.qubit_inputs.keys() {
            if !self.qubit_outputs.contains_key(&qubit) {
                return Err(IrError::InvalidDag(format!(
                    "Qubit {qubit:?} has an In node but no Out node"
                )));
            }
        }
        for &qubit in self.qubit_outputs.keys() {
            if !self.qubit_inputs.contains_key(&qubit) {
                return Err(IrError::InvalidDag(format!(
                    "Qubit {qubit:?} has an Out node but no In node"
                )));
            }
        }

        // 3. Check that every clbit has In and Out nodes
        for &clbit in self.clbit_inputs.keys() {
            if !self.clbit_outputs.contains_key(&clbit) {
                return Err(IrError::InvalidDag(format!(
                    "Clbit {clbit:?} has an In node but no Out node"
                )));
            }
        }
        for &clbit in self.clbit_outputs.keys() {
            if !self.clbit_inputs.contains_key(&clbit) {
                return Err(IrError::InvalidDag(format!(
                    "Clbit {clbit:?} has an Out node but no In node"
                )));
            }
        }

        // 4. Verify wire continuity for each qubit: walk from In to Out
        for (&qubit, &in_node) in &self.qubit_inputs {
            self.walk_wire(WireId::Qubit(qubit), in_node, self.qubit_outputs[&qubit])?;
        }

        // 5. Verify wire continuity for each clbit
        for (&clbit, &in_node) in &self.clbit_inputs {
            self.walk_wire(WireId::Clbit(clbit), in_node, self.clbit_outputs[&clbit])?;
        }

        // 6. Check all operation nodes are reachable from some In node.
        // A successful toposort already visits all nodes in the graph, so
        // if it succeeds (which it does since we checked acyclicity above),
        // all nodes are reachable. We only need to verify the sorted set
        // covers every op node.
        let topo_nodes = petgraph::algo::toposort(&self.graph, None).unwrap_or_default();
        let node_count = self.graph.node_count();
        if topo_nodes.len() != node_count {
            return Err(IrError::InvalidDag(
                "Unreachable operation node found in DAG".into(),
            ));
        }

        Ok(())
    }

    /// Walk a single wire from its In node to its Out node, erroring if the
    /// edge chain is broken or longer than the node count.
    fn walk_wire(&self, wire: WireId, in_node: NodeIndex, out_node: NodeIndex) -> IrResult<()> {
        let mut current = in_node;
        let mut steps = 0;
        let max_steps = self.graph.node_count();

        loop {
            if current == out_node {
                return Ok(());
            }

            // Find the outgoing edge for this wire
            let next = self
                .graph
                .edges_directed(current, Direction::Outgoing)
                .find(|e| e.weight().wire == wire)
                .map(|e| e.target());

            match next {
                Some(n) => current = n,
                None => {
                    return Err(IrError::InvalidDag(format!(
                        "Wire {wire:?} is broken: no outgoing edge from node {current:?}"
                    )));
                }
            }

            steps += 1;
            if steps > max_steps {
                return Err(IrError::InvalidDag(format!(
                    "Wire {wire:?} has too many steps (possible infinite loop)"
                )));
            }
        }
    }
}

impl Default for CircuitDag {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for CircuitDag {
    fn clone(&self) -> Self {
        Self {
            graph: self.graph.clone(),
            qubit_inputs: self.qubit_inputs.clone(),
            qubit_outputs: self.qubit_outputs.clone(),
            clbit_inputs: self.clbit_inputs.clone(),
            clbit_outputs: self.clbit_outputs.clone(),
            wire_front: self.wire_front.clone(),
        }
    }
}
