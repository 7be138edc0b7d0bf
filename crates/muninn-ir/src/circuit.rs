//! Layered circuit representation.
//!
//! A [`Circuit`] is an ordered sequence of [`Layer`]s over a fixed-width
//! register. Layers are applied strictly in sequence order and are never
//! reordered; within a layer the gates touch disjoint qubits, which layer
//! construction enforces.

use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::gate::GateSpec;
use crate::qubit::QubitId;

/// One layer of mutually disjoint gates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    gates: Vec<GateSpec>,
}

impl Layer {
    /// Create an empty layer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a gate, rejecting it if it touches a qubit already claimed by
    /// this layer.
    pub fn push(&mut self, gate: GateSpec) -> IrResult<()> {
        let mask = gate.qubit_mask();
        for existing in &self.gates {
            let clash = existing.qubit_mask() & mask;
            if clash != 0 {
                return Err(IrError::OverlappingQubits {
                    qubit: QubitId(clash.trailing_zeros()),
                });
            }
        }
        self.gates.push(gate);
        Ok(())
    }

    /// The gates in this layer, in insertion order.
    pub fn gates(&self) -> &[GateSpec] {
        &self.gates
    }

    /// Number of gates in this layer.
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Whether the layer contains no gates.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }
}

/// A layered quantum circuit over a fixed-width register.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    num_qubits: u32,
    layers: Vec<Layer>,
}

impl Circuit {
    /// Create an empty circuit; with no layers it is the identity evolution.
    pub fn new(num_qubits: u32) -> Self {
        Self {
            num_qubits,
            layers: vec![],
        }
    }

    /// Append a layer, validating that every gate fits the register.
    pub fn push_layer(&mut self, layer: Layer) -> IrResult<()> {
        for gate in layer.gates() {
            let max = gate.max_qubit();
            if max.0 >= self.num_qubits {
                return Err(IrError::QubitOutOfRange {
                    qubit: max,
                    num_qubits: self.num_qubits,
                });
            }
        }
        self.layers.push(layer);
        Ok(())
    }

    /// Width of the register.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// The layers in application order.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Number of layers.
    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }

    /// Total gate count across all layers.
    pub fn num_gates(&self) -> usize {
        self.layers.iter().map(Layer::len).sum()
    }

    /// Whether the circuit implements the identity (no layers).
    pub fn is_identity(&self) -> bool {
        self.layers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_rejects_overlap() {
        let mut layer = Layer::new();
        layer
            .push(GateSpec::single(QubitId(0), 1.0, 0.0).unwrap())
            .unwrap();
        layer
            .push(GateSpec::two(QubitId(1), QubitId(2)).unwrap())
            .unwrap();
        let err = layer.push(GateSpec::single(QubitId(2), 1.0, 0.0).unwrap());
        assert!(matches!(
            err,
            Err(IrError::OverlappingQubits { qubit: QubitId(2) })
        ));
    }

    #[test]
    fn test_circuit_rejects_out_of_range() {
        let mut circuit = Circuit::new(2);
        let mut layer = Layer::new();
        layer
            .push(GateSpec::two(QubitId(1), QubitId(2)).unwrap())
            .unwrap();
        assert!(matches!(
            circuit.push_layer(layer),
            Err(IrError::QubitOutOfRange {
                qubit: QubitId(2),
                num_qubits: 2
            })
        ));
    }

    #[test]
    fn test_empty_circuit_is_identity() {
        let circuit = Circuit::new(4);
        assert!(circuit.is_identity());
        assert_eq!(circuit.num_layers(), 0);
        assert_eq!(circuit.num_gates(), 0);
    }

    #[test]
    fn test_gate_counts() {
        let mut circuit = Circuit::new(3);
        let mut layer = Layer::new();
        layer
            .push(GateSpec::single(QubitId(0), 1.0, 0.0).unwrap())
            .unwrap();
        layer
            .push(GateSpec::single(QubitId(1), 1.0, 0.0).unwrap())
            .unwrap();
        circuit.push_layer(layer).unwrap();
        let mut pairs = Layer::new();
        pairs
            .push(GateSpec::two(QubitId(0), QubitId(1)).unwrap())
            .unwrap();
        circuit.push_layer(pairs).unwrap();
        assert_eq!(circuit.num_layers(), 2);
        assert_eq!(circuit.num_gates(), 3);
        assert!(!circuit.is_identity());
    }
}
