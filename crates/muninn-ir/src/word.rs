//! Echo operator words.
//!
//! An [`OperatorWord`] is the flattened instruction list for the nested
//! echo sequence `U_k(t) = B(t)·[M·B(t)]^(k-1)` with `B(t) = U†·X_b·U` and
//! `M = Z_m`. The word references the evolution `U` abstractly, so the same
//! word is reused across every random circuit instance of a run, and it
//! executes nothing itself; a state-vector engine consumes it.

use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::qubit::QubitId;

/// One abstract step of an operator word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WordOp {
    /// Apply the forward evolution U.
    Evolve,
    /// Apply the inverse evolution U†.
    EvolveInverse,
    /// Apply Pauli X on a qubit.
    PauliX(QubitId),
    /// Apply Pauli Z on a qubit.
    PauliZ(QubitId),
}

/// The flattened echo word of order k.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperatorWord {
    ops: Vec<WordOp>,
    order: usize,
    target: QubitId,
    perturb: QubitId,
}

impl OperatorWord {
    /// Compose the order-k echo word for measurement qubit `target` (m) and
    /// perturbation qubit `perturb` (b).
    ///
    /// The emitted sequence is `[U, X_b, U†]` followed by k−1 repetitions of
    /// `[Z_m, U, X_b, U†]`, read left to right in application order. Order 1
    /// reduces to the single-echo word with no Z insertion.
    pub fn echo(order: usize, target: QubitId, perturb: QubitId) -> IrResult<Self> {
        if order == 0 {
            return Err(IrError::InvalidEchoOrder(0));
        }
        let mut ops = Vec::with_capacity(4 * order - 1);
        ops.extend([WordOp::Evolve, WordOp::PauliX(perturb), WordOp::EvolveInverse]);
        for _ in 1..order {
            ops.extend([
                WordOp::PauliZ(target),
                WordOp::Evolve,
                WordOp::PauliX(perturb),
                WordOp::EvolveInverse,
            ]);
        }
        Ok(Self {
            ops,
            order,
            target,
            perturb,
        })
    }

    /// The steps in application order.
    pub fn ops(&self) -> &[WordOp] {
        &self.ops
    }

    /// Echo order k.
    pub fn order(&self) -> usize {
        self.order
    }

    /// The measurement qubit m.
    pub fn target(&self) -> QubitId {
        self.target
    }

    /// The perturbation qubit b.
    pub fn perturb(&self) -> QubitId {
        self.perturb
    }

    /// Number of steps in the word.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Whether the word is empty (never true for a composed echo word).
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}
