//! Error types for the IR crate.

use crate::qubit::QubitId;
use thiserror::Error;

/// Errors that can occur while building circuits and echo words.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Gate parameter is NaN or infinite.
    #[error("gate parameter '{name}' is not finite: {value}")]
    NonFiniteParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The non-finite value.
        value: f64,
    },

    /// Qubit referenced outside the register.
    #[error("qubit {qubit} out of range for a {num_qubits}-qubit register")]
    QubitOutOfRange {
        /// The offending qubit.
        qubit: QubitId,
        /// Width of the register.
        num_qubits: u32,
    },

    /// A layer touches the same qubit twice.
    #[error("qubit {qubit} touched twice within one layer")]
    OverlappingQubits {
        /// The qubit claimed by more than one gate.
        qubit: QubitId,
    },

    /// Two-qubit gate addressed with the same qubit for both operands.
    #[error("two-qubit gate requires distinct qubits, got {qubit} twice")]
    DuplicateQubit {
        /// The duplicated qubit.
        qubit: QubitId,
    },

    /// Echo order k must be a positive integer.
    #[error("echo order must be at least 1, got {0}")]
    InvalidEchoOrder(usize),
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
