//! Error types for the engine crate.

use muninn_ir::IrError;
use thiserror::Error;

/// Errors produced by state-vector simulation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EngineError {
    /// State vector would exceed the configured memory ceiling.
    #[error(
        "state vector for {num_qubits} qubits needs {required} bytes, ceiling is {ceiling} bytes"
    )]
    ResourceExceeded {
        /// Requested register width.
        num_qubits: u32,
        /// Bytes the amplitude buffer would occupy.
        required: u64,
        /// Configured ceiling in bytes.
        ceiling: u64,
    },

    /// State norm drifted beyond tolerance after a word application.
    #[error("state norm drifted to {norm} (tolerance {tolerance})")]
    NormDrift {
        /// Observed norm.
        norm: f64,
        /// Allowed |norm − 1|.
        tolerance: f64,
    },

    /// Two states (or a state and a circuit) of different register widths.
    #[error("register width mismatch: {lhs} vs {rhs} qubits")]
    WidthMismatch {
        /// Width on the left-hand side.
        lhs: u32,
        /// Width on the right-hand side.
        rhs: u32,
    },

    /// Gate or word construction error.
    #[error("circuit IR error: {0}")]
    Ir(#[from] IrError),
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
