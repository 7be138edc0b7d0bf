//! Error types for the OTOC estimation crate.

use muninn_engine::EngineError;
use muninn_ir::IrError;
use thiserror::Error;

/// Errors produced by random circuit generation and OTOC estimation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum OtocError {
    /// Register must contain at least one qubit.
    #[error("register must contain at least one qubit")]
    NoQubits,

    /// Discrete theta choice set must be non-empty.
    #[error("theta choice set is empty")]
    EmptyThetaChoices,

    /// At least one sample is required.
    #[error("sample count must be at least 1, got 0")]
    NoSamples,

    /// Run cancelled at a sample boundary.
    #[error("run cancelled at a sample boundary")]
    Cancelled,

    /// Circuit or word construction error.
    #[error("circuit IR error: {0}")]
    Ir(#[from] IrError),

    /// State-vector engine error.
    #[error("simulation engine error: {0}")]
    Engine(#[from] EngineError),
}

/// Result type for OTOC estimation operations.
pub type OtocResult<T> = Result<T, OtocError>;
