//! Muninn circuit intermediate representation.
//!
//! This crate provides the data structures shared by the Muninn simulation
//! stack: qubit addressing, gate specifications and their unitary matrices,
//! layered circuits, and the echo operator words consumed by the
//! state-vector engine.
//!
//! # Core components
//!
//! - **Qubits**: [`QubitId`] indexes into an ordered register
//! - **Gates**: [`GateSpec`] placements; [`gate`] builds the 2×2 and 4×4
//!   unitaries from physical parameters
//! - **Circuits**: [`Circuit`] as an ordered sequence of disjoint [`Layer`]s
//! - **Words**: [`OperatorWord`], the flattened echo sequence
//!   `U_k(t) = B(t)·[M·B(t)]^(k-1)`
//!
//! # Example: composing an echo word
//!
//! ```rust
//! use muninn_ir::{OperatorWord, QubitId, WordOp};
//!
//! let word = OperatorWord::echo(1, QubitId(0), QubitId(1)).unwrap();
//! assert_eq!(
//!     word.ops(),
//!     &[WordOp::Evolve, WordOp::PauliX(QubitId(1)), WordOp::EvolveInverse]
//! );
//! ```

pub mod circuit;
pub mod error;
pub mod gate;
pub mod qubit;
pub mod word;

pub use circuit::{Circuit, Layer};
pub use error::{IrError, IrResult};
pub use gate::{CPHASE_ANGLE, GateSpec, Matrix2, Matrix4};
pub use qubit::QubitId;
pub use word::{OperatorWord, WordOp};
