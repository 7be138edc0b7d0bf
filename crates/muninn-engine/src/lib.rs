//! Muninn state-vector simulation engine.
//!
//! Exact, double-precision evolution of an n-qubit amplitude vector under
//! the circuits and echo words defined in `muninn-ir`. The engine enforces
//! an explicit memory ceiling (state-vector simulation is exponential in
//! qubit count) and checks norm drift after every word application.
//!
//! # Example
//!
//! ```rust
//! use muninn_engine::{EngineLimits, StateVector};
//! use muninn_ir::{Circuit, OperatorWord, QubitId};
//!
//! let circuit = Circuit::new(2); // no layers: identity evolution
//! let word = OperatorWord::echo(1, QubitId(0), QubitId(1)).unwrap();
//!
//! let mut state = StateVector::try_new(2, EngineLimits::default()).unwrap();
//! state.apply_word(&word, &circuit).unwrap();
//! assert_eq!(state.pauli_z_expectation(QubitId(0)).unwrap(), 1.0);
//! ```

pub mod error;
pub mod statevector;

pub use error::{EngineError, EngineResult};
pub use statevector::{BYTES_PER_AMPLITUDE, EngineLimits, StateVector};
