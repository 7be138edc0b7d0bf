//! Muninn OTOC estimation.
//!
//! Estimates the k-th order out-of-time-order correlator OTOC^(k) of a
//! random digital circuit by exact state-vector simulation of the nested
//! echo sequence `U_k(t) = B(t)·[M·B(t)]^(k-1)`, averaged over many
//! independently seeded circuit instances.
//!
//! # Quick start
//!
//! ```rust
//! use muninn_otoc::{OtocEstimator, RunConfig};
//!
//! let config = RunConfig::new(3 /* qubits */, 2 /* cycles */, 1 /* order */)
//!     .with_samples(16)
//!     .with_seed(7);
//! let report = OtocEstimator::new(config).estimate().unwrap();
//! assert_eq!(report.samples, 16);
//! assert!(report.mean_real.abs() <= 1.0 + 1e-9);
//! ```

pub mod config;
pub mod error;
pub mod estimator;
pub mod random;
pub mod report;

pub use config::{CorrelatorMethod, DriftPolicy, RunConfig};
pub use error::{OtocError, OtocResult};
pub use estimator::{CancelToken, OtocEstimator, derive_seed};
pub use random::{DEFAULT_THETA_CHOICES, RandomCircuitBuilder};
pub use report::{Accumulator, OtocReport};
