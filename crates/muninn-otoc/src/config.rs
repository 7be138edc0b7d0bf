//! Run configuration for the estimator.

use serde::{Deserialize, Serialize};

use muninn_engine::EngineLimits;
use muninn_ir::{IrError, QubitId};

use crate::error::{OtocError, OtocResult};
use crate::random::DEFAULT_THETA_CHOICES;

/// What to do when a sample's state norm drifts past tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriftPolicy {
    /// Abort the whole run (default, avoids silently biased statistics).
    #[default]
    FailFast,
    /// Log, skip the sample, and count it in the report.
    Discard,
}

/// How the correlator scalar is extracted from the evolved state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrelatorMethod {
    /// ⟨φ|Z_m|φ⟩ on the evolved state (default).
    #[default]
    Expectation,
    /// Explicit inner product against a mirrored reference copy.
    Overlap,
}

/// Full description of one estimation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Register width n.
    pub num_qubits: u32,
    /// Evolution depth t in cycles.
    pub cycles: u32,
    /// Echo order k.
    pub order: usize,
    /// Measurement qubit m.
    pub target: QubitId,
    /// Perturbation qubit b.
    pub perturb: QubitId,
    /// Discrete θ choice set for the single-qubit layers.
    pub theta_choices: Vec<f64>,
    /// Number of independent random circuit instances.
    pub samples: usize,
    /// Master seed; per-sample seeds are derived deterministically.
    pub seed: u64,
    /// Ceiling on the amplitude buffer size, in bytes.
    pub max_state_bytes: u64,
    /// Allowed |norm − 1| after a word application.
    pub norm_tolerance: f64,
    /// Behaviour on norm drift.
    pub drift_policy: DriftPolicy,
    /// Correlator extraction method.
    pub method: CorrelatorMethod,
    /// Run samples on the rayon thread pool.
    pub parallel: bool,
}

impl RunConfig {
    /// Configuration with conventional defaults: target qubit 0, perturbation
    /// on the far end of the register, 1000 samples, seed 0.
    pub fn new(num_qubits: u32, cycles: u32, order: usize) -> Self {
        let limits = EngineLimits::default();
        Self {
            num_qubits,
            cycles,
            order,
            target: QubitId(0),
            perturb: QubitId(num_qubits.saturating_sub(1)),
            theta_choices: DEFAULT_THETA_CHOICES.to_vec(),
            samples: 1000,
            seed: 0,
            max_state_bytes: limits.max_state_bytes,
            norm_tolerance: limits.norm_tolerance,
            drift_policy: DriftPolicy::default(),
            method: CorrelatorMethod::default(),
            parallel: true,
        }
    }

    /// Override the measurement and perturbation qubits.
    #[must_use]
    pub fn with_operator_qubits(mut self, target: QubitId, perturb: QubitId) -> Self {
        self.target = target;
        self.perturb = perturb;
        self
    }

    /// Override the θ choice set.
    #[must_use]
    pub fn with_theta_choices(mut self, choices: impl Into<Vec<f64>>) -> Self {
        self.theta_choices = choices.into();
        self
    }

    /// Override the sample count.
    #[must_use]
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// Override the master seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Run samples sequentially on the calling thread.
    #[must_use]
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// The engine limits implied by this configuration.
    pub fn limits(&self) -> EngineLimits {
        EngineLimits {
            max_state_bytes: self.max_state_bytes,
            norm_tolerance: self.norm_tolerance,
        }
    }

    /// Validate everything checkable before simulation work begins.
    pub fn validate(&self) -> OtocResult<()> {
        if self.num_qubits == 0 {
            return Err(OtocError::NoQubits);
        }
        if self.samples == 0 {
            return Err(OtocError::NoSamples);
        }
        if self.theta_choices.is_empty() {
            return Err(OtocError::EmptyThetaChoices);
        }
        if self.order == 0 {
            return Err(OtocError::Ir(IrError::InvalidEchoOrder(0)));
        }
        for &qubit in &[self.target, self.perturb] {
            if qubit.0 >= self.num_qubits {
                return Err(OtocError::Ir(IrError::QubitOutOfRange {
                    qubit,
                    num_qubits: self.num_qubits,
                }));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        RunConfig::new(4, 6, 2).validate().unwrap();
    }

    #[test]
    fn test_zero_qubits_rejected() {
        assert!(matches!(
            RunConfig::new(0, 1, 1).validate(),
            Err(OtocError::NoQubits)
        ));
    }

    #[test]
    fn test_zero_order_rejected() {
        assert!(matches!(
            RunConfig::new(2, 1, 0).validate(),
            Err(OtocError::Ir(IrError::InvalidEchoOrder(0)))
        ));
    }

    #[test]
    fn test_zero_samples_rejected() {
        assert!(matches!(
            RunConfig::new(2, 1, 1).with_samples(0).validate(),
            Err(OtocError::NoSamples)
        ));
    }

    #[test]
    fn test_empty_theta_choices_rejected() {
        let config = RunConfig::new(2, 1, 1).with_theta_choices(Vec::new());
        assert!(matches!(
            config.validate(),
            Err(OtocError::EmptyThetaChoices)
        ));
    }

    #[test]
    fn test_operator_qubit_out_of_range_rejected() {
        let config = RunConfig::new(2, 1, 1).with_operator_qubits(QubitId(0), QubitId(2));
        assert!(matches!(
            config.validate(),
            Err(OtocError::Ir(IrError::QubitOutOfRange { .. }))
        ));
    }
}
