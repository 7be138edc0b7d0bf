//! Monte-Carlo OTOC estimation over random circuit instances.
//!
//! Each sample draws a fresh random circuit from a seed derived
//! deterministically from `(master_seed, sample_index)`, evolves |0…0⟩
//! through the shared echo word, and extracts one complex correlator
//! value. Samples share no mutable state, so they run unordered on the
//! rayon pool; the reduction is associative and the per-sample seeds make
//! the aggregate independent of thread count.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use num_complex::Complex64;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use tracing::{debug, warn};

use muninn_engine::{EngineError, StateVector};
use muninn_ir::OperatorWord;

use crate::config::{CorrelatorMethod, DriftPolicy, RunConfig};
use crate::error::{OtocError, OtocResult};
use crate::random::RandomCircuitBuilder;
use crate::report::{Accumulator, OtocReport};

/// Cooperative cancellation flag checked at sample boundaries only, so a
/// cancelled run never leaks a partially-applied word into the statistic.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// A fresh, un-cancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation; in-flight samples still finish.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Derive a per-sample seed from the master seed (splitmix64 finalizer
/// over a golden-ratio stride), stable across platforms and thread counts.
pub fn derive_seed(master: u64, index: usize) -> u64 {
    let stride = (index as u64)
        .wrapping_add(1)
        .wrapping_mul(0x9E37_79B9_7F4A_7C15);
    let mut z = master.wrapping_add(stride);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Drives many independent echo-word simulations and aggregates the
/// correlator statistic.
pub struct OtocEstimator {
    config: RunConfig,
    cancel: CancelToken,
    progress: Option<Arc<dyn Fn() + Send + Sync>>,
}

impl OtocEstimator {
    /// Construct an estimator for the given run configuration.
    pub fn new(config: RunConfig) -> Self {
        Self {
            config,
            cancel: CancelToken::new(),
            progress: None,
        }
    }

    /// Use an externally held cancellation token.
    #[must_use]
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = token;
        self
    }

    /// Invoke `f` once per completed sample (called from worker threads).
    #[must_use]
    pub fn with_progress(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.progress = Some(Arc::new(f));
        self
    }

    /// A clone of the estimator's cancellation token.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// The configuration this estimator runs.
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Run all samples and aggregate the statistic.
    pub fn estimate(&self) -> OtocResult<OtocReport> {
        self.config.validate()?;
        let word = OperatorWord::echo(self.config.order, self.config.target, self.config.perturb)?;
        let builder = RandomCircuitBuilder::new(self.config.num_qubits, self.config.cycles)
            .with_theta_choices(self.config.theta_choices.clone());

        debug!(
            num_qubits = self.config.num_qubits,
            cycles = self.config.cycles,
            order = self.config.order,
            samples = self.config.samples,
            seed = self.config.seed,
            parallel = self.config.parallel,
            "starting OTOC estimation"
        );
        let started = Instant::now();

        let outcomes: OtocResult<Vec<Option<Complex64>>> = if self.config.parallel {
            (0..self.config.samples)
                .into_par_iter()
                .map(|index| self.run_sample(&word, &builder, index))
                .collect()
        } else {
            (0..self.config.samples)
                .map(|index| self.run_sample(&word, &builder, index))
                .collect()
        };

        // Fold in index order so the statistic is bit-identical no matter
        // how the samples were scheduled.
        let mut acc = Accumulator::default();
        let mut discarded = 0usize;
        for outcome in outcomes? {
            match outcome {
                Some(value) => acc.push(value),
                None => discarded += 1,
            }
        }

        let mean = acc.mean();
        let report = OtocReport {
            order: self.config.order,
            num_qubits: self.config.num_qubits,
            cycles: self.config.cycles,
            samples: acc.count(),
            discarded_samples: discarded,
            mean_real: mean.re,
            mean_imag: mean.im,
            std_error: acc.std_error(),
            elapsed_seconds: started.elapsed().as_secs_f64(),
            seed: self.config.seed,
        };
        debug!(
            samples = report.samples,
            discarded = report.discarded_samples,
            mean_real = report.mean_real,
            std_error = report.std_error,
            "finished OTOC estimation"
        );
        Ok(report)
    }

    /// One independent sample: `Ok(None)` means discarded under the drift
    /// policy.
    fn run_sample(
        &self,
        word: &OperatorWord,
        builder: &RandomCircuitBuilder,
        index: usize,
    ) -> OtocResult<Option<Complex64>> {
        if self.cancel.is_cancelled() {
            return Err(OtocError::Cancelled);
        }

        let mut rng = SmallRng::seed_from_u64(derive_seed(self.config.seed, index));
        let circuit = builder.build_with_rng(&mut rng)?;
        let mut state = StateVector::try_new(self.config.num_qubits, self.config.limits())?;

        match state.apply_word(word, &circuit) {
            Ok(()) => {}
            Err(EngineError::NormDrift { norm, tolerance })
                if self.config.drift_policy == DriftPolicy::Discard =>
            {
                warn!(sample = index, norm, tolerance, "discarding drifted sample");
                if let Some(progress) = &self.progress {
                    progress();
                }
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        }

        let value = match self.config.method {
            CorrelatorMethod::Expectation => {
                Complex64::new(state.pauli_z_expectation(self.config.target)?, 0.0)
            }
            CorrelatorMethod::Overlap => {
                let mut reference = state.clone();
                reference.apply_pauli_z(self.config.target)?;
                state.inner_product(&reference)?
            }
        };

        if let Some(progress) = &self.progress {
            progress();
        }
        Ok(Some(value))
    }
}
