//! Random layered circuit generation.
//!
//! Each cycle draws one layer of single-qubit rotations (θ from a discrete
//! choice set, φ uniform on [-π, π)) followed by one brick-wall layer of
//! two-qubit entanglers whose pairing offset alternates between cycles, so
//! every neighbouring pair is eventually coupled. All randomness comes from
//! an injected [`Rng`]; seeding it makes the circuit reproducible.

use rand::Rng;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};
use tracing::debug;

use muninn_ir::{Circuit, GateSpec, IrError, Layer, QubitId};

use crate::error::{OtocError, OtocResult};

/// Discrete θ choices conventionally used for the single-qubit layers.
pub const DEFAULT_THETA_CHOICES: [f64; 3] = [FRAC_PI_4, FRAC_PI_2, 3.0 * FRAC_PI_4];

/// Generator for brick-wall random circuits.
#[derive(Debug, Clone)]
pub struct RandomCircuitBuilder {
    num_qubits: u32,
    cycles: u32,
    theta_choices: Vec<f64>,
}

impl RandomCircuitBuilder {
    /// Construct a builder with the conventional θ choice set.
    pub fn new(num_qubits: u32, cycles: u32) -> Self {
        Self {
            num_qubits,
            cycles,
            theta_choices: DEFAULT_THETA_CHOICES.to_vec(),
        }
    }

    /// Override the discrete θ choice set.
    #[must_use]
    pub fn with_theta_choices(mut self, choices: impl Into<Vec<f64>>) -> Self {
        self.theta_choices = choices.into();
        self
    }

    /// Draw one circuit using the given random number generator.
    ///
    /// Seeding `rng` makes the circuit reproducible:
    /// ```rust,ignore
    /// use rand::SeedableRng;
    /// let mut rng = rand::rngs::SmallRng::seed_from_u64(42);
    /// let circuit = builder.build_with_rng(&mut rng)?;
    /// ```
    pub fn build_with_rng<R: Rng>(&self, rng: &mut R) -> OtocResult<Circuit> {
        self.validate()?;

        let mut circuit = Circuit::new(self.num_qubits);
        for cycle in 0..self.cycles {
            let mut singles = Layer::new();
            for q in 0..self.num_qubits {
                let theta = self.theta_choices[rng.gen_range(0..self.theta_choices.len())];
                let phi = rng.gen_range(-PI..PI);
                singles.push(GateSpec::single(QubitId(q), theta, phi)?)?;
            }
            circuit.push_layer(singles)?;

            // Brick-wall pairing; an odd register width leaves the last
            // unpaired qubit idle this layer.
            let mut pairs = Layer::new();
            let mut q = cycle % 2;
            while q + 1 < self.num_qubits {
                pairs.push(GateSpec::two(QubitId(q), QubitId(q + 1))?)?;
                q += 2;
            }
            if !pairs.is_empty() {
                circuit.push_layer(pairs)?;
            }
        }

        debug!(
            num_qubits = self.num_qubits,
            cycles = self.cycles,
            layers = circuit.num_layers(),
            gates = circuit.num_gates(),
            "built random circuit"
        );
        Ok(circuit)
    }

    fn validate(&self) -> OtocResult<()> {
        if self.num_qubits == 0 {
            return Err(OtocError::NoQubits);
        }
        if self.theta_choices.is_empty() {
            return Err(OtocError::EmptyThetaChoices);
        }
        for &theta in &self.theta_choices {
            if !theta.is_finite() {
                return Err(OtocError::Ir(IrError::NonFiniteParameter {
                    name: "theta",
                    value: theta,
                }));
            }
        }
        Ok(())
    }
}
