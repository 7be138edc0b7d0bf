//! In-place state-vector evolution.
//!
//! A [`StateVector`] holds the 2^n complex amplitudes of an n-qubit
//! register, with qubit q mapped to bit q of the basis index. Gates are
//! contracted against the touched amplitudes in place: a single-qubit gate
//! updates 2^(n-1) amplitude pairs, a two-qubit gate 2^(n-2) quartets.
//! Inverse application daggers each matrix on the fly, so a reversed
//! circuit is never materialized.

use num_complex::Complex64;
use tracing::trace;

use muninn_ir::gate::{self, Matrix2, Matrix4};
use muninn_ir::{Circuit, GateSpec, IrError, OperatorWord, QubitId, WordOp};

use crate::error::{EngineError, EngineResult};

/// Bytes occupied by one amplitude.
pub const BYTES_PER_AMPLITUDE: u64 = std::mem::size_of::<Complex64>() as u64;

/// Resource and accuracy limits for state allocation and norm checking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineLimits {
    /// Hard ceiling on the amplitude buffer size, in bytes.
    pub max_state_bytes: u64,
    /// Allowed |norm − 1| after a full word application.
    pub norm_tolerance: f64,
}

impl Default for EngineLimits {
    fn default() -> Self {
        Self {
            // 2^24 amplitudes × 16 bytes: a 24-qubit register fits exactly.
            max_state_bytes: 1 << 28,
            norm_tolerance: 1e-9,
        }
    }
}

/// A complex amplitude vector over the full register Hilbert space.
#[derive(Debug, Clone)]
pub struct StateVector {
    amplitudes: Vec<Complex64>,
    num_qubits: u32,
    limits: EngineLimits,
}

impl StateVector {
    /// Create a state initialized to |0…0⟩, rejecting register widths whose
    /// amplitude buffer would exceed the configured ceiling.
    pub fn try_new(num_qubits: u32, limits: EngineLimits) -> EngineResult<Self> {
        let required = BYTES_PER_AMPLITUDE
            .checked_shl(num_qubits)
            .unwrap_or(u64::MAX);
        if required > limits.max_state_bytes {
            return Err(EngineError::ResourceExceeded {
                num_qubits,
                required,
                ceiling: limits.max_state_bytes,
            });
        }
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); 1 << num_qubits];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Ok(Self {
            amplitudes,
            num_qubits,
            limits,
        })
    }

    /// Width of the register.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Dimension of the Hilbert space (2^n).
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    /// The raw amplitudes, basis-index ordered.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// The limits this state was created with.
    pub fn limits(&self) -> EngineLimits {
        self.limits
    }

    /// Apply one gate, or its conjugate transpose when `inverse` is set.
    pub fn apply_gate(&mut self, spec: &GateSpec, inverse: bool) -> EngineResult<()> {
        match spec {
            GateSpec::SingleQubit { qubit, theta, phi } => {
                self.check_qubit(*qubit)?;
                let mut m = gate::single_qubit_matrix(*theta, *phi)?;
                if inverse {
                    m = gate::dagger2(&m);
                }
                self.contract_one(&m, *qubit);
            }
            GateSpec::TwoQubit { a, b } => {
                self.check_qubit(*a)?;
                self.check_qubit(*b)?;
                let mut m = gate::two_qubit_matrix();
                if inverse {
                    m = gate::dagger4(&m);
                }
                self.contract_two(&m, *a, *b);
            }
        }
        Ok(())
    }

    /// Apply a full circuit; `inverse` runs the layers in reverse order with
    /// each gate daggered.
    pub fn apply_circuit(&mut self, circuit: &Circuit, inverse: bool) -> EngineResult<()> {
        if circuit.num_qubits() != self.num_qubits {
            return Err(EngineError::WidthMismatch {
                lhs: self.num_qubits,
                rhs: circuit.num_qubits(),
            });
        }
        if inverse {
            for layer in circuit.layers().iter().rev() {
                for gate in layer.gates().iter().rev() {
                    self.apply_gate(gate, true)?;
                }
            }
        } else {
            for layer in circuit.layers() {
                for gate in layer.gates() {
                    self.apply_gate(gate, false)?;
                }
            }
        }
        Ok(())
    }

    /// Execute an echo word against this state, with `circuit` standing in
    /// for the abstract evolution U. Steps run strictly in listed order;
    /// the norm is checked once after the final step.
    pub fn apply_word(&mut self, word: &OperatorWord, circuit: &Circuit) -> EngineResult<()> {
        trace!(
            steps = word.len(),
            order = word.order(),
            "applying echo word"
        );
        for op in word.ops() {
            match op {
                WordOp::Evolve => self.apply_circuit(circuit, false)?,
                WordOp::EvolveInverse => self.apply_circuit(circuit, true)?,
                WordOp::PauliX(q) => self.apply_pauli_x(*q)?,
                WordOp::PauliZ(q) => self.apply_pauli_z(*q)?,
            }
        }
        self.check_norm()
    }

    /// Apply Pauli X on one qubit (amplitude swap, no matrix needed).
    pub fn apply_pauli_x(&mut self, qubit: QubitId) -> EngineResult<()> {
        self.check_qubit(qubit)?;
        let mask = qubit.mask();
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                let j = i | mask;
                self.amplitudes.swap(i, j);
            }
        }
        Ok(())
    }

    /// Apply Pauli Z on one qubit (sign flip on the set-bit half).
    pub fn apply_pauli_z(&mut self, qubit: QubitId) -> EngineResult<()> {
        self.check_qubit(qubit)?;
        let mask = qubit.mask();
        for i in 0..self.amplitudes.len() {
            if i & mask != 0 {
                self.amplitudes[i] = -self.amplitudes[i];
            }
        }
        Ok(())
    }

    /// ⟨self|other⟩.
    pub fn inner_product(&self, other: &StateVector) -> EngineResult<Complex64> {
        if self.num_qubits != other.num_qubits {
            return Err(EngineError::WidthMismatch {
                lhs: self.num_qubits,
                rhs: other.num_qubits,
            });
        }
        let mut acc = Complex64::new(0.0, 0.0);
        for (a, b) in self.amplitudes.iter().zip(&other.amplitudes) {
            acc += a.conj() * b;
        }
        Ok(acc)
    }

    /// ⟨Z_q⟩ on this state.
    pub fn pauli_z_expectation(&self, qubit: QubitId) -> EngineResult<f64> {
        self.check_qubit(qubit)?;
        let mask = qubit.mask();
        let mut acc = 0.0;
        for (i, amp) in self.amplitudes.iter().enumerate() {
            let p = amp.norm_sqr();
            if i & mask == 0 {
                acc += p;
            } else {
                acc -= p;
            }
        }
        Ok(acc)
    }

    /// The 2-norm of the amplitude vector.
    pub fn norm(&self) -> f64 {
        self.amplitudes
            .iter()
            .map(Complex64::norm_sqr)
            .sum::<f64>()
            .sqrt()
    }

    /// Scale the state back to unit norm.
    pub fn renormalize(&mut self) {
        let norm = self.norm();
        if norm > 0.0 {
            for amp in &mut self.amplitudes {
                *amp /= norm;
            }
        }
    }

    /// Error if |norm − 1| exceeds the configured tolerance.
    pub fn check_norm(&self) -> EngineResult<()> {
        let norm = self.norm();
        if (norm - 1.0).abs() > self.limits.norm_tolerance {
            return Err(EngineError::NormDrift {
                norm,
                tolerance: self.limits.norm_tolerance,
            });
        }
        Ok(())
    }

    fn check_qubit(&self, qubit: QubitId) -> EngineResult<()> {
        if qubit.0 >= self.num_qubits {
            return Err(EngineError::Ir(IrError::QubitOutOfRange {
                qubit,
                num_qubits: self.num_qubits,
            }));
        }
        Ok(())
    }

    /// Contract a 2×2 matrix against the 2^(n-1) amplitude pairs of `qubit`.
    fn contract_one(&mut self, m: &Matrix2, qubit: QubitId) {
        let mask = qubit.mask();
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = m[0][0] * a + m[0][1] * b;
                self.amplitudes[j] = m[1][0] * a + m[1][1] * b;
            }
        }
    }

    /// Contract a 4×4 matrix against the 2^(n-2) amplitude quartets of the
    /// pair `(a, b)`, with local basis index `2·bit_a + bit_b`.
    fn contract_two(&mut self, m: &Matrix4, a: QubitId, b: QubitId) {
        let ma = a.mask();
        let mb = b.mask();
        for i in 0..self.amplitudes.len() {
            if i & ma == 0 && i & mb == 0 {
                let idx = [i, i | mb, i | ma, i | ma | mb];
                let v = [
                    self.amplitudes[idx[0]],
                    self.amplitudes[idx[1]],
                    self.amplitudes[idx[2]],
                    self.amplitudes[idx[3]],
                ];
                for (r, &out) in idx.iter().enumerate() {
                    self.amplitudes[out] =
                        m[r][0] * v[0] + m[r][1] * v[1] + m[r][2] * v[2] + m[r][3] * v[3];
                }
            }
        }
    }
}
