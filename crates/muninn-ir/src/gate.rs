//! Gate specifications and their unitary matrices.
//!
//! The single-qubit gate family is the phased X/Y-plane rotation
//! `exp(-i·θ/2·(cosφ·X + sinφ·Y))`; the entangler is an iSWAP followed by a
//! controlled-phase of fixed angle [`CPHASE_ANGLE`]. Matrix construction is
//! pure and deterministic given the numeric parameters.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::qubit::QubitId;

/// Controlled-phase angle (radians) appended to the iSWAP entangler.
pub const CPHASE_ANGLE: f64 = 0.35;

/// A 2×2 complex matrix acting on one qubit.
pub type Matrix2 = [[Complex64; 2]; 2];

/// A 4×4 complex matrix acting on a qubit pair.
///
/// Row/column index is `2·bit_a + bit_b` for a gate on qubits `(a, b)`.
pub type Matrix4 = [[Complex64; 4]; 4];

/// A gate placement within a circuit layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GateSpec {
    /// `exp(-i·θ/2·(cosφ·X + sinφ·Y))` on one qubit.
    SingleQubit {
        /// Target qubit.
        qubit: QubitId,
        /// Rotation angle θ.
        theta: f64,
        /// Rotation-axis azimuth φ.
        phi: f64,
    },
    /// iSWAP followed by CPhase([`CPHASE_ANGLE`]) on a qubit pair.
    TwoQubit {
        /// First qubit of the pair.
        a: QubitId,
        /// Second qubit of the pair.
        b: QubitId,
    },
}

impl GateSpec {
    /// Create a validated single-qubit gate spec.
    pub fn single(qubit: QubitId, theta: f64, phi: f64) -> IrResult<Self> {
        ensure_finite("theta", theta)?;
        ensure_finite("phi", phi)?;
        Ok(GateSpec::SingleQubit { qubit, theta, phi })
    }

    /// Create a validated two-qubit gate spec.
    pub fn two(a: QubitId, b: QubitId) -> IrResult<Self> {
        if a == b {
            return Err(IrError::DuplicateQubit { qubit: a });
        }
        Ok(GateSpec::TwoQubit { a, b })
    }

    /// Bit mask of every qubit this gate touches.
    #[inline]
    pub fn qubit_mask(&self) -> usize {
        match self {
            GateSpec::SingleQubit { qubit, .. } => qubit.mask(),
            GateSpec::TwoQubit { a, b } => a.mask() | b.mask(),
        }
    }

    /// The highest qubit index this gate touches.
    pub fn max_qubit(&self) -> QubitId {
        match self {
            GateSpec::SingleQubit { qubit, .. } => *qubit,
            GateSpec::TwoQubit { a, b } => (*a).max(*b),
        }
    }
}

/// Build the single-qubit rotation `exp(-i·θ/2·(cosφ·X + sinφ·Y))`.
///
/// With c = cos(θ/2) and s = sin(θ/2):
///
/// ```text
/// ⎡ c               -i·s·e^(-iφ) ⎤
/// ⎣ -i·s·e^(iφ)      c           ⎦
/// ```
pub fn single_qubit_matrix(theta: f64, phi: f64) -> IrResult<Matrix2> {
    ensure_finite("theta", theta)?;
    ensure_finite("phi", phi)?;

    let c = Complex64::new((theta / 2.0).cos(), 0.0);
    let s = (theta / 2.0).sin();
    let minus_i = Complex64::new(0.0, -1.0);
    Ok([
        [c, minus_i * s * Complex64::from_polar(1.0, -phi)],
        [minus_i * s * Complex64::from_polar(1.0, phi), c],
    ])
}

/// Build the fixed two-qubit entangler: iSWAP, then CPhase([`CPHASE_ANGLE`]).
///
/// In the `2·bit_a + bit_b` basis ordering:
///
/// ```text
/// ⎡ 1  0  0  0          ⎤
/// ⎢ 0  0  i  0          ⎥
/// ⎢ 0  i  0  0          ⎥
/// ⎣ 0  0  0  e^(i·0.35) ⎦
/// ```
pub fn two_qubit_matrix() -> Matrix4 {
    let zero = Complex64::new(0.0, 0.0);
    let one = Complex64::new(1.0, 0.0);
    let i = Complex64::new(0.0, 1.0);
    let phase = Complex64::from_polar(1.0, CPHASE_ANGLE);
    [
        [one, zero, zero, zero],
        [zero, zero, i, zero],
        [zero, i, zero, zero],
        [zero, zero, zero, phase],
    ]
}

/// Pauli X.
pub fn pauli_x_matrix() -> Matrix2 {
    let zero = Complex64::new(0.0, 0.0);
    let one = Complex64::new(1.0, 0.0);
    [[zero, one], [one, zero]]
}

/// Pauli Z.
pub fn pauli_z_matrix() -> Matrix2 {
    let zero = Complex64::new(0.0, 0.0);
    let one = Complex64::new(1.0, 0.0);
    [[one, zero], [zero, -one]]
}

/// Conjugate transpose of a 2×2 matrix.
pub fn dagger2(m: &Matrix2) -> Matrix2 {
    [
        [m[0][0].conj(), m[1][0].conj()],
        [m[0][1].conj(), m[1][1].conj()],
    ]
}

/// Conjugate transpose of a 4×4 matrix.
pub fn dagger4(m: &Matrix4) -> Matrix4 {
    let mut out = *m;
    for (r, row) in out.iter_mut().enumerate() {
        for (c, entry) in row.iter_mut().enumerate() {
            *entry = m[c][r].conj();
        }
    }
    out
}

fn ensure_finite(name: &'static str, value: f64) -> IrResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(IrError::NonFiniteParameter { name, value })
    }
}
