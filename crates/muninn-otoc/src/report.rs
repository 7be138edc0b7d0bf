//! Aggregated run statistics.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// Sum / sum-of-squares accumulator for complex correlator samples.
///
/// Merging is associative and commutative, so the aggregate is independent
/// of sample completion order up to floating-point summation order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Accumulator {
    sum: Complex64,
    sum_sqr: f64,
    count: usize,
}

impl Accumulator {
    /// Fold one sample in.
    pub fn push(&mut self, value: Complex64) {
        self.sum += value;
        self.sum_sqr += value.norm_sqr();
        self.count += 1;
    }

    /// Combine two partial aggregates.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        self.sum += other.sum;
        self.sum_sqr += other.sum_sqr;
        self.count += other.count;
        self
    }

    /// Number of samples folded in.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Sample mean (zero for an empty accumulator).
    pub fn mean(&self) -> Complex64 {
        if self.count == 0 {
            Complex64::new(0.0, 0.0)
        } else {
            self.sum / self.count as f64
        }
    }

    /// Standard error of the mean, from the complex second moment.
    pub fn std_error(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        let n = self.count as f64;
        let variance = (self.sum_sqr / n - self.mean().norm_sqr()).max(0.0);
        (variance / n).sqrt()
    }
}

/// One correlator estimate over a batch of random circuit instances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtocReport {
    /// Echo order k.
    pub order: usize,
    /// Register width n.
    pub num_qubits: u32,
    /// Evolution depth t in cycles.
    pub cycles: u32,
    /// Samples that contributed to the statistic.
    pub samples: usize,
    /// Samples discarded under the drift policy.
    pub discarded_samples: usize,
    /// Real part of the mean correlator.
    pub mean_real: f64,
    /// Imaginary part of the mean correlator.
    pub mean_imag: f64,
    /// Standard error of the mean.
    pub std_error: f64,
    /// Wall-clock duration of the run in seconds.
    pub elapsed_seconds: f64,
    /// Master seed the run was driven by.
    pub seed: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_accumulator() {
        let acc = Accumulator::default();
        assert_eq!(acc.count(), 0);
        assert_eq!(acc.mean(), Complex64::new(0.0, 0.0));
        assert_eq!(acc.std_error(), 0.0);
    }

    #[test]
    fn test_mean_of_constant_samples_has_zero_error() {
        let mut acc = Accumulator::default();
        for _ in 0..10 {
            acc.push(Complex64::new(0.5, -0.25));
        }
        assert!((acc.mean() - Complex64::new(0.5, -0.25)).norm() < 1e-12);
        assert!(acc.std_error() < 1e-9);
    }

    #[test]
    fn test_merge_matches_sequential_push() {
        let values = [
            Complex64::new(1.0, 0.0),
            Complex64::new(-0.5, 0.3),
            Complex64::new(0.2, -0.9),
            Complex64::new(0.0, 0.4),
        ];
        let mut whole = Accumulator::default();
        for v in values {
            whole.push(v);
        }
        let mut left = Accumulator::default();
        let mut right = Accumulator::default();
        left.push(values[0]);
        left.push(values[1]);
        right.push(values[2]);
        right.push(values[3]);
        let merged = left.merge(right);
        assert_eq!(merged.count(), whole.count());
        assert!((merged.mean() - whole.mean()).norm() < 1e-12);
        assert!((merged.std_error() - whole.std_error()).abs() < 1e-12);
    }

    #[test]
    fn test_std_error_shrinks_with_sample_count() {
        let mut small = Accumulator::default();
        let mut large = Accumulator::default();
        for i in 0..100 {
            let v = Complex64::new(if i % 2 == 0 { 1.0 } else { -1.0 }, 0.0);
            small.push(v);
        }
        for i in 0..400 {
            let v = Complex64::new(if i % 2 == 0 { 1.0 } else { -1.0 }, 0.0);
            large.push(v);
        }
        let ratio = large.std_error() / small.std_error();
        assert!((ratio - 0.5).abs() < 1e-9);
    }
}
