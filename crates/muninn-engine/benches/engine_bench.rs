//! Benchmarks for state-vector gate and word application
//!
//! Run with: cargo bench -p muninn-engine

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::f64::consts::PI;

use muninn_engine::{EngineLimits, StateVector};
use muninn_ir::{Circuit, GateSpec, Layer, OperatorWord, QubitId};

/// Build a deterministic brick-wall circuit for benchmarking.
fn bench_circuit(num_qubits: u32, cycles: u32) -> Circuit {
    let mut circuit = Circuit::new(num_qubits);
    for cycle in 0..cycles {
        let mut singles = Layer::new();
        for q in 0..num_qubits {
            let theta = PI / 4.0 + 0.1 * f64::from(q);
            let phi = 0.2 * f64::from(cycle) - 1.0;
            singles
                .push(GateSpec::single(QubitId(q), theta, phi).unwrap())
                .unwrap();
        }
        circuit.push_layer(singles).unwrap();

        let mut pairs = Layer::new();
        let mut q = cycle % 2;
        while q + 1 < num_qubits {
            pairs
                .push(GateSpec::two(QubitId(q), QubitId(q + 1)).unwrap())
                .unwrap();
            q += 2;
        }
        if !pairs.is_empty() {
            circuit.push_layer(pairs).unwrap();
        }
    }
    circuit
}

fn bench_circuit_application(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_circuit");

    for num_qubits in &[8u32, 12, 16] {
        let circuit = bench_circuit(*num_qubits, 8);
        group.bench_with_input(
            BenchmarkId::new("forward", num_qubits),
            num_qubits,
            |b, &n| {
                b.iter(|| {
                    let mut state = StateVector::try_new(n, EngineLimits::default()).unwrap();
                    state.apply_circuit(black_box(&circuit), false).unwrap();
                    state
                });
            },
        );
    }

    group.finish();
}

fn bench_word_application(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_word");

    let circuit = bench_circuit(12, 8);
    for order in &[1usize, 2, 4] {
        let word = OperatorWord::echo(*order, QubitId(0), QubitId(11)).unwrap();
        group.bench_with_input(BenchmarkId::new("order", order), order, |b, _| {
            b.iter(|| {
                let mut state = StateVector::try_new(12, EngineLimits::default()).unwrap();
                state
                    .apply_word(black_box(&word), black_box(&circuit))
                    .unwrap();
                state
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_circuit_application, bench_word_application);
criterion_main!(benches);
