//! Tests for random brick-wall circuit generation.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::f64::consts::PI;

use muninn_ir::{GateSpec, IrError};
use muninn_otoc::{DEFAULT_THETA_CHOICES, OtocError, RandomCircuitBuilder};

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[test]
fn zero_qubits_returns_error() {
    let builder = RandomCircuitBuilder::new(0, 3);
    let mut rng = SmallRng::seed_from_u64(1);
    assert!(matches!(
        builder.build_with_rng(&mut rng),
        Err(OtocError::NoQubits)
    ));
}

#[test]
fn empty_theta_choices_returns_error() {
    let builder = RandomCircuitBuilder::new(3, 3).with_theta_choices(Vec::new());
    let mut rng = SmallRng::seed_from_u64(1);
    assert!(matches!(
        builder.build_with_rng(&mut rng),
        Err(OtocError::EmptyThetaChoices)
    ));
}

#[test]
fn non_finite_theta_choice_returns_error() {
    let builder = RandomCircuitBuilder::new(3, 3).with_theta_choices(vec![PI / 4.0, f64::NAN]);
    let mut rng = SmallRng::seed_from_u64(1);
    assert!(matches!(
        builder.build_with_rng(&mut rng),
        Err(OtocError::Ir(IrError::NonFiniteParameter { .. }))
    ));
}

// ---------------------------------------------------------------------------
// Circuit structure
// ---------------------------------------------------------------------------

#[test]
fn zero_cycles_is_identity() {
    let builder = RandomCircuitBuilder::new(4, 0);
    let mut rng = SmallRng::seed_from_u64(9);
    let circuit = builder.build_with_rng(&mut rng).unwrap();
    assert!(circuit.is_identity());
}

#[test]
fn brick_wall_layer_structure() {
    // Even cycles pair (0,1),(2,3); odd cycles pair (1,2). Two layers per
    // cycle: singles then pairs.
    let builder = RandomCircuitBuilder::new(4, 3);
    let mut rng = SmallRng::seed_from_u64(5);
    let circuit = builder.build_with_rng(&mut rng).unwrap();
    assert_eq!(circuit.num_layers(), 6);

    let pair_counts: Vec<usize> = circuit
        .layers()
        .iter()
        .skip(1)
        .step_by(2)
        .map(|layer| layer.len())
        .collect();
    assert_eq!(pair_counts, vec![2, 1, 2]);

    let single_count: usize = circuit
        .layers()
        .iter()
        .step_by(2)
        .map(|layer| layer.len())
        .sum();
    assert_eq!(single_count, 3 * 4);
}

#[test]
fn odd_register_leaves_one_qubit_unpaired() {
    let builder = RandomCircuitBuilder::new(5, 2);
    let mut rng = SmallRng::seed_from_u64(3);
    let circuit = builder.build_with_rng(&mut rng).unwrap();
    // cycle 0: (0,1),(2,3); cycle 1: (1,2),(3,4)
    let pair_counts: Vec<usize> = circuit
        .layers()
        .iter()
        .skip(1)
        .step_by(2)
        .map(|layer| layer.len())
        .collect();
    assert_eq!(pair_counts, vec![2, 2]);
}

#[test]
fn single_qubit_register_has_no_entangling_layers() {
    let builder = RandomCircuitBuilder::new(1, 4);
    let mut rng = SmallRng::seed_from_u64(2);
    let circuit = builder.build_with_rng(&mut rng).unwrap();
    assert_eq!(circuit.num_layers(), 4);
    assert_eq!(circuit.num_gates(), 4);
}

#[test]
fn angles_drawn_from_configured_sets() {
    let builder = RandomCircuitBuilder::new(3, 10);
    let mut rng = SmallRng::seed_from_u64(11);
    let circuit = builder.build_with_rng(&mut rng).unwrap();
    for layer in circuit.layers() {
        for gate in layer.gates() {
            if let GateSpec::SingleQubit { theta, phi, .. } = gate {
                assert!(
                    DEFAULT_THETA_CHOICES
                        .iter()
                        .any(|choice| (choice - theta).abs() < 1e-15),
                    "theta {theta} not in the discrete choice set"
                );
                assert!((-PI..PI).contains(phi), "phi {phi} outside [-pi, pi)");
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Reproducibility
// ---------------------------------------------------------------------------

#[test]
fn same_seed_same_circuit() {
    let builder = RandomCircuitBuilder::new(4, 5);
    let mut rng_a = SmallRng::seed_from_u64(1234);
    let mut rng_b = SmallRng::seed_from_u64(1234);
    let a = builder.build_with_rng(&mut rng_a).unwrap();
    let b = builder.build_with_rng(&mut rng_b).unwrap();
    assert_eq!(a, b);
}

#[test]
fn different_seeds_differ() {
    let builder = RandomCircuitBuilder::new(4, 5);
    let mut rng_a = SmallRng::seed_from_u64(1);
    let mut rng_b = SmallRng::seed_from_u64(2);
    let a = builder.build_with_rng(&mut rng_a).unwrap();
    let b = builder.build_with_rng(&mut rng_b).unwrap();
    assert_ne!(a, b);
}
