//! Tests for basis-rotation synthesis.

use alsvin_measure::{
    CliffordGate, MeasureError, MeasurementGroup, MeasurementGrouper, RotationUnitary,
    diagonalizing_rotation,
};
use alsvin_pauli::{CommutationMode, Hamiltonian, PauliOp, PauliString, PauliTerm};
use proptest::prelude::*;

fn string(ops: &[(u32, PauliOp)]) -> PauliString {
    PauliString::new(ops.iter().copied()).unwrap()
}

fn is_z_only(s: &PauliString) -> bool {
    s.ops().iter().all(|(_, op)| *op == PauliOp::Z)
}

/// U·U† acts as the identity on every single-qubit generator and on the
/// given strings.
fn assert_unitary(u: &RotationUnitary, strings: &[PauliString]) {
    let round_trip = u.then(&u.dagger());
    let max_qubit = strings.iter().filter_map(|s| s.max_qubit()).max().unwrap_or(0);
    let generators = (0..=max_qubit)
        .flat_map(|q| {
            [
                PauliString::single(q, PauliOp::X),
                PauliString::single(q, PauliOp::Z),
            ]
        })
        .chain(strings.iter().cloned());
    for s in generators {
        let (sign, out) = round_trip.conjugate_string(&s);
        assert!((sign - 1.0).abs() < 1e-9, "sign {sign} for {s}");
        assert_eq!(out, s);
    }
}

// ---------------------------------------------------------------------------
// Qubit-wise groups: single-qubit rotations only
// ---------------------------------------------------------------------------

#[test]
fn z_only_group_needs_no_rotation() {
    let group = MeasurementGroup::from_terms(
        CommutationMode::QubitWise,
        vec![
            PauliTerm::constant(-0.5),
            PauliTerm::z(0, 1.0),
            PauliTerm::zz(0, 1, 0.25),
        ],
    );
    let u = diagonalizing_rotation(&group).unwrap();
    assert!(u.is_empty());
}

#[test]
fn x_term_rotates_with_hadamards() {
    use alsvin_pauli::PauliOp::X;
    let term = PauliTerm::new(0.3, string(&[(0, X), (1, X)]));
    let group = MeasurementGroup::from_terms(CommutationMode::QubitWise, vec![term.clone()]);

    let u = diagonalizing_rotation(&group).unwrap();
    assert_eq!(u.gates(), &[CliffordGate::H(0), CliffordGate::H(1)]);

    let rotated = u.conjugate_term(&term);
    assert_eq!(rotated, PauliTerm::zz(0, 1, 0.3));
}

#[test]
fn y_term_rotates_through_sdg_then_h() {
    let term = PauliTerm::y(2, -0.8);
    let group = MeasurementGroup::from_terms(CommutationMode::QubitWise, vec![term.clone()]);

    let u = diagonalizing_rotation(&group).unwrap();
    assert_eq!(u.gates(), &[CliffordGate::Sdg(2), CliffordGate::H(2)]);

    let rotated = u.conjugate_term(&term);
    assert_eq!(rotated, PauliTerm::z(2, -0.8));
    assert_unitary(&u, &[term.string]);
}

#[test]
fn qubit_wise_group_uses_no_entangling_gates() {
    use alsvin_pauli::PauliOp::{X, Y, Z};
    let group = MeasurementGroup::from_terms(
        CommutationMode::QubitWise,
        vec![
            PauliTerm::new(0.4, string(&[(0, X), (2, Y)])),
            PauliTerm::new(-0.1, string(&[(0, X), (1, Z)])),
            PauliTerm::y(2, 0.9),
        ],
    );
    let u = diagonalizing_rotation(&group).unwrap();
    assert_eq!(u.entangling_count(), 0);
    for term in group.terms() {
        assert!(is_z_only(&u.conjugate_term(term).string));
    }
    let strings: Vec<PauliString> = group.terms().iter().map(|t| t.string.clone()).collect();
    assert_unitary(&u, &strings);
}

// ---------------------------------------------------------------------------
// Fully commuting groups: entangling rotations
// ---------------------------------------------------------------------------

#[test]
fn double_flip_pair_diagonalizes_with_one_cx() {
    use alsvin_pauli::PauliOp::{X, Y};
    let xx = PauliTerm::new(0.3, string(&[(0, X), (1, X)]));
    let yy = PauliTerm::new(0.3, string(&[(0, Y), (1, Y)]));
    let group = MeasurementGroup::from_terms(CommutationMode::Full, vec![xx.clone(), yy.clone()]);

    let u = diagonalizing_rotation(&group).unwrap();
    assert_eq!(u.gates(), &[CliffordGate::Cx(0, 1), CliffordGate::H(0)]);

    // CX(0,1)·H(0) maps X0X1 → Z0 and Y0Y1 → −Z0Z1.
    assert_eq!(u.conjugate_term(&xx), PauliTerm::z(0, 0.3));
    assert_eq!(u.conjugate_term(&yy), PauliTerm::zz(0, 1, -0.3));
    assert_unitary(&u, &[xx.string, yy.string]);
}

#[test]
fn bell_basis_group_diagonalizes() {
    use alsvin_pauli::PauliOp::{X, Y};
    // XX, YY, ZZ on two qubits mutually commute but share no single-qubit
    // eigenbasis; measuring them together requires the Bell rotation.
    let xx = PauliTerm::new(1.0, string(&[(0, X), (1, X)]));
    let yy = PauliTerm::new(1.0, string(&[(0, Y), (1, Y)]));
    let zz = PauliTerm::zz(0, 1, 1.0);
    let group = MeasurementGroup::from_terms(
        CommutationMode::Full,
        vec![xx.clone(), yy.clone(), zz.clone()],
    );

    let u = diagonalizing_rotation(&group).unwrap();
    for term in group.terms() {
        let rotated = u.conjugate_term(term);
        assert!(is_z_only(&rotated.string), "{rotated} is not diagonal");
        assert!((rotated.coeff.abs() - 1.0).abs() < 1e-9);
    }
    assert_unitary(&u, &[xx.string, yy.string, zz.string]);
}

#[test]
fn full_mode_group_that_is_qubit_wise_stays_entangling_free() {
    let group = MeasurementGroup::from_terms(
        CommutationMode::Full,
        vec![PauliTerm::z(0, 1.0), PauliTerm::x(1, 0.5)],
    );
    let u = diagonalizing_rotation(&group).unwrap();
    assert_eq!(u.gates(), &[CliffordGate::H(1)]);
    assert_eq!(u.entangling_count(), 0);
}

#[test]
fn grouped_h2_hamiltonian_is_fully_measurable() {
    use alsvin_pauli::PauliOp::{X, Y};
    let h = Hamiltonian::from_terms(vec![
        PauliTerm::constant(-0.4804),
        PauliTerm::z(0, 0.3435),
        PauliTerm::z(1, -0.4347),
        PauliTerm::zz(0, 1, 0.5716),
        PauliTerm::new(0.0910, string(&[(0, Y), (1, Y)])),
        PauliTerm::new(0.0910, string(&[(0, X), (1, X)])),
    ]);

    for mode in [CommutationMode::QubitWise, CommutationMode::Full] {
        for group in MeasurementGrouper::new(mode).group(&h) {
            let u = diagonalizing_rotation(&group).unwrap();
            for term in group.terms() {
                let rotated = u.conjugate_term(term);
                assert!(is_z_only(&rotated.string));
                assert!((rotated.coeff.abs() - term.coeff.abs()).abs() < 1e-9);
            }
            let strings: Vec<PauliString> =
                group.terms().iter().map(|t| t.string.clone()).collect();
            assert_unitary(&u, &strings);
        }
    }
}

// ---------------------------------------------------------------------------
// Precondition violations
// ---------------------------------------------------------------------------

#[test]
fn anticommuting_pair_is_rejected_up_front() {
    let group = MeasurementGroup::from_terms(
        CommutationMode::Full,
        vec![PauliTerm::x(0, 1.0), PauliTerm::z(0, 1.0)],
    );
    let err = diagonalizing_rotation(&group).unwrap_err();
    assert!(matches!(err, MeasureError::UngroupableTerms { .. }));
}

#[test]
fn qubit_wise_mode_rejects_merely_fully_commuting_terms() {
    use alsvin_pauli::PauliOp::{X, Y};
    // Commute as whole operators, but conflict qubit-wise.
    let group = MeasurementGroup::from_terms(
        CommutationMode::QubitWise,
        vec![
            PauliTerm::new(1.0, string(&[(0, X), (1, X)])),
            PauliTerm::new(1.0, string(&[(0, Y), (1, Y)])),
        ],
    );
    let err = diagonalizing_rotation(&group).unwrap_err();
    assert!(matches!(err, MeasureError::UngroupableTerms { .. }));
}

#[test]
fn identity_only_group_synthesizes_the_empty_rotation() {
    let group =
        MeasurementGroup::from_terms(CommutationMode::Full, vec![PauliTerm::constant(2.5)]);
    let u = diagonalizing_rotation(&group).unwrap();
    assert!(u.is_empty());
    assert_eq!(u.conjugate_term(&group.terms()[0]), group.terms()[0]);
}

// ---------------------------------------------------------------------------
// End-to-end property: group, rotate, verify
// ---------------------------------------------------------------------------

fn arb_hamiltonian() -> impl Strategy<Value = Hamiltonian> {
    let term = (
        prop::collection::btree_map(
            0u32..5,
            prop_oneof![Just(PauliOp::X), Just(PauliOp::Y), Just(PauliOp::Z)],
            0..4,
        ),
        -1.0f64..1.0,
    )
        .prop_map(|(ops, coeff)| {
            PauliTerm::new(coeff, PauliString::new(ops).expect("btree keys are unique"))
        });
    prop::collection::vec(term, 1..10).prop_map(Hamiltonian::from_terms)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn every_group_diagonalizes_and_round_trips(h in arb_hamiltonian()) {
        for mode in [CommutationMode::QubitWise, CommutationMode::Full] {
            for group in MeasurementGrouper::new(mode).group(&h) {
                let u = diagonalizing_rotation(&group).unwrap();
                if mode == CommutationMode::QubitWise {
                    prop_assert_eq!(u.entangling_count(), 0);
                }
                let round_trip = u.then(&u.dagger());
                for term in group.terms() {
                    let rotated = u.conjugate_term(term);
                    prop_assert!(rotated.string.ops().iter().all(|(_, op)| *op == PauliOp::Z));
                    prop_assert!((rotated.coeff.abs() - term.coeff.abs()).abs() < 1e-9);

                    let (sign, back) = round_trip.conjugate_string(&term.string);
                    prop_assert!((sign - 1.0).abs() < 1e-9);
                    prop_assert_eq!(back, term.string.clone());
                }
            }
        }
    }
}
