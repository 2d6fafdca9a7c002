//! Tests for Hamiltonian construction and term algebra.

use alsvin_pauli::{Hamiltonian, PauliOp, PauliString, PauliTerm};
use num_complex::Complex64;

// ---------------------------------------------------------------------------
// Shape merging
// ---------------------------------------------------------------------------

#[test]
fn duplicate_shapes_merge_additively() {
    let h = Hamiltonian::from_terms(vec![
        PauliTerm::z(0, 0.25),
        PauliTerm::x(1, 1.0),
        PauliTerm::z(0, 0.5),
    ]);
    assert_eq!(h.n_terms(), 2);
    assert_eq!(h.terms()[0], PauliTerm::z(0, 0.75));
    assert_eq!(h.terms()[1], PauliTerm::x(1, 1.0));
}

#[test]
fn merge_preserves_first_occurrence_order() {
    let h = Hamiltonian::from_terms(vec![
        PauliTerm::x(0, 1.0),
        PauliTerm::z(2, -1.0),
        PauliTerm::x(0, 2.0),
        PauliTerm::zz(0, 1, 0.5),
    ]);
    let strings: Vec<&PauliString> = h.terms().iter().map(|t| &t.string).collect();
    assert_eq!(
        strings,
        vec![
            &PauliTerm::x(0, 0.0).string,
            &PauliTerm::z(2, 0.0).string,
            &PauliTerm::zz(0, 1, 0.0).string,
        ]
    );
}

#[test]
fn coefficients_cancelling_to_zero_keep_their_slot() {
    let h = Hamiltonian::from_terms(vec![PauliTerm::z(0, 1.0), PauliTerm::z(0, -1.0)]);
    assert_eq!(h.n_terms(), 1);
    assert_eq!(h.terms()[0].coeff, 0.0);
}

#[test]
fn identity_terms_merge_too() {
    let h = Hamiltonian::from_terms(vec![PauliTerm::constant(0.5), PauliTerm::constant(0.25)]);
    assert_eq!(h.n_terms(), 1);
    assert!(h.terms()[0].string.is_identity());
    assert!((h.terms()[0].coeff - 0.75).abs() < 1e-15);
}

// ---------------------------------------------------------------------------
// Accessors
// ---------------------------------------------------------------------------

#[test]
fn hamiltonian_lambda() {
    let h = Hamiltonian::from_terms(vec![
        PauliTerm::z(0, -1.0),
        PauliTerm::z(1, 0.5),
        PauliTerm::zz(0, 1, -0.25),
    ]);
    assert!((h.lambda() - 1.75).abs() < 1e-12);
}

#[test]
fn hamiltonian_min_qubits() {
    let h = Hamiltonian::from_terms(vec![PauliTerm::z(0, 1.0), PauliTerm::zz(2, 4, 0.5)]);
    assert_eq!(h.min_qubits(), 5);
}

#[test]
fn empty_hamiltonian() {
    let h = Hamiltonian::from_terms(vec![]);
    assert!(h.is_empty());
    assert_eq!(h.min_qubits(), 0);
    assert_eq!(h.lambda(), 0.0);
}

#[test]
fn hamiltonian_from_iter() {
    let h: Hamiltonian = vec![PauliTerm::z(0, 1.0), PauliTerm::x(1, -0.5)]
        .into_iter()
        .collect();
    assert_eq!(h.n_terms(), 2);
}

// ---------------------------------------------------------------------------
// Term algebra
// ---------------------------------------------------------------------------

#[test]
fn multiplying_by_identity_returns_term_unchanged() {
    let term = PauliTerm::new(
        -0.7,
        PauliString::new([(0, PauliOp::X), (3, PauliOp::Z)]).unwrap(),
    );
    let identity = PauliTerm::constant(1.0);

    let (coeff, string) = term.multiply(&identity);
    assert!((coeff - Complex64::new(-0.7, 0.0)).norm() < 1e-15);
    assert_eq!(string, term.string);

    let (coeff, string) = identity.multiply(&term);
    assert!((coeff - Complex64::new(-0.7, 0.0)).norm() < 1e-15);
    assert_eq!(string, term.string);
}

#[test]
fn shape_equality_ignores_coefficient() {
    let a = PauliTerm::zz(0, 1, 0.5);
    let b = PauliTerm::zz(0, 1, -3.0);
    assert!(a.same_shape(&b));
    assert_ne!(a, b);
}
