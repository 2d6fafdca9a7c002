//! Weighted Pauli terms.

use std::fmt;

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::pauli::{PauliOp, PauliString};

/// A single weighted Pauli term: `coeff · P`.
///
/// Hamiltonian terms are Hermitian, so the coefficient is real. Products of
/// terms can pick up imaginary factors; [`PauliTerm::multiply`] therefore
/// returns a complex coefficient rather than another term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PauliTerm {
    /// Real coefficient.
    pub coeff: f64,
    /// The Pauli string.
    pub string: PauliString,
}

impl PauliTerm {
    /// Create a new term.
    pub fn new(coeff: f64, string: PauliString) -> Self {
        Self { coeff, string }
    }

    /// The scalar term `coeff · I`.
    pub fn constant(coeff: f64) -> Self {
        Self::new(coeff, PauliString::identity())
    }

    /// Shorthand: single-qubit X term.
    pub fn x(qubit: u32, coeff: f64) -> Self {
        Self::new(coeff, PauliString::single(qubit, PauliOp::X))
    }

    /// Shorthand: single-qubit Y term.
    pub fn y(qubit: u32, coeff: f64) -> Self {
        Self::new(coeff, PauliString::single(qubit, PauliOp::Y))
    }

    /// Shorthand: single-qubit Z term.
    pub fn z(qubit: u32, coeff: f64) -> Self {
        Self::new(coeff, PauliString::single(qubit, PauliOp::Z))
    }

    /// Shorthand: ZZ coupling term.
    pub fn zz(q0: u32, q1: u32, coeff: f64) -> Self {
        let (lo, hi) = if q0 <= q1 { (q0, q1) } else { (q1, q0) };
        Self::new(
            coeff,
            PauliString::from_sorted_ops(vec![(lo, PauliOp::Z), (hi, PauliOp::Z)]),
        )
    }

    /// Multiply two terms, folding the accumulated i-power into the
    /// coefficient: `coeff = a.coeff · b.coeff · i^k`.
    pub fn multiply(&self, rhs: &PauliTerm) -> (Complex64, PauliString) {
        let product = self.string.multiply(&rhs.string);
        (
            product.phase.to_complex() * self.coeff * rhs.coeff,
            product.string,
        )
    }

    /// Same operator shape, coefficients ignored.
    pub fn same_shape(&self, other: &PauliTerm) -> bool {
        self.string == other.string
    }
}

impl fmt::Display for PauliTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.coeff, self.string)
    }
}
