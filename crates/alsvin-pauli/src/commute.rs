//! Commutativity oracle.
//!
//! Two pairwise relations decide whether Pauli terms may share a
//! measurement group:
//!
//! - **qubit-wise**: on every qubit the operators are equal or one is
//!   absent. Reaching a Z-only form then needs single-qubit rotations only.
//! - **full**: an even number of sites anti-commute. A strictly larger
//!   relation whose groups need entangling rotations before readout.

use serde::{Deserialize, Serialize};

use crate::pauli::PauliString;

/// Which commutation relation a grouping is built on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommutationMode {
    /// Qubit-wise commutation: per-qubit operators never conflict.
    QubitWise,
    /// Full operator commutation.
    Full,
}

impl CommutationMode {
    /// Evaluate the pairwise predicate on two strings.
    pub fn holds(self, a: &PauliString, b: &PauliString) -> bool {
        match self {
            CommutationMode::QubitWise => a.qubit_wise_commutes(b),
            CommutationMode::Full => a.commutes(b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pauli::PauliOp::{X, Y};

    #[test]
    fn test_qubit_wise_implies_full() {
        let a = PauliString::new([(0, X), (2, Y)]).unwrap();
        let b = PauliString::new([(0, X), (1, Y)]).unwrap();
        assert!(CommutationMode::QubitWise.holds(&a, &b));
        assert!(CommutationMode::Full.holds(&a, &b));
    }
}
