//! Hamiltonian data structures.
//!
//! A Hamiltonian is a sum of weighted Pauli strings:
//!
//!   H = Σ_k  c_k · P_k
//!
//! where each P_k is a tensor product of single-qubit Pauli operators and
//! c_k ∈ ℝ. Duplicate operator shapes are merged additively at
//! construction, so the stored term list never contains two terms with the
//! same string.
//!
//! # Example
//!
//! ```rust
//! use alsvin_pauli::{Hamiltonian, PauliTerm};
//!
//! // H = -1.0·Z₀Z₁  +  0.5·X₀
//! let h = Hamiltonian::from_terms(vec![
//!     PauliTerm::zz(0, 1, -1.0),
//!     PauliTerm::x(0, 0.5),
//! ]);
//! assert_eq!(h.n_terms(), 2);
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::pauli::PauliString;
use crate::term::PauliTerm;

/// A sum-of-Pauli-strings Hamiltonian.
///
/// Immutable once constructed; consumers only ever read the term list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hamiltonian {
    terms: Vec<PauliTerm>,
}

impl Hamiltonian {
    /// Create from a list of terms, merging duplicate shapes additively.
    ///
    /// First-occurrence order is preserved; a later term with a shape seen
    /// before folds its coefficient into the earlier slot. Coefficients
    /// that cancel to zero keep their slot.
    pub fn from_terms(terms: impl IntoIterator<Item = PauliTerm>) -> Self {
        let mut slots: FxHashMap<PauliString, usize> = FxHashMap::default();
        let mut merged: Vec<PauliTerm> = Vec::new();
        for term in terms {
            match slots.get(&term.string) {
                Some(&idx) => merged[idx].coeff += term.coeff,
                None => {
                    slots.insert(term.string.clone(), merged.len());
                    merged.push(term);
                }
            }
        }
        Self { terms: merged }
    }

    /// All terms.
    pub fn terms(&self) -> &[PauliTerm] {
        &self.terms
    }

    /// Number of terms.
    pub fn n_terms(&self) -> usize {
        self.terms.len()
    }

    /// True when the Hamiltonian has no terms at all.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Spectral norm upper bound: Σ |c_k|.
    pub fn lambda(&self) -> f64 {
        self.terms.iter().map(|t| t.coeff.abs()).sum()
    }

    /// The minimum number of qubits required to represent this Hamiltonian.
    ///
    /// Returns 0 if the Hamiltonian is empty or purely identity.
    pub fn min_qubits(&self) -> u32 {
        self.terms
            .iter()
            .filter_map(|t| t.string.max_qubit())
            .max()
            .map_or(0, |q| q + 1)
    }
}

impl FromIterator<PauliTerm> for Hamiltonian {
    fn from_iter<T: IntoIterator<Item = PauliTerm>>(iter: T) -> Self {
        Self::from_terms(iter)
    }
}
