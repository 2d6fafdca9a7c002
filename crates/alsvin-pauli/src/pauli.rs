//! Sparse Pauli-string algebra.
//!
//! A Pauli string is a tensor product of single-qubit Pauli operators over a
//! set of qubits:
//!
//!   P = σ_{q₀} ⊗ σ_{q₁} ⊗ …,   σ ∈ {X, Y, Z}
//!
//! stored sparsely: qubits not listed carry the identity. Multiplication
//! follows the single-qubit algebra
//!
//!   X·X = Y·Y = Z·Z = I,   X·Y = iZ  (and cyclic)
//!
//! with the accumulated power of i tracked exactly as a [`Phase`].

use std::fmt;

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::error::{PauliError, PauliResult};

/// Single-qubit Pauli operator.
///
/// `I` occurs as an algebra result (e.g. X·X) but is never stored inside a
/// [`PauliString`]: identity on a qubit is expressed by that qubit being
/// absent from the string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PauliOp {
    /// Identity.
    I,
    /// Pauli-X.
    X,
    /// Pauli-Y.
    Y,
    /// Pauli-Z.
    Z,
}

impl PauliOp {
    /// Multiply two single-qubit Paulis, returning the accumulated power of
    /// i together with the resulting operator.
    pub fn multiply(self, rhs: PauliOp) -> (Phase, PauliOp) {
        use PauliOp::{I, X, Y, Z};
        match (self, rhs) {
            (I, p) | (p, I) => (Phase::ONE, p),
            (X, X) | (Y, Y) | (Z, Z) => (Phase::ONE, I),
            (X, Y) => (Phase::PLUS_I, Z),
            (Y, Z) => (Phase::PLUS_I, X),
            (Z, X) => (Phase::PLUS_I, Y),
            (Y, X) => (Phase::MINUS_I, Z),
            (Z, Y) => (Phase::MINUS_I, X),
            (X, Z) => (Phase::MINUS_I, Y),
        }
    }

    /// True for the identity operator.
    #[inline]
    pub fn is_identity(self) -> bool {
        self == PauliOp::I
    }

    /// One-letter label used in string rendering.
    #[inline]
    pub fn label(self) -> char {
        match self {
            PauliOp::I => 'I',
            PauliOp::X => 'X',
            PauliOp::Y => 'Y',
            PauliOp::Z => 'Z',
        }
    }
}

impl fmt::Display for PauliOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A power of the imaginary unit: i^k with k ∈ {0, 1, 2, 3}.
///
/// Pauli multiplication only ever produces these four phases, so they are
/// carried as an exact mod-4 exponent rather than a floating-point complex
/// number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Phase(u8);

impl Phase {
    /// i⁰ = 1.
    pub const ONE: Phase = Phase(0);
    /// i¹ = i.
    pub const PLUS_I: Phase = Phase(1);
    /// i² = −1.
    pub const MINUS_ONE: Phase = Phase(2);
    /// i³ = −i.
    pub const MINUS_I: Phase = Phase(3);

    /// i^exponent, reduced mod 4.
    pub fn new(exponent: u8) -> Self {
        Phase(exponent % 4)
    }

    /// The exponent k of i^k, in 0..4.
    #[inline]
    pub fn exponent(self) -> u8 {
        self.0
    }

    /// True when the phase is ±1.
    #[inline]
    pub fn is_real(self) -> bool {
        self.0 % 2 == 0
    }

    /// The phase as a complex number.
    pub fn to_complex(self) -> Complex64 {
        match self.0 {
            0 => Complex64::new(1.0, 0.0),
            1 => Complex64::new(0.0, 1.0),
            2 => Complex64::new(-1.0, 0.0),
            _ => Complex64::new(0.0, -1.0),
        }
    }
}

impl std::ops::Mul for Phase {
    type Output = Phase;

    fn mul(self, rhs: Phase) -> Phase {
        Phase((self.0 + rhs.0) % 4)
    }
}

impl Default for Phase {
    fn default() -> Self {
        Phase::ONE
    }
}

/// A tensor product of Pauli operators on named qubits.
///
/// Stored as a sorted `Vec<(qubit_index, PauliOp)>` with identity operators
/// omitted; qubits not listed are implicitly I. Equality, ordering and
/// hashing are shape-only — a string carries no coefficient.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PauliString {
    /// Non-identity operators, sorted by qubit index ascending.
    ops: Vec<(u32, PauliOp)>,
}

impl PauliString {
    /// The identity string (no non-identity operators).
    pub fn identity() -> Self {
        Self { ops: vec![] }
    }

    /// Construct a string from an iterator of (qubit, op) pairs.
    ///
    /// Identity operators are dropped; the remaining ops are sorted by
    /// qubit. A qubit index that occurs more than once is rejected.
    pub fn new(ops: impl IntoIterator<Item = (u32, PauliOp)>) -> PauliResult<Self> {
        let mut v: Vec<(u32, PauliOp)> = ops
            .into_iter()
            .filter(|(_, op)| !op.is_identity())
            .collect();
        v.sort_by_key(|(q, _)| *q);
        for pair in v.windows(2) {
            if pair[0].0 == pair[1].0 {
                return Err(PauliError::DuplicateQubit { qubit: pair[0].0 });
            }
        }
        Ok(Self { ops: v })
    }

    /// Single-operator string σ_q.
    pub fn single(qubit: u32, op: PauliOp) -> Self {
        if op.is_identity() {
            Self::identity()
        } else {
            Self {
                ops: vec![(qubit, op)],
            }
        }
    }

    /// Construct from pairs already sorted by qubit with no duplicates and
    /// no identities. Callers uphold the invariant.
    #[doc(hidden)]
    pub fn from_sorted_ops(ops: Vec<(u32, PauliOp)>) -> Self {
        debug_assert!(ops.windows(2).all(|w| w[0].0 < w[1].0));
        debug_assert!(ops.iter().all(|(_, op)| !op.is_identity()));
        Self { ops }
    }

    /// The non-identity (qubit, op) pairs, sorted by qubit index.
    pub fn ops(&self) -> &[(u32, PauliOp)] {
        &self.ops
    }

    /// The operator acting on `qubit` (I when the qubit is absent).
    pub fn op_at(&self, qubit: u32) -> PauliOp {
        match self.ops.binary_search_by_key(&qubit, |(q, _)| *q) {
            Ok(idx) => self.ops[idx].1,
            Err(_) => PauliOp::I,
        }
    }

    /// True if there are no non-identity operators.
    pub fn is_identity(&self) -> bool {
        self.ops.is_empty()
    }

    /// The highest qubit index referenced, or `None` for the identity.
    pub fn max_qubit(&self) -> Option<u32> {
        self.ops.last().map(|(q, _)| *q)
    }

    /// Number of non-identity sites.
    pub fn weight(&self) -> usize {
        self.ops.len()
    }

    /// Qubit indices carrying a non-identity operator, ascending.
    pub fn qubits(&self) -> impl Iterator<Item = u32> + '_ {
        self.ops.iter().map(|(q, _)| *q)
    }

    /// Multiply two strings qubit-by-qubit, accumulating the phase.
    pub fn multiply(&self, rhs: &PauliString) -> PauliProduct {
        let mut phase = Phase::ONE;
        let mut ops = Vec::with_capacity(self.ops.len() + rhs.ops.len());
        let (mut i, mut j) = (0, 0);
        while i < self.ops.len() || j < rhs.ops.len() {
            match (self.ops.get(i), rhs.ops.get(j)) {
                (Some(&(qa, a)), Some(&(qb, _))) if qa < qb => {
                    ops.push((qa, a));
                    i += 1;
                }
                (Some(&(qa, _)), Some(&(qb, b))) if qb < qa => {
                    ops.push((qb, b));
                    j += 1;
                }
                (Some(&(q, a)), Some(&(_, b))) => {
                    let (p, op) = a.multiply(b);
                    phase = phase * p;
                    if !op.is_identity() {
                        ops.push((q, op));
                    }
                    i += 1;
                    j += 1;
                }
                (Some(&(qa, a)), None) => {
                    ops.push((qa, a));
                    i += 1;
                }
                (None, Some(&(qb, b))) => {
                    ops.push((qb, b));
                    j += 1;
                }
                (None, None) => unreachable!("loop condition"),
            }
        }
        PauliProduct {
            phase,
            string: PauliString { ops },
        }
    }

    /// Qubit-wise commutation: on every qubit the two operators are equal
    /// or at least one of them is identity. Symmetric and reflexive.
    pub fn qubit_wise_commutes(&self, other: &PauliString) -> bool {
        let (mut i, mut j) = (0, 0);
        while i < self.ops.len() && j < other.ops.len() {
            let (qa, a) = self.ops[i];
            let (qb, b) = other.ops[j];
            if qa < qb {
                i += 1;
            } else if qb < qa {
                j += 1;
            } else {
                if a != b {
                    return false;
                }
                i += 1;
                j += 1;
            }
        }
        true
    }

    /// Full operator commutation: the number of qubits where the two
    /// strings carry different non-identity operators is even.
    ///
    /// A strict superset of [`qubit_wise_commutes`](Self::qubit_wise_commutes).
    pub fn commutes(&self, other: &PauliString) -> bool {
        let mut anticommuting_sites = 0usize;
        let (mut i, mut j) = (0, 0);
        while i < self.ops.len() && j < other.ops.len() {
            let (qa, a) = self.ops[i];
            let (qb, b) = other.ops[j];
            if qa < qb {
                i += 1;
            } else if qb < qa {
                j += 1;
            } else {
                if a != b {
                    anticommuting_sites += 1;
                }
                i += 1;
                j += 1;
            }
        }
        anticommuting_sites % 2 == 0
    }
}

impl fmt::Display for PauliString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ops.is_empty() {
            return write!(f, "I");
        }
        for (idx, (q, op)) in self.ops.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}{}", op.label(), q)?;
        }
        Ok(())
    }
}

/// Result of multiplying two Pauli strings: `i^k · P`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PauliProduct {
    /// Accumulated power of i.
    pub phase: Phase,
    /// The resulting string.
    pub string: PauliString,
}

impl PauliProduct {
    /// True for the scalar identity: phase 1 and no operators.
    pub fn is_identity(&self) -> bool {
        self.phase == Phase::ONE && self.string.is_identity()
    }
}
