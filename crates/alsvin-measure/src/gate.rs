//! Clifford gate descriptors and rotation unitaries.
//!
//! A [`RotationUnitary`] is an ordered list of fixed-angle elementary gates,
//! applied first to last. It is pure output data, meant to be appended to an
//! ansatz circuit before readout by whatever builds the circuit. The one
//! piece of semantics carried here is conjugation — how each gate transforms a Pauli
//! string, `P → G·P·G†` — which follows the stabilizer-tableau rules with
//! exact sign tracking:
//!
//!   H:  X ↔ Z,  Y → −Y
//!   S:  X → Y,  Y → −X,  Z → Z
//!   CX: X_c → X_c X_t,  Z_t → Z_c Z_t
//!   CZ: X_a → X_a Z_b,  X_b → Z_a X_b

use std::collections::BTreeMap;
use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;

use alsvin_pauli::{PauliOp, PauliString, PauliTerm};
use serde::{Deserialize, Serialize};

/// An elementary fixed-angle Clifford gate.
///
/// Every variant carries its target qubit(s); none carries a variational
/// parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CliffordGate {
    /// Hadamard.
    H(u32),
    /// Quarter turn about Z (√Z).
    S(u32),
    /// Inverse quarter turn about Z.
    Sdg(u32),
    /// Controlled-X (control, target).
    Cx(u32, u32),
    /// Controlled-Z (symmetric in its qubits).
    Cz(u32, u32),
}

impl CliffordGate {
    /// Gate name as known to circuit builders.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            CliffordGate::H(_) => "h",
            CliffordGate::S(_) => "s",
            CliffordGate::Sdg(_) => "sdg",
            CliffordGate::Cx(_, _) => "cx",
            CliffordGate::Cz(_, _) => "cz",
        }
    }

    /// The qubits this gate acts on.
    pub fn qubits(&self) -> Vec<u32> {
        match *self {
            CliffordGate::H(q) | CliffordGate::S(q) | CliffordGate::Sdg(q) => vec![q],
            CliffordGate::Cx(a, b) | CliffordGate::Cz(a, b) => vec![a, b],
        }
    }

    /// Number of qubits this gate acts on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            CliffordGate::H(_) | CliffordGate::S(_) | CliffordGate::Sdg(_) => 1,
            CliffordGate::Cx(_, _) | CliffordGate::Cz(_, _) => 2,
        }
    }

    /// Fixed rotation angle in radians. Descriptor metadata for circuit
    /// builders; never a variational parameter.
    pub fn angle(&self) -> f64 {
        match self {
            CliffordGate::H(_) | CliffordGate::Cx(_, _) | CliffordGate::Cz(_, _) => PI,
            CliffordGate::S(_) => FRAC_PI_2,
            CliffordGate::Sdg(_) => -FRAC_PI_2,
        }
    }

    /// The inverse gate. H, CX and CZ are self-inverse.
    #[must_use]
    pub fn inverse(self) -> CliffordGate {
        match self {
            CliffordGate::S(q) => CliffordGate::Sdg(q),
            CliffordGate::Sdg(q) => CliffordGate::S(q),
            other => other,
        }
    }

    /// Conjugate a Pauli string: `P → G·P·G†`.
    ///
    /// Returns the sign (±1.0) and the transformed string. Cliffords map
    /// Paulis to Paulis, so the phase is always real.
    pub fn conjugate(self, string: &PauliString) -> (f64, PauliString) {
        let mut row = XzRow::from_string(string);
        row.apply(self);
        row.into_parts()
    }
}

impl fmt::Display for CliffordGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            CliffordGate::H(q) | CliffordGate::S(q) | CliffordGate::Sdg(q) => {
                write!(f, "{} q{}", self.name(), q)
            }
            CliffordGate::Cx(a, b) | CliffordGate::Cz(a, b) => {
                write!(f, "{} q{}, q{}", self.name(), a, b)
            }
        }
    }
}

/// An ordered sequence of elementary Clifford gates, applied first to last.
///
/// Composing a unitary with its [`dagger`](Self::dagger) acts as the
/// identity on every Pauli term — the correctness invariant the rotation
/// synthesizer is tested against.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationUnitary {
    gates: Vec<CliffordGate>,
}

impl RotationUnitary {
    /// The empty (identity) unitary.
    pub fn new() -> Self {
        Self::default()
    }

    /// The gate sequence, in application order.
    pub fn gates(&self) -> &[CliffordGate] {
        &self.gates
    }

    /// Append a gate.
    pub fn push(&mut self, gate: CliffordGate) {
        self.gates.push(gate);
    }

    /// Number of gates.
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// True for the identity (no gates).
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Number of two-qubit gates — the entangling cost of the rotation.
    pub fn entangling_count(&self) -> usize {
        self.gates.iter().filter(|g| g.num_qubits() == 2).count()
    }

    /// The inverse unitary U†: gates reversed and element-wise inverted.
    #[must_use]
    pub fn dagger(&self) -> RotationUnitary {
        Self {
            gates: self.gates.iter().rev().map(|g| g.inverse()).collect(),
        }
    }

    /// Sequential composition: `self` first, then `other`.
    #[must_use]
    pub fn then(&self, other: &RotationUnitary) -> RotationUnitary {
        let mut gates = self.gates.clone();
        gates.extend_from_slice(&other.gates);
        Self { gates }
    }

    /// Conjugate a Pauli string by the whole sequence: `P → U·P·U†`.
    pub fn conjugate_string(&self, string: &PauliString) -> (f64, PauliString) {
        let mut row = XzRow::from_string(string);
        for &gate in &self.gates {
            row.apply(gate);
        }
        row.into_parts()
    }

    /// Conjugate a term, folding the sign into the coefficient.
    pub fn conjugate_term(&self, term: &PauliTerm) -> PauliTerm {
        let (sign, string) = self.conjugate_string(&term.string);
        PauliTerm::new(sign * term.coeff, string)
    }
}

impl FromIterator<CliffordGate> for RotationUnitary {
    fn from_iter<T: IntoIterator<Item = CliffordGate>>(iter: T) -> Self {
        Self {
            gates: iter.into_iter().collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tableau row
// ---------------------------------------------------------------------------

/// Sparse symplectic representation of one Pauli string: per-qubit (x, z)
/// bits plus a sign. X = (1,0), Y = (1,1), Z = (0,1).
#[derive(Debug, Clone)]
pub(crate) struct XzRow {
    bits: BTreeMap<u32, (bool, bool)>,
    negated: bool,
}

impl XzRow {
    pub(crate) fn from_string(string: &PauliString) -> Self {
        let bits = string
            .ops()
            .iter()
            .map(|&(q, op)| {
                let xz = match op {
                    PauliOp::X => (true, false),
                    PauliOp::Y => (true, true),
                    PauliOp::Z => (false, true),
                    PauliOp::I => unreachable!("PauliString never stores identity"),
                };
                (q, xz)
            })
            .collect();
        Self {
            bits,
            negated: false,
        }
    }

    /// Sign (±1.0) and operator string of the row.
    pub(crate) fn into_parts(self) -> (f64, PauliString) {
        let ops = self
            .bits
            .into_iter()
            .map(|(q, xz)| {
                let op = match xz {
                    (true, false) => PauliOp::X,
                    (true, true) => PauliOp::Y,
                    (false, true) => PauliOp::Z,
                    (false, false) => unreachable!("cleared entries are removed"),
                };
                (q, op)
            })
            .collect();
        let sign = if self.negated { -1.0 } else { 1.0 };
        (sign, PauliString::from_sorted_ops(ops))
    }

    fn bit(&self, qubit: u32) -> (bool, bool) {
        self.bits.get(&qubit).copied().unwrap_or((false, false))
    }

    fn set_bit(&mut self, qubit: u32, x: bool, z: bool) {
        if x || z {
            self.bits.insert(qubit, (x, z));
        } else {
            self.bits.remove(&qubit);
        }
    }

    /// True when the z bit is set at `qubit` (operator Z or Y).
    pub(crate) fn z_bit(&self, qubit: u32) -> bool {
        self.bit(qubit).1
    }

    /// Qubits with the x bit set, ascending.
    pub(crate) fn x_support(&self) -> Vec<u32> {
        self.bits
            .iter()
            .filter(|(_, (x, _))| *x)
            .map(|(&q, _)| q)
            .collect()
    }

    /// Qubits with the z bit set, ascending.
    pub(crate) fn z_support(&self) -> Vec<u32> {
        self.bits
            .iter()
            .filter(|(_, (_, z))| *z)
            .map(|(&q, _)| q)
            .collect()
    }

    /// True when the row is Z-only (no x bit anywhere).
    pub(crate) fn is_diagonal(&self) -> bool {
        self.bits.values().all(|(x, _)| !x)
    }

    /// Non-identity (qubit, operator) entries, ascending by qubit.
    pub(crate) fn op_entries(&self) -> impl Iterator<Item = (u32, PauliOp)> + '_ {
        self.bits.iter().map(|(&q, &xz)| {
            let op = match xz {
                (true, false) => PauliOp::X,
                (true, true) => PauliOp::Y,
                (false, true) => PauliOp::Z,
                (false, false) => unreachable!("cleared entries are removed"),
            };
            (q, op)
        })
    }

    /// Conjugate the row in place by one gate, updating the sign per the
    /// stabilizer-tableau rules.
    pub(crate) fn apply(&mut self, gate: CliffordGate) {
        match gate {
            CliffordGate::H(q) => {
                let (x, z) = self.bit(q);
                if x && z {
                    self.negated = !self.negated;
                }
                self.set_bit(q, z, x);
            }
            CliffordGate::S(q) => {
                let (x, z) = self.bit(q);
                if x && z {
                    self.negated = !self.negated;
                }
                self.set_bit(q, x, z ^ x);
            }
            CliffordGate::Sdg(q) => {
                let (x, z) = self.bit(q);
                if x && !z {
                    self.negated = !self.negated;
                }
                self.set_bit(q, x, z ^ x);
            }
            CliffordGate::Cx(c, t) => {
                let (xc, zc) = self.bit(c);
                let (xt, zt) = self.bit(t);
                if xc && zt && (xt == zc) {
                    self.negated = !self.negated;
                }
                self.set_bit(t, xt ^ xc, zt);
                self.set_bit(c, xc, zc ^ zt);
            }
            CliffordGate::Cz(a, b) => {
                let (xa, za) = self.bit(a);
                let (xb, zb) = self.bit(b);
                if xa && xb && (za != zb) {
                    self.negated = !self.negated;
                }
                self.set_bit(b, xb, zb ^ xa);
                self.set_bit(a, xa, za ^ xb);
            }
        }
    }
}
