//! Basis-rotation synthesis.
//!
//! Given a measurement group, constructs the Clifford unitary U that maps
//! every member term onto a Z-only string:
//!
//!   U·P_k·U† ∈ span{I, Z}^⊗   for every term P_k in the group
//!
//! so the whole group becomes readable from single-qubit computational-basis
//! measurement.
//!
//! Synthesis runs in two stages:
//!
//! - **Stage A** (only for groups that are not qubit-wise commuting): a
//!   symplectic-tableau sweep over the group's terms. Each round picks the
//!   lowest x-carrying qubit of the next unfinished term as a pivot, clears
//!   the rest of that term with CX and CZ, turns a pivot Y into X with Sdg,
//!   and lands the pivot on Z with H. Mutual commutation guarantees no
//!   finished term is ever disturbed, so the sweep terminates after at most
//!   one round per term.
//! - **Stage B**: per-qubit basis change on the consensus operator,
//!   X → H and Y → Sdg·H, as in Pauli-exponential synthesis. For groups
//!   built qubit-wise this is the entire rotation and uses no two-qubit
//!   gates.

use alsvin_pauli::PauliOp;
use tracing::debug;

use crate::error::{MeasureError, MeasureResult};
use crate::gate::{CliffordGate, RotationUnitary, XzRow};
use crate::grouping::MeasurementGroup;

/// Synthesize the diagonalizing rotation for a group.
///
/// The group must pairwise satisfy the commutation predicate of its mode;
/// this is re-verified before any gate is emitted and a violation fails
/// with [`MeasureError::UngroupableTerms`].
pub fn diagonalizing_rotation(group: &MeasurementGroup) -> MeasureResult<RotationUnitary> {
    if let Some((a, b)) = group.find_conflict() {
        return Err(MeasureError::UngroupableTerms {
            left: a.string.to_string(),
            right: b.string.to_string(),
        });
    }

    let mut unitary = RotationUnitary::new();
    let mut rows: Vec<XzRow> = group
        .terms()
        .iter()
        .map(|t| XzRow::from_string(&t.string))
        .collect();

    if !group.is_qubit_wise() {
        sweep_to_diagonal(&mut unitary, &mut rows);
    }
    append_basis_changes(&mut unitary, &mut rows);

    debug_assert!(rows.iter().all(XzRow::is_diagonal));
    debug!(
        n_terms = group.len(),
        n_gates = unitary.len(),
        entangling = unitary.entangling_count(),
        "synthesised diagonalizing rotation"
    );
    Ok(unitary)
}

/// Stage A: reduce every row to Z-only form with entangling rotations.
///
/// Invariant carried between rounds: once a row has been processed (or was
/// already diagonal when visited), later gates keep it diagonal — just
/// before each H(pivot) the processed term is exactly ±X_pivot, and every
/// other row must commute with it, hence carries I or X there.
fn sweep_to_diagonal(unitary: &mut RotationUnitary, rows: &mut [XzRow]) {
    for i in 0..rows.len() {
        let x_support = rows[i].x_support();
        let Some(&pivot) = x_support.first() else {
            // Already Z-only.
            continue;
        };

        // Fold the remaining x bits of this row onto the pivot.
        for &q in &x_support[1..] {
            apply_to_all(unitary, rows, CliffordGate::Cx(pivot, q));
        }

        // Clear the z tail left on the other qubits.
        let z_tail = rows[i].z_support();
        for &q in z_tail.iter().filter(|&&q| q != pivot) {
            apply_to_all(unitary, rows, CliffordGate::Cz(pivot, q));
        }

        // Pivot Y → X, then X → Z.
        if rows[i].z_bit(pivot) {
            apply_to_all(unitary, rows, CliffordGate::Sdg(pivot));
        }
        apply_to_all(unitary, rows, CliffordGate::H(pivot));
    }
}

/// Stage B: single-qubit basis change on each qubit's consensus operator.
///
/// The rows are qubit-wise commuting here, so each qubit carries at most
/// one distinct non-identity operator across the whole group.
fn append_basis_changes(unitary: &mut RotationUnitary, rows: &mut [XzRow]) {
    let mut conflicted: Vec<(u32, PauliOp)> = Vec::new();
    for row in rows.iter() {
        for (q, op) in row.op_entries() {
            if matches!(op, PauliOp::X | PauliOp::Y) && !conflicted.iter().any(|&(c, _)| c == q) {
                conflicted.push((q, op));
            }
        }
    }
    conflicted.sort_by_key(|&(q, _)| q);

    for (q, op) in conflicted {
        match op {
            PauliOp::X => apply_to_all(unitary, rows, CliffordGate::H(q)),
            PauliOp::Y => {
                apply_to_all(unitary, rows, CliffordGate::Sdg(q));
                apply_to_all(unitary, rows, CliffordGate::H(q));
            }
            PauliOp::Z | PauliOp::I => {}
        }
    }
}

fn apply_to_all(unitary: &mut RotationUnitary, rows: &mut [XzRow], gate: CliffordGate) {
    unitary.push(gate);
    for row in rows.iter_mut() {
        row.apply(gate);
    }
}
