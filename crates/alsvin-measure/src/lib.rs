//! `alsvin-measure` — measurement grouping and basis-rotation synthesis.
//!
//! Hardware readout measures every qubit in the computational (Z) basis.
//! Estimating ⟨H⟩ for a sum-of-Paulis Hamiltonian therefore costs one
//! circuit execution per *measurement basis*, not per term — provided the
//! terms sharing a basis commute. This crate supplies the two pieces of
//! that pipeline:
//!
//! - **[`MeasurementGrouper`]** — partitions a Hamiltonian into
//!   pairwise-commuting [`MeasurementGroup`]s (qubit-wise or fully
//!   commuting, per [`CommutationMode`](alsvin_pauli::CommutationMode))
//! - **[`diagonalizing_rotation`]** — synthesizes, for each group, the
//!   Clifford [`RotationUnitary`] that maps every member onto a Z-only
//!   string, ready to append to an ansatz circuit before readout
//!
//! # Quick start
//!
//! ```rust
//! use alsvin_measure::{MeasurementGrouper, diagonalizing_rotation};
//! use alsvin_pauli::{CommutationMode, Hamiltonian, PauliOp, PauliString, PauliTerm};
//!
//! let h = Hamiltonian::from_terms(vec![
//!     PauliTerm::z(0, 0.5),
//!     PauliTerm::new(0.3, PauliString::new([(0, PauliOp::X), (1, PauliOp::X)]).unwrap()),
//!     PauliTerm::zz(0, 1, -0.2),
//! ]);
//!
//! let groups = MeasurementGrouper::new(CommutationMode::QubitWise).group(&h);
//! for group in &groups {
//!     let unitary = diagonalizing_rotation(group).unwrap();
//!     for term in group.terms() {
//!         let rotated = unitary.conjugate_term(term);
//!         assert!(rotated.string.ops().iter().all(|(_, op)| *op == PauliOp::Z));
//!     }
//! }
//! ```

pub mod error;
pub mod gate;
pub mod grouping;
pub mod rotation;

pub use error::{MeasureError, MeasureResult};
pub use gate::{CliffordGate, RotationUnitary};
pub use grouping::{MeasurementGroup, MeasurementGrouper};
pub use rotation::diagonalizing_rotation;
