//! `alsvin-pauli` — sparse Pauli-operator algebra for measurement grouping.
//!
//! Models a molecular qubit Hamiltonian as a sum of weighted Pauli strings
//! and provides the exact algebra the grouping and rotation-synthesis layers
//! are built on:
//!
//! - **[`PauliString`]** — sparse tensor product of {X, Y, Z} over qubit
//!   indices, identity implicit by absence
//! - **[`PauliTerm`] / [`Hamiltonian`]** — real-weighted terms, merged by
//!   operator shape at construction
//! - **Multiplication** with exact i-power [`Phase`] accumulation
//! - **[`CommutationMode`]** — the qubit-wise and full commutation
//!   predicates used to decide measurement compatibility
//!
//! # Quick start
//!
//! ```rust
//! use alsvin_pauli::{CommutationMode, Hamiltonian, PauliOp, PauliString, PauliTerm};
//!
//! // H = 0.5·Z₀ + 0.3·X₀X₁ + 0.3·Y₀Y₁
//! let h = Hamiltonian::from_terms(vec![
//!     PauliTerm::z(0, 0.5),
//!     PauliTerm::new(0.3, PauliString::new([(0, PauliOp::X), (1, PauliOp::X)]).unwrap()),
//!     PauliTerm::new(0.3, PauliString::new([(0, PauliOp::Y), (1, PauliOp::Y)]).unwrap()),
//! ]);
//!
//! // X₀X₁ and Y₀Y₁ commute as whole operators but conflict on both qubits.
//! let xx = &h.terms()[1].string;
//! let yy = &h.terms()[2].string;
//! assert!(CommutationMode::Full.holds(xx, yy));
//! assert!(!CommutationMode::QubitWise.holds(xx, yy));
//! ```

pub mod commute;
pub mod error;
pub mod hamiltonian;
pub mod pauli;
pub mod term;

pub use commute::CommutationMode;
pub use error::{PauliError, PauliResult};
pub use hamiltonian::Hamiltonian;
pub use pauli::{PauliOp, PauliProduct, PauliString, Phase};
pub use term::PauliTerm;
