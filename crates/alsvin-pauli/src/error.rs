//! Error types for the Pauli crate.

use thiserror::Error;

/// Errors produced by Pauli-term construction.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PauliError {
    /// A qubit index was listed more than once in a term's operator list.
    #[error("qubit {qubit} is listed more than once in the Pauli string")]
    DuplicateQubit {
        /// The repeated qubit index.
        qubit: u32,
    },
}

/// Result type for Pauli-model operations.
pub type PauliResult<T> = Result<T, PauliError>;
