//! Error types for the measure crate.

use alsvin_pauli::PauliError;
use thiserror::Error;

/// Errors produced by measurement grouping and rotation synthesis.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MeasureError {
    /// A supplied group contains a pair of terms that violates its
    /// commutation predicate. Caller contract violation, checked before
    /// any synthesis work starts.
    #[error("terms [{left}] and [{right}] do not commute under the group's mode")]
    UngroupableTerms {
        /// Display form of the first offending term.
        left: String,
        /// Display form of the second offending term.
        right: String,
    },

    /// Pauli-model error.
    #[error("Pauli algebra error: {0}")]
    Pauli(#[from] PauliError),
}

/// Result type for measurement operations.
pub type MeasureResult<T> = Result<T, MeasureError>;
