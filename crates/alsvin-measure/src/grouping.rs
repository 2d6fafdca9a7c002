//! Measurement-group partitioning.
//!
//! Partitions a Hamiltonian's Pauli terms into groups whose members
//! pairwise commute under a chosen [`CommutationMode`], so every term in a
//! group can be estimated from the same measurement basis.
//!
//! The partition is a greedy first-fit scan: terms are processed in
//! descending |coefficient| order (ties keep Hamiltonian order) and placed
//! into the first group that accepts them. Minimizing the number of groups
//! is equivalent to minimum clique cover on the commutation graph, which is
//! NP-hard — the greedy result is a heuristic, not an optimum.

use alsvin_pauli::{CommutationMode, Hamiltonian, PauliTerm};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// A set of Pauli terms that share a measurement basis.
///
/// Produced by [`MeasurementGrouper::group`], which guarantees all members
/// pairwise satisfy the predicate of [`mode`](Self::mode). Immutable once
/// built. [`from_terms`](Self::from_terms) does not re-check the predicate;
/// the rotation synthesizer verifies it before doing any work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementGroup {
    mode: CommutationMode,
    terms: Vec<PauliTerm>,
}

impl MeasurementGroup {
    /// Assemble a group from terms, without checking the predicate.
    pub fn from_terms(mode: CommutationMode, terms: Vec<PauliTerm>) -> Self {
        Self { mode, terms }
    }

    /// The commutation relation this group was built under.
    pub fn mode(&self) -> CommutationMode {
        self.mode
    }

    /// The member terms, in insertion order.
    pub fn terms(&self) -> &[PauliTerm] {
        &self.terms
    }

    /// Number of member terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// True when the group has no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// True when every pair of members satisfies the group's predicate.
    pub fn is_pairwise_commuting(&self) -> bool {
        self.find_conflict().is_none()
    }

    /// True when the members already commute qubit-wise, regardless of the
    /// mode the group was built under.
    pub fn is_qubit_wise(&self) -> bool {
        self.terms.iter().enumerate().all(|(i, a)| {
            self.terms[i + 1..]
                .iter()
                .all(|b| a.string.qubit_wise_commutes(&b.string))
        })
    }

    /// First pair of members violating the predicate, if any.
    pub(crate) fn find_conflict(&self) -> Option<(&PauliTerm, &PauliTerm)> {
        for (i, a) in self.terms.iter().enumerate() {
            for b in &self.terms[i + 1..] {
                if !self.mode.holds(&a.string, &b.string) {
                    return Some((a, b));
                }
            }
        }
        None
    }
}

/// Greedy first-fit measurement grouper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeasurementGrouper {
    mode: CommutationMode,
}

impl MeasurementGrouper {
    /// Create a grouper for the given commutation relation.
    pub fn new(mode: CommutationMode) -> Self {
        Self { mode }
    }

    /// Partition the Hamiltonian into pairwise-commuting groups.
    ///
    /// Deterministic: terms are visited in descending |coefficient| order,
    /// ties broken by Hamiltonian order, and candidate groups are scanned
    /// in creation order. Every input term lands in exactly one group; an
    /// empty Hamiltonian yields an empty group list.
    pub fn group(&self, hamiltonian: &Hamiltonian) -> Vec<MeasurementGroup> {
        if hamiltonian.is_empty() {
            warn!("Hamiltonian has no terms — returning zero measurement groups");
            return vec![];
        }

        let mut ordered: Vec<&PauliTerm> = hamiltonian.terms().iter().collect();
        ordered.sort_by(|a, b| b.coeff.abs().total_cmp(&a.coeff.abs()));

        let mut groups: Vec<Vec<PauliTerm>> = Vec::new();
        for term in ordered {
            let slot = groups
                .iter_mut()
                .find(|g| g.iter().all(|m| self.mode.holds(&m.string, &term.string)));
            match slot {
                Some(group) => group.push(term.clone()),
                None => groups.push(vec![term.clone()]),
            }
        }

        debug!(
            n_terms = hamiltonian.n_terms(),
            n_groups = groups.len(),
            mode = ?self.mode,
            "partitioned Hamiltonian into measurement groups"
        );

        groups
            .into_iter()
            .map(|terms| MeasurementGroup {
                mode: self.mode,
                terms,
            })
            .collect()
    }
}
