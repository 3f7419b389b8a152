//! Serum synthesis from structure representatives.
//!
//! Synthesis runs in three stages:
//!
//! 1. **Representatives** — the weakest molecule of every structure, see
//!    [`MolecularStructure::weakest_molecule`].
//! 2. **Candidates** — one [`Bond`] per unordered pair of representatives,
//!    weighted by the mean strength of its endpoints.
//! 3. **Selection** — candidates are scanned in ascending weight order and a
//!    bond is admitted while at least one endpoint is not yet connected.
//!
//! The selection is a greedy near-minimum connector. It is not a spanning-tree
//! algorithm: a bond whose endpoints are both new is admitted even if it starts
//! a separate cluster, and clusters are never merged afterwards.

use std::collections::HashSet;

use crate::model::bond::Bond;
use crate::model::molecule::Molecule;
use crate::model::structure::MolecularStructure;

/// Result of serum synthesis.
#[derive(Debug, Clone, Default)]
pub struct Synthesis<'a> {
    /// Weakest molecule of each human structure, in structure order.
    pub human_representatives: Vec<&'a Molecule>,
    /// Weakest molecule of each other structure, in structure order.
    pub other_representatives: Vec<&'a Molecule>,
    /// Admitted bonds in admission (ascending weight) order.
    pub serum: Vec<Bond<'a>>,
    /// Candidates discarded because both endpoints were already connected.
    pub rejected: Vec<Bond<'a>>,
}

impl<'a> Synthesis<'a> {
    /// Sum of the weights of all admitted bonds.
    pub fn total_weight(&self) -> f64 {
        self.serum.iter().map(Bond::weight).sum()
    }

    /// All representatives in candidate-generation order: other structures
    /// first, then human structures.
    pub fn representatives(&self) -> impl Iterator<Item = &'a Molecule> + '_ {
        self.other_representatives
            .iter()
            .chain(self.human_representatives.iter())
            .copied()
    }
}

/// Synthesizes the serum connecting human structures with another collection.
///
/// Empty collections, or collections without representatives, produce an
/// empty serum.
pub fn synthesize<'a>(
    human_structures: &[MolecularStructure<'a>],
    other_structures: &[MolecularStructure<'a>],
) -> Synthesis<'a> {
    let human_representatives = select_representatives(human_structures);
    let other_representatives = select_representatives(other_structures);

    let combined: Vec<&'a Molecule> = other_representatives
        .iter()
        .chain(human_representatives.iter())
        .copied()
        .collect();

    let candidates = candidate_bonds(&combined);
    let candidate_count = candidates.len();
    let (serum, rejected) = select_bonds(candidates);

    tracing::debug!(
        representatives = combined.len(),
        candidates = candidate_count,
        admitted = serum.len(),
        rejected = rejected.len(),
        "synthesized serum"
    );

    Synthesis {
        human_representatives,
        other_representatives,
        serum,
        rejected,
    }
}

/// The weakest molecule of each structure, in structure order.
///
/// Empty structures have no representative and are skipped.
pub fn select_representatives<'a>(structures: &[MolecularStructure<'a>]) -> Vec<&'a Molecule> {
    structures
        .iter()
        .filter_map(MolecularStructure::weakest_molecule)
        .collect()
}

/// Every unordered pair of representatives as a weighted bond.
///
/// Pairs are generated by position (`i < j`), so the output has
/// `n * (n - 1) / 2` bonds and no self-pairs.
pub fn candidate_bonds<'a>(representatives: &[&'a Molecule]) -> Vec<Bond<'a>> {
    let n = representatives.len();
    let mut bonds = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for (i, &from) in representatives.iter().enumerate() {
        for &to in &representatives[i + 1..] {
            bonds.push(Bond::between(from, to));
        }
    }
    bonds
}

/// Greedy selection over candidate bonds.
///
/// Candidates are stably sorted by ascending weight, so equal weights keep
/// their generation order. Returns `(admitted, rejected)`.
pub fn select_bonds<'a>(mut candidates: Vec<Bond<'a>>) -> (Vec<Bond<'a>>, Vec<Bond<'a>>) {
    candidates.sort_by(|a, b| a.weight().total_cmp(&b.weight()));

    let mut connected: HashSet<&'a str> = HashSet::new();
    let mut admitted = Vec::new();
    let mut rejected = Vec::new();

    for bond in candidates {
        let (from, to) = bond.endpoints();
        if connected.contains(from.id.as_str()) && connected.contains(to.id.as_str()) {
            tracing::trace!(from = %from.id, to = %to.id, weight = bond.weight(), "rejected bond");
            rejected.push(bond);
            continue;
        }
        tracing::trace!(from = %from.id, to = %to.id, weight = bond.weight(), "admitted bond");
        connected.insert(from.id.as_str());
        connected.insert(to.id.as_str());
        admitted.push(bond);
    }

    (admitted, rejected)
}
