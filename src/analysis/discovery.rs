//! Connected-component discovery over one-directional bond lists.
//!
//! Bonds are stored on one endpoint but describe an undirected relation, so
//! every visited molecule contributes two kinds of neighbors: the molecules it
//! names in its own bond list (forward), followed by every molecule in the
//! store that names it (reverse), in stored order. Exploration is depth-first
//! and the member order of each structure is that depth-first order.
//!
//! Visited state lives in the traversal, not on the molecules, so discovery
//! only needs a shared borrow of the store.

use std::collections::HashMap;

use super::config::DiscoveryStrategy;
use crate::model::data::MolecularData;
use crate::model::structure::MolecularStructure;

/// Partitions the store into connected molecular structures.
///
/// Every molecule appears in exactly one structure. Structures are ordered by
/// their first member's stored position. Dangling bond ids are skipped.
pub fn identify_structures(
    data: &MolecularData,
    strategy: DiscoveryStrategy,
) -> Vec<MolecularStructure<'_>> {
    let neighborhood = match strategy {
        DiscoveryStrategy::ReverseScan => Neighborhood::Scan(data),
        DiscoveryStrategy::Indexed => Neighborhood::Indexed(AdjacencyIndex::build(data)),
    };

    let molecules = data.molecules();
    let mut visited = vec![false; molecules.len()];
    let mut structures = Vec::new();

    for start in 0..molecules.len() {
        if visited[start] {
            continue;
        }
        let members = explore(start, &neighborhood, &mut visited);
        structures.push(MolecularStructure::from_molecules(
            members.into_iter().map(|idx| &molecules[idx]).collect(),
        ));
    }

    tracing::debug!(
        molecules = molecules.len(),
        structures = structures.len(),
        ?strategy,
        "identified molecular structures"
    );

    structures
}

impl MolecularData {
    /// Partitions the store into connected structures using the default strategy.
    pub fn identify_structures(&self) -> Vec<MolecularStructure<'_>> {
        identify_structures(self, DiscoveryStrategy::default())
    }

    pub fn identify_structures_with(
        &self,
        strategy: DiscoveryStrategy,
    ) -> Vec<MolecularStructure<'_>> {
        identify_structures(self, strategy)
    }
}

struct Frame {
    candidates: Vec<usize>,
    cursor: usize,
}

impl Frame {
    fn new(candidates: Vec<usize>) -> Self {
        Self {
            candidates,
            cursor: 0,
        }
    }
}

/// Depth-first absorption of everything reachable from `start`.
///
/// Uses an explicit frame stack; the visiting order is the same as recursing
/// into each unvisited candidate as soon as it is reached.
fn explore(start: usize, neighborhood: &Neighborhood<'_>, visited: &mut [bool]) -> Vec<usize> {
    visited[start] = true;
    let mut members = vec![start];
    let mut stack = vec![Frame::new(neighborhood.candidates(start))];

    while let Some(frame) = stack.last_mut() {
        let Some(&next) = frame.candidates.get(frame.cursor) else {
            stack.pop();
            continue;
        };
        frame.cursor += 1;

        if visited[next] {
            continue;
        }
        visited[next] = true;
        members.push(next);
        stack.push(Frame::new(neighborhood.candidates(next)));
    }

    members
}

enum Neighborhood<'d> {
    Scan(&'d MolecularData),
    Indexed(AdjacencyIndex),
}

impl Neighborhood<'_> {
    /// Forward neighbors followed by reverse referrers of molecule `idx`.
    ///
    /// May contain duplicates and `idx` itself; the traversal skips anything
    /// already visited.
    fn candidates(&self, idx: usize) -> Vec<usize> {
        match self {
            Neighborhood::Scan(data) => {
                let molecules = data.molecules();
                let current = &molecules[idx];
                let forward = current.bonds.iter().filter_map(|id| data.position(id));
                let reverse = molecules
                    .iter()
                    .enumerate()
                    .filter(|(_, m)| m.bonds_to(&current.id))
                    .map(|(j, _)| j);
                forward.chain(reverse).collect()
            }
            Neighborhood::Indexed(index) => index.forward[idx]
                .iter()
                .chain(index.reverse[idx].iter())
                .copied()
                .collect(),
        }
    }
}

/// Precomputed forward and reverse adjacency for one store.
///
/// Forward ids resolve to the first molecule carrying them, matching
/// [`MolecularData::position`]. Reverse lists hold each referrer once, in
/// stored order.
struct AdjacencyIndex {
    forward: Vec<Vec<usize>>,
    reverse: Vec<Vec<usize>>,
}

impl AdjacencyIndex {
    fn build(data: &MolecularData) -> Self {
        let molecules = data.molecules();

        let mut first_position: HashMap<&str, usize> = HashMap::with_capacity(molecules.len());
        for (idx, m) in molecules.iter().enumerate() {
            first_position.entry(m.id.as_str()).or_insert(idx);
        }

        let mut referrers: HashMap<&str, Vec<usize>> = HashMap::new();
        for (idx, m) in molecules.iter().enumerate() {
            for id in &m.bonds {
                let list = referrers.entry(id.as_str()).or_default();
                if list.last() != Some(&idx) {
                    list.push(idx);
                }
            }
        }

        let forward = molecules
            .iter()
            .map(|m| {
                m.bonds
                    .iter()
                    .filter_map(|id| first_position.get(id.as_str()).copied())
                    .collect()
            })
            .collect();

        let reverse = molecules
            .iter()
            .map(|m| referrers.get(m.id.as_str()).cloned().unwrap_or_default())
            .collect();

        Self { forward, reverse }
    }
}
