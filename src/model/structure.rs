use std::collections::BTreeSet;

use super::molecule::Molecule;

/// A connected component of molecules under the undirected bond relation.
///
/// Members are borrowed from the [`MolecularData`](crate::MolecularData) store
/// that produced them and are kept in discovery order. That order is not
/// meaningful for comparison: two structures are equal when they contain the
/// same set of molecule ids, even if they were discovered from different
/// stores or in a different order.
#[derive(Debug, Clone)]
pub struct MolecularStructure<'a> {
    molecules: Vec<&'a Molecule>,
}

impl<'a> MolecularStructure<'a> {
    pub fn from_molecules(molecules: Vec<&'a Molecule>) -> Self {
        Self { molecules }
    }

    /// Members in discovery order.
    #[inline]
    pub fn molecules(&self) -> &[&'a Molecule] {
        &self.molecules
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.molecules.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.molecules.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.molecules.iter().any(|m| m.id == id)
    }

    pub fn ids(&self) -> BTreeSet<&'a str> {
        self.molecules.iter().map(|m| m.id.as_str()).collect()
    }

    /// Member ids sorted lexicographically, for stable display.
    pub fn sorted_ids(&self) -> Vec<&'a str> {
        let mut ids: Vec<_> = self.molecules.iter().map(|m| m.id.as_str()).collect();
        ids.sort_unstable();
        ids
    }

    /// The member with the lowest strength.
    ///
    /// Ties resolve to the first such member in discovery order. Returns
    /// `None` for an empty structure.
    pub fn weakest_molecule(&self) -> Option<&'a Molecule> {
        self.molecules.iter().copied().reduce(|weakest, m| {
            if m.strength.total_cmp(&weakest.strength).is_lt() {
                m
            } else {
                weakest
            }
        })
    }
}

impl<'b> PartialEq<MolecularStructure<'b>> for MolecularStructure<'_> {
    fn eq(&self, other: &MolecularStructure<'b>) -> bool {
        self.ids() == other.ids()
    }
}

impl Eq for MolecularStructure<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weakest_molecule_picks_first_of_ties() {
        let molecules = [
            Molecule::new("X", 3.0),
            Molecule::new("Y", 1.0),
            Molecule::new("Z", 1.0),
        ];
        let structure = MolecularStructure::from_molecules(molecules.iter().collect());
        let weakest = structure.weakest_molecule().unwrap();
        assert_eq!(weakest.id, "Y");
        assert!(std::ptr::eq(weakest, &molecules[1]));
    }

    #[test]
    fn weakest_molecule_of_empty_structure_is_none() {
        let structure = MolecularStructure::from_molecules(Vec::new());
        assert!(structure.weakest_molecule().is_none());
        assert!(structure.is_empty());
    }

    #[test]
    fn equality_ignores_order() {
        let molecules = [Molecule::new("A", 1.0), Molecule::new("B", 2.0)];
        let forward = MolecularStructure::from_molecules(vec![&molecules[0], &molecules[1]]);
        let reverse = MolecularStructure::from_molecules(vec![&molecules[1], &molecules[0]]);
        assert_eq!(forward, reverse);
    }

    #[test]
    fn equality_uses_ids_not_identity() {
        let first = [Molecule::new("A", 1.0), Molecule::new("B", 2.0)];
        let second = [Molecule::new("B", 7.0), Molecule::new("A", 8.0)];
        let left = MolecularStructure::from_molecules(first.iter().collect());
        let right = MolecularStructure::from_molecules(second.iter().collect());
        assert_eq!(left, right);
    }

    #[test]
    fn structures_with_different_members_differ() {
        let molecules = [
            Molecule::new("A", 1.0),
            Molecule::new("B", 2.0),
            Molecule::new("C", 3.0),
        ];
        let ab = MolecularStructure::from_molecules(vec![&molecules[0], &molecules[1]]);
        let abc = MolecularStructure::from_molecules(molecules.iter().collect());
        assert_ne!(ab, abc);
    }

    #[test]
    fn sorted_ids_and_contains() {
        let molecules = [
            Molecule::new("m3", 1.0),
            Molecule::new("m1", 2.0),
            Molecule::new("m2", 3.0),
        ];
        let structure = MolecularStructure::from_molecules(molecules.iter().collect());
        assert_eq!(structure.sorted_ids(), vec!["m1", "m2", "m3"]);
        assert!(structure.contains("m2"));
        assert!(!structure.contains("m4"));
        assert_eq!(structure.len(), 3);
    }
}
