use super::molecule::Molecule;

/// The molecule store for one dataset.
///
/// Owns every [`Molecule`] for the duration of an analysis run and keeps them
/// in their declared order. Structures and bonds produced from the store
/// borrow from it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MolecularData {
    molecules: Vec<Molecule>,
}

impl MolecularData {
    pub fn new(molecules: Vec<Molecule>) -> Self {
        Self { molecules }
    }

    #[inline]
    pub fn molecules(&self) -> &[Molecule] {
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

    /// Total number of stored bond references, counting each direction as declared.
    pub fn bond_count(&self) -> usize {
        self.molecules.iter().map(|m| m.bonds.len()).sum()
    }

    /// Looks up a molecule by id.
    ///
    /// Returns the first molecule with a matching id, or `None` when no
    /// molecule carries it. A dangling bond id is not an error.
    pub fn find(&self, id: &str) -> Option<&Molecule> {
        self.molecules.iter().find(|m| m.id == id)
    }

    /// Stored position of the first molecule with the given id.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.molecules.iter().position(|m| m.id == id)
    }

    pub fn into_molecules(self) -> Vec<Molecule> {
        self.molecules
    }
}

impl FromIterator<Molecule> for MolecularData {
    fn from_iter<T: IntoIterator<Item = Molecule>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<Vec<Molecule>> for MolecularData {
    fn from(molecules: Vec<Molecule>) -> Self {
        Self::new(molecules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_store() -> MolecularData {
        MolecularData::new(vec![
            Molecule::new("A", 1.0).with_bonds(["B", "Z"]),
            Molecule::new("B", 2.0),
            Molecule::new("C", 3.0).with_bonds(["A"]),
        ])
    }

    #[test]
    fn exposes_molecules_in_stored_order() {
        let data = make_store();
        let ids: Vec<_> = data.molecules().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["A", "B", "C"]);
        assert_eq!(data.len(), 3);
        assert!(!data.is_empty());
    }

    #[test]
    fn find_returns_match_or_none() {
        let data = make_store();
        assert_eq!(data.find("B").map(|m| m.strength), Some(2.0));
        assert!(data.find("Z").is_none());
        assert_eq!(data.position("C"), Some(2));
        assert_eq!(data.position("Z"), None);
    }

    #[test]
    fn find_returns_first_of_duplicate_ids() {
        let data = MolecularData::new(vec![
            Molecule::new("A", 1.0),
            Molecule::new("A", 9.0),
        ]);
        assert_eq!(data.find("A").map(|m| m.strength), Some(1.0));
        assert_eq!(data.position("A"), Some(0));
    }

    #[test]
    fn bond_count_sums_declared_references() {
        assert_eq!(make_store().bond_count(), 3);
        assert_eq!(MolecularData::default().bond_count(), 0);
    }

    #[test]
    fn collects_from_iterator() {
        let data: MolecularData = (0..3)
            .map(|i| Molecule::new(format!("M{i}"), i as f64))
            .collect();
        assert_eq!(data.len(), 3);
        assert_eq!(data.molecules()[2].id, "M2");
    }
}
