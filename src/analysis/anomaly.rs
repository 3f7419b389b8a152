use crate::model::structure::MolecularStructure;

/// Returns the `target` structures that have no equal counterpart in `source`.
///
/// Equality is set equality over member ids (see [`MolecularStructure`]), so a
/// structure rediscovered from a different dataset still matches. The result
/// keeps the order of `target`.
pub fn anomalies<'a>(
    source: &[MolecularStructure<'_>],
    target: &[MolecularStructure<'a>],
) -> Vec<MolecularStructure<'a>> {
    let unique: Vec<_> = target
        .iter()
        .filter(|t| !source.iter().any(|s| s == *t))
        .cloned()
        .collect();

    tracing::debug!(
        source = source.len(),
        target = target.len(),
        anomalies = unique.len(),
        "compared molecular structures"
    );

    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::data::MolecularData;
    use crate::model::molecule::Molecule;

    fn make_human() -> MolecularData {
        MolecularData::new(vec![
            Molecule::new("A", 1.0).with_bonds(["B"]),
            Molecule::new("B", 2.0),
            Molecule::new("C", 3.0),
        ])
    }

    fn make_vitales() -> MolecularData {
        MolecularData::new(vec![
            Molecule::new("B", 5.0).with_bonds(["A"]),
            Molecule::new("A", 4.0),
            Molecule::new("C", 3.0).with_bonds(["D"]),
            Molecule::new("D", 1.0),
        ])
    }

    #[test]
    fn self_comparison_has_no_anomalies() {
        let human = make_human();
        let structures = human.identify_structures();
        assert!(anomalies(&structures, &structures).is_empty());
    }

    #[test]
    fn finds_structures_unique_to_target() {
        let human = make_human();
        let vitales = make_vitales();
        let human_structures = human.identify_structures();
        let vitales_structures = vitales.identify_structures();

        let unique = anomalies(&human_structures, &vitales_structures);
        assert_eq!(unique.len(), 1);
        assert_eq!(unique[0].sorted_ids(), vec!["C", "D"]);
    }

    #[test]
    fn is_not_symmetric() {
        let human = make_human();
        let vitales = make_vitales();
        let human_structures = human.identify_structures();
        let vitales_structures = vitales.identify_structures();

        let forward = anomalies(&human_structures, &vitales_structures);
        let backward = anomalies(&vitales_structures, &human_structures);
        assert_eq!(forward.len(), 1);
        assert_eq!(backward.len(), 1);
        assert_eq!(backward[0].sorted_ids(), vec!["C"]);
        assert_ne!(forward[0], backward[0]);
    }

    #[test]
    fn empty_inputs_yield_empty_output() {
        let human = make_human();
        let structures = human.identify_structures();
        assert!(anomalies(&structures, &[]).is_empty());
        assert_eq!(anomalies(&[], &structures).len(), structures.len());
    }

    #[test]
    fn keeps_target_order_and_borrows_from_target() {
        let vitales = make_vitales();
        let vitales_structures = vitales.identify_structures();

        let everything = anomalies(&[], &vitales_structures);
        assert_eq!(everything.len(), vitales_structures.len());
        for (a, b) in everything.iter().zip(&vitales_structures) {
            assert!(std::ptr::eq(a.molecules()[0], b.molecules()[0]));
        }
    }
}
