mod anomaly;
mod config;
mod discovery;
mod synthesis;

pub use anomaly::anomalies;
pub use config::{AnalysisConfig, DiscoveryStrategy};
pub use discovery::identify_structures;
pub use synthesis::{Synthesis, candidate_bonds, select_bonds, select_representatives, synthesize};

use crate::model::data::MolecularData;
use crate::model::structure::MolecularStructure;

/// Everything computed for one pair of datasets.
#[derive(Debug, Clone)]
pub struct Analysis<'a> {
    /// Structures discovered in the human dataset.
    pub human_structures: Vec<MolecularStructure<'a>>,
    /// Structures discovered in the Vitales dataset.
    pub vitales_structures: Vec<MolecularStructure<'a>>,
    /// Vitales structures with no set-equal human counterpart.
    pub anomalies: Vec<MolecularStructure<'a>>,
    /// Serum connecting human structures with the anomalies.
    pub synthesis: Synthesis<'a>,
}

pub fn analyze<'a>(
    human: &'a MolecularData,
    vitales: &'a MolecularData,
    config: &AnalysisConfig,
) -> Analysis<'a> {
    let human_structures = identify_structures(human, config.discovery);
    let vitales_structures = identify_structures(vitales, config.discovery);

    let anomalies = anomalies(&human_structures, &vitales_structures);

    let synthesis = synthesize(&human_structures, &anomalies);

    Analysis {
        human_structures,
        vitales_structures,
        anomalies,
        synthesis,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::molecule::Molecule;

    fn make_human() -> MolecularData {
        MolecularData::new(vec![
            Molecule::new("H1", 4.0).with_bonds(["H2"]),
            Molecule::new("H2", 6.0),
            Molecule::new("H3", 2.5),
        ])
    }

    fn make_vitales() -> MolecularData {
        MolecularData::new(vec![
            Molecule::new("H2", 6.0).with_bonds(["H1"]),
            Molecule::new("H1", 4.0),
            Molecule::new("V1", 1.5).with_bonds(["V2"]),
            Molecule::new("V2", 3.0),
        ])
    }

    #[test]
    fn runs_full_pipeline() {
        let human = make_human();
        let vitales = make_vitales();

        let analysis = analyze(&human, &vitales, &AnalysisConfig::default());

        assert_eq!(analysis.human_structures.len(), 2);
        assert_eq!(analysis.vitales_structures.len(), 2);
        assert_eq!(analysis.anomalies.len(), 1);
        assert_eq!(analysis.anomalies[0].sorted_ids(), vec!["V1", "V2"]);

        let synthesis = &analysis.synthesis;
        let reps: Vec<_> = synthesis.representatives().map(|m| m.id.as_str()).collect();
        assert_eq!(reps, vec!["V1", "H1", "H3"]);
        assert_eq!(synthesis.serum.len(), 2);
        assert_eq!(synthesis.rejected.len(), 1);
        assert_eq!(synthesis.total_weight(), 4.75);
    }

    #[test]
    fn strategies_agree_on_pipeline_output() {
        let human = make_human();
        let vitales = make_vitales();

        let scanned = analyze(&human, &vitales, &AnalysisConfig::default());
        let indexed = analyze(
            &human,
            &vitales,
            &AnalysisConfig {
                discovery: DiscoveryStrategy::Indexed,
            },
        );

        assert_eq!(scanned.anomalies, indexed.anomalies);
        assert_eq!(
            scanned.synthesis.total_weight(),
            indexed.synthesis.total_weight()
        );
    }

    #[test]
    fn identical_datasets_have_no_anomalies_or_cross_bonds() {
        let human = make_human();
        let copy = make_human();

        let analysis = analyze(&human, &copy, &AnalysisConfig::default());

        assert!(analysis.anomalies.is_empty());
        assert!(analysis.synthesis.other_representatives.is_empty());
        assert_eq!(analysis.synthesis.human_representatives.len(), 2);
        assert_eq!(analysis.synthesis.serum.len(), 1);
    }

    #[test]
    fn empty_datasets_yield_empty_analysis() {
        let empty = MolecularData::default();
        let analysis = analyze(&empty, &empty, &AnalysisConfig::default());
        assert!(analysis.human_structures.is_empty());
        assert!(analysis.vitales_structures.is_empty());
        assert!(analysis.anomalies.is_empty());
        assert!(analysis.synthesis.serum.is_empty());
    }
}
