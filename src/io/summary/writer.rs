use crate::analysis::Analysis;
use crate::io::error::Error;
use crate::model::bond::Bond;
use crate::model::structure::MolecularStructure;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct AnalysisSummary<'a> {
    anomalies: Vec<Vec<&'a str>>,
    human: DatasetSummary<'a>,
    vitales: DatasetSummary<'a>,
    serum: SerumSummary<'a>,
}

#[derive(Debug, Serialize)]
struct DatasetSummary<'a> {
    structures: Vec<Vec<&'a str>>,
}

#[derive(Debug, Serialize)]
struct SerumSummary<'a> {
    total_weight: f64,
    human_representatives: Vec<&'a str>,
    vitales_representatives: Vec<&'a str>,
    bonds: Vec<BondSummary<'a>>,
}

#[derive(Debug, Serialize)]
struct BondSummary<'a> {
    from: &'a str,
    to: &'a str,
    weight: f64,
}

impl<'a> DatasetSummary<'a> {
    fn new(structures: &[MolecularStructure<'a>]) -> Self {
        Self {
            structures: sorted_members(structures),
        }
    }
}

impl<'a> From<&Bond<'a>> for BondSummary<'a> {
    fn from(bond: &Bond<'a>) -> Self {
        Self {
            from: bond.from().id.as_str(),
            to: bond.to().id.as_str(),
            weight: bond.weight(),
        }
    }
}

pub fn write_analysis<W: Write>(writer: &mut W, analysis: &Analysis<'_>) -> Result<(), Error> {
    let synthesis = &analysis.synthesis;
    let summary = AnalysisSummary {
        anomalies: sorted_members(&analysis.anomalies),
        human: DatasetSummary::new(&analysis.human_structures),
        vitales: DatasetSummary::new(&analysis.vitales_structures),
        serum: SerumSummary {
            total_weight: synthesis.total_weight(),
            human_representatives: synthesis
                .human_representatives
                .iter()
                .map(|m| m.id.as_str())
                .collect(),
            vitales_representatives: synthesis
                .other_representatives
                .iter()
                .map(|m| m.id.as_str())
                .collect(),
            bonds: synthesis.serum.iter().map(BondSummary::from).collect(),
        },
    };
    write_toml(writer, &summary)
}

pub fn write_structures<W: Write>(
    writer: &mut W,
    structures: &[MolecularStructure<'_>],
) -> Result<(), Error> {
    write_toml(writer, &DatasetSummary::new(structures))
}

fn write_toml<W: Write, T: Serialize>(writer: &mut W, value: &T) -> Result<(), Error> {
    let text = toml::to_string(value)?;
    writer.write_all(text.as_bytes())?;
    Ok(())
}

fn sorted_members<'a>(structures: &[MolecularStructure<'a>]) -> Vec<Vec<&'a str>> {
    structures.iter().map(MolecularStructure::sorted_ids).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{AnalysisConfig, analyze};
    use crate::model::data::MolecularData;
    use crate::model::molecule::Molecule;

    fn render() -> toml::Table {
        let human = MolecularData::new(vec![
            Molecule::new("H1", 4.0).with_bonds(["H2"]),
            Molecule::new("H2", 6.0),
            Molecule::new("H3", 2.5),
        ]);
        let vitales = MolecularData::new(vec![
            Molecule::new("H1", 4.0),
            Molecule::new("H2", 6.0).with_bonds(["H1"]),
            Molecule::new("V1", 1.5).with_bonds(["V2"]),
            Molecule::new("V2", 3.0),
        ]);
        let analysis = analyze(&human, &vitales, &AnalysisConfig::default());
        let mut out = Vec::new();
        write_analysis(&mut out, &analysis).unwrap();
        String::from_utf8(out).unwrap().parse().unwrap()
    }

    fn strings(value: &toml::Value) -> Vec<&str> {
        value
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect()
    }

    #[test]
    fn summary_lists_structures_and_anomalies() {
        let table = render();
        let anomalies = table["anomalies"].as_array().unwrap();
        assert_eq!(anomalies.len(), 1);
        assert_eq!(strings(&anomalies[0]), vec!["V1", "V2"]);

        let human = table["human"]["structures"].as_array().unwrap();
        assert_eq!(human.len(), 2);
        assert_eq!(strings(&human[0]), vec!["H1", "H2"]);
        assert_eq!(table["vitales"]["structures"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn summary_records_serum() {
        let table = render();
        let serum = &table["serum"];
        assert_eq!(serum["total_weight"].as_float(), Some(4.75));
        assert_eq!(strings(&serum["human_representatives"]), vec!["H1", "H3"]);
        assert_eq!(strings(&serum["vitales_representatives"]), vec!["V1"]);

        let bonds = serum["bonds"].as_array().unwrap();
        assert_eq!(bonds.len(), 2);
        assert_eq!(bonds[0]["from"].as_str(), Some("V1"));
        assert_eq!(bonds[0]["to"].as_str(), Some("H3"));
        assert_eq!(bonds[0]["weight"].as_float(), Some(2.0));
    }

    #[test]
    fn structures_only_summary() {
        let data = MolecularData::new(vec![Molecule::new("B", 1.0).with_bonds(["A"]), Molecule::new("A", 2.0)]);
        let structures = data.identify_structures();
        let mut out = Vec::new();
        write_structures(&mut out, &structures).unwrap();
        let table: toml::Table = String::from_utf8(out).unwrap().parse().unwrap();
        let structures = table["structures"].as_array().unwrap();
        assert_eq!(strings(&structures[0]), vec!["A", "B"]);
    }
}
