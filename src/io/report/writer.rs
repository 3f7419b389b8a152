use crate::analysis::{Analysis, Synthesis};
use crate::io::{ReportConfig, error::Error};
use crate::model::molecule::Molecule;
use crate::model::structure::MolecularStructure;
use std::io::Write;

pub fn write_analysis<W: Write>(
    writer: &mut W,
    analysis: &Analysis<'_>,
    config: &ReportConfig,
) -> Result<(), Error> {
    write_structures(writer, &analysis.human_structures, &config.human_label)?;
    writeln!(writer)?;
    write_structures(writer, &analysis.vitales_structures, &config.vitales_label)?;
    writeln!(writer)?;
    write_anomalies(writer, &analysis.anomalies, &config.vitales_label)?;
    writeln!(writer)?;
    write_synthesis(writer, &analysis.synthesis, config.precision)
}

pub fn write_structures<W: Write>(
    writer: &mut W,
    structures: &[MolecularStructure<'_>],
    label: &str,
) -> Result<(), Error> {
    writeln!(
        writer,
        "{} molecular structures have been discovered in {}.",
        structures.len(),
        label
    )?;
    for (i, structure) in structures.iter().enumerate() {
        writeln!(
            writer,
            "Molecules in Molecular Structure {}: {}",
            i + 1,
            id_list(structure.sorted_ids())
        )?;
    }
    Ok(())
}

fn write_anomalies<W: Write>(
    writer: &mut W,
    anomalies: &[MolecularStructure<'_>],
    label: &str,
) -> Result<(), Error> {
    writeln!(writer, "Molecular structures unique to {}:", label)?;
    for structure in anomalies {
        writeln!(writer, "{}", id_list(structure.sorted_ids()))?;
    }
    Ok(())
}

fn write_synthesis<W: Write>(
    writer: &mut W,
    synthesis: &Synthesis<'_>,
    precision: usize,
) -> Result<(), Error> {
    writeln!(writer, "### MISSION SYNTHESIS START ###")?;
    writeln!(
        writer,
        "Typical human molecules selected for synthesis: {}",
        representative_list(&synthesis.human_representatives)
    )?;
    writeln!(
        writer,
        "Vitales molecules selected for synthesis: {}",
        representative_list(&synthesis.other_representatives)
    )?;
    writeln!(writer, "Synthesizing the serum...")?;
    for bond in &synthesis.serum {
        writeln!(
            writer,
            "Forming a bond between {} - {} with strength {:.prec$}",
            bond.from().id,
            bond.to().id,
            bond.weight(),
            prec = precision
        )?;
    }
    writeln!(
        writer,
        "The total serum bond strength is {:.prec$}",
        synthesis.total_weight(),
        prec = precision
    )?;
    writeln!(writer, "### MISSION SYNTHESIS END ###")?;
    Ok(())
}

fn id_list<'a>(ids: impl IntoIterator<Item = &'a str>) -> String {
    format!("[{}]", ids.into_iter().collect::<Vec<_>>().join(", "))
}

fn representative_list(molecules: &[&Molecule]) -> String {
    id_list(molecules.iter().map(|m| m.id.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{AnalysisConfig, analyze};
    use crate::model::data::MolecularData;

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
            Molecule::new("V2", 3.0),
            Molecule::new("V1", 1.5).with_bonds(["V2"]),
        ])
    }

    fn render(config: &ReportConfig) -> String {
        let human = make_human();
        let vitales = make_vitales();
        let analysis = analyze(&human, &vitales, &AnalysisConfig::default());
        let mut out = Vec::new();
        write_analysis(&mut out, &analysis, config).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn renders_complete_report() {
        let report = render(&ReportConfig::default());
        let expected = "\
2 molecular structures have been discovered in typical humans.
Molecules in Molecular Structure 1: [H1, H2]
Molecules in Molecular Structure 2: [H3]

2 molecular structures have been discovered in Vitales individuals.
Molecules in Molecular Structure 1: [H1, H2]
Molecules in Molecular Structure 2: [V1, V2]

Molecular structures unique to Vitales individuals:
[V1, V2]

### MISSION SYNTHESIS START ###
Typical human molecules selected for synthesis: [H1, H3]
Vitales molecules selected for synthesis: [V1]
Synthesizing the serum...
Forming a bond between V1 - H3 with strength 2.00
Forming a bond between V1 - H1 with strength 2.75
The total serum bond strength is 4.75
### MISSION SYNTHESIS END ###
";
        assert_eq!(report, expected);
    }

    #[test]
    fn honors_labels_and_precision() {
        let config = ReportConfig {
            human_label: "earthlings".to_string(),
            vitales_label: "visitors".to_string(),
            precision: 3,
        };
        let report = render(&config);
        assert!(report.contains("discovered in earthlings."));
        assert!(report.contains("Molecular structures unique to visitors:"));
        assert!(report.contains("with strength 2.000"));
        assert!(report.contains("The total serum bond strength is 4.750"));
    }

    #[test]
    fn empty_structures_section_has_only_heading() {
        let mut out = Vec::new();
        write_structures(&mut out, &[], "nobody").unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "0 molecular structures have been discovered in nobody.\n"
        );
    }
}
