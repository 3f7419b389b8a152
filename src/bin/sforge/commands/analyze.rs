use anyhow::{Context, Result};

use serum_forge::io::{AnalysisWriter, ReportConfig};
use serum_forge::{Analysis, AnalysisConfig, analyze};

use super::{read_dataset, resolve_input_format, resolve_outputs, write_substeps};
use crate::cli::AnalyzeArgs;
use crate::config::{ConfigFile, build_analysis_config, build_report_config};
use crate::display::{
    Context as DisplayContext, Progress, print_analysis_summary, print_dataset_info,
};
use crate::io::{OutputSpec, create_output};
use crate::util::convert::discovery_display_name;

const TOTAL_STEPS: u8 = 3;

pub fn run_analyze(args: AnalyzeArgs, ctx: DisplayContext) -> Result<()> {
    let human_format = resolve_input_format(args.input_format, Some(&args.human))?;
    let vitales_format = resolve_input_format(args.input_format, Some(&args.vitales))?;
    let output_specs = resolve_outputs(&args.common.output, args.output_format)?;

    let file = ConfigFile::load(args.report.config.as_deref())?;
    let analysis_config = build_analysis_config(file.analysis, &args.discovery);
    let report_config = build_report_config(file.report, &args.report);

    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Reading datasets");
    let human = read_dataset(Some(&args.human), human_format)?;
    let vitales = read_dataset(Some(&args.vitales), vitales_format)?;
    progress.complete_step(
        "Reading datasets",
        &[
            format!("{}: {} molecules ({})", report_config.human_label, human.len(), human_format),
            format!(
                "{}: {} molecules ({})",
                report_config.vitales_label,
                vitales.len(),
                vitales_format
            ),
        ],
    );

    progress.step("Analyzing datasets");
    let analysis = analyze(&human, &vitales, &analysis_config);
    progress.complete_step(
        "Analyzing datasets",
        &build_analysis_substeps(&analysis, &analysis_config),
    );

    if ctx.interactive {
        print_dataset_info(&report_config.human_label, &human, &analysis.human_structures);
        print_dataset_info(
            &report_config.vitales_label,
            &vitales,
            &analysis.vitales_structures,
        );
        print_analysis_summary(
            &analysis,
            &report_config.vitales_label,
            report_config.precision,
        );
    }

    progress.step("Writing output");
    write_outputs(&analysis, &output_specs, &report_config)?;
    progress.complete_step("Writing output", &write_substeps(&output_specs));

    progress.finish("Serum synthesized");

    Ok(())
}

fn build_analysis_substeps(analysis: &Analysis<'_>, config: &AnalysisConfig) -> Vec<String> {
    vec![
        format!(
            "Discover structures ({}): {} + {}",
            discovery_display_name(config.discovery),
            analysis.human_structures.len(),
            analysis.vitales_structures.len()
        ),
        format!("Detect anomalies: {} unique", analysis.anomalies.len()),
        format!(
            "Synthesize serum: {} bonds, {} rejected",
            analysis.synthesis.serum.len(),
            analysis.synthesis.rejected.len()
        ),
    ]
}

fn write_outputs(
    analysis: &Analysis<'_>,
    specs: &[OutputSpec],
    report_config: &ReportConfig,
) -> Result<()> {
    for spec in specs {
        let writer = create_output(spec.path.as_deref())?;
        AnalysisWriter::new(writer, spec.format)
            .with_report_config(report_config.clone())
            .write(analysis)
            .with_context(|| format!("Failed to write {} output", spec.format))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serum_forge::{DiscoveryStrategy, Molecule, MolecularData};

    #[test]
    fn substeps_summarize_each_stage() {
        let human = MolecularData::new(vec![
            Molecule::new("H1", 4.0).with_bonds(["H2"]),
            Molecule::new("H2", 6.0),
        ]);
        let vitales = MolecularData::new(vec![Molecule::new("V1", 1.0)]);
        let config = AnalysisConfig {
            discovery: DiscoveryStrategy::Indexed,
        };
        let analysis = analyze(&human, &vitales, &config);

        let steps = build_analysis_substeps(&analysis, &config);
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0], "Discover structures (adjacency index): 1 + 1");
        assert_eq!(steps[1], "Detect anomalies: 1 unique");
        assert_eq!(steps[2], "Synthesize serum: 1 bonds, 0 rejected");
    }
}
