use anyhow::{Context, Result, bail};

use serum_forge::io::AnalysisWriter;
use serum_forge::{AnalysisConfig, identify_structures};

use super::{read_dataset, resolve_input_format, resolve_outputs, write_substeps};
use crate::cli::StructuresArgs;
use crate::config::build_analysis_config;
use crate::display::{
    Context as DisplayContext, Progress, print_dataset_info, print_structure_listing,
};
use crate::io::{create_output, stdin_is_tty};
use crate::util::convert::discovery_display_name;

const TOTAL_STEPS: u8 = 3;

pub fn run_structures(args: StructuresArgs, ctx: DisplayContext) -> Result<()> {
    if args.input.is_none() && stdin_is_tty() {
        bail!(
            "No input file specified and stdin is a terminal.\n\nUsage: sforge structures -i <INPUT> or pipe data via stdin."
        );
    }

    let input_format = resolve_input_format(args.input_format, args.input.as_ref())?;
    let output_specs = resolve_outputs(&args.common.output, args.output_format)?;
    let config = build_analysis_config(AnalysisConfig::default(), &args.discovery);

    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Reading dataset");
    let data = read_dataset(args.input.as_ref(), input_format)?;
    progress.complete_step(
        "Reading dataset",
        &[format!(
            "Parse {} input: {} molecules, {} stored bonds",
            input_format,
            data.len(),
            data.bond_count()
        )],
    );

    progress.step("Discovering structures");
    let structures = identify_structures(&data, config.discovery);
    progress.complete_step(
        "Discovering structures",
        &[format!(
            "{} structures via {}",
            structures.len(),
            discovery_display_name(config.discovery)
        )],
    );

    if ctx.interactive {
        print_dataset_info(&args.label, &data, &structures);
        print_structure_listing(&structures);
    }

    progress.step("Writing output");
    for spec in &output_specs {
        let writer = create_output(spec.path.as_deref())?;
        AnalysisWriter::new(writer, spec.format)
            .write_structures(&structures, &args.label)
            .with_context(|| format!("Failed to write {} output", spec.format))?;
    }
    progress.complete_step("Writing output", &write_substeps(&output_specs));

    progress.finish("Structures discovered");

    Ok(())
}
