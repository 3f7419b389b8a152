mod analyze;
mod structures;

use analyze::run_analyze;
use structures::run_structures;

use std::path::PathBuf;

use anyhow::{Result, anyhow, bail};

use serum_forge::MolecularData;
use serum_forge::io::{Format, MoleculeReader};

use crate::cli::{Command, InputFormat, OutputFormat};
use crate::display::Context;
use crate::io::{OutputSpec, infer_input_format, infer_output_format, open_input};

pub fn dispatch(command: Command, ctx: Context) -> Result<()> {
    match command {
        Command::Analyze(args) => run_analyze(args, ctx),
        Command::Structures(args) => run_structures(args, ctx),
    }
}

fn resolve_input_format(explicit: Option<InputFormat>, path: Option<&PathBuf>) -> Result<Format> {
    if let Some(fmt) = explicit {
        return Ok(fmt.into());
    }

    if let Some(path) = path {
        if let Some(fmt) = infer_input_format(path) {
            return Ok(fmt);
        }
        bail!(
            "Cannot infer format from '{}'. Use --infmt to specify.",
            path.display()
        );
    }

    bail!("Reading from stdin requires --infmt");
}

/// Output targets in command-line order; stdout when none are given.
fn resolve_outputs(outputs: &[PathBuf], explicit: Option<OutputFormat>) -> Result<Vec<OutputSpec>> {
    let Some((first, rest)) = outputs.split_first() else {
        let format = explicit.map(Format::from).unwrap_or(Format::Report);
        return Ok(vec![OutputSpec { path: None, format }]);
    };

    let mut specs = Vec::with_capacity(outputs.len());

    let first_format = if let Some(fmt) = explicit {
        fmt.into()
    } else if let Some(fmt) = infer_output_format(first) {
        fmt
    } else {
        bail!(
            "Cannot infer format from '{}'. Use --outfmt to specify.",
            first.display()
        );
    };
    specs.push(OutputSpec {
        path: Some(first.clone()),
        format: first_format,
    });

    for path in rest {
        let format = infer_output_format(path).ok_or_else(|| {
            anyhow!(
                "Cannot infer format from '{}'. Use explicit extension.",
                path.display()
            )
        })?;
        specs.push(OutputSpec {
            path: Some(path.clone()),
            format,
        });
    }

    Ok(specs)
}

fn read_dataset(path: Option<&PathBuf>, format: Format) -> Result<MolecularData> {
    use anyhow::Context as _;

    let input = open_input(path.map(PathBuf::as_path))?;
    let data = MoleculeReader::new(input, format)
        .read()
        .with_context(|| match path {
            Some(p) => format!("Failed to read dataset: {}", p.display()),
            None => "Failed to read dataset from stdin".to_string(),
        })?;

    tracing::debug!(
        molecules = data.len(),
        bonds = data.bond_count(),
        %format,
        "read dataset"
    );

    Ok(data)
}

fn write_substeps(specs: &[OutputSpec]) -> Vec<String> {
    specs
        .iter()
        .map(|spec| format!("Write {} → {}", spec.format, spec.target_name()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_input_format_wins() {
        let path = PathBuf::from("human.toml");
        let fmt = resolve_input_format(Some(InputFormat::Text), Some(&path)).unwrap();
        assert_eq!(fmt, Format::Text);
    }

    #[test]
    fn input_format_is_inferred_from_extension() {
        let path = PathBuf::from("vitales.txt");
        assert_eq!(resolve_input_format(None, Some(&path)).unwrap(), Format::Text);

        let unknown = PathBuf::from("vitales.json");
        let err = resolve_input_format(None, Some(&unknown)).unwrap_err();
        assert!(err.to_string().contains("--infmt"));
    }

    #[test]
    fn stdin_requires_explicit_format() {
        assert!(resolve_input_format(None, None).is_err());
        assert_eq!(
            resolve_input_format(Some(InputFormat::Toml), None).unwrap(),
            Format::Toml
        );
    }

    #[test]
    fn no_outputs_means_stdout_report() {
        let specs = resolve_outputs(&[], None).unwrap();
        assert_eq!(specs.len(), 1);
        assert!(specs[0].path.is_none());
        assert_eq!(specs[0].format, Format::Report);

        let specs = resolve_outputs(&[], Some(OutputFormat::Toml)).unwrap();
        assert_eq!(specs[0].format, Format::Toml);
    }

    #[test]
    fn explicit_format_applies_to_first_output_only() {
        let outputs = vec![PathBuf::from("serum.out"), PathBuf::from("serum.toml")];
        let specs = resolve_outputs(&outputs, Some(OutputFormat::Report)).unwrap();
        assert_eq!(specs[0].format, Format::Report);
        assert_eq!(specs[1].format, Format::Toml);
    }

    #[test]
    fn later_outputs_need_known_extensions() {
        let outputs = vec![PathBuf::from("serum.txt"), PathBuf::from("serum.csv")];
        assert!(resolve_outputs(&outputs, None).is_err());
    }

    #[test]
    fn substeps_name_format_and_target() {
        let specs = vec![
            OutputSpec {
                path: Some(PathBuf::from("out/serum.toml")),
                format: Format::Toml,
            },
            OutputSpec {
                path: None,
                format: Format::Report,
            },
        ];
        assert_eq!(
            write_substeps(&specs),
            vec!["Write TOML → serum.toml", "Write report → stdout"]
        );
    }
}
