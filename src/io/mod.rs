//! Reading molecule datasets and writing analysis results.
//!
//! Datasets are read from one of two input formats:
//!
//! - [`Format::Toml`]: an array of `[[molecule]]` tables with `id`, `strength`
//!   and an optional `bonds` list.
//! - [`Format::Text`]: one molecule per line as `ID STRENGTH [BOND ...]`.
//!
//! Results are written as a human-readable [`Format::Report`] or as a
//! machine-readable [`Format::Toml`] summary.

use std::fmt;
use std::io::{BufRead, Write};

use serde::Deserialize;

use crate::analysis::Analysis;
use crate::model::data::MolecularData;
use crate::model::structure::MolecularStructure;

pub mod error;

mod record {
    pub mod reader;
}

mod text {
    pub mod reader;
}

mod report {
    pub mod writer;
}

mod summary {
    pub mod writer;
}

pub use error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Toml,
    Text,
    Report,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Toml => write!(f, "TOML"),
            Format::Text => write!(f, "text"),
            Format::Report => write!(f, "report"),
        }
    }
}

/// Labels and number formatting used by [`Format::Report`] output.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct ReportConfig {
    /// Name of the reference dataset in report headings.
    pub human_label: String,
    /// Name of the compared dataset in report headings.
    pub vitales_label: String,
    /// Decimal places for bond strengths.
    pub precision: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            human_label: "typical humans".to_string(),
            vitales_label: "Vitales individuals".to_string(),
            precision: 2,
        }
    }
}

/// Reads a molecule dataset in a chosen format.
///
/// ```
/// use serum_forge::io::{Format, MoleculeReader};
///
/// let input = "A 1.5 B\nB 2.0\n# comment\nC 3.0\n";
/// let data = MoleculeReader::new(input.as_bytes(), Format::Text).read().unwrap();
/// assert_eq!(data.len(), 3);
/// assert_eq!(data.bond_count(), 1);
/// ```
pub struct MoleculeReader<R> {
    reader: R,
    format: Format,
}

impl<R: BufRead> MoleculeReader<R> {
    pub fn new(reader: R, format: Format) -> Self {
        Self { reader, format }
    }

    pub fn read(self) -> Result<MolecularData, Error> {
        match self.format {
            Format::Toml => record::reader::read(self.reader),
            Format::Text => text::reader::read(self.reader),
            Format::Report => Err(Error::UnsupportedReadFormat(self.format)),
        }
    }
}

/// Writes analysis results in a chosen format.
pub struct AnalysisWriter<W> {
    writer: W,
    format: Format,
    report: ReportConfig,
}

impl<W: Write> AnalysisWriter<W> {
    pub fn new(writer: W, format: Format) -> Self {
        Self {
            writer,
            format,
            report: ReportConfig::default(),
        }
    }

    pub fn with_report_config(mut self, report: ReportConfig) -> Self {
        self.report = report;
        self
    }

    pub fn write(mut self, analysis: &Analysis<'_>) -> Result<(), Error> {
        match self.format {
            Format::Report => report::writer::write_analysis(&mut self.writer, analysis, &self.report),
            Format::Toml => summary::writer::write_analysis(&mut self.writer, analysis),
            Format::Text => Err(Error::UnsupportedWriteFormat(self.format)),
        }?;
        self.writer.flush()?;
        Ok(())
    }

    /// Writes the structures of a single dataset, labelled `label` in reports.
    pub fn write_structures(
        mut self,
        structures: &[MolecularStructure<'_>],
        label: &str,
    ) -> Result<(), Error> {
        match self.format {
            Format::Report => report::writer::write_structures(&mut self.writer, structures, label),
            Format::Toml => summary::writer::write_structures(&mut self.writer, structures),
            Format::Text => Err(Error::UnsupportedWriteFormat(self.format)),
        }?;
        self.writer.flush()?;
        Ok(())
    }
}
