use crate::io::{Format, error::Error};
use crate::model::data::MolecularData;
use crate::model::molecule::Molecule;
use serde::Deserialize;
use std::io::{BufRead, Read};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RecordFile {
    #[serde(default, rename = "molecule")]
    molecules: Vec<MoleculeRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MoleculeRecord {
    id: String,
    strength: f64,
    #[serde(default)]
    bonds: Vec<String>,
}

impl From<MoleculeRecord> for Molecule {
    fn from(record: MoleculeRecord) -> Self {
        Molecule {
            id: record.id,
            strength: record.strength,
            bonds: record.bonds,
        }
    }
}

pub fn read<R: BufRead>(mut reader: R) -> Result<MolecularData, Error> {
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .map_err(|e| Error::Io { source: e })?;

    let file: RecordFile =
        toml::from_str(&content).map_err(|e| located_error(&content, e))?;

    Ok(file.molecules.into_iter().map(Molecule::from).collect())
}

fn located_error(content: &str, err: toml::de::Error) -> Error {
    match err.span() {
        Some(span) => {
            let line = content[..span.start.min(content.len())]
                .bytes()
                .filter(|&b| b == b'\n')
                .count()
                + 1;
            Error::parse(Format::Toml, line, err.message())
        }
        None => Error::Deserialize(err),
    }
}
