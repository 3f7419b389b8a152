use crate::io::{Format, error::Error};
use crate::model::data::MolecularData;
use crate::model::molecule::Molecule;
use std::io::BufRead;

pub fn read<R: BufRead>(reader: R) -> Result<MolecularData, Error> {
    let mut molecules = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let content = line.map_err(|e| Error::Io { source: e })?;
        let ln = i + 1;
        let record = strip_comment(&content).trim();
        if record.is_empty() {
            continue;
        }
        molecules.push(parse_record(record, ln)?);
    }
    Ok(MolecularData::new(molecules))
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

fn parse_record(record: &str, ln: usize) -> Result<Molecule, Error> {
    let mut tokens = record
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty());

    let id = tokens
        .next()
        .ok_or_else(|| Error::parse(Format::Text, ln, "record has no molecule id"))?;

    let strength_token = tokens.next().ok_or_else(|| {
        Error::parse(
            Format::Text,
            ln,
            format!("molecule '{}' is missing a strength value", id),
        )
    })?;

    let strength = strength_token.parse::<f64>().map_err(|_| {
        Error::parse(
            Format::Text,
            ln,
            format!("invalid strength '{}' for molecule '{}'", strength_token, id),
        )
    })?;

    Ok(Molecule::new(id, strength).with_bonds(tokens))
}
