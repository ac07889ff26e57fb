//! Glossary storage: CSV, TSV and JSON files, selected by extension.
//!
//! File order is preserved in both directions; the checker's tie-breaking
//! depends on it.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use super::{Glossary, Term};
use crate::utils::file_extension;

pub fn load_glossary(path: &Path) -> Result<Glossary> {
    match file_extension(path).as_str() {
        ".csv" => load_delimited(path, b','),
        ".tsv" => load_delimited(path, b'\t'),
        ".json" => load_json(path),
        other => bail!("Unsupported glossary format: {}", other),
    }
}

pub fn save_glossary(glossary: &Glossary, path: &Path) -> Result<()> {
    match file_extension(path).as_str() {
        ".csv" => save_delimited(glossary, path, b','),
        ".tsv" => save_delimited(glossary, path, b'\t'),
        ".json" => save_json(glossary, path),
        other => bail!("Unsupported glossary format: {}", other),
    }
}

fn load_delimited(path: &Path, delimiter: u8) -> Result<Glossary> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .from_path(path)
        .context(format!("Failed to open glossary file: {}", path.display()))?;

    let mut glossary = Glossary::new();
    for (row, result) in reader.deserialize::<Term>().enumerate() {
        let term = result.context(format!(
            "Malformed glossary row {} in {}",
            row + 2,
            path.display()
        ))?;
        if term.source.is_empty() {
            tracing::warn!("Skipping row {} with empty source term", row + 2);
            continue;
        }
        glossary.terms.push(term);
    }
    Ok(glossary)
}

fn save_delimited(glossary: &Glossary, path: &Path, delimiter: u8) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_path(path)
        .context(format!("Failed to create glossary file: {}", path.display()))?;

    for term in &glossary.terms {
        writer.serialize(term)?;
    }
    writer.flush().context("Failed to write glossary file")?;
    Ok(())
}

fn load_json(path: &Path) -> Result<Glossary> {
    let content = fs::read_to_string(path)
        .context(format!("Failed to read glossary file: {}", path.display()))?;
    let terms: Vec<Term> = serde_json::from_str(&content)
        .context(format!("Failed to parse glossary file: {}", path.display()))?;
    Ok(Glossary::from_terms(terms))
}

fn save_json(glossary: &Glossary, path: &Path) -> Result<()> {
    let content = serde_json::to_string_pretty(&glossary.terms)?;
    fs::write(path, content)
        .context(format!("Failed to write glossary file: {}", path.display()))?;
    Ok(())
}
