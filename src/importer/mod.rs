//! Seed a glossary from existing translation files
//!
//! Every complete entry of a PO/TS file becomes a fresh term tagged with the
//! document's declared language. Distinct from the checker's matching path:
//! this constructs terms, the checker only reads them.

use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use crate::cli::ImportArgs;
use crate::formats::{self, FormatError};
use crate::glossary::io::{load_glossary, save_glossary};
use crate::glossary::{Glossary, Term};

/// Turn a translation file into terms, one per complete entry. Dispatches on
/// extension exactly like the checker and shares its error taxonomy.
pub fn import_terms(path: &Path) -> Result<Vec<Term>, FormatError> {
    let doc = formats::load_document(path)?;
    let language = doc.language;
    Ok(doc
        .entries
        .into_iter()
        .map(|entry| Term {
            source: entry.source,
            target: entry.target,
            language: language.clone(),
            context: String::new(),
            comment: String::new(),
        })
        .collect())
}

pub fn run(args: ImportArgs) -> Result<()> {
    let terms = import_terms(&args.input)?;

    if terms.is_empty() {
        println!("{}", "[WARN] No complete entries to import".yellow());
        return Ok(());
    }

    let mut glossary = if args.append && args.output.exists() {
        load_glossary(&args.output)?
    } else {
        Glossary::new()
    };

    let added = glossary.merge(&Glossary::from_terms(terms));
    save_glossary(&glossary, &args.output)?;

    println!(
        "{}",
        format!(
            "[OK] Imported {} term(s) ({} total) -> {}",
            added,
            glossary.len(),
            args.output.display()
        )
        .green()
    );

    Ok(())
}
