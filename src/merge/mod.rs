//! Merge one glossary into another

use anyhow::Result;
use colored::Colorize;

use crate::cli::MergeArgs;
use crate::glossary::io::{load_glossary, save_glossary};

pub fn run(args: MergeArgs) -> Result<()> {
    let mut base = load_glossary(&args.base)?;
    let other = load_glossary(&args.other)?;

    let added = base.merge(&other);

    let output = args.output.unwrap_or_else(|| args.base.clone());
    save_glossary(&base, &output)?;

    println!(
        "{}",
        format!(
            "[OK] Added {} new term(s) ({} total) -> {}",
            added,
            base.len(),
            output.display()
        )
        .green()
    );

    Ok(())
}
