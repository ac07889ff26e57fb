//! Convert a glossary between storage formats

use anyhow::Result;
use colored::Colorize;

use crate::cli::ConvertArgs;
use crate::glossary::io::{load_glossary, save_glossary};

pub fn run(args: ConvertArgs) -> Result<()> {
    let glossary = load_glossary(&args.input)?;
    save_glossary(&glossary, &args.output)?;

    println!(
        "{}",
        format!(
            "[OK] Converted {} term(s): {} -> {}",
            glossary.len(),
            args.input.display(),
            args.output.display()
        )
        .green()
    );

    Ok(())
}
