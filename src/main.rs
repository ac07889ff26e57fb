mod check;
mod cli;
mod config;
mod convert;
mod formats;
mod glossary;
mod importer;
mod merge;
mod utils;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Commands};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check(args) => check::run(args)?,
        Commands::Merge(args) => merge::run(args)?,
        Commands::Import(args) => importer::run(args)?,
        Commands::Convert(args) => convert::run(args)?,
        Commands::Config(args) => config::commands::run(args)?,
    }

    Ok(())
}
