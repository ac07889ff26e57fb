use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "glosskit")]
#[command(author, version, about = "Bilingual glossary management and translation consistency toolkit", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check PO/TS translation files against a glossary
    Check(CheckArgs),

    /// Merge one glossary file into another
    Merge(MergeArgs),

    /// Import terms from a PO/TS translation file into a glossary
    Import(ImportArgs),

    /// Convert a glossary between CSV, TSV and JSON
    Convert(ConvertArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// PO/TS file or directory containing translation files
    #[arg(required = true)]
    pub input: PathBuf,

    /// Glossary file (CSV, TSV or JSON); falls back to the configured default
    #[arg(short, long)]
    pub glossary: Option<PathBuf>,

    /// Process subdirectories recursively
    #[arg(short, long, default_value_t = false)]
    pub recursive: bool,

    /// Emit machine-readable JSON instead of colored output
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Also report files without issues
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Parser, Debug)]
pub struct MergeArgs {
    /// Glossary to merge into
    #[arg(required = true)]
    pub base: PathBuf,

    /// Glossary supplying new terms
    #[arg(required = true)]
    pub other: PathBuf,

    /// Write the result here instead of back to the base glossary
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct ImportArgs {
    /// PO or TS translation file
    #[arg(required = true)]
    pub input: PathBuf,

    /// Glossary file to write
    #[arg(short, long, required = true)]
    pub output: PathBuf,

    /// Merge into the output glossary if it exists instead of replacing it
    #[arg(short, long, default_value_t = false)]
    pub append: bool,
}

#[derive(Parser, Debug)]
pub struct ConvertArgs {
    /// Input glossary file
    #[arg(required = true)]
    pub input: PathBuf,

    /// Output glossary file; the format follows its extension
    #[arg(required = true)]
    pub output: PathBuf,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Initialize configuration file with defaults
    Init {
        /// Overwrite existing config
        #[arg(short, long, default_value_t = false)]
        force: bool,
    },

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., general.default_glossary)
        key: String,
        /// Value to set
        value: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },

    /// Show config file path
    Path,
}
