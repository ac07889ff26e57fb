//! Config command handlers

use anyhow::{Context, Result};
use colored::Colorize;

use super::Config;
use crate::cli::{ConfigAction, ConfigArgs};

pub fn run(args: ConfigArgs) -> Result<()> {
    match args.action {
        ConfigAction::Show => show_config(),
        ConfigAction::Init { force } => init_config(force),
        ConfigAction::Set { key, value } => set_config(&key, &value),
        ConfigAction::Get { key } => get_config(&key),
        ConfigAction::Path => show_path(),
    }
}

fn show_config() -> Result<()> {
    let config = Config::load()?;
    let content = toml::to_string_pretty(&config)?;

    println!("{}", "[Config]".green());
    println!("{}", content);

    Ok(())
}

fn init_config(force: bool) -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;

    if path.exists() && !force {
        println!(
            "{}",
            format!("Config file already exists: {}", path.display()).yellow()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    let config = Config::default();
    let saved_path = config.save()?;

    println!("{}", "[Config] Initialized".green());
    println!("  Created: {}", saved_path.display());

    Ok(())
}

fn set_config(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;

    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["general", "default_glossary"] => {
            config.general.default_glossary = if value.is_empty() {
                None
            } else {
                Some(value.to_string())
            };
        }
        ["general", "verbose"] => {
            config.general.verbose = value.parse().unwrap_or(false);
        }
        ["check", "recursive"] => {
            config.check.recursive = value.parse().unwrap_or(false);
        }
        _ => {
            anyhow::bail!("Unknown config key: {}", key);
        }
    }

    config.save()?;
    println!("{}", format!("[Config] Set {} = {}", key, value).green());

    Ok(())
}

fn get_config(key: &str) -> Result<()> {
    let config = Config::load()?;
    let parts: Vec<&str> = key.split('.').collect();

    let value: Option<String> = match parts.as_slice() {
        ["general", "default_glossary"] => config.general.default_glossary,
        ["general", "verbose"] => Some(config.general.verbose.to_string()),
        ["check", "recursive"] => Some(config.check.recursive.to_string()),
        _ => {
            anyhow::bail!("Unknown config key: {}", key);
        }
    };

    match value {
        Some(v) => println!("{} = {}", key, v),
        None => println!("{} = (not set)", key),
    }

    Ok(())
}

fn show_path() -> Result<()> {
    match Config::config_path() {
        Some(path) => {
            println!("{}", path.display());
            if path.exists() {
                println!("{}", "(exists)".green());
            } else {
                println!("{}", "(not created)".yellow());
            }
        }
        None => {
            println!("{}", "Could not determine config path".red());
        }
    }
    Ok(())
}
