//! Terminology consistency checking
//!
//! Scans PO/TS translation files against a glossary and reports entries whose
//! translation does not contain the approved target term.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use walkdir::WalkDir;

use crate::cli::CheckArgs;
use crate::config::Config;
use crate::formats::{self, FormatError, TranslationDocument};
use crate::glossary::io::load_glossary;
use crate::glossary::{Glossary, Term};
use crate::utils::truncate_chars;

/// Maximum length, in characters, of the quoted translation in an issue.
const FOUND_MAX_CHARS: usize = 80;

/// A detected mismatch: a glossary source term appears in an entry, but the
/// approved translation does not appear in the entry's target text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub source: String,
    pub expected: String,
    /// The entry's translated text, truncated to 80 characters.
    pub found: String,
}

/// Check a PO or TS file against the glossary.
///
/// Matching is plain case-insensitive substring containment on both sides:
/// a term "File" matches inside "Profile". That is deliberate (no tokenizer,
/// no word boundaries) and kept for compatibility with existing glossaries;
/// the cost is an occasional false positive.
///
/// Issues are ordered by document entry, then by the first occurrence of each
/// matching term source in the glossary, then by glossary order within terms
/// sharing a source.
pub fn check_consistency(glossary: &Glossary, path: &Path) -> Result<Vec<Issue>, FormatError> {
    let doc = formats::load_document(path)?;
    Ok(scan_document(glossary, &doc))
}

fn scan_document(glossary: &Glossary, doc: &TranslationDocument) -> Vec<Issue> {
    let expected = ExpectedTerms::build(glossary, &doc.language);
    let mut issues = Vec::new();

    for entry in &doc.entries {
        let source_lower = entry.source.to_lowercase();
        let target_lower = entry.target.to_lowercase();

        for (key, terms) in expected.iter() {
            if !source_lower.contains(key) {
                continue;
            }
            for term in terms {
                if term.target.is_empty() {
                    continue;
                }
                if !target_lower.contains(&term.target.to_lowercase()) {
                    issues.push(Issue {
                        source: term.source.clone(),
                        expected: term.target.clone(),
                        found: truncate_chars(&entry.target, FOUND_MAX_CHARS),
                    });
                }
            }
        }
    }

    issues
}

/// Ordered multimap from lower-cased term source to the terms sharing it,
/// restricted to terms applicable to the document language. Key order is the
/// first occurrence of each source in the glossary, which keeps issue order
/// deterministic.
struct ExpectedTerms<'a> {
    keys: Vec<String>,
    buckets: HashMap<String, Vec<&'a Term>>,
}

impl<'a> ExpectedTerms<'a> {
    /// A term applies when it carries no language restriction, when its
    /// language equals the document's, or when the document declares none.
    fn build(glossary: &'a Glossary, language: &str) -> Self {
        let mut keys = Vec::new();
        let mut buckets: HashMap<String, Vec<&Term>> = HashMap::new();

        for term in &glossary.terms {
            if !language.is_empty() && !term.language.is_empty() && term.language != language {
                continue;
            }
            let key = term.source.to_lowercase();
            match buckets.entry(key) {
                std::collections::hash_map::Entry::Occupied(mut slot) => {
                    slot.get_mut().push(term);
                }
                std::collections::hash_map::Entry::Vacant(slot) => {
                    keys.push(slot.key().clone());
                    slot.insert(vec![term]);
                }
            }
        }

        Self { keys, buckets }
    }

    fn iter(&self) -> impl Iterator<Item = (&str, &[&'a Term])> {
        self.keys
            .iter()
            .map(|k| (k.as_str(), self.buckets[k].as_slice()))
    }
}

pub fn run(args: CheckArgs) -> Result<()> {
    let cfg = Config::load().unwrap_or_default();

    let glossary_path = args
        .glossary
        .or_else(|| cfg.general.default_glossary.clone().map(PathBuf::from))
        .context(
            "No glossary given. Pass --glossary or set general.default_glossary in the config.",
        )?;
    let glossary = load_glossary(&glossary_path)?;

    let verbose = args.verbose || cfg.general.verbose;
    let recursive = args.recursive || cfg.check.recursive;
    let files = collect_files(&args.input, recursive);

    if files.is_empty() {
        println!("{}", "[WARN] No PO or TS files found".yellow());
        return Ok(());
    }

    if !args.json {
        println!(
            "{}",
            format!(
                "[Check] {} term(s) from {}",
                glossary.len(),
                glossary_path.display()
            )
            .green()
        );
    }

    let mut reports: Vec<FileReport> = Vec::new();
    let mut total = 0;

    for file in &files {
        let issues = check_consistency(&glossary, file)?;
        total += issues.len();

        if args.json {
            reports.push(FileReport {
                file: file.display().to_string(),
                issues,
            });
            continue;
        }

        if issues.is_empty() {
            if verbose {
                println!("  {} clean", file.display());
            }
            continue;
        }

        println!(
            "{}",
            format!("  {}: {} issue(s)", file.display(), issues.len()).yellow()
        );
        for issue in &issues {
            println!(
                "    {} -> expected {}, found \"{}\"",
                issue.source.cyan(),
                issue.expected.green(),
                issue.found
            );
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else if total == 0 {
        println!("{}", "[OK] No terminology issues found".green());
    } else {
        println!(
            "{}",
            format!("[WARN] {} issue(s) in {} file(s)", total, files.len()).yellow()
        );
    }

    if total > 0 {
        std::process::exit(1);
    }
    Ok(())
}

/// A directory input is scanned for PO/TS files; anything else is handed to
/// the checker as-is so that unsupported extensions and missing files surface
/// with their proper errors.
fn collect_files(input: &Path, recursive: bool) -> Vec<PathBuf> {
    if !input.is_dir() {
        return vec![input.to_path_buf()];
    }

    let walker = if recursive {
        WalkDir::new(input)
    } else {
        WalkDir::new(input).max_depth(1)
    };

    let mut files: Vec<PathBuf> = walker
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.path()
                .extension()
                .map(|ext| ext.eq_ignore_ascii_case("po") || ext.eq_ignore_ascii_case("ts"))
                .unwrap_or(false)
        })
        .map(|e| e.path().to_path_buf())
        .collect();
    files.sort();
    files
}

/// Per-file result for `--json` output.
#[derive(Debug, Serialize)]
struct FileReport {
    file: String,
    issues: Vec<Issue>,
}
