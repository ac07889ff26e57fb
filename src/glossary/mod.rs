//! Glossary data model

pub mod io;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A single glossary entry: a source term, its approved translation, and
/// optional scoping metadata.
///
/// An empty `language` means the term applies to documents of any language.
/// An empty `target` means the term carries no translation constraint and is
/// never reported by the checker.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Term {
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub context: String,
    #[serde(default)]
    pub comment: String,
}

impl Term {
    pub fn new(source: &str, target: &str, language: &str) -> Self {
        Self {
            source: source.to_string(),
            target: target.to_string(),
            language: language.to_string(),
            ..Default::default()
        }
    }

    /// Identity triple used for deduplication. Two terms with the same
    /// source/language but different targets are distinct (polysemy is
    /// legitimate and both are kept).
    fn identity(&self) -> (String, String, String) {
        (
            self.source.clone(),
            self.target.clone(),
            self.language.clone(),
        )
    }
}

/// An ordered collection of terms. Insertion order is preserved; it decides
/// both display order and which of several same-named terms is matched first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Glossary {
    pub terms: Vec<Term>,
}

impl Glossary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_terms(terms: Vec<Term>) -> Self {
        Self { terms }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Merge another glossary into this one, deduplicating by the
    /// (source, target, language) triple. Existing terms keep their
    /// positions; new terms are appended in `other`'s order. Returns the
    /// count of appended terms.
    ///
    /// Idempotent: merging the same glossary twice appends nothing the
    /// second time. `other` is not mutated.
    pub fn merge(&mut self, other: &Glossary) -> usize {
        let mut existing: HashSet<(String, String, String)> =
            self.terms.iter().map(Term::identity).collect();

        let mut added = 0;
        for term in &other.terms {
            let key = term.identity();
            if !existing.contains(&key) {
                self.terms.push(term.clone());
                existing.insert(key);
                added += 1;
            }
        }
        added
    }
}
