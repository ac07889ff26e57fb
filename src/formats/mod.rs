//! Translation file parsing (PO catalogs and TS markup)

pub mod po;
pub mod ts;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::utils::file_extension;

/// A translation file reduced to what the checker and importers need: the
/// declared document language (empty when undeclared) and the complete
/// entries in document order. Entries with an empty source or target side
/// are dropped during parsing.
#[derive(Debug, Clone, Default)]
pub struct TranslationDocument {
    pub language: String,
    pub entries: Vec<Entry>,
}

/// One source/translation pair from a translation file.
#[derive(Debug, Clone)]
pub struct Entry {
    pub source: String,
    pub target: String,
}

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: roxmltree::Error,
    },

    #[error("Failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Load a translation file, dispatching on its extension.
///
/// The extension check happens before any file I/O: an unsupported extension
/// is reported as such even when the path does not exist.
pub fn load_document(path: &Path) -> Result<TranslationDocument, FormatError> {
    let ext = file_extension(path);
    match ext.as_str() {
        ".po" => Ok(po::parse(&read(path)?)),
        ".ts" => ts::parse(&read(path)?).map_err(|source| FormatError::Parse {
            path: path.to_path_buf(),
            source,
        }),
        _ => Err(FormatError::UnsupportedFormat(ext)),
    }
}

fn read(path: &Path) -> Result<String, FormatError> {
    fs::read_to_string(path).map_err(|source| FormatError::Io {
        path: path.to_path_buf(),
        source,
    })
}
