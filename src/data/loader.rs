use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::models::Question;
use crate::parser::parse_mcqs;

use super::extract::extract_pdf_text;

/// Error raised while reading or writing a question source.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to extract text from {}: {reason}", .path.display())]
    Extract { path: PathBuf, reason: String },

    #[error("failed to parse {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// How a file is turned into questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Extract text from the PDF, then parse it.
    Pdf,
    /// A question list previously written by [`export_questions_to_json`].
    Json,
    /// Parse the file contents as plain text.
    Text,
}

impl SourceKind {
    /// Pick the source kind from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("pdf") => Self::Pdf,
            Some("json") => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Load questions from a PDF, JSON or plain text file.
///
/// A document without recognisable questions yields an empty list, not an error.
pub fn load_questions<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, LoadError> {
    let path = path.as_ref();
    let kind = SourceKind::from_path(path);

    let questions = match kind {
        SourceKind::Pdf => parse_mcqs(&extract_pdf_text(path)?),
        SourceKind::Json => {
            let json_content = read_to_string(path)?;
            serde_json::from_str(&json_content).map_err(|source| LoadError::Json {
                path: path.to_path_buf(),
                source,
            })?
        }
        SourceKind::Text => parse_mcqs(&read_to_string(path)?),
    };

    if questions.is_empty() {
        warn!(path = %path.display(), "no questions found");
    } else {
        info!(path = %path.display(), ?kind, count = questions.len(), "loaded questions");
    }

    Ok(questions)
}

/// Write `questions` as pretty-printed JSON.
pub fn export_questions_to_json<P: AsRef<Path>>(
    questions: &[Question],
    path: P,
) -> Result<(), LoadError> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(questions).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    fs::write(path, json).map_err(|source| LoadError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), count = questions.len(), "exported questions");
    Ok(())
}

fn read_to_string(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })
}
