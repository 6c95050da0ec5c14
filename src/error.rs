//! Errors raised at the crate's input boundaries
//!
//! Search dead ends are never errors; only bad input files, malformed
//! templates and invalid rolls are. Malformed templates surface as
//! `TemplateError`, wrapped in `LoadError::Template` when read from disk.

use crate::core::{RollError, TemplateError};
use std::fmt;
use std::io;

/// Failure to read or write one of the data files
#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    Json(serde_json::Error),
    /// A line of a text file that could not be parsed (1-based line number)
    Parse { line: usize, message: String },
    /// A template that fails validation (0-based template index)
    Template { index: usize, source: TemplateError },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Json(e) => write!(f, "Invalid JSON: {e}"),
            Self::Parse { line, message } => write!(f, "Line {line}: {message}"),
            Self::Template { index, source } => write!(f, "Template {index}: {source}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Parse { .. } => None,
            Self::Template { source, .. } => Some(source),
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Input rejected before any search is attempted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    InvalidRoll(RollError),
    EmptyLibrary,
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRoll(e) => write!(f, "Invalid roll: {e}"),
            Self::EmptyLibrary => write!(f, "Template library is empty"),
        }
    }
}

impl std::error::Error for SolveError {}

impl From<RollError> for SolveError {
    fn from(e: RollError) -> Self {
        Self::InvalidRoll(e)
    }
}
