//! Errors raised while loading a cube document.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Serialization formats the loader understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Turtle 1.1 (`.ttl`).
    Turtle,
    /// N-Triples (`.nt`).
    NTriples,
}

impl Format {
    /// Picks a format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "ttl" | "turtle" => Some(Format::Turtle),
            "nt" | "ntriples" => Some(Format::NTriples),
            _ => None,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Format::Turtle => "Turtle",
            Format::NTriples => "N-Triples",
        })
    }
}

/// Failure to turn a document into a [`crate::Graph`].
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The document is not well-formed.
    #[error("{format} syntax error: {message}")]
    Syntax {
        /// Format the parser expected.
        format: Format,
        /// Parser message.
        message: String,
    },

    /// The file extension does not name a supported format.
    #[error("unsupported file type: {0} (expected .ttl or .nt)")]
    UnsupportedFormat(PathBuf),

    /// The parser produced a term that has no place in a plain RDF graph
    /// (a variable or an RDF-star quoted triple).
    #[error("unsupported {position} term in {format} input")]
    UnsupportedTerm {
        /// Format being parsed.
        format: Format,
        /// `subject`, `predicate` or `object`.
        position: &'static str,
    },
}
