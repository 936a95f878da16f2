//! Fatal errors of a dispatch run.

use thiserror::Error;

/// How many leading characters of a rejected document are echoed back.
pub const SNIPPET_CHARS: usize = 200;

/// Errors that abort a run before any output document is produced.
///
/// Missing matrix entries are not in this list: they degrade a single edge
/// and are reported through [`MatrixError`](crate::distance::MatrixError).
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error(
        "could not parse input document: {source}. Input was (first {limit} chars): {snippet}...",
        limit = SNIPPET_CHARS
    )]
    Parse {
        source: serde_json::Error,
        snippet: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not serialize output document: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl DispatchError {
    /// Wraps a parse failure together with the start of the offending input.
    pub fn parse(source: serde_json::Error, input: &str) -> Self {
        Self::Parse {
            source,
            snippet: input.chars().take(SNIPPET_CHARS).collect(),
        }
    }
}
