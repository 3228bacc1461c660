//! Error types for loading lexical resources.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("invalid PropBank argument label '{label}'")]
    InvalidLabel { label: String },

    #[error("invalid PropBank argument number '{value}'")]
    InvalidArgNumber { value: String },

    #[error("unknown syntax element type '{kind}'")]
    UnknownSyntax { kind: String },

    #[error("malformed lexicon JSON: {0}")]
    Json(#[from] serde_json::Error),
}
