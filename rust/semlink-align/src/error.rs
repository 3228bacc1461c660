//! Error types for alignment.
//!
//! An [`AlignError`] raised while aligning one candidate frame only discards
//! that candidate; the search carries on with the others.

use semlink_lexicon::LexiconError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AlignError {
    #[error(
        "expected one relation phrase and one verb element, found {relations} relation phrase(s) and {verbs} verb element(s)"
    )]
    RelationShape { relations: usize, verbs: usize },

    #[error("source phrase {index} is not part of this alignment")]
    UnknownSource { index: usize },

    #[error("target phrase {index} is not part of this alignment")]
    UnknownTarget { index: usize },

    #[error("argument span {start}..{end} does not fit a sentence of {len} tokens")]
    SpanOutOfBounds { start: usize, end: usize, len: usize },

    #[error("argument spans {first} and {second} overlap")]
    OverlappingSpans { first: String, second: String },

    #[error("expected {expected} tags, one per token, found {found}")]
    TagCount { expected: usize, found: usize },

    #[error("invalid chunk tag '{tag}' at token {position}")]
    InvalidTag { tag: String, position: usize },

    #[error("invalid aligner configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    Lexicon(#[from] LexiconError),
}
