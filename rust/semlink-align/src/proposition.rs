//! Propositions: a predicate occurrence with its labeled argument spans.
//!
//! A proposition is what the upstream semantic role labeler hands over for
//! one predicate of a sentence: the sentence tokens, the PropBank chunking
//! (ordered, non-overlapping spans, one of them the relation `V`) and,
//! when sense disambiguation succeeded, the VerbNet class of the predicate.
//!
//! ```rust,ignore
//! let prop = Proposition::from_tags(
//!     tokenize("John gave a book to Mary"),
//!     &["B-A0", "B-V", "B-A1", "I-A1", "B-A2", "I-A2"],
//! )?
//! .with_sense("give-13.1-1");
//! ```

use semlink_lexicon::{ClassId, PropBankArg};
use serde::Serialize;

use crate::error::AlignError;
use crate::token::Token;

/// A labeled argument span. `end` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Argument {
    pub label: PropBankArg,
    pub start: usize,
    pub end: usize,
}

impl Argument {
    pub fn is_relation(&self) -> bool {
        self.label.number.is_rel() && !self.label.continuation && !self.label.reference
    }
}

/// A predicate occurrence and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proposition {
    /// All tokens of the sentence.
    pub tokens: Vec<Token>,
    /// The predicted VerbNet class, if any.
    pub sense: Option<ClassId>,
    /// Argument spans, ordered by start position.
    pub arguments: Vec<Argument>,
}

impl Proposition {
    pub fn new(tokens: Vec<Token>) -> Self {
        Proposition {
            tokens,
            sense: None,
            arguments: Vec::new(),
        }
    }

    pub fn with_sense(mut self, sense: impl Into<ClassId>) -> Self {
        self.sense = Some(sense.into());
        self
    }

    /// Add an argument span from its PropBank label.
    pub fn with_argument(self, label: &str, start: usize, end: usize) -> Result<Self, AlignError> {
        let label = PropBankArg::parse(label)?;
        self.with_arg(label, start, end)
    }

    /// Add an argument span, keeping spans ordered and disjoint.
    pub fn with_arg(mut self, label: PropBankArg, start: usize, end: usize) -> Result<Self, AlignError> {
        if start >= end || end > self.tokens.len() {
            return Err(AlignError::SpanOutOfBounds {
                start,
                end,
                len: self.tokens.len(),
            });
        }
        let argument = Argument { label, start, end };
        if let Some(other) = self
            .arguments
            .iter()
            .find(|other| other.start < end && start < other.end)
        {
            return Err(AlignError::OverlappingSpans {
                first: format!("{}[{}..{}]", other.label, other.start, other.end),
                second: format!("{label}[{start}..{end}]"),
            });
        }
        let position = self.arguments.partition_point(|other| other.start < start);
        self.arguments.insert(position, argument);
        Ok(self)
    }

    /// Build a proposition from one BIO chunk tag per token (`B-A0`,
    /// `I-A0`, `O`, `B-V`, `B-ARGM-TMP`, ...). An `I-` tag that does not
    /// continue an open chunk of the same label opens a new one.
    pub fn from_tags(tokens: Vec<Token>, tags: &[&str]) -> Result<Self, AlignError> {
        if tags.len() != tokens.len() {
            return Err(AlignError::TagCount {
                expected: tokens.len(),
                found: tags.len(),
            });
        }

        let mut chunks: Vec<(&str, usize, usize)> = Vec::new();
        let mut open: Option<(&str, usize)> = None;
        for (position, &tag) in tags.iter().enumerate() {
            let tag = tag.trim();
            let (continues, label) = match tag.split_once('-') {
                _ if tag == "O" => {
                    if let Some((label, start)) = open.take() {
                        chunks.push((label, start, position));
                    }
                    continue;
                }
                Some(("B", label)) => (false, label),
                Some(("I", label)) => (true, label),
                _ => {
                    return Err(AlignError::InvalidTag {
                        tag: tag.to_string(),
                        position,
                    });
                }
            };
            match open {
                Some((current, _)) if continues && current == label => {}
                _ => {
                    if let Some((label, start)) = open.take() {
                        chunks.push((label, start, position));
                    }
                    open = Some((label, position));
                }
            }
        }
        if let Some((label, start)) = open {
            chunks.push((label, start, tags.len()));
        }

        chunks
            .into_iter()
            .try_fold(Proposition::new(tokens), |prop, (label, start, end)| {
                prop.with_argument(label, start, end)
            })
    }

    /// The relation span (`V`), if the chunking has one.
    pub fn relation(&self) -> Option<&Argument> {
        self.arguments.iter().find(|argument| argument.is_relation())
    }

    /// Lemma of the predicate: the lemma of the relation span's first token.
    pub fn lemma(&self) -> Option<&str> {
        self.relation()
            .and_then(|relation| self.tokens.get(relation.start))
            .map(|token| token.lemma.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::tokenize;
    use pretty_assertions::assert_eq;
    use semlink_lexicon::ArgNumber;

    #[test]
    fn chunks_bio_tags() {
        let prop = Proposition::from_tags(
            tokenize("John gave a book to Mary yesterday"),
            &["B-A0", "B-V", "B-A1", "I-A1", "B-A2", "I-A2", "B-ARGM-TMP"],
        )
        .unwrap();

        let spans: Vec<_> = prop
            .arguments
            .iter()
            .map(|arg| (arg.label.to_string(), arg.start, arg.end))
            .collect();
        assert_eq!(
            spans,
            vec![
                ("A0".to_string(), 0, 1),
                ("V".to_string(), 1, 2),
                ("A1".to_string(), 2, 4),
                ("A2".to_string(), 4, 6),
                ("AM-TMP".to_string(), 6, 7),
            ]
        );
        assert_eq!(prop.lemma(), Some("gave"));
    }

    #[test]
    fn outside_tags_close_chunks() {
        let prop =
            Proposition::from_tags(tokenize("well , he ran"), &["O", "O", "B-A0", "B-V"]).unwrap();
        assert_eq!(prop.arguments.len(), 2);
        assert_eq!(prop.relation().map(|rel| rel.start), Some(3));
    }

    #[test]
    fn dangling_inside_tag_opens_a_chunk() {
        let prop = Proposition::from_tags(tokenize("ran home"), &["B-V", "I-A4"]).unwrap();
        assert_eq!(prop.arguments[1].label.number, ArgNumber::A4);
    }

    #[test]
    fn rejects_malformed_tags() {
        assert!(Proposition::from_tags(tokenize("ran"), &["X-V"]).is_err());
        assert!(Proposition::from_tags(tokenize("ran home"), &["B-V"]).is_err());
        assert!(Proposition::from_tags(tokenize("ran"), &["B-Z9"]).is_err());
    }

    #[test]
    fn spans_are_kept_ordered_and_disjoint() {
        let prop = Proposition::new(tokenize("John gave Mary a book"))
            .with_argument("A1", 3, 5)
            .unwrap()
            .with_argument("V", 1, 2)
            .unwrap();
        assert_eq!(prop.arguments[0].start, 1);
        assert!(prop.clone().with_argument("A2", 2, 4).is_err());
        assert!(prop.with_argument("A2", 4, 9).is_err());
    }

    #[test]
    fn continuation_relation_is_not_the_relation() {
        let prop = Proposition::new(tokenize("picked it up"))
            .with_argument("C-V", 2, 3)
            .unwrap();
        assert_eq!(prop.relation(), None);
    }
}
