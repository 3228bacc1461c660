//! PropBank phrases: the source side of an alignment.
//!
//! Each argument span of a proposition becomes one [`PropBankPhrase`],
//! carrying its label and the tokens it covers. The phrase index is the
//! span's position in the proposition and stays fixed for the whole
//! alignment run, including across argument number adjustments.

use std::fmt;

use semlink_lexicon::{ArgNumber, FunctionTag, PhraseRef, Preposition, PropBankArg};

use crate::alignment::Indexed;
use crate::error::AlignError;
use crate::proposition::Proposition;
use crate::token::Token;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropBankPhrase {
    pub index: usize,
    /// First token of the span.
    pub start: usize,
    /// One past the last token of the span.
    pub end: usize,
    pub arg: PropBankArg,
    pub tokens: Vec<Token>,
}

impl PropBankPhrase {
    /// One phrase per argument span, in span order.
    pub fn from_proposition(prop: &Proposition) -> Result<Vec<PropBankPhrase>, AlignError> {
        prop.arguments
            .iter()
            .enumerate()
            .map(|(index, argument)| {
                let tokens = prop
                    .tokens
                    .get(argument.start..argument.end)
                    .ok_or(AlignError::SpanOutOfBounds {
                        start: argument.start,
                        end: argument.end,
                        len: prop.tokens.len(),
                    })?;
                Ok(PropBankPhrase {
                    index,
                    start: argument.start,
                    end: argument.end,
                    arg: argument.label,
                    tokens: tokens.to_vec(),
                })
            })
            .collect()
    }

    pub fn number(&self) -> ArgNumber {
        self.arg.number
    }

    pub fn function_tag(&self) -> FunctionTag {
        self.arg.function_tag
    }

    /// The relation itself: `V` without a continuation or reference marker.
    pub fn is_relation(&self) -> bool {
        self.arg.number.is_rel() && !self.arg.continuation && !self.arg.reference
    }

    /// The preposition opening this phrase, if any. The two-token form
    /// (`out of`) is tried before the single token.
    pub fn preposition(&self) -> Option<Preposition> {
        let first = self.tokens.first()?;
        let second = self.tokens.get(1).map(|token| token.text.as_str());
        Preposition::detect(&first.text, second)
    }

    /// Whether any token is a cardinal number.
    pub fn has_cardinal(&self) -> bool {
        self.tokens.iter().any(Token::is_cardinal)
    }

    pub fn first_lemma(&self) -> Option<&str> {
        self.tokens.first().map(|token| token.lemma.as_str())
    }

    pub fn text(&self) -> String {
        self.tokens
            .iter()
            .map(|token| token.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// A copy of this phrase with a different argument number.
    pub fn with_number(&self, number: ArgNumber) -> PropBankPhrase {
        let mut adjusted = self.clone();
        adjusted.arg.number = number;
        adjusted
    }

    pub fn to_ref(&self) -> PhraseRef {
        PhraseRef {
            index: self.index,
            start: self.start,
            end: self.end,
            text: self.text(),
        }
    }
}

impl Indexed for PropBankPhrase {
    fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Display for PropBankPhrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.arg, self.text())
    }
}
