//! Sentence tokens.
//!
//! Tokenization, lemmatization and part-of-speech tagging happen upstream;
//! the aligner only reads the results. A token carries the three features
//! the alignment heuristics look at:
//!
//! - the surface text, for preposition detection (`out of the box`),
//! - the lemma, for the `where` heuristic and verb-specific feature lookup,
//! - the Penn Treebank part-of-speech tag, for cardinal numbers (`CD`).

use serde::{Deserialize, Serialize};

/// A single token of the input sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The surface form as it appeared in the sentence.
    pub text: String,
    /// The lemma, lowercased.
    pub lemma: String,
    /// Part-of-speech tag.
    #[serde(default)]
    pub pos: String,
}

impl Token {
    pub fn new(text: impl Into<String>, lemma: impl Into<String>, pos: impl Into<String>) -> Self {
        Token {
            text: text.into(),
            lemma: lemma.into(),
            pos: pos.into(),
        }
    }

    /// A token whose lemma is its lowercased text and whose tag is unknown.
    pub fn word(text: impl Into<String>) -> Self {
        let text = text.into();
        Token {
            lemma: text.to_lowercase(),
            text,
            pos: String::new(),
        }
    }

    pub fn is_cardinal(&self) -> bool {
        self.pos.eq_ignore_ascii_case("CD")
    }
}

/// Build plain tokens from whitespace-separated text.
pub fn tokenize(text: &str) -> Vec<Token> {
    text.split_whitespace().map(Token::word).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tokenize_splits_on_whitespace() {
        let tokens = tokenize("Give  it to Mary");
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0].text, "Give");
        assert_eq!(tokens[0].lemma, "give");
        assert_eq!(tokens[3].lemma, "mary");
    }

    #[test]
    fn cardinal_numbers_are_tagged_cd() {
        assert!(Token::new("5", "5", "CD").is_cardinal());
        assert!(Token::new("five", "five", "cd").is_cardinal());
        assert!(!Token::word("five").is_cardinal());
    }
}
