//! Labeled propositions: the output of the aligner.
//!
//! A [`VerbNetProp`] is the PropBank chunking of one predicate enriched with
//! whatever the VerbNet alignment found: a thematic role and a roleset
//! description per argument, the class and frame that won, and the frame's
//! semantic predicates with their arguments bound to sentence phrases.
//!
//! ```text
//! give [give-13.1-1 | NP[Agent] VERB NP[Recipient] NP[Theme]]
//!   A0[John] Agent (giver)
//!   V[gave] Verb
//!   A2[Mary] Recipient (entity given to)
//!   A1[a book] Theme (thing given)
//!   has_possession[start(E1 = give-13.1-1), Agent(John), Theme(a book)]
//! ```

use std::fmt;

use semlink_lexicon::{ClassId, PropBankArg, SemanticPredicate, ThematicRole};
use serde::Serialize;

/// The labels of one argument span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleLabel {
    pub arg: PropBankArg,
    pub start: usize,
    /// One past the last token.
    pub end: usize,
    pub thematic_role: Option<ThematicRole>,
    /// The roleset's description of the argument number, e.g. `giver`.
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerbNetProp {
    pub tokens: Vec<String>,
    /// First token of the relation span.
    pub relation: Option<usize>,
    pub lemma: Option<String>,
    pub sense: Option<ClassId>,
    /// Class of the winning frame; the sense class or one of its ancestors.
    pub class: Option<ClassId>,
    pub frame: Option<String>,
    pub roleset: Option<String>,
    pub labels: Vec<RoleLabel>,
    pub predicates: Vec<SemanticPredicate>,
}

impl VerbNetProp {
    /// Whether a VerbNet frame was aligned at all.
    pub fn is_aligned(&self) -> bool {
        self.class.is_some()
    }

    pub fn label(&self, arg: &str) -> Option<&RoleLabel> {
        self.labels.iter().find(|label| label.arg.to_string() == arg)
    }

    pub fn span_text(&self, label: &RoleLabel) -> String {
        self.tokens
            .get(label.start..label.end)
            .map(|tokens| tokens.join(" "))
            .unwrap_or_default()
    }
}

impl fmt::Display for VerbNetProp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lemma.as_deref().unwrap_or("-"))?;
        match (&self.class, &self.frame) {
            (Some(class), Some(frame)) => writeln!(f, " [{class} | {frame}]")?,
            (Some(class), None) => writeln!(f, " [{class}]")?,
            _ => writeln!(f)?,
        }
        for label in &self.labels {
            write!(f, "  {}[{}]", label.arg, self.span_text(label))?;
            if let Some(role) = label.thematic_role {
                write!(f, " {role}")?;
            }
            if let Some(description) = &label.description {
                write!(f, " ({description})")?;
            }
            writeln!(f)?;
        }
        for predicate in &self.predicates {
            writeln!(f, "  {predicate}")?;
        }
        Ok(())
    }
}
