//! Syntactic frames: the target side of an alignment.
//!
//! A [`SyntacticFrame`] is built from one VerbNet frame's syntax. Each syntax
//! element becomes a [`FramePhrase`], except that a preposition directly
//! followed by a noun phrase is folded into that noun phrase as its
//! governing preposition (`PREP[to] NP[Recipient]` becomes one
//! `NP[Recipient]` governed by `to`).
//!
//! Frames are built once per candidate and never change afterwards.

use std::fmt;

use indexmap::IndexMap;
use semlink_lexicon::{
    Frame, LexType, PrepRestriction, Preposition, Restrictions, SynRestriction, SyntaxElement,
    ThematicRole,
};

use crate::alignment::Indexed;

/// The syntactic category of a frame element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxType {
    Verb,
    NounPhrase,
    Preposition,
    Lexical,
    Adjective,
    Adverb,
}

/// The prepositions a slot accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrepositionSlot {
    pub values: Vec<Preposition>,
    pub restrictions: Restrictions<PrepRestriction>,
}

impl PrepositionSlot {
    pub fn accepts(&self, preposition: Preposition) -> bool {
        self.values.contains(&preposition)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NounPhrase {
    pub role: ThematicRole,
    pub restrictions: Restrictions<SynRestriction>,
    /// The preposition governing this noun phrase, if the frame has one
    /// directly before it.
    pub preposition: Option<PrepositionSlot>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameElement {
    Verb,
    NounPhrase(NounPhrase),
    Preposition(PrepositionSlot),
    Lexical(LexType),
    /// Adjective and adverb slots. They count as targets but are never
    /// aligned.
    Other(SyntaxType),
}

/// A frame element together with its position in the frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FramePhrase {
    pub index: usize,
    pub element: FrameElement,
}

impl FramePhrase {
    pub fn syntax_type(&self) -> SyntaxType {
        match &self.element {
            FrameElement::Verb => SyntaxType::Verb,
            FrameElement::NounPhrase(_) => SyntaxType::NounPhrase,
            FrameElement::Preposition(_) => SyntaxType::Preposition,
            FrameElement::Lexical(_) => SyntaxType::Lexical,
            FrameElement::Other(kind) => *kind,
        }
    }

    pub fn noun_phrase(&self) -> Option<&NounPhrase> {
        match &self.element {
            FrameElement::NounPhrase(np) => Some(np),
            _ => None,
        }
    }

    /// The thematic role of a noun phrase element.
    pub fn role(&self) -> Option<ThematicRole> {
        self.noun_phrase().map(|np| np.role)
    }

    pub fn is_verb(&self) -> bool {
        self.element == FrameElement::Verb
    }
}

impl Indexed for FramePhrase {
    fn index(&self) -> usize {
        self.index
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntacticFrame {
    pub description: String,
    elements: Vec<FramePhrase>,
    roles: IndexMap<ThematicRole, usize>,
    types: IndexMap<SyntaxType, Vec<usize>>,
}

impl SyntacticFrame {
    pub fn from_frame(frame: &Frame) -> SyntacticFrame {
        let mut elements: Vec<FrameElement> = Vec::with_capacity(frame.syntax.len());
        let mut syntax = frame.syntax.iter().peekable();
        while let Some(element) = syntax.next() {
            let element = match element {
                SyntaxElement::Preposition {
                    values,
                    restrictions,
                } => {
                    let slot = PrepositionSlot {
                        values: values.clone(),
                        restrictions: restrictions.clone(),
                    };
                    match syntax.next_if(|next| matches!(next, SyntaxElement::NounPhrase { .. })) {
                        Some(SyntaxElement::NounPhrase { role, restrictions }) => {
                            FrameElement::NounPhrase(NounPhrase {
                                role: *role,
                                restrictions: restrictions.clone(),
                                preposition: Some(slot),
                            })
                        }
                        _ => FrameElement::Preposition(slot),
                    }
                }
                SyntaxElement::NounPhrase { role, restrictions } => {
                    FrameElement::NounPhrase(NounPhrase {
                        role: *role,
                        restrictions: restrictions.clone(),
                        preposition: None,
                    })
                }
                SyntaxElement::Verb => FrameElement::Verb,
                SyntaxElement::Lexical { value } => FrameElement::Lexical(*value),
                SyntaxElement::Adjective => FrameElement::Other(SyntaxType::Adjective),
                SyntaxElement::Adverb => FrameElement::Other(SyntaxType::Adverb),
            };
            elements.push(element);
        }
        SyntacticFrame::new(frame.description.clone(), elements)
    }

    pub fn new(description: impl Into<String>, elements: Vec<FrameElement>) -> SyntacticFrame {
        let elements: Vec<FramePhrase> = elements
            .into_iter()
            .enumerate()
            .map(|(index, element)| FramePhrase { index, element })
            .collect();

        let mut roles = IndexMap::new();
        let mut types: IndexMap<SyntaxType, Vec<usize>> = IndexMap::new();
        for phrase in &elements {
            // a role named by more than one noun phrase resolves to the last
            if let Some(role) = phrase.role() {
                roles.insert(role, phrase.index);
            }
            types.entry(phrase.syntax_type()).or_default().push(phrase.index);
        }

        SyntacticFrame {
            description: description.into(),
            elements,
            roles,
            types,
        }
    }

    pub fn elements(&self) -> &[FramePhrase] {
        &self.elements
    }

    pub fn get(&self, index: usize) -> Option<&FramePhrase> {
        self.elements.get(index)
    }

    /// Index of the noun phrase carrying `role`.
    pub fn by_role(&self, role: ThematicRole) -> Option<usize> {
        self.roles.get(&role).copied()
    }

    /// Indices of all elements of one syntactic type, in frame order.
    pub fn by_type(&self, kind: SyntaxType) -> &[usize] {
        self.types.get(&kind).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn roles(&self) -> impl Iterator<Item = ThematicRole> + '_ {
        self.roles.keys().copied()
    }
}

impl fmt::Display for FramePhrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let write_slot = |f: &mut fmt::Formatter<'_>, slot: &PrepositionSlot| {
            let values: Vec<_> = slot.values.iter().map(|prep| prep.label()).collect();
            write!(f, "{}", values.join("|"))
        };
        match &self.element {
            FrameElement::Verb => write!(f, "VERB"),
            FrameElement::NounPhrase(np) => {
                if let Some(slot) = &np.preposition {
                    write_slot(f, slot)?;
                    write!(f, " ")?;
                }
                write!(f, "NP[{}]", np.role)
            }
            FrameElement::Preposition(slot) => {
                write!(f, "PREP[")?;
                write_slot(f, slot)?;
                write!(f, "]")
            }
            FrameElement::Lexical(value) => write!(f, "LEX[{value}]"),
            FrameElement::Other(SyntaxType::Adverb) => write!(f, "ADV"),
            FrameElement::Other(_) => write!(f, "ADJ"),
        }
    }
}

impl fmt::Display for SyntacticFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, phrase) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{phrase}")?;
        }
        Ok(())
    }
}
