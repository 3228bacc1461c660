//! The VerbNet class graph.
//!
//! A VerbNet class groups verbs (its *members*) that share syntactic frames
//! and semantics. Subclasses inherit the roles and frames of their parents
//! and add or override frames of their own, so most lookups walk the chain
//! from a class up through its ancestors.
//!
//! The graph is read-only once loaded. It is normally deserialized from
//! JSON:
//!
//! ```json
//! {
//!   "classes": [{
//!     "id": "give-13.1",
//!     "members": [{"name": "give"}, {"name": "lend", "features": ["+loan"]}],
//!     "roles": ["Agent", "Theme", "Recipient"],
//!     "frames": [{
//!       "description": "NP V NP PP.recipient",
//!       "syntax": [
//!         {"type": "NP", "role": "Agent"},
//!         {"type": "VERB"},
//!         {"type": "NP", "role": "Theme"},
//!         {"type": "PREP", "values": ["to"]},
//!         {"type": "NP", "role": "Recipient"}
//!       ],
//!       "semantics": [
//!         {"predicate": "has_possession", "args": [
//!           {"type": "Event", "value": "start(E)"},
//!           {"type": "ThemRole", "value": "Agent"},
//!           {"type": "ThemRole", "value": "Theme"}
//!         ]}
//!       ]
//!     }]
//!   }]
//! }
//! ```
//!
//! Tests and callers that assemble classes in code use [`ClassBuilder`] and
//! [`FrameBuilder`].

use std::collections::HashSet;
use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::LexiconError;
use crate::preposition::Preposition;
use crate::restriction::{
    LexType, MarkedRestriction, PrepRestriction, Restrictions, SynRestriction,
};
use crate::role::ThematicRole;
use crate::semantics::SemanticPredicate;

/// A VerbNet class id, e.g. `give-13.1-1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassId(String);

impl ClassId {
    pub fn new(id: impl Into<String>) -> Self {
        ClassId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The numeric part of the id (`13.1-1` for `give-13.1-1`). Ids without
    /// a name prefix are returned whole.
    pub fn number(&self) -> &str {
        match self.0.find(|c: char| c.is_ascii_digit()) {
            Some(start) => &self.0[start..],
            None => &self.0,
        }
    }

    /// The top-level class number (`13` for `give-13.1-1`).
    pub fn root(&self) -> &str {
        let number = self.number();
        number.split(['.', '-']).next().unwrap_or(number)
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClassId {
    fn from(id: &str) -> Self {
        ClassId::new(id)
    }
}

/// A verb belonging to a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    /// Verb-specific features (e.g. `+loan`), bound into verb-specific
    /// predicate arguments.
    #[serde(default)]
    pub features: Vec<String>,
}

/// One element of a frame's syntax description.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawSyntax")]
pub enum SyntaxElement {
    NounPhrase {
        role: ThematicRole,
        restrictions: Restrictions<SynRestriction>,
    },
    Verb,
    Preposition {
        values: Vec<Preposition>,
        restrictions: Restrictions<PrepRestriction>,
    },
    Lexical {
        value: LexType,
    },
    Adjective,
    Adverb,
}

#[derive(Debug, Deserialize)]
struct RawSyntax {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    role: Option<ThematicRole>,
    #[serde(default)]
    value: Option<String>,
    #[serde(default)]
    values: Vec<Preposition>,
    #[serde(default)]
    restrictions: Vec<MarkedRestriction<String>>,
}

impl TryFrom<RawSyntax> for SyntaxElement {
    type Error = LexiconError;

    fn try_from(raw: RawSyntax) -> Result<Self, Self::Error> {
        match crate::vocab::key(&raw.kind).as_str() {
            "NP" => Ok(SyntaxElement::NounPhrase {
                role: raw.role.unwrap_or(ThematicRole::Unknown),
                restrictions: raw
                    .restrictions
                    .into_iter()
                    .map(|marked| MarkedRestriction {
                        kind: SynRestriction::parse_lossy(&marked.kind),
                        value: marked.value,
                    })
                    .collect(),
            }),
            "VERB" | "V" => Ok(SyntaxElement::Verb),
            "PREP" => {
                let mut values = raw.values;
                if let Some(value) = &raw.value {
                    values.extend(value.split_whitespace().map(Preposition::parse_lossy));
                }
                Ok(SyntaxElement::Preposition {
                    values,
                    restrictions: raw
                        .restrictions
                        .into_iter()
                        .map(|marked| MarkedRestriction {
                            kind: PrepRestriction::parse_lossy(&marked.kind),
                            value: marked.value,
                        })
                        .collect(),
                })
            }
            "LEX" => Ok(SyntaxElement::Lexical {
                value: LexType::parse_lossy(raw.value.as_deref().unwrap_or_default()),
            }),
            "ADJ" => Ok(SyntaxElement::Adjective),
            "ADV" => Ok(SyntaxElement::Adverb),
            _ => Err(LexiconError::UnknownSyntax { kind: raw.kind }),
        }
    }
}

/// A syntactic frame with its semantic predicate templates.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Frame {
    #[serde(default)]
    pub description: String,
    pub syntax: Vec<SyntaxElement>,
    #[serde(default)]
    pub semantics: Vec<SemanticPredicate>,
}

/// A VerbNet class or subclass.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VerbNetClass {
    pub id: ClassId,
    #[serde(default)]
    pub parent: Option<ClassId>,
    #[serde(default)]
    pub members: Vec<Member>,
    /// Thematic roles declared by this class (not including inherited ones).
    #[serde(default)]
    pub roles: Vec<ThematicRole>,
    #[serde(default)]
    pub frames: Vec<Frame>,
}

impl VerbNetClass {
    pub fn member(&self, lemma: &str) -> Option<&Member> {
        self.members.iter().find(|member| member.name == lemma)
    }
}

/// The VerbNet class graph, indexed by class id.
#[derive(Debug, Clone, Default)]
pub struct VerbNet {
    classes: IndexMap<ClassId, VerbNetClass>,
}

#[derive(Deserialize)]
struct RawVerbNet {
    classes: Vec<VerbNetClass>,
}

impl VerbNet {
    pub fn new(classes: impl IntoIterator<Item = VerbNetClass>) -> Self {
        VerbNet {
            classes: classes
                .into_iter()
                .map(|class| (class.id.clone(), class))
                .collect(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, LexiconError> {
        let raw: RawVerbNet = serde_json::from_str(json)?;
        Ok(VerbNet::new(raw.classes))
    }

    pub fn get(&self, id: &ClassId) -> Option<&VerbNetClass> {
        self.classes.get(id)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn classes(&self) -> impl Iterator<Item = &VerbNetClass> {
        self.classes.values()
    }

    /// The class followed by its ancestors, most specific first. Unknown
    /// ids yield an empty chain; a parent cycle is cut at the first repeat.
    pub fn ancestors(&self, id: &ClassId) -> Vec<&VerbNetClass> {
        let mut chain = Vec::new();
        let mut seen = HashSet::new();
        let mut next = self.classes.get(id);
        while let Some(class) = next {
            if !seen.insert(&class.id) {
                tracing::warn!(class = %class.id, "cycle in VerbNet class hierarchy");
                break;
            }
            chain.push(class);
            next = class.parent.as_ref().and_then(|parent| self.classes.get(parent));
        }
        chain
    }
}

/// Builder for assembling classes in code.
pub struct ClassBuilder {
    class: VerbNetClass,
}

impl ClassBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        ClassBuilder {
            class: VerbNetClass {
                id: ClassId::new(id),
                parent: None,
                members: Vec::new(),
                roles: Vec::new(),
                frames: Vec::new(),
            },
        }
    }

    pub fn parent(mut self, parent: impl Into<String>) -> Self {
        self.class.parent = Some(ClassId::new(parent));
        self
    }

    pub fn member(mut self, name: impl Into<String>) -> Self {
        self.class.members.push(Member {
            name: name.into(),
            features: Vec::new(),
        });
        self
    }

    /// A member with verb-specific features.
    pub fn member_with(mut self, name: impl Into<String>, features: &[&str]) -> Self {
        self.class.members.push(Member {
            name: name.into(),
            features: features.iter().map(|f| f.to_string()).collect(),
        });
        self
    }

    pub fn role(mut self, role: ThematicRole) -> Self {
        self.class.roles.push(role);
        self
    }

    pub fn frame(mut self, frame: Frame) -> Self {
        self.class.frames.push(frame);
        self
    }

    pub fn build(self) -> VerbNetClass {
        self.class
    }
}

/// Builder for assembling frames in code.
pub struct FrameBuilder {
    frame: Frame,
}

impl FrameBuilder {
    pub fn new(description: impl Into<String>) -> Self {
        FrameBuilder {
            frame: Frame {
                description: description.into(),
                syntax: Vec::new(),
                semantics: Vec::new(),
            },
        }
    }

    pub fn np(mut self, role: ThematicRole) -> Self {
        self.frame.syntax.push(SyntaxElement::NounPhrase {
            role,
            restrictions: Restrictions::default(),
        });
        self
    }

    pub fn verb(mut self) -> Self {
        self.frame.syntax.push(SyntaxElement::Verb);
        self
    }

    pub fn prep(mut self, values: &[Preposition]) -> Self {
        self.frame.syntax.push(SyntaxElement::Preposition {
            values: values.to_vec(),
            restrictions: Restrictions::default(),
        });
        self
    }

    pub fn lex(mut self, value: LexType) -> Self {
        self.frame.syntax.push(SyntaxElement::Lexical { value });
        self
    }

    pub fn element(mut self, element: SyntaxElement) -> Self {
        self.frame.syntax.push(element);
        self
    }

    pub fn predicate(mut self, predicate: SemanticPredicate) -> Self {
        self.frame.semantics.push(predicate);
        self
    }

    pub fn build(self) -> Frame {
        self.frame
    }
}
