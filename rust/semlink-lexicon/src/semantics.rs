//! VerbNet semantic predicate templates.
//!
//! Each VerbNet frame carries a list of predicates such as
//! `has_possession(start(E), Agent, Theme)`. In the lexicon the arguments are
//! free variables; the aligner fills a *copy* of the template with bindings:
//! events bind to the VerbNet class, thematic roles to sentence phrases, and
//! verb-specific placeholders to the features of the matching class member.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::role::ThematicRole;
use crate::verbnet::ClassId;
use crate::vocab::{lossy, vocabulary};

vocabulary! {
    /// The name of a semantic predicate.
    pub enum PredicateType {
        Adjust => "adjust",
        Admit => "admit",
        Alive => "alive",
        ApplyHeat => "apply_heat",
        ApplyMaterial => "apply_material",
        Assess => "assess",
        Attached => "attached",
        Attempt => "attempt",
        AuthorityRelationship => "authority_relationship",
        Avoid => "avoid",
        Be => "be",
        BodyMotion => "body_motion",
        BodyProcess => "body_process",
        BodyReflexive => "body_reflexive",
        Capacity => "capacity",
        Cause => "cause",
        ChangeValue => "change_value",
        Conflict => "conflict",
        Confront => "confront",
        Contact => "contact",
        Convert => "convert",
        Cooked => "cooked",
        Cooperate => "cooperate",
        Cost => "cost",
        Declare => "declare",
        Degradation => "degradation_material_integrity",
        Describe => "describe",
        Destroyed => "destroyed",
        Different => "different",
        Direction => "direction",
        Disappear => "disappear",
        Discomfort => "discomfort",
        Do => "do",
        Emit => "emit",
        EmotionalState => "emotional_state",
        Equals => "equals",
        Exceed => "exceed",
        ExertForce => "exert_force",
        Exist => "exist",
        Experience => "experience",
        FilledWith => "filled_with",
        Free => "free",
        Function => "function",
        Group => "group",
        Harmed => "harmed",
        HasLocation => "has_location",
        HasPossession => "has_possession",
        HasState => "has_state",
        Indicate => "indicate",
        Involuntary => "involuntary",
        Limit => "limit",
        Location => "location",
        Manner => "manner",
        Mingled => "mingled",
        Motion => "motion",
        Necessitate => "necessitate",
        Occur => "occur",
        PathRel => "path_rel",
        Perceive => "perceive",
        PhysicalForm => "physical_form",
        Position => "position",
        Promote => "promote",
        Property => "property",
        RotationalMotion => "rotational_motion",
        Rush => "rush",
        Satisfy => "satisfy",
        Seem => "seem",
        Signify => "signify",
        SocialInteraction => "social_interaction",
        Suffocated => "suffocated",
        Support => "support",
        TakeCareOf => "take_care_of",
        Time => "time",
        Together => "together",
        Transfer => "transfer",
        TransferInfo => "transfer_info",
        Understand => "understand",
        Use => "use",
        Utilize => "utilize",
        Visible => "visible",
        Void => "void",
        Weather => "weather",
        Wear => "wear",
        /// Sentinel for predicate names outside the inventory.
        Unknown => "unknown",
    }
}

lossy!(PredicateType, Unknown, "semantic predicate");

vocabulary! {
    /// How a predicate holds relative to its event.
    pub enum EventRelation {
        Event => "event",
        Start => "start",
        During => "during",
        End => "end",
        Result => "result",
    }
}

/// A reference to the sentence phrase bound to a thematic role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhraseRef {
    /// Index of the phrase within its proposition.
    pub index: usize,
    /// First token of the phrase.
    pub start: usize,
    /// One past the last token of the phrase.
    pub end: usize,
    /// Surface text of the phrase.
    pub text: String,
}

/// An argument of a semantic predicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SemanticArgument {
    Constant {
        value: String,
    },
    Event {
        relation: EventRelation,
        id: String,
        binding: Option<ClassId>,
    },
    ThematicRole {
        role: ThematicRole,
        binding: Option<PhraseRef>,
    },
    VerbSpecific {
        placeholder: String,
        binding: Option<String>,
    },
}

impl SemanticArgument {
    /// Build an argument from its lexicon form: a kind (`Event`, `ThemRole`,
    /// `VerbSpecific`, `Constant`) and a value.
    pub fn from_lexicon(kind: &str, value: &str) -> SemanticArgument {
        match crate::vocab::key(kind).as_str() {
            "EVENT" => {
                let (relation, id) = parse_event(value);
                SemanticArgument::Event {
                    relation,
                    id,
                    binding: None,
                }
            }
            "THEMROLE" | "THEMATIC_ROLE" => SemanticArgument::ThematicRole {
                role: ThematicRole::parse_lossy(value),
                binding: None,
            },
            "CONSTANT" => SemanticArgument::Constant {
                value: value.to_string(),
            },
            _ => SemanticArgument::VerbSpecific {
                placeholder: value.to_string(),
                binding: None,
            },
        }
    }

    pub fn thematic_role(&self) -> Option<ThematicRole> {
        match self {
            SemanticArgument::ThematicRole { role, .. } => Some(*role),
            _ => None,
        }
    }
}

/// Parse an event variable such as `E`, `e2`, `during(E)` or `result(E1)`.
///
/// A bare `E` is the first event, `E1`. Anything unparseable is reported
/// and treated as `E1`.
fn parse_event(value: &str) -> (EventRelation, String) {
    let lower = value.trim().to_ascii_lowercase();
    let (relation, rest) = [
        EventRelation::During,
        EventRelation::Start,
        EventRelation::End,
        EventRelation::Result,
    ]
    .into_iter()
    .find_map(|relation| {
        lower
            .strip_prefix(relation.label())
            .map(|rest| (relation, rest))
    })
    .unwrap_or((EventRelation::Event, lower.as_str()));

    let inner = rest
        .strip_prefix('(')
        .and_then(|inner| inner.strip_suffix(')'))
        .unwrap_or(rest);

    match inner.strip_prefix('e') {
        Some("") => (relation, "E1".to_string()),
        Some(digit) if digit.len() == 1 && digit.chars().all(|c| c.is_ascii_digit()) => {
            (relation, format!("E{digit}"))
        }
        _ => {
            tracing::warn!(value, "failed to parse event argument");
            (EventRelation::Event, "E1".to_string())
        }
    }
}

/// A semantic predicate, either a lexicon template or an instantiated copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawPredicate")]
pub struct SemanticPredicate {
    #[serde(rename = "predicate")]
    pub kind: PredicateType,
    pub polarity: bool,
    pub arguments: Vec<SemanticArgument>,
}

impl SemanticPredicate {
    pub fn new(kind: PredicateType, arguments: Vec<SemanticArgument>) -> Self {
        SemanticPredicate {
            kind,
            polarity: true,
            arguments,
        }
    }

    pub fn negated(mut self) -> Self {
        self.polarity = false;
        self
    }

    /// The thematic roles this predicate mentions, in argument order.
    pub fn thematic_roles(&self) -> impl Iterator<Item = ThematicRole> + '_ {
        self.arguments.iter().filter_map(SemanticArgument::thematic_role)
    }
}

/// Lexicon form: `{"predicate": "cause", "polarity": true, "args": [{"type": "Event", "value": "E"}]}`.
#[derive(Debug, Deserialize)]
struct RawPredicate {
    predicate: String,
    #[serde(default = "default_polarity")]
    polarity: bool,
    #[serde(default)]
    args: Vec<RawArgument>,
}

#[derive(Debug, Deserialize)]
struct RawArgument {
    #[serde(rename = "type")]
    kind: String,
    value: String,
}

fn default_polarity() -> bool {
    true
}

impl From<RawPredicate> for SemanticPredicate {
    fn from(raw: RawPredicate) -> Self {
        SemanticPredicate {
            kind: PredicateType::parse_lossy(&raw.predicate),
            polarity: raw.polarity,
            arguments: raw
                .args
                .iter()
                .map(|arg| SemanticArgument::from_lexicon(&arg.kind, &arg.value))
                .collect(),
        }
    }
}

impl fmt::Display for SemanticArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SemanticArgument::Constant { value } => write!(f, "{value}"),
            SemanticArgument::Event {
                relation, id, binding,
            } => match binding {
                Some(class) => write!(f, "{relation}({id} = {class})"),
                None => write!(f, "{relation}({id})"),
            },
            SemanticArgument::ThematicRole { role, binding } => match binding {
                Some(phrase) => write!(f, "{role}({})", phrase.text),
                None => write!(f, "{role}(?)"),
            },
            SemanticArgument::VerbSpecific {
                placeholder,
                binding,
            } => match binding {
                Some(features) => write!(f, "{placeholder}({features})"),
                None => write!(f, "{placeholder}"),
            },
        }
    }
}

impl fmt::Display for SemanticPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.polarity {
            write!(f, "!")?;
        }
        write!(f, "{}[", self.kind)?;
        for (i, argument) in self.arguments.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{argument}")?;
        }
        write!(f, "]")
    }
}
