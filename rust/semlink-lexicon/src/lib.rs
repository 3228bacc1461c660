//! # SemLink lexicon
//!
//! Typed, read-only models of the lexical resources behind PropBank to
//! VerbNet alignment:
//!
//! - [`verbnet`]: the VerbNet class graph, with members, thematic roles and
//!   frames (syntax plus semantic predicate templates).
//! - [`propbank`]: PropBank rolesets and their declared arguments.
//! - [`mapping`]: the curated SemLink table that maps each roleset's
//!   argument numbers to candidate VerbNet roles, per class.
//!
//! Around them sit the closed vocabularies both resources share: argument
//! labels, function tags, thematic roles, prepositions, restrictions and
//! predicate names. Unknown labels in resource files map to a sentinel
//! member and are reported through `tracing`; malformed structure is a
//! [`LexiconError`].
//!
//! All resources load from JSON and are meant to be loaded once and shared
//! (they are `Send + Sync`).

pub mod vocab;

pub mod argument;
pub mod error;
pub mod mapping;
pub mod preposition;
pub mod propbank;
pub mod restriction;
pub mod role;
pub mod semantics;
pub mod verbnet;

pub use argument::{ArgNumber, FunctionTag, PropBankArg};
pub use error::LexiconError;
pub use mapping::{MappedRoleset, PbVnMapping, PbVnMappings};
pub use preposition::Preposition;
pub use propbank::{PbRole, PropBank, Roleset};
pub use restriction::{LexType, PrepRestriction, Restrictions, SynRestriction};
pub use role::{RoleFamily, ThematicRole};
pub use semantics::{EventRelation, PhraseRef, PredicateType, SemanticArgument, SemanticPredicate};
pub use verbnet::{ClassBuilder, ClassId, Frame, FrameBuilder, Member, SyntaxElement, VerbNet, VerbNetClass};
