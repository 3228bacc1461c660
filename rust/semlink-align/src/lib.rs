//! # Semlink Align: PropBank to VerbNet Alignment
//!
//! Aligns the PropBank argument spans of a predicate with the syntactic
//! frames of its VerbNet sense, and instantiates the winning frame's
//! semantic predicates over the sentence.
//!
//! ## Core Ideas
//!
//! - **Every frame is a candidate**: the sense class and each ancestor
//!   contribute their frames, and each frame is aligned independently.
//! - **Aligners are stages**: relation, curated role mappings, syntactic
//!   and selectional restrictions, typical-role filling and argument number
//!   repair each add or remove edges over one owned context.
//! - **Scores pick the winner**: aligned phrases first, covered frame
//!   elements second; ties keep the earliest candidate.
//!
//! ## Architecture
//!
//! ```text
//! Proposition → PropBank phrases ─┐
//! Sense → class chain → frames ───┼→ Pipeline (per frame) → Score → best
//!                                 │
//! Lemma → mapped rolesets ────────┘        best → role labels + predicates
//! ```

pub mod aligner;
pub mod alignment;
pub mod config;
pub mod context;
pub mod error;
pub mod extract;
pub mod frame;
pub mod label;
pub mod phrase;
pub mod prop;
pub mod proposition;
pub mod score;
pub mod search;
pub mod token;

#[cfg(test)]
mod testing;

pub use aligner::{Aligner, Pipeline};
pub use alignment::{Alignment, Indexed};
pub use config::{AlignerConfig, PipelineKind};
pub use context::{Adjustment, PbVnAlignment};
pub use error::AlignError;
pub use extract::extract_predicates;
pub use frame::{FrameElement, FramePhrase, SyntacticFrame, SyntaxType};
pub use label::VerbNetAligner;
pub use phrase::PropBankPhrase;
pub use prop::{RoleLabel, VerbNetProp};
pub use proposition::{Argument, Proposition};
pub use score::AlignmentScore;
pub use search::best_alignment;
pub use token::{Token, tokenize};
