//! The per-candidate alignment context.
//!
//! A [`PbVnAlignment`] is created fresh for every (class, frame) candidate
//! and threaded through the aligner pipeline. It owns the alignment between
//! the proposition's phrases and the frame's elements, and borrows the
//! read-only lexicon values the candidate was built from.

use semlink_lexicon::{ArgNumber, Frame, MappedRoleset, VerbNetClass};

use crate::alignment::Alignment;
use crate::error::AlignError;
use crate::frame::{FramePhrase, SyntacticFrame};
use crate::phrase::PropBankPhrase;
use crate::proposition::Proposition;
use crate::score::AlignmentScore;

/// A record of one argument number adjustment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adjustment {
    /// The phrase as it was before the adjustment.
    pub original: PropBankPhrase,
    pub adjusted: ArgNumber,
}

#[derive(Debug, Clone)]
pub struct PbVnAlignment<'a> {
    pub proposition: &'a Proposition,
    /// The predicted sense class followed by its ancestors.
    pub sense: Vec<&'a VerbNetClass>,
    /// The class this candidate frame belongs to.
    pub class: &'a VerbNetClass,
    pub vn_frame: &'a Frame,
    pub frame: SyntacticFrame,
    /// Curated rolesets applicable to the proposition, in preference order.
    pub rolesets: Vec<&'a MappedRoleset>,
    pub alignment: Alignment<PropBankPhrase, FramePhrase>,
    /// Position in `rolesets` of the roleset whose mapping won.
    pub roleset: Option<usize>,
    pub adjustments: Vec<Adjustment>,
}

impl<'a> PbVnAlignment<'a> {
    pub fn new(
        proposition: &'a Proposition,
        sense: Vec<&'a VerbNetClass>,
        class: &'a VerbNetClass,
        vn_frame: &'a Frame,
        rolesets: Vec<&'a MappedRoleset>,
    ) -> Result<Self, AlignError> {
        let frame = SyntacticFrame::from_frame(vn_frame);
        let alignment = Alignment::new(
            PropBankPhrase::from_proposition(proposition)?,
            frame.elements().iter().cloned(),
        );
        Ok(PbVnAlignment {
            proposition,
            sense,
            class,
            vn_frame,
            frame,
            rolesets,
            alignment,
            roleset: None,
            adjustments: Vec::new(),
        })
    }

    /// The roleset selected by role mapping, if any.
    pub fn winning_roleset(&self) -> Option<&'a MappedRoleset> {
        self.roleset.and_then(|i| self.rolesets.get(i).copied())
    }

    /// The sense class itself, before its ancestors.
    pub fn sense_class(&self) -> Option<&'a VerbNetClass> {
        self.sense.first().copied()
    }

    pub fn score(&self) -> AlignmentScore {
        AlignmentScore::of(&self.alignment)
    }

    /// The first noun phrase element aligned to a source phrase.
    pub fn aligned_noun_phrase(&self, source: usize) -> Option<&FramePhrase> {
        self.alignment
            .aligned_targets(source)
            .into_iter()
            .find(|target| target.noun_phrase().is_some())
    }
}
