use std::collections::BTreeMap;

use semlink_lexicon::{ArgNumber, FunctionTag, Preposition, ThematicRole};

use crate::aligner::Aligner;
use crate::context::PbVnAlignment;
use crate::error::AlignError;
use crate::phrase::PropBankPhrase;

/// How liberal the role votes are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelResMode {
    Strict,
    /// Adds broader preposition votes and falls back to any noun phrase of
    /// the top-ranked role's family.
    Permissive,
}

/// Aligns unaligned phrases by voting for plausible thematic roles from
/// surface cues: the opening preposition, cardinal numbers, `where`, the
/// function tag and the argument number.
pub struct SelResAligner {
    mode: SelResMode,
}

impl SelResAligner {
    pub fn strict() -> Self {
        SelResAligner {
            mode: SelResMode::Strict,
        }
    }

    pub fn permissive() -> Self {
        SelResAligner {
            mode: SelResMode::Permissive,
        }
    }

    /// Candidate roles for a phrase, most votes first. Equal counts keep
    /// role declaration order.
    pub fn ranked_roles(&self, phrase: &PropBankPhrase) -> Vec<ThematicRole> {
        let mut votes: BTreeMap<ThematicRole, usize> = BTreeMap::new();
        let mut vote = |roles: &[ThematicRole]| {
            for role in roles {
                *votes.entry(*role).or_default() += 1;
            }
        };

        let preposition = phrase.preposition();
        let cardinal = phrase.has_cardinal();
        use ThematicRole::*;

        if let Some(preposition) = preposition {
            match preposition {
                Preposition::To => vote(&[Destination, Beneficiary, Recipient, Goal, Result]),
                Preposition::Towards | Preposition::Onto => vote(&[Destination]),
                Preposition::From => vote(&[InitialLocation, InitialState, Source, Material]),
                Preposition::Into => vote(&[Product, Result, Predicate]),
                Preposition::For if cardinal => vote(&[Asset]),
                Preposition::For => vote(&[Beneficiary]),
                Preposition::As => vote(&[Attribute]),
                Preposition::About => vote(&[Topic, Stimulus]),
                Preposition::With => vote(&[CoAgent, CoPatient, CoTheme, Instrument]),
                Preposition::OutOf => vote(&[Material]),
                Preposition::By if cardinal => vote(&[Extent]),
                other if other.is_trajectory() => vote(&[Trajectory]),
                _ => {}
            }

            if self.mode == SelResMode::Permissive {
                if preposition.maybe_destination() {
                    vote(&[Destination, Goal]);
                }
                if preposition == Preposition::To {
                    vote(&[Product, Result, Predicate]);
                }
                if preposition.maybe_location() {
                    vote(&[Location]);
                }
                if preposition.is_trajectory() || preposition == Preposition::From {
                    vote(&[Direction, Trajectory]);
                }
            }
        }

        if cardinal {
            vote(&[Asset]);
        }
        if phrase
            .first_lemma()
            .is_some_and(|lemma| lemma.eq_ignore_ascii_case("where"))
        {
            vote(&[Destination, InitialLocation, Location]);
        }

        match phrase.function_tag() {
            FunctionTag::Tmp => vote(&[Time]),
            FunctionTag::Dir => {
                if preposition != Some(Preposition::From) {
                    vote(&[Destination]);
                }
                vote(&[Path, Trajectory, Direction]);
            }
            _ => {}
        }

        if phrase.number() == ArgNumber::A0 {
            vote(&[Agent]);
        }

        let mut ranked: Vec<(ThematicRole, usize)> = votes.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.into_iter().map(|(role, _)| role).collect()
    }

    fn select(&self, ctx: &PbVnAlignment<'_>, ranked: &[ThematicRole]) -> Option<usize> {
        let exact = ranked
            .iter()
            .filter_map(|role| ctx.frame.by_role(*role))
            .find(|target| !ctx.alignment.aligned_target(*target));
        if exact.is_some() || self.mode == SelResMode::Strict {
            return exact;
        }

        let family = ranked.first().and_then(ThematicRole::family)?;
        ctx.frame
            .elements()
            .iter()
            .filter(|element| element.role().and_then(|role| role.family()) == Some(family))
            .map(|element| element.index)
            .find(|target| !ctx.alignment.aligned_target(*target))
    }
}

impl Aligner for SelResAligner {
    fn name(&self) -> &'static str {
        match self.mode {
            SelResMode::Strict => "sel-res",
            SelResMode::Permissive => "sel-res-permissive",
        }
    }

    fn align(&self, ctx: &mut PbVnAlignment<'_>) -> Result<(), AlignError> {
        let unaligned: Vec<usize> = ctx
            .alignment
            .source_phrases(false)
            .into_iter()
            .map(|phrase| phrase.index)
            .collect();

        for source in unaligned {
            let Some(phrase) = ctx.alignment.source(source) else {
                continue;
            };
            let ranked = self.ranked_roles(phrase);
            if let Some(target) = self.select(ctx, &ranked) {
                ctx.alignment.add(source, target)?;
            }
        }

        // an Asset needs a number
        if let Some(asset) = ctx.frame.by_role(ThematicRole::Asset) {
            let numberless = ctx
                .alignment
                .get_source(asset)
                .filter(|source| !source.has_cardinal())
                .map(|source| source.index);
            if let Some(source) = numberless {
                ctx.alignment.remove(source, asset);
            }
        }
        Ok(())
    }
}
