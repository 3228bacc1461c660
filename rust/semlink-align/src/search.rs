//! Candidate search over the frames of a predicate's sense.
//!
//! Every frame of the sense class and of each of its ancestors is a
//! candidate. Each candidate gets a fresh [`PbVnAlignment`], runs the whole
//! pipeline, and is scored; the best score wins and the first candidate
//! seen wins a tie.

use semlink_lexicon::{MappedRoleset, PbVnMappings, VerbNet, VerbNetClass};

use crate::aligner::Pipeline;
use crate::context::PbVnAlignment;
use crate::proposition::Proposition;
use crate::score::AlignmentScore;

/// Curated rolesets for `lemma` over a class chain, without repeats.
pub fn applicable_rolesets<'a>(
    mappings: &'a PbVnMappings,
    lemma: &str,
    chain: &[&'a VerbNetClass],
) -> Vec<&'a MappedRoleset> {
    let mut rolesets: Vec<&MappedRoleset> = Vec::new();
    for class in chain {
        for roleset in mappings.rolesets(lemma, &class.id) {
            if !rolesets.contains(&roleset) {
                rolesets.push(roleset);
            }
        }
    }
    rolesets
}

/// The best alignment of `proposition` against the frames of its sense,
/// or `None` when it has no sense or the sense has no usable frame.
pub fn best_alignment<'a>(
    pipeline: &Pipeline,
    proposition: &'a Proposition,
    verbnet: &'a VerbNet,
    mappings: &'a PbVnMappings,
) -> Option<PbVnAlignment<'a>> {
    let sense = proposition.sense.as_ref()?;
    let chain = verbnet.ancestors(sense);
    if chain.is_empty() {
        tracing::warn!(%sense, "sense is not a VerbNet class");
        return None;
    }
    let lemma = proposition.lemma().unwrap_or_default();
    let rolesets = applicable_rolesets(mappings, lemma, &chain);

    let candidates = chain
        .iter()
        .copied()
        .flat_map(|class| class.frames.iter().map(move |frame| (class, frame)));

    let scored = candidates.filter_map(|(class, frame)| {
        let aligned = PbVnAlignment::new(proposition, chain.clone(), class, frame, rolesets.clone())
            .and_then(|mut ctx| pipeline.run(&mut ctx).map(|()| ctx));
        match aligned {
            Ok(ctx) => {
                let score = ctx.score();
                tracing::debug!(
                    class = %class.id,
                    frame = %ctx.frame,
                    %score,
                    "scored candidate"
                );
                Some((score, ctx))
            }
            Err(error) => {
                tracing::warn!(class = %class.id, frame = %frame.description, %error, "discarding candidate");
                None
            }
        }
    });

    first_max(scored).map(|(_, ctx)| ctx)
}

/// The highest scored item; ties keep the earliest.
fn first_max<T>(items: impl IntoIterator<Item = (AlignmentScore, T)>) -> Option<(AlignmentScore, T)> {
    items.into_iter().fold(None, |best, (score, item)| match best {
        Some((best_score, best_item)) if best_score >= score => Some((best_score, best_item)),
        _ => Some((score, item)),
    })
}
