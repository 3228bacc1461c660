use std::collections::HashSet;

use semlink_lexicon::{MappedRoleset, ThematicRole};

use crate::aligner::Aligner;
use crate::context::PbVnAlignment;
use crate::error::AlignError;

/// Aligns phrases through the curated PropBank to VerbNet role mappings.
///
/// Every applicable roleset proposes a trial alignment of the still
/// unaligned phrases; the trial with the most pairs is committed and its
/// roleset becomes the winning roleset. Equal-sized trials resolve to the
/// earlier roleset.
#[derive(Default)]
pub struct RoleMappingAligner;

impl RoleMappingAligner {
    fn trial(ctx: &PbVnAlignment<'_>, roleset: &MappedRoleset) -> Vec<(usize, usize)> {
        let mut claimed = HashSet::new();
        let mut pairs = Vec::new();
        for phrase in ctx.alignment.source_phrases(false) {
            let target = roleset
                .candidates(phrase.number())
                .iter()
                .filter_map(|name| ThematicRole::parse(name))
                .filter_map(|role| ctx.frame.by_role(role))
                // a target aligned by an earlier stage stays with its phrase,
                // which matters when adjustment runs role mapping again
                .find(|target| {
                    !claimed.contains(target) && !ctx.alignment.aligned_target(*target)
                });
            if let Some(target) = target {
                claimed.insert(target);
                pairs.push((phrase.index, target));
            }
        }
        pairs
    }
}

impl Aligner for RoleMappingAligner {
    fn name(&self) -> &'static str {
        "role-mapping"
    }

    fn align(&self, ctx: &mut PbVnAlignment<'_>) -> Result<(), AlignError> {
        let mut best: Option<(usize, Vec<(usize, usize)>)> = None;
        for (position, roleset) in ctx.rolesets.iter().enumerate() {
            let trial = RoleMappingAligner::trial(ctx, roleset);
            let best_len = best.as_ref().map_or(0, |(_, pairs)| pairs.len());
            if trial.len() > best_len {
                best = Some((position, trial));
            }
        }

        if let Some((position, pairs)) = best {
            tracing::trace!(
                roleset = %ctx.rolesets[position].id,
                pairs = pairs.len(),
                "role mapping"
            );
            for (source, target) in pairs {
                ctx.alignment.add(source, target)?;
            }
            ctx.roleset = Some(position);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Fixture, edges, roleset};
    use pretty_assertions::assert_eq;
    use semlink_lexicon::ArgNumber::*;

    fn give() -> Fixture {
        Fixture::new("John gave Mary a book", &["B-A0", "B-V", "B-A2", "B-A1", "I-A1"]).frame(|f| {
            f.np(ThematicRole::Agent)
                .verb()
                .np(ThematicRole::Recipient)
                .np(ThematicRole::Theme)
        })
    }

    fn pairs(list: &[(&str, &str)]) -> Vec<(String, String)> {
        list.iter()
            .map(|(s, t)| (s.to_string(), t.to_string()))
            .collect()
    }

    #[test]
    fn largest_trial_wins() {
        let fixture = give()
            .roleset(roleset("give.02", &[(A0, "Agent")]))
            .roleset(roleset(
                "give.01",
                &[(A0, "Agent"), (A1, "Theme"), (A2, "Recipient")],
            ));
        let mut ctx = fixture.context();
        RoleMappingAligner.align(&mut ctx).unwrap();

        assert_eq!(ctx.winning_roleset().map(|r| r.id.as_str()), Some("give.01"));
        assert_eq!(
            edges(&ctx),
            pairs(&[("A0", "Agent"), ("A2", "Recipient"), ("A1", "Theme")])
        );
    }

    #[test]
    fn equal_trials_keep_the_first_roleset() {
        let fixture = give()
            .roleset(roleset("give.01", &[(A0, "Agent")]))
            .roleset(roleset("give.02", &[(A1, "Theme")]));
        let mut ctx = fixture.context();
        RoleMappingAligner.align(&mut ctx).unwrap();
        assert_eq!(ctx.winning_roleset().map(|r| r.id.as_str()), Some("give.01"));
        assert_eq!(edges(&ctx), pairs(&[("A0", "Agent")]));
    }

    #[test]
    fn candidates_are_tried_in_order() {
        let fixture = give().roleset(roleset(
            "give.01",
            &[(A2, "Bogus"), (A2, "Destination"), (A2, "Recipient"), (A1, "Recipient"), (A1, "Theme")],
        ));
        let mut ctx = fixture.context();
        RoleMappingAligner.align(&mut ctx).unwrap();
        // A2 claims Recipient first, so A1 falls through to Theme
        assert_eq!(edges(&ctx), pairs(&[("A2", "Recipient"), ("A1", "Theme")]));
    }

    #[test]
    fn already_aligned_targets_are_not_reused() {
        let fixture = give().roleset(roleset("give.01", &[(A0, "Agent"), (A1, "Agent")]));
        let mut ctx = fixture.context();
        ctx.alignment.add(0, 0).unwrap();
        RoleMappingAligner.align(&mut ctx).unwrap();
        assert_eq!(edges(&ctx), pairs(&[("A0", "Agent")]));
        assert_eq!(ctx.roleset, None);
    }

    #[test]
    fn no_rolesets_no_alignment() {
        let fixture = give();
        let mut ctx = fixture.context();
        RoleMappingAligner.align(&mut ctx).unwrap();
        assert!(ctx.alignment.edges().is_empty());
        assert_eq!(ctx.roleset, None);
    }
}
