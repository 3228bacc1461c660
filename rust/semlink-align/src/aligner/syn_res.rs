use crate::aligner::Aligner;
use crate::context::PbVnAlignment;
use crate::error::AlignError;

/// Removes edges whose noun phrase is governed by a preposition that does
/// not accept the preposition opening the PropBank phrase.
pub struct SynResAligner;

impl Aligner for SynResAligner {
    fn name(&self) -> &'static str {
        "syn-res"
    }

    fn align(&self, ctx: &mut PbVnAlignment<'_>) -> Result<(), AlignError> {
        let mut invalid = Vec::new();
        for phrase in ctx.alignment.source_phrases(true) {
            let Some(preposition) = phrase.preposition() else {
                continue;
            };
            for target in ctx.alignment.aligned_targets(phrase.index) {
                let governing = target.noun_phrase().and_then(|np| np.preposition.as_ref());
                if governing.is_some_and(|slot| !slot.accepts(preposition)) {
                    invalid.push((phrase.index, target.index));
                }
            }
        }
        for (source, target) in invalid {
            ctx.alignment.remove(source, target);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Fixture, edges};
    use pretty_assertions::assert_eq;
    use semlink_lexicon::{Preposition, ThematicRole};

    fn fixture() -> Fixture {
        Fixture::new(
            "John threw the ball out of the window to Mary",
            &["B-A0", "B-V", "B-A1", "I-A1", "B-A2", "I-A2", "I-A2", "I-A2", "B-A3", "I-A3"],
        )
        .frame(|f| {
            f.np(ThematicRole::Agent)
                .verb()
                .np(ThematicRole::Theme)
                .prep(&[Preposition::To])
                .np(ThematicRole::Destination)
                .prep(&[Preposition::From, Preposition::OutOf])
                .np(ThematicRole::Source)
        })
    }

    #[test]
    fn removes_edges_with_mismatched_prepositions() {
        let fixture = fixture();
        let mut ctx = fixture.context();
        // "out of the window" -> Destination (to), "to Mary" -> Source (from|out_of)
        ctx.alignment.add(3, 3).unwrap();
        ctx.alignment.add(4, 4).unwrap();
        ctx.alignment.add(2, 2).unwrap();
        SynResAligner.align(&mut ctx).unwrap();
        assert_eq!(edges(&ctx), vec![("A1".to_string(), "Theme".to_string())]);
    }

    #[test]
    fn keeps_edges_with_accepted_prepositions() {
        let fixture = fixture();
        let mut ctx = fixture.context();
        ctx.alignment.add(3, 4).unwrap();
        ctx.alignment.add(4, 3).unwrap();
        SynResAligner.align(&mut ctx).unwrap();
        assert_eq!(ctx.alignment.edges(), &[(3, 4), (4, 3)]);
    }

    #[test]
    fn is_idempotent() {
        let fixture = fixture();
        let mut ctx = fixture.context();
        ctx.alignment.add(3, 3).unwrap();
        ctx.alignment.add(4, 3).unwrap();
        ctx.alignment.add(0, 0).unwrap();
        SynResAligner.align(&mut ctx).unwrap();
        let once = ctx.alignment.edges().to_vec();
        SynResAligner.align(&mut ctx).unwrap();
        assert_eq!(ctx.alignment.edges(), once.as_slice());
        assert_eq!(once, vec![(4, 3), (0, 0)]);
    }
}
