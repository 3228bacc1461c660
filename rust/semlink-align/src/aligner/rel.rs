use crate::aligner::Aligner;
use crate::context::PbVnAlignment;
use crate::error::AlignError;

/// Aligns the relation phrase with the frame's verb.
pub struct RelAligner;

impl Aligner for RelAligner {
    fn name(&self) -> &'static str {
        "rel"
    }

    fn align(&self, ctx: &mut PbVnAlignment<'_>) -> Result<(), AlignError> {
        let relations: Vec<usize> = ctx
            .alignment
            .sources()
            .filter(|phrase| phrase.is_relation())
            .map(|phrase| phrase.index)
            .collect();
        let verbs: Vec<usize> = ctx
            .frame
            .elements()
            .iter()
            .filter(|element| element.is_verb())
            .map(|element| element.index)
            .collect();

        match (relations.as_slice(), verbs.as_slice()) {
            ([relation], [verb]) => ctx.alignment.add(*relation, *verb),
            _ => Err(AlignError::RelationShape {
                relations: relations.len(),
                verbs: verbs.len(),
            }),
        }
    }
}
