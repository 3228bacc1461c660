use std::collections::BTreeSet;

use semlink_lexicon::ArgNumber;

use crate::aligner::{Aligner, RoleMappingAligner};
use crate::context::{Adjustment, PbVnAlignment};
use crate::error::AlignError;

/// Repairs one argument number the winning roleset does not declare.
///
/// Labelers sometimes number arguments one too high for the roleset (an
/// `A2` where the roleset only has `A0` and `A1`). The first unaligned
/// phrase whose number is undeclared, and whose next-lower number is
/// declared but not yet used, is replaced by a copy with the lower number,
/// and role mapping runs again. At most one phrase is adjusted per run.
#[derive(Default)]
pub struct AdjustInvalidRoles {
    role_mapping: RoleMappingAligner,
}

impl Aligner for AdjustInvalidRoles {
    fn name(&self) -> &'static str {
        "adjust-invalid-roles"
    }

    fn align(&self, ctx: &mut PbVnAlignment<'_>) -> Result<(), AlignError> {
        let Some(roleset) = ctx.winning_roleset() else {
            return Ok(());
        };
        let declared: BTreeSet<ArgNumber> = roleset.declared().into_iter().collect();
        let used: BTreeSet<ArgNumber> = ctx
            .alignment
            .source_phrases(true)
            .into_iter()
            .map(|phrase| phrase.number())
            .collect();

        let candidate = ctx
            .alignment
            .source_phrases(false)
            .into_iter()
            .filter(|phrase| phrase.number().is_number() && !declared.contains(&phrase.number()))
            .find_map(|phrase| {
                phrase
                    .number()
                    .decrement()
                    .filter(|lower| declared.contains(lower) && !used.contains(lower))
                    .map(|lower| phrase.with_number(lower))
            });

        let Some(adjusted) = candidate else {
            return Ok(());
        };
        let number = adjusted.number();
        let original = ctx.alignment.replace_source(adjusted)?;
        tracing::debug!(
            phrase = %original,
            adjusted = %number,
            roleset = %roleset.id,
            "adjusted argument number"
        );
        ctx.adjustments.push(Adjustment {
            original,
            adjusted: number,
        });
        self.role_mapping.align(ctx)
    }
}
