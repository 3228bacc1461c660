//! The aligner pipeline.
//!
//! Alignment of one candidate frame is a fixed sequence of independent
//! stages over a shared [`PbVnAlignment`]. Each stage only adds edges for
//! phrases earlier stages left unaligned, or removes edges that violate a
//! constraint; none of them changes the phrase universes.
//!
//! ```text
//! standard: Rel → RoleMapping → SynRes → SelRes → Filler → SelRes(permissive)
//! extended: standard → SynRes → AdjustInvalidRoles
//! ```

mod adjust;
mod filler;
mod rel;
mod role_mapping;
mod sel_res;
mod syn_res;

pub use adjust::AdjustInvalidRoles;
pub use filler::FillerAligner;
pub use rel::RelAligner;
pub use role_mapping::RoleMappingAligner;
pub use sel_res::{SelResAligner, SelResMode};
pub use syn_res::SynResAligner;

use crate::config::{AlignerConfig, PipelineKind};
use crate::context::PbVnAlignment;
use crate::error::AlignError;

/// One alignment strategy.
pub trait Aligner: Send + Sync {
    fn name(&self) -> &'static str;

    fn align(&self, ctx: &mut PbVnAlignment<'_>) -> Result<(), AlignError>;
}

/// An ordered list of aligners.
pub struct Pipeline {
    stages: Vec<Box<dyn Aligner>>,
}

impl Pipeline {
    pub fn new(stages: Vec<Box<dyn Aligner>>) -> Self {
        Pipeline { stages }
    }

    pub fn standard(config: &AlignerConfig) -> Self {
        Pipeline::new(vec![
            Box::new(RelAligner),
            Box::new(RoleMappingAligner),
            Box::new(SynResAligner),
            Box::new(SelResAligner::strict()),
            Box::new(FillerAligner::new(config.non_agentive_family.clone())),
            Box::new(SelResAligner::permissive()),
        ])
    }

    pub fn extended(config: &AlignerConfig) -> Self {
        let mut pipeline = Pipeline::standard(config);
        pipeline.stages.push(Box::new(SynResAligner));
        pipeline.stages.push(Box::new(AdjustInvalidRoles::default()));
        pipeline
    }

    pub fn from_config(config: &AlignerConfig) -> Self {
        match config.pipeline {
            PipelineKind::Standard => Pipeline::standard(config),
            PipelineKind::Extended => Pipeline::extended(config),
        }
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    /// Run every stage in order. The first contract violation stops the run.
    pub fn run(&self, ctx: &mut PbVnAlignment<'_>) -> Result<(), AlignError> {
        for stage in &self.stages {
            stage.align(ctx)?;
            tracing::trace!(
                stage = stage.name(),
                aligned = ctx.alignment.source_phrases(true).len(),
                "stage complete"
            );
        }
        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Pipeline::from_config(&AlignerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::Indexed;
    use crate::testing::{Fixture, roleset};
    use pretty_assertions::assert_eq;
    use semlink_lexicon::ArgNumber::*;
    use semlink_lexicon::{Preposition, ThematicRole};

    #[test]
    fn pipelines_run_in_fixed_order() {
        let config = AlignerConfig::default();
        assert_eq!(
            Pipeline::standard(&config).names(),
            vec!["rel", "role-mapping", "syn-res", "sel-res", "filler", "sel-res-permissive"]
        );
        assert_eq!(
            Pipeline::default().names(),
            vec![
                "rel",
                "role-mapping",
                "syn-res",
                "sel-res",
                "filler",
                "sel-res-permissive",
                "syn-res",
                "adjust-invalid-roles"
            ]
        );
    }

    #[test]
    fn no_stage_changes_the_phrase_universes() {
        let fixture = Fixture::new(
            "John gave a book to Mary yesterday",
            &["B-A0", "B-V", "B-A1", "I-A1", "B-A3", "I-A3", "B-ARGM-TMP"],
        )
        .declare(ThematicRole::Agent)
        .frame(|f| {
            f.np(ThematicRole::Agent)
                .verb()
                .np(ThematicRole::Theme)
                .prep(&[Preposition::To])
                .np(ThematicRole::Recipient)
        })
        .roleset(roleset(
            "give.01",
            &[(A0, "Agent"), (A1, "Theme"), (A2, "Recipient")],
        ));
        let mut ctx = fixture.context();
        let sources: Vec<usize> = ctx.alignment.sources().map(Indexed::index).collect();
        let targets: Vec<usize> = ctx.alignment.targets().map(Indexed::index).collect();

        for stage in &Pipeline::extended(&AlignerConfig::default()).stages {
            stage.align(&mut ctx).unwrap();

            let after: Vec<usize> = ctx.alignment.sources().map(Indexed::index).collect();
            assert_eq!(after, sources, "sources changed by {}", stage.name());
            let after: Vec<usize> = ctx.alignment.targets().map(Indexed::index).collect();
            assert_eq!(after, targets, "targets changed by {}", stage.name());

            let mut covered: Vec<usize> = ctx
                .alignment
                .source_phrases(true)
                .into_iter()
                .chain(ctx.alignment.source_phrases(false))
                .map(Indexed::index)
                .collect();
            covered.sort_unstable();
            assert_eq!(covered, sources, "partition broken by {}", stage.name());
        }
    }
}
