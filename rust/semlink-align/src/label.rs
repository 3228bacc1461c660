//! Labeling propositions with VerbNet roles and semantics.

use std::sync::Arc;

use semlink_lexicon::{PbVnMappings, ThematicRole, VerbNet};

use crate::aligner::Pipeline;
use crate::config::AlignerConfig;
use crate::extract::extract_predicates;
use crate::prop::{RoleLabel, VerbNetProp};
use crate::proposition::Proposition;
use crate::search::best_alignment;

/// Aligns propositions against VerbNet and labels their arguments.
///
/// The lexicon resources are shared and read-only, so one aligner can
/// serve any number of threads.
pub struct VerbNetAligner {
    verbnet: Arc<VerbNet>,
    mappings: Arc<PbVnMappings>,
    pipeline: Pipeline,
}

impl VerbNetAligner {
    pub fn new(verbnet: Arc<VerbNet>, mappings: Arc<PbVnMappings>, config: &AlignerConfig) -> Self {
        VerbNetAligner::with_pipeline(verbnet, mappings, Pipeline::from_config(config))
    }

    pub fn with_pipeline(
        verbnet: Arc<VerbNet>,
        mappings: Arc<PbVnMappings>,
        pipeline: Pipeline,
    ) -> Self {
        VerbNetAligner {
            verbnet,
            mappings,
            pipeline,
        }
    }

    /// Label every proposition of a sentence, in order.
    pub fn align(&self, props: &[Proposition]) -> Vec<VerbNetProp> {
        props.iter().map(|prop| self.align_one(prop)).collect()
    }

    /// Label one proposition. Without a sense, or when no frame of the
    /// sense aligns, only the PropBank labels are filled in.
    pub fn align_one(&self, prop: &Proposition) -> VerbNetProp {
        let mut labeled = VerbNetProp {
            tokens: prop.tokens.iter().map(|token| token.text.clone()).collect(),
            relation: prop.relation().map(|relation| relation.start),
            lemma: prop.lemma().map(str::to_string),
            sense: prop.sense.clone(),
            class: None,
            frame: None,
            roleset: None,
            labels: prop
                .arguments
                .iter()
                .map(|argument| RoleLabel {
                    arg: argument.label,
                    start: argument.start,
                    end: argument.end,
                    thematic_role: None,
                    description: None,
                })
                .collect(),
            predicates: Vec::new(),
        };

        let Some(ctx) = best_alignment(&self.pipeline, prop, &self.verbnet, &self.mappings) else {
            return labeled;
        };
        tracing::debug!(
            lemma = labeled.lemma.as_deref().unwrap_or_default(),
            class = %ctx.class.id,
            score = %ctx.score(),
            "aligned proposition"
        );

        let roleset = ctx.winning_roleset();
        for (index, label) in labeled.labels.iter_mut().enumerate() {
            label.description = roleset
                .and_then(|roleset| roleset.description(label.arg.number))
                .filter(|description| !description.is_empty())
                .map(str::to_string);
            label.thematic_role = if label.arg.number.is_rel() {
                Some(ThematicRole::Verb)
            } else {
                ctx.aligned_noun_phrase(index).and_then(|target| target.role())
            };
        }

        labeled.predicates = extract_predicates(&ctx, prop.lemma().unwrap_or_default());
        labeled.class = Some(ctx.class.id.clone());
        labeled.frame = Some(if ctx.vn_frame.description.is_empty() {
            ctx.frame.to_string()
        } else {
            ctx.vn_frame.description.clone()
        });
        labeled.roleset = roleset.map(|roleset| roleset.id.clone());
        labeled
    }
}
