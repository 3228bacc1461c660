//! Instantiation of a frame's semantic predicate templates.

use std::collections::HashMap;

use semlink_lexicon::{PredicateType, SemanticArgument, SemanticPredicate, ThematicRole};

use crate::context::PbVnAlignment;

/// Copy the predicates of the candidate's frame and bind their arguments.
///
/// `equals(X, Y)` predicates are not emitted; they make `X` and `Y`
/// interchangeable, so a role with no frame element of its own binds to the
/// phrase of its equivalent. Events bind to the predicted sense class, even
/// when the frame was inherited from an ancestor, and verb-specific
/// placeholders to the features of the member named `lemma`.
pub fn extract_predicates(ctx: &PbVnAlignment<'_>, lemma: &str) -> Vec<SemanticPredicate> {
    let templates = &ctx.vn_frame.semantics;

    let mut equivalent: HashMap<ThematicRole, ThematicRole> = HashMap::new();
    for predicate in templates.iter().filter(|p| p.kind == PredicateType::Equals) {
        if let [first, second] = predicate.thematic_roles().collect::<Vec<_>>()[..] {
            equivalent.insert(first, second);
            equivalent.insert(second, first);
        }
    }

    let features = ctx
        .sense
        .iter()
        .find_map(|class| class.member(lemma))
        .map(|member| member.features.join(", "))
        .filter(|features| !features.is_empty());

    templates
        .iter()
        .filter(|predicate| predicate.kind != PredicateType::Equals)
        .map(|template| {
            let mut predicate = template.clone();
            for argument in &mut predicate.arguments {
                match argument {
                    SemanticArgument::Event { binding, .. } => {
                        *binding = Some(ctx.sense_class().unwrap_or(ctx.class).id.clone());
                    }
                    SemanticArgument::ThematicRole { role, binding } => {
                        let target = ctx
                            .frame
                            .by_role(*role)
                            .or_else(|| equivalent.get(role).and_then(|r| ctx.frame.by_role(*r)));
                        *binding = target
                            .and_then(|target| ctx.alignment.get_source(target))
                            .map(|phrase| phrase.to_ref());
                    }
                    SemanticArgument::VerbSpecific { binding, .. } => {
                        if let Some(features) = &features {
                            *binding = Some(features.clone());
                        }
                    }
                    SemanticArgument::Constant { .. } => {}
                }
            }
            predicate
        })
        .collect()
}
