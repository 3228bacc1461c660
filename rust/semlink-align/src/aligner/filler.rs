use semlink_lexicon::{ArgNumber, ThematicRole};

use crate::aligner::Aligner;
use crate::context::PbVnAlignment;
use crate::error::AlignError;

/// Fills remaining numbered arguments with the typical role for their
/// number: `A0` the agent, `A1` the theme or patient, `A3` a starting point
/// and `A4` an ending point.
pub struct FillerAligner {
    non_agentive_family: String,
}

impl FillerAligner {
    pub fn new(non_agentive_family: impl Into<String>) -> Self {
        FillerAligner {
            non_agentive_family: non_agentive_family.into(),
        }
    }

    /// Whether `A0` of this sense is a theme rather than an agent: the class
    /// belongs to the non-agentive family and nothing up its ancestor chain
    /// declares an agentive role.
    fn a0_is_theme(&self, ctx: &PbVnAlignment<'_>) -> bool {
        let Some(sense) = ctx.sense_class() else {
            return false;
        };
        sense.id.root().starts_with(&self.non_agentive_family)
            && !ctx
                .sense
                .iter()
                .flat_map(|class| class.roles.iter())
                .any(ThematicRole::is_agentive)
    }
}

impl Aligner for FillerAligner {
    fn name(&self) -> &'static str {
        "filler"
    }

    fn align(&self, ctx: &mut PbVnAlignment<'_>) -> Result<(), AlignError> {
        let a0_is_theme = self.a0_is_theme(ctx);
        let unaligned: Vec<(usize, ArgNumber)> = ctx
            .alignment
            .source_phrases(false)
            .into_iter()
            .map(|phrase| (phrase.index, phrase.number()))
            .collect();

        for (source, number) in unaligned {
            let fits: fn(&ThematicRole) -> bool = match number {
                ArgNumber::A0 if a0_is_theme => |role| *role == ThematicRole::Theme,
                ArgNumber::A0 => |role| *role == ThematicRole::Agent,
                ArgNumber::A1 => |role| matches!(role, ThematicRole::Theme | ThematicRole::Patient),
                ArgNumber::A3 => ThematicRole::is_starting_point,
                ArgNumber::A4 => ThematicRole::is_ending_point,
                _ => continue,
            };
            let target = ctx
                .frame
                .elements()
                .iter()
                .filter(|element| element.role().as_ref().is_some_and(fits))
                .map(|element| element.index)
                .find(|target| !ctx.alignment.aligned_target(*target));
            if let Some(target) = target {
                ctx.alignment.add(source, target)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Fixture, edges};
    use pretty_assertions::assert_eq;
    use semlink_lexicon::ClassBuilder;

    fn pair(source: &str, target: &str) -> (String, String) {
        (source.to_string(), target.to_string())
    }

    fn motion() -> Fixture {
        Fixture::new("the ball rolled", &["B-A0", "I-A0", "B-V"])
            .class_id("roll-51.3.1")
            .declare(ThematicRole::Theme)
            .frame(|f| f.np(ThematicRole::Agent).np(ThematicRole::Theme).verb())
    }

    #[test]
    fn a0_is_the_agent_by_default() {
        let fixture = motion().class_id("roll-9.1");
        let mut ctx = fixture.context();
        FillerAligner::new("51").align(&mut ctx).unwrap();
        assert_eq!(edges(&ctx), vec![pair("A0", "Agent")]);
    }

    #[test]
    fn a0_of_non_agentive_motion_is_the_theme() {
        let fixture = motion();
        let mut ctx = fixture.context();
        FillerAligner::new("51").align(&mut ctx).unwrap();
        assert_eq!(edges(&ctx), vec![pair("A0", "Theme")]);
    }

    #[test]
    fn family_is_matched_against_the_root_number() {
        // the root of roll-51.3.1 is 51, which a subclass family never prefixes
        let fixture = motion();
        let mut ctx = fixture.context();
        FillerAligner::new("51.3").align(&mut ctx).unwrap();
        assert_eq!(edges(&ctx), vec![pair("A0", "Agent")]);
    }

    #[test]
    fn inherited_agent_keeps_a0_agentive() {
        let fixture = motion().ancestor(
            ClassBuilder::new("roll-51.3")
                .role(ThematicRole::Agent)
                .build(),
        );
        let mut ctx = fixture.context();
        FillerAligner::new("51").align(&mut ctx).unwrap();
        assert_eq!(edges(&ctx), vec![pair("A0", "Agent")]);
    }

    #[test]
    fn fills_start_and_end_points_in_frame_order() {
        let fixture = Fixture::new(
            "moved it from Boston to Denver",
            &["B-V", "B-A1", "B-A3", "I-A3", "B-A4", "I-A4"],
        )
        .frame(|f| {
            f.verb()
                .np(ThematicRole::Patient)
                .np(ThematicRole::InitialLocation)
                .np(ThematicRole::Source)
                .np(ThematicRole::Destination)
        });
        let mut ctx = fixture.context();
        FillerAligner::new("51").align(&mut ctx).unwrap();
        assert_eq!(
            edges(&ctx),
            vec![
                pair("A1", "Patient"),
                pair("A3", "Initial_Location"),
                pair("A4", "Destination"),
            ]
        );
    }

    #[test]
    fn is_idempotent() {
        let fixture = Fixture::new("John gave Mary books", &["B-A0", "B-V", "B-A2", "B-A1"])
            .frame(|f| f.np(ThematicRole::Agent).verb().np(ThematicRole::Theme));
        let mut ctx = fixture.context();
        FillerAligner::new("51").align(&mut ctx).unwrap();
        let once = ctx.alignment.edges().to_vec();
        FillerAligner::new("51").align(&mut ctx).unwrap();
        assert_eq!(ctx.alignment.edges(), once.as_slice());
        assert_eq!(once, vec![(0, 0), (3, 2)]);
    }
}
