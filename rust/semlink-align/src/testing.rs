//! Fixtures shared by the aligner unit tests.

use semlink_lexicon::{
    ArgNumber, ClassBuilder, ClassId, FrameBuilder, MappedRoleset, ThematicRole, VerbNetClass,
};

use crate::context::PbVnAlignment;
use crate::proposition::Proposition;
use crate::token::tokenize;

pub(crate) struct Fixture {
    pub prop: Proposition,
    pub class: VerbNetClass,
    pub ancestors: Vec<VerbNetClass>,
    pub rolesets: Vec<MappedRoleset>,
}

impl Fixture {
    /// A proposition over whitespace tokens with one BIO tag per token.
    pub fn new(text: &str, tags: &[&str]) -> Self {
        Fixture {
            prop: Proposition::from_tags(tokenize(text), tags).unwrap(),
            class: ClassBuilder::new("test-1.1").build(),
            ancestors: Vec::new(),
            rolesets: Vec::new(),
        }
    }

    pub fn class_id(mut self, id: &str) -> Self {
        self.class.id = ClassId::new(id);
        self
    }

    pub fn declare(mut self, role: ThematicRole) -> Self {
        self.class.roles.push(role);
        self
    }

    pub fn ancestor(mut self, class: VerbNetClass) -> Self {
        self.ancestors.push(class);
        self
    }

    pub fn frame(mut self, build: impl FnOnce(FrameBuilder) -> FrameBuilder) -> Self {
        self.class.frames.push(build(FrameBuilder::new("test")).build());
        self
    }

    pub fn roleset(mut self, roleset: MappedRoleset) -> Self {
        self.rolesets.push(roleset);
        self
    }

    pub fn pos(mut self, token: usize, pos: &str) -> Self {
        self.prop.tokens[token].pos = pos.to_string();
        self
    }

    pub fn lemma(mut self, token: usize, lemma: &str) -> Self {
        self.prop.tokens[token].lemma = lemma.to_string();
        self
    }

    /// A context for the first frame of the class.
    pub fn context(&self) -> PbVnAlignment<'_> {
        let sense = std::iter::once(&self.class)
            .chain(self.ancestors.iter())
            .collect();
        PbVnAlignment::new(
            &self.prop,
            sense,
            &self.class,
            &self.class.frames[0],
            self.rolesets.iter().collect(),
        )
        .unwrap()
    }
}

/// A mapped roleset from `(number, role)` pairs.
pub(crate) fn roleset(id: &str, roles: &[(ArgNumber, &str)]) -> MappedRoleset {
    roles
        .iter()
        .fold(MappedRoleset::new(id), |roleset, (number, role)| {
            roleset.map(*number, *role)
        })
}

/// Edges as `(phrase label, frame role or element)` pairs, for readable
/// assertions.
pub(crate) fn edges(ctx: &PbVnAlignment<'_>) -> Vec<(String, String)> {
    ctx.alignment
        .edges()
        .iter()
        .map(|(s, t)| {
            let source = ctx
                .alignment
                .source(*s)
                .map(|phrase| phrase.arg.to_string())
                .unwrap_or_default();
            let target = ctx
                .alignment
                .target(*t)
                .map(|phrase| match phrase.role() {
                    Some(role) => role.to_string(),
                    None => phrase.to_string(),
                })
                .unwrap_or_default();
            (source, target)
        })
        .collect()
}
