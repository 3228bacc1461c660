//! A bipartite alignment between two fixed sets of phrases.
//!
//! Both sides are fixed when the alignment is created: phrases are
//! addressed by their stable [`Indexed::index`], and only the edges between
//! them change. Edges keep their insertion order, which decides
//! [`Alignment::get_source`] when a target has more than one source.

use std::fmt;

use indexmap::IndexMap;

use crate::error::AlignError;

/// A phrase with a stable position on its side of an alignment.
pub trait Indexed {
    fn index(&self) -> usize;
}

#[derive(Debug, Clone)]
pub struct Alignment<S, T> {
    sources: IndexMap<usize, S>,
    targets: IndexMap<usize, T>,
    edges: Vec<(usize, usize)>,
}

impl<S: Indexed, T: Indexed> Alignment<S, T> {
    pub fn new(
        sources: impl IntoIterator<Item = S>,
        targets: impl IntoIterator<Item = T>,
    ) -> Self {
        Alignment {
            sources: sources.into_iter().map(|s| (s.index(), s)).collect(),
            targets: targets.into_iter().map(|t| (t.index(), t)).collect(),
            edges: Vec::new(),
        }
    }

    /// Add an edge. Adding an existing edge does nothing.
    pub fn add(&mut self, source: usize, target: usize) -> Result<(), AlignError> {
        if !self.sources.contains_key(&source) {
            return Err(AlignError::UnknownSource { index: source });
        }
        if !self.targets.contains_key(&target) {
            return Err(AlignError::UnknownTarget { index: target });
        }
        if !self.edges.contains(&(source, target)) {
            tracing::trace!(source, target, "align");
            self.edges.push((source, target));
        }
        Ok(())
    }

    /// Remove an edge, returning whether it existed.
    pub fn remove(&mut self, source: usize, target: usize) -> bool {
        let before = self.edges.len();
        self.edges.retain(|edge| *edge != (source, target));
        let removed = self.edges.len() != before;
        if removed {
            tracing::trace!(source, target, "unalign");
        }
        removed
    }

    pub fn source(&self, index: usize) -> Option<&S> {
        self.sources.get(&index)
    }

    pub fn target(&self, index: usize) -> Option<&T> {
        self.targets.get(&index)
    }

    pub fn sources(&self) -> impl Iterator<Item = &S> {
        self.sources.values()
    }

    pub fn targets(&self) -> impl Iterator<Item = &T> {
        self.targets.values()
    }

    pub fn aligned_source(&self, source: usize) -> bool {
        self.edges.iter().any(|(s, _)| *s == source)
    }

    pub fn aligned_target(&self, target: usize) -> bool {
        self.edges.iter().any(|(_, t)| *t == target)
    }

    /// Sources that are (or are not) aligned to anything.
    pub fn source_phrases(&self, aligned: bool) -> Vec<&S> {
        self.sources
            .iter()
            .filter(|(index, _)| self.aligned_source(**index) == aligned)
            .map(|(_, source)| source)
            .collect()
    }

    /// Targets that are (or are not) aligned to anything.
    pub fn target_phrases(&self, aligned: bool) -> Vec<&T> {
        self.targets
            .iter()
            .filter(|(index, _)| self.aligned_target(**index) == aligned)
            .map(|(_, target)| target)
            .collect()
    }

    /// Targets aligned to `source`, in edge order.
    pub fn aligned_targets(&self, source: usize) -> Vec<&T> {
        self.edges
            .iter()
            .filter(|(s, _)| *s == source)
            .filter_map(|(_, t)| self.targets.get(t))
            .collect()
    }

    /// The first source aligned to `target`, in edge order.
    pub fn get_source(&self, target: usize) -> Option<&S> {
        self.edges
            .iter()
            .find(|(_, t)| *t == target)
            .and_then(|(s, _)| self.sources.get(s))
    }

    /// Replace a source with another value of the same index, keeping its
    /// edges. Returns the value that was replaced.
    pub fn replace_source(&mut self, source: S) -> Result<S, AlignError> {
        let index = source.index();
        match self.sources.get_mut(&index) {
            Some(slot) => Ok(std::mem::replace(slot, source)),
            None => Err(AlignError::UnknownSource { index }),
        }
    }

    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }
}

/// One line per source with its targets, then the unaligned targets.
impl<S: Indexed + fmt::Display, T: Indexed + fmt::Display> fmt::Display for Alignment<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, source) in &self.sources {
            write!(f, "{source} ->")?;
            let targets = self.aligned_targets(*index);
            if targets.is_empty() {
                write!(f, " -")?;
            }
            for target in targets {
                write!(f, " {target}")?;
            }
            writeln!(f)?;
        }
        let unaligned = self.target_phrases(false);
        if !unaligned.is_empty() {
            write!(f, "unaligned:")?;
            for target in unaligned {
                write!(f, " {target}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Node(usize, &'static str);

    impl Indexed for Node {
        fn index(&self) -> usize {
            self.0
        }
    }

    impl fmt::Display for Node {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.1)
        }
    }

    fn alignment() -> Alignment<Node, Node> {
        Alignment::new(
            [Node(0, "a"), Node(1, "b"), Node(2, "c")],
            [Node(0, "x"), Node(1, "y")],
        )
    }

    #[test]
    fn add_and_query() {
        let mut alignment = alignment();
        alignment.add(0, 1).unwrap();
        alignment.add(2, 1).unwrap();
        alignment.add(0, 1).unwrap();

        assert_eq!(alignment.edges(), &[(0, 1), (2, 1)]);
        assert!(alignment.aligned_source(0));
        assert!(!alignment.aligned_source(1));
        assert!(alignment.aligned_target(1));
        assert_eq!(alignment.get_source(1), Some(&Node(0, "a")));
        assert_eq!(alignment.get_source(0), None);
        assert_eq!(alignment.source_phrases(false), vec![&Node(1, "b")]);
        assert_eq!(alignment.target_phrases(false), vec![&Node(0, "x")]);
    }

    #[test]
    fn rejects_edges_outside_the_universe() {
        let mut alignment = alignment();
        assert!(matches!(alignment.add(5, 0), Err(AlignError::UnknownSource { index: 5 })));
        assert!(matches!(alignment.add(0, 9), Err(AlignError::UnknownTarget { index: 9 })));
        assert!(alignment.edges().is_empty());
    }

    #[test]
    fn remove_reports_whether_edge_existed() {
        let mut alignment = alignment();
        alignment.add(1, 0).unwrap();
        assert!(alignment.remove(1, 0));
        assert!(!alignment.remove(1, 0));
        assert!(!alignment.aligned_source(1));
    }

    #[test]
    fn replace_source_keeps_edges() {
        let mut alignment = alignment();
        alignment.add(1, 0).unwrap();
        let old = alignment.replace_source(Node(1, "B")).unwrap();
        assert_eq!(old, Node(1, "b"));
        assert_eq!(alignment.get_source(0), Some(&Node(1, "B")));
        assert!(alignment.replace_source(Node(7, "?")).is_err());
    }

    #[test]
    fn renders_sources_then_unaligned_targets() {
        let mut alignment = alignment();
        alignment.add(0, 1).unwrap();
        assert_eq!(alignment.to_string(), "a -> y\nb -> -\nc -> -\nunaligned: x\n");
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(usize, usize),
        Remove(usize, usize),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0..5usize, 0..4usize).prop_map(|(s, t)| Op::Add(s, t)),
            (0..5usize, 0..4usize).prop_map(|(s, t)| Op::Remove(s, t)),
        ]
    }

    proptest! {
        #[test]
        fn universe_is_fixed_under_any_edits(ops in prop::collection::vec(op(), 0..40)) {
            let mut alignment = Alignment::new(
                (0..4).map(|i| Node(i, "s")),
                (0..3).map(|i| Node(i, "t")),
            );
            for op in ops {
                match op {
                    Op::Add(s, t) => {
                        let result = alignment.add(s, t);
                        prop_assert_eq!(result.is_ok(), s < 4 && t < 3);
                    }
                    Op::Remove(s, t) => {
                        alignment.remove(s, t);
                    }
                }
                let mut seen: Vec<usize> = alignment
                    .source_phrases(true)
                    .into_iter()
                    .chain(alignment.source_phrases(false))
                    .map(Indexed::index)
                    .collect();
                seen.sort();
                prop_assert_eq!(seen, vec![0, 1, 2, 3]);
                prop_assert_eq!(
                    alignment.target_phrases(true).len() + alignment.target_phrases(false).len(),
                    3
                );
            }
        }
    }
}
