//! Scoring for candidate alignments.
//!
//! Candidates are compared lexicographically, higher is better on both
//! keys:
//!
//! 1. **Aligned sources**: how many PropBank phrases found a frame element.
//! 2. **Target coverage**: frame elements minus unaligned frame elements.
//!
//! The first key completely dominates the second. Ties on both keys are
//! left to enumeration order; the search keeps the first candidate seen.

use std::fmt;

use crate::alignment::{Alignment, Indexed};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AlignmentScore {
    pub aligned_sources: usize,
    pub target_coverage: isize,
}

impl AlignmentScore {
    pub fn of<S: Indexed, T: Indexed>(alignment: &Alignment<S, T>) -> Self {
        let targets = alignment.targets().count() as isize;
        let unaligned = alignment.target_phrases(false).len() as isize;
        AlignmentScore {
            aligned_sources: alignment.source_phrases(true).len(),
            target_coverage: targets - unaligned,
        }
    }
}

impl fmt::Display for AlignmentScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.aligned_sources, self.target_coverage)
    }
}
