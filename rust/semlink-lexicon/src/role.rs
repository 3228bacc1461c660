//! VerbNet thematic roles.
//!
//! Roles are the vocabulary shared by both sides of an alignment: VerbNet
//! frames name their noun phrase slots with them, the curated SemLink
//! mappings name candidate roles for each PropBank argument number, and the
//! semantic predicate templates refer to them as variables.
//!
//! The declaration order of [`ThematicRole`] is significant: when two roles
//! receive the same number of votes during alignment, the one declared first
//! wins.

use crate::vocab::{lossy, vocabulary};

vocabulary! {
    /// A VerbNet thematic role.
    pub enum ThematicRole {
        Affector => "Affector",
        Agent => "Agent",
        Asset => "Asset",
        Attribute => "Attribute",
        Axis => "Axis",
        Beneficiary => "Beneficiary",
        Causer => "Causer",
        Circumstance => "Circumstance",
        CoAgent => "Co-Agent",
        CoPatient => "Co-Patient",
        CoTheme => "Co-Theme",
        Context => "Context",
        Destination => "Destination",
        Duration => "Duration",
        Experiencer => "Experiencer",
        Extent => "Extent",
        FinalTime => "Final_Time",
        Goal => "Goal",
        InitialLocation => "Initial_Location",
        InitialState => "Initial_State",
        Instrument => "Instrument",
        Location => "Location",
        Manner => "Manner",
        Material => "Material",
        Path => "Path",
        Patient => "Patient",
        Pivot => "Pivot",
        Precondition => "Precondition",
        Predicate => "Predicate",
        Product => "Product",
        Recipient => "Recipient",
        Reflexive => "Reflexive",
        Result => "Result",
        Source => "Source",
        Stimulus => "Stimulus",
        Theme => "Theme",
        Time => "Time",
        Topic => "Topic",
        Trajectory => "Trajectory",
        Value => "Value",
        /// Sentinel for unrecognized role names.
        Unknown => "None",
        /// The predicate itself, used when labeling the relation span.
        Verb => "Verb",
        Direction => "Direction",
    }
}

lossy!(ThematicRole, Unknown, "thematic role", ThematicRole::parse);

/// A coarse grouping of roles that describe the same kind of participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleFamily {
    /// Where a motion or change starts.
    StartingPoint,
    /// Where a motion or change ends.
    EndingPoint,
    /// A place or route that is neither start nor end.
    Place,
}

impl ThematicRole {
    /// Parse a role name as it appears in lexicon files and curated
    /// mappings, including the legacy spellings `Cause`, `Patient_i` and
    /// `Patient_j`.
    pub fn parse(name: &str) -> Option<ThematicRole> {
        ThematicRole::from_label(name).or_else(|| {
            match crate::vocab::key(name).as_str() {
                "CAUSE" => Some(ThematicRole::Causer),
                "PATIENT_I" => Some(ThematicRole::Patient),
                "PATIENT_J" => Some(ThematicRole::CoPatient),
                _ => None,
            }
        })
    }

    pub fn is_starting_point(&self) -> bool {
        matches!(
            self,
            ThematicRole::Source | ThematicRole::InitialState | ThematicRole::InitialLocation
        )
    }

    pub fn is_ending_point(&self) -> bool {
        matches!(
            self,
            ThematicRole::Goal
                | ThematicRole::Result
                | ThematicRole::Product
                | ThematicRole::Destination
                | ThematicRole::FinalTime
                | ThematicRole::Recipient
                | ThematicRole::Trajectory
        )
    }

    pub fn is_agentive(&self) -> bool {
        matches!(self, ThematicRole::Agent | ThematicRole::Causer)
    }

    pub fn family(&self) -> Option<RoleFamily> {
        if self.is_starting_point() {
            Some(RoleFamily::StartingPoint)
        } else if self.is_ending_point() {
            Some(RoleFamily::EndingPoint)
        } else if matches!(
            self,
            ThematicRole::Location | ThematicRole::Path | ThematicRole::Direction
        ) {
            Some(RoleFamily::Place)
        } else {
            None
        }
    }
}
