//! Aligner configuration.
//!
//! ```json
//! {"pipeline": "standard", "non_agentive_family": "51"}
//! ```
//!
//! Every field is optional; missing fields take their defaults.

use serde::{Deserialize, Serialize};

use crate::error::AlignError;

/// Which aligner pipeline to run for each candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PipelineKind {
    /// Rel, role mapping, syntactic then selectional restrictions, filler,
    /// and a permissive selectional pass.
    Standard,
    /// The standard pipeline followed by a second syntactic restriction
    /// pass and argument number adjustment.
    #[default]
    Extended,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlignerConfig {
    pub pipeline: PipelineKind,
    /// Class number prefix of the family whose classes, when they declare
    /// no agentive role, take `A0` as Theme. `51` is motion.
    pub non_agentive_family: String,
}

impl Default for AlignerConfig {
    fn default() -> Self {
        AlignerConfig {
            pipeline: PipelineKind::default(),
            non_agentive_family: "51".to_string(),
        }
    }
}

impl AlignerConfig {
    pub fn from_json(json: &str) -> Result<Self, AlignError> {
        Ok(serde_json::from_str(json)?)
    }
}
