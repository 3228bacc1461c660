//! Curated PropBank to VerbNet role mappings (SemLink).
//!
//! For each lemma and each of its rolesets, the mapping lists the VerbNet
//! classes the roleset corresponds to and, per class, which thematic roles
//! each PropBank argument number may take:
//!
//! ```json
//! [{"lemma": "give", "mappings": [{"id": "give.01", "mappings": [
//!     {"vncls": "13.1-1", "roles": [
//!         {"number": "0", "vntheta": "Agent"},
//!         {"number": "1", "vntheta": "Theme"},
//!         {"number": "2", "vntheta": "Recipient"}
//!     ]}
//! ]}]}]
//! ```
//!
//! Role names stay strings here. They are parsed against the thematic role
//! vocabulary at alignment time, so that a misspelled role only disables
//! that one candidate.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::argument::ArgNumber;
use crate::error::LexiconError;
use crate::propbank::{PropBank, Roleset};
use crate::verbnet::ClassId;

/// One lemma's entry in the curated mapping file.
#[derive(Debug, Clone, Deserialize)]
pub struct PbVnMapping {
    pub lemma: String,
    #[serde(default)]
    pub mappings: Vec<RolesetMapping>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RolesetMapping {
    /// PropBank roleset id.
    pub id: String,
    #[serde(default)]
    pub mappings: Vec<RolesMapping>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RolesMapping {
    /// VerbNet class number, with or without the class name prefix.
    pub vncls: String,
    #[serde(default)]
    pub roles: Vec<MappedRole>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MappedRole {
    pub number: ArgNumber,
    pub vntheta: String,
}

/// A roleset as it applies to one VerbNet class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedRoleset {
    pub id: String,
    /// The PropBank roleset, when the index knows it.
    pub roleset: Option<Roleset>,
    /// Candidate VerbNet role names per argument number, in preference order.
    pub role_mappings: IndexMap<ArgNumber, Vec<String>>,
}

impl MappedRoleset {
    pub fn new(id: impl Into<String>) -> Self {
        MappedRoleset {
            id: id.into(),
            roleset: None,
            role_mappings: IndexMap::new(),
        }
    }

    pub fn with_roleset(mut self, roleset: Roleset) -> Self {
        self.roleset = Some(roleset);
        self
    }

    /// Add a candidate role name for an argument number. Repeats are ignored.
    pub fn map(mut self, number: ArgNumber, vntheta: impl Into<String>) -> Self {
        let vntheta = vntheta.into();
        let candidates = self.role_mappings.entry(number).or_default();
        if !candidates.contains(&vntheta) {
            candidates.push(vntheta);
        }
        self
    }

    pub fn candidates(&self, number: ArgNumber) -> &[String] {
        self.role_mappings
            .get(&number)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Argument numbers the roleset declares. Falls back to the mapped
    /// numbers when the PropBank roleset is unknown.
    pub fn declared(&self) -> Vec<ArgNumber> {
        match &self.roleset {
            Some(roleset) => roleset.declared().collect(),
            None => self.role_mappings.keys().copied().collect(),
        }
    }

    pub fn description(&self, number: ArgNumber) -> Option<&str> {
        self.roleset
            .as_ref()
            .and_then(|roleset| roleset.role(number))
            .map(|role| role.description.as_str())
    }
}

/// Mapped rolesets indexed by lemma and VerbNet class number.
#[derive(Debug, Clone, Default)]
pub struct PbVnMappings {
    by_lemma: HashMap<String, IndexMap<String, Vec<MappedRoleset>>>,
}

impl PbVnMappings {
    pub fn new(mappings: impl IntoIterator<Item = PbVnMapping>, propbank: &PropBank) -> Self {
        let mut by_lemma: HashMap<String, IndexMap<String, Vec<MappedRoleset>>> = HashMap::new();
        for mapping in mappings {
            let classes = by_lemma.entry(mapping.lemma.clone()).or_default();
            for roleset_mapping in mapping.mappings {
                let roleset = propbank.get(&roleset_mapping.id).cloned();
                if roleset.is_none() {
                    tracing::debug!(roleset = %roleset_mapping.id, "mapped roleset missing from PropBank index");
                }
                for roles in roleset_mapping.mappings {
                    let mut mapped = MappedRoleset {
                        id: roleset_mapping.id.clone(),
                        roleset: roleset.clone(),
                        role_mappings: IndexMap::new(),
                    };
                    for role in roles.roles {
                        mapped = mapped.map(role.number, role.vntheta);
                    }
                    let class = ClassId::new(roles.vncls).number().to_string();
                    classes.entry(class).or_default().push(mapped);
                }
            }
        }
        PbVnMappings { by_lemma }
    }

    pub fn from_json(json: &str, propbank: &PropBank) -> Result<Self, LexiconError> {
        let mappings: Vec<PbVnMapping> = serde_json::from_str(json)?;
        Ok(PbVnMappings::new(mappings, propbank))
    }

    /// Rolesets mapped to `class` for `lemma`, in load order.
    pub fn rolesets(&self, lemma: &str, class: &ClassId) -> &[MappedRoleset] {
        self.by_lemma
            .get(lemma)
            .and_then(|classes| classes.get(class.number()))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
