//! PropBank rolesets.
//!
//! A roleset (e.g. `give.01`) lists the numbered arguments a predicate sense
//! takes, each with a function tag and a short description. The aligner uses
//! the declared numbers to decide which argument numbers a sentence may still
//! claim, and the descriptions to label the output.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::argument::{ArgNumber, FunctionTag};
use crate::error::LexiconError;

/// A role declared by a roleset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PbRole {
    pub number: ArgNumber,
    #[serde(default, rename = "f")]
    pub function_tag: FunctionTag,
    #[serde(default, rename = "descr")]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roleset {
    /// Roleset id, e.g. `give.01`.
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub roles: Vec<PbRole>,
}

impl Roleset {
    pub fn new(id: impl Into<String>) -> Self {
        Roleset {
            id: id.into(),
            name: String::new(),
            roles: Vec::new(),
        }
    }

    pub fn with_role(mut self, number: ArgNumber, description: impl Into<String>) -> Self {
        self.roles.push(PbRole {
            number,
            function_tag: FunctionTag::default(),
            description: description.into(),
        });
        self
    }

    pub fn role(&self, number: ArgNumber) -> Option<&PbRole> {
        self.roles.iter().find(|role| role.number == number)
    }

    /// Argument numbers declared by this roleset, in declaration order.
    pub fn declared(&self) -> impl Iterator<Item = ArgNumber> + '_ {
        self.roles.iter().map(|role| role.number)
    }
}

/// Rolesets indexed by id.
#[derive(Debug, Clone, Default)]
pub struct PropBank {
    rolesets: IndexMap<String, Roleset>,
}

impl PropBank {
    pub fn new(rolesets: impl IntoIterator<Item = Roleset>) -> Self {
        PropBank {
            rolesets: rolesets
                .into_iter()
                .map(|roleset| (roleset.id.clone(), roleset))
                .collect(),
        }
    }

    /// Load from a JSON array of rolesets.
    pub fn from_json(json: &str) -> Result<Self, LexiconError> {
        let rolesets: Vec<Roleset> = serde_json::from_str(json)?;
        Ok(PropBank::new(rolesets))
    }

    pub fn get(&self, id: &str) -> Option<&Roleset> {
        self.rolesets.get(id)
    }

    pub fn len(&self) -> usize {
        self.rolesets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rolesets.is_empty()
    }
}
