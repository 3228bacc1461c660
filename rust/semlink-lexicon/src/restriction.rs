//! Syntactic and selectional restrictions on VerbNet frame elements.
//!
//! VerbNet writes restrictions as `+`/`-` marked types (`+that_comp`,
//! `-src`). They are kept as include/exclude sets and are carried through
//! the frame model for downstream consumers.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::vocab::{lossy, vocabulary};

vocabulary! {
    /// Syntactic restriction on a noun phrase slot.
    pub enum SynRestriction {
        AcIng => "ac_ing",
        AcToInf => "ac_to_inf",
        AdvLoc => "adv_loc",
        BeScIng => "be_sc_ing",
        Definite => "definite",
        ForComp => "for_comp",
        Genitive => "genitive",
        HowExtract => "how_extract",
        NpIng => "np_ing",
        NpOmitIng => "np_omit_ing",
        NpPIng => "np_p_ing",
        NpPpart => "np_ppart",
        NpToInf => "np_to_inf",
        OcBareInf => "oc_bare_inf",
        OcIng => "oc_ing",
        OcToInf => "oc_to_inf",
        Plural => "plural",
        PossIng => "poss_ing",
        Quotation => "quotation",
        Refl => "refl",
        RsToInf => "rs_to_inf",
        ScIng => "sc_ing",
        ScToInf => "sc_to_inf",
        Sentential => "sentential",
        SmallClause => "small_clause",
        TensedThat => "tensed_that",
        ThatComp => "that_comp",
        ToBe => "to_be",
        WhComp => "wh_comp",
        WhExtract => "wh_extract",
        WhInf => "wh_inf",
        WhIng => "wh_ing",
        WhatExtract => "what_extract",
        WhatInf => "what_inf",
        WhethInf => "wheth_inf",
        Unknown => "unknown",
    }
}

lossy!(SynRestriction, Unknown, "syntactic restriction");

vocabulary! {
    /// Selectional restriction on a preposition slot.
    pub enum PrepRestriction {
        DestDir => "dest_dir",
        DestConf => "dest_conf",
        Path => "path",
        Src => "src",
        Loc => "loc",
        Dir => "dir",
        Spatial => "spatial",
        Unknown => "unknown",
    }
}

lossy!(PrepRestriction, Unknown, "preposition restriction");

vocabulary! {
    /// The literal word(s) of a lexical frame element.
    pub enum LexType {
        And => "and",
        Apart => "apart",
        As => "as",
        At => "at",
        Away => "away",
        Be => "be",
        Down => "down",
        It => "it",
        ItBe => "it_be",
        Like => "like",
        Of => "of",
        Out => "out",
        S => "s",
        There => "there",
        To => "to",
        ToBe => "to_be",
        Together => "together",
        Up => "up",
        /// Sentinel for words outside the inventory.
        None => "none",
    }
}

impl LexType {
    /// Parse a lexical value such as `"[+be]"`, `"'s"` or `"it be"`.
    pub fn parse_lossy(value: &str) -> LexType {
        let cleaned: String = value
            .chars()
            .map(|c| if matches!(c, '[' | ']' | '+' | '\'') { ' ' } else { c })
            .collect();
        let joined = cleaned.split_whitespace().collect::<Vec<_>>().join("_");
        LexType::from_label(&joined).unwrap_or_else(|| {
            tracing::warn!(value, "unrecognized lexical element");
            LexType::None
        })
    }
}

impl<'de> Deserialize<'de> for LexType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(LexType::parse_lossy(&value))
    }
}

/// Include/exclude sets of restrictions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Restrictions<T: Ord> {
    pub include: BTreeSet<T>,
    pub exclude: BTreeSet<T>,
}

impl<T: Ord> Default for Restrictions<T> {
    fn default() -> Self {
        Restrictions {
            include: BTreeSet::new(),
            exclude: BTreeSet::new(),
        }
    }
}

impl<T: Ord> Restrictions<T> {
    pub fn is_empty(&self) -> bool {
        self.include.is_empty() && self.exclude.is_empty()
    }
}

/// One restriction as written in a lexicon file: `{"value": "+", "type": "src"}`.
#[derive(Debug, Clone, Deserialize)]
pub struct MarkedRestriction<T> {
    pub value: String,
    #[serde(rename = "type")]
    pub kind: T,
}

impl<T: Ord> FromIterator<MarkedRestriction<T>> for Restrictions<T> {
    fn from_iter<I: IntoIterator<Item = MarkedRestriction<T>>>(iter: I) -> Self {
        let mut restrictions = Restrictions::default();
        for marked in iter {
            if marked.value.trim() == "-" {
                restrictions.exclude.insert(marked.kind);
            } else {
                restrictions.include.insert(marked.kind);
            }
        }
        restrictions
    }
}
