//! Prepositions that VerbNet frames constrain and the aligner detects.

use crate::vocab::{lossy, vocabulary};

vocabulary! {
    /// A preposition from VerbNet's closed preposition inventory.
    ///
    /// Two-word prepositions are joined with `_` (`out_of`, `in_between`).
    pub enum Preposition {
        About => "about",
        Above => "above",
        After => "after",
        Against => "against",
        Among => "among",
        As => "as",
        At => "at",
        Back => "back",
        Beside => "beside",
        Before => "before",
        Below => "below",
        Between => "between",
        By => "by",
        Concerning => "concerning",
        Down => "down",
        For => "for",
        From => "from",
        If => "if",
        In => "in",
        InBetween => "in_between",
        Into => "into",
        Like => "like",
        Of => "of",
        Off => "off",
        On => "on",
        Onto => "onto",
        Out => "out",
        OutOf => "out_of",
        Over => "over",
        Past => "past",
        Regarding => "regarding",
        Respecting => "respecting",
        Though => "though",
        Through => "through",
        To => "to",
        Towards => "towards",
        Under => "under",
        Until => "until",
        Up => "up",
        Upon => "upon",
        With => "with",
        Within => "within",
        /// Sentinel for prepositions outside the inventory.
        Unknown => "unknown",
    }
}

lossy!(Preposition, Unknown, "preposition");

impl Preposition {
    /// Detect the preposition that opens a phrase from its first one or two
    /// surface tokens. The two-token reading (`out of`) takes precedence.
    pub fn detect(first: &str, second: Option<&str>) -> Option<Preposition> {
        let known = |label: &str| {
            Preposition::from_label(label).filter(|prep| *prep != Preposition::Unknown)
        };
        second
            .and_then(|second| known(&format!("{first}_{second}")))
            .or_else(|| known(first))
    }

    pub fn is_trajectory(&self) -> bool {
        matches!(
            self,
            Preposition::Between
                | Preposition::InBetween
                | Preposition::Through
                | Preposition::Over
                | Preposition::Under
                | Preposition::Above
                | Preposition::Below
                | Preposition::Back
                | Preposition::Beside
        )
    }

    pub fn maybe_location(&self) -> bool {
        matches!(
            self,
            Preposition::Upon
                | Preposition::Under
                | Preposition::Towards
                | Preposition::To
                | Preposition::Through
                | Preposition::Over
                | Preposition::OutOf
                | Preposition::Onto
                | Preposition::On
                | Preposition::Off
                | Preposition::Into
                | Preposition::InBetween
                | Preposition::In
                | Preposition::From
                | Preposition::By
                | Preposition::Between
                | Preposition::Below
                | Preposition::Back
                | Preposition::At
                | Preposition::Above
        )
    }

    pub fn maybe_destination(&self) -> bool {
        matches!(
            self,
            Preposition::For
                | Preposition::To
                | Preposition::Into
                | Preposition::Towards
                | Preposition::Onto
                | Preposition::On
                | Preposition::At
        )
    }
}
