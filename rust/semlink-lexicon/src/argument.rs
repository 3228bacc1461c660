//! PropBank argument labels.
//!
//! A PropBank label such as `C-ARG1`, `R-A0`, `AM-TMP` or `V` decomposes
//! into an [`ArgNumber`], a [`FunctionTag`] and two flags marking
//! continuation (`C-`) and reference (`R-`) arguments.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::LexiconError;
use crate::vocab::{lossy, vocabulary};

vocabulary! {
    /// The number of a PropBank argument.
    ///
    /// Declaration order is the ordinal order used when an argument number
    /// is adjusted down by one step.
    pub enum ArgNumber {
        A0 => "A0",
        A1 => "A1",
        A2 => "A2",
        A3 => "A3",
        A4 => "A4",
        A5 => "A5",
        A6 => "A6",
        /// Modifier (`AM-*`).
        AM => "AM",
        /// The predicate itself.
        V => "V",
    }
}

impl ArgNumber {
    pub fn is_modifier(&self) -> bool {
        *self == ArgNumber::AM
    }

    pub fn is_rel(&self) -> bool {
        *self == ArgNumber::V
    }

    /// `A0` through `A6`.
    pub fn is_number(&self) -> bool {
        !self.is_modifier() && !self.is_rel()
    }

    /// The next-lower numbered argument, if there is one.
    pub fn decrement(&self) -> Option<ArgNumber> {
        match self {
            ArgNumber::A1 => Some(ArgNumber::A0),
            ArgNumber::A2 => Some(ArgNumber::A1),
            ArgNumber::A3 => Some(ArgNumber::A2),
            ArgNumber::A4 => Some(ArgNumber::A3),
            ArgNumber::A5 => Some(ArgNumber::A4),
            ArgNumber::A6 => Some(ArgNumber::A5),
            ArgNumber::A0 | ArgNumber::AM | ArgNumber::V => None,
        }
    }

    fn from_suffix(suffix: char) -> Option<ArgNumber> {
        match suffix.to_ascii_uppercase() {
            '0' => Some(ArgNumber::A0),
            '1' => Some(ArgNumber::A1),
            '2' => Some(ArgNumber::A2),
            '3' => Some(ArgNumber::A3),
            '4' => Some(ArgNumber::A4),
            '5' => Some(ArgNumber::A5),
            '6' => Some(ArgNumber::A6),
            'M' => Some(ArgNumber::AM),
            _ => None,
        }
    }
}

/// Accepts `A1`, `ARG1`, bare `1` (as in PropBank frame files), `AM`, `M`
/// and `V`.
impl FromStr for ArgNumber {
    type Err = LexiconError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let upper = value.trim().to_ascii_uppercase();
        if let Some(number) = ArgNumber::from_label(&upper) {
            return Ok(number);
        }
        let digits = upper
            .strip_prefix("ARG")
            .or_else(|| upper.strip_prefix('A'))
            .unwrap_or(&upper);
        let mut chars = digits.chars();
        match (chars.next(), chars.next()) {
            (Some(suffix), None) => ArgNumber::from_suffix(suffix),
            _ => None,
        }
        .ok_or_else(|| LexiconError::InvalidArgNumber {
            value: value.to_string(),
        })
    }
}

impl<'de> serde::Deserialize<'de> for ArgNumber {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

vocabulary! {
    /// PropBank function tag.
    pub enum FunctionTag {
        Adj => "ADJ",
        Adv => "ADV",
        Cau => "CAU",
        Com => "COM",
        Cxn => "CXN",
        Dir => "DIR",
        Ext => "EXT",
        Gol => "GOL",
        Loc => "LOC",
        Mnr => "MNR",
        Pag => "PAG",
        Ppt => "PPT",
        Prd => "PRD",
        Pnc => "PNC",
        Prp => "PRP",
        Rec => "REC",
        Tmp => "TMP",
        Vsp => "VSP",
        Lvb => "LVB",
        Mod => "MOD",
        Neg => "NEG",
        Dis => "DIS",
        Prr => "PRR",
        Dsp => "DSP",
        Unknown => "UNKNOWN",
    }
}

lossy!(FunctionTag, Unknown, "function tag");

/// Untagged arguments are verb-specific.
impl Default for FunctionTag {
    fn default() -> Self {
        FunctionTag::Vsp
    }
}

/// A structured PropBank argument label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PropBankArg {
    pub number: ArgNumber,
    pub function_tag: FunctionTag,
    pub continuation: bool,
    pub reference: bool,
}

impl PropBankArg {
    pub fn new(number: ArgNumber) -> Self {
        PropBankArg {
            number,
            function_tag: FunctionTag::default(),
            continuation: false,
            reference: false,
        }
    }

    /// A modifier argument, e.g. `AM-TMP`.
    pub fn modifier(function_tag: FunctionTag) -> Self {
        PropBankArg {
            function_tag,
            ..PropBankArg::new(ArgNumber::AM)
        }
    }

    pub fn continuation(mut self) -> Self {
        self.continuation = true;
        self
    }

    pub fn reference(mut self) -> Self {
        self.reference = true;
        self
    }

    pub fn is_modifier(&self) -> bool {
        self.number.is_modifier()
    }

    /// Parse a label of the form `[C-|R-](V|A[RG](M|<digit>)[-TAG])`.
    ///
    /// Unknown function tags are kept as [`FunctionTag::Unknown`]; anything
    /// else that does not fit the shape is an error.
    pub fn parse(label: &str) -> Result<Self, LexiconError> {
        let invalid = || LexiconError::InvalidLabel {
            label: label.to_string(),
        };
        let upper = label.trim().to_ascii_uppercase();

        let (continuation, reference, rest) = if let Some(rest) = upper.strip_prefix("C-") {
            (true, false, rest)
        } else if let Some(rest) = upper.strip_prefix("R-") {
            (false, true, rest)
        } else {
            (false, false, upper.as_str())
        };

        let mut arg = if rest == "V" {
            PropBankArg::new(ArgNumber::V)
        } else {
            let body = rest
                .strip_prefix("ARG")
                .or_else(|| rest.strip_prefix('A'))
                .ok_or_else(invalid)?;
            let mut chars = body.chars();
            let number = chars
                .next()
                .and_then(ArgNumber::from_suffix)
                .ok_or_else(invalid)?;
            let tail = chars.as_str();
            let mut arg = PropBankArg::new(number);
            if !tail.is_empty() {
                let tag = tail.strip_prefix('-').ok_or_else(invalid)?;
                if tag.is_empty() || tag.contains(char::is_whitespace) {
                    return Err(invalid());
                }
                arg.function_tag = FunctionTag::parse_lossy(tag);
            }
            arg
        };

        arg.continuation = continuation;
        arg.reference = reference;
        Ok(arg)
    }
}

impl FromStr for PropBankArg {
    type Err = LexiconError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        PropBankArg::parse(label)
    }
}

impl fmt::Display for PropBankArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.reference {
            write!(f, "R-")?;
        } else if self.continuation {
            write!(f, "C-")?;
        }
        write!(f, "{}", self.number)?;
        if self.number.is_modifier() {
            write!(f, "-{}", self.function_tag)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_numbered_arguments() {
        assert_eq!(PropBankArg::parse("A1").unwrap(), PropBankArg::new(ArgNumber::A1));
        assert_eq!(PropBankArg::parse("ARG0").unwrap(), PropBankArg::new(ArgNumber::A0));
        assert_eq!(PropBankArg::parse("arg2").unwrap().number, ArgNumber::A2);
    }

    #[test]
    fn parses_modifiers_with_tags() {
        let arg = PropBankArg::parse("ARGM-TMP").unwrap();
        assert_eq!(arg, PropBankArg::modifier(FunctionTag::Tmp));
        assert_eq!(arg.to_string(), "AM-TMP");
    }

    #[test]
    fn parses_continuation_and_reference() {
        let arg = PropBankArg::parse("C-A1").unwrap();
        assert!(arg.continuation);
        assert!(!arg.reference);

        let arg = PropBankArg::parse("R-ARGM-LOC").unwrap();
        assert!(arg.reference);
        assert_eq!(arg.function_tag, FunctionTag::Loc);
        assert_eq!(arg.to_string(), "R-AM-LOC");
    }

    #[test]
    fn parses_rel() {
        let arg = PropBankArg::parse("V").unwrap();
        assert!(arg.number.is_rel());
        assert_eq!(arg.function_tag, FunctionTag::Vsp);
    }

    #[test]
    fn unknown_tag_maps_to_sentinel() {
        let arg = PropBankArg::parse("AM-XYZ").unwrap();
        assert_eq!(arg.function_tag, FunctionTag::Unknown);
    }

    #[test]
    fn rejects_malformed_labels() {
        assert!(PropBankArg::parse("B-A1").is_err());
        assert!(PropBankArg::parse("A9").is_err());
        assert!(PropBankArg::parse("A1TMP").is_err());
        assert!(PropBankArg::parse("").is_err());
    }

    #[test]
    fn arg_numbers_accept_frame_file_forms() {
        assert_eq!("0".parse::<ArgNumber>().unwrap(), ArgNumber::A0);
        assert_eq!("m".parse::<ArgNumber>().unwrap(), ArgNumber::AM);
        assert_eq!("ARG4".parse::<ArgNumber>().unwrap(), ArgNumber::A4);
        assert!("A7".parse::<ArgNumber>().is_err());
    }

    #[test]
    fn decrement_steps_one_ordinal() {
        assert_eq!(ArgNumber::A2.decrement(), Some(ArgNumber::A1));
        assert_eq!(ArgNumber::A0.decrement(), None);
        assert_eq!(ArgNumber::AM.decrement(), None);
    }
}
