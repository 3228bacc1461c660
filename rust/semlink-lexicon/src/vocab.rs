//! Closed vocabularies.
//!
//! Every label set the aligner reasons about (argument numbers, function
//! tags, thematic roles, prepositions, restrictions, predicate names) is a
//! closed enumeration. The [`vocabulary!`] macro generates the enum together
//! with its canonical labels, so that matching on a vocabulary is always
//! exhaustive and adding a member forces every consumer to be revisited.
//!
//! Lookups go through [`key`], which folds case and treats spaces, hyphens
//! and underscores alike: `"out of"`, `"OUT_OF"` and `"Out-Of"` all name the
//! same preposition.

/// Normalize a label for lookup.
pub fn key(label: &str) -> String {
    label
        .trim()
        .chars()
        .filter(|c| *c != '?')
        .map(|c| match c {
            ' ' | '-' => '_',
            c => c.to_ascii_uppercase(),
        })
        .collect()
}

/// Declare a closed vocabulary.
///
/// ```rust,ignore
/// vocabulary! {
///     /// Doc for the enum.
///     pub enum Direction {
///         Up => "up",
///         Down => "down",
///     }
/// }
/// ```
macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every member, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The canonical label of this member.
            pub fn label(&self) -> &'static str {
                match self {
                    $( $name::$variant => $label ),+
                }
            }

            /// Look up a member by label. Case, spaces, hyphens and
            /// underscores are not significant.
            pub fn from_label(label: &str) -> Option<Self> {
                let wanted = $crate::vocab::key(label);
                Self::ALL
                    .iter()
                    .copied()
                    .find(|member| $crate::vocab::key(member.label()) == wanted)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.label())
            }
        }
    };
}

/// Give a vocabulary a lossy parser that maps unrecognized labels onto a
/// sentinel member (with a warning), and deserialize through it.
///
/// Lexicon files are curated by hand and contain the occasional typo; a
/// single bad label must not prevent the rest of the resource from loading.
macro_rules! lossy {
    ($name:ident, $sentinel:ident, $what:literal) => {
        $crate::vocab::lossy!($name, $sentinel, $what, $name::from_label);
    };
    ($name:ident, $sentinel:ident, $what:literal, $lookup:path) => {
        impl $name {
            /// Parse a label, mapping anything unrecognized onto the sentinel.
            pub fn parse_lossy(label: &str) -> Self {
                match $lookup(label) {
                    Some(member) => member,
                    None => {
                        tracing::warn!(label, vocabulary = $what, "unrecognized label");
                        $name::$sentinel
                    }
                }
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let label = <String as serde::Deserialize>::deserialize(deserializer)?;
                Ok(Self::parse_lossy(&label))
            }
        }
    };
}

pub(crate) use lossy;
pub(crate) use vocabulary;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_folds_separators_and_case() {
        assert_eq!(key("out of"), "OUT_OF");
        assert_eq!(key(" Co-Agent "), "CO_AGENT");
        assert_eq!(key("Theme?"), "THEME");
    }
}
