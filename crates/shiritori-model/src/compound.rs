//! Compound-word classification (A/B/C).

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Coarse rank of how atomic a word is: `A` is a plain word, `C` a loose
/// compound. Unknown labels are kept verbatim so they can be written back out.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CompoundClass {
    A,
    B,
    C,
    Other(String),
}

impl CompoundClass {
    /// Parse a raw lexicon label. Never fails.
    pub fn parse(label: &str) -> Self {
        match label {
            "A" => Self::A,
            "B" => Self::B,
            "C" => Self::C,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::Other(label) => label,
        }
    }

    pub fn is_top_rank(&self) -> bool {
        matches!(self, Self::A)
    }
}

impl fmt::Display for CompoundClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CompoundClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CompoundClass {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Self::parse(&label))
    }
}
