use serde::{Deserialize, Serialize};

/// Categories a recognizer may emit. Only `Person` is consumed by the
/// field extractors; the rest are carried so external taggers can be
/// plugged in without losing information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityCategory {
    Person,
    Organization,
    Location,
    Date,
    Misc,
}

impl EntityCategory {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Person => "PERSON",
            Self::Organization => "ORGANIZATION",
            Self::Location => "LOCATION",
            Self::Date => "DATE",
            Self::Misc => "MISC",
        }
    }

    /// Map a label from an external tagger onto a category. Unknown
    /// labels become `Misc` rather than failing.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or(Self::Misc)
    }
}

impl std::fmt::Display for EntityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EntityCategory {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "PERSON" | "PER" => Ok(Self::Person),
            "ORGANIZATION" | "ORG" => Ok(Self::Organization),
            "LOCATION" | "LOC" | "GPE" => Ok(Self::Location),
            "DATE" => Ok(Self::Date),
            "MISC" => Ok(Self::Misc),
            _ => Err(crate::Error::InvalidEntityCategory(s.to_string())),
        }
    }
}

/// A tagged region of normalized text. `start` and `end` are byte offsets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    pub category: EntityCategory,
    pub text: String,
    pub start: usize,
    pub end: usize,
}

impl EntitySpan {
    #[must_use]
    pub const fn new(category: EntityCategory, text: String, start: usize, end: usize) -> Self {
        Self {
            category,
            text,
            start,
            end,
        }
    }

    /// Build a span from a byte range of `source`.
    #[must_use]
    pub fn from_range(category: EntityCategory, source: &str, start: usize, end: usize) -> Self {
        Self::new(category, source[start..end].to_string(), start, end)
    }

    #[must_use]
    pub const fn is_person(&self) -> bool {
        matches!(self.category, EntityCategory::Person)
    }
}
