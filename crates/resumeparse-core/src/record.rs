use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::vocabulary::Term;

/// The structured result for one document. Field names are the JSON
/// contract consumed downstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedRecord {
    pub name: Option<String>,
    pub emails: Vec<String>,
    pub phones: Vec<String>,
    pub links: Vec<String>,
    pub skills: Vec<String>,
    pub education_snippets: Vec<String>,
    pub experience_years: Option<u32>,
    pub title_hints: Vec<String>,
    #[serde(rename = "summary_text_preview")]
    pub text_preview: String,
}

impl ParsedRecord {
    /// Whole-word, case-insensitive check of `keyword` against the
    /// extracted skills.
    #[must_use]
    pub fn has_skill(&self, keyword: &str) -> bool {
        let Ok(term) = Term::new(keyword) else {
            return false;
        };
        self.skills.iter().any(|skill| term.appears_in(skill))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.emails.is_empty()
            && self.phones.is_empty()
            && self.links.is_empty()
            && self.skills.is_empty()
            && self.education_snippets.is_empty()
            && self.experience_years.is_none()
            && self.title_hints.is_empty()
            && self.text_preview.is_empty()
    }

    pub fn to_json_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Drop repeated entries, keeping the first occurrence of each.
pub fn dedup_ordered<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .map(Into::into)
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

/// Prefix of `text` holding at most `max_chars` characters, with `marker`
/// appended when anything was cut.
pub fn truncate_chars(text: &str, max_chars: usize, marker: &str) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{marker}", &text[..cut]),
        None => text.to_string(),
    }
}
