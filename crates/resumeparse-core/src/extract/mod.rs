//! Field extractors and the record assembler.
//!
//! Every extractor is a pure function of the normalized text and, for the
//! name, the recognizer's spans. None of them sees another's output.

mod contact;
mod education;
mod experience;
mod identity;

pub use contact::{ContactInfo, ContactPatterns};
pub use education::extract_snippets;
pub use experience::ExperiencePatterns;
pub use identity::extract_name;

use crate::config::ExtractionConfig;
use crate::entity::EntitySpan;
use crate::record::{truncate_chars, ParsedRecord};
use crate::vocabulary::Lexicon;
use crate::Result;

/// Holds the compiled patterns and merges every extractor's output into a
/// [`ParsedRecord`].
pub struct RecordAssembler {
    contact: ContactPatterns,
    experience: ExperiencePatterns,
}

impl RecordAssembler {
    pub fn new() -> Result<Self> {
        Ok(Self {
            contact: ContactPatterns::new()?,
            experience: ExperiencePatterns::new()?,
        })
    }

    #[must_use]
    pub fn assemble(
        &self,
        text: &str,
        spans: &[EntitySpan],
        lexicon: &Lexicon,
        config: &ExtractionConfig,
    ) -> ParsedRecord {
        let ContactInfo {
            emails,
            phones,
            links,
        } = self.contact.extract(text);

        ParsedRecord {
            name: extract_name(text, spans, config.name_window),
            emails,
            phones,
            links,
            skills: lexicon.skills.matches_in(text),
            education_snippets: extract_snippets(
                text,
                &lexicon.education,
                config.snippet_context,
                config.snippet_cap,
            ),
            experience_years: self.experience.extract(text),
            title_hints: lexicon.titles.matches_in(text),
            text_preview: truncate_chars(text, config.preview_len, &config.preview_marker),
        }
    }
}
