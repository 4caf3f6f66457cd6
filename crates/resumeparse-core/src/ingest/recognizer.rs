use std::collections::HashSet;

use regex::Regex;

use crate::entity::{EntityCategory, EntitySpan};
use crate::Result;

/// A named-entity tagger over normalized text.
///
/// Implementations are loaded once and shared between documents; the
/// pipeline calls [`Recognizer::recognize`] exactly once per document and
/// treats an empty result as "nothing recognized".
pub trait Recognizer: Send + Sync {
    fn name(&self) -> &'static str;

    fn recognize(&self, text: &str) -> Vec<EntitySpan>;
}

const HONORIFICS: &[&str] = &["dr", "mr", "mrs", "ms", "miss", "prof", "sir"];

const ORG_INDICATORS: &[&str] = &[
    "inc", "ltd", "llc", "llp", "plc", "gmbh", "corp", "corporation", "company", "technologies",
    "solutions", "labs", "university", "college", "institute", "school", "academy",
];

const STOPWORDS: &[&str] = &[
    // section headers
    "resume", "curriculum", "vitae", "cv", "profile", "summary", "objective", "about",
    "experience", "work", "employment", "history", "career", "professional", "education",
    "academic", "qualifications", "skills", "technical", "core", "key", "competencies",
    "projects", "certifications", "certificates", "achievements", "awards", "publications",
    "interests", "hobbies", "languages", "references", "contact", "personal", "details",
    "information", "declaration", "tools", "technologies",
    // role words
    "engineer", "developer", "analyst", "scientist", "consultant", "manager", "intern",
    "specialist", "architect", "senior", "junior", "lead", "principal", "staff", "head",
    "director", "officer", "software", "data", "full", "stack", "frontend", "backend",
    // common skill phrases written in title case
    "machine", "learning", "deep", "computer", "vision", "power", "node",
    // dates and places
    "january", "february", "march", "april", "may", "june", "july", "august", "september",
    "october", "november", "december", "present", "street", "road", "avenue",
];

/// Rule-based tagger for resume headers.
///
/// Works line by line. A line is cut into segments at `|`, `•`, `·`, `,`,
/// `;`, `/` and spaced dashes. Segments mentioning an organisation
/// indicator become ORGANIZATION spans. Segments opening with two to four
/// capitalised words become PERSON spans, provided the run covers the
/// whole segment or is immediately followed by a stopword (as in
/// `Jane Doe Software Engineer`). `Name: ...` lines are tagged directly.
pub struct HeuristicRecognizer {
    labeled_name: Regex,
    separator: Regex,
    token: Regex,
    stopwords: HashSet<String>,
    org_indicators: HashSet<String>,
}

impl HeuristicRecognizer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            labeled_name: Regex::new(r"(?i)^\s*(?:full\s+)?name\s*[:\-]\s*(\S.*?)\s*$")?,
            separator: Regex::new(r"\s+[-–—]\s+|[|•·,;/]")?,
            token: Regex::new(r"\S+")?,
            stopwords: STOPWORDS.iter().map(|s| (*s).to_string()).collect(),
            org_indicators: ORG_INDICATORS.iter().map(|s| (*s).to_string()).collect(),
        })
    }

    /// Additional words that disqualify a segment from being a name.
    #[must_use]
    pub fn with_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stopwords
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
        self
    }

    fn scan_line(&self, text: &str, line_start: usize, line: &str, spans: &mut Vec<EntitySpan>) {
        if let Some(value) = self.labeled_name.captures(line).and_then(|c| c.get(1)) {
            let start = line_start + value.start();
            let end = line_start + value.end();
            spans.push(EntitySpan::from_range(EntityCategory::Person, text, start, end));
            return;
        }

        let mut seg_start = 0;
        let bounds = self
            .separator
            .find_iter(line)
            .map(|m| (m.start(), m.end()))
            .chain(std::iter::once((line.len(), line.len())));

        for (sep_start, sep_end) in bounds {
            let segment = &line[seg_start..sep_start];
            if let Some((category, start, end)) = self.classify_segment(segment) {
                let offset = line_start + seg_start;
                spans.push(EntitySpan::from_range(
                    category,
                    text,
                    offset + start,
                    offset + end,
                ));
            }
            seg_start = sep_end;
        }
    }

    /// Category and byte range (relative to `segment`) of an entity, if any.
    fn classify_segment(&self, segment: &str) -> Option<(EntityCategory, usize, usize)> {
        let tokens: Vec<_> = self.token.find_iter(segment).collect();
        let first = tokens.first()?;
        let last = tokens.last()?;

        if tokens.len() >= 2
            && tokens
                .iter()
                .any(|t| self.org_indicators.contains(&bare_word(t.as_str())))
        {
            return Some((EntityCategory::Organization, first.start(), last.end()));
        }

        let skip = tokens
            .iter()
            .take_while(|t| HONORIFICS.contains(&bare_word(t.as_str()).as_str()))
            .count();

        let candidates = &tokens[skip..];
        let run = candidates
            .iter()
            .take_while(|t| is_name_shaped(t.as_str()) && !self.is_stopword(t.as_str()))
            .count();

        if !(2..=4).contains(&run) {
            return None;
        }

        let followed_by_stopword = candidates
            .get(run)
            .is_some_and(|next| self.is_stopword(next.as_str()));
        if run != candidates.len() && !followed_by_stopword {
            return None;
        }

        let name_first = candidates[0];
        let name_last = candidates[run - 1];
        let last_text = name_last.as_str();
        let trim = usize::from(last_text.len() > 2 && last_text.ends_with('.'));

        Some((
            EntityCategory::Person,
            name_first.start(),
            name_last.end() - trim,
        ))
    }

    fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(&bare_word(token))
    }
}

impl Recognizer for HeuristicRecognizer {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn recognize(&self, text: &str) -> Vec<EntitySpan> {
        let mut spans = Vec::new();
        let mut line_start = 0;

        for line in text.split('\n') {
            self.scan_line(text, line_start, line, &mut spans);
            line_start += line.len() + 1;
        }

        spans.sort_by_key(|s| s.start);
        spans
    }
}

fn bare_word(token: &str) -> String {
    token
        .trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase()
}

/// `Jane`, `O'Neil`, `Smith-Jones`, `J.` and `JANE` qualify; `jane`,
/// `Skills:` and `R2D2` do not.
fn is_name_shaped(token: &str) -> bool {
    let mut chars = token.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !first.is_uppercase() {
        return false;
    }

    let rest: Vec<char> = chars.collect();
    if rest == ['.'] {
        return true;
    }

    let letters = rest.iter().filter(|c| c.is_alphabetic()).count();
    letters >= 1
        && rest
            .iter()
            .all(|c| c.is_alphabetic() || matches!(c, '\'' | '’' | '-' | '.'))
}
