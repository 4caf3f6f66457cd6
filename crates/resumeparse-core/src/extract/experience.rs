use regex::Regex;

use crate::Result;

const PATTERNS: &[&str] = &[
    r"(?i)\b(?:experience|exp)[:\s]+(\d{1,2})\+?\s*(?:years|yrs)?",
    r"(?i)\b(\d{1,2})\+?\s*(?:years|yrs)\s+of\s+experience",
];

/// Ordered patterns for a stated "years of experience" figure.
pub struct ExperiencePatterns {
    patterns: Vec<Regex>,
}

impl ExperiencePatterns {
    pub fn new() -> Result<Self> {
        let patterns = PATTERNS
            .iter()
            .map(|p| Regex::new(p))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Years from the first pattern with a usable capture. A capture that is
    /// the head of a longer number, or that does not parse, is skipped.
    #[must_use]
    pub fn extract(&self, text: &str) -> Option<u32> {
        self.patterns.iter().find_map(|pattern| {
            pattern.captures_iter(text).find_map(|caps| {
                let digits = caps.get(1)?;
                let continues = text[digits.end()..]
                    .chars()
                    .next()
                    .is_some_and(char::is_numeric);
                if continues {
                    return None;
                }
                digits.as_str().parse::<u32>().ok()
            })
        })
    }
}
