use regex::Regex;

use crate::record::dedup_ordered;
use crate::Result;

const EMAIL_PATTERN: &str = r"[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)+";
const PHONE_PATTERN: &str = r"\+?[0-9][0-9 ()\-]{7,}[0-9]";
const LINK_PATTERN: &str = r"https?://[^\s)]+";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactInfo {
    pub emails: Vec<String>,
    pub phones: Vec<String>,
    pub links: Vec<String>,
}

pub struct ContactPatterns {
    email: Regex,
    phone: Regex,
    link: Regex,
}

impl ContactPatterns {
    pub fn new() -> Result<Self> {
        Ok(Self {
            email: Regex::new(EMAIL_PATTERN)?,
            phone: Regex::new(PHONE_PATTERN)?,
            link: Regex::new(LINK_PATTERN)?,
        })
    }

    #[must_use]
    pub fn extract(&self, text: &str) -> ContactInfo {
        let scan = |regex: &Regex| dedup_ordered(regex.find_iter(text).map(|m| m.as_str()));

        ContactInfo {
            emails: scan(&self.email),
            phones: scan(&self.phone),
            links: scan(&self.link),
        }
    }
}
