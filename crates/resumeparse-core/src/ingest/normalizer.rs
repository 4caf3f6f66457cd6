/// Canonical form of extracted text: carriage returns removed, runs of
/// spaces and tabs collapsed to one space, outer whitespace trimmed.
/// Newlines are kept since they separate header lines from the body.
pub fn normalize_whitespace(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_run = false;

    for c in raw.chars() {
        match c {
            '\r' => {}
            ' ' | '\t' => {
                if !in_run {
                    out.push(' ');
                    in_run = true;
                }
            }
            _ => {
                out.push(c);
                in_run = false;
            }
        }
    }

    out.trim().to_string()
}

/// Raw input text together with its normalized form for one extraction call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    raw: String,
    normalized: String,
}

impl Document {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let normalized = normalize_whitespace(&raw);
        Self { raw, normalized }
    }

    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }
}
