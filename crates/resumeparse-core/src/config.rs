use serde::{Deserialize, Serialize};

pub const DEFAULT_NAME_WINDOW: usize = 200;
pub const DEFAULT_SNIPPET_CONTEXT: usize = 40;
pub const DEFAULT_SNIPPET_CAP: usize = 10;
pub const DEFAULT_PREVIEW_LEN: usize = 600;
pub const DEFAULT_PREVIEW_MARKER: &str = "...";

/// Bounds applied by the field extractors. All lengths count characters,
/// not bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// A PERSON span must start within this many leading characters to be
    /// taken as the candidate's name
    #[serde(default = "default_name_window")]
    pub name_window: usize,
    /// Characters of context kept on each side of an education keyword
    #[serde(default = "default_snippet_context")]
    pub snippet_context: usize,
    #[serde(default = "default_snippet_cap")]
    pub snippet_cap: usize,
    #[serde(default = "default_preview_len")]
    pub preview_len: usize,
    #[serde(default = "default_preview_marker")]
    pub preview_marker: String,
}

const fn default_name_window() -> usize {
    DEFAULT_NAME_WINDOW
}

const fn default_snippet_context() -> usize {
    DEFAULT_SNIPPET_CONTEXT
}

const fn default_snippet_cap() -> usize {
    DEFAULT_SNIPPET_CAP
}

const fn default_preview_len() -> usize {
    DEFAULT_PREVIEW_LEN
}

fn default_preview_marker() -> String {
    DEFAULT_PREVIEW_MARKER.to_string()
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            name_window: DEFAULT_NAME_WINDOW,
            snippet_context: DEFAULT_SNIPPET_CONTEXT,
            snippet_cap: DEFAULT_SNIPPET_CAP,
            preview_len: DEFAULT_PREVIEW_LEN,
            preview_marker: default_preview_marker(),
        }
    }
}

impl ExtractionConfig {
    /// Defaults overridden by `RESUMEPARSE_*` variables. Values that do not
    /// parse as unsigned integers are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str, fallback: usize| {
            lookup(key)
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(fallback)
        };

        Self {
            name_window: read("RESUMEPARSE_NAME_WINDOW", DEFAULT_NAME_WINDOW),
            snippet_context: read("RESUMEPARSE_SNIPPET_CONTEXT", DEFAULT_SNIPPET_CONTEXT),
            snippet_cap: read("RESUMEPARSE_SNIPPET_CAP", DEFAULT_SNIPPET_CAP),
            preview_len: read("RESUMEPARSE_PREVIEW_LEN", DEFAULT_PREVIEW_LEN),
            preview_marker: default_preview_marker(),
        }
    }
}
