use std::path::Path;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFormat {
    PlainText,
    Markdown,
    Pdf,
    Docx,
}

impl DocumentFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "txt" | "text" => Some(Self::PlainText),
            "md" | "markdown" => Some(Self::Markdown),
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            _ => None,
        }
    }

    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            "text/plain" => Some(Self::PlainText),
            "text/markdown" => Some(Self::Markdown),
            "application/pdf" => Some(Self::Pdf),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                Some(Self::Docx)
            }
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PlainText => "plain_text",
            Self::Markdown => "markdown",
            Self::Pdf => "pdf",
            Self::Docx => "docx",
        }
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pass-through metadata about the uploaded file. Never interpreted by the
/// extractors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMeta {
    pub filename: String,
    pub size: u64,
}

impl FileMeta {
    #[must_use]
    pub fn new(filename: impl Into<String>, size: u64) -> Self {
        Self {
            filename: filename.into(),
            size,
        }
    }

    pub fn format(&self) -> Option<DocumentFormat> {
        DocumentFormat::from_path(Path::new(&self.filename))
    }
}

/// Outcome of decoding a container into text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractedText {
    Text(String),
    /// No text could be produced; the reason is for logs only.
    Absent(String),
}

impl ExtractedText {
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Absent(_) => String::new(),
        }
    }

    #[must_use]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Text(_))
    }
}

#[async_trait::async_trait]
pub trait TextExtractor: Send + Sync {
    fn supported_formats(&self) -> &[DocumentFormat];

    fn can_extract(&self, format: DocumentFormat) -> bool {
        self.supported_formats().contains(&format)
    }

    async fn extract(&self, data: &[u8], format: DocumentFormat) -> ExtractedText;
}

/// Decodes text formats as UTF-8, dropping invalid byte sequences.
pub struct PlainTextExtractor;

impl PlainTextExtractor {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for PlainTextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl TextExtractor for PlainTextExtractor {
    fn supported_formats(&self) -> &[DocumentFormat] {
        &[DocumentFormat::PlainText, DocumentFormat::Markdown]
    }

    async fn extract(&self, data: &[u8], format: DocumentFormat) -> ExtractedText {
        if !self.can_extract(format) {
            return ExtractedText::Absent(format!("{format} is not a text format"));
        }

        let mut text = String::with_capacity(data.len());
        for chunk in data.utf8_chunks() {
            text.push_str(chunk.valid());
        }

        match text.strip_prefix('\u{feff}') {
            Some(rest) => ExtractedText::Text(rest.to_string()),
            None => ExtractedText::Text(text),
        }
    }
}

/// Routes each format to the first registered extractor that handles it.
pub struct CompositeExtractor {
    extractors: Vec<Box<dyn TextExtractor>>,
}

impl CompositeExtractor {
    #[must_use]
    pub fn new() -> Self {
        Self {
            extractors: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_extractor(mut self, extractor: Box<dyn TextExtractor>) -> Self {
        self.extractors.push(extractor);
        self
    }

    pub fn add_extractor(&mut self, extractor: Box<dyn TextExtractor>) {
        self.extractors.push(extractor);
    }

    fn find_extractor(&self, format: DocumentFormat) -> Option<&dyn TextExtractor> {
        self.extractors
            .iter()
            .find(|e| e.can_extract(format))
            .map(|e| e.as_ref())
    }
}

impl Default for CompositeExtractor {
    fn default() -> Self {
        Self::new().with_extractor(Box::new(PlainTextExtractor::new()))
    }
}

#[async_trait::async_trait]
impl TextExtractor for CompositeExtractor {
    fn supported_formats(&self) -> &[DocumentFormat] {
        &[
            DocumentFormat::PlainText,
            DocumentFormat::Markdown,
            DocumentFormat::Pdf,
            DocumentFormat::Docx,
        ]
    }

    fn can_extract(&self, format: DocumentFormat) -> bool {
        self.find_extractor(format).is_some()
    }

    async fn extract(&self, data: &[u8], format: DocumentFormat) -> ExtractedText {
        match self.find_extractor(format) {
            Some(extractor) => extractor.extract(data, format).await,
            None => ExtractedText::Absent(format!("no text extractor registered for {format}")),
        }
    }
}
