use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;
use thiserror::Error;

use super::normalizer::Document;
use super::parser::{CompositeExtractor, DocumentFormat, ExtractedText, FileMeta, TextExtractor};
use super::recognizer::{HeuristicRecognizer, Recognizer};
use crate::config::ExtractionConfig;
use crate::extract::RecordAssembler;
use crate::record::ParsedRecord;
use crate::vocabulary::Lexicon;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Not a regular file: {0}")]
    NotAFile(String),
}

pub type IngestResult<T> = Result<T, IngestError>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    pub chars: usize,
    pub entity_spans: usize,
    pub duration_ms: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ParseOutput {
    pub meta: Option<FileMeta>,
    pub format: Option<DocumentFormat>,
    pub text_found: bool,
    pub record: ParsedRecord,
    #[serde(skip)]
    pub raw_text: String,
    pub stats: ParseStats,
}

/// Normalizer, recognizer and field extractors wired together.
///
/// Vocabularies, configuration and the recognizer are fixed at construction
/// and shared by every document parsed through this pipeline.
pub struct ResumePipeline {
    recognizer: Arc<dyn Recognizer>,
    lexicon: Arc<Lexicon>,
    config: ExtractionConfig,
    assembler: RecordAssembler,
    text_extractor: Box<dyn TextExtractor>,
}

impl ResumePipeline {
    pub fn new() -> crate::Result<Self> {
        Ok(Self {
            recognizer: Arc::new(HeuristicRecognizer::new()?),
            lexicon: Arc::new(Lexicon::builtin()?),
            config: ExtractionConfig::default(),
            assembler: RecordAssembler::new()?,
            text_extractor: Box::new(CompositeExtractor::default()),
        })
    }

    #[must_use]
    pub fn with_recognizer(mut self, recognizer: Arc<dyn Recognizer>) -> Self {
        self.recognizer = recognizer;
        self
    }

    #[must_use]
    pub fn with_lexicon(mut self, lexicon: Arc<Lexicon>) -> Self {
        self.lexicon = lexicon;
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: ExtractionConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn with_text_extractor(mut self, extractor: Box<dyn TextExtractor>) -> Self {
        self.text_extractor = extractor;
        self
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub const fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Extract a record from already-decoded text.
    pub fn parse_text(&self, raw: &str) -> ParsedRecord {
        self.analyze(&Document::new(raw)).0
    }

    fn analyze(&self, document: &Document) -> (ParsedRecord, usize) {
        let text = document.normalized();
        let spans = self.recognizer.recognize(text);
        let record = self
            .assembler
            .assemble(text, &spans, &self.lexicon, &self.config);

        tracing::debug!(
            recognizer = self.recognizer.name(),
            chars = text.chars().count(),
            spans = spans.len(),
            name = record.name.is_some(),
            emails = record.emails.len(),
            phones = record.phones.len(),
            skills = record.skills.len(),
            education = record.education_snippets.len(),
            "Parsed document"
        );

        (record, spans.len())
    }

    /// Decode `data` according to the filename's extension and extract a
    /// record. Undecodable input yields an empty record.
    pub async fn parse_document(&self, data: &[u8], meta: FileMeta) -> ParseOutput {
        let start = Instant::now();
        let format = meta.format();

        let extracted = match format {
            Some(format) => self.text_extractor.extract(data, format).await,
            None => ExtractedText::Absent(format!("unrecognised file type: {}", meta.filename)),
        };

        if let ExtractedText::Absent(reason) = &extracted {
            tracing::warn!("No text extracted from {}: {}", meta.filename, reason);
        }
        let text_found = extracted.is_present();
        let raw_text = extracted.into_text();

        let document = Document::new(raw_text.as_str());
        let (record, entity_spans) = self.analyze(&document);

        let stats = ParseStats {
            chars: document.normalized().chars().count(),
            entity_spans,
            duration_ms: u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
        };

        ParseOutput {
            meta: Some(meta),
            format,
            text_found,
            record,
            raw_text,
            stats,
        }
    }

    pub async fn parse_file(&self, path: &Path) -> IngestResult<ParseOutput> {
        let metadata = tokio::fs::metadata(path).await?;
        if !metadata.is_file() {
            return Err(IngestError::NotAFile(path.display().to_string()));
        }

        let data = tokio::fs::read(path).await?;
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(String::from)
            .unwrap_or_default();

        let meta = FileMeta::new(filename, data.len() as u64);
        Ok(self.parse_document(&data, meta).await)
    }

    pub async fn parse_files(&self, paths: &[&Path]) -> BatchParseResult {
        let mut result = BatchParseResult::new();

        for path in paths {
            let path_str = path.to_string_lossy().to_string();

            match self.parse_file(path).await {
                Ok(output) => result.add_success(output),
                Err(e) => result.add_failure(path_str, e),
            }
        }

        result
    }

    /// Parse every regular file directly inside `dir`, in filename order.
    pub async fn parse_directory(&self, dir: &Path) -> IngestResult<BatchParseResult> {
        let mut paths = Vec::new();
        let mut entries = tokio::fs::read_dir(dir).await?;

        while let Some(entry) = entries.next_entry().await? {
            if entry.file_type().await?.is_file() {
                paths.push(entry.path());
            }
        }
        paths.sort();

        let refs: Vec<&Path> = paths.iter().map(std::path::PathBuf::as_path).collect();
        Ok(self.parse_files(&refs).await)
    }
}

pub struct BatchParseResult {
    pub successful: Vec<ParseOutput>,
    pub failed: Vec<(String, IngestError)>,
    pub total_stats: ParseStats,
}

impl BatchParseResult {
    #[must_use]
    pub fn new() -> Self {
        Self {
            successful: Vec::new(),
            failed: Vec::new(),
            total_stats: ParseStats::default(),
        }
    }

    fn add_success(&mut self, output: ParseOutput) {
        self.total_stats.chars += output.stats.chars;
        self.total_stats.entity_spans += output.stats.entity_spans;
        self.total_stats.duration_ms += output.stats.duration_ms;
        self.successful.push(output);
    }

    fn add_failure(&mut self, path: String, error: IngestError) {
        self.failed.push((path, error));
    }

    pub fn success_count(&self) -> usize {
        self.successful.len()
    }

    pub fn failure_count(&self) -> usize {
        self.failed.len()
    }
}

impl Default for BatchParseResult {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::entity::{EntityCategory, EntitySpan};
    use crate::vocabulary::Vocabulary;

    /// Returns fixed spans and counts how often it is asked.
    struct FixtureRecognizer {
        spans: Vec<EntitySpan>,
        calls: AtomicUsize,
    }

    impl FixtureRecognizer {
        fn new(spans: Vec<EntitySpan>) -> Arc<Self> {
            Arc::new(Self {
                spans,
                calls: AtomicUsize::new(0),
            })
        }
    }

    impl Recognizer for FixtureRecognizer {
        fn name(&self) -> &'static str {
            "fixture"
        }

        fn recognize(&self, _text: &str) -> Vec<EntitySpan> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.spans.clone()
        }
    }

    fn pipeline() -> ResumePipeline {
        ResumePipeline::new().unwrap()
    }

    #[test]
    fn test_empty_input() {
        let record = pipeline().parse_text("");
        assert_eq!(record.name, None);
        assert!(record.emails.is_empty());
        assert!(record.phones.is_empty());
        assert!(record.links.is_empty());
        assert!(record.skills.is_empty());
        assert!(record.education_snippets.is_empty());
        assert!(record.title_hints.is_empty());
        assert_eq!(record.experience_years, None);
        assert_eq!(record.text_preview, "");
    }

    #[test]
    fn test_default_recognizer_finds_header_name() {
        let text = "  Jane Doe\r\nData Engineer | jane.doe@example.com\r\n\r\nSkills: Python, SQL, Airflow";
        let record = pipeline().parse_text(text);

        assert_eq!(record.name.as_deref(), Some("Jane Doe"));
        assert_eq!(record.emails, vec!["jane.doe@example.com"]);
        assert_eq!(record.skills, vec!["Airflow", "Python", "SQL"]);
        assert_eq!(record.title_hints, vec!["Engineer"]);
        assert!(!record.text_preview.contains('\r'));
    }

    #[test]
    fn test_recognizer_called_once_per_document_and_shared() {
        let recognizer = FixtureRecognizer::new(Vec::new());
        let pipeline = pipeline().with_recognizer(recognizer.clone());

        pipeline.parse_text("one");
        pipeline.parse_text("two");
        pipeline.parse_text("");

        assert_eq!(recognizer.calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_late_person_not_selected() {
        let mut text = "y".repeat(5000);
        text.push_str(" Jane Doe");
        let recognizer = FixtureRecognizer::new(vec![EntitySpan::new(
            EntityCategory::Person,
            "Jane Doe".into(),
            5001,
            5009,
        )]);

        let record = pipeline().with_recognizer(recognizer).parse_text(&text);
        assert_eq!(record.name, None);
    }

    #[test]
    fn test_fixture_lexicon() {
        let lexicon = Lexicon::new(
            Vocabulary::new(["Go"]).unwrap(),
            Vocabulary::new(["Diploma"]).unwrap(),
            Vocabulary::new(["Wrangler"]).unwrap(),
        );
        let pipeline = pipeline().with_lexicon(Arc::new(lexicon));

        let record = pipeline.parse_text("Go and Golang. Diploma. Data Wrangler, Engineer");
        assert_eq!(record.skills, vec!["Go"]);
        assert_eq!(record.education_snippets.len(), 1);
        assert_eq!(record.title_hints, vec!["Wrangler"]);
    }

    #[test]
    fn test_config_applied() {
        let config = ExtractionConfig {
            preview_len: 4,
            ..ExtractionConfig::default()
        };
        let record = pipeline().with_config(config).parse_text("abcdefgh");
        assert_eq!(record.text_preview, "abcd...");
    }

    #[tokio::test]
    async fn test_parse_document_passes_meta_through() {
        let output = pipeline()
            .parse_document(b"Jane Doe\nexperience: 3 years", FileMeta::new("cv.txt", 29))
            .await;

        assert_eq!(output.meta, Some(FileMeta::new("cv.txt", 29)));
        assert_eq!(output.format, Some(DocumentFormat::PlainText));
        assert!(output.text_found);
        assert_eq!(output.record.experience_years, Some(3));
        assert!(output.stats.entity_spans >= 1);
    }

    #[tokio::test]
    async fn test_unsupported_format_gives_empty_record() {
        let p = pipeline();
        for name in ["cv.pdf", "cv.docx", "cv.rtf"] {
            let output = p.parse_document(b"binary", FileMeta::new(name, 6)).await;
            assert!(!output.text_found);
            assert!(output.raw_text.is_empty());
            assert!(output.record.is_empty());
        }
    }

    #[tokio::test]
    async fn test_parse_file_and_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.txt"), "Bob Stone\nbob@stone.io").unwrap();
        std::fs::write(dir.path().join("a.md"), "# Ann Lee\n5 years of experience").unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();

        let p = pipeline();
        let single = p.parse_file(&dir.path().join("b.txt")).await.unwrap();
        assert_eq!(single.record.emails, vec!["bob@stone.io"]);
        assert_eq!(single.meta.unwrap().size, 22);

        let batch = p.parse_directory(dir.path()).await.unwrap();
        assert_eq!(batch.success_count(), 2);
        assert_eq!(batch.failure_count(), 0);
        assert_eq!(
            batch.successful[0].meta.as_ref().unwrap().filename,
            "a.md"
        );
        assert_eq!(batch.successful[0].record.experience_years, Some(5));
    }

    #[tokio::test]
    async fn test_parse_files_collects_failures() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");

        let batch = pipeline().parse_files(&[missing.as_path(), dir.path()]).await;
        assert_eq!(batch.success_count(), 0);
        assert_eq!(batch.failure_count(), 2);
        assert!(matches!(batch.failed[1].1, IngestError::NotAFile(_)));
    }
}
