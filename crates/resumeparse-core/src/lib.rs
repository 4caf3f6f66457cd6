#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod entity;
pub mod error;
pub mod extract;
pub mod ingest;
pub mod record;
pub mod vocabulary;

pub use config::ExtractionConfig;
pub use entity::{EntityCategory, EntitySpan};
pub use error::{Error, Result};
pub use ingest::{
    BatchParseResult, CompositeExtractor, DocumentFormat, ExtractedText, FileMeta,
    HeuristicRecognizer, IngestError, IngestResult, ParseOutput, ParseStats,
    PlainTextExtractor, Recognizer, ResumePipeline, TextExtractor,
};
pub use record::ParsedRecord;
pub use vocabulary::{Lexicon, LexiconFile, Vocabulary};
