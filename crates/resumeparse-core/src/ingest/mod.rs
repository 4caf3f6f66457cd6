mod normalizer;
mod parser;
mod pipeline;
mod recognizer;

pub use normalizer::{normalize_whitespace, Document};
pub use parser::{
    CompositeExtractor, DocumentFormat, ExtractedText, FileMeta, PlainTextExtractor,
    TextExtractor,
};
pub use pipeline::{
    BatchParseResult, IngestError, IngestResult, ParseOutput, ParseStats, ResumePipeline,
};
pub use recognizer::{HeuristicRecognizer, Recognizer};
