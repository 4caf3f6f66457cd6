pub mod check;
pub mod parse;
pub mod sample;
pub mod vocab;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use resumeparse_core::{ExtractionConfig, HeuristicRecognizer, Lexicon, ResumePipeline};

#[derive(Parser)]
#[command(
    name = "rparse",
    about = "Extract structured fields from resumes",
    version
)]
pub struct Cli {
    /// JSON file replacing or extending the built-in vocabularies
    #[arg(long, global = true)]
    pub lexicon: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse resume files and print the extracted fields as JSON
    Parse {
        /// Resume file(s) (.txt, .md; .pdf and .docx yield empty records)
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        /// Print single-line JSON
        #[arg(long)]
        compact: bool,
        /// Wrap each record with its file name and size
        #[arg(long)]
        with_meta: bool,
        /// Write the JSON to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Echo the extracted text to stderr
        #[arg(long)]
        show_text: bool,
    },
    /// Parse the bundled sample resume
    Sample {
        #[arg(long)]
        compact: bool,
    },
    /// Check whether a resume lists a skill
    Check {
        path: PathBuf,
        skill: String,
    },
    /// List a built-in or configured vocabulary
    Vocab {
        #[arg(value_enum)]
        kind: VocabKind,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VocabKind {
    Skills,
    Education,
    Titles,
}

/// Build the process-wide pipeline: vocabularies, config and recognizer
/// are loaded here once and reused for every input.
pub fn build_pipeline(lexicon_path: Option<&Path>) -> Result<ResumePipeline> {
    let lexicon = match lexicon_path {
        Some(path) => Lexicon::from_file(path)
            .with_context(|| format!("failed to load lexicon {}", path.display()))?,
        None => Lexicon::builtin()?,
    };

    // Middle initials such as `C.` must never hit a stopword.
    let stopwords = lexicon
        .skills
        .iter()
        .chain(lexicon.titles.iter())
        .filter(|term| term.chars().count() > 1);
    let recognizer = HeuristicRecognizer::new()?.with_stopwords(stopwords);

    tracing::debug!(
        "Loaded lexicon: {} skills, {} education keywords, {} titles",
        lexicon.skills.len(),
        lexicon.education.len(),
        lexicon.titles.len()
    );

    Ok(ResumePipeline::new()?
        .with_recognizer(Arc::new(recognizer))
        .with_lexicon(Arc::new(lexicon))
        .with_config(ExtractionConfig::from_env()))
}

fn to_json(value: &serde_json::Value, compact: bool) -> Result<String> {
    let json = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    Ok(json)
}
