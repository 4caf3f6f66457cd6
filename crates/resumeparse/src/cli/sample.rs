use anyhow::Result;
use resumeparse_core::{FileMeta, ResumePipeline};

pub const SAMPLE_NAME: &str = "sample_resume.txt";
pub const SAMPLE_RESUME: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/samples/sample_resume.txt"
));

pub async fn run(pipeline: &ResumePipeline, compact: bool) -> Result<()> {
    let meta = FileMeta::new(SAMPLE_NAME, SAMPLE_RESUME.len() as u64);
    let output = pipeline
        .parse_document(SAMPLE_RESUME.as_bytes(), meta)
        .await;

    let value = super::parse::render(&output, false)?;
    println!("{}", super::to_json(&value, compact)?);
    Ok(())
}
