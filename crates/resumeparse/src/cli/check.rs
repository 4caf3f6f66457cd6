use std::path::Path;

use anyhow::Result;
use resumeparse_core::ResumePipeline;

pub async fn run(pipeline: &ResumePipeline, path: &Path, skill: &str) -> Result<()> {
    let output = super::parse::parse_one(pipeline, path).await?;

    if output.record.has_skill(skill) {
        println!("Found: {skill}");
    } else {
        println!("Not found");
    }

    Ok(())
}
