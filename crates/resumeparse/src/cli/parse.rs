use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use resumeparse_core::record::truncate_chars;
use resumeparse_core::{ParseOutput, ResumePipeline};

const TEXT_ECHO_LIMIT: usize = 4000;

pub struct Options {
    pub compact: bool,
    pub with_meta: bool,
    pub output: Option<PathBuf>,
    pub show_text: bool,
}

pub async fn run(pipeline: &ResumePipeline, paths: &[PathBuf], opts: &Options) -> Result<()> {
    let mut values = Vec::with_capacity(paths.len());

    for path in paths {
        let output = parse_one(pipeline, path).await?;
        if opts.show_text {
            echo_text(&output);
        }
        values.push(render(&output, opts.with_meta)?);
    }

    let value = if values.len() == 1 {
        values.remove(0)
    } else {
        serde_json::Value::Array(values)
    };
    let json = super::to_json(&value, opts.compact)?;

    match &opts.output {
        Some(dest) => {
            std::fs::write(dest, format!("{json}\n"))
                .with_context(|| format!("failed to write {}", dest.display()))?;
            eprintln!("Wrote: {}", dest.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}

pub async fn parse_one(pipeline: &ResumePipeline, path: &Path) -> Result<ParseOutput> {
    if !path.exists() {
        bail!("file not found: {}", path.display());
    }

    pipeline
        .parse_file(path)
        .await
        .with_context(|| format!("failed to parse {}", path.display()))
}

pub fn render(output: &ParseOutput, with_meta: bool) -> Result<serde_json::Value> {
    let record = serde_json::to_value(&output.record)?;
    if !with_meta {
        return Ok(record);
    }

    Ok(serde_json::json!({
        "file": output.meta,
        "format": output.format,
        "text_found": output.text_found,
        "record": record,
    }))
}

fn echo_text(output: &ParseOutput) {
    eprintln!(
        "{}",
        truncate_chars(&output.raw_text, TEXT_ECHO_LIMIT, "\n...\n(truncated)")
    );
    if let Some(meta) = &output.meta {
        eprintln!("File: {} • Size: {} bytes", meta.filename, meta.size);
    }
}
