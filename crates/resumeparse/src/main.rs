use anyhow::Result;
use clap::Parser;

use resumeparse::cli::{self, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let pipeline = cli::build_pipeline(cli.lexicon.as_deref())?;

    match cli.command {
        Commands::Parse {
            paths,
            compact,
            with_meta,
            output,
            show_text,
        } => {
            let opts = cli::parse::Options {
                compact,
                with_meta,
                output,
                show_text,
            };
            cli::parse::run(&pipeline, &paths, &opts).await
        }
        Commands::Sample { compact } => cli::sample::run(&pipeline, compact).await,
        Commands::Check { path, skill } => cli::check::run(&pipeline, &path, &skill).await,
        Commands::Vocab { kind } => {
            cli::vocab::run(&pipeline, kind);
            Ok(())
        }
    }
}
