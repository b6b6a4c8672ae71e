//! Reelband CLI — parallel movie rating-distribution pipeline.
//!
//! Usage:
//!   reelband <INPUT> [--output-dir DIR] [--workers N]

use clap::Parser;
use reelband::{Pipeline, PipelineConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "reelband",
    version,
    about = "Group movies by genre and bucket them into rating bands"
)]
struct Cli {
    /// Path to the `title|genre|rating` dataset
    input: PathBuf,

    /// Directory the per-genre JSON reports are written to
    #[arg(long, default_value = "output")]
    output_dir: PathBuf,

    /// Partition worker count (default: detected parallelism)
    #[arg(long)]
    workers: Option<usize>,
}

#[tokio::main]
async fn main() {
    // Diagnostics go to stderr; status lines below go to stdout.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    std::process::exit(run(cli).await);
}

async fn run(cli: Cli) -> i32 {
    let mut config = PipelineConfig::new(cli.input).with_output_dir(cli.output_dir);
    if let Some(workers) = cli.workers {
        config = config.with_workers(workers);
    }

    if let Ok(cwd) = std::env::current_dir() {
        println!("Working directory: {}", cwd.display());
    }
    println!("Input dataset: {}", config.input.display());
    println!(
        "Partitioning across {} workers, reports under {}",
        config.effective_workers(),
        config.output_dir.display()
    );

    match Pipeline::new(config).run().await {
        Ok(summary) => {
            println!(
                "Processed {} records into {} genres: {} reports written, {} failed ({} lines skipped)",
                summary.records,
                summary.genres,
                summary.reports_written,
                summary.report_failures,
                summary.skipped
            );
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}
