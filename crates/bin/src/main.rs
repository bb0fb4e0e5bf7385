//! FSA CLI binary.
//!
//! Fetches statements for the configured companies, prints every ratio group
//! and writes its table and chart layout to the output directory, plus one
//! long-format file with every ratio.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use fsa::{Analysis, AnalysisConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// All ratios in long format, one row per company, ratio and year.
const TIDY_FILE_NAME: &str = "ratios.csv";

#[derive(Parser, Debug)]
#[command(name = "fsa")]
#[command(about = "Financial ratio analysis of Taiwan-listed companies", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory the CSV tables and chart layouts are written to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let analysis = Analysis::sinotrade(AnalysisConfig::default())?;
    let report = analysis.run().await?;

    for section in report.sections() {
        println!("{}", section.title());
        println!("{}", section.table);
    }

    let files = report.write_files(&cli.output_dir)?;
    report.write_tidy_csv(&cli.output_dir.join(TIDY_FILE_NAME))?;
    info!(
        files = files.len() * 2 + 1,
        dir = %cli.output_dir.display(),
        "Wrote tables, chart layouts and tidy ratios"
    );

    Ok(())
}
