//! Influence timeline - renders `edges.csv` as an interactive
//! timeline-network chart at `assets/interactive.html`.
//!
//! Takes no arguments. Exit codes:
//!
//! - `0`: document written
//! - `1`: `edges.csv` missing or contains no edges (one-line diagnostic)
//! - non-zero: any other failure, reported with its full error chain

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use influence_timeline::{run, PipelineConfig, PipelineError};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// ============================================================================
// Main
// ============================================================================

fn main() -> Result<()> {
    init_tracing();

    let config = PipelineConfig::default();
    match run(&config) {
        Ok(summary) => {
            println!("Wrote {}", summary.output.display());
            Ok(())
        }
        Err(PipelineError::Input(err)) if err.is_clean_exit() => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
        Err(err) => Err(err.into()),
    }
}
