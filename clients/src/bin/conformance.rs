//! `wig-conformance`: Validates the taxonomy, the vocabulary contract and the
//! built artifact.
//!
//! **Usage:**
//! ```text
//! wig-conformance [--artifacts <path>]
//! ```
//!
//! Exits non-zero if any check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use wig_conformance::{run_all, Severity, WorkspacePaths};

/// Run the wig conformance suite.
#[derive(Parser)]
#[command(
    name = "wig-conformance",
    about = "Validate the wig taxonomy, vocabulary contract and built artifact"
)]
struct Args {
    /// Path to the built artifacts directory.
    #[arg(long, default_value = "public")]
    artifacts: PathBuf,
}

fn main() -> Result<()> {
    wig_clients::init_logging();
    let args = Args::parse();

    let report = run_all(&WorkspacePaths {
        artifacts: args.artifacts,
    })?;

    println!("Wig Conformance Report");
    println!("======================");
    println!();
    for result in &report.results {
        println!("{result}");
    }

    let failed = report.failure_count();
    println!();
    println!(
        "Summary: {} passed, {} warnings, {} failed",
        report.count(Severity::Pass),
        report.count(Severity::Warning),
        failed
    );

    if failed > 0 {
        eprintln!("Conformance FAILED: {failed} check(s) did not pass.");
        process::exit(1);
    }

    println!("Conformance PASSED.");
    Ok(())
}
