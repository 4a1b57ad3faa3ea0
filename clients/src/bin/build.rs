//! `wig-build`: Writes the wig taxonomy snapshot to the output directory.
//!
//! **Outputs:**
//! - `<out>/wig.taxonomy.json`: every table with its descriptor fields
//!
//! **Usage:**
//! ```text
//! wig-build [--out <path>]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use wig_conformance::validators::artifact::ARTIFACT_FILE;
use wig_taxonomy::serializer::json::to_json;
use wig_taxonomy::Taxonomy;

/// Build the wig taxonomy artifact.
#[derive(Parser)]
#[command(name = "wig-build", about = "Build the wig taxonomy JSON artifact")]
struct Args {
    /// Output directory for generated artifacts.
    #[arg(long, default_value = "public")]
    out: PathBuf,
}

fn main() -> Result<()> {
    wig_clients::init_logging();
    let args = Args::parse();
    let out = &args.out;

    fs::create_dir_all(out)
        .with_context(|| format!("Failed to create output directory: {}", out.display()))?;

    let taxonomy = Taxonomy::standard();
    println!(
        "Wig taxonomy v{}: {} cap constructions, {} texture patterns, {} style contexts, \
         {} morphospace states, {} presets",
        taxonomy.version,
        taxonomy.cap_constructions.len(),
        taxonomy.texture_patterns.len(),
        taxonomy.style_contexts.len(),
        taxonomy.morphospace.states.len(),
        taxonomy.morphospace.presets.len(),
    );

    let json_path = out.join(ARTIFACT_FILE);
    let json_str = serde_json::to_string_pretty(&to_json(taxonomy))
        .context("Failed to serialize taxonomy to JSON")?;
    fs::write(&json_path, &json_str)
        .with_context(|| format!("Failed to write {}", json_path.display()))?;
    tracing::debug!(bytes = json_str.len(), "wrote taxonomy artifact");
    println!("  Written: {}", json_path.display());

    println!("Build complete.");
    Ok(())
}
