//! `wig-map`: Maps a wig parameter request to vocabulary.
//!
//! The request is a JSON document read from a file or stdin (`-`). `--layers`
//! and `--volume` take encoded values that override the request's fields.
//! With `--style`, the style preset is applied before mapping.
//!
//! **Usage:**
//! ```text
//! wig-map [--request <path|->] [--layers '[14, 12]'] [--volume '{"crown": 1.3}']
//!         [--style <id>] [--composite] [--pretty]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use wig_mapper::{
    decode_layers, decode_volume_distribution, ParameterMapper, ParameterRequest, StyleApplier,
};
use wig_taxonomy::Taxonomy;

/// Map wig parameters to vocabulary.
#[derive(Parser)]
#[command(name = "wig-map", about = "Map wig parameters to deterministic vocabulary")]
struct Args {
    /// Request document, or `-` for stdin.
    #[arg(long, default_value = "-")]
    request: PathBuf,

    /// Encoded layer list overriding the request's `layers`.
    #[arg(long)]
    layers: Option<String>,

    /// Encoded zone map overriding the request's `volume_distribution`.
    #[arg(long)]
    volume: Option<String>,

    /// Style context to apply before mapping.
    #[arg(long)]
    style: Option<String>,

    /// Print only the composite vocabulary string.
    #[arg(long)]
    composite: bool,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    wig_clients::init_logging();
    let args = Args::parse();
    let taxonomy = Taxonomy::standard();

    let document = wig_clients::read_document(&args.request)?;
    let mut request = ParameterRequest::from_json(&document)
        .with_context(|| format!("Invalid request in {}", args.request.display()))?;
    if let Some(layers) = &args.layers {
        request.layers = decode_layers(layers)?;
    }
    if let Some(volume) = &args.volume {
        request.volume_distribution = decode_volume_distribution(volume)?;
    }

    let parameters = request.validate(taxonomy)?;
    match &args.style {
        Some(style) => {
            let styled = StyleApplier::new(taxonomy).apply_and_map(&parameters, style)?;
            if args.composite {
                println!("{}", styled.result.composite_vocabulary);
                return Ok(());
            }
            wig_clients::print_json(&styled, args.pretty)
        }
        None => {
            let result = ParameterMapper::new(taxonomy).map(&parameters)?;
            if args.composite {
                println!("{}", result.composite_vocabulary);
                return Ok(());
            }
            wig_clients::print_json(&result, args.pretty)
        }
    }
}
