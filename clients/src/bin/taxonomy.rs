//! `wig-taxonomy`: Prints the taxonomy or a single entry as JSON.
//!
//! **Usage:**
//! ```text
//! wig-taxonomy list
//! wig-taxonomy cap <id>
//! wig-taxonomy texture <id>
//! wig-taxonomy style <id>
//! wig-taxonomy info
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use anyhow::Result;
use clap::{Parser, Subcommand};
use wig_taxonomy::serializer::json::{cap_to_json, style_to_json, texture_to_json, to_json};
use wig_taxonomy::Taxonomy;

/// Look up wig taxonomy entries.
#[derive(Parser)]
#[command(name = "wig-taxonomy", about = "Inspect the wig design taxonomy")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Pretty-print the JSON output.
    #[arg(long, global = true)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Every table with its descriptor fields.
    List,
    /// One cap construction.
    Cap {
        /// Cap construction id, e.g. `lace_front`.
        id: String,
    },
    /// One texture pattern.
    Texture {
        /// Texture pattern id, e.g. `body_wave`.
        id: String,
    },
    /// One style context.
    Style {
        /// Style id, e.g. `theatrical`.
        id: String,
    },
    /// Service capabilities and recommended workflow.
    Info,
}

fn main() -> Result<()> {
    wig_clients::init_logging();
    let args = Args::parse();
    let taxonomy = Taxonomy::standard();

    let document = match &args.command {
        Command::List => to_json(taxonomy),
        Command::Cap { id } => cap_to_json(taxonomy.get_cap_construction(id)?),
        Command::Texture { id } => texture_to_json(taxonomy.get_texture_pattern(id)?),
        Command::Style { id } => style_to_json(taxonomy.get_style_context(id)?),
        Command::Info => serde_json::to_value(wig_mapper::service_info(taxonomy))?,
    };
    wig_clients::print_json(&document, args.pretty)
}
