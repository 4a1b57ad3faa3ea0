//! `wig-morph`: Explores the wig aesthetic morphospace.
//!
//! Points are canonical state ids or JSON coordinate objects such as
//! `'{"texture_curl_intensity": 0.8, "styling_drama": 0.3}'`.
//!
//! **Usage:**
//! ```text
//! wig-morph states [<id>]
//! wig-morph presets
//! wig-morph preset <id>
//! wig-morph sequence (--preset <id> | --state-a <id> --state-b <id>) [--pattern ..]
//!                    [--cycles N] [--steps N] [--phase-offset X]
//! wig-morph visual <point> [--strength X]
//! wig-morph prompt [--state <point> | --preset <id> --keyframes N] [--style-modifier TEXT]
//! wig-morph distance <point> <point>
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
use wig_mapper::{MorphEngine, PromptSource, SequenceRequest};
use wig_taxonomy::Taxonomy;

/// Explore the wig morphospace.
#[derive(Parser)]
#[command(name = "wig-morph", about = "Morphospace states, rhythmic sequences and prompts")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Pretty-print the JSON output.
    #[arg(long, global = true)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Command {
    /// All canonical states, or one.
    States {
        /// State id.
        id: Option<String>,
    },
    /// Curated rhythmic presets.
    Presets,
    /// Full trajectory of one preset.
    Preset {
        /// Preset id, e.g. `drama_sweep`.
        id: String,
    },
    /// Oscillation between two states.
    Sequence {
        /// Curated preset; overrides every other option.
        #[arg(long, conflicts_with_all = ["state_a", "state_b"])]
        preset: Option<String>,
        /// Starting state.
        #[arg(long, requires = "state_b")]
        state_a: Option<String>,
        /// Alternating state.
        #[arg(long, requires = "state_a")]
        state_b: Option<String>,
        /// Waveform: sinusoidal, triangular or square.
        #[arg(long, default_value = "sinusoidal")]
        pattern: String,
        /// Complete A→B→A cycles.
        #[arg(long, default_value_t = 3)]
        cycles: u32,
        /// Samples per cycle.
        #[arg(long, default_value_t = 20)]
        steps: u32,
        /// Starting phase in [0, 1].
        #[arg(long, default_value_t = 0.0)]
        phase_offset: f64,
    },
    /// Keywords of the visual type nearest to a point.
    Visual {
        /// State id or JSON coordinates.
        point: String,
        /// Keyword weight in [0, 1].
        #[arg(long, default_value_t = 1.0)]
        strength: f64,
    },
    /// Image-generation prompt for a point or a preset trajectory.
    Prompt {
        /// State id or JSON coordinates; defaults to the glamour cascade type.
        #[arg(long, conflicts_with = "preset")]
        state: Option<String>,
        /// Preset whose trajectory is sampled into keyframes.
        #[arg(long)]
        preset: Option<String>,
        /// Number of keyframes in sequence mode.
        #[arg(long, default_value_t = 4)]
        keyframes: u32,
        /// Prefix such as "fashion photography".
        #[arg(long)]
        style_modifier: Option<String>,
    },
    /// Distance between two points.
    Distance {
        /// First point.
        a: String,
        /// Second point.
        b: String,
    },
}

fn main() -> Result<()> {
    wig_clients::init_logging();
    let args = Args::parse();
    let engine = MorphEngine::new(Taxonomy::standard());
    let pretty = args.pretty;

    match args.command {
        Command::States { id: None } => wig_clients::print_json(&engine.states(), pretty),
        Command::States { id: Some(id) } => wig_clients::print_json(&engine.state(&id)?, pretty),
        Command::Presets => wig_clients::print_json(&engine.list_presets(), pretty),
        Command::Preset { id } => wig_clients::print_json(&engine.apply_preset(&id)?, pretty),
        Command::Sequence {
            preset,
            state_a,
            state_b,
            pattern,
            cycles,
            steps,
            phase_offset,
        } => {
            let request = SequenceRequest {
                preset,
                state_a,
                state_b,
                pattern,
                num_cycles: cycles,
                steps_per_cycle: steps,
                phase_offset,
            };
            wig_clients::print_json(&engine.generate_sequence(&request)?, pretty)
        }
        Command::Visual { point, strength } => {
            wig_clients::print_json(&engine.extract_visual_vocabulary(&point, strength)?, pretty)
        }
        Command::Prompt {
            state,
            preset,
            keyframes,
            style_modifier,
        } => {
            let source = match preset {
                Some(preset) => PromptSource::Sequence {
                    preset,
                    keyframe_count: keyframes,
                },
                None => PromptSource::Composite(state),
            };
            let prompt = engine.generate_attractor_prompt(&source, style_modifier.as_deref())?;
            wig_clients::print_json(&prompt, pretty)
        }
        Command::Distance { a, b } => wig_clients::print_json(&engine.distance(&a, &b)?, pretty),
    }
}
