//! Morphospace tables: canonical states, rhythmic presets and visual types.
//!
//! Coordinates are ordered as [`MorphParameter::ALL`](crate::ids::MorphParameter::ALL):
//! construction transparency, texture curl intensity, density volume,
//! color dimension, styling drama. Every coordinate lies in `[0, 1]`.

use crate::ids::{MorphStateId, OscillationPattern, RhythmicPresetId, VisualTypeId};
use crate::model::{
    MorphCoordinates, MorphState, Morphospace, OpticalProperties, RhythmicPreset, VisualType,
};

/// Returns the complete morphospace tables.
#[must_use]
pub fn tables() -> Morphospace {
    Morphospace {
        states: states(),
        presets: presets(),
        visual_types: visual_types(),
    }
}

fn state(id: MorphStateId, coordinates: [f64; 5]) -> MorphState {
    MorphState {
        id,
        coordinates: MorphCoordinates(coordinates),
    }
}

fn states() -> Vec<MorphState> {
    vec![
        state(MorphStateId::EverydayNatural, [0.60, 0.25, 0.50, 0.15, 0.20]),
        state(MorphStateId::RedCarpetGlam, [0.90, 0.40, 0.70, 0.75, 0.80]),
        state(MorphStateId::EditorialSculpt, [0.75, 0.05, 0.65, 0.50, 0.85]),
        state(MorphStateId::TheatricalVolume, [0.30, 0.45, 0.90, 0.60, 0.95]),
        state(MorphStateId::ProtectiveCrown, [0.55, 0.85, 0.55, 0.10, 0.30]),
        state(MorphStateId::FantasyExtreme, [1.00, 0.50, 1.00, 1.00, 1.00]),
        state(MorphStateId::MedicalComfort, [0.45, 0.20, 0.40, 0.05, 0.05]),
        state(MorphStateId::TexturedNatural, [0.65, 0.75, 0.60, 0.20, 0.35]),
    ]
}

// Periods interleave with neighbouring aesthetic domains: 22 and 14 are
// unique, 18, 20 and 28 are shared.
fn presets() -> Vec<RhythmicPreset> {
    vec![
        RhythmicPreset {
            id: RhythmicPresetId::TextureMorph,
            state_a: MorphStateId::EverydayNatural,
            state_b: MorphStateId::TexturedNatural,
            pattern: OscillationPattern::Sinusoidal,
            num_cycles: 3,
            steps_per_cycle: 22,
            description: "Smooth oscillation between straight/wavy and curly/coily textures",
        },
        RhythmicPreset {
            id: RhythmicPresetId::DensityBreathe,
            state_a: MorphStateId::MedicalComfort,
            state_b: MorphStateId::TheatricalVolume,
            pattern: OscillationPattern::Sinusoidal,
            num_cycles: 4,
            steps_per_cycle: 18,
            description: "Volume expansion/contraction cycle from sparse comfort to dramatic \
                          fullness",
        },
        RhythmicPreset {
            id: RhythmicPresetId::DramaSweep,
            state_a: MorphStateId::EverydayNatural,
            state_b: MorphStateId::RedCarpetGlam,
            pattern: OscillationPattern::Triangular,
            num_cycles: 2,
            steps_per_cycle: 28,
            description: "Linear ramp from understated natural to full glamour presentation",
        },
        RhythmicPreset {
            id: RhythmicPresetId::ConstructionShift,
            state_a: MorphStateId::TheatricalVolume,
            state_b: MorphStateId::EditorialSculpt,
            pattern: OscillationPattern::Sinusoidal,
            num_cycles: 5,
            steps_per_cycle: 14,
            description: "Rapid oscillation between opaque theatrical and transparent \
                          editorial construction",
        },
        RhythmicPreset {
            id: RhythmicPresetId::ColorPulse,
            state_a: MorphStateId::ProtectiveCrown,
            state_b: MorphStateId::FantasyExtreme,
            pattern: OscillationPattern::Sinusoidal,
            num_cycles: 3,
            steps_per_cycle: 20,
            description: "Color dimensionality cycling from minimal flat tone to complex \
                          multi-technique",
        },
    ]
}

fn visual_types() -> Vec<VisualType> {
    vec![
        VisualType {
            id: VisualTypeId::NaturalRealism,
            coordinates: MorphCoordinates([0.60, 0.25, 0.50, 0.15, 0.20]),
            keywords: &[
                "invisible hairline blending into skin",
                "natural strand movement with light bounce",
                "realistic scalp visibility through parting",
                "soft body wave catching ambient light",
                "understated everyday hairstyle",
                "believable biological hair texture",
            ],
            optical: OpticalProperties {
                finish: "satin",
                light_interaction: "diffuse_scatter",
                sheen_level: "moderate",
            },
            color_associations: &[
                "warm brunettes",
                "natural blacks",
                "honey blondes",
                "subtle warm undertones",
            ],
        },
        VisualType {
            id: VisualTypeId::GlamourCascade,
            coordinates: MorphCoordinates([0.90, 0.40, 0.75, 0.80, 0.80]),
            keywords: &[
                "luxurious cascading waves",
                "voluminous body with dimensional highlights",
                "hand-painted balayage color depth",
                "red carpet volumetric silhouette",
                "high-gloss strand reflections",
                "dramatic root shadow fading to bright ends",
                "movement-rich layered flow",
            ],
            optical: OpticalProperties {
                finish: "high_gloss",
                light_interaction: "specular_ribbon",
                sheen_level: "high",
            },
            color_associations: &[
                "champagne highlights",
                "rose gold tones",
                "caramel ribbons",
                "multi-tonal blonde dimension",
                "warm copper accents",
            ],
        },
        VisualType {
            id: VisualTypeId::EditorialSculpture,
            coordinates: MorphCoordinates([0.75, 0.05, 0.65, 0.50, 0.85]),
            keywords: &[
                "architectural hair silhouette",
                "razor-sharp geometric edges",
                "sculptural volume at crown tapering to points",
                "sleek pin-straight reflective sheets",
                "fashion editorial precision styling",
                "dramatic asymmetric shape",
                "high-contrast structural form",
            ],
            optical: OpticalProperties {
                finish: "mirror_gloss",
                light_interaction: "planar_reflection",
                sheen_level: "extreme",
            },
            color_associations: &[
                "jet black mirror finish",
                "platinum ice blonde",
                "stark monochrome",
                "electric fashion colors",
            ],
        },
        VisualType {
            id: VisualTypeId::TexturedCrown,
            coordinates: MorphCoordinates([0.60, 0.85, 0.60, 0.15, 0.35]),
            keywords: &[
                "densely packed coil springs",
                "voluminous natural afro silhouette",
                "tight curl definition with shrinkage",
                "crown of kinky-curly texture",
                "matte coil surface absorbing light",
                "celebrating natural 4B-4C pattern",
                "protective styling versatility",
            ],
            optical: OpticalProperties {
                finish: "matte_velvet",
                light_interaction: "diffuse_absorb",
                sheen_level: "low",
            },
            color_associations: &[
                "deep espresso browns",
                "blue-black depth",
                "warm chestnut undertones",
                "natural dark richness",
            ],
        },
    ]
}
