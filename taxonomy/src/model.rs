//! Core taxonomy record types.
//!
//! Every record is plain static data. Tables are built once as owned `Vec`s
//! and referenced via borrows; the top-level entry point is
//! [`Taxonomy::standard()`](crate::Taxonomy::standard).

use crate::error::{NotFound, TaxonomyKind};
use crate::ids::{
    CapConstructionId, EdgeTreatment, HighlightPattern, MorphParameter, MorphStateId,
    OscillationPattern, RhythmicPresetId, StyleId, TexturePatternId, VisualTypeId, Zone,
};

/// Placeholder substituted with [`TexturePattern::scale`] when rendering.
pub const SCALE_PLACEHOLDER: &str = "{scale}";

/// A cap construction: how strands are attached to the cap.
#[derive(Debug, Clone, PartialEq)]
pub struct CapConstruction {
    /// Stable id.
    pub id: CapConstructionId,
    /// Display name (e.g., `"Lace Front"`).
    pub name: &'static str,
    /// How freely the hair can be parted (e.g., `"hairline_only"`).
    pub parting_freedom: &'static str,
    /// What the construction looks like from outside (e.g., `"transparent_hairline"`).
    pub visibility: &'static str,
    /// Display vocabulary, used verbatim as the cap facet.
    pub vocabulary: &'static str,
}

/// A texture pattern with its curl classification and wave geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct TexturePattern {
    /// Stable id.
    pub id: TexturePatternId,
    /// Display name (e.g., `"Body Wave"`).
    pub name: &'static str,
    /// Curl classification code (e.g., `"2A-2B"`).
    pub curl_type: &'static str,
    /// Wave geometry descriptor (e.g., `"loose_S"`).
    pub wave_geometry: &'static str,
    /// Wavelength or curl diameter (e.g., `"3-4 inch wavelength"`), if the pattern has one.
    pub scale: Option<&'static str>,
    /// Wave geometry description. Contains [`SCALE_PLACEHOLDER`] exactly when
    /// `scale` is present.
    pub description: &'static str,
}

impl TexturePattern {
    /// Renders the texture vocabulary with the scale interpolated verbatim.
    #[must_use]
    pub fn vocabulary(&self) -> String {
        match self.scale {
            Some(scale) => self.description.replace(SCALE_PLACEHOLDER, scale),
            None => self.description.to_owned(),
        }
    }
}

/// Per-zone volume multipliers.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct VolumeProfile {
    /// Crown multiplier.
    pub crown: f64,
    /// Temple multiplier.
    pub temple: f64,
    /// Nape multiplier.
    pub nape: f64,
}

impl VolumeProfile {
    /// The neutral profile: every zone at 1.0.
    pub const NATURAL: VolumeProfile = VolumeProfile {
        crown: 1.0,
        temple: 1.0,
        nape: 1.0,
    };

    /// Returns the multiplier for `zone`.
    #[must_use]
    pub fn get(&self, zone: Zone) -> f64 {
        match zone {
            Zone::Crown => self.crown,
            Zone::Temple => self.temple,
            Zone::Nape => self.nape,
        }
    }

    /// Returns a new profile with `f` applied to every zone.
    #[must_use]
    pub fn map(&self, mut f: impl FnMut(Zone, f64) -> f64) -> VolumeProfile {
        VolumeProfile {
            crown: f(Zone::Crown, self.crown),
            temple: f(Zone::Temple, self.temple),
            nape: f(Zone::Nape, self.nape),
        }
    }
}

impl Default for VolumeProfile {
    fn default() -> Self {
        VolumeProfile::NATURAL
    }
}

/// A named style preset of density, volume and edge defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleContext {
    /// Stable id.
    pub id: StyleId,
    /// Density multiplier that replaces the caller's density.
    pub density: f64,
    /// Zone multipliers applied to the caller's volume distribution.
    pub volume: VolumeProfile,
    /// Edge treatment used when the caller left the default in place.
    pub edge: EdgeTreatment,
    /// Short aesthetic focus (e.g., `"dramatic volume, bold silhouette"`).
    pub focus: &'static str,
}

/// Vocabulary for one edge treatment.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeTreatmentEntry {
    /// Stable id.
    pub id: EdgeTreatment,
    /// Edge facet vocabulary.
    pub vocabulary: &'static str,
}

/// Vocabulary for one highlight pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct HighlightPatternEntry {
    /// Stable id.
    pub id: HighlightPattern,
    /// Highlight vocabulary embedded in the color facet.
    pub vocabulary: &'static str,
}

/// A point in the normalized 5-dimensional morphospace, indexed by [`MorphParameter`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MorphCoordinates(pub [f64; 5]);

impl MorphCoordinates {
    /// Returns the coordinate on `axis`.
    #[must_use]
    pub fn get(&self, axis: MorphParameter) -> f64 {
        self.0[axis as usize]
    }

    /// Sets the coordinate on `axis`.
    pub fn set(&mut self, axis: MorphParameter, value: f64) {
        self.0[axis as usize] = value;
    }

    /// Linear interpolation: `self * (1 - alpha) + other * alpha`.
    #[must_use]
    pub fn lerp(&self, other: &MorphCoordinates, alpha: f64) -> MorphCoordinates {
        let mut out = [0.0; 5];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = self.0[i] * (1.0 - alpha) + other.0[i] * alpha;
        }
        MorphCoordinates(out)
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(&self, other: &MorphCoordinates) -> f64 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<f64>()
            .sqrt()
    }
}

/// A canonical morphospace state.
#[derive(Debug, Clone, PartialEq)]
pub struct MorphState {
    /// Stable id.
    pub id: MorphStateId,
    /// Fixed coordinates.
    pub coordinates: MorphCoordinates,
}

/// A curated oscillation between two canonical states.
#[derive(Debug, Clone, PartialEq)]
pub struct RhythmicPreset {
    /// Stable id.
    pub id: RhythmicPresetId,
    /// Starting state.
    pub state_a: MorphStateId,
    /// Alternating state.
    pub state_b: MorphStateId,
    /// Waveform.
    pub pattern: OscillationPattern,
    /// Number of complete A→B→A cycles.
    pub num_cycles: u32,
    /// Samples per cycle (the period).
    pub steps_per_cycle: u32,
    /// Human-readable description.
    pub description: &'static str,
}

impl RhythmicPreset {
    /// Total number of samples in one run of the preset.
    #[must_use]
    pub fn total_steps(&self) -> u32 {
        self.num_cycles * self.steps_per_cycle
    }
}

/// How a visual archetype interacts with light.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OpticalProperties {
    /// Surface finish (e.g., `"satin"`).
    pub finish: &'static str,
    /// Dominant light interaction (e.g., `"diffuse_scatter"`).
    pub light_interaction: &'static str,
    /// Sheen level (e.g., `"moderate"`).
    pub sheen_level: &'static str,
}

/// A canonical visual archetype with image-generation keywords.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualType {
    /// Stable id.
    pub id: VisualTypeId,
    /// Position in morphospace used for nearest-neighbour matching.
    pub coordinates: MorphCoordinates,
    /// Prompt keywords, most characteristic first.
    pub keywords: &'static [&'static str],
    /// Optical properties.
    pub optical: OpticalProperties,
    /// Color associations, most characteristic first.
    pub color_associations: &'static [&'static str],
}

/// Morphospace tables: canonical states, rhythmic presets and visual types.
#[derive(Debug, Clone, PartialEq)]
pub struct Morphospace {
    /// Canonical states in table order.
    pub states: Vec<MorphState>,
    /// Rhythmic presets in table order.
    pub presets: Vec<RhythmicPreset>,
    /// Visual types in table order.
    pub visual_types: Vec<VisualType>,
}

/// The complete wig design taxonomy.
///
/// Built once from literal tables and never mutated afterwards; pass it by
/// reference into the mapper and the style applier.
#[derive(Debug, Clone, PartialEq)]
pub struct Taxonomy {
    /// Taxonomy version.
    pub version: &'static str,
    /// Cap constructions in table order.
    pub cap_constructions: Vec<CapConstruction>,
    /// Texture patterns in table order.
    pub texture_patterns: Vec<TexturePattern>,
    /// Style contexts in table order.
    pub style_contexts: Vec<StyleContext>,
    /// Edge treatments in table order.
    pub edge_treatments: Vec<EdgeTreatmentEntry>,
    /// Highlight patterns in table order.
    pub highlight_patterns: Vec<HighlightPatternEntry>,
    /// Morphospace tables.
    pub morphospace: Morphospace,
}

/// Read-only view over every table of a [`Taxonomy`].
#[derive(Debug, Clone, Copy)]
pub struct TaxonomySnapshot<'a> {
    /// Taxonomy version.
    pub version: &'static str,
    /// Cap constructions.
    pub cap_constructions: &'a [CapConstruction],
    /// Texture patterns.
    pub texture_patterns: &'a [TexturePattern],
    /// Style contexts.
    pub style_contexts: &'a [StyleContext],
    /// Edge treatments.
    pub edge_treatments: &'a [EdgeTreatmentEntry],
    /// Highlight patterns.
    pub highlight_patterns: &'a [HighlightPatternEntry],
}

fn lookup<'a, T>(
    table: &'a [T],
    kind: TaxonomyKind,
    id: &str,
    key: impl Fn(&T) -> &'static str,
) -> Result<&'a T, NotFound> {
    table
        .iter()
        .find(|entry| key(*entry) == id)
        .ok_or_else(|| NotFound {
            kind,
            id: id.to_owned(),
            available: table.iter().map(&key).collect(),
        })
}

impl Taxonomy {
    /// Looks up a cap construction by id.
    ///
    /// # Errors
    ///
    /// Returns [`NotFound`] if `id` is not one of the known cap constructions.
    pub fn get_cap_construction(&self, id: &str) -> Result<&CapConstruction, NotFound> {
        lookup(&self.cap_constructions, TaxonomyKind::CapConstruction, id, |c| {
            c.id.as_str()
        })
    }

    /// Looks up a texture pattern by id.
    ///
    /// # Errors
    ///
    /// Returns [`NotFound`] if `id` is not one of the known texture patterns.
    pub fn get_texture_pattern(&self, id: &str) -> Result<&TexturePattern, NotFound> {
        lookup(&self.texture_patterns, TaxonomyKind::TexturePattern, id, |t| {
            t.id.as_str()
        })
    }

    /// Looks up a style context by id.
    ///
    /// # Errors
    ///
    /// Returns [`NotFound`] if `id` is not one of the known style contexts.
    pub fn get_style_context(&self, id: &str) -> Result<&StyleContext, NotFound> {
        lookup(&self.style_contexts, TaxonomyKind::StyleContext, id, |s| {
            s.id.as_str()
        })
    }

    /// Looks up an edge treatment by id.
    ///
    /// # Errors
    ///
    /// Returns [`NotFound`] if `id` is not one of the known edge treatments.
    pub fn get_edge_treatment(&self, id: &str) -> Result<&EdgeTreatmentEntry, NotFound> {
        lookup(&self.edge_treatments, TaxonomyKind::EdgeTreatment, id, |e| {
            e.id.as_str()
        })
    }

    /// Looks up a highlight pattern by id.
    ///
    /// # Errors
    ///
    /// Returns [`NotFound`] if `id` is not one of the known highlight patterns.
    pub fn get_highlight_pattern(&self, id: &str) -> Result<&HighlightPatternEntry, NotFound> {
        lookup(
            &self.highlight_patterns,
            TaxonomyKind::HighlightPattern,
            id,
            |h| h.id.as_str(),
        )
    }

    /// Looks up a canonical morphospace state by id.
    ///
    /// # Errors
    ///
    /// Returns [`NotFound`] if `id` is not one of the canonical states.
    pub fn get_morph_state(&self, id: &str) -> Result<&MorphState, NotFound> {
        lookup(&self.morphospace.states, TaxonomyKind::MorphState, id, |s| {
            s.id.as_str()
        })
    }

    /// Looks up a rhythmic preset by id.
    ///
    /// # Errors
    ///
    /// Returns [`NotFound`] if `id` is not one of the curated presets.
    pub fn get_rhythmic_preset(&self, id: &str) -> Result<&RhythmicPreset, NotFound> {
        lookup(
            &self.morphospace.presets,
            TaxonomyKind::RhythmicPreset,
            id,
            |p| p.id.as_str(),
        )
    }

    /// Looks up a visual type by id.
    ///
    /// # Errors
    ///
    /// Returns [`NotFound`] if `id` is not one of the visual types.
    pub fn get_visual_type(&self, id: &str) -> Result<&VisualType, NotFound> {
        lookup(
            &self.morphospace.visual_types,
            TaxonomyKind::VisualType,
            id,
            |v| v.id.as_str(),
        )
    }

    /// Returns a read-only view over the descriptor tables.
    #[must_use]
    pub fn list_all(&self) -> TaxonomySnapshot<'_> {
        TaxonomySnapshot {
            version: self.version,
            cap_constructions: &self.cap_constructions,
            texture_patterns: &self.texture_patterns,
            style_contexts: &self.style_contexts,
            edge_treatments: &self.edge_treatments,
            highlight_patterns: &self.highlight_patterns,
        }
    }

    /// Ids of every entry in the table for `kind`, in table order.
    #[must_use]
    pub fn ids(&self, kind: TaxonomyKind) -> Vec<&'static str> {
        match kind {
            TaxonomyKind::CapConstruction => {
                self.cap_constructions.iter().map(|c| c.id.as_str()).collect()
            }
            TaxonomyKind::TexturePattern => {
                self.texture_patterns.iter().map(|t| t.id.as_str()).collect()
            }
            TaxonomyKind::StyleContext => {
                self.style_contexts.iter().map(|s| s.id.as_str()).collect()
            }
            TaxonomyKind::EdgeTreatment => {
                self.edge_treatments.iter().map(|e| e.id.as_str()).collect()
            }
            TaxonomyKind::HighlightPattern => {
                self.highlight_patterns.iter().map(|h| h.id.as_str()).collect()
            }
            TaxonomyKind::MorphState => {
                self.morphospace.states.iter().map(|s| s.id.as_str()).collect()
            }
            TaxonomyKind::RhythmicPreset => {
                self.morphospace.presets.iter().map(|p| p.id.as_str()).collect()
            }
            TaxonomyKind::VisualType => self
                .morphospace
                .visual_types
                .iter()
                .map(|v| v.id.as_str())
                .collect(),
        }
    }
}
