//! Parameter → vocabulary mapping.
//!
//! Each facet is derived independently from the validated parameters and the
//! taxonomy, then joined in [`Facet::ALL`] order with `"; "` into the composite
//! string. Order and punctuation are part of the output contract.

use std::fmt::Write as _;

use serde::Serialize;
use wig_taxonomy::{HighlightPatternEntry, Taxonomy, VolumeProfile, Zone};

use crate::error::{Error, ValidationError};
use crate::params::WigParameters;
use crate::request::ParameterRequest;

/// Densities whose rounded percentage equals this render as natural density.
pub const NATURAL_DENSITY_PERCENT: i64 = 100;

/// Separator between facet clauses in the composite string.
pub const FACET_SEPARATOR: &str = "; ";

/// One independently derived clause of the composite vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet {
    /// Cap construction vocabulary, verbatim from the taxonomy.
    Cap,
    /// Texture vocabulary with the scale interpolated.
    Texture,
    /// Density classification.
    Density,
    /// Primary length and layers.
    Length,
    /// One clause per volume zone.
    Volume,
    /// Edge treatment vocabulary.
    Edge,
    /// Base color and dimensional color clause.
    Color,
}

impl Facet {
    /// Every facet in composite order.
    pub const ALL: [Facet; 7] = [
        Facet::Cap,
        Facet::Texture,
        Facet::Density,
        Facet::Length,
        Facet::Volume,
        Facet::Edge,
        Facet::Color,
    ];

    /// Returns the key used for the facet in serialized output.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Facet::Cap => "cap_construction",
            Facet::Texture => "texture",
            Facet::Density => "density",
            Facet::Length => "length",
            Facet::Volume => "volume",
            Facet::Edge => "edge",
            Facet::Color => "color",
        }
    }
}

/// The per-facet vocabulary strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetVocabulary {
    /// Cap facet.
    pub cap_construction: String,
    /// Texture facet.
    pub texture: String,
    /// Density facet.
    pub density: String,
    /// Length facet.
    pub length: String,
    /// Volume facet.
    pub volume: String,
    /// Edge facet.
    pub edge: String,
    /// Color facet.
    pub color: String,
}

impl FacetVocabulary {
    /// Returns the clause for `facet`.
    #[must_use]
    pub fn get(&self, facet: Facet) -> &str {
        match facet {
            Facet::Cap => &self.cap_construction,
            Facet::Texture => &self.texture,
            Facet::Density => &self.density,
            Facet::Length => &self.length,
            Facet::Volume => &self.volume,
            Facet::Edge => &self.edge,
            Facet::Color => &self.color,
        }
    }

    /// Joins every facet in [`Facet::ALL`] order.
    #[must_use]
    pub fn composite(&self) -> String {
        Facet::ALL
            .iter()
            .map(|f| self.get(*f))
            .collect::<Vec<_>>()
            .join(FACET_SEPARATOR)
    }
}

/// Output of [`ParameterMapper::map`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VocabularyResult {
    /// The validated parameters the vocabulary was derived from.
    pub parameters: WigParameters,
    /// The structured per-facet vocabulary.
    #[serde(rename = "vocabulary_components")]
    pub facets: FacetVocabulary,
    /// All facets joined in fixed order; the string downstream consumers read.
    pub composite_vocabulary: String,
}

/// Renders validated parameters into vocabulary.
///
/// Holds no state besides the borrowed taxonomy; every call is a pure
/// function of its inputs.
#[derive(Debug, Clone, Copy)]
pub struct ParameterMapper<'t> {
    taxonomy: &'t Taxonomy,
}

impl<'t> ParameterMapper<'t> {
    /// Creates a mapper over `taxonomy`.
    #[must_use]
    pub fn new(taxonomy: &'t Taxonomy) -> Self {
        ParameterMapper { taxonomy }
    }

    /// Maps validated parameters to vocabulary.
    ///
    /// Cap, texture, edge and highlight entries are resolved against this
    /// mapper's taxonomy, which may differ from the one the parameters were
    /// validated with.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownTaxonomyId`] if an entry is missing
    /// from this mapper's taxonomy. No partial vocabulary is produced.
    pub fn map(&self, parameters: &WigParameters) -> Result<VocabularyResult, ValidationError> {
        let cap = self
            .taxonomy
            .get_cap_construction(parameters.cap_construction().as_str())
            .map_err(|e| ValidationError::unknown("cap_construction", e))?;
        let texture = self
            .taxonomy
            .get_texture_pattern(parameters.texture_pattern().as_str())
            .map_err(|e| ValidationError::unknown("texture_pattern", e))?;
        let edge = self
            .taxonomy
            .get_edge_treatment(parameters.edge_treatment().as_str())
            .map_err(|e| ValidationError::unknown("edge_treatment", e))?;
        let highlight = parameters
            .highlight_pattern()
            .map(|h| {
                self.taxonomy
                    .get_highlight_pattern(h.as_str())
                    .map_err(|e| ValidationError::unknown("highlight_pattern", e))
            })
            .transpose()?;

        let facets = FacetVocabulary {
            cap_construction: cap.vocabulary.to_owned(),
            texture: texture.vocabulary(),
            density: density_vocabulary(parameters.density_profile()),
            length: length_vocabulary(parameters.length_primary(), parameters.layers()),
            volume: volume_vocabulary(&parameters.volume_distribution()),
            edge: edge.vocabulary.to_owned(),
            color: color_vocabulary(
                parameters.base_color(),
                highlight,
                parameters.root_shadow_depth(),
            ),
        };
        let composite_vocabulary = facets.composite();
        tracing::debug!(
            cap = %cap.id,
            texture = %texture.id,
            bytes = composite_vocabulary.len(),
            "mapped wig parameters"
        );

        Ok(VocabularyResult {
            parameters: parameters.clone(),
            facets,
            composite_vocabulary,
        })
    }

    /// Validates a request, then maps it.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found.
    pub fn map_request(
        &self,
        request: &ParameterRequest,
    ) -> Result<VocabularyResult, ValidationError> {
        let parameters = request.validate(self.taxonomy)?;
        self.map(&parameters)
    }

    /// Decodes a JSON request, validates it, then maps it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if the document does not decode and
    /// [`Error::Validation`] if it decodes but is invalid.
    pub fn map_json(&self, json: &str) -> Result<VocabularyResult, Error> {
        let request = ParameterRequest::from_json(json)?;
        Ok(self.map_request(&request)?)
    }
}

/// Classifies a density multiplier.
#[must_use]
pub fn density_vocabulary(density: f64) -> String {
    let percent = (density * 100.0).round() as i64;
    if percent == NATURAL_DENSITY_PERCENT {
        return "100% natural density, realistic fullness matching biological hair".to_owned();
    }
    let description = if density < 0.8 {
        "lightweight sparse construction, visible scalp through strands"
    } else if density < 1.0 {
        "natural lightweight fullness, subtle scalp visibility"
    } else if density <= 1.3 {
        "enhanced fullness, voluminous appearance"
    } else if density <= 1.6 {
        "dramatic volume, luxurious thickness"
    } else {
        "maximum theatrical volume, ultra-dense construction"
    };
    format!("{percent}% density, {description}")
}

/// Renders the primary length and layers, longest layer first.
#[must_use]
pub fn length_vocabulary(length_primary: u32, layers: &[u32]) -> String {
    let mut vocab = format!("{length_primary}-inch primary length");
    if !layers.is_empty() {
        let mut sorted = layers.to_vec();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        let list = sorted
            .iter()
            .map(|l| format!("{l}-inch"))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = write!(vocab, ", with graduated layers at {list}");
    }
    vocab
}

/// Describes one zone multiplier relative to 1.0.
#[must_use]
pub fn zone_vocabulary(zone: Zone, multiplier: f64) -> String {
    if multiplier > 1.2 {
        format!("dramatic {zone} lift creating {multiplier:.1}x natural height")
    } else if multiplier > 1.05 {
        format!("enhanced {zone} volume at {multiplier:.1}x natural")
    } else if multiplier < 0.9 {
        format!("compressed {zone} profile at {multiplier:.1}x natural")
    } else if multiplier < 0.95 {
        format!("reduced {zone} volume at {multiplier:.1}x natural")
    } else {
        format!("natural {zone} proportion")
    }
}

/// Renders crown, temple and nape clauses in that order.
#[must_use]
pub fn volume_vocabulary(volume: &VolumeProfile) -> String {
    Zone::ALL
        .iter()
        .map(|z| zone_vocabulary(*z, volume.get(*z)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Renders the color facet. `highlight` is `None` exactly when color is not dimensional.
#[must_use]
pub fn color_vocabulary(
    base_color: &str,
    highlight: Option<&HighlightPatternEntry>,
    root_shadow_depth: f64,
) -> String {
    let mut vocab = format!("{base_color} base color");
    let Some(highlight) = highlight else {
        vocab.push_str(", solid uniform color throughout");
        return vocab;
    };
    vocab.push_str(", dimensional coloring with");
    if root_shadow_depth > 0.0 {
        let _ = write!(
            vocab,
            " {root_shadow_depth:?}-inch root shadow fade creating depth,"
        );
    }
    vocab.push(' ');
    vocab.push_str(highlight.vocabulary);
    vocab
}
