//! Caller-facing parameter requests and their decoding.
//!
//! A [`ParameterRequest`] is the loosely-typed shape a caller sends: ids as
//! strings, signed integers, optional fields. It decodes from JSON and doubles
//! as a builder; [`ParameterRequest::validate`] turns it into a
//! [`WigParameters`](crate::WigParameters) or rejects it.

use serde::{Deserialize, Serialize};
use wig_taxonomy::{EdgeTreatment, Taxonomy};

use crate::error::{DecodeError, ValidationError};
use crate::params::WigParameters;

fn default_edge_treatment() -> String {
    EdgeTreatment::default().as_str().to_owned()
}

/// Zone multipliers as supplied by the caller. Omitted zones default to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VolumeInput {
    /// Crown multiplier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crown: Option<f64>,
    /// Temple multiplier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temple: Option<f64>,
    /// Nape multiplier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nape: Option<f64>,
}

/// Unvalidated wig parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParameterRequest {
    /// Cap construction id.
    pub cap_construction: String,
    /// Texture pattern id.
    pub texture_pattern: String,
    /// Density multiplier, 1.0 = natural.
    pub density_profile: f64,
    /// Primary length in inches.
    pub length_primary: i64,
    /// Base color description.
    pub base_color: String,
    /// Enables dimensional coloring.
    #[serde(default)]
    pub color_dimensional: bool,
    /// Highlight pattern id; required when `color_dimensional` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight_pattern: Option<String>,
    /// Root shadow depth in inches.
    #[serde(default)]
    pub root_shadow_depth: f64,
    /// Edge treatment id.
    #[serde(default = "default_edge_treatment")]
    pub edge_treatment: String,
    /// Layer lengths in inches.
    #[serde(default)]
    pub layers: Vec<i64>,
    /// Zone multipliers.
    #[serde(default)]
    pub volume_distribution: VolumeInput,
}

impl ParameterRequest {
    /// Starts a request with the required fields; everything else takes its default.
    pub fn new(
        cap_construction: impl Into<String>,
        texture_pattern: impl Into<String>,
        density_profile: f64,
        length_primary: i64,
        base_color: impl Into<String>,
    ) -> Self {
        ParameterRequest {
            cap_construction: cap_construction.into(),
            texture_pattern: texture_pattern.into(),
            density_profile,
            length_primary,
            base_color: base_color.into(),
            color_dimensional: false,
            highlight_pattern: None,
            root_shadow_depth: 0.0,
            edge_treatment: default_edge_treatment(),
            layers: Vec::new(),
            volume_distribution: VolumeInput::default(),
        }
    }

    /// Enables dimensional color with a highlight pattern and root shadow depth.
    #[must_use]
    pub fn dimensional(
        mut self,
        highlight_pattern: impl Into<String>,
        root_shadow_depth: f64,
    ) -> Self {
        self.color_dimensional = true;
        self.highlight_pattern = Some(highlight_pattern.into());
        self.root_shadow_depth = root_shadow_depth;
        self
    }

    /// Sets the edge treatment id.
    #[must_use]
    pub fn edge(mut self, edge_treatment: impl Into<String>) -> Self {
        self.edge_treatment = edge_treatment.into();
        self
    }

    /// Sets the layer lengths.
    #[must_use]
    pub fn layers(mut self, layers: impl Into<Vec<i64>>) -> Self {
        self.layers = layers.into();
        self
    }

    /// Sets every zone multiplier.
    #[must_use]
    pub fn volume(mut self, crown: f64, temple: f64, nape: f64) -> Self {
        self.volume_distribution = VolumeInput {
            crown: Some(crown),
            temple: Some(temple),
            nape: Some(nape),
        };
        self
    }

    /// Decodes a request from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] if the document is not a well-formed request.
    pub fn from_json(json: &str) -> Result<Self, DecodeError> {
        serde_json::from_str(json).map_err(|e| DecodeError::json("request", &e))
    }

    /// Validates the request against `taxonomy`.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found; see [`WigParameters::validate`].
    pub fn validate(&self, taxonomy: &Taxonomy) -> Result<WigParameters, ValidationError> {
        WigParameters::validate(self, taxonomy)
    }
}

impl From<&WigParameters> for ParameterRequest {
    fn from(params: &WigParameters) -> Self {
        let volume = params.volume_distribution();
        ParameterRequest {
            cap_construction: params.cap_construction().as_str().to_owned(),
            texture_pattern: params.texture_pattern().as_str().to_owned(),
            density_profile: params.density_profile(),
            length_primary: i64::from(params.length_primary()),
            base_color: params.base_color().to_owned(),
            color_dimensional: params.color_dimensional(),
            highlight_pattern: params.highlight_pattern().map(|h| h.as_str().to_owned()),
            root_shadow_depth: params.root_shadow_depth(),
            edge_treatment: params.edge_treatment().as_str().to_owned(),
            layers: params.layers().iter().map(|&l| i64::from(l)).collect(),
            volume_distribution: VolumeInput {
                crown: Some(volume.crown),
                temple: Some(volume.temple),
                nape: Some(volume.nape),
            },
        }
    }
}

/// Decodes an encoded layer list such as `"[14, 12]"`.
///
/// # Errors
///
/// Returns [`DecodeError`] if `encoded` is not a JSON array of integers.
pub fn decode_layers(encoded: &str) -> Result<Vec<i64>, DecodeError> {
    serde_json::from_str(encoded).map_err(|e| DecodeError::json("layers", &e))
}

/// Decodes an encoded zone map such as `{"crown": 1.4, "temple": 0.9}`.
///
/// # Errors
///
/// Returns [`DecodeError`] if `encoded` is not a JSON object of known zones to numbers.
pub fn decode_volume_distribution(encoded: &str) -> Result<VolumeInput, DecodeError> {
    serde_json::from_str(encoded).map_err(|e| DecodeError::json("volume_distribution", &e))
}
