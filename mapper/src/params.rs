//! Validated wig parameters.

use std::ops::RangeInclusive;

use serde::Serialize;
use wig_taxonomy::{
    CapConstructionId, EdgeTreatment, HighlightPattern, Taxonomy, TexturePatternId, VolumeProfile,
    Zone,
};

use crate::error::ValidationError;
use crate::request::{ParameterRequest, VolumeInput};

/// Accepted `density_profile` values.
pub const DENSITY_RANGE: RangeInclusive<f64> = 0.5..=2.0;
/// Accepted `root_shadow_depth` values, in inches.
pub const ROOT_SHADOW_RANGE: RangeInclusive<f64> = 0.0..=3.0;
/// Accepted zone multipliers on input, and the clamp applied by style presets.
pub const VOLUME_RANGE: RangeInclusive<f64> = 0.8..=1.6;

fn bounds(range: &RangeInclusive<f64>) -> String {
    format!("[{:?}, {:?}]", range.start(), range.end())
}

/// A wig description whose every field satisfies its documented constraint.
///
/// Only obtainable through [`WigParameters::validate`] (or a style preset
/// applied to an existing value), so holding one is proof of validity.
/// Values are never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WigParameters {
    cap_construction: CapConstructionId,
    texture_pattern: TexturePatternId,
    density_profile: f64,
    length_primary: u32,
    base_color: String,
    color_dimensional: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    highlight_pattern: Option<HighlightPattern>,
    root_shadow_depth: f64,
    edge_treatment: EdgeTreatment,
    layers: Vec<u32>,
    volume_distribution: VolumeProfile,
}

impl WigParameters {
    /// Validates `request` against `taxonomy`, stopping at the first violation.
    ///
    /// Fields are checked in this order: cap construction, texture pattern,
    /// density, primary length, layers, base color, edge treatment, color
    /// fields (only when dimensional), then crown, temple and nape volume.
    /// When `color_dimensional` is false the highlight pattern and root
    /// shadow depth are ignored without error.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::UnknownTaxonomyId`] for an id the taxonomy does not contain.
    /// - [`ValidationError::Range`] for a value outside its documented bound.
    /// - [`ValidationError::Consistency`] when dimensional color lacks a highlight pattern.
    pub fn validate(
        request: &ParameterRequest,
        taxonomy: &Taxonomy,
    ) -> Result<WigParameters, ValidationError> {
        let cap = taxonomy
            .get_cap_construction(&request.cap_construction)
            .map_err(|e| ValidationError::unknown("cap_construction", e))?;
        let texture = taxonomy
            .get_texture_pattern(&request.texture_pattern)
            .map_err(|e| ValidationError::unknown("texture_pattern", e))?;

        let density = request.density_profile;
        if !DENSITY_RANGE.contains(&density) {
            return Err(ValidationError::range(
                "density_profile",
                density,
                bounds(&DENSITY_RANGE),
            ));
        }

        let length_primary = u32::try_from(request.length_primary)
            .ok()
            .filter(|&l| l > 0)
            .ok_or_else(|| {
                ValidationError::range("length_primary", request.length_primary, "> 0 inches")
            })?;

        let mut layers = Vec::with_capacity(request.layers.len());
        for &layer in &request.layers {
            let valid = u32::try_from(layer)
                .ok()
                .filter(|&l| l > 0 && l < length_primary);
            match valid {
                Some(l) => layers.push(l),
                None => {
                    return Err(ValidationError::range(
                        "layers",
                        layer,
                        format!("0 < layer < length_primary ({length_primary})"),
                    ))
                }
            }
        }

        if request.base_color.trim().is_empty() {
            return Err(ValidationError::range(
                "base_color",
                format!("{:?}", request.base_color),
                "a non-empty color description",
            ));
        }

        let edge = taxonomy
            .get_edge_treatment(&request.edge_treatment)
            .map_err(|e| ValidationError::unknown("edge_treatment", e))?;

        let (highlight_pattern, root_shadow_depth) = if request.color_dimensional {
            let Some(highlight) = request.highlight_pattern.as_deref() else {
                return Err(ValidationError::Consistency {
                    field: "highlight_pattern",
                    constraint: "required when color_dimensional is true",
                });
            };
            let highlight = taxonomy
                .get_highlight_pattern(highlight)
                .map_err(|e| ValidationError::unknown("highlight_pattern", e))?;
            let depth = request.root_shadow_depth;
            if !ROOT_SHADOW_RANGE.contains(&depth) {
                return Err(ValidationError::range(
                    "root_shadow_depth",
                    depth,
                    bounds(&ROOT_SHADOW_RANGE),
                ));
            }
            (Some(highlight.id), depth)
        } else {
            (None, 0.0)
        };

        let volume_distribution = validate_volume(&request.volume_distribution)?;

        Ok(WigParameters {
            cap_construction: cap.id,
            texture_pattern: texture.id,
            density_profile: density,
            length_primary,
            base_color: request.base_color.clone(),
            color_dimensional: request.color_dimensional,
            highlight_pattern,
            root_shadow_depth,
            edge_treatment: edge.id,
            layers,
            volume_distribution,
        })
    }

    /// Returns a copy with the styled fields replaced.
    pub(crate) fn restyled(
        &self,
        density_profile: f64,
        volume_distribution: VolumeProfile,
        edge_treatment: EdgeTreatment,
    ) -> WigParameters {
        WigParameters {
            density_profile,
            volume_distribution,
            edge_treatment,
            ..self.clone()
        }
    }

    /// Cap construction.
    #[must_use]
    pub fn cap_construction(&self) -> CapConstructionId {
        self.cap_construction
    }

    /// Texture pattern.
    #[must_use]
    pub fn texture_pattern(&self) -> TexturePatternId {
        self.texture_pattern
    }

    /// Density multiplier in [`DENSITY_RANGE`].
    #[must_use]
    pub fn density_profile(&self) -> f64 {
        self.density_profile
    }

    /// Primary length in inches, always positive.
    #[must_use]
    pub fn length_primary(&self) -> u32 {
        self.length_primary
    }

    /// Base color description.
    #[must_use]
    pub fn base_color(&self) -> &str {
        &self.base_color
    }

    /// Whether dimensional coloring is enabled.
    #[must_use]
    pub fn color_dimensional(&self) -> bool {
        self.color_dimensional
    }

    /// Highlight pattern; always `Some` when dimensional, always `None` otherwise.
    #[must_use]
    pub fn highlight_pattern(&self) -> Option<HighlightPattern> {
        self.highlight_pattern
    }

    /// Root shadow depth in inches; 0.0 unless dimensional.
    #[must_use]
    pub fn root_shadow_depth(&self) -> f64 {
        self.root_shadow_depth
    }

    /// Edge treatment.
    #[must_use]
    pub fn edge_treatment(&self) -> EdgeTreatment {
        self.edge_treatment
    }

    /// Layer lengths in the order supplied, each below the primary length.
    #[must_use]
    pub fn layers(&self) -> &[u32] {
        &self.layers
    }

    /// Zone multipliers.
    #[must_use]
    pub fn volume_distribution(&self) -> VolumeProfile {
        self.volume_distribution
    }
}

fn validate_volume(input: &VolumeInput) -> Result<VolumeProfile, ValidationError> {
    let profile = VolumeProfile {
        crown: input.crown.unwrap_or(1.0),
        temple: input.temple.unwrap_or(1.0),
        nape: input.nape.unwrap_or(1.0),
    };
    for zone in Zone::ALL {
        let value = profile.get(*zone);
        if !VOLUME_RANGE.contains(&value) {
            return Err(ValidationError::range(
                "volume_distribution",
                format!("{zone}={value}"),
                bounds(&VOLUME_RANGE),
            ));
        }
    }
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> ParameterRequest {
        ParameterRequest::new("lace_front", "body_wave", 1.0, 16, "dark brown")
    }

    fn check(request: &ParameterRequest) -> Result<WigParameters, ValidationError> {
        request.validate(Taxonomy::standard())
    }

    #[test]
    fn minimal_request_is_valid() -> Result<(), ValidationError> {
        let params = check(&base())?;
        assert_eq!(params.cap_construction(), CapConstructionId::LaceFront);
        assert_eq!(params.edge_treatment(), EdgeTreatment::BabyHairs);
        assert_eq!(params.volume_distribution(), VolumeProfile::NATURAL);
        Ok(())
    }

    #[test]
    fn unknown_cap_names_field_and_valid_ids() {
        let mut request = base();
        request.cap_construction = "silk_top".to_owned();
        let err = check(&request).err();
        assert!(
            matches!(
                &err,
                Some(ValidationError::UnknownTaxonomyId { field: "cap_construction", value, valid })
                    if value == "silk_top" && valid.len() == 7
            ),
            "{err:?}"
        );
    }

    #[test]
    fn first_violation_wins() {
        let mut request = base();
        request.texture_pattern = "frizz".to_owned();
        request.density_profile = 9.0;
        assert_eq!(check(&request).err().map(|e| e.field()), Some("texture_pattern"));
    }

    #[test]
    fn density_bounds_are_inclusive() {
        let cases = [
            (0.5, true),
            (2.0, true),
            (0.49, false),
            (2.01, false),
            (f64::NAN, false),
        ];
        for (density, ok) in cases {
            let mut request = base();
            request.density_profile = density;
            assert_eq!(check(&request).is_ok(), ok, "density {density}");
        }
    }

    #[test]
    fn length_must_be_positive() {
        for length in [0, -4] {
            let mut request = base();
            request.length_primary = length;
            assert_eq!(check(&request).err().map(|e| e.field()), Some("length_primary"));
        }
    }

    #[test]
    fn layers_must_be_shorter_than_primary() {
        for layers in [vec![16], vec![14, 18], vec![0], vec![-2]] {
            let request = base().layers(layers.clone());
            assert_eq!(
                check(&request).err().map(|e| e.field()),
                Some("layers"),
                "{layers:?}"
            );
        }
    }

    #[test]
    fn layers_keep_supplied_order() -> Result<(), ValidationError> {
        let params = check(&base().layers(vec![12, 14]))?;
        assert_eq!(params.layers(), &[12, 14]);
        Ok(())
    }

    #[test]
    fn blank_base_color_rejected() {
        let mut request = base();
        request.base_color = "   ".to_owned();
        let err = check(&request).err();
        assert_eq!(err.as_ref().map(ValidationError::field), Some("base_color"));
        assert!(matches!(
            err,
            Some(ValidationError::Range { value, .. }) if value == "\"   \""
        ));
    }

    #[test]
    fn unknown_edge_treatment_rejected() {
        let request = base().edge("feathered");
        assert!(matches!(
            check(&request),
            Err(ValidationError::UnknownTaxonomyId { field: "edge_treatment", .. })
        ));
    }

    #[test]
    fn dimensional_without_highlight_is_inconsistent() {
        let mut request = base();
        request.color_dimensional = true;
        assert!(matches!(
            check(&request),
            Err(ValidationError::Consistency { field: "highlight_pattern", .. })
        ));
    }

    #[test]
    fn highlight_ignored_when_not_dimensional() -> Result<(), ValidationError> {
        let mut request = base();
        request.highlight_pattern = Some("not_a_pattern".to_owned());
        request.root_shadow_depth = 7.0;
        let params = check(&request)?;
        assert_eq!(params.highlight_pattern(), None);
        assert_eq!(params.root_shadow_depth(), 0.0);
        Ok(())
    }

    #[test]
    fn root_shadow_range_checked_when_dimensional() {
        let request = base().dimensional("balayage", 3.5);
        assert_eq!(check(&request).err().map(|e| e.field()), Some("root_shadow_depth"));
    }

    #[test]
    fn volume_zone_out_of_range_rejected_on_input() {
        let request = base().volume(1.0, 1.7, 1.0);
        assert_eq!(
            check(&request).err(),
            Some(ValidationError::Range {
                field: "volume_distribution",
                value: "temple=1.7".to_owned(),
                constraint: "[0.8, 1.6]".to_owned(),
            })
        );
    }

    #[test]
    fn missing_zones_default_to_natural() -> Result<(), ValidationError> {
        let mut request = base();
        request.volume_distribution.crown = Some(1.4);
        let params = check(&request)?;
        assert_eq!(params.volume_distribution().crown, 1.4);
        assert_eq!(params.volume_distribution().nape, 1.0);
        Ok(())
    }

    #[test]
    fn round_trips_through_request_shape() -> Result<(), ValidationError> {
        let params = check(&base().dimensional("ombre", 1.0).layers(vec![10]))?;
        let request = ParameterRequest::from(&params);
        assert_eq!(check(&request)?, params);
        Ok(())
    }
}
