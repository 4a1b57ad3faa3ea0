//! Style presets applied on top of validated parameters.

use serde::Serialize;
use wig_taxonomy::{EdgeTreatment, StyleContext, StyleId, Taxonomy};

use crate::error::ValidationError;
use crate::params::{WigParameters, VOLUME_RANGE};
use crate::vocabulary::{ParameterMapper, VocabularyResult};

/// Applies a [`StyleContext`] to a parameter set.
///
/// Density is replaced by the style's density. Each volume zone becomes the
/// incoming zone value times the style multiplier, clamped silently into
/// [`VOLUME_RANGE`]. The edge treatment is replaced only when the incoming
/// value is the default ([`EdgeTreatment::BabyHairs`]).
///
/// The result is a new value; `parameters` is left untouched. Applying the
/// same style to the same base parameters always gives the same output, but
/// feeding an output back in compounds the volume multipliers:
///
/// ```
/// use wig_mapper::{ParameterRequest, StyleApplier};
/// use wig_taxonomy::Taxonomy;
///
/// let taxonomy = Taxonomy::standard();
/// let base =
///     ParameterRequest::new("lace_front", "straight", 1.0, 14, "black").validate(taxonomy)?;
/// let applier = StyleApplier::new(taxonomy);
/// let once = applier.apply(&base, "editorial")?;
/// let twice = applier.apply(&once, "editorial")?;
/// assert_eq!(once.volume_distribution().crown, 1.4);
/// assert_eq!(twice.volume_distribution().crown, 1.6);
/// # Ok::<(), wig_mapper::ValidationError>(())
/// ```
#[must_use]
pub fn apply_context(parameters: &WigParameters, context: &StyleContext) -> WigParameters {
    let (low, high) = (*VOLUME_RANGE.start(), *VOLUME_RANGE.end());
    let volume = parameters
        .volume_distribution()
        .map(|zone, value| (value * context.volume.get(zone)).clamp(low, high));
    let edge = if parameters.edge_treatment() == EdgeTreatment::default() {
        context.edge
    } else {
        parameters.edge_treatment()
    };
    parameters.restyled(context.density, volume, edge)
}

/// The style half of a [`StyledVocabulary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppliedStyle {
    /// Style id.
    pub style: StyleId,
    /// The style's aesthetic focus.
    pub focus: &'static str,
}

/// Vocabulary produced from styled parameters, tagged with the style used.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyledVocabulary {
    /// Vocabulary for the styled parameters.
    #[serde(flatten)]
    pub result: VocabularyResult,
    /// Style that was applied.
    pub style_context: AppliedStyle,
}

/// Resolves style ids against a taxonomy and applies them.
#[derive(Debug, Clone, Copy)]
pub struct StyleApplier<'t> {
    taxonomy: &'t Taxonomy,
}

impl<'t> StyleApplier<'t> {
    /// Creates an applier over `taxonomy`.
    #[must_use]
    pub fn new(taxonomy: &'t Taxonomy) -> Self {
        StyleApplier { taxonomy }
    }

    fn context(&self, style_id: &str) -> Result<&'t StyleContext, ValidationError> {
        self.taxonomy
            .get_style_context(style_id)
            .map_err(|e| ValidationError::unknown("style", e))
    }

    /// Applies the style named `style_id`; see [`apply_context`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownTaxonomyId`] if `style_id` is not one
    /// of the taxonomy's style contexts.
    pub fn apply(
        &self,
        parameters: &WigParameters,
        style_id: &str,
    ) -> Result<WigParameters, ValidationError> {
        let context = self.context(style_id)?;
        let styled = apply_context(parameters, context);
        tracing::debug!(
            style = %context.id,
            density = styled.density_profile(),
            edge = %styled.edge_treatment(),
            "applied style context"
        );
        Ok(styled)
    }

    /// Applies the style, then maps the styled parameters to vocabulary.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownTaxonomyId`] for an unknown style, or
    /// any error [`ParameterMapper::map`] reports.
    pub fn apply_and_map(
        &self,
        parameters: &WigParameters,
        style_id: &str,
    ) -> Result<StyledVocabulary, ValidationError> {
        let context = self.context(style_id)?;
        let styled = self.apply(parameters, style_id)?;
        let result = ParameterMapper::new(self.taxonomy).map(&styled)?;
        Ok(StyledVocabulary {
            result,
            style_context: AppliedStyle {
                style: context.id,
                focus: context.focus,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::ParameterRequest;
    use wig_taxonomy::VolumeProfile;

    fn params(request: ParameterRequest) -> Result<WigParameters, ValidationError> {
        request.validate(Taxonomy::standard())
    }

    fn base() -> ParameterRequest {
        ParameterRequest::new("full_lace", "loose_curl", 1.2, 20, "copper")
    }

    #[test]
    fn theatrical_overwrites_density_and_scales_volume() -> Result<(), ValidationError> {
        let styled = StyleApplier::new(Taxonomy::standard()).apply(&params(base())?, "theatrical")?;
        assert_eq!(styled.density_profile(), 1.5);
        let volume = styled.volume_distribution();
        assert!((volume.crown - 1.3).abs() < 1e-9);
        assert!((volume.temple - 1.1).abs() < 1e-9);
        assert!((volume.nape - 1.2).abs() < 1e-9);
        assert_eq!(styled.edge_treatment(), EdgeTreatment::Clean);
        Ok(())
    }

    #[test]
    fn volume_is_clamped_not_rejected() -> Result<(), ValidationError> {
        let input = params(base().volume(1.6, 0.8, 1.5))?;
        let styled = StyleApplier::new(Taxonomy::standard()).apply(&input, "cosplay")?;
        assert_eq!(styled.volume_distribution().crown, 1.6);
        assert_eq!(styled.volume_distribution().nape, 1.6);

        let styled = StyleApplier::new(Taxonomy::standard()).apply(&input, "medical")?;
        assert_eq!(styled.volume_distribution().temple, 0.8);
        Ok(())
    }

    #[test]
    fn explicit_edge_is_kept() -> Result<(), ValidationError> {
        let input = params(base().edge("temple_points"))?;
        let styled = StyleApplier::new(Taxonomy::standard()).apply(&input, "editorial")?;
        assert_eq!(styled.edge_treatment(), EdgeTreatment::TemplePoints);
        Ok(())
    }

    #[test]
    fn input_is_not_mutated() -> Result<(), ValidationError> {
        let input = params(base())?;
        let before = input.clone();
        let _ = StyleApplier::new(Taxonomy::standard()).apply(&input, "cosplay")?;
        assert_eq!(input, before);
        assert_eq!(input.volume_distribution(), VolumeProfile::NATURAL);
        Ok(())
    }

    #[test]
    fn non_styled_fields_survive() -> Result<(), ValidationError> {
        let input = params(base().dimensional("ribbon", 0.5).layers(vec![18, 16]))?;
        let styled = StyleApplier::new(Taxonomy::standard()).apply(&input, "natural")?;
        assert_eq!(styled.base_color(), "copper");
        assert_eq!(styled.layers(), &[18, 16]);
        assert_eq!(styled.highlight_pattern(), input.highlight_pattern());
        assert_eq!(styled.root_shadow_depth(), 0.5);
        Ok(())
    }

    #[test]
    fn unknown_style_lists_valid_ids() -> Result<(), ValidationError> {
        let input = params(base())?;
        let err = StyleApplier::new(Taxonomy::standard()).apply(&input, "gothic").err();
        let Some(ValidationError::UnknownTaxonomyId { field, valid, .. }) = err else {
            return Err(ValidationError::Consistency {
                field: "style",
                constraint: "expected an unknown-id error",
            });
        };
        assert_eq!(field, "style");
        assert_eq!(valid.len(), 5);
        Ok(())
    }

    #[test]
    fn apply_and_map_attaches_focus() -> Result<(), ValidationError> {
        let input = params(base())?;
        let styled = StyleApplier::new(Taxonomy::standard()).apply_and_map(&input, "theatrical")?;
        assert_eq!(styled.style_context.style, StyleId::Theatrical);
        assert_eq!(styled.style_context.focus, "dramatic volume, bold silhouette");
        assert!(styled
            .result
            .composite_vocabulary
            .contains("150% density, dramatic volume, luxurious thickness"));
        assert!(styled
            .result
            .composite_vocabulary
            .contains("clean finished hairline"));
        Ok(())
    }
}
