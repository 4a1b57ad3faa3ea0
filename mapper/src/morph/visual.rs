//! Visual archetypes: nearest-type matching and prompt vocabulary.

use serde::Serialize;
use wig_taxonomy::{MorphCoordinates, OpticalProperties, RhythmicPresetId, VisualType, VisualTypeId};

use super::{round4, round_to, MorphEngine, NamedCoordinates};
use crate::error::{Error, ValidationError};

/// Color associations appended to every prompt.
pub const PROMPT_COLOR_COUNT: usize = 2;

/// Keywords kept when `strength` truncates the list are never fewer than this.
pub const MIN_KEYWORDS: usize = 2;

/// Vocabulary extracted for one morphospace point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisualVocabulary {
    /// Nearest visual type.
    pub nearest_type: VisualTypeId,
    /// Distance to it, rounded to 4 places.
    pub distance: f64,
    /// Keywords, possibly truncated by `strength`.
    pub keywords: Vec<&'static str>,
    /// Optical properties of the type.
    pub optical_properties: OpticalProperties,
    /// Color associations of the type.
    pub color_associations: Vec<&'static str>,
    /// The point that was matched.
    pub parameter_state: NamedCoordinates,
    /// Keyword weight that was applied.
    pub strength: f64,
}

/// What [`MorphEngine::generate_attractor_prompt`] renders.
#[derive(Debug, Clone, PartialEq)]
pub enum PromptSource {
    /// One prompt for a point; the glamour cascade coordinates when `None`.
    Composite(Option<String>),
    /// Evenly spaced keyframe prompts along a preset's trajectory.
    Sequence {
        /// Preset id.
        preset: String,
        /// Number of keyframes, at least 1.
        keyframe_count: u32,
    },
}

/// Visual type details attached to a composite prompt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromptVocabulary {
    /// Nearest visual type.
    pub nearest_type: VisualTypeId,
    /// Distance to it, rounded to 4 places.
    pub distance: f64,
    /// All keywords.
    pub keywords: Vec<&'static str>,
    /// Optical properties.
    pub optical: OpticalProperties,
    /// All color associations.
    pub colors: Vec<&'static str>,
}

/// One keyframe of a sequence prompt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Keyframe {
    /// Trajectory index.
    pub step: usize,
    /// `step / total_steps`, rounded to 3 places.
    pub phase: f64,
    /// Prompt text.
    pub prompt: String,
    /// Nearest visual type.
    pub nearest_type: VisualTypeId,
    /// Distance to it, rounded to 4 places.
    pub distance: f64,
    /// The trajectory point.
    pub state: NamedCoordinates,
}

/// A generated image prompt.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum AttractorPrompt {
    /// A single blended prompt.
    Composite {
        /// Prompt text.
        prompt: String,
        /// Matched visual type.
        vocabulary: PromptVocabulary,
        /// The matched point.
        state: NamedCoordinates,
        /// Prefix that was applied, if any.
        style_modifier: Option<String>,
    },
    /// Keyframe prompts along a preset trajectory.
    Sequence {
        /// Preset id.
        preset: RhythmicPresetId,
        /// Preset description.
        description: &'static str,
        /// Steps per cycle.
        period: u32,
        /// Number of keyframes.
        keyframe_count: u32,
        /// Keyframes in trajectory order.
        keyframes: Vec<Keyframe>,
        /// Prefix that was applied, if any.
        style_modifier: Option<String>,
    },
}

/// Joins the optional modifier, every keyword and the first color associations.
#[must_use]
pub fn compose_prompt(visual: &VisualType, style_modifier: Option<&str>) -> String {
    style_modifier
        .into_iter()
        .chain(visual.keywords.iter().copied())
        .chain(visual.color_associations.iter().take(PROMPT_COLOR_COUNT).copied())
        .collect::<Vec<_>>()
        .join(", ")
}

impl<'t> MorphEngine<'t> {
    /// Finds the visual type closest to `point`; ties go to the earlier type.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Consistency`] if the taxonomy defines no visual types.
    pub fn nearest_visual_type(
        &self,
        point: &MorphCoordinates,
    ) -> Result<(&'t VisualType, f64), ValidationError> {
        let mut nearest: Option<(&'t VisualType, f64)> = None;
        for visual in &self.taxonomy().morphospace.visual_types {
            let distance = point.distance(&visual.coordinates);
            if nearest.map_or(true, |(_, best)| distance < best) {
                nearest = Some((visual, distance));
            }
        }
        nearest.ok_or(ValidationError::Consistency {
            field: "visual_types",
            constraint: "the taxonomy defines no visual types",
        })
    }

    /// Extracts keywords, optics and colors for the visual type nearest to `state`.
    ///
    /// When `strength < 1` only the first `max(2, floor(len * strength))`
    /// keywords are kept.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Range`] for a strength outside `[0, 1]`, or any
    /// error from [`MorphEngine::resolve_point`].
    pub fn extract_visual_vocabulary(
        &self,
        state: &str,
        strength: f64,
    ) -> Result<VisualVocabulary, Error> {
        if !(0.0..=1.0).contains(&strength) {
            return Err(ValidationError::range("strength", strength, "[0.0, 1.0]").into());
        }
        let point = self.resolve_point("state", state)?;
        let (visual, distance) = self.nearest_visual_type(&point)?;
        let keep = if strength < 1.0 {
            let weighted = (visual.keywords.len() as f64 * strength).floor() as usize;
            weighted.max(MIN_KEYWORDS)
        } else {
            visual.keywords.len()
        };
        Ok(VisualVocabulary {
            nearest_type: visual.id,
            distance: round4(distance),
            keywords: visual.keywords.iter().take(keep).copied().collect(),
            optical_properties: visual.optical.clone(),
            color_associations: visual.color_associations.to_vec(),
            parameter_state: NamedCoordinates(point),
            strength,
        })
    }

    /// Renders an image-generation prompt from a point or a preset trajectory.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::UnknownTaxonomyId`] for an unknown preset.
    /// - [`ValidationError::Range`] for a keyframe count of zero or one larger
    ///   than the preset's total steps.
    /// - Any error from [`MorphEngine::resolve_point`] in composite mode.
    pub fn generate_attractor_prompt(
        &self,
        source: &PromptSource,
        style_modifier: Option<&str>,
    ) -> Result<AttractorPrompt, Error> {
        let style_modifier = style_modifier.filter(|m| !m.is_empty());
        match source {
            PromptSource::Composite(state) => {
                let point = match state {
                    Some(state) => self.resolve_point("state", state)?,
                    None => {
                        self.taxonomy()
                            .get_visual_type(VisualTypeId::GlamourCascade.as_str())
                            .map_err(|e| ValidationError::unknown("state", e))?
                            .coordinates
                    }
                };
                let (visual, distance) = self.nearest_visual_type(&point)?;
                Ok(AttractorPrompt::Composite {
                    prompt: compose_prompt(visual, style_modifier),
                    vocabulary: PromptVocabulary {
                        nearest_type: visual.id,
                        distance: round4(distance),
                        keywords: visual.keywords.to_vec(),
                        optical: visual.optical.clone(),
                        colors: visual.color_associations.to_vec(),
                    },
                    state: NamedCoordinates(point),
                    style_modifier: style_modifier.map(str::to_owned),
                })
            }
            PromptSource::Sequence {
                preset,
                keyframe_count,
            } => {
                let preset = self.preset_entry(preset)?;
                let points = self.preset_points(preset)?;
                let total = points.len();
                let count = usize::try_from(*keyframe_count).unwrap_or(usize::MAX);
                if count == 0 || count > total {
                    return Err(ValidationError::range(
                        "keyframe_count",
                        keyframe_count,
                        format!("[1, {total}]"),
                    )
                    .into());
                }
                let mut keyframes = Vec::with_capacity(count);
                for i in 0..count {
                    let step = i * total / count;
                    let Some(point) = points.get(step) else {
                        break;
                    };
                    let (visual, distance) = self.nearest_visual_type(point)?;
                    keyframes.push(Keyframe {
                        step,
                        phase: round_to(step as f64 / total as f64, 3),
                        prompt: compose_prompt(visual, style_modifier),
                        nearest_type: visual.id,
                        distance: round4(distance),
                        state: NamedCoordinates(*point),
                    });
                }
                Ok(AttractorPrompt::Sequence {
                    preset: preset.id,
                    description: preset.description,
                    period: preset.steps_per_cycle,
                    keyframe_count: *keyframe_count,
                    keyframes,
                    style_modifier: style_modifier.map(str::to_owned),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wig_taxonomy::Taxonomy;

    fn engine() -> MorphEngine<'static> {
        MorphEngine::new(Taxonomy::standard())
    }

    fn expected(mode: &'static str) -> Error {
        ValidationError::Consistency {
            field: "mode",
            constraint: mode,
        }
        .into()
    }

    #[test]
    fn canonical_state_matches_its_visual_type() -> Result<(), ValidationError> {
        let engine = engine();
        let point =
            engine.state_coordinates("state", wig_taxonomy::MorphStateId::EditorialSculpt)?;
        let (visual, distance) = engine.nearest_visual_type(&point)?;
        assert_eq!(visual.id, VisualTypeId::EditorialSculpture);
        assert_eq!(distance, 0.0);
        Ok(())
    }

    #[test]
    fn empty_table_is_an_error() {
        let mut taxonomy = Taxonomy::build();
        taxonomy.morphospace.visual_types.clear();
        let engine = MorphEngine::new(&taxonomy);
        assert!(matches!(
            engine.nearest_visual_type(&MorphCoordinates::default()),
            Err(ValidationError::Consistency { field: "visual_types", .. })
        ));
    }

    #[test]
    fn strength_truncates_keywords() -> Result<(), Error> {
        let engine = engine();
        let full = engine.extract_visual_vocabulary("protective_crown", 1.0)?;
        assert_eq!(full.nearest_type, VisualTypeId::TexturedCrown);
        assert_eq!(full.keywords.len(), 7);

        let half = engine.extract_visual_vocabulary("protective_crown", 0.5)?;
        assert_eq!(half.keywords, full.keywords[..3].to_vec());

        let none = engine.extract_visual_vocabulary("protective_crown", 0.0)?;
        assert_eq!(none.keywords.len(), MIN_KEYWORDS);
        Ok(())
    }

    #[test]
    fn strength_out_of_range_rejected() {
        assert!(matches!(
            engine().extract_visual_vocabulary("protective_crown", 1.5),
            Err(Error::Validation(ValidationError::Range { field: "strength", .. }))
        ));
    }

    #[test]
    fn default_composite_prompt_is_glamour() -> Result<(), Error> {
        let prompt = engine().generate_attractor_prompt(
            &PromptSource::Composite(None),
            Some("fashion photography"),
        )?;
        let AttractorPrompt::Composite { prompt, vocabulary, .. } = prompt else {
            return Err(expected("composite"));
        };
        assert_eq!(vocabulary.nearest_type, VisualTypeId::GlamourCascade);
        assert!(prompt.starts_with("fashion photography, luxurious cascading waves, "));
        assert!(
            prompt.ends_with("movement-rich layered flow, champagne highlights, rose gold tones")
        );
        Ok(())
    }

    #[test]
    fn empty_modifier_is_dropped() -> Result<(), Error> {
        let prompt = engine().generate_attractor_prompt(
            &PromptSource::Composite(Some("natural_realism".to_owned())),
            Some(""),
        );
        // natural_realism is a visual type, not a canonical state
        assert!(matches!(
            prompt,
            Err(Error::Validation(ValidationError::UnknownTaxonomyId { field: "state", .. }))
        ));
        let prompt = engine().generate_attractor_prompt(
            &PromptSource::Composite(Some("everyday_natural".to_owned())),
            Some(""),
        )?;
        let AttractorPrompt::Composite { prompt, style_modifier, .. } = prompt else {
            return Err(expected("composite"));
        };
        assert!(prompt.starts_with("invisible hairline blending into skin"));
        assert_eq!(style_modifier, None);
        Ok(())
    }

    #[test]
    fn sequence_keyframes_are_evenly_spaced() -> Result<(), Error> {
        let prompt = engine().generate_attractor_prompt(
            &PromptSource::Sequence {
                preset: "texture_morph".to_owned(),
                keyframe_count: 4,
            },
            None,
        )?;
        let AttractorPrompt::Sequence { keyframes, period, .. } = prompt else {
            return Err(expected("sequence"));
        };
        assert_eq!(period, 22);
        let steps: Vec<usize> = keyframes.iter().map(|k| k.step).collect();
        assert_eq!(steps, vec![0, 16, 33, 49]);
        assert_eq!(keyframes[2].phase, 0.5);
        Ok(())
    }

    #[test]
    fn zero_keyframes_rejected() {
        let prompt = engine().generate_attractor_prompt(
            &PromptSource::Sequence {
                preset: "color_pulse".to_owned(),
                keyframe_count: 0,
            },
            None,
        );
        assert!(matches!(
            prompt,
            Err(Error::Validation(ValidationError::Range { field: "keyframe_count", .. }))
        ));
    }

    #[test]
    fn keyframes_are_bounded_by_the_trajectory() -> Result<(), Error> {
        let engine = engine();
        let source = |keyframe_count| PromptSource::Sequence {
            preset: "texture_morph".to_owned(),
            keyframe_count,
        };
        assert!(matches!(
            engine.generate_attractor_prompt(&source(u32::MAX), None),
            Err(Error::Validation(ValidationError::Range { field: "keyframe_count", .. }))
        ));
        assert!(engine.generate_attractor_prompt(&source(67), None).is_err());

        let AttractorPrompt::Sequence { keyframes, .. } =
            engine.generate_attractor_prompt(&source(66), None)?
        else {
            return Err(expected("sequence"));
        };
        assert_eq!(keyframes.len(), 66);
        assert_eq!(keyframes.last().map(|k| k.step), Some(65));
        Ok(())
    }

    #[test]
    fn composite_serializes_with_mode_tag() -> Result<(), Box<dyn std::error::Error>> {
        let prompt = engine().generate_attractor_prompt(&PromptSource::Composite(None), None)?;
        let value = serde_json::to_value(&prompt)?;
        assert_eq!(value["mode"], "composite");
        assert_eq!(value["vocabulary"]["nearest_type"], "glamour_cascade");
        assert!(value["style_modifier"].is_null());
        Ok(())
    }
}
