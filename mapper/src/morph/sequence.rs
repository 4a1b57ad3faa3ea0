//! Rhythmic presets and oscillation sequences.

use serde::{Deserialize, Serialize};
use wig_taxonomy::{
    MorphCoordinates, MorphStateId, OscillationPattern, RhythmicPreset, RhythmicPresetId,
};

use super::oscillation::{oscillate, trajectory};
use super::{parameter_names, round4, MorphEngine, NamedCoordinates};
use crate::error::ValidationError;

/// Upper bound on `num_cycles * steps_per_cycle` for one sequence.
pub const MAX_SEQUENCE_STEPS: u32 = 10_000;

fn default_pattern() -> String {
    OscillationPattern::Sinusoidal.as_str().to_owned()
}

fn default_cycles() -> u32 {
    3
}

fn default_steps_per_cycle() -> u32 {
    20
}

/// Parameters for [`MorphEngine::generate_sequence`].
///
/// Either `preset` is set, in which case the preset's states, pattern, cycle
/// count and period win, or both `state_a` and `state_b` are set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SequenceRequest {
    /// Curated preset id.
    #[serde(default)]
    pub preset: Option<String>,
    /// Starting state id.
    #[serde(default)]
    pub state_a: Option<String>,
    /// Alternating state id.
    #[serde(default)]
    pub state_b: Option<String>,
    /// Waveform id.
    #[serde(default = "default_pattern")]
    pub pattern: String,
    /// Number of complete A→B→A cycles.
    #[serde(default = "default_cycles")]
    pub num_cycles: u32,
    /// Samples per cycle.
    #[serde(default = "default_steps_per_cycle")]
    pub steps_per_cycle: u32,
    /// Starting phase in `[0, 1]`; the sequence is rotated left by
    /// `floor(phase_offset * steps_per_cycle)` steps.
    #[serde(default)]
    pub phase_offset: f64,
}

impl Default for SequenceRequest {
    fn default() -> Self {
        SequenceRequest {
            preset: None,
            state_a: None,
            state_b: None,
            pattern: default_pattern(),
            num_cycles: default_cycles(),
            steps_per_cycle: default_steps_per_cycle(),
            phase_offset: 0.0,
        }
    }
}

impl SequenceRequest {
    /// A request driven by a curated preset.
    pub fn preset(id: impl Into<String>) -> Self {
        SequenceRequest {
            preset: Some(id.into()),
            ..SequenceRequest::default()
        }
    }

    /// A custom oscillation between two canonical states.
    pub fn between(state_a: impl Into<String>, state_b: impl Into<String>) -> Self {
        SequenceRequest {
            state_a: Some(state_a.into()),
            state_b: Some(state_b.into()),
            ..SequenceRequest::default()
        }
    }
}

/// One sample of a [`Sequence`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SequenceStep {
    /// Index within the sequence.
    pub step: u32,
    /// Position within the current cycle, in `[0, 1)`.
    pub phase: f64,
    /// Interpolation weight of state B, rounded to 4 places.
    pub alpha: f64,
    /// Interpolated point.
    pub state: NamedCoordinates,
}

/// A generated oscillation between two states.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sequence {
    /// Preset id, or `"custom"`.
    pub preset: String,
    /// Starting state.
    pub state_a: MorphStateId,
    /// Alternating state.
    pub state_b: MorphStateId,
    /// Waveform.
    pub pattern: OscillationPattern,
    /// Steps per cycle.
    pub period: u32,
    /// Cycle count.
    pub num_cycles: u32,
    /// `period * num_cycles`.
    pub total_steps: u32,
    /// Samples in order.
    pub sequence: Vec<SequenceStep>,
    /// Axis names.
    pub parameter_names: Vec<&'static str>,
}

/// Summary of one curated preset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresetSummary {
    /// Preset id.
    pub preset: RhythmicPresetId,
    /// Steps per cycle.
    pub period: u32,
    /// Samples in one run.
    pub total_steps: u32,
    /// Waveform.
    pub pattern: OscillationPattern,
    /// `"state_a ↔ state_b"`.
    pub states: String,
    /// Description.
    pub description: &'static str,
}

/// Every curated preset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresetCatalog {
    /// Presets in table order.
    pub presets: Vec<PresetSummary>,
    /// Distinct periods, ascending.
    pub available_periods: Vec<u32>,
    /// Canonical state ids.
    pub available_states: Vec<MorphStateId>,
}

/// The full trajectory of one preset run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresetTrajectory {
    /// Preset id.
    pub preset: RhythmicPresetId,
    /// Description.
    pub description: &'static str,
    /// Steps per cycle.
    pub period: u32,
    /// Waveform.
    pub pattern: OscillationPattern,
    /// Number of points.
    pub total_steps: usize,
    /// Interpolated points.
    pub trajectory: Vec<NamedCoordinates>,
    /// Axis names.
    pub parameter_names: Vec<&'static str>,
}

impl<'t> MorphEngine<'t> {
    pub(crate) fn preset_entry(&self, id: &str) -> Result<&'t RhythmicPreset, ValidationError> {
        self.taxonomy()
            .get_rhythmic_preset(id)
            .map_err(|e| ValidationError::unknown("preset", e))
    }

    /// Interpolated points for one run of `preset`.
    pub(crate) fn preset_points(
        &self,
        preset: &RhythmicPreset,
    ) -> Result<Vec<MorphCoordinates>, ValidationError> {
        let a = self.state_coordinates("state_a", preset.state_a)?;
        let b = self.state_coordinates("state_b", preset.state_b)?;
        let alphas = oscillate(preset.pattern, preset.total_steps(), preset.num_cycles);
        Ok(trajectory(&a, &b, &alphas))
    }

    /// Lists the curated presets.
    #[must_use]
    pub fn list_presets(&self) -> PresetCatalog {
        let morphospace = &self.taxonomy().morphospace;
        let presets = morphospace
            .presets
            .iter()
            .map(|p| PresetSummary {
                preset: p.id,
                period: p.steps_per_cycle,
                total_steps: p.total_steps(),
                pattern: p.pattern,
                states: format!("{} ↔ {}", p.state_a, p.state_b),
                description: p.description,
            })
            .collect();
        let mut available_periods: Vec<u32> =
            morphospace.presets.iter().map(|p| p.steps_per_cycle).collect();
        available_periods.sort_unstable();
        available_periods.dedup();
        PresetCatalog {
            presets,
            available_periods,
            available_states: morphospace.states.iter().map(|s| s.id).collect(),
        }
    }

    /// Generates an oscillation between two states.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::UnknownTaxonomyId`] for an unknown preset, state or pattern.
    /// - [`ValidationError::Consistency`] when neither a preset nor both states are given.
    /// - [`ValidationError::Range`] for zero cycles, zero steps per cycle, a
    ///   phase offset outside `[0, 1]`, or more than [`MAX_SEQUENCE_STEPS`] samples.
    pub fn generate_sequence(
        &self,
        request: &SequenceRequest,
    ) -> Result<Sequence, ValidationError> {
        let (label, state_a, state_b, pattern, num_cycles, period) = match &request.preset {
            Some(id) => {
                let preset = self.preset_entry(id)?;
                (
                    preset.id.as_str().to_owned(),
                    preset.state_a,
                    preset.state_b,
                    preset.pattern,
                    preset.num_cycles,
                    preset.steps_per_cycle,
                )
            }
            None => {
                let (Some(a), Some(b)) = (&request.state_a, &request.state_b) else {
                    return Err(ValidationError::Consistency {
                        field: "state_a",
                        constraint: "provide a preset or both state_a and state_b",
                    });
                };
                let a = self
                    .taxonomy()
                    .get_morph_state(a)
                    .map_err(|e| ValidationError::unknown("state_a", e))?;
                let b = self
                    .taxonomy()
                    .get_morph_state(b)
                    .map_err(|e| ValidationError::unknown("state_b", e))?;
                let pattern = OscillationPattern::parse(&request.pattern).ok_or_else(|| {
                    ValidationError::UnknownTaxonomyId {
                        field: "pattern",
                        value: request.pattern.clone(),
                        valid: OscillationPattern::ALL.iter().map(|p| p.as_str()).collect(),
                    }
                })?;
                (
                    "custom".to_owned(),
                    a.id,
                    b.id,
                    pattern,
                    request.num_cycles,
                    request.steps_per_cycle,
                )
            }
        };
        if num_cycles == 0 {
            return Err(ValidationError::range("num_cycles", num_cycles, ">= 1"));
        }
        if period == 0 {
            return Err(ValidationError::range("steps_per_cycle", period, ">= 1"));
        }
        if !(0.0..=1.0).contains(&request.phase_offset) {
            return Err(ValidationError::range(
                "phase_offset",
                request.phase_offset,
                "[0.0, 1.0]",
            ));
        }
        let total_steps = num_cycles
            .checked_mul(period)
            .filter(|total| *total <= MAX_SEQUENCE_STEPS)
            .ok_or_else(|| {
                ValidationError::range(
                    "steps_per_cycle",
                    period,
                    format!("num_cycles * steps_per_cycle <= {MAX_SEQUENCE_STEPS}"),
                )
            })?;

        let a = self.state_coordinates("state_a", state_a)?;
        let b = self.state_coordinates("state_b", state_b)?;
        let mut alphas = oscillate(pattern, total_steps, num_cycles);
        let offset = (request.phase_offset * f64::from(period)).floor() as usize;
        let len = alphas.len();
        alphas.rotate_left(offset.min(len));

        let sequence = alphas
            .iter()
            .zip(0u32..)
            .map(|(&alpha, step)| SequenceStep {
                step,
                phase: f64::from(step % period) / f64::from(period),
                alpha: round4(alpha),
                state: NamedCoordinates(a.lerp(&b, alpha)),
            })
            .collect();
        tracing::debug!(preset = %label, total_steps, "generated rhythmic sequence");

        Ok(Sequence {
            preset: label,
            state_a,
            state_b,
            pattern,
            period,
            num_cycles,
            total_steps,
            sequence,
            parameter_names: parameter_names(),
        })
    }

    /// Runs a curated preset and returns its full trajectory.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownTaxonomyId`] for an unknown preset.
    pub fn apply_preset(&self, id: &str) -> Result<PresetTrajectory, ValidationError> {
        let preset = self.preset_entry(id)?;
        let points = self.preset_points(preset)?;
        Ok(PresetTrajectory {
            preset: preset.id,
            description: preset.description,
            period: preset.steps_per_cycle,
            pattern: preset.pattern,
            total_steps: points.len(),
            trajectory: points.into_iter().map(NamedCoordinates).collect(),
            parameter_names: parameter_names(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wig_taxonomy::{MorphParameter, Taxonomy};

    fn engine() -> MorphEngine<'static> {
        MorphEngine::new(Taxonomy::standard())
    }

    #[test]
    fn catalog_lists_five_presets() {
        let catalog = engine().list_presets();
        assert_eq!(catalog.presets.len(), 5);
        assert_eq!(catalog.available_periods, vec![14, 18, 20, 22, 28]);
        assert_eq!(catalog.available_states.len(), 8);
        assert_eq!(catalog.presets[0].states, "everyday_natural ↔ textured_natural");
        assert_eq!(catalog.presets[0].total_steps, 66);
    }

    #[test]
    fn preset_overrides_request_shape() -> Result<(), ValidationError> {
        let mut request = SequenceRequest::preset("drama_sweep");
        request.num_cycles = 9;
        let sequence = engine().generate_sequence(&request)?;
        assert_eq!(sequence.pattern, OscillationPattern::Triangular);
        assert_eq!(sequence.period, 28);
        assert_eq!(sequence.total_steps, 56);
        assert_eq!(sequence.sequence.len(), 56);
        Ok(())
    }

    #[test]
    fn custom_sequence_uses_defaults() -> Result<(), ValidationError> {
        let request = SequenceRequest::between("medical_comfort", "fantasy_extreme");
        let sequence = engine().generate_sequence(&request)?;
        assert_eq!(sequence.preset, "custom");
        assert_eq!(sequence.total_steps, 60);
        assert_eq!(sequence.sequence[0].alpha, 0.5);
        assert_eq!(sequence.sequence[25].phase, 0.25);
        Ok(())
    }

    #[test]
    fn phase_offset_rotates_alphas() -> Result<(), ValidationError> {
        let mut request = SequenceRequest::between("everyday_natural", "red_carpet_glam");
        request.pattern = "square".to_owned();
        request.num_cycles = 1;
        request.steps_per_cycle = 4;
        request.phase_offset = 0.5;
        let sequence = engine().generate_sequence(&request)?;
        let alphas: Vec<f64> = sequence.sequence.iter().map(|s| s.alpha).collect();
        assert_eq!(alphas, vec![1.0, 1.0, 0.0, 0.0]);
        assert_eq!(sequence.sequence[0].step, 0);
        assert_eq!(
            sequence.sequence[0].state.0.get(MorphParameter::StylingDrama),
            0.8
        );
        Ok(())
    }

    #[test]
    fn bad_requests_are_rejected() {
        let engine = engine();
        let field = |request: SequenceRequest| {
            engine.generate_sequence(&request).err().map(|e| e.field())
        };

        assert_eq!(field(SequenceRequest::default()), Some("state_a"));
        assert_eq!(field(SequenceRequest::preset("hair_flip")), Some("preset"));
        assert_eq!(field(SequenceRequest::between("everyday_natural", "mohawk")), Some("state_b"));

        let mut request = SequenceRequest::between("everyday_natural", "red_carpet_glam");
        request.pattern = "sawtooth".to_owned();
        assert_eq!(field(request), Some("pattern"));

        let mut request = SequenceRequest::between("everyday_natural", "red_carpet_glam");
        request.num_cycles = 0;
        assert_eq!(field(request), Some("num_cycles"));

        let mut request = SequenceRequest::between("everyday_natural", "red_carpet_glam");
        request.steps_per_cycle = 0;
        assert_eq!(field(request), Some("steps_per_cycle"));

        let mut request = SequenceRequest::between("everyday_natural", "red_carpet_glam");
        request.phase_offset = 1.5;
        assert_eq!(field(request), Some("phase_offset"));
    }

    #[test]
    fn oversized_sequences_are_rejected() -> Result<(), ValidationError> {
        let engine = engine();
        let mut request = SequenceRequest::between("everyday_natural", "red_carpet_glam");
        request.num_cycles = u32::MAX;
        request.steps_per_cycle = u32::MAX;
        assert!(matches!(
            engine.generate_sequence(&request),
            Err(ValidationError::Range { field: "steps_per_cycle", .. })
        ));

        request.num_cycles = 2;
        request.steps_per_cycle = MAX_SEQUENCE_STEPS / 2 + 1;
        assert!(engine.generate_sequence(&request).is_err());

        request.steps_per_cycle = MAX_SEQUENCE_STEPS / 2;
        let sequence = engine.generate_sequence(&request)?;
        assert_eq!(sequence.sequence.len(), MAX_SEQUENCE_STEPS as usize);
        Ok(())
    }

    #[test]
    fn preset_trajectory_length() -> Result<(), ValidationError> {
        let run = engine().apply_preset("construction_shift")?;
        assert_eq!(run.total_steps, 70);
        assert_eq!(run.trajectory.len(), 70);
        Ok(())
    }

    #[test]
    fn request_decodes_with_defaults() -> Result<(), serde_json::Error> {
        let request: SequenceRequest = serde_json::from_str(r#"{"preset": "color_pulse"}"#)?;
        assert_eq!(request.pattern, "sinusoidal");
        assert_eq!(request.num_cycles, 3);
        assert_eq!(request.steps_per_cycle, 20);
        Ok(())
    }
}
