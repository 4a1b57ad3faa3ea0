//! Morphospace engine: canonical states, distances, rhythmic sequences and
//! visual vocabulary over the normalized 5-dimensional wig aesthetic space.
//!
//! Points are addressed either by a canonical state id (`"red_carpet_glam"`)
//! or by a literal JSON object of axis values
//! (`{"construction_transparency": 0.6, "styling_drama": 0.2}`). Omitted axes
//! are 0.0. Reported coordinates are rounded to 4 decimal places.

pub mod oscillation;
pub mod sequence;
pub mod visual;

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use wig_taxonomy::{MorphCoordinates, MorphParameter, MorphStateId, Taxonomy, VisualTypeId};

use crate::error::{DecodeError, Error, ValidationError};

/// Rounds `value` to `places` decimal places, half away from zero.
#[must_use]
pub fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

pub(crate) fn round4(value: f64) -> f64 {
    round_to(value, 4)
}

/// Coordinates serialized as an axis-name map with values rounded to 4 places.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NamedCoordinates(pub MorphCoordinates);

impl Serialize for NamedCoordinates {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(MorphParameter::ALL.len()))?;
        for axis in MorphParameter::ALL {
            map.serialize_entry(axis.as_str(), &round4(self.0.get(*axis)))?;
        }
        map.end()
    }
}

/// Names of the morphospace axes, in coordinate order.
#[must_use]
pub fn parameter_names() -> Vec<&'static str> {
    MorphParameter::ALL.iter().map(|p| p.as_str()).collect()
}

/// One canonical state and its coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateCoordinates {
    /// State id.
    pub state_id: MorphStateId,
    /// Coordinates.
    pub coordinates: NamedCoordinates,
}

/// Every canonical state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatesOverview {
    /// States in table order.
    pub states: Vec<StateCoordinates>,
    /// Axis names.
    pub parameter_names: Vec<&'static str>,
    /// Number of states.
    pub total_states: usize,
}

/// Distance between two morphospace points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceReport {
    /// Euclidean distance over the rounded per-axis differences, rounded to 4 places.
    pub euclidean_distance: f64,
    /// `b - a` per axis, rounded to 4 places.
    pub parameter_differences: NamedCoordinates,
    /// Axis with the largest absolute difference; the first such axis on ties.
    pub max_difference_parameter: MorphParameter,
    /// Visual type nearest to `a`.
    pub state_a_visual_type: VisualTypeId,
    /// Visual type nearest to `b`.
    pub state_b_visual_type: VisualTypeId,
}

/// Read-only operations over a taxonomy's morphospace tables.
#[derive(Debug, Clone, Copy)]
pub struct MorphEngine<'t> {
    taxonomy: &'t Taxonomy,
}

impl<'t> MorphEngine<'t> {
    /// Creates an engine over `taxonomy`.
    #[must_use]
    pub fn new(taxonomy: &'t Taxonomy) -> Self {
        MorphEngine { taxonomy }
    }

    /// The taxonomy this engine reads.
    #[must_use]
    pub fn taxonomy(&self) -> &'t Taxonomy {
        self.taxonomy
    }

    /// Lists every canonical state.
    #[must_use]
    pub fn states(&self) -> StatesOverview {
        let states: Vec<StateCoordinates> = self
            .taxonomy
            .morphospace
            .states
            .iter()
            .map(|s| StateCoordinates {
                state_id: s.id,
                coordinates: NamedCoordinates(s.coordinates),
            })
            .collect();
        StatesOverview {
            total_states: states.len(),
            states,
            parameter_names: parameter_names(),
        }
    }

    /// Looks up one canonical state.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownTaxonomyId`] if `id` is not a canonical state.
    pub fn state(&self, id: &str) -> Result<StateCoordinates, ValidationError> {
        let state = self
            .taxonomy
            .get_morph_state(id)
            .map_err(|e| ValidationError::unknown("state_id", e))?;
        Ok(StateCoordinates {
            state_id: state.id,
            coordinates: NamedCoordinates(state.coordinates),
        })
    }

    pub(crate) fn state_coordinates(
        &self,
        field: &'static str,
        id: MorphStateId,
    ) -> Result<MorphCoordinates, ValidationError> {
        self.taxonomy
            .get_morph_state(id.as_str())
            .map(|s| s.coordinates)
            .map_err(|e| ValidationError::unknown(field, e))
    }

    /// Resolves a state id or a literal JSON coordinate object to a point.
    ///
    /// # Errors
    ///
    /// - [`Error::Decode`] if `input` looks like a JSON object but does not decode
    ///   to a map of numbers.
    /// - [`ValidationError::UnknownTaxonomyId`] for an unknown state id or axis name.
    /// - [`ValidationError::Range`] for an axis value outside `[0, 1]`.
    pub fn resolve_point(
        &self,
        field: &'static str,
        input: &str,
    ) -> Result<MorphCoordinates, Error> {
        let miss = match self.taxonomy.get_morph_state(input) {
            Ok(state) => return Ok(state.coordinates),
            Err(miss) => miss,
        };
        if !input.trim_start().starts_with('{') {
            return Err(ValidationError::unknown(field, miss).into());
        }
        let values: BTreeMap<String, f64> =
            serde_json::from_str(input).map_err(|e| DecodeError::json(field, &e))?;
        let mut point = MorphCoordinates::default();
        for (name, value) in values {
            let Some(axis) = MorphParameter::parse(&name) else {
                return Err(ValidationError::UnknownTaxonomyId {
                    field,
                    value: name,
                    valid: parameter_names(),
                }
                .into());
            };
            if !(0.0..=1.0).contains(&value) {
                return Err(
                    ValidationError::range(field, format!("{name}={value}"), "[0.0, 1.0]").into(),
                );
            }
            point.set(axis, value);
        }
        Ok(point)
    }

    /// Computes the distance between two points; see [`MorphEngine::resolve_point`].
    ///
    /// # Errors
    ///
    /// Returns any error from resolving either point, or from matching a
    /// point to a visual type.
    pub fn distance(&self, a: &str, b: &str) -> Result<DistanceReport, Error> {
        let a = self.resolve_point("state_a", a)?;
        let b = self.resolve_point("state_b", b)?;

        let mut diff = MorphCoordinates::default();
        let mut max_axis = MorphParameter::ALL[0];
        for axis in MorphParameter::ALL {
            let d = round4(b.get(*axis) - a.get(*axis));
            diff.set(*axis, d);
            if d.abs() > diff.get(max_axis).abs() {
                max_axis = *axis;
            }
        }
        let euclidean = diff.0.iter().map(|d| d * d).sum::<f64>().sqrt();

        let (type_a, _) = self.nearest_visual_type(&a)?;
        let (type_b, _) = self.nearest_visual_type(&b)?;
        Ok(DistanceReport {
            euclidean_distance: round4(euclidean),
            parameter_differences: NamedCoordinates(diff),
            max_difference_parameter: max_axis,
            state_a_visual_type: type_a.id,
            state_b_visual_type: type_b.id,
        })
    }
}
