//! JSON serializer for the taxonomy.
//!
//! Produces a single document listing every table with its full descriptor
//! fields, in table order. Per-record helpers back the detail lookups.

use serde_json::{json, Map, Value};

use crate::ids::MorphParameter;
use crate::model::{
    CapConstruction, MorphCoordinates, MorphState, RhythmicPreset, StyleContext, Taxonomy,
    TexturePattern, VisualType, VolumeProfile,
};

/// Serializes the complete taxonomy to a JSON `Value`.
///
/// The returned value can be pretty-printed with [`serde_json::to_string_pretty`].
#[must_use]
pub fn to_json(taxonomy: &Taxonomy) -> Value {
    let snapshot = taxonomy.list_all();
    let edge_treatments: Map<String, Value> = snapshot
        .edge_treatments
        .iter()
        .map(|e| (e.id.as_str().to_owned(), json!(e.vocabulary)))
        .collect();
    let highlight_patterns: Map<String, Value> = snapshot
        .highlight_patterns
        .iter()
        .map(|h| (h.id.as_str().to_owned(), json!(h.vocabulary)))
        .collect();

    json!({
        "version": snapshot.version,
        "cap_constructions": snapshot.cap_constructions.iter().map(cap_to_json).collect::<Vec<_>>(),
        "texture_patterns": snapshot
            .texture_patterns
            .iter()
            .map(texture_to_json)
            .collect::<Vec<_>>(),
        "style_contexts": snapshot.style_contexts.iter().map(style_to_json).collect::<Vec<_>>(),
        "edge_treatments": edge_treatments,
        "color_highlight_patterns": highlight_patterns,
        "morphospace": {
            "parameter_names": MorphParameter::ALL.iter().map(|p| p.as_str()).collect::<Vec<_>>(),
            "states": taxonomy.morphospace.states.iter().map(state_to_json).collect::<Vec<_>>(),
            "presets": taxonomy.morphospace.presets.iter().map(preset_to_json).collect::<Vec<_>>(),
            "visual_types": taxonomy
                .morphospace
                .visual_types
                .iter()
                .map(visual_type_to_json)
                .collect::<Vec<_>>(),
        }
    })
}

/// Serializes one cap construction.
#[must_use]
pub fn cap_to_json(cap: &CapConstruction) -> Value {
    json!({
        "id": cap.id.as_str(),
        "name": cap.name,
        "parting_freedom": cap.parting_freedom,
        "visibility": cap.visibility,
        "vocabulary": cap.vocabulary
    })
}

/// Serializes one texture pattern; `vocabulary` carries the interpolated scale.
#[must_use]
pub fn texture_to_json(texture: &TexturePattern) -> Value {
    let mut node = json!({
        "id": texture.id.as_str(),
        "name": texture.name,
        "curl_type": texture.curl_type,
        "wave_geometry": texture.wave_geometry,
        "vocabulary": texture.vocabulary()
    });
    if let Some(scale) = texture.scale {
        node["scale"] = json!(scale);
    }
    node
}

/// Serializes one style context.
#[must_use]
pub fn style_to_json(style: &StyleContext) -> Value {
    json!({
        "id": style.id.as_str(),
        "density_target": style.density,
        "edge_preference": style.edge.as_str(),
        "volume_profile": volume_to_json(&style.volume),
        "focus": style.focus
    })
}

/// Serializes a zone → multiplier profile.
#[must_use]
pub fn volume_to_json(volume: &VolumeProfile) -> Value {
    json!({
        "crown": volume.crown,
        "temple": volume.temple,
        "nape": volume.nape
    })
}

/// Serializes coordinates as a parameter-name → value object.
#[must_use]
pub fn coordinates_to_json(coordinates: &MorphCoordinates) -> Value {
    let map: Map<String, Value> = MorphParameter::ALL
        .iter()
        .map(|p| (p.as_str().to_owned(), json!(coordinates.get(*p))))
        .collect();
    Value::Object(map)
}

fn state_to_json(state: &MorphState) -> Value {
    json!({
        "id": state.id.as_str(),
        "coordinates": coordinates_to_json(&state.coordinates)
    })
}

fn preset_to_json(preset: &RhythmicPreset) -> Value {
    json!({
        "id": preset.id.as_str(),
        "state_a": preset.state_a.as_str(),
        "state_b": preset.state_b.as_str(),
        "pattern": preset.pattern.as_str(),
        "num_cycles": preset.num_cycles,
        "steps_per_cycle": preset.steps_per_cycle,
        "description": preset.description
    })
}

fn visual_type_to_json(visual: &VisualType) -> Value {
    json!({
        "id": visual.id.as_str(),
        "coords": coordinates_to_json(&visual.coordinates),
        "keywords": visual.keywords,
        "optical_properties": {
            "finish": visual.optical.finish,
            "light_interaction": visual.optical.light_interaction,
            "sheen_level": visual.optical.sheen_level
        },
        "color_associations": visual.color_associations
    })
}
