//! Self-description of the mapper and the taxonomy it serves.

use serde::Serialize;
use wig_taxonomy::{MorphStateId, Taxonomy, VisualTypeId};

use crate::morph::sequence::PresetSummary;
use crate::morph::{parameter_names, MorphEngine};

/// Table sizes of the vocabulary taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxonomyCoverage {
    /// Cap constructions.
    pub cap_constructions: usize,
    /// Texture patterns.
    pub texture_patterns: usize,
    /// Edge treatments.
    pub edge_treatments: usize,
    /// Highlight patterns.
    pub color_patterns: usize,
    /// Style contexts.
    pub style_contexts: usize,
}

/// Morphospace capabilities.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MorphospaceInfo {
    /// Axis names.
    pub parameters: Vec<&'static str>,
    /// Canonical states.
    pub canonical_states: Vec<MorphStateId>,
    /// Curated presets.
    pub presets: Vec<PresetSummary>,
    /// Distinct preset periods, ascending.
    pub available_periods: Vec<u32>,
    /// Visual types.
    pub visual_types: Vec<VisualTypeId>,
    /// Prompt modes.
    pub prompt_modes: [&'static str; 2],
}

/// Output of [`service_info`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceInfo {
    /// Package name.
    pub name: &'static str,
    /// Package version.
    pub version: &'static str,
    /// Taxonomy version.
    pub taxonomy_version: &'static str,
    /// Table sizes.
    pub taxonomy_coverage: TaxonomyCoverage,
    /// Morphospace capabilities.
    pub morphospace: MorphospaceInfo,
    /// Recommended call order.
    pub workflow: [&'static str; 6],
}

/// Describes the service backed by `taxonomy`.
#[must_use]
pub fn service_info(taxonomy: &Taxonomy) -> ServiceInfo {
    let catalog = MorphEngine::new(taxonomy).list_presets();
    ServiceInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        taxonomy_version: taxonomy.version,
        taxonomy_coverage: TaxonomyCoverage {
            cap_constructions: taxonomy.cap_constructions.len(),
            texture_patterns: taxonomy.texture_patterns.len(),
            edge_treatments: taxonomy.edge_treatments.len(),
            color_patterns: taxonomy.highlight_patterns.len(),
            style_contexts: taxonomy.style_contexts.len(),
        },
        morphospace: MorphospaceInfo {
            parameters: parameter_names(),
            canonical_states: catalog.available_states,
            presets: catalog.presets,
            available_periods: catalog.available_periods,
            visual_types: taxonomy
                .morphospace
                .visual_types
                .iter()
                .map(|v| v.id)
                .collect(),
            prompt_modes: ["composite", "sequence"],
        },
        workflow: [
            "select parameters: cap, texture, density, length, color",
            "map the parameters to deterministic vocabulary",
            "optionally apply a style context",
            "optionally generate a rhythmic sequence",
            "optionally generate attractor prompts",
            "hand the composite vocabulary to the image or text generator",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coverage_matches_tables() {
        let info = service_info(Taxonomy::standard());
        assert_eq!(
            info.taxonomy_coverage,
            TaxonomyCoverage {
                cap_constructions: 7,
                texture_patterns: 8,
                edge_treatments: 4,
                color_patterns: 5,
                style_contexts: 5,
            }
        );
        assert_eq!(info.taxonomy_version, "2.6.0");
        assert_eq!(info.morphospace.visual_types.len(), 4);
        assert_eq!(info.morphospace.available_periods, vec![14, 18, 20, 22, 28]);
    }
}
