//! Wig design taxonomy encoded as typed Rust data.
//!
//! The `wig-taxonomy` crate provides every fixed table the vocabulary mapper
//! reads from as static Rust data: 7 cap constructions, 8 texture patterns,
//! 5 style contexts, 4 edge treatments, 5 highlight patterns and the
//! morphospace tables. A JSON serializer backs discovery.
//!
//! # Entry Point
//!
//! ```
//! let taxonomy = wig_taxonomy::Taxonomy::standard();
//! assert_eq!(taxonomy.cap_constructions.len(), 7);
//! let cap = taxonomy.get_cap_construction("lace_front")?;
//! assert_eq!(cap.name, "Lace Front");
//! # Ok::<(), wig_taxonomy::NotFound>(())
//! ```
//!
//! # Serialization
//!
//! ```
//! let taxonomy = wig_taxonomy::Taxonomy::standard();
//! let document = wig_taxonomy::serializer::json::to_json(taxonomy);
//! assert_eq!(document["version"], taxonomy.version);
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod error;
pub mod ids;
pub mod model;
#[cfg(feature = "serializers")]
pub mod serializer;
pub mod tables;

pub use error::{NotFound, TaxonomyKind};
pub use ids::{
    CapConstructionId, EdgeTreatment, HighlightPattern, MorphParameter, MorphStateId,
    OscillationPattern, RhythmicPresetId, StyleId, TexturePatternId, VisualTypeId, Zone,
};
pub use model::{
    CapConstruction, EdgeTreatmentEntry, HighlightPatternEntry, MorphCoordinates, MorphState,
    Morphospace, OpticalProperties, RhythmicPreset, StyleContext, Taxonomy, TaxonomySnapshot,
    TexturePattern, VisualType, VolumeProfile,
};

impl Taxonomy {
    /// Builds a fresh, owned copy of the standard taxonomy.
    ///
    /// Prefer [`Taxonomy::standard`] unless the tables need to be altered,
    /// e.g. to exercise a mapper against a reduced taxonomy.
    #[must_use]
    pub fn build() -> Taxonomy {
        Taxonomy {
            version: "2.6.0",
            cap_constructions: tables::caps::table(),
            texture_patterns: tables::textures::table(),
            style_contexts: tables::styles::table(),
            edge_treatments: tables::finishes::edge_treatments(),
            highlight_patterns: tables::finishes::highlight_patterns(),
            morphospace: tables::morphospace::tables(),
        }
    }

    /// Returns the process-wide standard taxonomy.
    ///
    /// The tables are built on first use and never written again, so the
    /// reference can be shared freely across threads.
    #[must_use]
    pub fn standard() -> &'static Taxonomy {
        static TAXONOMY: std::sync::OnceLock<Taxonomy> = std::sync::OnceLock::new();
        TAXONOMY.get_or_init(Taxonomy::build)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_counts() {
        let taxonomy = Taxonomy::standard();
        assert_eq!(taxonomy.cap_constructions.len(), 7);
        assert_eq!(taxonomy.texture_patterns.len(), 8);
        assert_eq!(taxonomy.style_contexts.len(), 5);
        assert_eq!(taxonomy.edge_treatments.len(), 4);
        assert_eq!(taxonomy.highlight_patterns.len(), 5);
        assert_eq!(taxonomy.morphospace.states.len(), 8);
        assert_eq!(taxonomy.morphospace.presets.len(), 5);
        assert_eq!(taxonomy.morphospace.visual_types.len(), 4);
    }

    #[test]
    fn tables_follow_id_enum_order() {
        let taxonomy = Taxonomy::standard();
        let caps: Vec<_> = taxonomy.cap_constructions.iter().map(|c| c.id).collect();
        assert_eq!(caps, CapConstructionId::ALL);
        let textures: Vec<_> = taxonomy.texture_patterns.iter().map(|t| t.id).collect();
        assert_eq!(textures, TexturePatternId::ALL);
        let styles: Vec<_> = taxonomy.style_contexts.iter().map(|s| s.id).collect();
        assert_eq!(styles, StyleId::ALL);
    }

    #[test]
    fn lookup_miss_reports_available_ids() {
        let err = Taxonomy::standard().get_texture_pattern("afro_puff").err();
        assert_eq!(err.as_ref().map(|e| e.kind), Some(TaxonomyKind::TexturePattern));
        assert_eq!(err.as_ref().map(|e| e.id.as_str()), Some("afro_puff"));
        assert_eq!(err.as_ref().map(|e| e.available.len()), Some(8));
        assert_eq!(err.as_ref().map(|e| e.available[0]), Some("straight"));
    }

    #[test]
    fn style_lookup_returns_multipliers() -> Result<(), NotFound> {
        let theatrical = Taxonomy::standard().get_style_context("theatrical")?;
        assert_eq!(theatrical.density, 1.5);
        assert_eq!(theatrical.volume.crown, 1.3);
        assert_eq!(theatrical.edge, EdgeTreatment::Clean);
        Ok(())
    }

    #[test]
    fn reduced_taxonomy_only_knows_its_own_entries() {
        let mut reduced = Taxonomy::build();
        reduced
            .cap_constructions
            .retain(|c| c.id != CapConstructionId::Capless);
        assert!(reduced.get_cap_construction("capless").is_err());
        assert!(Taxonomy::standard().get_cap_construction("capless").is_ok());
        assert_eq!(reduced.ids(TaxonomyKind::CapConstruction).len(), 6);
    }

    #[test]
    fn morph_state_ids_unique() {
        let mut ids = std::collections::HashSet::new();
        for state in &Taxonomy::standard().morphospace.states {
            assert!(ids.insert(state.id), "Duplicate state: {}", state.id);
        }
    }
}
