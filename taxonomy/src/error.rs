//! Lookup errors.

use std::fmt;

/// Which taxonomy table a lookup targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaxonomyKind {
    /// Cap constructions.
    CapConstruction,
    /// Texture patterns.
    TexturePattern,
    /// Style contexts.
    StyleContext,
    /// Edge treatments.
    EdgeTreatment,
    /// Highlight patterns.
    HighlightPattern,
    /// Canonical morphospace states.
    MorphState,
    /// Rhythmic presets.
    RhythmicPreset,
    /// Visual types.
    VisualType,
}

impl TaxonomyKind {
    /// Returns the human-readable table name.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TaxonomyKind::CapConstruction => "cap construction",
            TaxonomyKind::TexturePattern => "texture pattern",
            TaxonomyKind::StyleContext => "style context",
            TaxonomyKind::EdgeTreatment => "edge treatment",
            TaxonomyKind::HighlightPattern => "highlight pattern",
            TaxonomyKind::MorphState => "morphospace state",
            TaxonomyKind::RhythmicPreset => "rhythmic preset",
            TaxonomyKind::VisualType => "visual type",
        }
    }
}

impl fmt::Display for TaxonomyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An id did not match any entry of the targeted table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {id:?} (available: {})", .available.join(", "))]
pub struct NotFound {
    /// Table that was searched.
    pub kind: TaxonomyKind,
    /// The id that was not found.
    pub id: String,
    /// Every id the table does contain, in table order.
    pub available: Vec<&'static str>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_lists_available_ids() {
        let err = NotFound {
            kind: TaxonomyKind::StyleContext,
            id: "gothic".to_owned(),
            available: vec!["natural", "medical"],
        };
        assert_eq!(
            err.to_string(),
            "unknown style context: \"gothic\" (available: natural, medical)"
        );
    }
}
