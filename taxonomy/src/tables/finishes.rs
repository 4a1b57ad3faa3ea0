//! Finishing vocabularies: edge treatments and highlight patterns.

use crate::ids::{EdgeTreatment, HighlightPattern};
use crate::model::{EdgeTreatmentEntry, HighlightPatternEntry};

/// Returns the 4 edge treatments in table order.
#[must_use]
pub fn edge_treatments() -> Vec<EdgeTreatmentEntry> {
    vec![
        EdgeTreatmentEntry {
            id: EdgeTreatment::BabyHairs,
            vocabulary: "fine 1-2 inch wispy baby hairs along perimeter, irregular natural \
                         distribution, delicate texture",
        },
        EdgeTreatmentEntry {
            id: EdgeTreatment::TemplePoints,
            vocabulary: "defined temple point detail, natural recession simulation, gradual \
                         density fade at temples",
        },
        EdgeTreatmentEntry {
            id: EdgeTreatment::Clean,
            vocabulary: "clean finished hairline, uniform density to edge, no wispy detail",
        },
        EdgeTreatmentEntry {
            id: EdgeTreatment::Layered,
            vocabulary: "graduated edge layering, soft perimeter transition, dimensional endpoint",
        },
    ]
}

/// Returns the 5 highlight patterns in table order.
#[must_use]
pub fn highlight_patterns() -> Vec<HighlightPatternEntry> {
    vec![
        HighlightPatternEntry {
            id: HighlightPattern::Ribbon,
            vocabulary: "vertical highlight ribbons, 1-2 strand width, precise placement, \
                         contrasting dimension",
        },
        HighlightPatternEntry {
            id: HighlightPattern::Balayage,
            vocabulary: "hand-painted balayage highlights, irregular organic placement, \
                         graduated intensity toward ends",
        },
        HighlightPatternEntry {
            id: HighlightPattern::Ombre,
            vocabulary: "ombre gradient transition, horizontal color fade, distinct \
                         root-to-tip progression",
        },
        HighlightPatternEntry {
            id: HighlightPattern::PeekABoo,
            vocabulary: "peek-a-boo underlayer highlights, hidden color reveals, dimensional \
                         depth underneath",
        },
        HighlightPatternEntry {
            id: HighlightPattern::Full,
            vocabulary: "full dimensional coloring, integrated highlight distribution \
                         throughout, natural sun-kissed effect",
        },
    ]
}
