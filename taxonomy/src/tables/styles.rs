//! Style contexts: presets of density, zone volume and edge defaults.

use crate::ids::{EdgeTreatment, StyleId};
use crate::model::{StyleContext, VolumeProfile};

/// Returns the 5 style contexts in table order.
#[must_use]
pub fn table() -> Vec<StyleContext> {
    vec![
        StyleContext {
            id: StyleId::Natural,
            density: 1.0,
            volume: VolumeProfile::NATURAL,
            edge: EdgeTreatment::BabyHairs,
            focus: "realistic scalp simulation, natural movement",
        },
        StyleContext {
            id: StyleId::Theatrical,
            density: 1.5,
            volume: VolumeProfile {
                crown: 1.3,
                temple: 1.1,
                nape: 1.2,
            },
            edge: EdgeTreatment::Clean,
            focus: "dramatic volume, bold silhouette",
        },
        StyleContext {
            id: StyleId::Editorial,
            density: 1.4,
            volume: VolumeProfile {
                crown: 1.4,
                temple: 0.9,
                nape: 1.0,
            },
            edge: EdgeTreatment::Layered,
            focus: "sculptural shape, architectural volume",
        },
        StyleContext {
            id: StyleId::Cosplay,
            density: 1.6,
            volume: VolumeProfile {
                crown: 1.5,
                temple: 1.3,
                nape: 1.4,
            },
            edge: EdgeTreatment::Clean,
            focus: "character accuracy, extreme styling capability",
        },
        StyleContext {
            id: StyleId::Medical,
            density: 0.9,
            volume: VolumeProfile {
                crown: 0.95,
                temple: 0.95,
                nape: 0.95,
            },
            edge: EdgeTreatment::BabyHairs,
            focus: "comfort, natural appearance, breathability",
        },
    ]
}
