//! Cap constructions: how strands are attached and what shows at the hairline.

use crate::ids::CapConstructionId;
use crate::model::CapConstruction;

/// Returns the 7 cap constructions in table order.
#[must_use]
pub fn table() -> Vec<CapConstruction> {
    vec![
        CapConstruction {
            id: CapConstructionId::LaceFront,
            name: "Lace Front",
            parting_freedom: "hairline_only",
            visibility: "transparent_hairline",
            vocabulary: "invisible lace hairline transition, individual strand implantation \
                         visible at forehead, pre-plucked density graduation",
        },
        CapConstruction {
            id: CapConstructionId::Monofilament,
            name: "Monofilament Top",
            parting_freedom: "full",
            visibility: "scalp_simulation",
            vocabulary: "monofilament scalp-like top, individual strand knotting visible, \
                         natural directional flow from crown, free-form parting capability",
        },
        CapConstruction {
            id: CapConstructionId::FullLace,
            name: "Full Lace",
            parting_freedom: "full",
            visibility: "transparent_entire",
            vocabulary: "full lace cap construction, 360-degree transparency, individual \
                         hand-tied strands throughout, maximum styling versatility",
        },
        CapConstruction {
            id: CapConstructionId::Wefted,
            name: "Wefted/Traditional",
            parting_freedom: "constrained",
            visibility: "standard",
            vocabulary: "machine-wefted construction, defined weft lines, structured parting, \
                         economical density distribution",
        },
        CapConstruction {
            id: CapConstructionId::HandTied,
            name: "Hand-Tied",
            parting_freedom: "moderate",
            visibility: "natural_movement",
            vocabulary: "hand-tied individual strands, natural movement and flow, reduced bulk, \
                         breathable construction",
        },
        CapConstruction {
            id: CapConstructionId::Capless,
            name: "Capless/Open-Wefted",
            parting_freedom: "constrained",
            visibility: "lightweight",
            vocabulary: "open-wefted ventilated construction, lightweight feel, visible weft \
                         structure, maximum airflow",
        },
        CapConstruction {
            id: CapConstructionId::Lace360,
            name: "360 Lace",
            parting_freedom: "perimeter",
            visibility: "transparent_perimeter",
            vocabulary: "360-degree lace perimeter, transparent edges all around, center \
                         wefted, high ponytail capability",
        },
    ]
}
