//! Morphospace table validator.
//!
//! - inventory: 8 states, 5 presets, 4 visual types, ids unique
//! - every coordinate of every state and visual type lies in `[0, 1]`
//! - presets reference existing states, have distinct endpoints and a
//!   non-zero cycle count and period
//! - visual types carry at least two keywords and two color associations

use wig_mapper::morph::visual::{MIN_KEYWORDS, PROMPT_COLOR_COUNT};
use wig_taxonomy::{MorphCoordinates, Taxonomy, TaxonomyKind};

use crate::report::{ConformanceReport, TestResult};
use crate::validators::taxonomy::check_table;

/// Expected morphospace table sizes.
pub const EXPECTED_COUNTS: [(TaxonomyKind, usize); 3] = [
    (TaxonomyKind::MorphState, 8),
    (TaxonomyKind::RhythmicPreset, 5),
    (TaxonomyKind::VisualType, 4),
];

/// Validates the morphospace tables of `taxonomy`.
#[must_use]
pub fn validate(taxonomy: &Taxonomy) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    for (kind, expected) in EXPECTED_COUNTS {
        check_table(&mut report, taxonomy, kind, expected);
    }

    let morphospace = &taxonomy.morphospace;
    let mut out_of_range = Vec::new();
    for state in &morphospace.states {
        collect_out_of_range(&mut out_of_range, state.id.as_str(), &state.coordinates);
    }
    for visual in &morphospace.visual_types {
        collect_out_of_range(&mut out_of_range, visual.id.as_str(), &visual.coordinates);
    }
    report.push(TestResult::from_violations(
        "morphospace/coordinates",
        "all coordinates lie in [0, 1]",
        out_of_range,
    ));

    let mut broken = Vec::new();
    for preset in &morphospace.presets {
        for state in [preset.state_a, preset.state_b] {
            if taxonomy.get_morph_state(state.as_str()).is_err() {
                broken.push(format!("{}: unknown state {state}", preset.id));
            }
        }
        if preset.state_a == preset.state_b {
            broken.push(format!("{}: oscillates between identical states", preset.id));
        }
        if preset.num_cycles == 0 || preset.steps_per_cycle == 0 {
            broken.push(format!("{}: empty trajectory", preset.id));
        }
    }
    report.push(TestResult::from_violations(
        "morphospace/presets",
        "presets reference existing states and produce trajectories",
        broken,
    ));

    let thin: Vec<String> = morphospace
        .visual_types
        .iter()
        .filter(|v| {
            v.keywords.len() < MIN_KEYWORDS || v.color_associations.len() < PROMPT_COLOR_COUNT
        })
        .map(|v| v.id.to_string())
        .collect();
    report.push(TestResult::from_violations(
        "morphospace/visual-types",
        "visual types carry enough keywords and colors for prompts",
        thin,
    ));
    report
}

fn collect_out_of_range(out: &mut Vec<String>, owner: &str, point: &MorphCoordinates) {
    for (axis, value) in wig_taxonomy::MorphParameter::ALL.iter().zip(point.0) {
        if !(0.0..=1.0).contains(&value) {
            out.push(format!("{owner}.{axis} = {value}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wig_taxonomy::MorphStateId;

    #[test]
    fn standard_morphospace_passes() {
        let report = validate(Taxonomy::standard());
        assert!(report.all_passed(), "{:#?}", report.results);
    }

    #[test]
    fn dangling_preset_state_is_reported() {
        let mut taxonomy = Taxonomy::build();
        taxonomy
            .morphospace
            .states
            .retain(|s| s.id != MorphStateId::FantasyExtreme);
        let report = validate(&taxonomy);
        let details: Vec<&String> = report
            .results
            .iter()
            .filter(|r| r.validator == "morphospace/presets")
            .flat_map(|r| r.details.iter())
            .collect();
        assert_eq!(details.len(), 1);
        assert!(details[0].starts_with("color_pulse"));
    }

    #[test]
    fn out_of_range_coordinate_is_reported() {
        let mut taxonomy = Taxonomy::build();
        taxonomy.morphospace.states[0].coordinates.0[4] = 1.2;
        let report = validate(&taxonomy);
        assert_eq!(report.failure_count(), 1);
    }
}
