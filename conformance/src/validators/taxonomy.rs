//! Taxonomy table validator.
//!
//! Checks the live tables (no file I/O):
//! - inventory counts: 7 caps, 8 textures, 5 styles, 4 edges, 5 highlights
//! - ids unique within each table
//! - style densities inside the accepted density range, style multipliers positive
//! - every texture with a scale references it exactly once in its description

use std::collections::HashSet;

use wig_mapper::params::DENSITY_RANGE;
use wig_taxonomy::model::SCALE_PLACEHOLDER;
use wig_taxonomy::{Taxonomy, TaxonomyKind, Zone};

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "taxonomy/inventory";

/// Expected table sizes, in [`TaxonomyKind`] order for the vocabulary tables.
pub const EXPECTED_COUNTS: [(TaxonomyKind, usize); 5] = [
    (TaxonomyKind::CapConstruction, 7),
    (TaxonomyKind::TexturePattern, 8),
    (TaxonomyKind::StyleContext, 5),
    (TaxonomyKind::EdgeTreatment, 4),
    (TaxonomyKind::HighlightPattern, 5),
];

/// Validates the vocabulary tables of `taxonomy`.
#[must_use]
pub fn validate(taxonomy: &Taxonomy) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    for (kind, expected) in EXPECTED_COUNTS {
        check_table(&mut report, taxonomy, kind, expected);
    }
    check_styles(&mut report, taxonomy);
    check_texture_scales(&mut report, taxonomy);
    report
}

/// Pushes a count check and a uniqueness check for one table.
pub(crate) fn check_table(
    report: &mut ConformanceReport,
    taxonomy: &Taxonomy,
    kind: TaxonomyKind,
    expected: usize,
) {
    let ids = taxonomy.ids(kind);
    if ids.len() == expected {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("{kind}: {} entries", ids.len()),
        ));
    } else {
        report.push(TestResult::fail(
            VALIDATOR,
            format!("{kind}: expected {expected} entries, found {}", ids.len()),
        ));
    }

    let mut seen = HashSet::new();
    let duplicates: Vec<String> = ids
        .iter()
        .filter(|id| !seen.insert(**id))
        .map(|id| (*id).to_owned())
        .collect();
    report.push(TestResult::from_violations(
        VALIDATOR,
        format!("{kind}: ids are unique"),
        duplicates,
    ));
}

fn check_styles(report: &mut ConformanceReport, taxonomy: &Taxonomy) {
    let mut violations = Vec::new();
    for style in &taxonomy.style_contexts {
        if !DENSITY_RANGE.contains(&style.density) {
            violations.push(format!("{}: density {} out of range", style.id, style.density));
        }
        for zone in Zone::ALL {
            let multiplier = style.volume.get(*zone);
            if !(multiplier.is_finite() && multiplier > 0.0) {
                violations.push(format!("{}: {zone} multiplier {multiplier}", style.id));
            }
        }
    }
    report.push(TestResult::from_violations(
        "taxonomy/styles",
        "style densities and zone multipliers are in range",
        violations,
    ));
}

fn check_texture_scales(report: &mut ConformanceReport, taxonomy: &Taxonomy) {
    let violations: Vec<String> = taxonomy
        .texture_patterns
        .iter()
        .filter(|t| {
            let placeholders = t.description.matches(SCALE_PLACEHOLDER).count();
            placeholders != usize::from(t.scale.is_some())
        })
        .map(|t| t.id.to_string())
        .collect();
    report.push(TestResult::from_violations(
        "taxonomy/textures",
        "texture scales match their description placeholders",
        violations,
    ));
}
