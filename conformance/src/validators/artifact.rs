//! Built artifact validator.
//!
//! Reads `<artifacts>/wig.taxonomy.json` and checks that its version and the
//! size of every table match the live taxonomy.

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;
use wig_taxonomy::{Taxonomy, TaxonomyKind};

use crate::report::{ConformanceReport, TestResult};

/// File name of the taxonomy snapshot written by `wig-build`.
pub const ARTIFACT_FILE: &str = "wig.taxonomy.json";

const VALIDATOR: &str = "artifact/taxonomy";

/// JSON pointer of each table inside the artifact.
const TABLES: [(&str, TaxonomyKind); 8] = [
    ("/cap_constructions", TaxonomyKind::CapConstruction),
    ("/texture_patterns", TaxonomyKind::TexturePattern),
    ("/style_contexts", TaxonomyKind::StyleContext),
    ("/edge_treatments", TaxonomyKind::EdgeTreatment),
    ("/color_highlight_patterns", TaxonomyKind::HighlightPattern),
    ("/morphospace/states", TaxonomyKind::MorphState),
    ("/morphospace/presets", TaxonomyKind::RhythmicPreset),
    ("/morphospace/visual_types", TaxonomyKind::VisualType),
];

/// Validates the artifact in `artifacts` against `taxonomy`.
///
/// A missing artifact is a failure, not an error.
///
/// # Errors
///
/// Returns an error if the artifact exists but cannot be read or parsed.
pub fn validate(artifacts: &Path, taxonomy: &Taxonomy) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();
    let path = artifacts.join(ARTIFACT_FILE);
    if !path.exists() {
        report.push(TestResult::fail(
            VALIDATOR,
            format!("{ARTIFACT_FILE} not found in {}", artifacts.display()),
        ));
        return Ok(report);
    }
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let document: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {} as JSON", path.display()))?;
    validate_document(&document, taxonomy, &mut report);
    Ok(report)
}

fn validate_document(document: &Value, taxonomy: &Taxonomy, report: &mut ConformanceReport) {
    match document.get("version").and_then(Value::as_str) {
        Some(version) if version == taxonomy.version => {
            report.push(TestResult::pass(VALIDATOR, format!("version {version}")));
        }
        other => report.push(TestResult::fail(
            VALIDATOR,
            format!("version mismatch: expected {}, found {other:?}", taxonomy.version),
        )),
    }

    let mut mismatches = Vec::new();
    for (pointer, kind) in TABLES {
        let expected = taxonomy.ids(kind).len();
        let found = match document.pointer(pointer) {
            Some(Value::Array(items)) => Some(items.len()),
            Some(Value::Object(entries)) => Some(entries.len()),
            _ => None,
        };
        match found {
            Some(n) if n == expected => {}
            Some(n) => mismatches.push(format!("{pointer}: expected {expected}, found {n}")),
            None => mismatches.push(format!("{pointer}: missing")),
        }
    }
    report.push(TestResult::from_violations(
        VALIDATOR,
        "artifact table sizes match the taxonomy",
        mismatches,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use wig_taxonomy::serializer::json::to_json;

    #[test]
    fn serialized_taxonomy_passes() {
        let taxonomy = Taxonomy::standard();
        let mut report = ConformanceReport::new();
        validate_document(&to_json(taxonomy), taxonomy, &mut report);
        assert!(report.all_passed(), "{:#?}", report.results);
    }

    #[test]
    fn truncated_table_is_reported() {
        let taxonomy = Taxonomy::standard();
        let mut document = to_json(taxonomy);
        if let Some(Value::Array(states)) = document.pointer_mut("/morphospace/states") {
            states.pop();
        }
        let mut report = ConformanceReport::new();
        validate_document(&document, taxonomy, &mut report);
        assert_eq!(report.failure_count(), 1);
        assert_eq!(report.results[1].details, vec!["/morphospace/states: expected 8, found 7"]);
    }

    #[test]
    fn missing_artifact_is_a_failure() -> Result<()> {
        let dir = std::env::temp_dir().join("wig-conformance-missing-artifact");
        let report = validate(&dir, Taxonomy::standard())?;
        assert_eq!(report.failure_count(), 1);
        Ok(())
    }
}
