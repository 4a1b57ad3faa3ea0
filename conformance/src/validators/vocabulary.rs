//! Vocabulary contract validator.
//!
//! Runs the mapper end to end against fixed scenarios:
//! - the reference lace front / body wave request renders the exact golden string
//! - the composite is the seven facets joined in contract order
//! - unit density always renders the natural density clause
//! - every style replaces density and keeps volume inside the clamp range
//! - unknown ids and inconsistent color fields are rejected

use wig_mapper::params::VOLUME_RANGE;
use wig_mapper::vocabulary::FACET_SEPARATOR;
use wig_mapper::{Facet, ParameterMapper, ParameterRequest, StyleApplier, ValidationError};
use wig_taxonomy::{Taxonomy, Zone};

use crate::report::{ConformanceReport, TestResult};

/// Composite string the reference request must render.
pub const GOLDEN_COMPOSITE: &str = "invisible lace hairline transition, individual strand \
implantation visible at forehead, pre-plucked density graduation; cascading body waves, loose \
S-curve pattern, 3-4 inch wavelength, medium spring and bounce; 100% natural density, realistic \
fullness matching biological hair; 16-inch primary length, with graduated layers at 14-inch, \
12-inch; natural crown proportion, natural temple proportion, natural nape proportion; fine 1-2 \
inch wispy baby hairs along perimeter, irregular natural distribution, delicate texture; dark \
brown base color, dimensional coloring with 1.5-inch root shadow fade creating depth, \
hand-painted balayage highlights, irregular organic placement, graduated intensity toward ends";

/// The reference request behind [`GOLDEN_COMPOSITE`].
#[must_use]
pub fn golden_request() -> ParameterRequest {
    ParameterRequest::new("lace_front", "body_wave", 1.0, 16, "dark brown")
        .dimensional("balayage", 1.5)
        .layers(vec![12, 14])
        .volume(1.0, 1.0, 1.0)
}

/// Validates the vocabulary contract of the mapper over `taxonomy`.
#[must_use]
pub fn validate(taxonomy: &Taxonomy) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    let mapper = ParameterMapper::new(taxonomy);

    match mapper.map_request(&golden_request()) {
        Ok(result) if result.composite_vocabulary == GOLDEN_COMPOSITE => {
            report.push(TestResult::pass(
                "vocabulary/golden",
                "reference request renders the golden composite",
            ));
            let clauses: Vec<&str> = Facet::ALL.iter().map(|f| result.facets.get(*f)).collect();
            if clauses.join(FACET_SEPARATOR) == result.composite_vocabulary {
                report.push(TestResult::pass(
                    "vocabulary/order",
                    "facets joined in contract order",
                ));
            } else {
                report.push(TestResult::fail(
                    "vocabulary/order",
                    "composite does not follow facet order",
                ));
            }
        }
        Ok(result) => report.push(TestResult::fail_with_details(
            "vocabulary/golden",
            "reference request renders a different composite",
            vec![result.composite_vocabulary],
        )),
        Err(err) => report.push(TestResult::fail(
            "vocabulary/golden",
            format!("reference request rejected: {err}"),
        )),
    }

    check_identity_density(&mut report, &mapper);
    check_styles(&mut report, taxonomy);
    check_rejections(&mut report, &mapper);
    report
}

fn check_identity_density(report: &mut ConformanceReport, mapper: &ParameterMapper<'_>) {
    let mut violations = Vec::new();
    for texture in ["straight", "deep_wave", "kinky_curly"] {
        let mut request = golden_request();
        request.texture_pattern = texture.to_owned();
        match mapper.map_request(&request) {
            Ok(result) if result.facets.density.starts_with("100% natural density") => {}
            Ok(result) => violations.push(format!("{texture}: {}", result.facets.density)),
            Err(err) => violations.push(format!("{texture}: {err}")),
        }
    }
    report.push(TestResult::from_violations(
        "vocabulary/density",
        "unit density renders the natural clause",
        violations,
    ));
}

fn check_styles(report: &mut ConformanceReport, taxonomy: &Taxonomy) {
    let applier = StyleApplier::new(taxonomy);
    let mut violations = Vec::new();
    let extreme = golden_request().volume(1.6, 0.8, 1.6);
    let base = match extreme.validate(taxonomy) {
        Ok(base) => base,
        Err(err) => {
            report.push(TestResult::fail(
                "vocabulary/styles",
                format!("style base rejected: {err}"),
            ));
            return;
        }
    };
    for style in &taxonomy.style_contexts {
        match applier.apply(&base, style.id.as_str()) {
            Ok(styled) => {
                if styled.density_profile() != style.density {
                    violations.push(format!("{}: density {}", style.id, styled.density_profile()));
                }
                for zone in Zone::ALL {
                    let value = styled.volume_distribution().get(*zone);
                    if !VOLUME_RANGE.contains(&value) {
                        violations.push(format!("{}: {zone} = {value}", style.id));
                    }
                }
            }
            Err(err) => violations.push(format!("{}: {err}", style.id)),
        }
    }
    report.push(TestResult::from_violations(
        "vocabulary/styles",
        "styles replace density and clamp volume",
        violations,
    ));
}

fn check_rejections(report: &mut ConformanceReport, mapper: &ParameterMapper<'_>) {
    let mut unknown_cap = golden_request();
    unknown_cap.cap_construction = "silk_top".to_owned();
    let mut missing_highlight = golden_request();
    missing_highlight.highlight_pattern = None;

    let cases = [
        (
            "unknown cap construction",
            matches!(
                mapper.map_request(&unknown_cap),
                Err(ValidationError::UnknownTaxonomyId { .. })
            ),
        ),
        (
            "dimensional color without highlight",
            matches!(
                mapper.map_request(&missing_highlight),
                Err(ValidationError::Consistency { .. })
            ),
        ),
    ];
    let violations: Vec<String> = cases
        .iter()
        .filter(|(_, rejected)| !rejected)
        .map(|(case, _)| format!("{case} was accepted"))
        .collect();
    report.push(TestResult::from_violations(
        "vocabulary/rejections",
        "invalid requests are rejected before rendering",
        violations,
    ));
}
