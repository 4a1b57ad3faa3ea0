//! End-to-end vocabulary scenarios through the public API.

use wig_mapper::vocabulary::FACET_SEPARATOR;
use wig_mapper::{Error, Facet, ParameterMapper, ParameterRequest, StyleApplier, ValidationError};
use wig_taxonomy::Taxonomy;

const GOLDEN: &str = "invisible lace hairline transition, individual strand implantation visible \
at forehead, pre-plucked density graduation; cascading body waves, loose S-curve pattern, 3-4 inch \
wavelength, medium spring and bounce; 100% natural density, realistic fullness matching biological \
hair; 16-inch primary length, with graduated layers at 14-inch, 12-inch; natural crown proportion, \
natural temple proportion, natural nape proportion; fine 1-2 inch wispy baby hairs along perimeter, \
irregular natural distribution, delicate texture; dark brown base color, dimensional coloring with \
1.5-inch root shadow fade creating depth, hand-painted balayage highlights, irregular organic \
placement, graduated intensity toward ends";

fn golden_request() -> ParameterRequest {
    ParameterRequest::new("lace_front", "body_wave", 1.0, 16, "dark brown")
        .dimensional("balayage", 1.5)
        .edge("baby_hairs")
        .layers(vec![12, 14])
        .volume(1.0, 1.0, 1.0)
}

fn mapper() -> ParameterMapper<'static> {
    ParameterMapper::new(Taxonomy::standard())
}

#[test]
fn golden_scenario() -> Result<(), ValidationError> {
    let result = mapper().map_request(&golden_request())?;
    assert_eq!(result.composite_vocabulary, GOLDEN);
    Ok(())
}

#[test]
fn golden_scenario_from_json() -> Result<(), Error> {
    let json = r#"{
        "cap_construction": "lace_front",
        "texture_pattern": "body_wave",
        "density_profile": 1.0,
        "length_primary": 16,
        "base_color": "dark brown",
        "color_dimensional": true,
        "highlight_pattern": "balayage",
        "root_shadow_depth": 1.5,
        "edge_treatment": "baby_hairs",
        "layers": [12, 14],
        "volume_distribution": {"crown": 1.0, "temple": 1.0, "nape": 1.0}
    }"#;
    let result = mapper().map_json(json)?;
    assert_eq!(result.composite_vocabulary, GOLDEN);
    Ok(())
}

#[test]
fn composite_is_facets_in_order() -> Result<(), ValidationError> {
    let result = mapper().map_request(&golden_request().volume(1.4, 0.85, 1.1))?;
    let clauses: Vec<&str> = Facet::ALL.iter().map(|f| result.facets.get(*f)).collect();
    assert_eq!(result.composite_vocabulary, clauses.join(FACET_SEPARATOR));
    assert_eq!(
        result.facets.volume,
        "dramatic crown lift creating 1.4x natural height, compressed temple profile at 0.8x \
         natural, enhanced nape volume at 1.1x natural"
    );
    Ok(())
}

#[test]
fn solid_color_ignores_highlight() -> Result<(), ValidationError> {
    let mut request = golden_request();
    request.color_dimensional = false;
    let result = mapper().map_request(&request)?;
    assert_eq!(
        result.facets.color,
        "dark brown base color, solid uniform color throughout"
    );
    assert!(!result.composite_vocabulary.contains("balayage"));
    Ok(())
}

#[test]
fn dimensional_without_highlight_fails() {
    let mut request = golden_request();
    request.highlight_pattern = None;
    assert!(matches!(
        mapper().map_request(&request),
        Err(ValidationError::Consistency {
            field: "highlight_pattern",
            ..
        })
    ));
}

#[test]
fn unknown_ids_produce_no_output() {
    let mut request = golden_request();
    request.texture_pattern = "crimped".to_owned();
    let err = mapper().map_request(&request).err();
    assert!(matches!(
        &err,
        Some(ValidationError::UnknownTaxonomyId { field: "texture_pattern", value, valid })
            if value == "crimped" && valid.contains(&"kinky_curly")
    ));

    let params = golden_request().validate(Taxonomy::standard());
    let styled = params.map(|p| StyleApplier::new(Taxonomy::standard()).apply(&p, "punk"));
    assert!(matches!(
        styled,
        Ok(Err(ValidationError::UnknownTaxonomyId { field: "style", .. }))
    ));
}

#[test]
fn decode_errors_are_distinct_from_validation() {
    let bad_layers = r#"{"cap_construction": "lace_front", "texture_pattern": "body_wave",
        "density_profile": 1.0, "length_primary": 16, "base_color": "black",
        "layers": "14, 12"}"#;
    assert!(matches!(mapper().map_json(bad_layers), Err(Error::Decode(_))));

    let bad_zone = r#"{"cap_construction": "lace_front", "texture_pattern": "body_wave",
        "density_profile": 1.0, "length_primary": 16, "base_color": "black",
        "volume_distribution": {"fringe": 1.2}}"#;
    assert!(matches!(mapper().map_json(bad_zone), Err(Error::Decode(_))));

    let out_of_range = r#"{"cap_construction": "lace_front", "texture_pattern": "body_wave",
        "density_profile": 3.0, "length_primary": 16, "base_color": "black"}"#;
    assert!(matches!(
        mapper().map_json(out_of_range),
        Err(Error::Validation(ValidationError::Range { field: "density_profile", .. }))
    ));
}

#[test]
fn mapper_resolves_against_its_own_taxonomy() -> Result<(), ValidationError> {
    let params = golden_request().validate(Taxonomy::standard())?;
    let mut reduced = Taxonomy::build();
    reduced.highlight_patterns.retain(|h| h.id.as_str() != "balayage");
    let err = ParameterMapper::new(&reduced).map(&params).err();
    assert_eq!(err.map(|e| e.field()), Some("highlight_pattern"));
    Ok(())
}

#[test]
fn styled_vocabulary_serializes_flat() -> Result<(), Box<dyn std::error::Error>> {
    let params = golden_request().validate(Taxonomy::standard())?;
    let styled = StyleApplier::new(Taxonomy::standard()).apply_and_map(&params, "editorial")?;
    let value = serde_json::to_value(&styled)?;
    assert_eq!(value["style_context"]["style"], "editorial");
    assert_eq!(value["parameters"]["density_profile"], 1.4);
    assert_eq!(value["parameters"]["edge_treatment"], "layered");
    assert!(value["vocabulary_components"]["edge"]
        .as_str()
        .is_some_and(|edge| edge.starts_with("graduated edge layering")));
    assert!(value["composite_vocabulary"].is_string());
    Ok(())
}

#[test]
fn minimal_request_fills_defaults() -> Result<(), Error> {
    let request = ParameterRequest::from_json(
        r#"{"cap_construction":"lace_front","texture_pattern":"body_wave",
            "length_primary":18,"density_profile":1.5,"base_color":"jet black"}"#,
    )?;
    let params = request.validate(Taxonomy::standard())?;
    let styled = StyleApplier::new(Taxonomy::standard()).apply_and_map(&params, "editorial")?;
    let composite = &styled.result.composite_vocabulary;
    assert!(composite.contains("140% density, dramatic volume, luxurious thickness"));
    assert!(composite.contains("18-inch primary length"));
    assert!(composite.ends_with("jet black base color, solid uniform color throughout"));
    Ok(())
}
