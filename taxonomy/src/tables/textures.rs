//! Texture patterns: curl classification, wave geometry and scale.
//!
//! Descriptions carry a `{scale}` placeholder where the wavelength or curl
//! diameter is interpolated.

use crate::ids::TexturePatternId;
use crate::model::TexturePattern;

/// Returns the 8 texture patterns in table order.
#[must_use]
pub fn table() -> Vec<TexturePattern> {
    vec![
        TexturePattern {
            id: TexturePatternId::Straight,
            name: "Straight",
            curl_type: "1A-1C",
            wave_geometry: "none",
            scale: None,
            description: "sleek straight texture, no wave pattern, reflective shaft alignment, \
                          smooth uniform direction",
        },
        TexturePattern {
            id: TexturePatternId::BodyWave,
            name: "Body Wave",
            curl_type: "2A-2B",
            wave_geometry: "loose_S",
            scale: Some("3-4 inch wavelength"),
            description: "cascading body waves, loose S-curve pattern, {scale}, \
                          medium spring and bounce",
        },
        TexturePattern {
            id: TexturePatternId::DeepWave,
            name: "Deep Wave",
            curl_type: "2C-3A",
            wave_geometry: "tight_S",
            scale: Some("2-3 inch wavelength"),
            description: "deep wave texture, tight S-curve waves, {scale}, pronounced spring, \
                          defined wave crests",
        },
        TexturePattern {
            id: TexturePatternId::LooseCurl,
            name: "Loose Curl",
            curl_type: "3A-3B",
            wave_geometry: "spiral_loose",
            scale: Some("1-2 inch curl diameter"),
            description: "loose spiral curls, {scale}, defined ringlets, bouncy spring pattern",
        },
        TexturePattern {
            id: TexturePatternId::TightCurl,
            name: "Tight Curl",
            curl_type: "3C",
            wave_geometry: "spiral_tight",
            scale: Some("pencil-width diameter"),
            description: "tight corkscrew curls, {scale}, dense curl definition, \
                          high spring coil pattern",
        },
        TexturePattern {
            id: TexturePatternId::KinkyStraight,
            name: "Kinky Straight",
            curl_type: "4A",
            wave_geometry: "textured_straight",
            scale: None,
            description: "kinky straight texture, subtle bend pattern, coarse texture \
                          visibility, natural body without curl",
        },
        TexturePattern {
            id: TexturePatternId::KinkyCurly,
            name: "Kinky Curly",
            curl_type: "4B",
            wave_geometry: "zigzag",
            scale: None,
            description: "kinky curly texture, tight zigzag pattern, dense coil structure, \
                          maximum volume and spring",
        },
        TexturePattern {
            id: TexturePatternId::Coily,
            name: "Coily",
            curl_type: "4C",
            wave_geometry: "tight_coil",
            scale: None,
            description: "tight coily texture, densely packed coil springs, minimal \
                          definition, maximum shrinkage and volume",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SCALE_PLACEHOLDER;

    #[test]
    fn placeholder_present_exactly_when_scale_is() {
        for texture in table() {
            assert_eq!(
                texture.description.contains(SCALE_PLACEHOLDER),
                texture.scale.is_some(),
                "{}",
                texture.id
            );
        }
    }

    #[test]
    fn body_wave_interpolates_wavelength() {
        let body_wave = &table()[1];
        assert_eq!(
            body_wave.vocabulary(),
            "cascading body waves, loose S-curve pattern, 3-4 inch wavelength, \
             medium spring and bounce"
        );
    }
}
