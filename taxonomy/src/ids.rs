//! Typed identifiers for every fixed taxonomy table.
//!
//! Each identifier is a closed enum whose string form is the stable id used
//! on the wire (`"lace_front"`, `"body_wave"`, ...). Variants are listed in
//! table order; [`ALL`](CapConstructionId::ALL) preserves that order.

macro_rules! taxonomy_id {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $id:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every variant, in table order.
            pub const ALL: &'static [$name] = &[ $( $name::$variant, )+ ];

            /// Returns the stable string id.
            #[must_use]
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $id, )+
                }
            }

            /// Parses a stable string id. Returns `None` if the id is unknown.
            #[must_use]
            pub fn parse(id: &str) -> Option<Self> {
                match id {
                    $( $id => Some($name::$variant), )+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        #[cfg(feature = "serde")]
        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}

taxonomy_id! {
    /// Cap construction (7 variants).
    CapConstructionId {
        /// Lace front.
        LaceFront => "lace_front",
        /// Monofilament top.
        Monofilament => "monofilament",
        /// Full lace.
        FullLace => "full_lace",
        /// Wefted / traditional.
        Wefted => "wefted",
        /// Hand-tied.
        HandTied => "hand_tied",
        /// Capless / open-wefted.
        Capless => "capless",
        /// 360 lace.
        Lace360 => "360_lace",
    }
}

taxonomy_id! {
    /// Texture pattern (8 variants).
    TexturePatternId {
        /// Straight, 1A-1C.
        Straight => "straight",
        /// Body wave, 2A-2B.
        BodyWave => "body_wave",
        /// Deep wave, 2C-3A.
        DeepWave => "deep_wave",
        /// Loose curl, 3A-3B.
        LooseCurl => "loose_curl",
        /// Tight curl, 3C.
        TightCurl => "tight_curl",
        /// Kinky straight, 4A.
        KinkyStraight => "kinky_straight",
        /// Kinky curly, 4B.
        KinkyCurly => "kinky_curly",
        /// Coily, 4C.
        Coily => "coily",
    }
}

taxonomy_id! {
    /// Style context preset (5 variants).
    StyleId {
        /// Realistic everyday wear.
        Natural => "natural",
        /// Stage and performance drama.
        Theatrical => "theatrical",
        /// Fashion photography.
        Editorial => "editorial",
        /// Character accuracy.
        Cosplay => "cosplay",
        /// Comfort focused.
        Medical => "medical",
    }
}

taxonomy_id! {
    /// Hairline edge treatment (4 variants).
    EdgeTreatment {
        /// Wispy baby hairs along the perimeter. The default treatment.
        BabyHairs => "baby_hairs",
        /// Defined temple points.
        TemplePoints => "temple_points",
        /// Clean finished hairline.
        Clean => "clean",
        /// Graduated edge layering.
        Layered => "layered",
    }
}

impl Default for EdgeTreatment {
    fn default() -> Self {
        EdgeTreatment::BabyHairs
    }
}

taxonomy_id! {
    /// Highlight placement pattern for dimensional color (5 variants).
    HighlightPattern {
        /// Vertical highlight ribbons.
        Ribbon => "ribbon",
        /// Hand-painted balayage.
        Balayage => "balayage",
        /// Ombre gradient.
        Ombre => "ombre",
        /// Peek-a-boo underlayer.
        PeekABoo => "peek_a_boo",
        /// Full dimensional coloring.
        Full => "full",
    }
}

taxonomy_id! {
    /// Volume zone of the head, in rendering order.
    Zone {
        /// Crown.
        Crown => "crown",
        /// Temples.
        Temple => "temple",
        /// Nape.
        Nape => "nape",
    }
}

taxonomy_id! {
    /// Axis of the normalized 5-dimensional morphospace.
    MorphParameter {
        /// 0.0 = opaque wefted structure, 1.0 = fully transparent lace.
        ConstructionTransparency => "construction_transparency",
        /// 0.0 = pin-straight, 1.0 = tight coily.
        TextureCurlIntensity => "texture_curl_intensity",
        /// 0.0 = sparse, 1.0 = ultra-dense.
        DensityVolume => "density_volume",
        /// 0.0 = flat single color, 1.0 = complex multi-technique color.
        ColorDimension => "color_dimension",
        /// 0.0 = understated, 1.0 = extreme presentation.
        StylingDrama => "styling_drama",
    }
}

taxonomy_id! {
    /// Canonical morphospace state (8 variants).
    MorphStateId {
        /// Everyday natural.
        EverydayNatural => "everyday_natural",
        /// Red carpet glamour.
        RedCarpetGlam => "red_carpet_glam",
        /// Editorial sculpture.
        EditorialSculpt => "editorial_sculpt",
        /// Theatrical volume.
        TheatricalVolume => "theatrical_volume",
        /// Protective crown.
        ProtectiveCrown => "protective_crown",
        /// Fantasy extreme.
        FantasyExtreme => "fantasy_extreme",
        /// Medical comfort.
        MedicalComfort => "medical_comfort",
        /// Textured natural.
        TexturedNatural => "textured_natural",
    }
}

taxonomy_id! {
    /// Curated rhythmic preset (5 variants).
    RhythmicPresetId {
        /// everyday_natural to textured_natural, period 22.
        TextureMorph => "texture_morph",
        /// medical_comfort to theatrical_volume, period 18.
        DensityBreathe => "density_breathe",
        /// everyday_natural to red_carpet_glam, period 28.
        DramaSweep => "drama_sweep",
        /// theatrical_volume to editorial_sculpt, period 14.
        ConstructionShift => "construction_shift",
        /// protective_crown to fantasy_extreme, period 20.
        ColorPulse => "color_pulse",
    }
}

taxonomy_id! {
    /// Waveform used to oscillate between two morphospace states.
    OscillationPattern {
        /// `0.5 * (1 + sin t)`.
        Sinusoidal => "sinusoidal",
        /// Linear ramp up then down once per cycle.
        Triangular => "triangular",
        /// State A for the first half cycle, state B for the second.
        Square => "square",
    }
}

taxonomy_id! {
    /// Canonical visual archetype used for prompt vocabulary (4 variants).
    VisualTypeId {
        /// Natural realism.
        NaturalRealism => "natural_realism",
        /// Glamour cascade.
        GlamourCascade => "glamour_cascade",
        /// Editorial sculpture.
        EditorialSculpture => "editorial_sculpture",
        /// Textured crown.
        TexturedCrown => "textured_crown",
    }
}
