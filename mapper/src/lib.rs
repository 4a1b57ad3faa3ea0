//! Deterministic wig parameter to vocabulary mapping.
//!
//! `wig-mapper` validates a caller's wig description against the
//! [`wig_taxonomy`] tables, renders it into seven facet clauses and one
//! composite string, applies style presets, and drives the morphospace
//! operations (rhythmic sequences, visual vocabulary, prompts).
//!
//! Every operation is a pure function of its inputs and a borrowed
//! [`Taxonomy`](wig_taxonomy::Taxonomy); nothing is cached between calls.
//!
//! # Mapping
//!
//! ```
//! use wig_mapper::{ParameterMapper, ParameterRequest};
//! use wig_taxonomy::Taxonomy;
//!
//! let taxonomy = Taxonomy::standard();
//! let request = ParameterRequest::new("lace_front", "body_wave", 1.0, 16, "dark brown")
//!     .dimensional("balayage", 1.5)
//!     .layers(vec![12, 14]);
//! let result = ParameterMapper::new(taxonomy).map_request(&request)?;
//! assert!(result.composite_vocabulary.starts_with("invisible lace hairline transition"));
//! assert!(result.facets.length.ends_with("graduated layers at 14-inch, 12-inch"));
//! # Ok::<(), wig_mapper::ValidationError>(())
//! ```
//!
//! # Styles
//!
//! ```
//! use wig_mapper::{ParameterRequest, StyleApplier};
//! use wig_taxonomy::{EdgeTreatment, Taxonomy};
//!
//! let taxonomy = Taxonomy::standard();
//! let base = ParameterRequest::new("wefted", "straight", 0.8, 12, "black").validate(taxonomy)?;
//! let styled = StyleApplier::new(taxonomy).apply(&base, "cosplay")?;
//! assert_eq!(styled.density_profile(), 1.6);
//! assert_eq!(styled.edge_treatment(), EdgeTreatment::Clean);
//! # Ok::<(), wig_mapper::ValidationError>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod error;
pub mod info;
pub mod morph;
pub mod params;
pub mod request;
pub mod style;
pub mod vocabulary;

pub use error::{DecodeError, Error, ValidationError};
pub use info::{service_info, ServiceInfo};
pub use morph::sequence::SequenceRequest;
pub use morph::visual::{AttractorPrompt, PromptSource};
pub use morph::MorphEngine;
pub use params::WigParameters;
pub use request::{decode_layers, decode_volume_distribution, ParameterRequest, VolumeInput};
pub use style::{StyleApplier, StyledVocabulary};
pub use vocabulary::{Facet, FacetVocabulary, ParameterMapper, VocabularyResult};
