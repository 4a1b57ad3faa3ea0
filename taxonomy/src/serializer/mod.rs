//! Serializers for the wig design taxonomy.
//!
//! - **JSON** ([`json`]): the discovery document, output to `public/wig.taxonomy.json`

pub mod json;
