//! Literal taxonomy tables.
//!
//! Each sub-module encodes one table as Rust static data. See
//! [`crate::Taxonomy::standard`] for the assembly order.

pub mod caps;
pub mod finishes;
pub mod morphospace;
pub mod styles;
pub mod textures;
