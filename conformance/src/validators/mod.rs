//! Validators grouped by what they inspect.

pub mod artifact;
pub mod morphospace;
pub mod taxonomy;
pub mod vocabulary;
