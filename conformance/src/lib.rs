//! Wig vocabulary conformance suite.
//!
//! Validates the fixed taxonomy tables, the mapper's output contract and the
//! JSON artifact written by `wig-build`. Each validator returns a
//! [`ConformanceReport`]; [`run_all`] concatenates them in a fixed order.
//!
//! | Validator | Checks |
//! |-----------|--------|
//! | `taxonomy/*` | table counts 7/8/5/4/5, unique ids, style ranges, texture scales |
//! | `morphospace/*` | counts 8/5/4, coordinate ranges, preset state references |
//! | `vocabulary/*` | golden composite, facet order, density identity, style clamping |
//! | `artifact/taxonomy` | `wig.taxonomy.json` version and table sizes |
//!
//! # Entry Point
//!
//! ```no_run
//! use wig_conformance::{run_all, WorkspacePaths};
//! use std::path::PathBuf;
//!
//! let paths = WorkspacePaths {
//!     artifacts: PathBuf::from("public"),
//! };
//! let report = run_all(&paths)?;
//! assert!(report.all_passed());
//! # Ok::<(), anyhow::Error>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod report;
pub mod validators;

pub use report::{ConformanceReport, Severity, TestResult};

/// Paths required by the conformance runner.
#[derive(Debug, Clone)]
pub struct WorkspacePaths {
    /// Directory containing built artifacts (`wig.taxonomy.json`).
    pub artifacts: std::path::PathBuf,
}

/// Runs every validator against the standard taxonomy.
///
/// Order: taxonomy tables, morphospace tables, vocabulary contract, artifact.
///
/// # Errors
///
/// Returns an error only if the artifact exists but cannot be read or parsed.
pub fn run_all(paths: &WorkspacePaths) -> anyhow::Result<ConformanceReport> {
    let taxonomy = wig_taxonomy::Taxonomy::standard();
    let mut report = ConformanceReport::new();

    report.extend(validators::taxonomy::validate(taxonomy));
    report.extend(validators::morphospace::validate(taxonomy));
    report.extend(validators::vocabulary::validate(taxonomy));
    report.extend(validators::artifact::validate(&paths.artifacts, taxonomy)?);

    Ok(report)
}
