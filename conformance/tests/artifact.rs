//! Runs the whole suite against a freshly written artifact.

use std::fs;

use wig_conformance::validators::artifact::ARTIFACT_FILE;
use wig_conformance::{run_all, Severity, WorkspacePaths};
use wig_taxonomy::serializer::json::to_json;
use wig_taxonomy::Taxonomy;

#[test]
fn suite_passes_on_built_artifact() -> anyhow::Result<()> {
    let artifacts = std::env::temp_dir().join(format!("wig-conformance-{}", std::process::id()));
    fs::create_dir_all(&artifacts)?;
    let document = serde_json::to_string_pretty(&to_json(Taxonomy::standard()))?;
    fs::write(artifacts.join(ARTIFACT_FILE), document)?;

    let report = run_all(&WorkspacePaths {
        artifacts: artifacts.clone(),
    })?;
    fs::remove_dir_all(&artifacts)?;

    let failures: Vec<String> = report
        .results
        .iter()
        .filter(|r| r.is_failure())
        .map(ToString::to_string)
        .collect();
    assert!(failures.is_empty(), "{failures:#?}");
    assert_eq!(report.count(Severity::Warning), 0);
    Ok(())
}

#[test]
fn unparsable_artifact_is_an_error() -> anyhow::Result<()> {
    let artifacts =
        std::env::temp_dir().join(format!("wig-conformance-bad-{}", std::process::id()));
    fs::create_dir_all(&artifacts)?;
    fs::write(artifacts.join(ARTIFACT_FILE), "{ not json")?;

    let outcome = run_all(&WorkspacePaths {
        artifacts: artifacts.clone(),
    });
    fs::remove_dir_all(&artifacts)?;
    assert!(outcome.is_err());
    Ok(())
}
