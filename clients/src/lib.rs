//! Shared plumbing for the `wig-*` command-line clients.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Installs a stderr log subscriber filtered by `RUST_LOG` (default `warn`).
///
/// Stdout is reserved for command output.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Reads a document from `path`, or from stdin when `path` is `-`.
///
/// # Errors
///
/// Returns an error if the file or stdin cannot be read.
pub fn read_document(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read request from stdin")?;
        return Ok(buffer);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Renders `value` as JSON, pretty-printed when `pretty` is set.
///
/// # Errors
///
/// Returns an error if `value` cannot be serialized.
pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    rendered.context("Failed to serialize output")
}

/// Prints `value` as JSON on stdout.
///
/// # Errors
///
/// Returns an error if `value` cannot be serialized.
pub fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    println!("{}", to_json(value, pretty)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_and_pretty_output() -> Result<()> {
        let value = serde_json::json!({"a": 1});
        assert_eq!(to_json(&value, false)?, r#"{"a":1}"#);
        assert_eq!(to_json(&value, true)?, "{\n  \"a\": 1\n}");
        Ok(())
    }

    #[test]
    fn missing_file_has_context() {
        let err = read_document(Path::new("/nonexistent/wig-request.json")).err();
        assert!(err.is_some_and(|e| e.to_string().contains("wig-request.json")));
    }
}
