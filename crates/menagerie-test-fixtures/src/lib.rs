//! Shared JSON fixtures for menagerie integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use once_cell::sync::Lazy;

static ANIMALS_DOC: Lazy<serde_json::Value> = Lazy::new(|| {
    let raw = include_str!("../fixtures/animals.json");
    serde_json::from_str(raw).expect("animals fixture should parse")
});

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Read a fixture file by name, e.g. `"animals.json"`.
pub fn fixture(name: &str) -> Result<String> {
    let path = fixtures_root().join(name);
    fs::read_to_string(&path).with_context(|| format!("failed to read fixture at {}", path.display()))
}

/// The well-formed catalog document, as text.
pub fn animals_json() -> String {
    fixture("animals.json").expect("animals fixture present")
}

/// Document naming an animal kind no build supports.
pub fn animals_unknown_kind_json() -> String {
    fixture("animals_unknown_kind.json").expect("unknown-kind fixture present")
}

/// Truncated, syntactically invalid document.
pub fn animals_malformed_json() -> String {
    fixture("animals_malformed.json").expect("malformed fixture present")
}

/// Parsed view of the well-formed document, for tests asserting against the
/// raw entries rather than the loaded catalog.
pub fn animals_doc() -> &'static serde_json::Value {
    &ANIMALS_DOC
}
