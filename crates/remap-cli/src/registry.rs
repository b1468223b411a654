//! Registry of bundled example datasets.
//!
//! A registry is a JSON array of entries pairing a CSV file with the mapping
//! document that reshapes it. Paths are resolved relative to the registry
//! file so a registry directory can be moved as a unit.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// One example dataset: a CSV input and its mapping document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleEntry {
    pub id: String,
    pub name: String,
    pub description: String,
    pub csv_path: PathBuf,
    pub mapping_path: PathBuf,
}

/// The two files of an example, read verbatim.
pub struct ExamplePair {
    pub csv: String,
    pub mapping: String,
}

/// Read and deserialize a registry file.
pub fn load_registry(path: &Path) -> Result<Vec<ExampleEntry>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read registry {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("registry {} is not a valid entry list", path.display()))
}

/// Load both files of an entry, resolving paths against `base_dir`.
pub fn load_example(entry: &ExampleEntry, base_dir: &Path) -> Result<ExamplePair> {
    let csv_path = base_dir.join(&entry.csv_path);
    let mapping_path = base_dir.join(&entry.mapping_path);
    let csv = fs::read_to_string(&csv_path)
        .with_context(|| format!("failed to read example data {}", csv_path.display()))?;
    let mapping = fs::read_to_string(&mapping_path)
        .with_context(|| format!("failed to read example mapping {}", mapping_path.display()))?;
    Ok(ExamplePair { csv, mapping })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn registry_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("people.csv"), "name\nAlice").unwrap();
        fs::write(dir.path().join("people.json"), "{}").unwrap();
        let registry = dir.path().join("registry.json");
        fs::write(
            &registry,
            r#"[{
                "id": "people",
                "name": "People",
                "description": "A tiny roster",
                "csvPath": "people.csv",
                "mappingPath": "people.json"
            }]"#,
        )
        .unwrap();

        let entries = load_registry(&registry).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, "people");

        let pair = load_example(&entries[0], dir.path()).unwrap();
        assert_eq!(pair.csv, "name\nAlice");
        assert_eq!(pair.mapping, "{}");
    }

    #[test]
    fn missing_registry_is_an_error() {
        let error = load_registry(Path::new("/nonexistent/registry.json")).unwrap_err();
        assert!(error.to_string().contains("registry"));
    }
}
