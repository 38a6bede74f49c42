//! Box `metadata.json` writer.

use crate::bundler::error::{ErrorExt, Result};
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

/// File name Vagrant reads box metadata from.
pub const METADATA_FILE: &str = "metadata.json";

/// Serializes `metadata` as a JSON object into `dir/metadata.json`.
pub fn write_metadata(dir: &Path, metadata: &BTreeMap<String, String>) -> Result<PathBuf> {
    let path = dir.join(METADATA_FILE);
    let json = serde_json::to_vec(metadata)?;
    std::fs::write(&path, json).fs_context("writing box metadata", &path)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_provider_mapping() {
        let temp = TempDir::new().unwrap();
        let metadata = BTreeMap::from([("provider".to_string(), "virtualbox".to_string())]);

        let path = write_metadata(temp.path(), &metadata).unwrap();

        assert_eq!(path, temp.path().join("metadata.json"));
        let parsed: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(parsed, serde_json::json!({ "provider": "virtualbox" }));
    }

    #[test]
    fn fails_in_missing_directory() {
        let temp = TempDir::new().unwrap();
        let metadata = BTreeMap::new();
        assert!(write_metadata(&temp.path().join("missing"), &metadata).is_err());
    }
}
