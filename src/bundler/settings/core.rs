//! Box configuration and settings-bag decoding.

use crate::bundler::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Gzip level used when none is configured (best compression).
pub const DEFAULT_COMPRESSION_LEVEL: u32 = 9;

/// Typed configuration for the VirtualBox box post-processor.
///
/// Decoded from one or more generic settings bags via [`BoxConfig::decode`],
/// or assembled with [`SettingsBuilder`](super::SettingsBuilder).
///
/// # Examples
///
/// ```
/// use vagrant_box_bundler::bundler::BoxConfig;
/// use serde_json::json;
///
/// let config = BoxConfig::decode(&[
///     json!({ "output": "{{.BuildName}}.box" }),
///     json!({ "packer_build_name": "web" }),
/// ]).unwrap();
///
/// assert_eq!(config.output_path(), "{{.BuildName}}.box");
/// assert_eq!(config.build_name(), "web");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxConfig {
    /// Output path template. Empty means the default naming scheme.
    #[serde(rename = "output")]
    pub(crate) output_path: String,

    /// Optional custom Vagrantfile template.
    ///
    /// An empty path is treated as unset.
    pub(crate) vagrantfile_template: Option<PathBuf>,

    /// Build name injected by the host pipeline.
    pub(crate) packer_build_name: String,

    /// Gzip compression level, 0-9.
    pub(crate) compression_level: u32,

    /// Parent directory for the staging directory.
    ///
    /// Default: system temp dir
    pub(crate) staging_root: Option<PathBuf>,
}

impl Default for BoxConfig {
    fn default() -> Self {
        Self {
            output_path: String::new(),
            vagrantfile_template: None,
            packer_build_name: String::new(),
            compression_level: DEFAULT_COMPRESSION_LEVEL,
            staging_root: None,
        }
    }
}

impl BoxConfig {
    /// Decodes settings bags into a config, last bag winning per key.
    ///
    /// Keys this post-processor does not know about are ignored, since the
    /// host pipeline mixes its own settings into the same bags.
    pub fn decode(bags: &[Value]) -> Result<Self> {
        let mut merged = Map::new();
        merge_bags(&mut merged, bags)?;
        Self::from_map(merged)
    }

    /// Applies further bags on top of this config.
    pub fn merge(&self, bags: &[Value]) -> Result<Self> {
        let mut merged = match serde_json::to_value(self)? {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        merge_bags(&mut merged, bags)?;
        Self::from_map(merged)
    }

    fn from_map(map: Map<String, Value>) -> Result<Self> {
        let config: Self = serde_json::from_value(Value::Object(map))
            .map_err(|e| Error::Configuration(format!("failed to decode settings: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.compression_level > 9 {
            return Err(Error::Configuration(format!(
                "compression_level must be between 0 and 9, got {}",
                self.compression_level
            )));
        }
        Ok(())
    }

    /// Output path template.
    pub fn output_path(&self) -> &str {
        &self.output_path
    }

    /// Custom Vagrantfile template, if one is configured.
    pub fn vagrantfile_template(&self) -> Option<&Path> {
        self.vagrantfile_template
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
    }

    /// Build name used in output path substitution.
    pub fn build_name(&self) -> &str {
        &self.packer_build_name
    }

    /// Gzip compression level.
    pub fn compression_level(&self) -> u32 {
        self.compression_level
    }

    /// Where staging directories are created, if not the system temp dir.
    pub fn staging_root(&self) -> Option<&Path> {
        self.staging_root.as_deref()
    }
}

fn merge_bags(into: &mut Map<String, Value>, bags: &[Value]) -> Result<()> {
    for (i, bag) in bags.iter().enumerate() {
        let Value::Object(map) = bag else {
            return Err(Error::Configuration(format!(
                "settings bag {i} is not a key/value mapping"
            )));
        };
        for (key, value) in map {
            into.insert(key.clone(), value.clone());
        }
    }
    Ok(())
}
