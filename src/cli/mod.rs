//! Command line interface for the Vagrant box bundler.
//!
//! Parses arguments, layers settings files under flag values, and runs the
//! post-processor against a file-list artifact.

mod args;
mod output;

pub use args::Args;
pub use output::OutputManager;

use crate::bundler::{BoxPostProcessor, FileArtifact};
use crate::error::{CliError, Result};
use anyhow::Context as _;
use serde_json::Value;
use std::path::Path;

/// Main CLI entry point
pub fn run() -> Result<i32> {
    let args = Args::parse_args();
    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;

    let output = OutputManager::new(true, false);

    let mut bags = Vec::with_capacity(args.configs.len() + 1);
    for path in &args.configs {
        output.verbose(&format!("Loading settings: {}", path.display()))?;
        bags.push(load_settings_file(path)?);
    }
    bags.push(args.settings_bag());

    let mut processor = BoxPostProcessor::default();
    processor.configure(&bags)?;

    let artifact = FileArtifact::new(args.builder_id.clone(), args.files.clone());
    let (boxed, _keep_input) = processor.post_process(&output, &artifact)?;

    output.success(&boxed.to_string())?;
    output.verbose(&format!("size: {} bytes", boxed.size))?;
    output.verbose(&format!("sha256: {}", boxed.checksum))?;

    Ok(0)
}

/// Reads a settings bag from a TOML or JSON file.
pub fn load_settings_file(path: &Path) -> Result<Value> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("reading settings file {}", path.display()))?;

    let is_toml = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("toml"));

    let parsed = if is_toml {
        toml::from_str::<Value>(&contents).map_err(|e| e.to_string())
    } else {
        serde_json::from_str::<Value>(&contents).map_err(|e| e.to_string())
    };

    parsed.map_err(|reason| {
        CliError::SettingsFile {
            path: path.to_path_buf(),
            reason,
        }
        .into()
    })
}
