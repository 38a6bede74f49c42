//! Post-processor entry points.
//!
//! This module provides the [`BoxPostProcessor`] that the host build
//! pipeline configures once and then invokes for a finished artifact.

use super::checksum::calculate_sha256;
use crate::bundler::{
    BoxArtifact, BoxConfig, Result,
    artifact::{Artifact, Ui},
    error::ErrorExt,
    platform::virtualbox,
};
use serde_json::Value;
use std::path::Path;

/// Repackages VirtualBox artifacts as Vagrant boxes.
///
/// # Examples
///
/// ```no_run
/// use vagrant_box_bundler::bundler::{BoxPostProcessor, FileArtifact, Ui};
/// use serde_json::json;
///
/// struct Quiet;
/// impl Ui for Quiet {
///     fn message(&self, _text: &str) {}
/// }
///
/// # fn example() -> vagrant_box_bundler::bundler::Result<()> {
/// let mut processor = BoxPostProcessor::default();
/// processor.configure(&[json!({ "output": "{{.BuildName}}.box", "packer_build_name": "web" })])?;
///
/// let artifact = FileArtifact::new(
///     "mitchellh.virtualbox",
///     vec!["out/disk.vmdk".into(), "out/web.ovf".into()],
/// );
/// let (boxed, keep) = processor.post_process(&Quiet, &artifact)?;
/// assert!(!keep);
/// println!("{boxed}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct BoxPostProcessor {
    config: BoxConfig,
}

impl BoxPostProcessor {
    /// Creates a post-processor from an already built config.
    pub fn new(config: BoxConfig) -> Self {
        Self { config }
    }

    /// Merges settings bags into the current config.
    ///
    /// Later bags win on conflicting keys. On error the previous config is
    /// kept untouched.
    pub fn configure(&mut self, bags: &[Value]) -> Result<()> {
        self.config = self.config.merge(bags)?;
        Ok(())
    }

    /// Returns the active config.
    pub fn config(&self) -> &BoxConfig {
        &self.config
    }

    /// Turns `artifact` into a box.
    ///
    /// # Returns
    ///
    /// The box artifact and whether the input artifact should be kept,
    /// which is always `false`.
    pub fn post_process(&self, ui: &dyn Ui, artifact: &dyn Artifact) -> Result<(BoxArtifact, bool)> {
        log::info!(
            "Post-processing {} artifact into a {} box",
            artifact.builder_id(),
            virtualbox::PROVIDER
        );

        let path = virtualbox::bundle_project(&self.config, ui, artifact)?;

        let (size, checksum) = discard_on_error(&path, describe_box(&path))?;
        log::debug!("Box {} is {size} bytes, sha256 {checksum}", path.display());

        let boxed = BoxArtifact {
            provider: virtualbox::PROVIDER.to_string(),
            path,
            size,
            checksum,
        };

        Ok((boxed, false))
    }
}

/// Size and SHA-256 of a finished box.
fn describe_box(path: &Path) -> Result<(u64, String)> {
    let size = std::fs::metadata(path)
        .fs_context("reading box metadata", path)?
        .len();
    Ok((size, calculate_sha256(path)?))
}

/// Removes the box at `path` when `result` is an error.
fn discard_on_error<T>(path: &Path, result: Result<T>) -> Result<T> {
    if result.is_err() {
        if let Err(e) = std::fs::remove_file(path) {
            log::warn!("Failed to remove incomplete box {}: {e}", path.display());
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::Error;
    use tempfile::TempDir;

    #[test]
    fn failed_box_is_removed() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("web.box");
        std::fs::write(&path, "box").unwrap();

        let result: Result<()> = discard_on_error(&path, Err(Error::GenericError("hash".into())));

        assert!(matches!(result, Err(Error::GenericError(_))));
        assert!(!path.exists());
    }

    #[test]
    fn successful_box_is_kept() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("web.box");
        std::fs::write(&path, "box").unwrap();

        let (size, checksum) = discard_on_error(&path, describe_box(&path)).unwrap();

        assert_eq!(size, 3);
        assert_eq!(checksum.len(), 64);
        assert!(path.exists());
    }

    #[test]
    fn describing_missing_box_fails() {
        let temp = TempDir::new().unwrap();
        assert!(describe_box(&temp.path().join("gone.box")).is_err());
    }
}
