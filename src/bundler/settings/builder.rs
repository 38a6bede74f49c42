//! Builder for constructing [`BoxConfig`] in code.

use super::BoxConfig;
use std::path::{Path, PathBuf};

/// Fluent builder for [`BoxConfig`].
///
/// # Examples
///
/// ```
/// use vagrant_box_bundler::bundler::SettingsBuilder;
///
/// let config = SettingsBuilder::new()
///     .output("{{.BuildName}}.box")
///     .build_name("web")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.build_name(), "web");
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
    output: Option<String>,
    vagrantfile_template: Option<PathBuf>,
    build_name: Option<String>,
    compression_level: Option<u32>,
    staging_root: Option<PathBuf>,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the output path template.
    ///
    /// Default: `packer_{{ .BuildName }}_{{.Provider}}.box`
    pub fn output(mut self, template: impl Into<String>) -> Self {
        self.output = Some(template.into());
        self
    }

    /// Sets a custom Vagrantfile template file.
    pub fn vagrantfile_template<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.vagrantfile_template = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the build name.
    pub fn build_name(mut self, name: impl Into<String>) -> Self {
        self.build_name = Some(name.into());
        self
    }

    /// Sets the gzip compression level (0-9).
    pub fn compression_level(mut self, level: u32) -> Self {
        self.compression_level = Some(level);
        self
    }

    /// Sets the parent directory for staging directories.
    pub fn staging_root<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.staging_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Builds and validates the config.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an out-of-range compression level.
    pub fn build(self) -> crate::bundler::Result<BoxConfig> {
        let defaults = BoxConfig::default();
        let config = BoxConfig {
            output_path: self.output.unwrap_or(defaults.output_path),
            vagrantfile_template: self.vagrantfile_template,
            packer_build_name: self.build_name.unwrap_or(defaults.packer_build_name),
            compression_level: self.compression_level.unwrap_or(defaults.compression_level),
            staging_root: self.staging_root,
        };
        config.validate()?;
        Ok(config)
    }
}
