//! Command line argument parsing and validation.
//!
//! This module provides CLI argument parsing using clap, and turns the
//! parsed flags into the settings bags the post-processor consumes.

use clap::Parser;
use serde_json::{Map, Value};
use std::path::PathBuf;

/// Vagrant box bundler for VirtualBox artifacts
#[derive(Parser, Debug)]
#[command(
    name = "vagrant_box_bundler",
    version,
    about = "Repackages a VirtualBox OVF export as a Vagrant box",
    long_about = "Repackages a VirtualBox OVF export as a Vagrant box.

The OVF descriptor's slot-0 adapter MAC address is baked into a generated Vagrantfile,
the descriptor is renamed to box.ovf, and everything is archived as a gzipped tar.

Usage:
  vagrant_box_bundler -f out/disk.vmdk -f out/web.ovf -n web -o '{{.BuildName}}.box'
  vagrant_box_bundler -f out/web.ovf -f out/disk.vmdk -c box.toml

Exit code 0 = box guaranteed to exist at the printed path."
)]
pub struct Args {
    /// Artifact file; repeat for each file, in order
    #[arg(short = 'f', long = "file", value_name = "PATH", required = true)]
    pub files: Vec<PathBuf>,

    /// Output path template (variables: BuildName, Provider, ArtifactId)
    #[arg(short = 'o', long, value_name = "TEMPLATE")]
    pub output: Option<String>,

    /// Custom Vagrantfile template
    #[arg(short = 't', long, value_name = "PATH")]
    pub vagrantfile_template: Option<PathBuf>,

    /// Build name substituted into the output path
    #[arg(short = 'n', long, value_name = "NAME")]
    pub build_name: Option<String>,

    /// Settings file (TOML if it ends in .toml, JSON otherwise); repeatable
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub configs: Vec<PathBuf>,

    /// Builder id of the input artifact
    #[arg(long, value_name = "ID", default_value = "mitchellh.virtualbox")]
    pub builder_id: String,

    /// Gzip compression level, 0-9
    #[arg(long, value_name = "LEVEL")]
    pub compression_level: Option<u32>,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.files.iter().any(|f| f.as_os_str().is_empty()) {
            return Err("Artifact file paths cannot be empty".to_string());
        }

        if self.builder_id.is_empty() {
            return Err("Builder id cannot be empty".to_string());
        }

        Ok(())
    }

    /// Settings bag built from the flags that were actually given.
    ///
    /// Applied after any settings files, so flags override them.
    pub fn settings_bag(&self) -> Value {
        let mut bag = Map::new();
        if let Some(output) = &self.output {
            bag.insert("output".into(), Value::from(output.as_str()));
        }
        if let Some(template) = &self.vagrantfile_template {
            bag.insert(
                "vagrantfile_template".into(),
                Value::from(template.to_string_lossy().into_owned()),
            );
        }
        if let Some(name) = &self.build_name {
            bag.insert("packer_build_name".into(), Value::from(name.as_str()));
        }
        if let Some(level) = self.compression_level {
            bag.insert("compression_level".into(), Value::from(level));
        }
        Value::Object(bag)
    }
}
