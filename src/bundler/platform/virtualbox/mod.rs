//! VirtualBox box creation.
//!
//! Turns a VirtualBox OVF export into a Vagrant box.
//!
//! # Module Organization
//!
//! - `ovf` - Base MAC extraction and `box.ovf` renaming
//! - `template` - Built-in Vagrantfile template
//! - `vagrantfile` - Vagrantfile rendering

pub mod ovf;
mod template;
pub mod vagrantfile;

pub use template::DEFAULT_VAGRANTFILE;
pub use vagrantfile::VagrantfileTemplate;

use crate::bundler::{
    artifact::{Artifact, Ui},
    error::Result,
    settings::BoxConfig,
    utils::{archive, fs::StagingDir, metadata, output_path},
};
use std::{collections::BTreeMap, path::PathBuf};

/// Vagrant provider name for boxes built here.
pub const PROVIDER: &str = "virtualbox";

/// Bundle a VirtualBox artifact as a Vagrant box.
///
/// # Process
///
/// 1. Read the base MAC address from the artifact's OVF
/// 2. Resolve the output path
/// 3. Copy the artifact files into a fresh staging directory
/// 4. Render the Vagrantfile
/// 5. Write `metadata.json`
/// 6. Rename the OVF to `box.ovf`
/// 7. Compress the staging directory into the box
///
/// The staging directory is removed when this returns, whatever the outcome.
///
/// # Returns
///
/// Path to the created box.
pub fn bundle_project(config: &BoxConfig, ui: &dyn Ui, artifact: &dyn Artifact) -> Result<PathBuf> {
    let files = artifact.files();

    let data = VagrantfileTemplate {
        base_mac_address: ovf::find_base_mac_address(&files)?,
    };

    let output = output_path::process_output_path(
        config.output_path(),
        config.build_name(),
        PROVIDER,
        artifact,
    )?;

    let staging = StagingDir::new(config.staging_root())?;
    staging.stage(&files, ui)?;

    vagrantfile::render_vagrantfile(staging.path(), config.vagrantfile_template(), &data)?;

    let box_metadata = BTreeMap::from([("provider".to_string(), PROVIDER.to_string())]);
    metadata::write_metadata(staging.path(), &box_metadata)?;

    ui.message("Renaming the OVF to box.ovf...");
    ovf::rename_ovf(staging.path())?;

    ui.message("Compressing box...");
    archive::dir_to_box(&output, staging.path(), config.compression_level())?;

    log::info!("✓ Created Vagrant box: {}", output.display());
    Ok(output)
}
