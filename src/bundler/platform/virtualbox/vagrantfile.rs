//! Vagrantfile generation.
//!
//! Renders either the built-in template or a user-supplied one. The result
//! is rendered fully in memory first, so a bad template never leaves a
//! half-written Vagrantfile in the staging directory.

use super::template::DEFAULT_VAGRANTFILE;
use crate::bundler::{
    error::{Error, ErrorExt, Result},
    utils::template,
};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// File name Vagrant looks for inside a box.
pub const VAGRANTFILE: &str = "Vagrantfile";

/// Data available to Vagrantfile templates.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct VagrantfileTemplate {
    /// MAC address of adapter slot 0, as written in the descriptor.
    pub base_mac_address: String,
}

/// Loads the template body: the custom file if given, the default otherwise.
pub fn load_template(custom: Option<&Path>) -> Result<String> {
    match custom {
        Some(path) => std::fs::read_to_string(path).map_err(|e| {
            Error::Template(format!(
                "failed to read Vagrantfile template {}: {e}",
                path.display()
            ))
        }),
        None => Ok(DEFAULT_VAGRANTFILE.to_string()),
    }
}

/// Renders the Vagrantfile into `dir`, returning its path.
pub fn render_vagrantfile(
    dir: &Path,
    custom: Option<&Path>,
    data: &VagrantfileTemplate,
) -> Result<PathBuf> {
    let body = load_template(custom)?;
    let contents = template::render("vagrantfile", &body, data)?;

    let path = dir.join(VAGRANTFILE);
    std::fs::write(&path, contents).fs_context("writing Vagrantfile", &path)?;
    log::debug!("Rendered Vagrantfile: {}", path.display());
    Ok(path)
}
