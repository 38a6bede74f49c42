//! Vagrant box bundling.
//!
//! Takes a finished VirtualBox export (an OVF descriptor and its disks) and
//! repackages it as a Vagrant box: the files are staged, a Vagrantfile
//! pinning the base MAC address is rendered, `metadata.json` is written,
//! the descriptor becomes `box.ovf`, and the lot is archived as a gzipped
//! tar.

pub mod artifact;
pub mod builder;
pub mod error;
pub mod platform;
pub mod settings;
pub mod utils;

pub use artifact::{Artifact, BoxArtifact, FileArtifact, Ui};
pub use builder::BoxPostProcessor;
pub use error::{Error, Result};
pub use settings::{BoxConfig, SettingsBuilder};
