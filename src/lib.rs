//! Vagrant box bundler library.
//!
//! Post-processes a VirtualBox build artifact (OVF descriptor plus disks)
//! into a Vagrant box:
//! - extracts the base MAC address from the OVF
//! - renders a Vagrantfile pinning that address
//! - writes `metadata.json` and renames the OVF to `box.ovf`
//! - archives the result deterministically as a gzipped tar
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod bundler;
pub mod cli;
pub mod error;

// Re-export commonly used types
pub use error::{BundlerError, CliError, Result};
