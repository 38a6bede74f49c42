//! Box post-processing orchestration.
//!
//! [`BoxPostProcessor`] holds the decoded configuration and runs the
//! VirtualBox pipeline for one artifact at a time. Once the box is written
//! its size and SHA-256 are recorded on the returned [`BoxArtifact`].
//!
//! # Module Organization
//!
//! - [`checksum`] - SHA256 checksum calculation for boxes
//! - [`orchestrator`] - Main [`BoxPostProcessor`] struct
//!
//! [`BoxArtifact`]: crate::bundler::BoxArtifact

mod checksum;
mod orchestrator;

pub use checksum::calculate_sha256;
pub use orchestrator::BoxPostProcessor;
