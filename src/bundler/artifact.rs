//! Artifacts flowing in and out of the post-processor.
//!
//! The host build pipeline hands us something implementing [`Artifact`] and
//! a [`Ui`] for progress text. We hand back a [`BoxArtifact`].

use super::error::{ErrorExt, Result};
use std::{
    fmt,
    path::{Path, PathBuf},
};

/// Builder id reported by boxes produced here.
pub const BUILDER_ID: &str = "mitchellh.post-processor.vagrant";

/// A build output: an ordered list of files plus identity tags.
pub trait Artifact {
    /// Tag of the builder that produced this artifact.
    fn builder_id(&self) -> &str;

    /// Identifier exposed to output-path templates as `ArtifactId`.
    fn id(&self) -> String;

    /// Absolute paths of the files making up the artifact, in order.
    fn files(&self) -> Vec<PathBuf>;
}

/// Fire-and-forget progress sink.
pub trait Ui {
    /// Show a progress message. Must not fail the pipeline.
    fn message(&self, text: &str);
}

/// Artifact backed by a plain list of files.
#[derive(Debug, Clone)]
pub struct FileArtifact {
    builder_id: String,
    files: Vec<PathBuf>,
}

impl FileArtifact {
    /// Creates an artifact from a builder id and its files.
    pub fn new(builder_id: impl Into<String>, files: Vec<PathBuf>) -> Self {
        Self {
            builder_id: builder_id.into(),
            files,
        }
    }
}

impl Artifact for FileArtifact {
    fn builder_id(&self) -> &str {
        &self.builder_id
    }

    fn id(&self) -> String {
        self.builder_id.clone()
    }

    fn files(&self) -> Vec<PathBuf> {
        self.files.clone()
    }
}

/// The finished box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxArtifact {
    /// Vagrant provider the box targets (always "virtualbox" here).
    pub provider: String,

    /// Location of the box archive.
    pub path: PathBuf,

    /// Archive size in bytes.
    pub size: u64,

    /// Hex-encoded SHA-256 of the archive.
    pub checksum: String,
}

impl BoxArtifact {
    /// Path of the box archive.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Removes the box archive from disk.
    pub fn destroy(&self) -> Result<()> {
        std::fs::remove_file(&self.path).fs_context("removing box", &self.path)
    }
}

impl Artifact for BoxArtifact {
    fn builder_id(&self) -> &str {
        BUILDER_ID
    }

    fn id(&self) -> String {
        self.provider.clone()
    }

    fn files(&self) -> Vec<PathBuf> {
        vec![self.path.clone()]
    }
}

impl fmt::Display for BoxArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' provider box: {}", self.provider, self.path.display())
    }
}
