//! File system utilities for bundling.
//!
//! Provides the staging directory that a box is assembled in, plus the copy
//! helpers used to fill it.

use crate::bundler::{
    artifact::Ui,
    error::{Context, Error, ErrorExt, Result},
};
use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};
use tempfile::TempDir;

/// Prefix of every staging directory name.
const STAGING_PREFIX: &str = "packer";

/// Copies a regular file from one path to another.
///
/// Fails if the source path is a directory or doesn't exist.
pub fn copy_file(from: &Path, to: &Path) -> Result<()> {
    if !from.exists() {
        return Err(Error::GenericError(format!("{from:?} does not exist")));
    }
    if !from.is_file() {
        return Err(Error::GenericError(format!("{from:?} is not a file")));
    }
    fs::copy(from, to).fs_context("copying artifact file", from)?;
    Ok(())
}

/// Ephemeral directory a box is assembled in.
///
/// Each instance owns a uniquely named directory which is removed,
/// recursively, when the value is dropped.
#[derive(Debug)]
pub struct StagingDir {
    dir: TempDir,
}

impl StagingDir {
    /// Creates a fresh staging directory under `root`, or the system temp
    /// dir when `root` is `None`.
    pub fn new(root: Option<&Path>) -> Result<Self> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(STAGING_PREFIX);

        let dir = match root {
            Some(root) => builder
                .tempdir_in(root)
                .fs_context("creating staging directory", root)?,
            None => builder
                .tempdir()
                .fs_context("creating staging directory", std::env::temp_dir())?,
        };

        log::debug!("Staging directory: {}", dir.path().display());
        Ok(Self { dir })
    }

    /// Location of the staging directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Copies every file into the staging directory under its base name.
    ///
    /// Stops at the first failure. Duplicate base names overwrite earlier
    /// copies.
    pub fn stage(&self, files: &[PathBuf], ui: &dyn Ui) -> Result<()> {
        let mut seen = HashSet::new();

        for path in files {
            ui.message(&format!("Copying: {}", path.display()));

            let name = path
                .file_name()
                .with_context(|| format!("{path:?} has no file name"))?;
            if !seen.insert(name.to_os_string()) {
                log::warn!(
                    "Duplicate file name in artifact, overwriting: {}",
                    name.to_string_lossy()
                );
            }

            copy_file(path, &self.path().join(name))?;
        }

        Ok(())
    }
}
