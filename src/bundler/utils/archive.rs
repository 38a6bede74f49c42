//! Box archive creation.
//!
//! A box is a gzip-compressed tar of the staging directory. Entries are
//! written in sorted order with zeroed timestamps and ownership so the same
//! input always yields the same bytes.

use crate::bundler::error::{Error, ErrorExt, Result};
use flate2::{Compression, write::GzEncoder};
use std::{
    fs::{self, File},
    io,
    path::{Path, PathBuf},
};
use tar::{Builder as TarBuilder, EntryType, Header};
use tempfile::NamedTempFile;
use walkdir::WalkDir;

/// Compresses `dir` into a box at `output`.
///
/// The archive is written to a temporary file next to `output` and renamed
/// into place once complete, so a failure never leaves a partial box behind.
pub fn dir_to_box(output: &Path, dir: &Path, level: u32) -> Result<()> {
    let parent = match output.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if !parent.is_dir() {
        return Err(Error::Fs {
            context: "box output directory does not exist".to_string(),
            path: parent.to_path_buf(),
            source: io::Error::new(io::ErrorKind::NotFound, "not a directory"),
        });
    }

    let tmp = NamedTempFile::new_in(parent).fs_context("creating temporary box file", parent)?;

    let encoder = GzEncoder::new(tmp, Compression::new(level));
    let mut builder = TarBuilder::new(encoder);
    append_dir(&mut builder, dir)?;

    let encoder = builder
        .into_inner()
        .fs_context("finalizing box archive", output)?;
    let tmp = encoder.finish().fs_context("compressing box", output)?;

    tmp.persist(output)
        .map_err(|e| e.error)
        .fs_context("moving box into place", output)?;

    log::debug!("Wrote box archive: {}", output.display());
    Ok(())
}

fn append_dir<W: io::Write>(builder: &mut TarBuilder<W>, dir: &Path) -> Result<()> {
    let mut entries: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(dir).follow_links(false) {
        let entry = entry
            .map_err(io::Error::from)
            .fs_context("walking staging directory", dir)?;
        if entry.path() != dir {
            entries.push(entry.into_path());
        }
    }
    entries.sort();

    for path in entries {
        let rel = path
            .strip_prefix(dir)
            .map_err(|e| Error::GenericError(format!("{path:?} escapes {dir:?}: {e}")))?
            .to_string_lossy()
            .replace('\\', "/");

        let md = fs::symlink_metadata(&path).fs_context("reading staged file metadata", &path)?;

        let mut header = Header::new_gnu();
        header.set_mtime(0);
        header.set_uid(0);
        header.set_gid(0);
        header.set_mode(mode_of(&md));

        if md.is_dir() {
            header.set_entry_type(EntryType::Directory);
            header.set_size(0);
            builder
                .append_data(&mut header, &rel, io::empty())
                .fs_context("archiving directory", &path)?;
        } else if md.is_file() {
            let mut f = File::open(&path).fs_context("opening staged file", &path)?;
            header.set_entry_type(EntryType::Regular);
            header.set_size(md.len());
            builder
                .append_data(&mut header, &rel, &mut f)
                .fs_context("archiving file", &path)?;
        } else {
            crate::bail!("unsupported file type in staging directory: {}", path.display());
        }
    }

    Ok(())
}

#[cfg(unix)]
fn mode_of(md: &fs::Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    md.permissions().mode() & 0o7777
}

#[cfg(not(unix))]
fn mode_of(md: &fs::Metadata) -> u32 {
    if md.is_dir() { 0o755 } else { 0o644 }
}
