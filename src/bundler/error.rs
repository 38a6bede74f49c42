//! Error types for box bundling.
//!
//! Every pipeline stage surfaces its failures through [`Error`]. The
//! [`Context`] and [`ErrorExt`] traits attach human-readable context at the
//! call site, and [`bail!`](crate::bail) returns early with a formatted
//! [`Error::GenericError`].

use std::{
    fmt::Display,
    io,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Result type alias for bundler operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while turning an artifact into a box.
#[derive(Error, Debug)]
pub enum Error {
    /// Settings could not be decoded or failed validation.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// No descriptor file among the artifact files.
    #[error("{0}")]
    NotFound(String),

    /// Descriptor present but the hardware address could not be extracted.
    #[error("{0}")]
    Parse(String),

    /// More than one descriptor file ended up in the staging directory.
    #[error("{0}")]
    AmbiguousArtifact(String),

    /// Template unreadable, malformed, or failed to render.
    #[error("template error: {0}")]
    Template(String),

    /// Bare I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// I/O error tied to a filesystem path.
    #[error("{context} ({}): {source}", .path.display())]
    Fs {
        /// What was being attempted.
        context: String,
        /// Path involved.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },

    /// Metadata serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Anything else, usually raised through `bail!` or `context`.
    #[error("{0}")]
    GenericError(String),
}

impl Error {
    /// The underlying I/O error, if this is an I/O failure.
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            Error::IoError(e) => Some(e),
            Error::Fs { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Attaches a textual context to a failure.
pub trait Context<T> {
    /// Wrap the failure with `context`.
    fn context<C: Display>(self, context: C) -> Result<T>;

    /// Wrap the failure with a lazily built context.
    fn with_context<C: Display, F: FnOnce() -> C>(self, f: F) -> Result<T>;
}

impl<T, E: Display> Context<T> for std::result::Result<T, E> {
    fn context<C: Display>(self, context: C) -> Result<T> {
        self.map_err(|e| Error::GenericError(format!("{context}: {e}")))
    }

    fn with_context<C: Display, F: FnOnce() -> C>(self, f: F) -> Result<T> {
        self.map_err(|e| Error::GenericError(format!("{}: {e}", f())))
    }
}

impl<T> Context<T> for Option<T> {
    fn context<C: Display>(self, context: C) -> Result<T> {
        self.ok_or_else(|| Error::GenericError(context.to_string()))
    }

    fn with_context<C: Display, F: FnOnce() -> C>(self, f: F) -> Result<T> {
        self.ok_or_else(|| Error::GenericError(f().to_string()))
    }
}

/// Extension for I/O results that records the path being touched.
pub trait ErrorExt<T> {
    /// Convert an I/O failure into [`Error::Fs`].
    fn fs_context(self, context: &str, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, io::Error> {
    fn fs_context(self, context: &str, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|source| Error::Fs {
            context: context.to_string(),
            path: path.as_ref().to_path_buf(),
            source,
        })
    }
}

/// Return early with a formatted [`Error::GenericError`].
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::bundler::Error::GenericError(format!($($arg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fs_context_keeps_path_and_source() {
        let res: std::result::Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::NotFound, "gone"));
        let err = res.fs_context("reading descriptor", "/tmp/x.ovf").unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("reading descriptor"));
        assert!(msg.contains("/tmp/x.ovf"));
        assert_eq!(err.io_error().map(io::Error::kind), Some(io::ErrorKind::NotFound));
    }

    #[test]
    fn option_context_becomes_generic_error() {
        let none: Option<u8> = None;
        let err = none.context("missing value").unwrap_err();
        assert!(matches!(err, Error::GenericError(ref m) if m == "missing value"));
    }
}
