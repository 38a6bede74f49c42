//! Top-level error types for the command line tool.
//!
//! Wraps the bundler's own [`Error`](crate::bundler::Error) together with
//! failures that only happen around it: argument validation and loading
//! settings files.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, BundlerError>;

/// Main error type for all CLI operations
#[derive(Error, Debug)]
pub enum BundlerError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Bundler errors
    #[error("{0}")]
    Bundler(#[from] crate::bundler::Error),

    /// Generic errors from anyhow
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },

    /// A settings file could not be loaded
    #[error("Failed to load settings file {}: {reason}", .path.display())]
    SettingsFile {
        /// File that failed
        path: PathBuf,
        /// Reason for the error
        reason: String,
    },
}
