//! Filesystem, templating and archive helpers used by the box pipeline.

pub mod archive;
pub mod fs;
pub mod metadata;
pub mod output_path;
pub mod template;
