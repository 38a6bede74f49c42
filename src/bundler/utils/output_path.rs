//! Output path templating.

use super::template;
use crate::bundler::{artifact::Artifact, error::Result};
use serde::Serialize;
use std::path::PathBuf;

/// Template used when no output path is configured.
pub const DEFAULT_OUTPUT_PATH: &str = "packer_{{ .BuildName }}_{{.Provider}}.box";

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct OutputPathTemplate<'a> {
    artifact_id: String,
    build_name: &'a str,
    provider: &'a str,
}

/// Computes the concrete box path from the configured template.
///
/// Available variables: `ArtifactId`, `BuildName`, `Provider`.
pub fn process_output_path(
    path_template: &str,
    build_name: &str,
    provider: &str,
    artifact: &dyn Artifact,
) -> Result<PathBuf> {
    let path_template = if path_template.is_empty() {
        DEFAULT_OUTPUT_PATH
    } else {
        path_template
    };

    let data = OutputPathTemplate {
        artifact_id: artifact.id(),
        build_name,
        provider,
    };

    let rendered = template::render("output", path_template, &data)?;
    Ok(PathBuf::from(rendered))
}
