//! Template rendering shared by the Vagrantfile and output-path templates.
//!
//! User templates are written with Go-style field references such as
//! `{{ .BaseMacAddress }}`. They are rewritten to Handlebars references
//! (`{{BaseMacAddress}}`) and rendered in strict mode, so referencing an
//! unknown variable is an error instead of an empty string.
//!
//! Backslashes in front of `{{` are literal text, as in Windows paths such
//! as `boxes\{{ .BuildName }}.box`. Handlebars would treat them as an escape,
//! so each such run gets one extra backslash before registering.

use crate::bundler::error::{Error, Result};
use handlebars::Handlebars;
use regex::Regex;
use serde::Serialize;

const FIELD_REFERENCE: &str = r"\{\{\s*\.([A-Za-z_][A-Za-z0-9_]*)\s*\}\}";

/// Run of backslashes directly in front of an opening `{{`.
const BACKSLASH_RUN: &str = r"(\\+)\{\{";

/// Rewrites `{{ .Field }}` references to `{{Field}}` and keeps backslashes
/// before `{{` literal.
pub fn normalize(source: &str) -> Result<String> {
    let fields = Regex::new(FIELD_REFERENCE)
        .map_err(|e| Error::GenericError(format!("invalid field pattern: {e}")))?;
    let backslashes = Regex::new(BACKSLASH_RUN)
        .map_err(|e| Error::GenericError(format!("invalid backslash pattern: {e}")))?;

    let source = fields.replace_all(source, "{{${1}}}");
    Ok(backslashes.replace_all(&source, r"\${1}{{").into_owned())
}

/// Renders `source` with `data`, without HTML escaping.
pub fn render<T: Serialize>(name: &str, source: &str, data: &T) -> Result<String> {
    let mut handlebars = Handlebars::new();
    handlebars.register_escape_fn(handlebars::no_escape);
    handlebars.set_strict_mode(true);

    handlebars
        .register_template_string(name, normalize(source)?)
        .map_err(|e| Error::Template(format!("failed to parse {name} template: {e}")))?;

    handlebars
        .render(name, data)
        .map_err(|e| Error::Template(format!("failed to render {name} template: {e}")))
}
