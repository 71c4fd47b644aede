//! YAML serialization and output paths.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use ozinfo_model::DiagnosticDocument;

use crate::error::{OutputError, Result};

/// Extension of every written document.
pub const YAML_EXTENSION: &str = "yaml";

/// Output path for the document describing `diag_path`.
///
/// The prefix is prepended verbatim (it may end in a directory separator or a
/// partial file name); the stem is the diag file name up to its first `.`.
pub fn output_path(prefix: &str, diag_path: &Path) -> PathBuf {
    let name = diag_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = name.split('.').next().unwrap_or_default();
    let mut path = OsString::from(prefix);
    path.push(format!("{stem}.{YAML_EXTENSION}"));
    PathBuf::from(path)
}

pub fn render_document(document: &DiagnosticDocument, sensor: &str) -> Result<String> {
    serde_yaml::to_string(document).map_err(|source| OutputError::Serialize {
        sensor: sensor.to_string(),
        source,
    })
}

/// Writes `document` to `path`, replacing any existing file.
pub fn write_document(document: &DiagnosticDocument, sensor: &str, path: &Path) -> Result<()> {
    let yaml = render_document(document, sensor)?;
    fs::write(path, yaml).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })
}
