//! Error types for ozinfo ingestion and diag file discovery.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading inputs.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Ozinfo file not found.
    #[error("ozinfo file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory not found or not a directory.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Diag Discovery Errors ===
    /// No `diag_*` file to derive the naming suffix from.
    #[error("no diag_* files found in {dir}")]
    NoDiagFiles { dir: PathBuf },

    /// Example diag file name has no `.`-separated suffix.
    #[error("cannot derive suffix from diag file name {name}")]
    MalformedDiagName { name: String },

    // === Table Errors ===
    /// Integer field could not be parsed.
    #[error("invalid {field} value '{value}' in {path} at line {line}")]
    InvalidValue {
        field: &'static str,
        value: String,
        path: PathBuf,
        line: u64,
    },

    /// Underlying CSV reader failed.
    #[error("failed to parse {path}: {message}")]
    CsvParse { path: PathBuf, message: String },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::NoDiagFiles {
            dir: PathBuf::from("/data/diags"),
        };
        assert_eq!(err.to_string(), "no diag_* files found in /data/diags");

        let err = IngestError::InvalidValue {
            field: "layer",
            value: "x".to_string(),
            path: PathBuf::from("ozinfo.txt"),
            line: 4,
        };
        assert_eq!(
            err.to_string(),
            "invalid layer value 'x' in ozinfo.txt at line 4"
        );
    }
}
