//! Diagnostic YAML generation for ozinfo sensors.

pub mod builder;
pub mod error;
pub mod generate;
pub mod writer;

pub use builder::build_document;
pub use error::{OutputError, Result};
pub use generate::{GeneratedDocument, GenerationReport, generate_documents};
pub use writer::{YAML_EXTENSION, output_path, render_document, write_document};
