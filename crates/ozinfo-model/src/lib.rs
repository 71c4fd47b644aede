//! Data model for ozinfo-driven YAML generation.

pub mod document;
pub mod options;
pub mod table;

pub use document::{Diagnostic, DiagnosticDocument, LayerDescriptor};
pub use options::{DataType, GenerateOptions, Loop, Variable};
pub use table::{
    ASSIMILATED_USAGE, Entry, MONITORED_USAGE, OzinfoTable, TOTAL_COLUMN_LAYER,
};
