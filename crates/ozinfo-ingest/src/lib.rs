//! Ozinfo ingestion utilities.
//!
//! This crate reads GSI ozinfo tables and discovers the GSI diagnostic files
//! that the generated YAML documents point at.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use ozinfo_ingest::{DiagListing, read_ozinfo};
//! use ozinfo_model::Loop;
//!
//! let table = read_ozinfo(Path::new("fix/global_ozinfo.txt"))?;
//! let listing = DiagListing::scan(Path::new("diags/2021010100"))?;
//! for sensor in table.unique_sensors() {
//!     if let Some(path) = listing.find(sensor, Loop::Ges, "2021010100") {
//!         println!("{}", path.display());
//!     }
//! }
//! ```

mod discovery;
mod error;
mod ozinfo;

// === Error Types ===
pub use error::{IngestError, Result};

// === Table Reading ===
pub use ozinfo::{COMMENT_MARKER, parse_ozinfo, read_ozinfo};

// === Diag Discovery ===
pub use discovery::{DIAG_PREFIX, DiagListing, derive_suffix, diag_file_name, list_diag_files};
