//! CLI library components for ozinfo2yaml.

pub mod commands;
pub mod logging;
pub mod types;
