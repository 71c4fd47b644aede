//! CLI argument definitions for ozinfo2yaml.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use colorchoice_clap::Color;

use ozinfo_model::{GenerateOptions, Loop, Variable};

#[derive(Parser)]
#[command(
    name = "ozinfo2yaml",
    version,
    about = "Generate diagnostic YAML from a GSI ozinfo file",
    long_about = "Given an input ozinfo GSI file and a path to GSI diags, generate\n\
                  one output YAML file per sensor for use by PyGSI."
)]
pub struct Cli {
    /// Path to GSI netCDF diags.
    #[arg(short = 'd', long = "diagdir", value_name = "DIR")]
    pub diagdir: PathBuf,

    /// Cycle YYYYMMDDHH.
    #[arg(short = 'c', long = "cycle")]
    pub cycle: String,

    /// Path to GSI ozinfo file.
    #[arg(short = 'i', long = "ozinfo", value_name = "PATH")]
    pub ozinfo: PathBuf,

    /// Output YAML path prefix, prepended to each file name.
    #[arg(short = 'y', long = "yaml", value_name = "PREFIX")]
    pub yaml: String,

    /// Guess or analysis?
    #[arg(short = 'l', long = "loop", value_enum, default_value = "ges")]
    pub outer_loop: LoopArg,

    /// Read departures, obs, or H(x).
    #[arg(short = 'v', long = "variable", value_enum, default_value = "omf")]
    pub variable: VariableArg,

    /// Include monitored obs.
    #[arg(short = 'm', long = "monitor")]
    pub monitor: bool,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides RUST_LOG).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn generate_options(&self) -> GenerateOptions {
        GenerateOptions::new(
            self.diagdir.clone(),
            self.cycle.clone(),
            self.ozinfo.clone(),
            self.yaml.clone(),
        )
        .with_loop(self.outer_loop.into())
        .with_variable(self.variable.into())
        .with_monitor(self.monitor)
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LoopArg {
    Ges,
    Anl,
}

impl From<LoopArg> for Loop {
    fn from(value: LoopArg) -> Self {
        match value {
            LoopArg::Ges => Loop::Ges,
            LoopArg::Anl => Loop::Anl,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum VariableArg {
    Omf,
    Obs,
    Hofx,
}

impl From<VariableArg> for Variable {
    fn from(value: VariableArg) -> Self {
        match value {
            VariableArg::Omf => Variable::Omf,
            VariableArg::Obs => Variable::Obs,
            VariableArg::Hofx => Variable::Hofx,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
