//! multimath command-line library
//!
//! Argument definitions, configuration and command handlers for the
//! `multimath` binary.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::format_push_string)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod config;
mod error;
pub mod handlers;
pub mod logging;
mod output;

pub use commands::{
    CalcArgs, Cli, ColorArg, Commands, FormatArg, OpArg, PopulationArgs, SessionArgs,
    SimulateArgs, SpaceArg,
};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use output::{
    render_frequency_table, render_json, render_layer, CalcReport, ErrorReport, OutputFormat,
    Reporter,
};
