//! Command-line interface definitions and helpers.
//!
//! This module contains all CLI argument parsing, enums, and subcommand handlers.

mod args;
mod commands;
mod enums;

pub use args::{Args, Command, ConfigAction, GridArgs, LayoutArgs, ScoreArgs, WordleArgs};
pub use commands::{
    grid_options, handle_config_action, load_config, run_grid, run_score, run_wordle,
    wordle_options,
};
pub use enums::{BorderColor, Format};
