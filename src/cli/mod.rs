//! CLI command handlers
//!
//! Non-interactive commands, bridging clap argument parsing with the formula
//! library.

pub mod compute;
pub mod formulas;

pub use compute::{handle_compute_command, ComputeArgs, ComputeCommands, OutputFormat};
pub use formulas::handle_formulas_command;
