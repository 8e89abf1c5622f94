//! Configuration module for the calculator
//!
//! Holds the settings chosen on the command line: learning mode preset,
//! colour output and log verbosity.

pub mod settings;

pub use settings::Settings;
