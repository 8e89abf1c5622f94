//! Runtime settings
//!
//! Collected once from command-line flags at startup. Nothing is read from or
//! written to disk.

/// User settings for a calculator run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Learning mode decided up front; `None` means ask at startup
    pub learning_mode: Option<bool>,

    /// Whether console output is coloured
    pub color: bool,

    /// Emit debug logging to stderr
    pub verbose: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            learning_mode: None,
            color: true,
            verbose: false,
        }
    }
}

impl Settings {
    /// Settings from the global command-line flags
    pub fn from_flags(learn: bool, no_color: bool, verbose: bool) -> Self {
        Self {
            learning_mode: learn.then_some(true),
            color: !no_color,
            verbose,
        }
    }

    /// Default `tracing` filter directive for these settings
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}
