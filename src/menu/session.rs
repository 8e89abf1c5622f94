//! Per-run session context
//!
//! Created once after the startup question and passed by reference to every
//! sub-menu. It is never mutated afterwards.

use std::io::{BufRead, Write};

use crate::console::{Console, Tone};
use crate::display::lesson_lines;
use crate::error::CalcResult;
use crate::learning::Topic;

/// Session-wide options read by the sub-menus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Session {
    learning_mode: bool,
}

impl Session {
    /// Create a session with learning mode fixed for the run
    pub fn new(learning_mode: bool) -> Self {
        Self { learning_mode }
    }

    /// Whether lessons are shown before each calculation
    pub fn learning_mode(&self) -> bool {
        self.learning_mode
    }

    /// Print the lesson for `topic` when learning mode is on
    pub fn teach<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        topic: Topic,
    ) -> CalcResult<()> {
        if !self.learning_mode {
            return Ok(());
        }
        for (label, text) in lesson_lines(&topic.lesson()) {
            console.labelled(Tone::Strong, label, text)?;
        }
        Ok(())
    }
}
