//! Display formatting for terminal output
//!
//! Provides number formatting for calculation results and the labelled lines
//! used to render learning-mode lessons.

pub mod result;

pub use result::{
    format_amount, format_periods, format_rate, format_value, CalculationResult, ResultKind,
};

use crate::learning::Lesson;

/// Label/text pairs for a lesson, concept first
pub fn lesson_lines(lesson: &Lesson) -> Vec<(&'static str, &'static str)> {
    let mut lines = Vec::with_capacity(2);
    if let Some(concept) = lesson.concept {
        lines.push(("Concept:", concept));
    }
    if let Some(formula) = lesson.formula {
        lines.push(("Formula:", formula));
    }
    lines
}
