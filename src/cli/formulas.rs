//! Formula reference sheet
//!
//! `fincalc formulas` prints every learning-mode lesson in one go.

use std::io::Write;

use crate::console::{paint, Tone};
use crate::display::lesson_lines;
use crate::error::CalcResult;
use crate::learning::Topic;

/// Handle the formulas command
pub fn handle_formulas_command<W: Write>(out: &mut W, color: bool) -> CalcResult<()> {
    writeln!(out, "{}", paint("Formula Reference", Tone::Title, color))?;

    for topic in Topic::ALL {
        writeln!(out)?;
        writeln!(out, "{}", paint(&topic.to_string(), Tone::Heading, color))?;
        for (label, text) in lesson_lines(&topic.lesson()) {
            writeln!(out, "  {} {}", paint(label, Tone::Strong, color), text)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_every_topic() {
        let mut out = Vec::new();
        handle_formulas_command(&mut out, false).unwrap();
        let text = String::from_utf8(out).unwrap();

        for topic in Topic::ALL {
            assert!(text.contains(&topic.to_string()), "missing {}", topic);
        }
        assert!(text.contains("  Formula: EAR = (1 + APR/m)^m - 1"));
        assert!(!text.contains('\x1b'));
    }
}
