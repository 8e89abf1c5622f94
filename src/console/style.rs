//! Terminal colours for console output

use crossterm::style::Stylize;

/// Visual role of a piece of console text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    /// Welcome banner
    Title,
    /// Sub-menu headings
    Heading,
    /// Bold labels ("Concept:", "Main Menu:")
    Strong,
    /// Result labels
    Success,
    Error,
    /// Usage notes
    Note,
    Disclaimer,
}

/// Apply `tone` to `text`, or return it untouched when colour is off
pub fn paint(text: &str, tone: Tone, color: bool) -> String {
    if !color {
        return text.to_string();
    }
    match tone {
        Tone::Plain => text.to_string(),
        Tone::Title => text.bold().underlined().green().to_string(),
        Tone::Heading => text.bold().underlined().to_string(),
        Tone::Strong => text.bold().to_string(),
        Tone::Success => text.bold().green().to_string(),
        Tone::Error => text.bold().red().to_string(),
        Tone::Note => text.bold().blue().to_string(),
        Tone::Disclaimer => text.bold().red().underlined().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_when_color_disabled() {
        assert_eq!(paint("Future Value:", Tone::Success, false), "Future Value:");
    }

    #[test]
    fn test_color_adds_escape_codes() {
        let painted = paint("oops", Tone::Error, true);
        assert!(painted.contains("oops"));
        assert!(painted.contains('\x1b'));
    }

    #[test]
    fn test_plain_tone_never_styled() {
        assert_eq!(paint("1. Annuity", Tone::Plain, true), "1. Annuity");
    }
}
