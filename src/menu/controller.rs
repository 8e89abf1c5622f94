//! Main menu orchestration
//!
//! Runs the welcome banner, the learning-mode question and the main menu
//! state machine until the user exits or input ends.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use super::{annuity, perpetuity, rates, tvm, Session};
use crate::config::Settings;
use crate::console::{Console, Tone};
use crate::error::{CalcError, CalcResult};
use crate::input::parse_yes_no;

const DISCLAIMER: &str =
    "DISCLAIMER: Please note that this program is not designed for professional financial advice.";

const MAIN_OPTIONS: [&str; 5] = [
    "Time Value of Money (Single Cash Flow)",
    "Annuity",
    "Perpetuity",
    "APR <=> EAR",
    "Exit",
];

/// Where the calculator is in its menu flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Main,
    Tvm,
    Annuity,
    Perpetuity,
    RateConversion,
    Exit,
}

impl MenuState {
    /// Map a main menu selection ("1" to "5") to the next state
    pub fn from_main_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Self::Tvm),
            "2" => Some(Self::Annuity),
            "3" => Some(Self::Perpetuity),
            "4" => Some(Self::RateConversion),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// The interactive calculator
pub struct Calculator<R, W> {
    console: Console<R, W>,
    settings: Settings,
}

impl<R: BufRead, W: Write> Calculator<R, W> {
    pub fn new(reader: R, writer: W, settings: Settings) -> Self {
        Self {
            console: Console::new(reader, writer, settings.color),
            settings,
        }
    }

    /// Run until the user picks Exit or input ends
    pub fn run(&mut self) -> CalcResult<()> {
        match self.run_session() {
            Err(CalcError::EndOfInput) => {
                info!("input closed, ending session");
                self.console.blank()
            }
            other => other,
        }
    }

    fn run_session(&mut self) -> CalcResult<()> {
        self.print_welcome()?;
        let session = self.start_session()?;

        let mut state = MenuState::Main;
        loop {
            debug!(?state, "entering menu state");
            state = match state {
                MenuState::Main => self.main_menu()?,
                MenuState::Tvm => {
                    tvm::run(&session, &mut self.console)?;
                    MenuState::Main
                }
                MenuState::Annuity => {
                    annuity::run(&session, &mut self.console)?;
                    MenuState::Main
                }
                MenuState::Perpetuity => {
                    perpetuity::run(&session, &mut self.console)?;
                    MenuState::Main
                }
                MenuState::RateConversion => {
                    rates::run(&session, &mut self.console)?;
                    MenuState::Main
                }
                MenuState::Exit => {
                    self.console.line("Thank you for using the Financial Calculator!")?;
                    self.print_disclaimer()?;
                    return Ok(());
                }
            };
        }
    }

    fn print_welcome(&mut self) -> CalcResult<()> {
        self.console.styled(Tone::Title, "Welcome to Financial Calculator!")?;
        self.console.blank()?;
        self.console.line(
            "This program helps you apply the core time-value-of-money formulas \
             from introductory financial mathematics.",
        )?;
        self.console.styled(
            Tone::Note,
            "N.B. Where applicable, input decimal for interest rate (e.g. 0.05 for 5%).",
        )?;
        self.console.blank()?;
        self.print_disclaimer()
    }

    fn print_disclaimer(&mut self) -> CalcResult<()> {
        self.console.styled(Tone::Disclaimer, DISCLAIMER)?;
        self.console.blank()
    }

    /// Decide learning mode once; it stays fixed for the whole run
    fn start_session(&mut self) -> CalcResult<Session> {
        let learning_mode = match self.settings.learning_mode {
            Some(preset) => preset,
            None => parse_yes_no(&self.console.prompt("Enable learning mode? (y/n): ")?),
        };
        let session = Session::new(learning_mode);
        self.console.line(if session.learning_mode() {
            "Learning mode enabled."
        } else {
            "Learning mode disabled."
        })?;
        info!(learning_mode = session.learning_mode(), "session started");
        Ok(session)
    }

    fn main_menu(&mut self) -> CalcResult<MenuState> {
        self.console.blank()?;
        self.console.styled(Tone::Strong, "Main Menu:")?;
        for (index, option) in MAIN_OPTIONS.iter().enumerate() {
            self.console.line(&format!("{}. {}", index + 1, option))?;
        }

        let choice = self.console.prompt("Choose (1-5): ")?;
        match MenuState::from_main_choice(&choice) {
            Some(next) => Ok(next),
            None => {
                debug!(choice = %choice, "rejected main menu selection");
                self.console.error("Invalid choice. Please select 1-5.")?;
                Ok(MenuState::Main)
            }
        }
    }

    pub fn into_writer(self) -> W {
        self.console.into_writer()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn plain() -> Settings {
        Settings {
            color: false,
            ..Settings::default()
        }
    }

    fn run_with(input: &str, settings: Settings) -> String {
        let mut calc = Calculator::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), settings);
        calc.run().unwrap();
        String::from_utf8(calc.into_writer()).unwrap()
    }

    #[test]
    fn test_main_choices() {
        assert_eq!(MenuState::from_main_choice("1"), Some(MenuState::Tvm));
        assert_eq!(MenuState::from_main_choice(" 4 "), Some(MenuState::RateConversion));
        assert_eq!(MenuState::from_main_choice("5"), Some(MenuState::Exit));
        assert_eq!(MenuState::from_main_choice("6"), None);
        assert_eq!(MenuState::from_main_choice("exit"), None);
    }

    #[test]
    fn test_exit_prints_farewell_and_disclaimer() {
        let out = run_with("n\n5\n", plain());
        assert!(out.starts_with("Welcome to Financial Calculator!\n"));
        assert!(out.contains("Learning mode disabled."));
        assert!(out.contains("Thank you for using the Financial Calculator!"));
        assert_eq!(out.matches(DISCLAIMER).count(), 2);
    }

    #[test]
    fn test_invalid_main_choice_redisplays_menu() {
        let out = run_with("n\n9\n\n5\n", plain());
        assert_eq!(out.matches("Invalid choice. Please select 1-5.").count(), 2);
        assert_eq!(out.matches("Main Menu:").count(), 3);
        assert!(out.contains("Thank you"));
    }

    #[test]
    fn test_sub_menu_returns_to_main_menu() {
        let out = run_with("n\n1\n1\n1000\n0.05\n10\n3\n0.05\n10\n1\n5\n", plain());
        assert!(out.contains("Future Value: 1628.89"));
        assert!(out.contains("Present Value: 200.00"));
        assert_eq!(out.matches("Main Menu:").count(), 3);
    }

    #[test]
    fn test_learning_mode_answer_is_case_insensitive() {
        let out = run_with("YES\n3\n0.05\n10\n1\n5\n", plain());
        assert!(out.contains("Learning mode enabled."));
        assert!(out.contains("Concept: A perpetuity is an infinite series"));
    }

    #[test]
    fn test_empty_learning_answer_means_no() {
        let out = run_with("\n5\n", plain());
        assert!(out.contains("Learning mode disabled."));
    }

    #[test]
    fn test_preset_learning_mode_skips_question() {
        let settings = Settings {
            learning_mode: Some(true),
            ..plain()
        };
        let out = run_with("5\n", settings);
        assert!(!out.contains("Enable learning mode?"));
        assert!(out.contains("Learning mode enabled."));
    }

    #[test]
    fn test_domain_error_returns_to_menu() {
        let out = run_with("n\n3\n0\n10\n2\n5\n", plain());
        assert!(out.contains("Calculation not possible for these inputs"));
        assert!(out.contains("Thank you"));
    }

    #[test]
    fn test_end_of_input_ends_quietly() {
        let out = run_with("n\n2\n0.06\n", plain());
        assert!(!out.contains("Thank you"));
    }

    #[test]
    fn test_colour_output_contains_escape_codes() {
        let out = run_with("n\n5\n", Settings::default());
        assert!(out.contains('\x1b'));
    }
}
