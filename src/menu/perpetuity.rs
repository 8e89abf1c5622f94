//! Perpetuity sub-menu

use std::io::{BufRead, Write};

use super::{report, Session};
use crate::console::{Console, Tone};
use crate::display::{CalculationResult, ResultKind};
use crate::error::CalcResult;
use crate::formulas::perpetuity;
use crate::learning::Topic;
use crate::models::{PerpetuityParams, PerpetuityTiming};

/// Run the perpetuity sub-menu
pub fn run<R: BufRead, W: Write>(session: &Session, console: &mut Console<R, W>) -> CalcResult<()> {
    console.blank()?;
    console.styled(Tone::Heading, "Perpetuity Calculations")?;
    session.teach(console, Topic::Perpetuity)?;

    let rate = console.prompt_number("Enter rate (decimal): ", "rate")?;
    let payment = console.prompt_number("Enter payment amount: ", "payment")?;
    let timing = console.prompt_choice(
        &["Arrears (end of period)", "Advance (beginning of period)"],
        "Select type (1-2): ",
        "Invalid selection (1-2).",
        PerpetuityTiming::from_menu_choice,
    )?;

    session.teach(console, Topic::PerpetuityPresentValue)?;
    let params = PerpetuityParams::new(rate, payment, timing);
    let outcome = perpetuity::present_value(&params).map(|pv| {
        CalculationResult::new("perpetuity_pv", "Present Value", pv, ResultKind::Amount)
    });
    report(console, outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_with(input: &str) -> String {
        let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), false);
        run(&Session::default(), &mut console).unwrap();
        String::from_utf8(console.into_writer()).unwrap()
    }

    #[test]
    fn test_arrears() {
        assert!(run_with("0.05\n10\n1\n").contains("Present Value: 200.00\n"));
    }

    #[test]
    fn test_advance() {
        assert!(run_with("0.05\n10\n2\n").contains("Present Value: 210.00\n"));
    }

    #[test]
    fn test_zero_rate() {
        let out = run_with("0\n10\n1\n");
        assert!(out.contains("rate must not be zero"));
        assert!(!out.contains("Present Value:"));
    }
}
