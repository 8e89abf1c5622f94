//! APR <=> EAR conversion sub-menu

use std::io::{BufRead, Write};

use super::{report, Session};
use crate::console::{Console, Tone};
use crate::display::{CalculationResult, ResultKind};
use crate::error::CalcResult;
use crate::formulas::rates::{self, RateDirection};
use crate::learning::Topic;
use crate::models::RateConversionParams;

/// Run the rate conversion sub-menu
pub fn run<R: BufRead, W: Write>(session: &Session, console: &mut Console<R, W>) -> CalcResult<()> {
    console.blank()?;
    console.styled(Tone::Heading, "APR/EAR Conversions")?;
    session.teach(console, Topic::AprAndEar)?;

    let direction = console.prompt_choice(
        &["APR -> EAR", "EAR -> APR"],
        "Select (1-2): ",
        "Invalid selection (1-2).",
        RateDirection::from_menu_choice,
    )?;

    let source = direction.source();
    let rate = console.prompt_number(&format!("Enter {} (decimal): ", source), source)?;
    let compounding = console.prompt_number("Enter compounding periods: ", "periods")?;

    let params = RateConversionParams::new(rate, compounding);
    let outcome = rates::convert(direction, &params).map(|value| {
        CalculationResult::new(direction.operation(), direction.target(), value, ResultKind::Rate)
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
    fn test_apr_to_ear() {
        let out = run_with("1\n0.12\n12\n");
        assert!(out.contains("Enter APR (decimal): "));
        assert!(out.contains("EAR: 0.1268 (12.68%)\n"));
    }

    #[test]
    fn test_ear_to_apr() {
        let out = run_with("2\n0.1268250301\n12\n");
        assert!(out.contains("APR: 0.1200 (12.00%)\n"));
    }

    #[test]
    fn test_integer_periods_required() {
        let out = run_with("1\n0.12\n12.5\n12\n");
        assert!(out.contains("Invalid input for periods. Please enter a valid whole number."));
        assert!(out.contains("EAR: 0.1268"));
    }

    #[test]
    fn test_zero_compounding() {
        let out = run_with("1\n0.12\n0\n");
        assert!(out.contains("compounding periods must not be zero"));
    }
}
