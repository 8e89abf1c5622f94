//! Annuity sub-menu

use std::io::{BufRead, Write};

use super::{report, Session};
use crate::console::{Console, Tone};
use crate::display::{CalculationResult, ResultKind};
use crate::error::CalcResult;
use crate::formulas::annuity;
use crate::learning::Topic;
use crate::models::{AnnuityParams, AnnuityTiming};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AnnuityValue {
    Present,
    Future,
}

impl AnnuityValue {
    fn from_menu_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Self::Present),
            "2" => Some(Self::Future),
            _ => None,
        }
    }
}

/// Run the annuity sub-menu
pub fn run<R: BufRead, W: Write>(session: &Session, console: &mut Console<R, W>) -> CalcResult<()> {
    console.blank()?;
    console.styled(Tone::Heading, "Annuity Calculations")?;
    session.teach(console, Topic::Annuity)?;

    let rate = console.prompt_number("Enter rate per period (decimal): ", "rate")?;
    let periods = console.prompt_number("Enter number of periods: ", "periods")?;
    let payment = console.prompt_number("Enter payment amount: ", "payment")?;

    let timing = console.prompt_choice(
        &["Ordinary (end of period)", "Due (beginning of period)"],
        "Select type (1-2): ",
        "Invalid selection (1-2).",
        AnnuityTiming::from_menu_choice,
    )?;
    let value = console.prompt_choice(
        &["Present Value", "Future Value"],
        "Select (1-2): ",
        "Invalid selection (1-2).",
        AnnuityValue::from_menu_choice,
    )?;

    let params = AnnuityParams::new(rate, periods, payment, timing);
    let outcome = match value {
        AnnuityValue::Present => {
            session.teach(console, Topic::AnnuityPresentValue)?;
            annuity::present_value(&params).map(|pv| {
                CalculationResult::new("annuity_pv", "Present Value", pv, ResultKind::Amount)
            })
        }
        AnnuityValue::Future => {
            session.teach(console, Topic::AnnuityFutureValue)?;
            annuity::future_value(&params).map(|fv| {
                CalculationResult::new("annuity_fv", "Future Value", fv, ResultKind::Amount)
            })
        }
    };
    report(console, outcome)
}
