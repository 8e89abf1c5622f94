//! Time value of money sub-menu (single cash flow)

use std::io::{BufRead, Write};

use super::{report, Session};
use crate::console::{Console, Tone};
use crate::display::{CalculationResult, ResultKind};
use crate::error::CalcResult;
use crate::formulas::tvm::{self, TvmQuantity};
use crate::learning::Topic;
use crate::models::CashFlowParams;

/// Run the single cash flow sub-menu
pub fn run<R: BufRead, W: Write>(session: &Session, console: &mut Console<R, W>) -> CalcResult<()> {
    console.blank()?;
    console.styled(Tone::Heading, "Time Value of Money")?;
    session.teach(console, Topic::TimeValueOfMoney)?;

    let options = TvmQuantity::ALL.map(|q| q.label());
    let quantity = console.prompt_choice(
        &options,
        "Select (1-4): ",
        "Invalid selection (1-4).",
        TvmQuantity::from_menu_choice,
    )?;

    let (params, kind) = match quantity {
        TvmQuantity::FutureValue => {
            session.teach(console, Topic::FutureValueSingle)?;
            let params = CashFlowParams {
                present_value: Some(console.prompt_number("Enter present value (PV): ", "PV")?),
                rate: Some(console.prompt_number("Enter interest rate (decimal): ", "rate")?),
                periods: Some(console.prompt_number("Enter periods (n): ", "periods")?),
                ..Default::default()
            };
            (params, ResultKind::Amount)
        }
        TvmQuantity::PresentValue => {
            session.teach(console, Topic::PresentValueSingle)?;
            let params = CashFlowParams {
                future_value: Some(console.prompt_number("Enter future value (FV): ", "FV")?),
                rate: Some(console.prompt_number("Enter interest rate (decimal): ", "rate")?),
                periods: Some(console.prompt_number("Enter periods (n): ", "periods")?),
                ..Default::default()
            };
            (params, ResultKind::Amount)
        }
        TvmQuantity::RequiredRate => {
            session.teach(console, Topic::RequiredRate)?;
            let params = CashFlowParams {
                present_value: Some(console.prompt_number("Enter PV: ", "PV")?),
                future_value: Some(console.prompt_number("Enter FV: ", "FV")?),
                periods: Some(console.prompt_number("Enter periods (n): ", "periods")?),
                ..Default::default()
            };
            (params, ResultKind::Rate)
        }
        TvmQuantity::RequiredTime => {
            session.teach(console, Topic::RequiredTime)?;
            let params = CashFlowParams {
                present_value: Some(console.prompt_number("Enter PV: ", "PV")?),
                future_value: Some(console.prompt_number("Enter FV: ", "FV")?),
                rate: Some(console.prompt_number("Enter rate (decimal): ", "rate")?),
                ..Default::default()
            };
            (params, ResultKind::Periods)
        }
    };

    let outcome = tvm::solve(quantity, &params).map(|value| {
        CalculationResult::new(quantity.operation(), quantity.label(), value, kind)
    });
    report(console, outcome)
}
