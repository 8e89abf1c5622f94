//! Single cash flow time value of money
//!
//! FV = PV × (1 + r)^n, and the three rearrangements solving for PV, r and n.

use std::fmt;

use super::finite;
use crate::error::{CalcError, CalcResult};
use crate::models::CashFlowParams;

/// The quantity being solved for in a single cash flow problem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TvmQuantity {
    FutureValue,
    PresentValue,
    RequiredRate,
    RequiredTime,
}

impl TvmQuantity {
    /// All quantities in sub-menu order
    pub const ALL: [TvmQuantity; 4] = [
        Self::FutureValue,
        Self::PresentValue,
        Self::RequiredRate,
        Self::RequiredTime,
    ];

    /// Map a sub-menu selection ("1" to "4") to a quantity
    pub fn from_menu_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Self::FutureValue),
            "2" => Some(Self::PresentValue),
            "3" => Some(Self::RequiredRate),
            "4" => Some(Self::RequiredTime),
            _ => None,
        }
    }

    /// Menu and result label
    pub fn label(&self) -> &'static str {
        match self {
            Self::FutureValue => "Future Value",
            Self::PresentValue => "Present Value",
            Self::RequiredRate => "Required Rate",
            Self::RequiredTime => "Required Time",
        }
    }

    /// Machine-readable name used in JSON output
    pub fn operation(&self) -> &'static str {
        match self {
            Self::FutureValue => "future_value",
            Self::PresentValue => "present_value",
            Self::RequiredRate => "required_rate",
            Self::RequiredTime => "required_time",
        }
    }
}

impl fmt::Display for TvmQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// FV = PV × (1 + r)^n
pub fn future_value(pv: f64, rate: f64, periods: i32) -> CalcResult<f64> {
    finite("Future value", pv * (1.0 + rate).powi(periods))
}

/// PV = FV / (1 + r)^n
pub fn present_value(fv: f64, rate: f64, periods: i32) -> CalcResult<f64> {
    let growth = 1.0 + rate;
    if growth == 0.0 {
        return Err(CalcError::domain(
            "Present value",
            "rate of -1 leaves nothing to discount by",
        ));
    }
    finite("Present value", fv / growth.powi(periods))
}

/// r = (FV / PV)^(1/n) - 1
pub fn required_rate(pv: f64, fv: f64, periods: i32) -> CalcResult<f64> {
    const OP: &str = "Required rate";
    if pv == 0.0 {
        return Err(CalcError::domain(OP, "present value must not be zero"));
    }
    if periods == 0 {
        return Err(CalcError::domain(OP, "periods must not be zero"));
    }

    let ratio = fv / pv;
    if ratio < 0.0 && periods.unsigned_abs() != 1 {
        return Err(CalcError::domain(
            OP,
            "present and future value must have the same sign",
        ));
    }
    if ratio == 0.0 && periods < 0 {
        return Err(CalcError::domain(OP, "future value must not be zero"));
    }

    let growth = if periods.unsigned_abs() == 1 {
        ratio.powi(periods)
    } else {
        ratio.powf(1.0 / f64::from(periods))
    };
    finite(OP, growth - 1.0)
}

/// n = ln(FV / PV) / ln(1 + r)
pub fn required_time(pv: f64, fv: f64, rate: f64) -> CalcResult<f64> {
    const OP: &str = "Required time";
    if pv == 0.0 {
        return Err(CalcError::domain(OP, "present value must not be zero"));
    }
    let ratio = fv / pv;
    if ratio <= 0.0 {
        return Err(CalcError::domain(
            OP,
            "present and future value must be non-zero with the same sign",
        ));
    }
    if rate <= -1.0 {
        return Err(CalcError::domain(OP, "rate must be greater than -1"));
    }
    if rate == 0.0 {
        return Err(CalcError::domain(OP, "rate must not be zero"));
    }
    finite(OP, ratio.ln() / (1.0 + rate).ln())
}

/// Solve for `quantity` from whichever fields of `params` it needs
pub fn solve(quantity: TvmQuantity, params: &CashFlowParams) -> CalcResult<f64> {
    match quantity {
        TvmQuantity::FutureValue => future_value(
            field(params.present_value, "present value")?,
            field(params.rate, "rate")?,
            field(params.periods, "periods")?,
        ),
        TvmQuantity::PresentValue => present_value(
            field(params.future_value, "future value")?,
            field(params.rate, "rate")?,
            field(params.periods, "periods")?,
        ),
        TvmQuantity::RequiredRate => required_rate(
            field(params.present_value, "present value")?,
            field(params.future_value, "future value")?,
            field(params.periods, "periods")?,
        ),
        TvmQuantity::RequiredTime => required_time(
            field(params.present_value, "present value")?,
            field(params.future_value, "future value")?,
            field(params.rate, "rate")?,
        ),
    }
}

fn field<T>(value: Option<T>, name: &str) -> CalcResult<T> {
    value.ok_or_else(|| CalcError::domain("Time value of money", format!("missing {}", name)))
}
