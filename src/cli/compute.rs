//! One-shot calculations
//!
//! `fincalc compute <operation>` runs a single formula from named arguments and
//! prints the same result line as the interactive menu, or JSON.

use std::io::Write;

use clap::{Args, Subcommand, ValueEnum};
use tracing::debug;

use crate::display::{CalculationResult, ResultKind};
use crate::error::CalcResult;
use crate::formulas::{annuity, perpetuity, rates, tvm, RateDirection, TvmQuantity};
use crate::models::{
    AnnuityParams, AnnuityTiming, PerpetuityParams, PerpetuityTiming, RateConversionParams,
};

/// How a computed result is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// "Label: value" line
    Text,
    /// {"operation", "value", "kind"} object
    Json,
}

/// Arguments for `fincalc compute`
#[derive(Args, Debug)]
pub struct ComputeArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub operation: ComputeCommands,
}

/// Compute subcommands
#[derive(Subcommand, Debug)]
pub enum ComputeCommands {
    /// Future value of a single cash flow: PV × (1 + r)^n
    FutureValue {
        /// Present value
        #[arg(long, allow_negative_numbers = true)]
        pv: f64,
        /// Interest rate per period (decimal)
        #[arg(short, long, allow_negative_numbers = true)]
        rate: f64,
        /// Number of periods
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        periods: i32,
    },

    /// Present value of a single cash flow: FV / (1 + r)^n
    PresentValue {
        /// Future value
        #[arg(long, allow_negative_numbers = true)]
        fv: f64,
        /// Interest rate per period (decimal)
        #[arg(short, long, allow_negative_numbers = true)]
        rate: f64,
        /// Number of periods
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        periods: i32,
    },

    /// Rate needed to grow PV into FV over n periods
    RequiredRate {
        #[arg(long, allow_negative_numbers = true)]
        pv: f64,
        #[arg(long, allow_negative_numbers = true)]
        fv: f64,
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        periods: i32,
    },

    /// Periods needed to grow PV into FV at rate r
    RequiredTime {
        #[arg(long, allow_negative_numbers = true)]
        pv: f64,
        #[arg(long, allow_negative_numbers = true)]
        fv: f64,
        #[arg(short, long, allow_negative_numbers = true)]
        rate: f64,
    },

    /// Convert a nominal APR to an effective annual rate
    AprToEar {
        /// APR (decimal)
        #[arg(long, allow_negative_numbers = true)]
        apr: f64,
        /// Compounding periods per year
        #[arg(short = 'm', long, allow_negative_numbers = true)]
        compounding: i32,
    },

    /// Convert an effective annual rate to a nominal APR
    EarToApr {
        /// EAR (decimal)
        #[arg(long, allow_negative_numbers = true)]
        ear: f64,
        /// Compounding periods per year
        #[arg(short = 'm', long, allow_negative_numbers = true)]
        compounding: i32,
    },

    /// Present value of a level annuity
    AnnuityPv {
        #[arg(short, long, allow_negative_numbers = true)]
        rate: f64,
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        periods: i32,
        /// Payment per period
        #[arg(short, long, allow_negative_numbers = true)]
        payment: f64,
        /// "ordinary" (end of period) or "due" (beginning)
        #[arg(long, default_value = "ordinary")]
        timing: AnnuityTiming,
    },

    /// Future value of a level annuity
    AnnuityFv {
        #[arg(short, long, allow_negative_numbers = true)]
        rate: f64,
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        periods: i32,
        /// Payment per period
        #[arg(short, long, allow_negative_numbers = true)]
        payment: f64,
        /// "ordinary" (end of period) or "due" (beginning)
        #[arg(long, default_value = "ordinary")]
        timing: AnnuityTiming,
    },

    /// Present value of a level perpetuity
    PerpetuityPv {
        #[arg(short, long, allow_negative_numbers = true)]
        rate: f64,
        /// Payment per period
        #[arg(short, long, allow_negative_numbers = true)]
        payment: f64,
        /// "arrears" (end of period) or "advance" (beginning)
        #[arg(long, default_value = "arrears")]
        timing: PerpetuityTiming,
    },
}

impl ComputeCommands {
    /// Run the selected formula
    pub fn evaluate(&self) -> CalcResult<CalculationResult> {
        match *self {
            Self::FutureValue { pv, rate, periods } => {
                single(TvmQuantity::FutureValue, tvm::future_value(pv, rate, periods)?)
            }
            Self::PresentValue { fv, rate, periods } => {
                single(TvmQuantity::PresentValue, tvm::present_value(fv, rate, periods)?)
            }
            Self::RequiredRate { pv, fv, periods } => {
                single(TvmQuantity::RequiredRate, tvm::required_rate(pv, fv, periods)?)
            }
            Self::RequiredTime { pv, fv, rate } => {
                single(TvmQuantity::RequiredTime, tvm::required_time(pv, fv, rate)?)
            }
            Self::AprToEar { apr, compounding } => {
                conversion(RateDirection::AprToEar, RateConversionParams::new(apr, compounding))
            }
            Self::EarToApr { ear, compounding } => {
                conversion(RateDirection::EarToApr, RateConversionParams::new(ear, compounding))
            }
            Self::AnnuityPv {
                rate,
                periods,
                payment,
                timing,
            } => {
                let params = AnnuityParams::new(rate, periods, payment, timing);
                Ok(CalculationResult::new(
                    "annuity_pv",
                    "Present Value",
                    annuity::present_value(&params)?,
                    ResultKind::Amount,
                ))
            }
            Self::AnnuityFv {
                rate,
                periods,
                payment,
                timing,
            } => {
                let params = AnnuityParams::new(rate, periods, payment, timing);
                Ok(CalculationResult::new(
                    "annuity_fv",
                    "Future Value",
                    annuity::future_value(&params)?,
                    ResultKind::Amount,
                ))
            }
            Self::PerpetuityPv {
                rate,
                payment,
                timing,
            } => {
                let params = PerpetuityParams::new(rate, payment, timing);
                Ok(CalculationResult::new(
                    "perpetuity_pv",
                    "Present Value",
                    perpetuity::present_value(&params)?,
                    ResultKind::Amount,
                ))
            }
        }
    }
}

fn single(quantity: TvmQuantity, value: f64) -> CalcResult<CalculationResult> {
    let kind = match quantity {
        TvmQuantity::FutureValue | TvmQuantity::PresentValue => ResultKind::Amount,
        TvmQuantity::RequiredRate => ResultKind::Rate,
        TvmQuantity::RequiredTime => ResultKind::Periods,
    };
    Ok(CalculationResult::new(
        quantity.operation(),
        quantity.label(),
        value,
        kind,
    ))
}

fn conversion(
    direction: RateDirection,
    params: RateConversionParams,
) -> CalcResult<CalculationResult> {
    Ok(CalculationResult::new(
        direction.operation(),
        direction.target(),
        rates::convert(direction, &params)?,
        ResultKind::Rate,
    ))
}

/// Handle a compute command
pub fn handle_compute_command<W: Write>(args: &ComputeArgs, out: &mut W) -> CalcResult<()> {
    debug!(operation = ?args.operation, "running one-shot calculation");
    let result = args.operation.evaluate()?;

    match args.format {
        OutputFormat::Text => writeln!(out, "{}", result.to_line())?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&result)?)?,
    }
    Ok(())
}
