//! Level annuities
//!
//! Ordinary annuity:
//!   PV = C × [1 - (1 + r)^-n] / r
//!   FV = C × [(1 + r)^n - 1] / r
//!
//! An annuity due pays each instalment one period earlier, so both values
//! are the ordinary ones multiplied by (1 + r).

use super::{finite, require_nonzero_rate, shift_one_period};
use crate::error::CalcResult;
use crate::models::AnnuityParams;

/// Present value of a level annuity, ordinary or due
pub fn present_value(params: &AnnuityParams) -> CalcResult<f64> {
    const OP: &str = "Annuity present value";
    let AnnuityParams {
        rate,
        periods,
        payment,
        timing,
    } = *params;
    require_nonzero_rate(OP, rate)?;

    let ordinary = payment * (1.0 - (1.0 + rate).powi(periods).recip()) / rate;
    finite(OP, shift_one_period(ordinary, rate, timing.is_shifted()))
}

/// Future value of a level annuity, ordinary or due
pub fn future_value(params: &AnnuityParams) -> CalcResult<f64> {
    const OP: &str = "Annuity future value";
    let AnnuityParams {
        rate,
        periods,
        payment,
        timing,
    } = *params;
    require_nonzero_rate(OP, rate)?;

    let ordinary = payment * ((1.0 + rate).powi(periods) - 1.0) / rate;
    finite(OP, shift_one_period(ordinary, rate, timing.is_shifted()))
}
