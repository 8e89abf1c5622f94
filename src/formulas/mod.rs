//! Closed-form time-value-of-money formulas
//!
//! Every function is pure: it takes validated numbers and returns either the
//! result or a domain error. Nothing here reads input or writes output.
//!
//! - `tvm`: single cash flow future/present value, required rate and time
//! - `rates`: APR <=> EAR conversion
//! - `annuity`: present/future value of ordinary annuities and annuities due
//! - `perpetuity`: present value of perpetuities in arrears or advance

pub mod annuity;
pub mod perpetuity;
pub mod rates;
pub mod tvm;

pub use rates::{apr_to_ear, ear_to_apr, RateDirection};
pub use tvm::TvmQuantity;

use crate::error::{CalcError, CalcResult};

/// Reject results that overflowed or otherwise left the real line
pub(crate) fn finite(operation: &'static str, value: f64) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::domain(
            operation,
            "result is too large or undefined for these inputs",
        ))
    }
}

/// Move a stream of payments one period earlier.
///
/// Annuities due and perpetuities in advance are their end-of-period
/// counterparts multiplied by (1 + r).
pub(crate) fn shift_one_period(value: f64, rate: f64, shifted: bool) -> f64 {
    if shifted {
        value * (1.0 + rate)
    } else {
        value
    }
}

pub(crate) fn require_nonzero_rate(operation: &'static str, rate: f64) -> CalcResult<()> {
    if rate == 0.0 {
        return Err(CalcError::domain(operation, "rate must not be zero"));
    }
    Ok(())
}
