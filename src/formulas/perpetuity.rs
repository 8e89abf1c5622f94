//! Level perpetuities
//!
//! In arrears: PV = C / r. In advance the first payment arrives immediately,
//! giving PV = (C / r) × (1 + r).

use super::{finite, require_nonzero_rate, shift_one_period};
use crate::error::CalcResult;
use crate::models::PerpetuityParams;

/// Present value of a level perpetuity, in arrears or in advance
pub fn present_value(params: &PerpetuityParams) -> CalcResult<f64> {
    const OP: &str = "Perpetuity present value";
    require_nonzero_rate(OP, params.rate)?;

    let arrears = params.payment / params.rate;
    finite(
        OP,
        shift_one_period(arrears, params.rate, params.timing.is_shifted()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PerpetuityTiming;
    use approx::assert_relative_eq;

    #[test]
    fn test_arrears() {
        let pv = present_value(&PerpetuityParams::new(0.05, 10.0, PerpetuityTiming::Arrears));
        assert_relative_eq!(pv.unwrap(), 200.0, epsilon = 1e-9);
    }

    #[test]
    fn test_advance_adds_one_payment() {
        let pv = present_value(&PerpetuityParams::new(0.05, 10.0, PerpetuityTiming::Advance));
        assert_relative_eq!(pv.unwrap(), 210.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_rate_rejected() {
        let err = present_value(&PerpetuityParams::new(0.0, 10.0, PerpetuityTiming::Arrears))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Perpetuity present value: rate must not be zero"
        );
    }
}
