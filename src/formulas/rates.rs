//! APR <=> EAR conversion
//!
//! EAR = (1 + APR/m)^m - 1 and its inverse APR = ((1 + EAR)^(1/m) - 1) × m,
//! where m is the number of compounding periods per year.

use std::fmt;

use super::finite;
use crate::error::{CalcError, CalcResult};
use crate::models::RateConversionParams;

/// Which way a rate is being converted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateDirection {
    AprToEar,
    EarToApr,
}

impl RateDirection {
    /// Map a sub-menu selection ("1" or "2") to a direction
    pub fn from_menu_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Self::AprToEar),
            "2" => Some(Self::EarToApr),
            _ => None,
        }
    }

    /// Machine-readable name used in JSON output
    pub fn operation(&self) -> &'static str {
        match self {
            Self::AprToEar => "apr_to_ear",
            Self::EarToApr => "ear_to_apr",
        }
    }

    /// Short name of the input rate
    pub fn source(&self) -> &'static str {
        match self {
            Self::AprToEar => "APR",
            Self::EarToApr => "EAR",
        }
    }

    /// Short name of the converted rate
    pub fn target(&self) -> &'static str {
        match self {
            Self::AprToEar => "EAR",
            Self::EarToApr => "APR",
        }
    }
}

impl fmt::Display for RateDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source(), self.target())
    }
}

/// EAR = (1 + APR/m)^m - 1
pub fn apr_to_ear(apr: f64, compounding: i32) -> CalcResult<f64> {
    const OP: &str = "APR to EAR";
    if compounding == 0 {
        return Err(CalcError::domain(OP, "compounding periods must not be zero"));
    }
    let m = f64::from(compounding);
    finite(OP, (1.0 + apr / m).powi(compounding) - 1.0)
}

/// APR = ((1 + EAR)^(1/m) - 1) × m
pub fn ear_to_apr(ear: f64, compounding: i32) -> CalcResult<f64> {
    const OP: &str = "EAR to APR";
    if compounding == 0 {
        return Err(CalcError::domain(OP, "compounding periods must not be zero"));
    }
    let growth = 1.0 + ear;
    if growth < 0.0 {
        return Err(CalcError::domain(OP, "EAR must not be below -1"));
    }
    let m = f64::from(compounding);
    finite(OP, (growth.powf(1.0 / m) - 1.0) * m)
}

/// Convert `params.rate` in the given direction
pub fn convert(direction: RateDirection, params: &RateConversionParams) -> CalcResult<f64> {
    match direction {
        RateDirection::AprToEar => apr_to_ear(params.rate, params.compounding_periods_per_year),
        RateDirection::EarToApr => ear_to_apr(params.rate, params.compounding_periods_per_year),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_apr_to_ear_monthly() {
        let ear = apr_to_ear(0.12, 12).unwrap();
        assert_relative_eq!(ear, 0.126825030131, epsilon = 1e-10);
    }

    #[test]
    fn test_annual_compounding_is_identity() {
        assert_relative_eq!(apr_to_ear(0.08, 1).unwrap(), 0.08, epsilon = 1e-15);
        assert_relative_eq!(ear_to_apr(0.08, 1).unwrap(), 0.08, epsilon = 1e-15);
    }

    #[test]
    fn test_ear_to_apr_inverts() {
        let apr = ear_to_apr(0.126825030131, 12).unwrap();
        assert_relative_eq!(apr, 0.12, epsilon = 1e-10);
    }

    #[test]
    fn test_zero_compounding_rejected() {
        assert!(apr_to_ear(0.1, 0).unwrap_err().is_domain());
        assert!(ear_to_apr(0.1, 0).unwrap_err().is_domain());
    }

    #[test]
    fn test_ear_below_minus_one_rejected() {
        assert!(ear_to_apr(-1.5, 4).unwrap_err().is_domain());
    }

    #[test]
    fn test_convert_dispatches_on_direction() {
        let params = RateConversionParams::new(0.12, 12);
        let ear = convert(RateDirection::AprToEar, &params).unwrap();
        assert_relative_eq!(ear, apr_to_ear(0.12, 12).unwrap());
        assert_eq!(RateDirection::EarToApr.to_string(), "EAR -> APR");
    }
}
