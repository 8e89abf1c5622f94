//! Parameter sets for the formula families
//!
//! These are transient values: built by a sub-menu or a `compute` command,
//! handed to the formula library, and dropped once the result is printed.

use serde::{Deserialize, Serialize};

use super::timing::{AnnuityTiming, PerpetuityTiming};

/// Inputs for single cash flow calculations
///
/// Only the fields relevant to the quantity being solved for are populated.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CashFlowParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub present_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub future_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub periods: Option<i32>,
}

/// Inputs for annuity calculations
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnuityParams {
    /// Rate per period, as a decimal
    pub rate: f64,
    /// Number of payments
    pub periods: i32,
    /// Payment per period
    pub payment: f64,
    #[serde(default)]
    pub timing: AnnuityTiming,
}

impl AnnuityParams {
    pub fn new(rate: f64, periods: i32, payment: f64, timing: AnnuityTiming) -> Self {
        Self {
            rate,
            periods,
            payment,
            timing,
        }
    }
}

/// Inputs for perpetuity calculations
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerpetuityParams {
    pub rate: f64,
    pub payment: f64,
    #[serde(default)]
    pub timing: PerpetuityTiming,
}

impl PerpetuityParams {
    pub fn new(rate: f64, payment: f64, timing: PerpetuityTiming) -> Self {
        Self {
            rate,
            payment,
            timing,
        }
    }
}

/// Inputs for APR/EAR conversion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateConversionParams {
    /// The rate being converted (APR or EAR, as a decimal)
    pub rate: f64,
    /// Compounding periods per year (m)
    pub compounding_periods_per_year: i32,
}

impl RateConversionParams {
    pub fn new(rate: f64, compounding_periods_per_year: i32) -> Self {
        Self {
            rate,
            compounding_periods_per_year,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cash_flow_params_skip_unset_fields() {
        let params = CashFlowParams {
            present_value: Some(1000.0),
            rate: Some(0.05),
            periods: Some(10),
            ..Default::default()
        };
        let json = serde_json::to_string(&params).unwrap();
        assert!(!json.contains("future_value"));
        assert!(json.contains("\"periods\":10"));
    }

    #[test]
    fn test_annuity_params_default_timing() {
        let params: AnnuityParams =
            serde_json::from_str(r#"{"rate":0.06,"periods":5,"payment":1000.0}"#).unwrap();
        assert_eq!(params.timing, AnnuityTiming::Ordinary);
    }

    #[test]
    fn test_perpetuity_params_rejects_unknown_timing() {
        let result: Result<PerpetuityParams, _> =
            serde_json::from_str(r#"{"rate":0.05,"payment":10.0,"timing":"due"}"#);
        assert!(result.is_err());
    }
}
