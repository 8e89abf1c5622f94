//! Core data models for the calculator
//!
//! Parameter sets consumed by the formula library and the closed timing
//! conventions for annuities and perpetuities.

pub mod params;
pub mod timing;

pub use params::{AnnuityParams, CashFlowParams, PerpetuityParams, RateConversionParams};
pub use timing::{AnnuityTiming, PerpetuityTiming};
