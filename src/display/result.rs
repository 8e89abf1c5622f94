//! Result formatting
//!
//! Amounts print with two decimals; rates with four decimals followed by the
//! percentage to two decimals.

use serde::Serialize;

/// What a computed number represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultKind {
    Amount,
    Rate,
    Periods,
}

/// A computed value ready for printing or serialization
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResult {
    /// Machine-readable operation name, e.g. "annuity_pv"
    pub operation: &'static str,
    /// Label shown before the value, e.g. "Present Value"
    #[serde(skip)]
    pub label: &'static str,
    pub value: f64,
    pub kind: ResultKind,
}

impl CalculationResult {
    pub fn new(operation: &'static str, label: &'static str, value: f64, kind: ResultKind) -> Self {
        Self {
            operation,
            label,
            value,
            kind,
        }
    }

    /// The value rendered according to its kind
    pub fn formatted_value(&self) -> String {
        format_value(self.kind, self.value)
    }

    /// "Label: value" as a single line
    pub fn to_line(&self) -> String {
        format!("{}: {}", self.label, self.formatted_value())
    }
}

/// Format a currency amount with two decimal places
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}

/// Format a decimal rate as "0.1268 (12.68%)"
pub fn format_rate(value: f64) -> String {
    format!("{:.4} ({:.2}%)", value, value * 100.0)
}

/// Format a number of periods
pub fn format_periods(value: f64) -> String {
    format!("{:.2} periods", value)
}

pub fn format_value(kind: ResultKind, value: f64) -> String {
    match kind {
        ResultKind::Amount => format_amount(value),
        ResultKind::Rate => format_rate(value),
        ResultKind::Periods => format_periods(value),
    }
}
