//! Input validation
//!
//! Converts raw prompt text into typed values without touching the console.

pub mod validate;

pub use validate::{parse_number, parse_yes_no, NumericInput};
