//! fincalc - interactive time-value-of-money calculator
//!
//! This library provides the core functionality for the `fincalc` command-line
//! calculator. It implements the standard closed-form formulas taught in
//! introductory financial mathematics, a menu-driven console front end, and an
//! optional learning mode that explains each formula before using it.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Settings collected from command-line flags
//! - `error`: Custom error types
//! - `models`: Parameter sets and payment timing conventions
//! - `formulas`: Single cash flow, APR/EAR, annuity and perpetuity formulas
//! - `input`: Pure parsing of typed console input
//! - `learning`: Learning-mode concept and formula text
//! - `display`: Result formatting
//! - `console`: Styled console I/O with retrying prompts
//! - `menu`: The interactive menu controller
//! - `cli`: Non-interactive `compute` and `formulas` commands
//!
//! # Example
//!
//! ```rust
//! use fincalc::formulas::annuity;
//! use fincalc::models::{AnnuityParams, AnnuityTiming};
//!
//! let params = AnnuityParams::new(0.06, 5, 1000.0, AnnuityTiming::Ordinary);
//! let pv = annuity::present_value(&params).unwrap();
//! assert!((pv - 4212.36).abs() < 0.01);
//! ```

pub mod cli;
pub mod config;
pub mod console;
pub mod display;
pub mod error;
pub mod formulas;
pub mod input;
pub mod learning;
pub mod menu;
pub mod models;

pub use error::{CalcError, CalcResult};
