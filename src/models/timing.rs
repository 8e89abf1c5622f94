//! Payment timing conventions
//!
//! Annuities and perpetuities come in two flavours depending on whether each
//! payment lands at the end or the start of its period. Both enums are closed:
//! any other name is rejected when parsed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CalcError;

/// When annuity payments are made within each period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AnnuityTiming {
    /// Payments at the end of each period
    #[default]
    Ordinary,
    /// Payments at the beginning of each period
    Due,
}

impl AnnuityTiming {
    /// Map a sub-menu selection ("1" or "2") to a timing
    pub fn from_menu_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Self::Ordinary),
            "2" => Some(Self::Due),
            _ => None,
        }
    }

    /// Whether payments are shifted one period earlier than the ordinary case
    pub fn is_shifted(&self) -> bool {
        matches!(self, Self::Due)
    }
}

impl fmt::Display for AnnuityTiming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ordinary => write!(f, "ordinary"),
            Self::Due => write!(f, "due"),
        }
    }
}

impl FromStr for AnnuityTiming {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ordinary" | "end" => Ok(Self::Ordinary),
            "due" | "beginning" | "start" => Ok(Self::Due),
            _ => Err(CalcError::unknown_variant("annuity timing", s.trim())),
        }
    }
}

/// When perpetuity payments are made within each period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PerpetuityTiming {
    /// Payments at the end of each period
    #[default]
    Arrears,
    /// Payments at the beginning of each period
    Advance,
}

impl PerpetuityTiming {
    /// Map a sub-menu selection ("1" or "2") to a timing
    pub fn from_menu_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Self::Arrears),
            "2" => Some(Self::Advance),
            _ => None,
        }
    }

    pub fn is_shifted(&self) -> bool {
        matches!(self, Self::Advance)
    }
}

impl fmt::Display for PerpetuityTiming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arrears => write!(f, "arrears"),
            Self::Advance => write!(f, "advance"),
        }
    }
}

impl FromStr for PerpetuityTiming {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "arrears" | "end" => Ok(Self::Arrears),
            "advance" | "beginning" | "start" => Ok(Self::Advance),
            _ => Err(CalcError::unknown_variant("perpetuity timing", s.trim())),
        }
    }
}
