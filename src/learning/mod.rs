//! Learning-mode content
//!
//! Static explanations shown before a calculation when learning mode is on.
//! Each topic maps to a concept statement, a symbolic formula, or both.

use serde::Serialize;
use std::fmt;

/// Subjects with learning-mode text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    TimeValueOfMoney,
    FutureValueSingle,
    PresentValueSingle,
    RequiredRate,
    RequiredTime,
    AprAndEar,
    Annuity,
    AnnuityPresentValue,
    AnnuityFutureValue,
    Perpetuity,
    PerpetuityPresentValue,
}

impl Topic {
    /// Every topic, in the order the reference sheet lists them
    pub const ALL: [Topic; 11] = [
        Self::TimeValueOfMoney,
        Self::FutureValueSingle,
        Self::PresentValueSingle,
        Self::RequiredRate,
        Self::RequiredTime,
        Self::AprAndEar,
        Self::Annuity,
        Self::AnnuityPresentValue,
        Self::AnnuityFutureValue,
        Self::Perpetuity,
        Self::PerpetuityPresentValue,
    ];

    pub fn lesson(&self) -> Lesson {
        lesson(*self)
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::TimeValueOfMoney => "Time value of money",
            Self::FutureValueSingle => "Future value (single cash flow)",
            Self::PresentValueSingle => "Present value (single cash flow)",
            Self::RequiredRate => "Required rate",
            Self::RequiredTime => "Required time",
            Self::AprAndEar => "APR and EAR",
            Self::Annuity => "Annuities",
            Self::AnnuityPresentValue => "Annuity present value",
            Self::AnnuityFutureValue => "Annuity future value",
            Self::Perpetuity => "Perpetuities",
            Self::PerpetuityPresentValue => "Perpetuity present value",
        };
        write!(f, "{}", name)
    }
}

/// Explanatory text for one topic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Lesson {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concept: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formula: Option<&'static str>,
}

impl Lesson {
    const fn concept(text: &'static str) -> Self {
        Self {
            concept: Some(text),
            formula: None,
        }
    }

    const fn formula(text: &'static str) -> Self {
        Self {
            concept: None,
            formula: Some(text),
        }
    }

    const fn both(concept: &'static str, formula: &'static str) -> Self {
        Self {
            concept: Some(concept),
            formula: Some(formula),
        }
    }
}

/// Look up the lesson for a topic
pub fn lesson(topic: Topic) -> Lesson {
    match topic {
        Topic::TimeValueOfMoney => Lesson::concept(
            "Interest changes what money is worth over time; present and future \
             values let you compare amounts that fall in different periods.",
        ),
        Topic::FutureValueSingle => Lesson::both(
            "A single lump sum grows over n periods at a given interest rate.",
            "FV = PV × (1 + r)^n",
        ),
        Topic::PresentValueSingle => Lesson::both(
            "A future amount is discounted back to today at the appropriate rate.",
            "PV = FV / (1 + r)^n",
        ),
        Topic::RequiredRate => Lesson::both(
            "The periodic rate at which a starting amount grows into a target \
             future value over n periods.",
            "r = (FV / PV)^(1/n) - 1",
        ),
        Topic::RequiredTime => Lesson::both(
            "The number of periods an investment needs to reach a target future \
             value at a given rate.",
            "n = ln(FV / PV) / ln(1 + r)",
        ),
        Topic::AprAndEar => Lesson::both(
            "APR is the nominal annual rate before compounding. EAR is the true \
             annual yield once interest compounds m times per year.",
            "EAR = (1 + APR/m)^m - 1; APR = ((1 + EAR)^(1/m) - 1) × m",
        ),
        Topic::Annuity => Lesson::concept(
            "A series of equal payments at regular intervals. An ordinary annuity \
             pays at the end of each period; an annuity due pays at the beginning.",
        ),
        Topic::AnnuityPresentValue => Lesson::formula(
            "PV = C × [1 - (1 + r)^-n] / r (multiply by (1 + r) for an annuity due)",
        ),
        Topic::AnnuityFutureValue => Lesson::formula(
            "FV = C × [(1 + r)^n - 1] / r (multiply by (1 + r) for an annuity due)",
        ),
        Topic::Perpetuity => Lesson::concept(
            "A perpetuity is an infinite series of equal payments, made either at \
             the end of each period (arrears) or at the beginning (advance).",
        ),
        Topic::PerpetuityPresentValue => {
            Lesson::formula("PV = C / r in arrears; PV = (C / r) × (1 + r) in advance")
        }
    }
}
