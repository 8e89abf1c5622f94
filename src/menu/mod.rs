//! Interactive menu controller
//!
//! A main menu dispatching to four sub-menus. Each sub-menu collects its
//! inputs, optionally teaches the topic, runs one formula and prints one
//! result line before control returns to the main menu.

pub mod annuity;
pub mod controller;
pub mod perpetuity;
pub mod rates;
pub mod session;
pub mod tvm;

pub use controller::{Calculator, MenuState};
pub use session::Session;

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::console::{Console, Tone};
use crate::display::CalculationResult;
use crate::error::CalcResult;

/// Print a finished calculation, or explain why it could not run
///
/// Domain errors are shown to the user and swallowed so the session carries
/// on; anything else propagates.
pub(crate) fn report<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    outcome: CalcResult<CalculationResult>,
) -> CalcResult<()> {
    match outcome {
        Ok(result) => {
            debug!(operation = result.operation, value = result.value, "calculation complete");
            console.labelled(
                Tone::Success,
                &format!("{}:", result.label),
                &result.formatted_value(),
            )
        }
        Err(err) if err.is_domain() => {
            info!(error = %err, "calculation rejected");
            console.error(&format!("Calculation not possible for these inputs: {}", err))
        }
        Err(err) => Err(err),
    }
}
