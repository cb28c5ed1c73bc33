//! Number formatting for tick labels, legends and curve annotations.

use serde::{Deserialize, Serialize};

/// Scientific notation with a signed, at least two-digit exponent:
/// `format_sci(1e-6, 2) == "1.00e-06"`.
pub fn format_sci(value: f64, decimals: usize) -> String {
    let raw = format!("{value:.decimals$e}");
    match raw.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exp) => {
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{mantissa}e{sign}{:02}", exp.abs())
            }
            Err(_) => raw,
        },
        // inf / NaN have no exponent
        None => raw,
    }
}

/// How an axis renders its tick values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickFormat {
    /// Renderer default
    Auto,
    /// Fixed-point with the given number of decimals (`%.3f`)
    Fixed(usize),
    /// Scientific with the given number of mantissa decimals
    Scientific(usize),
}

impl TickFormat {
    pub fn apply(self, value: f64) -> String {
        match self {
            TickFormat::Auto => format!("{value}"),
            TickFormat::Fixed(decimals) => format!("{value:.decimals$}"),
            TickFormat::Scientific(decimals) => format_sci(value, decimals),
        }
    }
}
