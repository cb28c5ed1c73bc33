//! Flow regime classification by Reynolds number.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper Reynolds number (inclusive) of the laminar regime.
pub const LAMINAR_LIMIT: f64 = 2000.0;

/// Lower Reynolds number (inclusive) of the turbulent regime.
pub const TURBULENT_LIMIT: f64 = 4000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Regime {
    Laminar,
    Transitional,
    Turbulent,
}

impl Regime {
    /// `Re <= 2000` laminar, `Re >= 4000` turbulent, transitional between.
    pub fn classify(reynolds: f64) -> Self {
        if reynolds >= TURBULENT_LIMIT {
            Regime::Turbulent
        } else if reynolds <= LAMINAR_LIMIT {
            Regime::Laminar
        } else {
            Regime::Transitional
        }
    }

    pub fn is_transitional(self) -> bool {
        self == Regime::Transitional
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Regime::Laminar => "laminar",
            Regime::Transitional => "transitional",
            Regime::Turbulent => "turbulent",
        };
        f.write_str(name)
    }
}
