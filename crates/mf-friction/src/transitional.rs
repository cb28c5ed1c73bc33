//! Probabilistic friction factor in the laminar-turbulent transition.
//!
//! Between Re = 2000 and Re = 4000 the friction factor is not predicted
//! deterministically. Each evaluation draws once from a normal distribution
//! centred midway between the laminar value at Re = 2000 and the Colebrook
//! value at Re = 4000, with a standard deviation proportional to the mean.

use crate::error::{FrictionError, FrictionResult};
use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Redraws allowed before a non-positive sample is reported as an error.
const MAX_REDRAWS: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitionalDistribution {
    /// Colebrook friction factor at the turbulent boundary
    pub turbulent_bound: f64,
    /// Laminar friction factor at the laminar boundary
    pub laminar_bound: f64,
    pub mean: f64,
    pub std_dev: f64,
}

impl TransitionalDistribution {
    pub fn new(turbulent_bound: f64, laminar_bound: f64, spread: f64) -> Self {
        let mean = 0.5 * (turbulent_bound + laminar_bound);
        Self {
            turbulent_bound,
            laminar_bound,
            mean,
            std_dev: spread * mean,
        }
    }

    /// One draw from `Normal(mean, std_dev)`.
    ///
    /// A friction factor must stay positive; the rare draw at or below zero
    /// (more than five standard deviations out) is discarded and redrawn.
    pub fn sample<R>(&self, rng: &mut R) -> FrictionResult<f64>
    where
        R: Rng + ?Sized,
    {
        let normal = Normal::new(self.mean, self.std_dev).map_err(|e| FrictionError::Sampling {
            what: format!("Normal({}, {}): {e}", self.mean, self.std_dev),
        })?;

        for _ in 0..MAX_REDRAWS {
            let f = normal.sample(rng);
            if f > 0.0 {
                return Ok(f);
            }
            warn!(f, mean = self.mean, "discarding non-positive transitional draw");
        }

        Err(FrictionError::Sampling {
            what: format!("no positive draw from Normal({}, {})", self.mean, self.std_dev),
        })
    }
}
