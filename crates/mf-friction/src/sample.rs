use crate::engine::FrictionEngine;
use crate::error::FrictionResult;
use crate::regime::Regime;
use rand::Rng;
use serde::Serialize;

/// One evaluated operating point. Fields are private so a sample can only
/// come out of the engine and never changes afterwards. It serializes for
/// output but cannot be deserialized back into an unchecked sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FlowSample {
    reynolds: f64,
    relative_roughness: f64,
    friction_factor: f64,
    regime: Regime,
}

impl FlowSample {
    pub fn evaluate<R>(
        engine: &FrictionEngine,
        reynolds: f64,
        relative_roughness: f64,
        rng: &mut R,
    ) -> FrictionResult<Self>
    where
        R: Rng + ?Sized,
    {
        let (friction_factor, regime) =
            engine.regime_friction_factor(reynolds, relative_roughness, rng)?;
        Ok(Self {
            reynolds,
            relative_roughness,
            friction_factor,
            regime,
        })
    }

    pub fn reynolds(&self) -> f64 {
        self.reynolds
    }

    pub fn relative_roughness(&self) -> f64 {
        self.relative_roughness
    }

    pub fn friction_factor(&self) -> f64 {
        self.friction_factor
    }

    pub fn regime(&self) -> Regime {
        self.regime
    }
}
