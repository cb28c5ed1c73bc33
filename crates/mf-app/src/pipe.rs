//! Pipe and fluid parameters, and the derived flow quantities.

use crate::error::AppResult;
use mf_core::units::{
    Accel, Area, Density, DynVisc, Length, Velocity, VolumeRate, ft_per_s2, gpm, inches,
    lbf_s_per_ft2, microinches, slug_per_ft3,
};
use mf_core::{ensure_finite, ensure_positive};
use serde::{Deserialize, Serialize};
use uom::si::{area::square_meter, velocity::meter_per_second};

/// Constant water properties used for every operating point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaterProperties {
    pub density: Density,
    pub viscosity: DynVisc,
    pub gravity: Accel,
}

impl Default for WaterProperties {
    fn default() -> Self {
        Self {
            density: slug_per_ft3(1.94),
            viscosity: lbf_s_per_ft2(2.34e-5),
            gravity: ft_per_s2(32.2),
        }
    }
}

/// What the user enters for one pipe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeInputs {
    /// Inner diameter
    pub diameter: Length,
    /// Absolute surface roughness
    pub roughness: Length,
    pub flow_rate: VolumeRate,
}

impl PipeInputs {
    /// Inches, micro-inches and US gallons per minute.
    pub fn from_field_units(diameter_in: f64, roughness_microin: f64, flow_gpm: f64) -> Self {
        Self {
            diameter: inches(diameter_in),
            roughness: microinches(roughness_microin),
            flow_rate: gpm(flow_gpm),
        }
    }
}

/// Quantities derived from [`PipeInputs`] for a given fluid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PipeFlow {
    /// Flow area, m²
    pub area_m2: f64,
    /// Mean velocity, m/s
    pub velocity_mps: f64,
    pub reynolds: f64,
    pub relative_roughness: f64,
}

impl PipeFlow {
    /// Rejects a zero, negative or non-finite diameter before anything is
    /// divided by it.
    pub fn from_inputs(inputs: &PipeInputs, water: &WaterProperties) -> AppResult<Self> {
        let d = ensure_positive(inputs.diameter.value, "pipe diameter")?;
        let eps = ensure_finite(inputs.roughness.value, "pipe roughness")?;
        let q = ensure_finite(inputs.flow_rate.value, "flow rate")?;

        let area = std::f64::consts::PI * d.powi(2) / 4.0;
        let velocity = q / area;
        let reynolds = water.density.value * velocity * d / water.viscosity.value;

        Ok(Self {
            area_m2: area,
            velocity_mps: velocity,
            reynolds,
            relative_roughness: eps / d,
        })
    }

    pub fn area(&self) -> Area {
        Area::new::<square_meter>(self.area_m2)
    }

    pub fn velocity(&self) -> Velocity {
        Velocity::new::<meter_per_second>(self.velocity_mps)
    }
}

/// Darcy-Weisbach head loss per unit length, `f V² / (2 g D)` (ft/ft).
pub fn head_loss_per_foot(
    friction_factor: f64,
    diameter: Length,
    velocity: Velocity,
    gravity: Accel,
) -> f64 {
    friction_factor * velocity.value.powi(2) / (2.0 * gravity.value * diameter.value)
}
