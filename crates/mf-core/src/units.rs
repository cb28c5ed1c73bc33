// mf-core/src/units.rs

use uom::si::f64::{
    Acceleration as UomAcceleration, Area as UomArea, DynamicViscosity as UomDynamicViscosity,
    Length as UomLength, MassDensity as UomMassDensity,
    Velocity as UomVelocity, VolumeRate as UomVolumeRate,
};

// Public canonical unit types (SI, f64)
pub type Accel = UomAcceleration;
pub type Area = UomArea;
pub type DynVisc = UomDynamicViscosity;
pub type Length = UomLength;
pub type Density = UomMassDensity;
pub type Velocity = UomVelocity;
pub type VolumeRate = UomVolumeRate;

#[inline]
pub fn inches(v: f64) -> Length {
    use uom::si::length::inch;
    Length::new::<inch>(v)
}

#[inline]
pub fn microinches(v: f64) -> Length {
    use uom::si::length::microinch;
    Length::new::<microinch>(v)
}

#[inline]
pub fn gpm(v: f64) -> VolumeRate {
    use uom::si::volume_rate::gallon_per_minute;
    VolumeRate::new::<gallon_per_minute>(v)
}

#[inline]
pub fn slug_per_ft3(v: f64) -> Density {
    use uom::si::mass_density::slug_per_cubic_foot;
    Density::new::<slug_per_cubic_foot>(v)
}

#[inline]
pub fn lbf_s_per_ft2(v: f64) -> DynVisc {
    use uom::si::dynamic_viscosity::pound_force_second_per_square_foot;
    DynVisc::new::<pound_force_second_per_square_foot>(v)
}

#[inline]
pub fn ft_per_s2(v: f64) -> Accel {
    use uom::si::acceleration::foot_per_second_squared;
    Accel::new::<foot_per_second_squared>(v)
}
