// nf-core/src/units.rs

use uom::si::f64::{
    MassDensity as UomMassDensity, ThermodynamicTemperature as UomThermodynamicTemperature,
    Volume as UomVolume,
};

// Public canonical unit types (SI, f64)
pub type Density = UomMassDensity;
pub type Temperature = UomThermodynamicTemperature;
pub type Volume = UomVolume;

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

/// Temperature in units of 10^9 K, the conventional scale for nuclear burning.
#[inline]
pub fn t9(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::gigakelvin;
    Temperature::new::<gigakelvin>(v)
}

#[inline]
pub fn g_per_cm3(v: f64) -> Density {
    use uom::si::mass_density::gram_per_cubic_centimeter;
    Density::new::<gram_per_cubic_centimeter>(v)
}

#[inline]
pub fn cm3(v: f64) -> Volume {
    use uom::si::volume::cubic_centimeter;
    Volume::new::<cubic_centimeter>(v)
}
